use crate::path::PathVariable;
use serde::Serialize;

/// Owned pointer back to the declaration a route was produced from.
///
/// Holds names only, so it stays valid after the syntax tree it came from is
/// dropped or reparsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SourceHandle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Qualified name of the enclosing type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
}

impl SourceHandle {
    /// Unqualified enclosing type name.
    #[must_use]
    pub fn simple_type_name(&self) -> Option<&str> {
        self.type_name
            .as_deref()
            .map(|t| t.rsplit('.').next().unwrap_or(t))
    }

    /// File name without directories.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file
            .as_deref()
            .map(|f| f.rsplit(['/', '\\']).next().unwrap_or(f))
    }
}

/// Which class, method and param fragment a route was combined from.
///
/// Indices are positions in each fragment list, so two routes from the same
/// occurrence always differ here even when their paths are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RouteOrigin {
    pub class_index: usize,
    pub method_index: usize,
    pub param_index: usize,
}

/// One HTTP route resolved from a mapping annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub http_method: String,
    pub full_path: String,
    /// The `params` constraint this route was produced for; `""` when unconstrained.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_variables: Vec<PathVariable>,
    pub source: SourceHandle,
    pub origin: RouteOrigin,
}

impl RouteDescriptor {
    /// `"<method> <path>"`, with ` [<params>]` appended for constrained routes.
    #[must_use]
    pub fn label(&self) -> String {
        if self.params.is_empty() {
            format!("{} {}", self.http_method, self.full_path)
        } else {
            format!("{} {} [{}]", self.http_method, self.full_path, self.params)
        }
    }

    #[must_use]
    pub fn variable_type(&self, name: &str) -> Option<&str> {
        self.path_variables
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.type_name.as_deref())
    }
}
