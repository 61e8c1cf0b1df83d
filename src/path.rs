//! # Path Module
//!
//! Route-path fragments as written in mapping annotations, the path variables
//! they declare, and the rule for joining a class-level prefix with a
//! method-level path.
//!
//! Variables are recognised in the `{name}` and `{name:regex}` forms. The
//! rendered path text is always the literal fragment text; a bound type is
//! metadata carried next to it.

use crate::binder::ParameterBinding;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Name of one balanced `{...}` span; the constraint after `:` may nest braces.
#[allow(clippy::expect_used)]
static PATH_VARIABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\{([^{}:/]+)(?::.*)?\}$").expect("path variable regex is valid")
});

/// A `{name}` placeholder and the declared type of the parameter bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathVariable {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathFragment {
    text: String,
    /// Unique by name, in order of first appearance.
    variables: Vec<PathVariable>,
}

impl PathFragment {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut variables: Vec<PathVariable> = Vec::new();
        for span in variable_spans(&text) {
            let Some(cap) = PATH_VARIABLE_REGEX.captures(span) else {
                continue;
            };
            let name = cap[1].trim();
            if !name.is_empty() && !variables.iter().any(|v| v.name == name) {
                variables.push(PathVariable {
                    name: name.to_string(),
                    type_name: None,
                });
            }
        }
        Self { text, variables }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn variables(&self) -> &[PathVariable] {
        &self.variables
    }

    #[must_use]
    pub fn variable_type(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.type_name.as_deref())
    }

    /// Attach the bound type to every variable that has a binding.
    /// Variables without one stay untyped.
    #[must_use]
    pub fn add_path_variables_types(mut self, bindings: &ParameterBinding) -> Self {
        for var in &mut self.variables {
            if let Some(type_name) = bindings.type_of(&var.name) {
                var.type_name = Some(type_name.to_string());
            }
        }
        self
    }

    /// The path text. Types never change it.
    #[must_use]
    pub fn to_full_path(&self) -> String {
        self.text.clone()
    }

    /// Join a class-level prefix with a method-level path.
    ///
    /// Empty fragments contribute nothing and two empty fragments join to
    /// `""`. Otherwise the result has a leading `/` and exactly one `/`
    /// between the prefix (trailing slashes trimmed) and the method path
    /// (leading slashes trimmed).
    #[must_use]
    pub fn join(class: &PathFragment, method: &PathFragment) -> PathFragment {
        let prefix = class.text.trim_end_matches('/');
        let suffix = method.text.trim_start_matches('/');

        let text = match (class.is_empty(), method.is_empty()) {
            (true, true) => String::new(),
            (true, false) => format!("/{suffix}"),
            (false, true) if prefix.is_empty() => "/".to_string(),
            (false, true) => with_leading_slash(prefix),
            (false, false) => {
                let mut out = if prefix.is_empty() {
                    String::new()
                } else {
                    with_leading_slash(prefix)
                };
                out.push('/');
                out.push_str(suffix);
                out
            }
        };

        let mut variables = class.variables.clone();
        for var in &method.variables {
            match variables.iter_mut().find(|v| v.name == var.name) {
                Some(existing) => *existing = var.clone(),
                None => variables.push(var.clone()),
            }
        }
        PathFragment { text, variables }
    }
}

/// Top-level `{...}` spans in order; an unclosed `{` ends the scan.
fn variable_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    spans.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    spans
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
