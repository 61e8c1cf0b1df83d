//! The closed set of mapping annotations the engine understands.

use http::Method;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PACKAGE: &str = "org.springframework.web.bind.annotation";

/// Class-scoped mapping annotation whose `path`/`value` prefixes every method route.
pub const REQUEST_MAPPING: &str = "org.springframework.web.bind.annotation.RequestMapping";
/// Parameter-level marker binding a parameter to a `{name}` path variable.
pub const PATH_VARIABLE: &str = "org.springframework.web.bind.annotation.PathVariable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingAnnotationKind {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// Generic mapping whose verb comes from its own `method` attribute.
    Request,
}

impl MappingAnnotationKind {
    pub const ALL: [MappingAnnotationKind; 6] = [
        MappingAnnotationKind::Get,
        MappingAnnotationKind::Post,
        MappingAnnotationKind::Put,
        MappingAnnotationKind::Delete,
        MappingAnnotationKind::Patch,
        MappingAnnotationKind::Request,
    ];

    /// Simple annotation name, e.g. `GetMapping`.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        match self {
            MappingAnnotationKind::Get => "GetMapping",
            MappingAnnotationKind::Post => "PostMapping",
            MappingAnnotationKind::Put => "PutMapping",
            MappingAnnotationKind::Delete => "DeleteMapping",
            MappingAnnotationKind::Patch => "PatchMapping",
            MappingAnnotationKind::Request => "RequestMapping",
        }
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{PACKAGE}.{}", self.simple_name())
    }

    #[must_use]
    pub fn from_qualified_name(name: &str) -> Option<Self> {
        let simple = name.strip_prefix(PACKAGE)?.strip_prefix('.')?;
        Self::ALL.into_iter().find(|k| k.simple_name() == simple)
    }

    /// The verb implied by the annotation itself; `None` for [`MappingAnnotationKind::Request`].
    #[must_use]
    pub fn fixed_method(&self) -> Option<Method> {
        match self {
            MappingAnnotationKind::Get => Some(Method::GET),
            MappingAnnotationKind::Post => Some(Method::POST),
            MappingAnnotationKind::Put => Some(Method::PUT),
            MappingAnnotationKind::Delete => Some(Method::DELETE),
            MappingAnnotationKind::Patch => Some(Method::PATCH),
            MappingAnnotationKind::Request => None,
        }
    }
}

impl fmt::Display for MappingAnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// Returned when a kind name is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKindError {
    pub name: String,
}

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mapping annotation kind '{}' (expected one of GetMapping, PostMapping, \
            PutMapping, DeleteMapping, PatchMapping, RequestMapping)",
            self.name
        )
    }
}

impl std::error::Error for UnknownKindError {}

impl FromStr for MappingAnnotationKind {
    type Err = UnknownKindError;

    /// Accepts the simple name (`GetMapping`), the qualified name, or the verb (`get`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_qualified_name(s) {
            return Ok(kind);
        }
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| {
                k.simple_name().eq_ignore_ascii_case(s)
                    || k.simple_name()
                        .strip_suffix("Mapping")
                        .map(|verb| verb.to_ascii_lowercase() == lower)
                        .unwrap_or(false)
            })
            .ok_or_else(|| UnknownKindError {
                name: s.to_string(),
            })
    }
}

impl Serialize for MappingAnnotationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.simple_name())
    }
}

impl<'de> Deserialize<'de> for MappingAnnotationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<MappingAnnotationKind>()
            .map_err(serde::de::Error::custom)
    }
}

/// Normalize one `method` attribute value (`RequestMethod.POST`, `post`) to a verb.
#[must_use]
pub fn normalize_verb(value: &str) -> Option<Method> {
    let token = value.rsplit('.').next().unwrap_or(value).trim();
    if token.is_empty() {
        return None;
    }
    Method::from_bytes(token.to_ascii_uppercase().as_bytes()).ok()
}
