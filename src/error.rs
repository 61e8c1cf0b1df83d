use std::fmt;

/// Errors surfaced by [`crate::assembler::RouteAssembler::assemble`].
///
/// Unresolvable expressions and duplicate path-variable bindings are not
/// errors; they degrade to fallbacks instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The annotation sits somewhere routes cannot come from (e.g. on a type
    /// instead of a method). Callers should skip the occurrence and go on.
    MalformedTarget {
        /// Qualified name of the offending annotation
        annotation: String,
        /// Where it was found
        location: String,
        reason: &'static str,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MalformedTarget {
                annotation,
                location,
                reason,
            } => write!(f, "malformed target for @{annotation} at {location}: {reason}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl RouteError {
    /// Stable short name used as a scan issue kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::MalformedTarget { .. } => "MalformedTarget",
        }
    }
}
