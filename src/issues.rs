use serde::Serialize;

/// An occurrence a scan had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ScanIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ScanIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::error::RouteError> for ScanIssue {
    fn from(err: &crate::error::RouteError) -> Self {
        match err {
            crate::error::RouteError::MalformedTarget { location, .. } => {
                ScanIssue::new(location.clone(), err.kind(), err.to_string())
            }
        }
    }
}

pub fn print_issues(issues: &[ScanIssue]) {
    eprintln!("\n⚠️  {} annotation occurrence(s) skipped:\n", issues.len());
    for issue in issues {
        eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
    }
    eprintln!();
}
