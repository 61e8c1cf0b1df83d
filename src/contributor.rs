//! # Route Contributor
//!
//! Runs a whole scan: asks the discovery index for every configured mapping
//! annotation, assembles each occurrence, and keeps going past occurrences
//! that cannot produce routes.

use crate::assembler::RouteAssembler;
use crate::config::ScanConfig;
use crate::issues::ScanIssue;
use crate::route::RouteDescriptor;
use crate::syntax::{AnnotationIndex, SymbolTable};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything one scan produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub routes: Vec<RouteDescriptor>,
    pub issues: Vec<ScanIssue>,
}

/// Collect the routes of every configured kind found through `index`.
///
/// A type-level occurrence of the class mapping annotation is a prefix, not
/// a route, and is passed over silently. Any other occurrence that fails to
/// assemble is recorded in [`ScanReport::issues`] and skipped.
pub fn collect_routes<I, S>(index: &I, symbols: &S, config: &ScanConfig) -> ScanReport
where
    I: AnnotationIndex + ?Sized,
    S: SymbolTable + ?Sized,
{
    let assembler = RouteAssembler::new(symbols, config);
    let mut report = ScanReport::default();

    for kind in &config.kinds {
        let qualified_name = kind.qualified_name();
        let mut occurrences = 0usize;
        for site in index.occurrences(&qualified_name) {
            occurrences += 1;
            if site.method.is_none() && qualified_name == config.class_mapping_annotation {
                debug!(location = %site.location(), "Class-level mapping, used as prefix only");
                continue;
            }
            match assembler.assemble(&site, *kind) {
                Ok(routes) => report.routes.extend(routes),
                Err(err) => {
                    warn!(error = %err, "Skipping annotation occurrence");
                    report.issues.push(ScanIssue::from(&err));
                }
            }
        }
        debug!(kind = %kind, occurrences, "Scanned mapping annotation");
    }

    info!(
        routes = report.routes.len(),
        skipped = report.issues.len(),
        "Route scan complete"
    );
    report
}
