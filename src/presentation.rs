//! # Presentation Module
//!
//! Display strings for a route list in a host tool: the route label and a
//! location label naming the declaring type and method, optionally grouped
//! by build module.

use crate::route::RouteDescriptor;
use crate::syntax::ModuleLocator;

const UNKNOWN_FILE: &str = "unknownFile";
const UNKNOWN_LOCATION: &str = "unknownLocation";

/// A resolved route wrapped for display and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteItem {
    route: RouteDescriptor,
}

impl RouteItem {
    pub fn new(route: RouteDescriptor) -> Self {
        Self { route }
    }

    #[must_use]
    pub fn route(&self) -> &RouteDescriptor {
        &self.route
    }

    #[must_use]
    pub fn presentable_text(&self) -> String {
        self.route.label()
    }

    /// `UserController.getUser (USERS)` for method routes, the type name for
    /// type routes.
    #[must_use]
    pub fn location_string(&self, modules: &dyn ModuleLocator) -> String {
        let source = &self.route.source;
        let owner = source.simple_type_name().or_else(|| source.file_name());

        match (&source.method_name, &source.type_name) {
            (Some(method), _) => format!(
                "{}.{}{}",
                owner.unwrap_or(UNKNOWN_FILE),
                method,
                self.module_suffix(modules)
            ),
            (None, Some(_)) => match owner {
                Some(name) => name.to_string(),
                None => format!("{UNKNOWN_FILE}{}", self.module_suffix(modules)),
            },
            (None, None) => UNKNOWN_LOCATION.to_string(),
        }
    }

    fn module_suffix(&self, modules: &dyn ModuleLocator) -> String {
        modules
            .module_name(&self.route.source)
            .and_then(|name| module_label(&name))
            .map(|label| format!(" ({label})"))
            .unwrap_or_default()
    }
}

/// Group label for a module name: the second-to-last `.` segment when there
/// are at least two, else the only segment, upper-cased.
#[must_use]
pub fn module_label(module_name: &str) -> Option<String> {
    if module_name.is_empty() {
        return None;
    }
    let names: Vec<&str> = module_name.split('.').collect();
    let pick = if names.len() >= 2 {
        names[names.len() - 2]
    } else {
        names[0]
    };
    Some(pick.to_uppercase())
}
