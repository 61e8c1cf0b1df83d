use crate::binder::{bind, ParameterBinding};
use crate::config::ScanConfig;
use crate::error::RouteError;
use crate::mapping::{normalize_verb, MappingAnnotationKind};
use crate::path::PathFragment;
use crate::resolve::{read_attribute, ExpressionResolver};
use crate::route::{RouteDescriptor, RouteOrigin};
use crate::syntax::{Annotation, AnnotationSite, SymbolTable, TypeDecl};
use http::Method;
use tracing::debug;

const PATH: &str = "path";
const VALUE: &str = "value";
const PARAMS: &str = "params";
const METHOD: &str = "method";

/// Builds route descriptors for mapping-annotation occurrences.
pub struct RouteAssembler<'a, S: SymbolTable + ?Sized> {
    resolver: ExpressionResolver<'a, S>,
    config: &'a ScanConfig,
}

impl<'a, S: SymbolTable + ?Sized> RouteAssembler<'a, S> {
    pub fn new(symbols: &'a S, config: &'a ScanConfig) -> Self {
        Self {
            resolver: ExpressionResolver::new(symbols),
            config,
        }
    }

    /// Assemble every route an occurrence of `kind` declares.
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedTarget`] when the annotation is not attached to
    /// a method.
    pub fn assemble(
        &self,
        site: &AnnotationSite<'_>,
        kind: MappingAnnotationKind,
    ) -> Result<Vec<RouteDescriptor>, RouteError> {
        let http_method = self.http_method(site.annotation, kind);
        self.assemble_with_method(site, &http_method)
    }

    /// Like [`RouteAssembler::assemble`] with the verb already decided.
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedTarget`] when the annotation is not attached to
    /// a method.
    pub fn assemble_with_method(
        &self,
        site: &AnnotationSite<'_>,
        http_method: &str,
    ) -> Result<Vec<RouteDescriptor>, RouteError> {
        let method = site.method.ok_or_else(|| RouteError::MalformedTarget {
            annotation: site.qualified_name().to_string(),
            location: site.location(),
            reason: "annotation is not attached to a method",
        })?;

        let binding = bind(
            &self.resolver,
            &method.parameters,
            &self.config.path_variable_annotation,
        );
        let class_paths = self.class_paths(site.owner, &binding);
        let method_paths = self.method_paths(site.annotation, &binding);
        let params = self.params(site.annotation);
        let source = site.source_handle();

        let mut routes =
            Vec::with_capacity(class_paths.len() * method_paths.len() * params.len());
        for (class_index, class) in class_paths.iter().enumerate() {
            for (method_index, method_path) in method_paths.iter().enumerate() {
                let joined = PathFragment::join(class, method_path);
                for (param_index, param) in params.iter().enumerate() {
                    routes.push(RouteDescriptor {
                        http_method: http_method.to_string(),
                        full_path: joined.to_full_path(),
                        params: param.clone(),
                        path_variables: joined.variables().to_vec(),
                        source: source.clone(),
                        origin: RouteOrigin {
                            class_index,
                            method_index,
                            param_index,
                        },
                    });
                }
            }
        }

        debug!(
            location = %site.location(),
            http_method,
            class_paths = class_paths.len(),
            method_paths = method_paths.len(),
            params = params.len(),
            routes = routes.len(),
            "Assembled routes"
        );
        Ok(routes)
    }

    /// The verb for an occurrence: fixed by the kind, or read from the
    /// generic mapping's `method` attribute (several verbs joined by `|`,
    /// none falling back to the configured wildcard).
    #[must_use]
    pub fn http_method(&self, annotation: &Annotation, kind: MappingAnnotationKind) -> String {
        if let Some(method) = kind.fixed_method() {
            return method.to_string();
        }
        let mut verbs: Vec<Method> = Vec::new();
        for value in read_attribute(&self.resolver, annotation, METHOD) {
            match normalize_verb(&value) {
                Some(verb) if !verbs.contains(&verb) => verbs.push(verb),
                Some(_) => {}
                None => debug!(value = %value, "Ignoring unrecognised request method"),
            }
        }
        if verbs.is_empty() {
            self.config.wildcard_method.clone()
        } else {
            verbs
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join("|")
        }
    }

    fn class_paths(
        &self,
        owner: Option<&TypeDecl>,
        binding: &ParameterBinding,
    ) -> Vec<PathFragment> {
        let paths: Vec<PathFragment> = owner
            .map(|decl| {
                decl.annotations
                    .iter()
                    .filter(|a| a.qualified_name == self.config.class_mapping_annotation)
                    .flat_map(|a| self.mapping_paths(a))
                    .map(|p| PathFragment::new(p).add_path_variables_types(binding))
                    .collect()
            })
            .unwrap_or_default();
        if paths.is_empty() {
            vec![PathFragment::empty()]
        } else {
            paths
        }
    }

    fn method_paths(
        &self,
        annotation: &Annotation,
        binding: &ParameterBinding,
    ) -> Vec<PathFragment> {
        self.mapping_paths(annotation)
            .into_iter()
            .map(|p| PathFragment::new(p).add_path_variables_types(binding))
            .collect()
    }

    /// `path`, else `value`, else a single empty path.
    fn mapping_paths(&self, annotation: &Annotation) -> Vec<String> {
        let paths = read_attribute(&self.resolver, annotation, PATH);
        if !paths.is_empty() {
            return paths;
        }
        let values = read_attribute(&self.resolver, annotation, VALUE);
        if !values.is_empty() {
            return values;
        }
        vec![String::new()]
    }

    fn params(&self, annotation: &Annotation) -> Vec<String> {
        let params = read_attribute(&self.resolver, annotation, PARAMS);
        if params.is_empty() {
            vec![String::new()]
        } else {
            params
        }
    }
}
