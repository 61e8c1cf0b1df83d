use super::types::{Annotation, ConstantDecl, MethodDecl, SymbolId, SyntaxTree, TypeDecl};
use crate::route::SourceHandle;

/// Declaration lookup the expression resolver dereferences through.
pub trait SymbolTable {
    fn constant(&self, id: &SymbolId) -> Option<&ConstantDecl>;
}

/// Discovery of annotation occurrences by qualified name.
///
/// Each call yields a fresh, finite sequence; callers must not expect to
/// restart it.
pub trait AnnotationIndex {
    fn occurrences<'a>(
        &'a self,
        qualified_name: &'a str,
    ) -> Box<dyn Iterator<Item = AnnotationSite<'a>> + 'a>;
}

/// Build-module metadata used only for grouping labels.
pub trait ModuleLocator {
    fn module_name(&self, handle: &SourceHandle) -> Option<String>;
}

/// A borrowed view of one annotation occurrence and the declarations around it.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationSite<'a> {
    pub annotation: &'a Annotation,
    /// Method the annotation is attached to; `None` for type-level annotations.
    pub method: Option<&'a MethodDecl>,
    pub owner: Option<&'a TypeDecl>,
    pub file: Option<&'a str>,
}

impl<'a> AnnotationSite<'a> {
    pub fn on_method(
        annotation: &'a Annotation,
        method: &'a MethodDecl,
        owner: Option<&'a TypeDecl>,
    ) -> Self {
        Self {
            annotation,
            method: Some(method),
            owner,
            file: None,
        }
    }

    pub fn on_type(annotation: &'a Annotation, owner: &'a TypeDecl) -> Self {
        Self {
            annotation,
            method: None,
            owner: Some(owner),
            file: None,
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: Option<&'a str>) -> Self {
        self.file = file;
        self
    }

    #[must_use]
    pub fn qualified_name(&self) -> &'a str {
        &self.annotation.qualified_name
    }

    /// Human-readable position used in logs and scan issues.
    #[must_use]
    pub fn location(&self) -> String {
        let owner = self.owner.map(|t| t.qualified_name.as_str());
        match (owner, self.method) {
            (Some(t), Some(m)) => format!("{t}#{}", m.name),
            (Some(t), None) => t.to_string(),
            (None, Some(m)) => m.name.clone(),
            (None, None) => self.file.unwrap_or("<unknown>").to_string(),
        }
    }

    #[must_use]
    pub fn source_handle(&self) -> SourceHandle {
        SourceHandle {
            file: self.file.map(str::to_string),
            type_name: self.owner.map(|t| t.qualified_name.clone()),
            method_name: self.method.map(|m| m.name.clone()),
        }
    }
}

impl SymbolTable for SyntaxTree {
    fn constant(&self, id: &SymbolId) -> Option<&ConstantDecl> {
        self.find_type(id.type_name())?.constant(id.field_name())
    }
}

impl AnnotationIndex for SyntaxTree {
    fn occurrences<'a>(
        &'a self,
        qualified_name: &'a str,
    ) -> Box<dyn Iterator<Item = AnnotationSite<'a>> + 'a> {
        Box::new(self.units.iter().flat_map(move |unit| {
            let file = unit.file.as_deref();
            unit.types.iter().flat_map(move |decl| {
                let on_type = decl
                    .annotations
                    .iter()
                    .filter(move |a| a.qualified_name == qualified_name)
                    .map(move |a| AnnotationSite::on_type(a, decl).with_file(file));
                let on_methods = decl.methods.iter().flat_map(move |m| {
                    m.annotations
                        .iter()
                        .filter(move |a| a.qualified_name == qualified_name)
                        .map(move |a| AnnotationSite::on_method(a, m, Some(decl)).with_file(file))
                });
                on_type.chain(on_methods)
            })
        }))
    }
}

impl ModuleLocator for SyntaxTree {
    fn module_name(&self, handle: &SourceHandle) -> Option<String> {
        let type_name = handle.type_name.as_deref()?;
        self.find_type(type_name)?.module.clone()
    }
}
