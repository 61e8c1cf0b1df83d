//! Path-variable bindings collected from a method's parameters.

use crate::resolve::ExpressionResolver;
use crate::syntax::{Annotation, ExpressionNode, Parameter, SymbolTable};
use std::collections::HashMap;

const VALUE: &str = "value";
const NAME: &str = "name";

/// Exposed path-variable name -> declared parameter type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBinding {
    types: HashMap<String, String>,
}

impl ParameterBinding {
    /// Insert a binding; a later insert for the same name replaces the earlier one.
    pub fn insert(&mut self, name: &str, type_name: &str) {
        self.types.insert(name.to_string(), type_name.to_string());
    }

    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Bind every parameter carrying `marker` to its declared type.
///
/// The exposed name is the marker's `value` attribute, else its `name`
/// attribute, else the parameter identifier. Duplicate names keep the last
/// parameter in declaration order.
pub fn bind<S: SymbolTable + ?Sized>(
    resolver: &ExpressionResolver<'_, S>,
    parameters: &[Parameter],
    marker: &str,
) -> ParameterBinding {
    let mut binding = ParameterBinding::default();
    for param in parameters {
        let Some(annotation) = param.annotation(marker) else {
            continue;
        };
        let name = exposed_name(resolver, annotation, &param.name);
        if binding.type_of(&name).is_some() {
            tracing::debug!(
                variable = %name,
                parameter = %param.name,
                "Path variable bound twice, keeping the later parameter"
            );
        }
        binding.insert(&name, &param.type_name);
    }
    binding
}

fn exposed_name<S: SymbolTable + ?Sized>(
    resolver: &ExpressionResolver<'_, S>,
    annotation: &Annotation,
    default: &str,
) -> String {
    [VALUE, NAME]
        .iter()
        .filter_map(|attr| annotation.attribute(attr))
        .filter_map(|node| resolve_name(resolver, node))
        .next()
        .unwrap_or_else(|| default.to_string())
}

/// Only literal and reference values name a variable; anything else is ignored.
fn resolve_name<S: SymbolTable + ?Sized>(
    resolver: &ExpressionResolver<'_, S>,
    node: &ExpressionNode,
) -> Option<String> {
    match node {
        ExpressionNode::Literal { .. } | ExpressionNode::Reference { .. } => {
            let name = resolver.resolve(node);
            (!name.trim().is_empty()).then_some(name)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ConstantDecl, SourceUnit, SymbolId, SyntaxTree, TypeDecl};

    const PATH_VARIABLE: &str = "org.springframework.web.bind.annotation.PathVariable";

    fn marker() -> Annotation {
        Annotation::new(PATH_VARIABLE)
    }

    #[test]
    fn test_unannotated_parameters_are_excluded() {
        let tree = SyntaxTree::default();
        let r = ExpressionResolver::new(&tree);
        let params = vec![
            Parameter::new("id", "Long").with_annotation(marker()),
            Parameter::new("body", "UserDto"),
        ];
        let binding = bind(&r, &params, PATH_VARIABLE);
        assert_eq!(binding.len(), 1);
        assert_eq!(binding.type_of("id"), Some("Long"));
        assert_eq!(binding.type_of("body"), None);
    }

    #[test]
    fn test_name_priority() {
        let tree = SyntaxTree::default();
        let r = ExpressionResolver::new(&tree);
        let params = vec![
            Parameter::new("a", "A").with_annotation(
                marker()
                    .with_attribute("value", ExpressionNode::string("fromValue"))
                    .with_attribute("name", ExpressionNode::string("fromName")),
            ),
            Parameter::new("b", "B").with_annotation(
                marker()
                    .with_attribute("value", ExpressionNode::string(""))
                    .with_attribute("name", ExpressionNode::string("fromName")),
            ),
            Parameter::new("c", "C")
                .with_annotation(marker().with_attribute("value", ExpressionNode::string("  "))),
        ];
        let binding = bind(&r, &params, PATH_VARIABLE);
        assert_eq!(binding.type_of("fromValue"), Some("A"));
        assert_eq!(binding.type_of("fromName"), Some("B"));
        assert_eq!(binding.type_of("c"), Some("C"));
    }

    #[test]
    fn test_name_from_constant() {
        let tree = SyntaxTree::new(vec![SourceUnit::new(None).with_type(
            TypeDecl::new("com.acme.Names")
                .with_constant(ConstantDecl::new("ID", Some(ExpressionNode::string("userId")))),
        )]);
        let r = ExpressionResolver::new(&tree);
        let params = vec![Parameter::new("id", "Long").with_annotation(marker().with_attribute(
            "value",
            ExpressionNode::reference("ID", Some(SymbolId::new("com.acme.Names", "ID"))),
        ))];
        assert_eq!(bind(&r, &params, PATH_VARIABLE).type_of("userId"), Some("Long"));
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let tree = SyntaxTree::default();
        let r = ExpressionResolver::new(&tree);
        let params = vec![
            Parameter::new("id", "Long").with_annotation(marker()),
            Parameter::new("other", "String")
                .with_annotation(marker().with_attribute("value", ExpressionNode::string("id"))),
        ];
        assert_eq!(bind(&r, &params, PATH_VARIABLE).type_of("id"), Some("String"));
    }

    #[test]
    fn test_type_name_is_verbatim() {
        let tree = SyntaxTree::default();
        let r = ExpressionResolver::new(&tree);
        let params = vec![Parameter::new("ids", "List<Long>[]").with_annotation(marker())];
        assert_eq!(bind(&r, &params, PATH_VARIABLE).type_of("ids"), Some("List<Long>[]"));
    }
}
