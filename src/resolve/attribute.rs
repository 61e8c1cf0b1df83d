use super::{unquote, ExpressionResolver};
use crate::syntax::{Annotation, ExpressionNode, SymbolTable};

/// Read one attribute of an annotation as an ordered list of strings.
///
/// An absent attribute yields an empty list. An array value yields one entry
/// per element, in source order; a scalar value yields exactly one entry.
/// Each entry is the folded value, or the element's unquoted source text when
/// folding produced nothing. Blank entries are kept as `""`.
pub fn read_attribute<S: SymbolTable + ?Sized>(
    resolver: &ExpressionResolver<'_, S>,
    annotation: &Annotation,
    name: &str,
) -> Vec<String> {
    match annotation.attribute(name) {
        None => Vec::new(),
        Some(ExpressionNode::Array { elements }) => elements
            .iter()
            .map(|element| resolve_element(resolver, element))
            .collect(),
        Some(value) => vec![resolve_element(resolver, value)],
    }
}

fn resolve_element<S: SymbolTable + ?Sized>(
    resolver: &ExpressionResolver<'_, S>,
    element: &ExpressionNode,
) -> String {
    let folded = resolver.resolve(element);
    if !folded.trim().is_empty() {
        return folded;
    }
    let text = element.source_text();
    if text.trim().is_empty() {
        String::new()
    } else {
        unquote(&text).to_string()
    }
}
