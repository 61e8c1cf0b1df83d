use super::unquote;
use crate::syntax::{ExpressionNode, SymbolId, SymbolTable};
use smallvec::SmallVec;
use tracing::debug;

/// Constants currently being dereferenced; a repeat means a cycle.
type VisitStack = SmallVec<[SymbolId; 4]>;

/// Folds an [`ExpressionNode`] into the string it evaluates to.
///
/// Resolution never fails. Anything that cannot be folded contributes an
/// empty string.
///
/// # Reference policy
///
/// A reference is followed to its declaration's initializer exactly once:
/// the initializer is folded only when it is a literal or a concatenation.
/// An initializer that is itself a bare reference resolves to `""` rather
/// than being chased further. References nested inside a followed
/// concatenation are resolved again under the same rule, with a guard that
/// turns cycles (`A = "x" + B`, `B = "y" + A`) into `""`.
pub struct ExpressionResolver<'s, S: SymbolTable + ?Sized> {
    symbols: &'s S,
}

impl<'s, S: SymbolTable + ?Sized> ExpressionResolver<'s, S> {
    pub fn new(symbols: &'s S) -> Self {
        Self { symbols }
    }

    #[must_use]
    pub fn resolve(&self, node: &ExpressionNode) -> String {
        let mut visiting = VisitStack::new();
        self.resolve_in(node, &mut visiting)
    }

    fn resolve_in(&self, node: &ExpressionNode, visiting: &mut VisitStack) -> String {
        match node {
            ExpressionNode::Literal { raw, value } => match value {
                Some(v) => v.to_string(),
                None => unquote(raw).to_string(),
            },
            ExpressionNode::Concat { left, right } => {
                let mut out = self.resolve_in(left, visiting);
                out.push_str(&self.resolve_in(right, visiting));
                out
            }
            ExpressionNode::Polyadic { operands } => operands
                .iter()
                .map(|op| self.resolve_in(op, visiting))
                .collect(),
            ExpressionNode::Reference { name, target } => {
                self.resolve_reference(name, target.as_ref(), visiting)
            }
            ExpressionNode::Array { .. } | ExpressionNode::Other { .. } => String::new(),
        }
    }

    fn resolve_reference(
        &self,
        name: &str,
        target: Option<&SymbolId>,
        visiting: &mut VisitStack,
    ) -> String {
        let Some(target) = target else {
            debug!(reference = name, "Unresolved reference, folding to empty string");
            return String::new();
        };
        if visiting.contains(target) {
            debug!(reference = name, symbol = %target, "Reference cycle, folding to empty string");
            return String::new();
        }
        let Some(decl) = self.symbols.constant(target) else {
            debug!(reference = name, symbol = %target, "Symbol not found in snapshot");
            return String::new();
        };

        match decl.initializer.as_ref() {
            Some(
                init @ (ExpressionNode::Literal { .. }
                | ExpressionNode::Concat { .. }
                | ExpressionNode::Polyadic { .. }),
            ) => {
                visiting.push(target.clone());
                let out = self.resolve_in(init, visiting);
                visiting.pop();
                out
            }
            _ => String::new(),
        }
    }
}
