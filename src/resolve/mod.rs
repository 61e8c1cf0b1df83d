//! # Resolve Module
//!
//! Constant folding of annotation attribute values.
//!
//! Only literals, string concatenation and one-hop named-constant references
//! are folded. Everything else degrades to an empty string (or, in the
//! attribute reader, to the raw source text) so that a scan always produces
//! as many routes as it can.

mod attribute;
mod expression;

pub use attribute::read_attribute;
pub use expression::ExpressionResolver;

/// Strip exactly one matching pair of surrounding `"` or `'` quotes.
#[must_use]
pub fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn test_unquote_pairs() {
        assert_eq!(unquote("\"/api\""), "/api");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn test_unquote_only_one_layer() {
        assert_eq!(unquote("\"\"/api\"\""), "\"/api\"");
    }

    #[test]
    fn test_unquote_passthrough() {
        assert_eq!(unquote("BASE"), "BASE");
        assert_eq!(unquote("\"/api'"), "\"/api'");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote(""), "");
    }
}
