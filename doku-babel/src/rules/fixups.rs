//! Literal fixups
//!
//! Exact substring replacements run after the pattern pass. They patch up the
//! places where the pattern rules produce markup DokuWiki cannot use:
//!
//! - C and plain-text code blocks get no language hint
//! - the italic rule eats the `*` of C pointer declarations (`zval *a, zval *b`)

use crate::rule::LiteralFixup;

/// Language hints with no highlighting in DokuWiki.
pub const PLAIN_CODE_HINTS: &[&str] = &["c", "C", "text", "txt", "plain", "plaintext"];

/// Types whose pointer declarations show up in RFC code samples.
pub const POINTER_TYPES: &[&str] = &[
    "zval",
    "zend_string",
    "zend_object",
    "zend_array",
    "HashTable",
    "zend_class_entry",
    "zend_function",
    "char",
    "void",
];

pub fn code_hint_fixups() -> Vec<LiteralFixup> {
    std::iter::once(LiteralFixup::new("<code >", "<code>"))
        .chain(
            PLAIN_CODE_HINTS
                .iter()
                .map(|hint| LiteralFixup::new(format!("<code {hint}>"), "<code>")),
        )
        .collect()
}

pub fn pointer_fixups() -> Vec<LiteralFixup> {
    POINTER_TYPES
        .iter()
        .map(|ty| LiteralFixup::new(format!("{ty} //"), format!("{ty} *")))
        .collect()
}

/// All fixups in application order.
pub fn fixups() -> Vec<LiteralFixup> {
    let mut all = code_hint_fixups();
    all.extend(pointer_fixups());
    all
}
