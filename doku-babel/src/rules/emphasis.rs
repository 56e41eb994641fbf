//! Italic emphasis
//!
//! `*text*` becomes `//text//`. The guarded form refuses delimiters touching a `/`
//! so that C comments (`/* ... */`) survive; the unguarded form is the older table's
//! plain non-greedy match.

use crate::rule::EmphasisRule;

pub fn italic() -> EmphasisRule {
    EmphasisRule::new("italic", '*', "//").with_guard('/')
}

pub fn italic_unguarded() -> EmphasisRule {
    EmphasisRule::new("italic", '*', "//")
}
