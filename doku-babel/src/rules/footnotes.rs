//! Footnote references: `[1:text]` becomes `((text))`.

use crate::error::ConvertError;
use crate::rule::PatternRule;

pub fn footnote_rule() -> Result<PatternRule, ConvertError> {
    PatternRule::new("footnote", r"\[1: ?(.+?)\]", "((${1}))")
}
