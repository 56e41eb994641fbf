//! Unordered list items: up to three leading spaces, a hyphen and a space.

use crate::error::ConvertError;
use crate::rule::PatternRule;

pub fn list_item_rule() -> Result<PatternRule, ConvertError> {
    PatternRule::new("list-item", r"(?mR)^ {0,3}- (.+)$", "  * ${1}")
}
