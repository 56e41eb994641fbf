//! Code blocks and inline code
//!
//! Spans may cross line breaks and end at the first closing delimiter of the same
//! arity. Enclosed text is kept verbatim.

use crate::error::ConvertError;
use crate::rule::PatternRule;

/// ```` ```php ... ``` ```` to `<PHP>...</PHP>`.
pub fn php_block() -> Result<PatternRule, ConvertError> {
    PatternRule::new("code-php-block", r"(?s)```php(.+?)```", "<PHP>${1}</PHP>")
}

/// Any other fenced block to `<code hint>...</code>`.
///
/// The hint is the first word of the fence line (`{.c}` reads as `c`); anything after
/// it is dropped. The hint is empty for bare fences, leaving `<code >` for the fixups
/// to tidy.
pub fn fenced_block() -> Result<PatternRule, ConvertError> {
    PatternRule::new(
        "code-block",
        r"(?s)```[ \t]*\{?\.?([\w+-]*)[^\r\n`]*(\r?\n.*?)```",
        "<code ${1}>${2}</code>",
    )
}

pub fn double_backtick() -> Result<PatternRule, ConvertError> {
    PatternRule::new("code-inline-double", r"(?s)``(.+?)``", "<php>${1}</php>")
}

pub fn single_backtick() -> Result<PatternRule, ConvertError> {
    PatternRule::new("code-inline", r"(?s)`(.+?)`", "<php>${1}</php>")
}

/// The four code rules, most specific first.
pub fn code_rules() -> Result<Vec<PatternRule>, ConvertError> {
    Ok(vec![
        php_block()?,
        fenced_block()?,
        double_backtick()?,
        single_backtick()?,
    ])
}
