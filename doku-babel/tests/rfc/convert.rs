//! Element and kitchensink tests for the rfc rule table.

use crate::common::{read_fixture, rfc};
use insta::assert_snapshot;

#[test]
fn test_kitchensink() {
    let md = read_fixture("rfc-kitchensink.md");
    let expected = read_fixture("rfc-kitchensink.dokuwiki");
    assert_eq!(rfc(&md), expected);
}

#[test]
fn test_heading_levels() {
    for level in 1..=6 {
        let md = format!("{} Text", "#".repeat(level));
        let bar = "=".repeat(7 - level);
        assert_eq!(rfc(&md), format!("{bar} Text {bar}"));
    }
}

#[test]
fn test_heading_not_reconverted() {
    assert_eq!(rfc("= Text ="), "= Text =");
}

#[test]
fn test_heading_with_code() {
    assert_snapshot!(rfc("## The `never` type"), @"===== The never type =====");
}

#[test]
fn test_list_indentation_boundary() {
    for md in ["- item", " - item", "  - item", "   - item"] {
        assert_eq!(rfc(md), "  * item", "input {md:?}");
    }
    assert_eq!(rfc("    - item"), "    - item");
}

#[test]
fn test_php_block() {
    assert_eq!(rfc("```php\n$x = 1;\n```"), "<PHP>\n$x = 1;\n</PHP>");
}

#[test]
fn test_plain_code_hints_removed() {
    assert_eq!(rfc("```c\nint x;\n```"), "<code>\nint x;\n</code>");
    assert_eq!(rfc("```text\nhi\n```"), "<code>\nhi\n</code>");
}

#[test]
fn test_other_code_hints_kept() {
    assert_eq!(
        rfc("```javascript\nlet x;\n```"),
        "<code javascript>\nlet x;\n</code>"
    );
}

#[test]
fn test_fence_info_string_beyond_hint() {
    assert_eq!(rfc("```js title\nx\n```"), "<code js>\nx\n</code>");
    assert_eq!(rfc("```{.c}\nx\n```"), "<code>\nx\n</code>");
}

#[test]
fn test_table_cells_keep_inline_code() {
    assert_snapshot!(rfc("|`a`|`b`|"), @"|<php>a</php>|<php>b</php>|");
}

#[test]
fn test_link_target_with_parentheses() {
    assert_eq!(
        rfc("[Foo](https://en.wikipedia.org/wiki/Foo_(bar))"),
        "[[https://en.wikipedia.org/wiki/Foo_(bar)|Foo]]"
    );
}

#[test]
fn test_partial_code_link_text_kept_whole() {
    assert_eq!(
        rfc("[`match` expression](https://wiki.php.net/rfc/m)"),
        "[[rfc:m|<php>match</php> expression]]"
    );
}

#[test]
fn test_inline_code() {
    assert_snapshot!(rfc("Use `strlen()` or ``a`b``."), @"Use <php>strlen()</php> or <php>a`b</php>.");
}

#[test]
fn test_rfc_link() {
    assert_eq!(
        rfc("[Vote here](https://wiki.php.net/rfc/foo)"),
        "[[rfc:foo|Vote here]]"
    );
}

#[test]
fn test_external_link() {
    assert_eq!(
        rfc("[Other](https://example.com/x)"),
        "[[https://example.com/x|Other]]"
    );
}

#[test]
fn test_link_text_code_stripped() {
    assert_snapshot!(
        rfc("[`match`](https://wiki.php.net/rfc/match_expression_v2)"),
        @"[[rfc:match_expression_v2|match]]"
    );
}

#[test]
fn test_emphasis() {
    assert_eq!(rfc("*word*"), "//word//");
    assert_eq!(rfc("/*comment*/"), "/*comment*/");
}

#[test]
fn test_pointer_fixups() {
    assert_eq!(
        rfc("zend_string *name, zval *value"),
        "zend_string *name, zval *value"
    );
    assert_eq!(rfc("char *a, void *b"), "char *a, void *b");
}

#[test]
fn test_footnote() {
    assert_snapshot!(rfc("Text.[1: See the thread.]"), @"Text.((See the thread.))");
}

#[test]
fn test_reconversion_leaves_target_syntax() {
    let once = rfc("## Title\n\n- item\n\n[a](https://example.com)\n");
    assert_eq!(rfc(&once), once);
}
