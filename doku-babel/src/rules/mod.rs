//! Built-in rule tables
//!
//! Each module owns one family of Markdown constructs and returns the rules for it,
//! most specific first. The rule sets in [`crate::ruleset`] stitch these together in
//! the order the conversion depends on:
//!
//! | Step | Module        | Markdown                         | DokuWiki                    |
//! |------|---------------|----------------------------------|-----------------------------|
//! | 1    | [`headings`]  | `# Title` … `###### Title`       | `====== Title ======` … `= Title =` |
//! | 2    | [`emphasis`]  | `*text*`                         | `//text//`                  |
//! | 3    | [`footnotes`] | `[1:text]`                       | `((text))`                  |
//! | 4    | [`code`]      | fenced blocks, backtick spans    | `<PHP>`, `<code>`, `<php>`  |
//! | 5    | [`lists`]     | `- item`                         | `  * item`                  |
//! | 6    | [`links`]     | `[text](url)`                    | `[[url\|text]]`, `[[rfc:key\|text]]` |
//! | 7    | [`headings`]  | code inside titles               | plain title text            |
//!
//! Literal fixups run after all of the above, see [`fixups`].

pub mod code;
pub mod emphasis;
pub mod fixups;
pub mod footnotes;
pub mod headings;
pub mod links;
pub mod lists;
