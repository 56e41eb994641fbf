//! Voting snippet insertion through the converter.

use crate::common::{rfc, rfc_converter};
use doku_babel::{ConvertError, TitleMode, VotingTemplate};

#[test]
fn test_snippet_uses_title() {
    let output = rfc("# PHP RFC: My Great Proposal\n\nVOTING_SNIPPET\n");
    assert!(!output.contains("VOTING_SNIPPET"));
    assert!(!output.contains("{RFC_TITLE}"));
    assert!(output.contains("Accept the My Great Proposal RFC?"));
}

#[test]
fn test_every_token_replaced() {
    let output = rfc("# PHP RFC: X\nVOTING_SNIPPET\nVOTING_SNIPPET\n");
    assert_eq!(output.matches("<doodle").count(), 2);
}

#[test]
fn test_no_token_is_noop() {
    let output = rfc("# Not an RFC\n");
    assert_eq!(output, "====== Not an RFC ======\n");
}

#[test]
fn test_strict_rejects_malformed_title() {
    let err = rfc_converter()
        .convert("# Draft\nVOTING_SNIPPET\n")
        .unwrap_err();
    assert!(matches!(err, ConvertError::MissingRfcTitle { .. }));
}

#[test]
fn test_lenient_uses_offset() {
    let output = rfc_converter()
        .with_title_mode(TitleMode::Lenient)
        .convert("# PHP Draft: Enums\nVOTING_SNIPPET\n")
        .unwrap();
    assert!(output.contains("Accept the : Enums RFC?"));
}

#[test]
fn test_custom_template() {
    let converter = rfc_converter().with_voting(
        VotingTemplate::new("<vote title=\"%TITLE%\">")
            .with_title_token("%TITLE%")
            .with_snippet_token("@@VOTE@@"),
    );
    let output = converter.convert("# PHP RFC: Enums\n@@VOTE@@").unwrap();
    assert_eq!(output, "====== PHP RFC: Enums ======\n<vote title=\"Enums\">");
}

#[test]
fn test_crate_convert_uses_rfc_defaults() {
    let output = doku_babel::convert("# PHP RFC: Enums\n\n*x*\n\nVOTING_SNIPPET\n").unwrap();
    assert!(output.starts_with("====== PHP RFC: Enums ======\n\n//x//\n\n<doodle"));
    assert!(output.contains("Accept the Enums RFC?"));

    let err = doku_babel::convert("# Draft\nVOTING_SNIPPET\n").unwrap_err();
    assert!(matches!(err, ConvertError::MissingRfcTitle { .. }));
}

#[test]
fn test_title_mode_from_str() {
    assert_eq!(" strict ".parse::<TitleMode>().unwrap(), TitleMode::Strict);
    match "loose".parse::<TitleMode>() {
        Err(ConvertError::UnknownTitleMode(name)) => assert_eq!(name, "loose"),
        other => panic!("Expected UnknownTitleMode error, got {other:?}"),
    }
}
