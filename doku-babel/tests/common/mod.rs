//! Shared helpers for conversion tests.

use doku_babel::{Converter, Variant};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn rfc_converter() -> Converter {
    Converter::for_variant(Variant::Rfc).expect("rfc rule set to build")
}

pub fn basic_converter() -> Converter {
    Converter::for_variant(Variant::Basic).expect("basic rule set to build")
}

/// Convert `md` with the rfc table.
pub fn rfc(md: &str) -> String {
    rfc_converter().convert(md).expect("Should convert markdown")
}

/// Convert `md` with the basic table.
pub fn basic(md: &str) -> String {
    basic_converter().convert(md).expect("Should convert markdown")
}
