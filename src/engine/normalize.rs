//! Canonical text normalization.
//!
//! Every length-based computation downstream (ORP, padding) counts
//! grapheme clusters, so canonically-equivalent inputs must reach the
//! tokenizer in one fixed representation. NFC is applied once, up front.

use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Composes `text` into Unicode NFC. Idempotent; already-canonical input
/// is returned unchanged without re-walking the composition tables.
pub fn normalize(text: &str) -> String {
    match is_nfc_quick(text.chars()) {
        IsNormalized::Yes => text.to_owned(),
        _ => text.nfc().collect(),
    }
}
