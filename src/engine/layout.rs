//! Fixed-column alignment for the word stream.
//!
//! Every word in a session is padded so its ORP grapheme lands in the
//! same column as every other word's, which is what lets the eye stay
//! still while words of different lengths flash past. The padding math
//! depends only on the longest word in the stream, so it is computed
//! once per session and then applied per word in O(1).

use unicode_segmentation::UnicodeSegmentation;

use crate::engine::config::PIXELS_PER_CHAR;
use crate::engine::error::EngineError;
use crate::engine::orp::optimal_reading_position;
use crate::engine::token::DisplayUnit;

fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// A word ready for display: padding counts plus the word split at its
/// ORP grapheme so a renderer can highlight the focus character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedUnit {
    pub left_pad: usize,
    pub prefix: String,
    pub focus: String,
    pub suffix: String,
    pub right_pad: usize,
}

impl FormattedUnit {
    /// The word text without padding.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.prefix, self.focus, self.suffix)
    }

    /// The full fixed-width line, padding rendered as spaces.
    pub fn line(&self) -> String {
        format!(
            "{}{}{}",
            " ".repeat(self.left_pad),
            self.text(),
            " ".repeat(self.right_pad)
        )
    }

    /// Total width in graphemes, padding included.
    pub fn width(&self) -> usize {
        self.left_pad + grapheme_len(&self.text()) + self.right_pad
    }

    /// 0-based column of the focus grapheme within `line()`.
    pub fn focus_column(&self) -> usize {
        self.left_pad + grapheme_len(&self.prefix)
    }
}

/// Session-wide alignment data, derived from the longest word once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    max_len: usize,
    max_orp: usize,
}

impl Layout {
    /// Scans the stream for its longest word. A stream with no words has
    /// no alignment reference, which is the empty-content failure.
    pub fn new(units: &[DisplayUnit]) -> Result<Self, EngineError> {
        let max_len = units
            .iter()
            .filter_map(DisplayUnit::as_word)
            .map(grapheme_len)
            .max()
            .ok_or(EngineError::EmptyContent)?;
        if max_len == 0 {
            return Err(EngineError::EmptyContent);
        }
        Ok(Self {
            max_len,
            max_orp: optimal_reading_position(max_len),
        })
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Window width in pixels needed to show any line of this session.
    pub fn viewport_width(&self) -> u32 {
        (self.max_len as u32 + 4) * PIXELS_PER_CHAR
    }

    /// Pads `word` so its ORP grapheme lands in the session's fixed
    /// focus column.
    ///
    /// For stream words the total width is constant by construction
    /// (`max_len + 2`). Synthetic marker words longer than `max_len`
    /// clamp their padding at zero instead of failing.
    pub fn format(&self, word: &str) -> FormattedUnit {
        let graphemes: Vec<&str> = word.graphemes(true).collect();
        let len = graphemes.len();
        let orp = optimal_reading_position(len);

        let left_pad = (self.max_orp as i64 - orp as i64 + 2).max(0) as usize;
        let right_pad =
            (self.max_len as i64 - len as i64 - left_pad as i64 + 2).max(0) as usize;

        let (prefix, focus, suffix) = if orp == 0 {
            (String::new(), String::new(), String::new())
        } else {
            (
                graphemes[..orp - 1].concat(),
                graphemes[orp - 1].to_string(),
                graphemes[orp..].concat(),
            )
        };

        FormattedUnit {
            left_pad,
            prefix,
            focus,
            suffix,
            right_pad,
        }
    }

    /// The frame shown when a pause precedes any word: padding only.
    pub fn blank(&self) -> FormattedUnit {
        self.format("")
    }
}
