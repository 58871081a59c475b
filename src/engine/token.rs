//! Splitting text into the timed display sequence.
//!
//! Clause and sentence punctuation earns the reader one extra beat on the
//! word it closes; a paragraph break earns two. Both insertions happen in
//! a single forward scan, so the punctuation and paragraph rules compose
//! instead of one overwriting the other.

/// One element of the playback sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUnit {
    /// A non-empty run of characters to flash.
    Word(String),
    /// Hold the previously flashed word for one extra beat.
    Pause,
}

impl DisplayUnit {
    pub fn word(text: &str) -> Self {
        DisplayUnit::Word(text.to_string())
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            DisplayUnit::Word(text) => Some(text),
            DisplayUnit::Pause => None,
        }
    }
}

fn triggers_pause(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | '-' | ';')
}

fn flush(word: &mut String, units: &mut Vec<DisplayUnit>) {
    if !word.is_empty() {
        units.push(DisplayUnit::Word(std::mem::take(word)));
    }
}

/// Splits `text` into ordered words and pause markers.
///
/// Pause-triggering punctuation stays attached to the fragment it closes
/// and is followed by exactly one `Pause`; this also means punctuation
/// inside a word splits it (`"e.g."` becomes two fragments, each with its
/// own pause). Every maximal run of newlines yields two consecutive
/// `Pause` units. All other whitespace only separates words. Empty or
/// all-whitespace input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<DisplayUnit> {
    let mut units = Vec::new();
    let mut word = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            flush(&mut word, &mut units);
            while chars.peek() == Some(&'\n') {
                chars.next();
            }
            units.push(DisplayUnit::Pause);
            units.push(DisplayUnit::Pause);
        } else if c.is_whitespace() {
            flush(&mut word, &mut units);
        } else if triggers_pause(c) {
            word.push(c);
            flush(&mut word, &mut units);
            units.push(DisplayUnit::Pause);
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut units);

    units
}
