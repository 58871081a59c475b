use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme selector, persisted in settings and accepted on the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

/// Palette for the word display.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 245),
            text: Color::Rgb(42, 42, 46),
            anchor: Color::Rgb(198, 32, 38),
            dimmed: Color::Rgb(150, 150, 156),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),
            text: Color::Rgb(169, 177, 214),
            anchor: Color::Rgb(247, 118, 142),
            dimmed: Color::Rgb(100, 110, 150),
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }
}
