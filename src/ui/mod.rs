pub mod terminal;
pub mod theme;

pub use terminal::TerminalRenderer;
pub use theme::{Theme, ThemeKind};
