pub mod config;
pub mod error;

pub mod layout;
pub mod normalize;
pub mod orp;
pub mod renderer;
pub mod schedule;
pub mod timing;
pub mod token;

pub use error::EngineError;
pub use layout::{FormattedUnit, Layout};
pub use normalize::normalize;
pub use orp::optimal_reading_position;
pub use renderer::{Renderer, RendererError};
pub use schedule::{CancelToken, PlayOutcome, Session, END_MARKER, START_MARKER};
pub use timing::SessionParams;
pub use token::{tokenize, DisplayUnit};
