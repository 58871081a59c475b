use thiserror::Error;

use crate::engine::renderer::RendererError;

/// Fatal engine failures. Playback is never attempted (or never resumed)
/// after any of these; a desynchronized timed display is worse than an
/// aborted one.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Tokenization produced pauses but no displayable words, so the
    /// layout has no longest-word reference to align against.
    #[error("no readable words in input")]
    EmptyContent,

    /// The words-per-minute rate cannot produce a per-word duration.
    #[error("words-per-minute rate must be positive (got {0})")]
    InvalidRate(u32),

    /// The display collaborator failed; the remaining sequence is abandoned.
    #[error("renderer failed: {0}")]
    Renderer(#[from] RendererError),
}
