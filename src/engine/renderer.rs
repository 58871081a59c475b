//! Renderer contract for pluggable display surfaces.
//!
//! The scheduler only ever talks to this trait; whether the surface is a
//! terminal, a window, or a capture stub in tests is invisible to it.

use thiserror::Error;

use crate::engine::layout::FormattedUnit;

/// Failures raised by a display surface. Any of these aborts playback;
/// continuing would let the timing run ahead of what is on screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("viewport resize failed: {0}")]
    Viewport(String),

    #[error("display failed: {0}")]
    Display(String),
}

/// Display surface contract.
///
/// The engine declares the viewport size it needs, pushes one formatted
/// unit per beat, and asks for the surface's idle geometry back when the
/// sequence ends. Request/acknowledge semantics: each call completes (or
/// fails) before the scheduler moves on.
pub trait Renderer {
    /// Declare the viewport needed for this session, in pixels.
    fn set_viewport(&mut self, width_px: u32, height_px: u32) -> Result<(), RendererError>;

    /// Display one formatted unit for roughly `duration_ms`. The engine
    /// owns the cadence; the duration is advisory (progress displays,
    /// fade timing) and the renderer must not block on it.
    fn show(&mut self, unit: &FormattedUnit, duration_ms: u64) -> Result<(), RendererError>;

    /// Restore the surface's idle geometry.
    fn reset_viewport(&mut self) -> Result<(), RendererError>;
}
