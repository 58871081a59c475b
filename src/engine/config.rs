// Session-wide display and timing constants.

/// Horizontal pixels a viewer window reserves per character cell.
pub const PIXELS_PER_CHAR: u32 = 36;

/// Viewport height in pixels while playback is running.
pub const PLAYBACK_HEIGHT: u32 = 150;

/// Delay before the first word so the renderer can become visible,
/// independent of the reading rate.
pub const WARM_UP_MS: u64 = 1500;

/// Reading rate used when no preference is stored.
pub const DEFAULT_WPM: u32 = 300;
