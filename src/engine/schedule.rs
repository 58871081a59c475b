//! Playback scheduling: one word per beat, strictly in order.
//!
//! The whole pipeline is serial and blocking. The only suspension points
//! are the fixed warm-up before the first word and the per-unit waits
//! between emissions, both driven off a monotonic deadline so slow
//! renderer calls don't accumulate drift. Cancellation interrupts a wait
//! through a condvar rather than being polled between sleeps.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use crate::engine::config::PLAYBACK_HEIGHT;
use crate::engine::error::EngineError;
use crate::engine::layout::{FormattedUnit, Layout};
use crate::engine::normalize::normalize;
use crate::engine::renderer::Renderer;
use crate::engine::timing::SessionParams;
use crate::engine::token::{tokenize, DisplayUnit};

/// Synthetic unit flashed before the stream starts.
pub const START_MARKER: &str = "[START]";
/// Synthetic unit flashed after the stream ends.
pub const END_MARKER: &str = "[END]";

/// How a playback run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Completed,
    Cancelled,
}

/// Cooperative cancellation handle, cloneable across threads. The
/// scheduler checks it before every wait and a `cancel()` from another
/// thread interrupts a wait already in progress.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (flag, condvar) = &*self.inner;
        let mut cancelled = flag.lock().unwrap_or_else(|e| e.into_inner());
        *cancelled = true;
        condvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Blocks until `deadline` or cancellation. Returns `false` if the
    /// wait was cancelled.
    fn wait_until(&self, deadline: Instant) -> bool {
        let (flag, condvar) = &*self.inner;
        let mut cancelled = flag.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if *cancelled {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (guard, _) = condvar
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            cancelled = guard;
        }
    }
}

/// One playback invocation: normalized, tokenized, laid out, and ready
/// to drive a renderer. Immutable once constructed.
pub struct Session {
    units: Vec<DisplayUnit>,
    layout: Option<Layout>,
    params: SessionParams,
}

impl Session {
    /// Normalizes and tokenizes `text` and computes the session layout.
    ///
    /// An empty (or all-whitespace) input builds a session that plays as
    /// a no-op; a stream holding pauses but no words is rejected with
    /// `EmptyContent` here, before any renderer is touched.
    pub fn new(text: &str, params: SessionParams) -> Result<Self, EngineError> {
        let units = tokenize(&normalize(text));
        let layout = if units.is_empty() {
            None
        } else {
            Some(Layout::new(&units)?)
        };
        Ok(Self {
            units,
            layout,
            params,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Runs the full emission sequence against `renderer`.
    ///
    /// Order is exactly: start marker, warm-up wait, each unit in stream
    /// order (a pause re-emits the last emitted frame unchanged), end
    /// marker, viewport reset. Each unit emission is followed by one
    /// per-unit wait. A pause that precedes any word re-emits the blank
    /// frame. Renderer failures abort immediately; cancellation resets
    /// the viewport and reports `Cancelled`.
    pub fn play<R: Renderer>(
        &self,
        renderer: &mut R,
        cancel: &CancelToken,
    ) -> Result<PlayOutcome, EngineError> {
        let Some(layout) = &self.layout else {
            debug!("empty token stream, nothing to play");
            return Ok(PlayOutcome::Completed);
        };

        let millis = self.params.millis_per_unit();
        let period = Duration::from_millis(millis);
        debug!(
            "playing {} units at {} wpm ({} ms/unit)",
            self.units.len(),
            self.params.wpm(),
            millis
        );

        renderer.set_viewport(layout.viewport_width(), PLAYBACK_HEIGHT)?;
        renderer.show(&layout.format(START_MARKER), millis)?;

        let mut deadline = Instant::now() + Duration::from_millis(self.params.warm_up_ms());
        if !cancel.wait_until(deadline) {
            return self.abort(renderer);
        }

        let mut last: FormattedUnit = layout.blank();
        for unit in &self.units {
            match unit {
                DisplayUnit::Pause => renderer.show(&last, millis)?,
                DisplayUnit::Word(word) => {
                    last = layout.format(word);
                    renderer.show(&last, millis)?;
                }
            }
            deadline += period;
            if !cancel.wait_until(deadline) {
                return self.abort(renderer);
            }
        }

        renderer.show(&layout.format(END_MARKER), millis)?;
        renderer.reset_viewport()?;
        Ok(PlayOutcome::Completed)
    }

    fn abort<R: Renderer>(&self, renderer: &mut R) -> Result<PlayOutcome, EngineError> {
        debug!("playback cancelled");
        renderer.reset_viewport()?;
        Ok(PlayOutcome::Cancelled)
    }
}
