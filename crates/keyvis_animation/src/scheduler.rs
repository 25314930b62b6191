//! Frame clock
//!
//! Converts wall-clock time into per-frame millisecond deltas for the
//! timeline. Long gaps (hidden tab, suspended host) are clamped so a
//! resumed page doesn't fast-forward the whole choreography in a single
//! frame.

use std::time::Instant;

/// Upper bound on a single frame delta, in milliseconds.
const MAX_FRAME_MS: f32 = 100.0;

/// Wall-clock frame delta source.
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Milliseconds since the previous call, clamped to 100 ms.
    pub fn frame_dt_ms(&mut self) -> f32 {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        if dt_ms > MAX_FRAME_MS {
            tracing::debug!(dt_ms, "clamping long frame gap");
            MAX_FRAME_MS
        } else {
            dt_ms
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
