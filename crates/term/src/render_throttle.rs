//! Frame pacing for the terminal host.
//!
//! A jump in flight redraws every frame. A still screen only redraws when its
//! snapshot changes, plus a slow refresh so overlays never go stale.

use crate::core::SessionSnapshot;

/// Default refresh interval for a still screen.
pub const DEFAULT_STATIC_INTERVAL_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    static_interval_ms: u64,
    last_frame_ms: Option<u64>,
    last_fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(static_interval_ms: u64) -> Self {
        Self {
            static_interval_ms,
            last_frame_ms: None,
            last_fingerprint: 0,
        }
    }

    /// Decide whether `snap` needs drawing at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, snap: &SessionSnapshot) -> bool {
        self.should_render_frame(now_ms, snap.fingerprint(), snap.is_static())
    }

    /// Same decision from precomputed inputs.
    ///
    /// The first call always renders. Moving frames always render. Still frames
    /// render on a fingerprint change or once `static_interval_ms` has passed.
    pub fn should_render_frame(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = match self.last_frame_ms {
            None => true,
            Some(_) if !is_static => true,
            Some(_) if fingerprint != self.last_fingerprint => true,
            Some(last) => now_ms.saturating_sub(last) >= self.static_interval_ms,
        };
        if due {
            self.last_frame_ms = Some(now_ms);
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Make the next call render regardless of state (e.g. after a resize).
    pub fn force(&mut self) {
        self.last_frame_ms = None;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_INTERVAL_MS)
    }
}
