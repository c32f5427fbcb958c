/// Decides when the main loop should redraw.
///
/// The board only changes in response to input, so frames are drawn when the
/// visible state changes and otherwise at most once per idle interval (which
/// keeps the screen fresh after a terminal glitch without busy redrawing).
#[derive(Debug, Clone)]
pub struct RedrawPolicy {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RedrawPolicy {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn idle_interval_ms(&self) -> u64 {
        self.idle_interval_ms
    }

    /// Forget the last frame so the next call always redraws.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to draw a new frame.
    ///
    /// - First call (or after `invalidate`): always draw.
    /// - Fingerprint changed: draw immediately.
    /// - Otherwise: draw once `idle_interval_ms` has passed since the last frame.
    pub fn should_redraw(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}
