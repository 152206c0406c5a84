use instant::Instant;
use std::time::Duration;

/// Logical viewport size plus the device pixel ratio it is rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    /// Canvas backing store size in device pixels (at least 1×1).
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr) as u32;
        let h = (self.height * self.dpr) as u32;
        (w.max(1), h.max(1))
    }
}

/// Whether the particle background may start on this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartGate {
    Run,
    /// The user prefers reduced motion; the canvas is left untouched.
    ReducedMotion,
    NoCanvas,
}

/// Reduced motion wins over everything else, so the canvas is never sized,
/// seeded, or listened to when the user has opted out.
pub fn start_gate(prefers_reduced_motion: bool, has_canvas: bool) -> StartGate {
    if prefers_reduced_motion {
        StartGate::ReducedMotion
    } else if !has_canvas {
        StartGate::NoCanvas
    } else {
        StartGate::Run
    }
}

/// Canvas opacity for a scroll offset: opaque at the top, fully faded after
/// one viewport height, never negative.
#[inline]
pub fn scroll_opacity(scroll_y: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    (1.0 - scroll_y / viewport_height).clamp(0.0, 1.0)
}

/// Trailing-edge debounce: fires once `delay` has passed since the last
/// trigger.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.last = Some(now);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.last.is_some()
    }

    /// True exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last {
            Some(t) if now >= t && now.duration_since(t) >= self.delay => {
                self.last = None;
                true
            }
            _ => false,
        }
    }
}

/// Latest-value viewport signals written by window listeners and drained by
/// the frame loop.
#[derive(Clone, Debug)]
pub struct ViewportSignals {
    pub resize: Debounce,
    pub scroll_pending: bool,
}

impl ViewportSignals {
    pub fn new(resize_delay: Duration) -> Self {
        Self {
            resize: Debounce::new(resize_delay),
            // apply the initial opacity on the first frame
            scroll_pending: true,
        }
    }

    /// Consume the scroll flag; at most one opacity update per frame.
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
