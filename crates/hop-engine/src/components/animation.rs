//! Frame-cycling animation for animated tiles (save points, coins).

/// A looping frame sequence driven by elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCycle {
    /// Number of frames in the strip.
    pub frame_count: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Current frame index.
    pub frame_index: u32,
    /// Time accumulated in the current frame.
    pub frame_timer: f32,
}

impl FrameCycle {
    pub fn new(frame_count: u32, frame_duration: f32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration,
            frame_index: 0,
            frame_timer: 0.0,
        }
    }

    /// Advance by `dt` seconds, wrapping back to frame 0 after the last frame.
    pub fn tick(&mut self, dt: f32) {
        if self.frame_duration <= 0.0 {
            return;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.frame_index = (self.frame_index + 1) % self.frame_count;
        }
    }
}
