/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of simulation ticks.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    /// Default cap on ticks per frame.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: Self::MAX_STEPS,
        }
    }

    /// Override the per-frame tick cap (at least 1).
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    /// Backlog beyond `max_steps` ticks is dropped.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let steps = (self.accumulator / self.dt) as u32;
        if steps > self.max_steps {
            self.accumulator = 0.0;
            return self.max_steps;
        }
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a tick left over (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
