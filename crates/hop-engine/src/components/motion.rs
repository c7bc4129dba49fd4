use glam::Vec2;

/// Axis a platform oscillates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl Axis {
    pub fn unit(self) -> Vec2 {
        match self {
            Axis::X => Vec2::X,
            Axis::Y => Vec2::Y,
        }
    }

    fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Back-and-forth motion around an anchor point.
///
/// `init_point` is in the same space as entity positions, so scrolling must shift it
/// together with the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformMotion {
    pub init_point: Vec2,
    pub axis: Axis,
    pub speed: f32,
    pub range: f32,
    /// +1.0 or -1.0.
    pub direction: f32,
}

impl PlatformMotion {
    pub fn new(init_point: Vec2, axis: Axis, speed: f32, range: f32) -> Self {
        Self {
            init_point,
            axis,
            speed,
            range,
            direction: 1.0,
        }
    }

    /// Move `pos` one step and turn around once it is `range` away from the anchor.
    pub fn step(&mut self, pos: &mut Vec2) {
        *pos += self.axis.unit() * self.speed * self.direction;
        let offset = self.axis.component(*pos - self.init_point);
        if offset.abs() >= self.range {
            // Never overshoot the turn point.
            let clamped = offset.clamp(-self.range, self.range);
            *pos += self.axis.unit() * (clamped - offset);
            self.direction = -offset.signum();
        }
    }

    /// Offset of `pos` from the anchor along the motion axis.
    pub fn offset(&self, pos: Vec2) -> f32 {
        self.axis.component(pos - self.init_point)
    }
}
