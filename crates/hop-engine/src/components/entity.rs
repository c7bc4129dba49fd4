use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::animation::FrameCycle;
use crate::components::kind::EntityKind;
use crate::components::motion::PlatformMotion;

/// Visual sub-variant of a hole, chosen from the cell above it. No gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleStyle {
    /// Open space (or a coin) above.
    Metal,
    /// A floor tile above.
    Floor,
    /// Anything else above.
    Plain,
}

impl HoleStyle {
    pub fn from_above(above: Option<char>) -> Self {
        match above {
            None | Some(' ') | Some('c') => HoleStyle::Metal,
            Some('f') => HoleStyle::Floor,
            Some(_) => HoleStyle::Plain,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            HoleStyle::Metal => 0,
            HoleStyle::Floor => 1,
            HoleStyle::Plain => 2,
        }
    }
}

/// Fat entity: one struct with a category tag and optional category data.
///
/// `pos` is the top-left corner (y grows downward), `size` is fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    size: Vec2,
    /// Per-tick displacement. Only mobile entities use it.
    pub vel: Vec2,
    /// Frame animation for animated tiles.
    pub animation: Option<FrameCycle>,
    /// Oscillation for platforms.
    pub motion: Option<PlatformMotion>,
    pub hole_style: Option<HoleStyle>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, size: Vec2) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::ZERO,
            size,
            vel: Vec2::ZERO,
            animation: None,
            motion: None,
            hole_style: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_animation(mut self, animation: FrameCycle) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_motion(mut self, motion: PlatformMotion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn with_hole_style(mut self, style: HoleStyle) -> Self {
        self.hole_style = Some(style);
        self
    }

    // -- Geometry --

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict AABB intersection. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Distance between the two rectangle centers.
    pub fn center_distance(&self, other: &Entity) -> f32 {
        self.center().distance(other.center())
    }

    /// Move by `delta`, carrying the oscillation anchor along.
    pub fn shift(&mut self, delta: Vec2) {
        self.pos += delta;
        if let Some(motion) = self.motion.as_mut() {
            motion.init_point += delta;
        }
    }
}
