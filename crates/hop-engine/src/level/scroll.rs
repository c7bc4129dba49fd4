//! Scroll controller: keeps the player inside a fixed viewport by moving the world.
//!
//! There is no camera. When the player needs recentering, every entity (and every
//! platform anchor) is shifted by the same delta and the player is placed at
//! mid-screen, so the renderer can blit positions as they are.

use glam::Vec2;

use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::player::Player;

/// Scroll bounds on one axis, in current (already scrolled) world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisBounds {
    /// Near edge of the start reference.
    start: f32,
    /// Far edge of the end reference.
    end: f32,
}

pub struct ScrollController {
    /// Viewport size in world units.
    pub screen: Vec2,
}

impl ScrollController {
    pub fn new(screen: Vec2) -> Self {
        Self { screen }
    }

    /// Recenter on X, then on Y. Returns the total shift applied to the world.
    ///
    /// A player outside the viewport is always recentered. Inside it, recentering
    /// only happens once the player has crossed mid-screen and the level extends
    /// more than half a screen beyond the player in that direction, so the view
    /// never scrolls past the level's corners.
    pub fn scroll(&self, player: &mut Player, scene: &mut Scene, references: &[EntityId; 2]) -> Vec2 {
        let mut total = Vec2::ZERO;

        let bounds = self.bounds(scene, references, |v| v.x);
        if let Some(dx) = Self::axis_delta(player.body.pos.x, self.screen.x, bounds) {
            player.body.pos.x = self.screen.x / 2.0;
            scene.shift_all(Vec2::new(dx, 0.0));
            total.x = dx;
        }

        let bounds = self.bounds(scene, references, |v| v.y);
        if let Some(dy) = Self::axis_delta(player.body.pos.y, self.screen.y, bounds) {
            player.body.pos.y = self.screen.y / 2.0;
            scene.shift_all(Vec2::new(0.0, dy));
            total.y = dy;
        }

        total
    }

    fn bounds(&self, scene: &Scene, references: &[EntityId; 2], pick: fn(Vec2) -> f32) -> Option<AxisBounds> {
        let start = scene.get(references[0])?;
        let end = scene.get(references[1])?;
        Some(AxisBounds {
            start: pick(start.pos),
            end: pick(end.pos + end.size()),
        })
    }

    /// Shift needed on one axis, or None to leave the axis alone.
    fn axis_delta(pos: f32, screen: f32, bounds: Option<AxisBounds>) -> Option<f32> {
        let half = screen / 2.0;

        if pos < 0.0 || pos > screen {
            return Some(half - pos);
        }

        let bounds = bounds?;
        if pos < half {
            (pos - bounds.start > half).then_some(half - pos)
        } else if pos > half {
            (bounds.end - pos > half).then_some(half - pos)
        } else {
            None
        }
    }
}
