//! Self-update of mobile and animated entities, run at the start of every tick.

use crate::components::kind::EntityKind;
use crate::core::scene::Scene;

/// Advance snow, platforms and tile animations by one tick.
///
/// Snow falls by its velocity and wraps to just above the screen once it passes
/// `screen_height`. Platforms step along their oscillation. Animations advance by `dt`.
pub fn update_entities(scene: &mut Scene, screen_height: f32, dt: f32) {
    for entity in scene.iter_mut() {
        if let Some(anim) = entity.animation.as_mut() {
            anim.tick(dt);
        }

        match entity.kind {
            EntityKind::Snow => {
                entity.pos += entity.vel;
                if entity.pos.y > screen_height {
                    entity.pos.y = -1.0;
                }
            }
            EntityKind::Platform => {
                if let Some(motion) = entity.motion.as_mut() {
                    motion.step(&mut entity.pos);
                }
            }
            _ => {}
        }
    }
}
