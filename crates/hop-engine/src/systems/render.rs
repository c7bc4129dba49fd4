use crate::components::entity::Entity;
use crate::player::Player;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// HUD values for the rendering collaborator. Formatting is left to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudSnapshot {
    pub life: i32,
    pub energy: i32,
    pub coins: u32,
}

impl HudSnapshot {
    pub fn from_player(player: &Player) -> Self {
        Self {
            life: player.life,
            energy: player.energy,
            coins: player.coins,
        }
    }
}

fn instance_of(entity: &Entity) -> RenderInstance {
    let size = entity.size();
    RenderInstance {
        x: entity.pos.x,
        y: entity.pos.y,
        w: size.x,
        h: size.y,
        kind: entity.kind.as_u8() as f32,
        frame: entity.animation.as_ref().map_or(0, |a| a.frame_index) as f32,
        variant: entity.hole_style.map_or(0, |s| s.as_u8()) as f32,
        alpha: 1.0,
    }
}

/// Build the render buffer from the level entities, in scene order, followed by the
/// player so it is drawn on top.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    player: &Player,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        buffer.push(instance_of(entity));
    }

    buffer.push(instance_of(&player.body));
}
