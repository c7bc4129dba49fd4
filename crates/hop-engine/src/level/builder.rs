//! Turns a symbol grid into level entities.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::error::{Corner, LevelError};
use crate::api::types::EntityId;
use crate::components::animation::FrameCycle;
use crate::components::entity::{Entity, HoleStyle};
use crate::components::kind::EntityKind;
use crate::components::motion::{Axis, PlatformMotion};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::level::grid::TileGrid;

/// Output of a level build: the populated scene plus the two corner floors that
/// bound scrolling.
pub struct BuiltLevel {
    pub scene: Scene,
    /// Floor at grid (0, 0) and floor at the opposite corner, in that order.
    pub references: [EntityId; 2],
    /// World-space area covered by the grid.
    pub world_size: Vec2,
}

pub struct LevelBuilder<'a> {
    config: &'a GameConfig,
}

impl<'a> LevelBuilder<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Build one entity per non-empty cell.
    ///
    /// Fails when the grid is empty or when either corner is not a floor tile,
    /// since scrolling cannot be bounded without both.
    pub fn build(&self, grid: &TileGrid) -> Result<BuiltLevel, LevelError> {
        if grid.is_empty() || grid.width() == 0 {
            return Err(LevelError::EmptyGrid);
        }
        if !grid.is_rectangular() {
            log::warn!(
                "level grid is ragged ({} cols in row 0, longest row {}); missing cells are empty",
                grid.width(),
                grid.max_width()
            );
        }

        let end_corner = (grid.height() - 1, grid.width() - 1);
        let mut scene = Scene::with_capacity(grid.height() * grid.max_width());
        let mut start_ref = None;
        let mut end_ref = None;

        for (row, col, symbol) in grid.cells() {
            let Some(kind) = EntityKind::from_symbol(symbol) else {
                if symbol != ' ' {
                    log::warn!("unknown tile symbol {:?} at row {}, col {}", symbol, row, col);
                }
                continue;
            };

            let cell_pos = TileGrid::cell_to_world(row, col, self.config.cell_size);
            let entity = self.make_tile(scene.next_id(), kind, cell_pos, grid.above(row, col));
            let id = scene.spawn(entity);

            if kind == EntityKind::Floor {
                if (row, col) == (0, 0) {
                    start_ref = Some(id);
                } else if (row, col) == end_corner {
                    end_ref = Some(id);
                }
            }
        }

        let start = start_ref.ok_or(LevelError::MissingReference {
            corner: Corner::Start,
            row: 0,
            col: 0,
        })?;
        let end = end_ref.ok_or(LevelError::MissingReference {
            corner: Corner::End,
            row: end_corner.0,
            col: end_corner.1,
        })?;

        log::info!(
            "level built: {} entities from {}x{} grid",
            scene.len(),
            grid.width(),
            grid.height()
        );

        Ok(BuiltLevel {
            scene,
            references: [start, end],
            world_size: grid.world_size(self.config.cell_size),
        })
    }

    fn make_tile(&self, id: EntityId, kind: EntityKind, cell_pos: Vec2, above: Option<char>) -> Entity {
        let cfg = self.config;
        let cell = cfg.cell();
        match kind {
            EntityKind::Coin => Entity::new(id, kind, Vec2::splat(cfg.coin_size))
                .with_pos(cell_pos + Vec2::splat(cfg.coin_offset))
                .with_animation(FrameCycle::new(cfg.coin_frames, cfg.frame_duration)),
            EntityKind::Hole => Entity::new(id, kind, cell)
                .with_pos(cell_pos)
                .with_hole_style(HoleStyle::from_above(above)),
            EntityKind::SavePoint => Entity::new(id, kind, cell)
                .with_pos(cell_pos)
                .with_animation(FrameCycle::new(cfg.save_point_frames, cfg.frame_duration)),
            EntityKind::Platform => Entity::new(id, kind, cell)
                .with_pos(cell_pos)
                .with_motion(PlatformMotion::new(
                    cell_pos,
                    Axis::Y,
                    cfg.platform_speed,
                    cfg.platform_range,
                )),
            _ => Entity::new(id, kind, cell).with_pos(cell_pos),
        }
    }

    /// Scatter `count` snow flakes at random over `area`, falling at the configured speed.
    pub fn scatter_snow(&self, scene: &mut Scene, count: usize, area: Vec2, rng: &mut Rng) {
        let size = Vec2::splat(self.config.snow_size);
        let vel = Vec2::new(0.0, self.config.snow_fall_speed);
        for _ in 0..count {
            let pos = Vec2::new(rng.next_coord(area.x), rng.next_coord(area.y));
            let id = scene.next_id();
            scene.spawn(
                Entity::new(id, EntityKind::Snow, size)
                    .with_pos(pos)
                    .with_vel(vel),
            );
        }
    }
}
