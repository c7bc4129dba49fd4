pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod level;
pub mod persistence;
pub mod player;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::error::{Corner, LevelError};
pub use api::types::{EntityId, LevelEvent, LevelStatus, SoundEvent};
pub use components::animation::FrameCycle;
pub use components::entity::{Entity, HoleStyle};
pub use components::kind::{EntityKind, Group};
pub use components::motion::{Axis, PlatformMotion};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{CommandQueue, PlayerCommand};
pub use level::builder::{BuiltLevel, LevelBuilder};
pub use level::catalog::LevelDef;
pub use level::grid::TileGrid;
pub use level::scroll::ScrollController;
pub use level::{Level, LevelKind};
pub use persistence::SaveRecord;
pub use player::{Player, PlayerTuning, StepReport};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use runner::LevelRunner;
pub use systems::entities::update_entities;
pub use systems::render::{build_render_buffer, HudSnapshot};
