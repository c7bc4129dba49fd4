use glam::Vec2;
use serde::Deserialize;

use crate::api::error::LevelError;

/// Configuration for the engine, provided by the host at level init.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Visible screen width in world units.
    pub screen_width: f32,
    /// Visible screen height in world units.
    pub screen_height: f32,
    /// Edge length of one grid cell, both axes.
    pub cell_size: f32,
    /// Edge length of a coin. Coins sit `coin_offset` into their cell.
    pub coin_size: f32,
    pub coin_offset: f32,
    /// Player collider width and height.
    pub player_width: f32,
    pub player_height: f32,
    /// Added to the player's vertical velocity every tick on gravity levels.
    pub gravity: f32,
    /// Upper bound for downward velocity.
    pub max_fall_velocity: f32,
    /// Horizontal speed for left/right movement.
    pub move_speed: f32,
    /// Vertical speed for up/down movement on plain levels.
    pub plain_speed: f32,
    /// Vertical velocity applied by a jump (negative = up).
    pub jump_impulse: f32,
    /// Distance the player is pushed away from a hole each pass.
    pub hole_nudge: f32,
    pub start_life: i32,
    pub max_life: i32,
    pub start_energy: i32,
    pub max_energy: i32,
    /// Coin capacity.
    pub max_wallet: u32,
    /// Coins needed to finish a horizontal level.
    pub win_coins: u32,
    pub snow_size: f32,
    pub snow_fall_speed: f32,
    /// Seed for snow placement.
    pub snow_seed: u64,
    pub platform_speed: f32,
    /// Maximum distance a platform travels from its anchor before turning around.
    pub platform_range: f32,
    /// Seconds per animation frame for animated tiles.
    pub frame_duration: f32,
    pub save_point_frames: u32,
    pub coin_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            screen_width: 800.0,
            screen_height: 600.0,
            cell_size: 50.0,
            coin_size: 32.0,
            coin_offset: 10.0,
            player_width: 30.0,
            player_height: 40.0,
            gravity: 0.35,
            max_fall_velocity: 10.0,
            move_speed: 3.0,
            plain_speed: 3.0,
            jump_impulse: -10.0,
            hole_nudge: 2.0,
            start_life: 100,
            max_life: 100,
            start_energy: 100,
            max_energy: 100,
            max_wallet: 99,
            win_coins: 10,
            snow_size: 2.0,
            snow_fall_speed: 1.0,
            snow_seed: 42,
            platform_speed: 1.0,
            platform_range: 50.0,
            frame_duration: 0.1,
            save_point_frames: 4,
            coin_frames: 6,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(LevelError::Config)
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    pub fn cell(&self) -> Vec2 {
        Vec2::splat(self.cell_size)
    }
}
