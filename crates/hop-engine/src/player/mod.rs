//! The player character: stats, movement commands and the per-tick collision resolver.

mod resolve;

pub use resolve::StepReport;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::kind::EntityKind;
use crate::persistence::SaveRecord;

/// Movement constants the player needs every tick, taken from `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub gravity: f32,
    pub max_fall_velocity: f32,
    pub move_speed: f32,
    pub plain_speed: f32,
    pub jump_impulse: f32,
    pub hole_nudge: f32,
}

impl From<&GameConfig> for PlayerTuning {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            gravity: cfg.gravity,
            max_fall_velocity: cfg.max_fall_velocity,
            move_speed: cfg.move_speed,
            plain_speed: cfg.plain_speed,
            jump_impulse: cfg.jump_impulse,
            hole_nudge: cfg.hole_nudge,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Collider, position and velocity. Kind is always `EntityKind::Player`.
    pub body: Entity,
    pub life: i32,
    pub max_life: i32,
    pub energy: i32,
    pub max_energy: i32,
    pub coins: u32,
    pub max_wallet: u32,
    /// Set by `jump`, cleared by landing on a floor.
    pub jumping: bool,
    /// Gravity off, free 4-way movement.
    pub plain_level: bool,
    pub is_dead: bool,
    /// True only for the tick in which the player stands in a save point's trigger radius.
    pub save_flag: bool,
    tuning: PlayerTuning,
}

impl Player {
    /// Id reserved for the player's own body. Scene ids start at 1.
    pub const BODY_ID: EntityId = EntityId(0);

    pub fn new(cfg: &GameConfig) -> Self {
        let tuning = PlayerTuning::from(cfg);
        Self {
            body: Entity::new(Self::BODY_ID, EntityKind::Player, cfg.player_size())
                .with_vel(Vec2::new(0.0, tuning.gravity)),
            life: cfg.start_life,
            max_life: cfg.max_life,
            energy: cfg.start_energy,
            max_energy: cfg.max_energy,
            coins: 0,
            max_wallet: cfg.max_wallet,
            jumping: false,
            plain_level: false,
            is_dead: false,
            save_flag: false,
            tuning,
        }
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.body.pos = pos;
        self
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.body.vel
    }

    // -- Movement commands --

    pub fn go_left(&mut self) {
        self.body.vel.x = -self.tuning.move_speed;
    }

    pub fn go_right(&mut self) {
        self.body.vel.x = self.tuning.move_speed;
    }

    /// Upward movement, plain levels only.
    pub fn go_up(&mut self) {
        self.body.vel.y = -self.tuning.plain_speed;
    }

    /// Downward movement, plain levels only.
    pub fn go_down(&mut self) {
        self.body.vel.y = self.tuning.plain_speed;
    }

    pub fn stop_x(&mut self) {
        self.body.vel.x = 0.0;
    }

    pub fn stop_y(&mut self) {
        self.body.vel.y = 0.0;
    }

    /// Start a jump. Ignored while a jump is in progress.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.body.vel.y = self.tuning.jump_impulse;
            self.jumping = true;
        }
    }

    /// Landed: stop vertical motion and allow the next jump.
    pub fn stop_fall(&mut self) {
        self.body.vel.y = 0.0;
        self.jumping = false;
    }

    /// One tick of gravity, clamped to the maximum fall velocity.
    pub fn fall(&mut self) {
        self.body.vel.y += self.tuning.gravity;
        if self.body.vel.y > self.tuning.max_fall_velocity {
            self.body.vel.y = self.tuning.max_fall_velocity;
        }
    }

    // -- Stats --

    /// Add one coin. A full wallet makes this a no-op.
    pub fn add_coin(&mut self) {
        self.coins = self.coins.saturating_add(1).min(self.max_wallet);
    }

    pub fn kill(&mut self) {
        self.is_dead = true;
    }

    // -- Persistence --

    pub fn to_record(&self, name: impl Into<String>) -> SaveRecord {
        SaveRecord {
            name: name.into(),
            life: (self.life, self.max_life),
            energy: (self.energy, self.max_energy),
            coins: (self.coins, self.max_wallet),
        }
    }

    /// Load stats from a save record. Coins are clamped to the record's wallet.
    pub fn apply_record(&mut self, record: &SaveRecord) {
        self.life = record.life.0;
        self.max_life = record.life.1;
        self.energy = record.energy.0;
        self.max_energy = record.energy.1;
        self.max_wallet = record.coins.1;
        self.coins = record.coins.0.min(self.max_wallet);
        self.is_dead = false;
    }
}
