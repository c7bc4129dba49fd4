//! Level orchestrator: owns the built scene and the player, and runs one tick as
//! entity self-update, player physics, scroll, HUD refresh, termination check.

pub mod builder;
pub mod catalog;
pub mod grid;
pub mod scroll;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::error::LevelError;
use crate::api::types::{EntityId, LevelEvent, LevelStatus, SoundEvent};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::PlayerCommand;
use crate::player::{Player, StepReport};
use crate::systems::entities::update_entities;
use crate::systems::render::HudSnapshot;

use builder::LevelBuilder;
use catalog::LevelDef;
use scroll::ScrollController;

/// How a level plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelKind {
    /// Side view with gravity. Ends on death or once enough coins are collected.
    #[default]
    Horizontal,
    /// Top-down view, gravity off, free 4-way movement. Never ends on its own.
    Plain,
}

impl LevelKind {
    pub fn has_gravity(self) -> bool {
        self == LevelKind::Horizontal
    }

    pub fn self_terminates(self) -> bool {
        self == LevelKind::Horizontal
    }
}

pub struct Level {
    name: String,
    kind: LevelKind,
    theme: Option<String>,
    pub scene: Scene,
    pub player: Player,
    references: [EntityId; 2],
    world_size: Vec2,
    scroll: ScrollController,
    config: GameConfig,
    /// Sound cues emitted since the last `clear_frame_data`.
    pub sounds: Vec<SoundEvent>,
    /// Gameplay events emitted since the last `clear_frame_data`.
    pub events: Vec<LevelEvent>,
    hud: HudSnapshot,
    status: LevelStatus,
    /// Save flag as of the previous tick, to fire save cues on entry only.
    was_saving: bool,
}

impl Level {
    /// Build a level with a fresh player.
    pub fn new(def: &LevelDef, config: &GameConfig) -> Result<Self, LevelError> {
        Self::with_player(def, config, Player::new(config))
    }

    /// Build a level around an existing player, keeping its stats.
    /// The player is moved to the level's enter point and revived. A player entering
    /// with no life left dies again on the first tick.
    pub fn with_player(def: &LevelDef, config: &GameConfig, mut player: Player) -> Result<Self, LevelError> {
        let builder = LevelBuilder::new(config);
        let built = builder.build(&def.grid())?;
        let mut scene = built.scene;

        if def.snow_flakes > 0 {
            let mut rng = Rng::new(config.snow_seed);
            builder.scatter_snow(&mut scene, def.snow_flakes, built.world_size, &mut rng);
        }

        player.body.pos = def.init;
        player.plain_level = !def.kind.has_gravity();
        player.jumping = false;
        player.save_flag = false;
        player.is_dead = false;
        player.body.vel = if player.plain_level {
            Vec2::ZERO
        } else {
            Vec2::new(0.0, player.tuning().gravity)
        };

        log::info!(
            "level {:?} ready: {:?}, {} entities, enter point ({}, {})",
            def.name,
            def.kind,
            scene.len(),
            def.init.x,
            def.init.y
        );

        let hud = HudSnapshot::from_player(&player);
        Ok(Self {
            name: def.name.clone(),
            kind: def.kind,
            theme: def.theme.clone(),
            scene,
            player,
            references: built.references,
            world_size: built.world_size,
            scroll: ScrollController::new(config.screen_size()),
            config: config.clone(),
            sounds: Vec::new(),
            events: Vec::new(),
            hud,
            status: LevelStatus::Running,
            was_saving: false,
        })
    }

    /// Run one simulation tick. A finished level stays finished and is not simulated.
    pub fn tick(&mut self) -> LevelStatus {
        if self.status.is_finished() {
            return self.status;
        }

        update_entities(&mut self.scene, self.config.screen_height, self.config.fixed_dt);

        let report = self.player.update(&self.scene);
        self.scene.despawn_all(&report.consumed);
        self.emit_step(&report);
        self.check_death();

        self.scroll.scroll(&mut self.player, &mut self.scene, &self.references);
        self.hud = HudSnapshot::from_player(&self.player);

        if self.kind.self_terminates() && self.reached_end() {
            self.status = LevelStatus::Finished;
            self.events.push(LevelEvent::Completed);
            log::info!(
                "level {:?} finished: coins {}, dead {}",
                self.name,
                self.player.coins,
                self.player.is_dead
            );
        }

        self.status
    }

    fn reached_end(&self) -> bool {
        self.player.is_dead || self.player.coins >= self.config.win_coins
    }

    fn emit_step(&mut self, report: &StepReport) {
        for _ in 0..report.coins_picked {
            self.sounds.push(SoundEvent::COIN);
            self.events.push(LevelEvent::CoinCollected { coins: self.player.coins });
        }
        if report.coins_picked > 0 {
            log::debug!("coins picked: {} (wallet {})", report.coins_picked, self.player.coins);
        }

        for _ in 0..report.snow_hits {
            self.events.push(LevelEvent::SnowHit { life: self.player.life });
        }
        if report.snow_hits > 0 {
            log::debug!("snow hits: {} (life {})", report.snow_hits, self.player.life);
        }

        if self.player.save_flag && !self.was_saving {
            self.sounds.push(SoundEvent::SAVE);
            self.events.push(LevelEvent::Saved);
            log::debug!("save point reached at ({}, {})", self.player.pos().x, self.player.pos().y);
        }
        self.was_saving = self.player.save_flag;
    }

    fn check_death(&mut self) {
        if !self.player.is_dead && self.player.life <= 0 {
            self.player.kill();
            self.events.push(LevelEvent::PlayerDied);
            log::info!("player died in {:?}", self.name);
        }
    }

    /// Apply a movement command to the player.
    ///
    /// Jumps only exist with gravity, vertical moves only without it. Commands to a
    /// finished level are dropped.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        if self.status.is_finished() {
            log::warn!("command {:?} ignored: level {:?} is finished", command, self.name);
            return;
        }

        let gravity = self.kind.has_gravity();
        match command {
            PlayerCommand::MoveLeft => self.player.go_left(),
            PlayerCommand::MoveRight => self.player.go_right(),
            PlayerCommand::StopX => self.player.stop_x(),
            PlayerCommand::Jump if gravity => self.player.jump(),
            PlayerCommand::MoveUp if !gravity => self.player.go_up(),
            PlayerCommand::MoveDown if !gravity => self.player.go_down(),
            PlayerCommand::StopY if !gravity => self.player.stop_y(),
            _ => {}
        }
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LevelKind {
        self.kind
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn hud(&self) -> HudSnapshot {
        self.hud
    }

    /// Start and end corner floors bounding the scroll.
    pub fn references(&self) -> [EntityId; 2] {
        self.references
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Hand the player over, e.g. to carry its stats into the next level.
    pub fn into_player(self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::Corner;
    use crate::components::entity::Entity;
    use crate::components::kind::EntityKind;

    /// Small enough that the viewport never soft-scrolls.
    fn box_level(kind: LevelKind, middle: &str, init: Vec2) -> Level {
        let def = LevelDef::new("box", kind, init, &["fffff", "f   f", middle, "fffff"]);
        Level::new(&def, &GameConfig::default()).unwrap()
    }

    fn box_level_with(kind: LevelKind, player: Player) -> Level {
        let def = LevelDef::new("box", kind, Vec2::new(60.0, 60.0), &["fffff", "f   f", "f   f", "fffff"]);
        Level::with_player(&def, &GameConfig::default(), player).unwrap()
    }

    #[test]
    fn coin_pickup_emits_cue_and_despawns() {
        let mut level = box_level(LevelKind::Horizontal, "f c f", Vec2::new(110.0, 105.0));
        let before = level.scene.len();

        assert_eq!(level.tick(), LevelStatus::Running);
        assert_eq!(level.player.coins, 1);
        assert_eq!(level.scene.len(), before - 1);
        assert_eq!(level.sounds, vec![SoundEvent::COIN]);
        assert_eq!(level.events, vec![LevelEvent::CoinCollected { coins: 1 }]);
        assert_eq!(level.hud().coins, 1);

        level.clear_frame_data();
        level.tick();
        assert!(level.sounds.is_empty());
        assert_eq!(level.player.coins, 1);
    }

    #[test]
    fn horizontal_level_ends_at_win_coins() {
        let mut level = box_level(LevelKind::Horizontal, "f c f", Vec2::new(110.0, 105.0));
        level.player.coins = 9;

        assert_eq!(level.tick(), LevelStatus::Finished);
        assert_eq!(level.events.last(), Some(&LevelEvent::Completed));

        let pos = level.player.pos();
        level.apply_command(PlayerCommand::MoveRight);
        assert_eq!(level.tick(), LevelStatus::Finished);
        assert_eq!(level.player.pos(), pos);
        assert_eq!(level.player.vel().x, 0.0);
    }

    #[test]
    fn plain_level_never_self_terminates() {
        let mut level = box_level(LevelKind::Plain, "f c f", Vec2::new(110.0, 105.0));
        level.player.coins = 20;
        assert_eq!(level.tick(), LevelStatus::Running);
        assert!(!level.events.contains(&LevelEvent::Completed));
    }

    #[test]
    fn last_life_lost_to_snow_kills_and_ends() {
        let mut level = box_level(LevelKind::Horizontal, "f   f", Vec2::new(110.0, 105.0));
        level.player.life = 1;
        let id = level.scene.next_id();
        level
            .scene
            .spawn(Entity::new(id, EntityKind::Snow, Vec2::splat(2.0)).with_pos(Vec2::new(120.0, 120.0)));

        assert_eq!(level.tick(), LevelStatus::Finished);
        assert!(level.player.is_dead);
        assert_eq!(
            level.events,
            vec![
                LevelEvent::SnowHit { life: 0 },
                LevelEvent::PlayerDied,
                LevelEvent::Completed
            ]
        );
    }

    #[test]
    fn save_cue_fires_on_entry_only() {
        let mut level = box_level(LevelKind::Plain, "f s f", Vec2::new(110.0, 105.0));

        level.tick();
        assert!(level.player.save_flag);
        assert_eq!(level.sounds, vec![SoundEvent::SAVE]);
        assert_eq!(level.events, vec![LevelEvent::Saved]);

        level.clear_frame_data();
        level.tick();
        assert!(level.player.save_flag);
        assert!(level.events.is_empty());

        level.player.body.pos = Vec2::new(60.0, 60.0);
        level.tick();
        assert!(!level.player.save_flag);

        level.clear_frame_data();
        level.player.body.pos = Vec2::new(110.0, 105.0);
        level.tick();
        assert_eq!(level.events, vec![LevelEvent::Saved]);
    }

    #[test]
    fn commands_follow_level_kind() {
        let mut side = box_level(LevelKind::Horizontal, "f   f", Vec2::new(60.0, 60.0));
        side.apply_command(PlayerCommand::MoveUp);
        assert_eq!(side.player.vel().y, 0.35);
        side.apply_command(PlayerCommand::Jump);
        assert_eq!(side.player.vel().y, -10.0);

        let mut plain = box_level(LevelKind::Plain, "f   f", Vec2::new(60.0, 60.0));
        plain.apply_command(PlayerCommand::Jump);
        assert_eq!(plain.player.vel().y, 0.0);
        plain.apply_command(PlayerCommand::MoveDown);
        assert_eq!(plain.player.vel().y, 3.0);
        plain.apply_command(PlayerCommand::MoveLeft);
        assert_eq!(plain.player.vel().x, -3.0);
    }

    #[test]
    fn plain_level_has_no_gravity() {
        let mut level = box_level(LevelKind::Plain, "f   f", Vec2::new(60.0, 60.0));
        for _ in 0..10 {
            level.tick();
        }
        assert_eq!(level.player.pos(), Vec2::new(60.0, 60.0));
    }

    #[test]
    fn doom_valley_enters_below_screen_and_recenters() {
        let mut level = Level::new(&catalog::doom_valley(), &GameConfig::default()).unwrap();
        assert_eq!(level.scene.iter().filter(|e| e.kind == EntityKind::Snow).count(), 50);
        assert_eq!(level.player.pos(), Vec2::new(50.0, 900.0));
        assert_eq!(level.theme(), Some("doom_valley"));

        assert_eq!(level.tick(), LevelStatus::Running);
        assert_eq!(level.player.pos().y, 300.0);
        assert_eq!(level.player.pos().x, 50.0);
        let start = level.scene.get(level.references()[0]).unwrap();
        assert!(start.pos.y < -600.0);
    }

    #[test]
    fn player_stats_carry_into_next_level() {
        let cfg = GameConfig::default();
        let mut first = Level::new(&catalog::doom_valley(), &cfg).unwrap();
        first.player.coins = 7;
        first.player.life = 55;

        let next = Level::with_player(&catalog::the_ring(), &cfg, first.into_player()).unwrap();
        assert_eq!(next.player.coins, 7);
        assert_eq!(next.player.life, 55);
        assert!(next.player.plain_level);
        assert_eq!(next.player.pos(), Vec2::new(150.0, 850.0));
        assert_eq!(next.player.vel(), Vec2::ZERO);
    }

    #[test]
    fn next_level_revives_player() {
        let cfg = GameConfig::default();
        let mut dead = Player::new(&cfg);
        dead.kill();
        let level = Level::with_player(&catalog::the_ring(), &cfg, dead).unwrap();
        assert!(!level.player.is_dead);

        let mut drained = Player::new(&cfg);
        drained.life = 0;
        drained.kill();
        let mut level = box_level_with(LevelKind::Horizontal, drained);
        assert!(!level.player.is_dead);
        assert_eq!(level.tick(), LevelStatus::Finished);
        assert!(level.player.is_dead);
        assert_eq!(level.events, vec![LevelEvent::PlayerDied, LevelEvent::Completed]);
    }

    #[test]
    fn build_failure_propagates() {
        let def = LevelDef::new("broken", LevelKind::Plain, Vec2::ZERO, &["ff", "f "]);
        let err = Level::new(&def, &GameConfig::default()).err().unwrap();
        assert!(matches!(err, LevelError::MissingReference { corner: Corner::End, .. }));
    }
}
