use crate::api::config::GameConfig;
use crate::api::error::LevelError;
use crate::api::types::{LevelEvent, LevelStatus, SoundEvent};
use crate::core::time::FixedTimestep;
use crate::input::queue::{CommandQueue, PlayerCommand};
use crate::level::catalog::LevelDef;
use crate::level::Level;
use crate::renderer::instance::RenderBuffer;
use crate::systems::render::build_render_buffer;

/// Drives a level from a variable-rate frame loop.
///
/// Frame time is accumulated into fixed ticks. Queued commands reach the player
/// before each tick, and the render buffer is rebuilt once per frame.
pub struct LevelRunner {
    level: Level,
    commands: CommandQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    /// Flat buffer of sound cue ids for the audio collaborator.
    sound_buffer: Vec<u8>,
}

impl LevelRunner {
    pub fn new(level: Level) -> Self {
        let timestep = FixedTimestep::new(level.config().fixed_dt);
        let mut runner = Self {
            level,
            commands: CommandQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            sound_buffer: Vec::with_capacity(32),
        };
        runner.rebuild_render_buffer();
        runner
    }

    /// Build `def` with a fresh player and wrap it in a runner.
    pub fn from_def(def: &LevelDef, config: &GameConfig) -> Result<Self, LevelError> {
        Ok(Self::new(Level::new(def, config)?))
    }

    /// Replace the current level with `def`, carrying the player's stats over.
    pub fn advance(&mut self, def: &LevelDef) -> Result<(), LevelError> {
        let config = self.level.config().clone();
        let player = self.level.player.clone();
        self.level = Level::with_player(def, &config, player)?;
        self.commands.drain();
        self.timestep.reset();
        self.rebuild_render_buffer();
        Ok(())
    }

    pub fn push_command(&mut self, command: PlayerCommand) {
        self.commands.push(command);
    }

    /// Run one frame: zero or more fixed ticks, then rebuild the render buffer.
    /// Returns the level status after the frame.
    pub fn tick(&mut self, frame_dt: f32) -> LevelStatus {
        self.level.clear_frame_data();

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            for command in self.commands.drain() {
                self.level.apply_command(command);
            }
            if self.level.tick().is_finished() {
                break;
            }
        }

        self.rebuild_render_buffer();

        self.sound_buffer.clear();
        for sound in &self.level.sounds {
            self.sound_buffer.push(sound.0);
        }

        self.level.status()
    }

    fn rebuild_render_buffer(&mut self) {
        build_render_buffer(self.level.scene.iter(), &self.level.player, &mut self.render_buffer);
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.level.sounds
    }

    pub fn sound_bytes(&self) -> &[u8] {
        &self.sound_buffer
    }

    pub fn events(&self) -> &[LevelEvent] {
        &self.level.events
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }
}
