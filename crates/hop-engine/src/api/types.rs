/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A sound event emitted by the simulation.
/// The numeric value maps to a cue in the host's audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u8);

impl SoundEvent {
    /// Played when a coin is picked up (even into a full wallet).
    pub const COIN: SoundEvent = SoundEvent(1);
    /// Played when the player steps into a save point.
    pub const SAVE: SoundEvent = SoundEvent(2);
}

/// Gameplay events produced by one level tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    CoinCollected { coins: u32 },
    SnowHit { life: i32 },
    Saved,
    PlayerDied,
    Completed,
}

/// Result of one level tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    Running,
    /// The level has ended (death or enough coins). Only horizontal levels finish.
    Finished,
}

impl LevelStatus {
    pub fn is_finished(self) -> bool {
        self == LevelStatus::Finished
    }
}
