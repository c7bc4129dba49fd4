/// Player commands the engine understands.
/// Devices are the host's concern; it maps keys or buttons to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    MoveLeft,
    MoveRight,
    /// Release of a horizontal move.
    StopX,
    Jump,
    /// Plain levels only.
    MoveUp,
    /// Plain levels only.
    MoveDown,
    /// Release of a vertical move, plain levels only.
    StopY,
}

/// A queue of player commands.
/// The host pushes commands as they arrive; the runner drains them before each tick.
pub struct CommandQueue {
    commands: Vec<PlayerCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: PlayerCommand) {
        self.commands.push(command);
    }

    /// Drain all pending commands in arrival order and clear the queue.
    pub fn drain(&mut self) -> Vec<PlayerCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
