pub mod queue;

pub use queue::{CommandQueue, PlayerCommand};
