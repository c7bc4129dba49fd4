/// Entity category: the closed set of things that can exist in a level.
///
/// Collision behaviour is dispatched on this tag. The numeric values are stable and
/// are what the render buffer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityKind {
    Floor = 0,
    Hole = 1,
    SavePoint = 2,
    Coin = 3,
    Snow = 4,
    Platform = 5,
    Lava = 6,
    Player = 7,
}

/// Collision group an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Persists through collisions.
    Solid,
    /// Consumed on the first overlap with the player.
    Weak,
}

impl EntityKind {
    /// Total number of kinds.
    pub const COUNT: usize = 8;

    /// Map a level-grid symbol to the kind it builds.
    /// Returns None for the empty cell and for unknown symbols.
    /// Snow and Player are never built from the grid.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'f' => Some(Self::Floor),
            'h' => Some(Self::Hole),
            's' => Some(Self::SavePoint),
            'c' => Some(Self::Coin),
            'p' => Some(Self::Platform),
            'l' => Some(Self::Lava),
            _ => None,
        }
    }

    /// The collision group, or None for the player itself.
    pub fn group(self) -> Option<Group> {
        match self {
            Self::Floor | Self::Hole | Self::SavePoint | Self::Platform | Self::Lava => {
                Some(Group::Solid)
            }
            Self::Coin | Self::Snow => Some(Group::Weak),
            Self::Player => None,
        }
    }

    pub fn is_solid(self) -> bool {
        self.group() == Some(Group::Solid)
    }

    pub fn is_weak(self) -> bool {
        self.group() == Some(Group::Weak)
    }

    /// Convert from a u8 value. Returns None if out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Floor),
            1 => Some(Self::Hole),
            2 => Some(Self::SavePoint),
            3 => Some(Self::Coin),
            4 => Some(Self::Snow),
            5 => Some(Self::Platform),
            6 => Some(Self::Lava),
            7 => Some(Self::Player),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
