use thiserror::Error;

/// Which of the two scroll reference corners is being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Grid cell (0, 0).
    Start,
    /// Last row, last column of the first row's width.
    End,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Corner::Start => f.write_str("start"),
            Corner::End => f.write_str("end"),
        }
    }
}

/// Errors raised while configuring or building a level.
/// The per-tick simulation itself never fails.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level grid has no rows")]
    EmptyGrid,

    #[error("no floor tile at the {corner} corner (row {row}, col {col}) to anchor scrolling")]
    MissingReference { corner: Corner, row: usize, col: usize },

    #[error("invalid game config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid save record: {0}")]
    Save(#[source] serde_json::Error),
}
