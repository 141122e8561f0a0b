/// The error type for [`GameState::apply_move()`](crate::GameState::apply_move).
///
/// None of these are fatal: the game state is left untouched and the same
/// player may simply try another column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The column index is outside of the board.
    InvalidColumn { column: i32 },
    /// The column has no empty cell left.
    ColumnFull { column: usize },
    /// The game has already been won or tied.
    GameOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidColumn { column } => write!(
                f,
                "Column {} does not exist, columns are numbered 0 to {}",
                column,
                crate::COLUMNS - 1
            ),
            IllegalMove::ColumnFull { column } => write!(f, "Column {} is already full", column),
            IllegalMove::GameOver => {
                write!(f, "The game is over, start a new one to keep playing")
            }
        }
    }
}
