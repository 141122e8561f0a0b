use serde::{Deserialize, Serialize};

use crate::{evaluate, Board, IllegalMove, Outcome, Player, COLUMNS};

/// The rules engine for one game: owns the board, whose turn it is, and the
/// result once there is one.
///
/// [`GameState::apply_move()`] is the only way to change the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    winner: Option<Outcome>,
    moves_played: usize,
}

/// A copy of everything needed to draw the game, as handed to a
/// [`Presenter`](crate::Presenter).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    /// The player to move next. This keeps alternating even after the last
    /// move of a game.
    pub turn: Player,
    /// `None` while the game is still going on.
    pub winner: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// An empty board with [`Player::A`] to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::A,
            winner: None,
            moves_played: 0,
        }
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drops a marker of the current player into `column`.
    ///
    /// A move is rejected when the game is already over, when the column does
    /// not exist, or when it is full, checked in that order. A rejected move
    /// changes nothing.
    ///
    /// After an accepted move, the turn passes to the other player
    /// unconditionally, including after the move that ends the game.
    pub fn apply_move(&mut self, column: i32) -> Result<GameSnapshot, IllegalMove> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < COLUMNS)
            .ok_or(IllegalMove::InvalidColumn { column })?;
        let row = self
            .board
            .drop_marker(col, self.turn)
            .ok_or(IllegalMove::ColumnFull { column: col })?;

        // The evaluator reports the owner of the new marker, which is always
        // the player whose turn it was.
        self.winner = evaluate(&self.board, col, row);
        debug_assert!(!matches!(self.winner, Some(Outcome::Won(p)) if p != self.turn));
        self.turn = self.turn.other();
        self.moves_played += 1;
        Ok(self.snapshot())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Whether the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The number of moves accepted since the game started.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The columns that would accept a marker right now.
    ///
    /// This is empty once the game is over.
    pub fn playable_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..COLUMNS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            winner: self.winner,
        }
    }
}
