use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// [`Player::A`] always moves first. In the user-facing texts it plays the
/// black markers, [`Player::B`] plays the red ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The player whose turn comes after this one.
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The color name of this player's markers.
    pub fn color_name(self) -> &'static str {
        match self {
            Player::A => "Black",
            Player::B => "Red",
        }
    }

    /// The character used for this player's markers in the text board.
    pub fn marker_char(self) -> char {
        match self {
            Player::A => '●',
            Player::B => '○',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color_name())
    }
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won(Player),
    Tie,
}
