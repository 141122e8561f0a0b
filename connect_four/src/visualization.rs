use crate::{Board, GameSnapshot, Outcome, COLUMNS, ROWS};

/// Draws the board as text, top row first, with the column numbers below.
pub fn visualize_board(board: &Board) -> String {
    // Draw the top of the box
    let mut result = String::from("    ╭");
    for _ in 0..COLUMNS {
        result += "──";
    }
    result += "─╮\n";

    for row in (0..ROWS).rev() {
        result += &format!("{:>3} │", row);
        for column in 0..COLUMNS {
            match board.column(column)[row] {
                Some(player) => {
                    result.push(' ');
                    result.push(player.marker_char());
                }
                None => result += " ·",
            }
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..COLUMNS {
        result += "──";
    }
    result += "─╯\n     ";
    for column in 0..COLUMNS {
        result += &format!(" {}", column);
    }
    result
}

/// A one-line summary of whose turn it is or how the game ended.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.winner {
        Some(Outcome::Tie) => String::from("It's a tie!"),
        Some(Outcome::Won(player)) => format!("{} wins!", player),
        None => format!("{}'s turn", snapshot.turn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player};

    #[test]
    fn empty_board() {
        let expected = "    ╭───────────────╮\n".to_string()
            + "  5 │ · · · · · · · │\n"
            + "  4 │ · · · · · · · │\n"
            + "  3 │ · · · · · · · │\n"
            + "  2 │ · · · · · · · │\n"
            + "  1 │ · · · · · · · │\n"
            + "  0 │ · · · · · · · │\n"
            + "    ╰───────────────╯\n"
            + "      0 1 2 3 4 5 6";
        assert_eq!(visualize_board(&Board::new()), expected);
    }

    #[test]
    fn markers_are_drawn_from_the_bottom() {
        let mut state = GameState::new();
        state.apply_move(0).unwrap();
        state.apply_move(0).unwrap();
        state.apply_move(6).unwrap();
        let text = visualize_board(state.board());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "  0 │ ● · · · · · ● │");
        assert_eq!(lines[5], "  1 │ ○ · · · · · · │");
    }

    #[test]
    fn status() {
        let mut state = GameState::new();
        assert_eq!(status_line(&state.snapshot()), "Black's turn");
        let snapshot = state.apply_move(0).unwrap();
        assert_eq!(status_line(&snapshot), "Red's turn");

        let won = GameSnapshot {
            winner: Some(Outcome::Won(Player::B)),
            ..snapshot
        };
        assert_eq!(status_line(&won), "Red wins!");
        let tie = GameSnapshot {
            winner: Some(Outcome::Tie),
            ..snapshot
        };
        assert_eq!(status_line(&tie), "It's a tie!");
    }
}
