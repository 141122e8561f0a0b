use crate::{Board, Outcome, Player};

/// How many markers in a line are needed to win.
pub const WINNING_LINE: usize = 4;

/// Decides whether the marker at `(column, row)` ended the game.
///
/// This is meant to be called right after a marker has been placed at that
/// cell, with the player owning it. The lines through the cell are checked
/// in a fixed order (vertical, horizontal, anti-diagonal, diagonal), and if
/// none of them is long enough, a completely filled board is a tie.
///
/// An empty or out-of-bounds cell never wins.
pub fn evaluate(board: &Board, column: usize, row: usize) -> Option<Outcome> {
    if let Some(Some(player)) = board.get(column, row) {
        let lines = [
            // Markers can only lie below the newest one in its column.
            count_in_direction(board, column, row, player, 0, -1) + 1,
            line_length(board, column, row, player, (1, 0)),
            line_length(board, column, row, player, (-1, 1)),
            line_length(board, column, row, player, (1, 1)),
        ];
        if lines.into_iter().any(|len| len >= WINNING_LINE) {
            return Some(Outcome::Won(player));
        }
    }
    board.is_full().then_some(Outcome::Tie)
}

/// The length of the line of `player`'s markers through `(column, row)`
/// along `direction`, counting both ways and the cell itself.
fn line_length(
    board: &Board,
    column: usize,
    row: usize,
    player: Player,
    (dc, dr): (isize, isize),
) -> usize {
    count_in_direction(board, column, row, player, dc, dr)
        + count_in_direction(board, column, row, player, -dc, -dr)
        + 1
}

// Counts consecutive markers of `player`, starting next to (column, row) and
// stopping at the first other cell or at the edge of the board.
fn count_in_direction(
    board: &Board,
    mut column: usize,
    mut row: usize,
    player: Player,
    dc: isize,
    dr: isize,
) -> usize {
    let mut count = 0;
    loop {
        let next = column
            .checked_add_signed(dc)
            .zip(row.checked_add_signed(dr));
        match next {
            Some((c, r)) if board.get(c, r) == Some(Some(player)) => {
                count += 1;
                column = c;
                row = r;
            }
            _ => return count,
        }
    }
}
