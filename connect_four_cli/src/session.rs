use std::io::{BufRead, Write};

use connect_four::{GameSnapshot, GameState, IllegalMove, Outcome, Player, Presenter};
use tracing::{debug, info, warn};

use crate::command::Command;

/// A local game between two players sharing one input, shown through a
/// [`Presenter`] after every change.
pub struct Session<P> {
    state: GameState,
    presenter: P,
}

/// What happened to a single move.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveReport {
    Accepted(GameSnapshot),
    Rejected { player: Player, err: IllegalMove },
}

/// Whether an interactive session should keep reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How the moves of a scripted session went.
#[derive(Debug, Default)]
pub struct ScriptSummary {
    pub accepted: usize,
    /// Index into the script, and why the move was rejected.
    pub rejected: Vec<(usize, IllegalMove)>,
}

impl<P: Presenter> Session<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            state: GameState::new(),
            presenter,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Shows the current state without changing anything.
    pub fn show(&mut self) -> anyhow::Result<()> {
        self.presenter.present(&self.state.snapshot())?;
        Ok(())
    }

    /// Discards the current game and shows the empty board.
    pub fn new_game(&mut self) -> anyhow::Result<()> {
        self.state.reset();
        info!("New game");
        self.show()
    }

    /// Plays one move for the player whose turn it is.
    ///
    /// Returns an error only when presenting fails, not when the move is illegal.
    pub fn play(&mut self, column: i32) -> anyhow::Result<MoveReport> {
        let player = self.state.turn();
        match self.state.apply_move(column) {
            Ok(snapshot) => {
                debug!(player = %player, column, move_idx = self.state.moves_played());
                match snapshot.winner {
                    Some(Outcome::Won(winner)) => {
                        info!(winner = %winner, moves = self.state.moves_played(), "Game won")
                    }
                    Some(Outcome::Tie) => info!(moves = self.state.moves_played(), "Tie"),
                    None => (),
                }
                self.presenter.present(&snapshot)?;
                Ok(MoveReport::Accepted(snapshot))
            }
            Err(err) => {
                warn!(player = %player, column, "Illegal move: {}", err);
                Ok(MoveReport::Rejected { player, err })
            }
        }
    }

    /// Carries out one command.
    ///
    /// Illegal moves are reported to `messages` and otherwise ignored.
    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        messages: &mut W,
    ) -> anyhow::Result<Flow> {
        match command {
            Command::Move(column) => {
                match self.play(column)? {
                    MoveReport::Accepted(GameSnapshot {
                        winner: Some(_), ..
                    }) => writeln!(messages, "Type 'new' to play again.")?,
                    MoveReport::Accepted(_) => (),
                    MoveReport::Rejected { err, .. } => writeln!(messages, "{}", err)?,
                }
            }
            Command::New => self.new_game()?,
            Command::Show => self.show()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or the end of the input.
    ///
    /// Prompts and error messages go to `messages`, the game itself goes
    /// to the presenter.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut messages: W,
    ) -> anyhow::Result<()> {
        self.show()?;
        let mut buf = String::new();
        loop {
            write!(messages, "{} > ", self.state.turn())?;
            messages.flush()?;

            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                writeln!(messages)?;
                break Ok(());
            }
            if buf.trim().is_empty() {
                continue;
            }

            let command = match buf.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(messages, "{}", err)?;
                    continue;
                }
            };
            if self.execute(command, &mut messages)? == Flow::Quit {
                break Ok(());
            }
        }
    }

    /// Plays the given columns in order.
    ///
    /// Stops at the first illegal move unless `keep_going` is set, in which
    /// case illegal moves are skipped.
    pub fn run_script(
        &mut self,
        moves: &[i32],
        keep_going: bool,
    ) -> anyhow::Result<ScriptSummary> {
        self.show()?;
        let mut summary = ScriptSummary::default();
        for (move_idx, &column) in moves.iter().enumerate() {
            match self.play(column)? {
                MoveReport::Accepted(_) => summary.accepted += 1,
                MoveReport::Rejected { err, .. } => {
                    summary.rejected.push((move_idx, err));
                    if !keep_going {
                        break;
                    }
                }
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use connect_four::{Board, COLUMNS};

    use super::*;
    use crate::TextPresenter;

    fn run_lines(lines: &str) -> (Session<Vec<GameSnapshot>>, String) {
        let mut session = Session::new(Vec::<GameSnapshot>::new());
        let mut messages = Vec::new();
        session
            .run_interactive(Cursor::new(lines), &mut messages)
            .unwrap();
        (session, String::from_utf8(messages).unwrap())
    }

    #[test]
    fn interactive_moves() {
        let (session, messages) = run_lines("move 3\n4\n\nm 3\n");
        assert_eq!(session.state().moves_played(), 3);
        assert_eq!(session.state().turn(), Player::B);
        // One snapshot at the start, then one per move
        let snapshots = session.into_presenter();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[0].board, Board::new());
        assert_eq!(snapshots[3].board.get(3, 1), Some(Some(Player::A)));
        assert!(messages.starts_with("Black > Red > "));
    }

    #[test]
    fn interactive_errors_are_reported() {
        let (session, messages) = run_lines("move 9\nfly\nmove -1\n");
        assert_eq!(session.state().moves_played(), 0);
        assert!(messages.contains("Column 9 does not exist"));
        assert!(messages.contains("Unknown command 'fly'"));
        assert!(messages.contains("Column -1 does not exist"));
        // Rejected moves are not presented
        assert_eq!(session.into_presenter().len(), 1);
    }

    #[test]
    fn interactive_full_column() {
        let (session, messages) = run_lines(&"0\n".repeat(7));
        assert_eq!(session.state().moves_played(), 6);
        assert!(messages.contains("Column 0 is already full"));
    }

    #[test]
    fn interactive_game_over_and_new_game() {
        let (session, messages) = run_lines("3\n0\n3\n0\n3\n0\n3\n1\nnew\n1\nquit\n5\n");
        assert!(messages.contains("Type 'new' to play again."));
        assert!(messages.contains("The game is over"));
        // The new game got one move, the line after quit was not read
        assert_eq!(session.state().moves_played(), 1);
        assert_eq!(session.state().winner(), None);
        assert_eq!(session.state().board().get(1, 0), Some(Some(Player::A)));
    }

    #[test]
    fn show_presents_again() {
        let (session, _) = run_lines("2\nshow\n");
        let snapshots = session.into_presenter();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1], snapshots[2]);
    }

    #[test]
    fn script_stops_at_illegal_move() {
        let mut session = Session::new(Vec::<GameSnapshot>::new());
        let summary = session.run_script(&[0, 1, 7, 2], false).unwrap();
        assert_eq!(summary.accepted, 2);
        assert_eq!(
            summary.rejected,
            vec![(2, IllegalMove::InvalidColumn { column: 7 })]
        );
        assert_eq!(session.state().moves_played(), 2);
    }

    #[test]
    fn script_keep_going() {
        let mut session = Session::new(Vec::<GameSnapshot>::new());
        let summary = session.run_script(&[0, 1, 7, 2, -3], true).unwrap();
        assert_eq!(summary.accepted, 3);
        assert_eq!(summary.rejected.len(), 2);
        assert_eq!(session.state().moves_played(), 3);
    }

    #[test]
    fn script_win_then_game_over() {
        let mut session = Session::new(Vec::<GameSnapshot>::new());
        let summary = session
            .run_script(&[0, 6, 1, 6, 2, 6, 3, 4], false)
            .unwrap();
        assert_eq!(summary.accepted, 7);
        assert_eq!(summary.rejected, vec![(7, IllegalMove::GameOver)]);
        assert_eq!(session.state().winner(), Some(Outcome::Won(Player::A)));
    }

    #[test]
    fn script_with_text_output() {
        let mut session = Session::new(TextPresenter::new(Vec::new()));
        let moves: Vec<i32> = (0..COLUMNS as i32).collect();
        let summary = session.run_script(&moves, false).unwrap();
        assert!(summary.rejected.is_empty());
        let text = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        assert!(text.contains("  0 │ ● ○ ● ○ ● ○ ● │\n"));
        assert!(text.ends_with("Red's turn\n\n"));
    }
}
