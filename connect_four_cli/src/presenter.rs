use std::io::Write;

use connect_four::{status_line, visualize_board, GameSnapshot, Presenter};
use serde::Serialize;

/// Draws the board as text, followed by the status line.
pub struct TextPresenter<W> {
    writer: W,
}

/// Writes one JSON object per snapshot and line.
pub struct JsonPresenter<W> {
    writer: W,
}

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    #[serde(flatten)]
    snapshot: &'a GameSnapshot,
    status: String,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, snapshot: &GameSnapshot) -> std::io::Result<()> {
        writeln!(self.writer, "{}", visualize_board(&snapshot.board))?;
        writeln!(self.writer, "{}\n", status_line(snapshot))?;
        self.writer.flush()
    }
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, snapshot: &GameSnapshot) -> std::io::Result<()> {
        let line = JsonSnapshot {
            snapshot,
            status: status_line(snapshot),
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
