use crate::GameSnapshot;

/// Shows the game to the players.
///
/// Front-ends call this after every accepted move and after starting a new
/// game. The rules engine itself never draws anything.
pub trait Presenter {
    fn present(&mut self, snapshot: &GameSnapshot) -> std::io::Result<()>;
}

/// Keeps every snapshot, mostly useful in tests.
impl Presenter for Vec<GameSnapshot> {
    fn present(&mut self, snapshot: &GameSnapshot) -> std::io::Result<()> {
        self.push(*snapshot);
        Ok(())
    }
}
