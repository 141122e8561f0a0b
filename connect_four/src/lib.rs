pub use board::*;
pub use errors::*;
pub use evaluator::*;
pub use game::*;
pub use player::*;
pub use presenter::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod evaluator;
mod game;
mod player;
mod presenter;
mod visualization;
