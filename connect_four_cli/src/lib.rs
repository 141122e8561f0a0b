mod command;
mod error;
mod presenter;
mod session;
pub use command::*;
pub use error::*;
pub use presenter::*;
pub use session::*;
