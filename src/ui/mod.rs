// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod command;
pub mod errors;
pub mod session;

pub use cli::{Args, CommandHandler};
pub use command::Command;
pub use errors::{CommandError, CommandResult, ErrorDisplay};
pub use session::{Outcome, Session, SessionStats};
