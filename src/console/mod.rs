//! Console Module
//!
//! Line-oriented front end over the record store.
//!
//! ## Input Format
//! ```text
//! write <key> <value>
//! read <key>
//! delete <key>
//! ```
//!
//! Tokens are whitespace separated. Blank lines are ignored. The first
//! failing line (bad command or engine error) ends the session with that
//! error.

mod command;
mod session;

pub use command::{Command, CommandType};
pub use session::{execute, run};
