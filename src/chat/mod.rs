//! Interactive chat mode.
//!
//! A line-oriented read loop: every line is one stateless turn against the
//! completion endpoint, and `exit` (any case) or end of input ends it.

/// Input classification.
pub mod command;
/// String-literal quoting of user input.
pub mod escape;
mod session;
mod ui;

pub use session::{ChatSession, PROMPT, SessionState};
pub use ui::{print_goodbye, print_header};
