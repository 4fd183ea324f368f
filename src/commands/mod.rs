//! The commands of the simulated shell and the password gate in front of protected files.

mod command;
mod error;
mod gate;
mod shell;

pub use command::Command;
pub use error::*;
pub use shell::{Outcome, Shell};
