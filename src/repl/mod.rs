//! Terminal front end around [`crate::commands::Shell`].

mod prompt;
mod repl;

pub use prompt::Prompt;
pub use repl::{Markup, Repl};
