use snafu::Snafu;

use crate::commands::Command;

/// Every way a command can fail. The display text is exactly what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CommandError {
    #[snafu(display("Usage: {command} <{argument}>"))]
    Usage {
        command: Command,
        argument: &'static str,
    },
    #[snafu(display("command not found: {name}"))]
    UnknownCommand { name: String },
    #[snafu(display("cd: no such directory: {path}"))]
    NoSuchDirectory { path: String },
    #[snafu(display("cd: not a directory: {path}"))]
    NotADirectory { path: String },
    #[snafu(display("ls: cannot access '{path}': No such file or directory"))]
    CannotAccess { path: String },
    #[snafu(display("{command}: {path}: No such file or directory"))]
    NoSuchFile { command: Command, path: String },
    #[snafu(display("{command}: {path}: Is a directory"))]
    IsADirectory { command: Command, path: String },
    #[snafu(display("tree: '{path}': No such file or directory"))]
    TreeNotFound { path: String },
    #[snafu(display("tree: '{path}': Not a directory"))]
    TreeNotADirectory { path: String },
    #[snafu(display("Error: Incorrect password"))]
    IncorrectPassword,
    #[snafu(display("protect: {path} is already protected"))]
    AlreadyProtected { path: String },
    #[snafu(display("unprotect: {path} is not protected"))]
    NotProtected { path: String },
    #[snafu(display("protect: operation cancelled"))]
    Cancelled,
}
