use std::str::FromStr;

use derive_more::Display;

use crate::commands::CommandError;

/// The commands the shell core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Command {
    #[display("pwd")]
    Pwd,
    #[display("cd")]
    Cd,
    #[display("ls")]
    Ls,
    #[display("cat")]
    Cat,
    #[display("protect")]
    Protect,
    #[display("unprotect")]
    Unprotect,
    #[display("tree")]
    Tree,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Pwd,
        Command::Cd,
        Command::Ls,
        Command::Cat,
        Command::Protect,
        Command::Unprotect,
        Command::Tree,
    ];
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.to_string() == name)
            .ok_or_else(|| CommandError::UnknownCommand {
                name: name.to_string(),
            })
    }
}
