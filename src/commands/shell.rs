use snafu::{OptionExt, ensure};
use tracing::{debug, info};

use crate::commands::gate::{self, Challenge, ChallengeKind};
use crate::commands::{
    AlreadyProtectedSnafu, CannotAccessSnafu, Command, CommandError, IsADirectorySnafu,
    NoSuchDirectorySnafu, NoSuchFileSnafu, NotADirectorySnafu, NotProtectedSnafu,
    TreeNotADirectorySnafu, TreeNotFoundSnafu, UsageSnafu,
};
use crate::filesystem::{FileTree, Location, Node, RenderedTree, fixture};

const EXECUTABLES_HINT: &str = "\nThere are some fun programs for you to try out! Run one with <span class='text-dark-green'>./[program].exe</span>";

/// What a command produced: finished text or a request for a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Challenge(Challenge),
}

/// Result of [`Shell::execute`] along with the session location after the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub outcome: Outcome,
    pub location: Location,
}

impl Reply {
    fn output(text: impl Into<String>, location: Location) -> Self {
        Self {
            outcome: Outcome::Output(text.into()),
            location,
        }
    }
}

/// Runs commands against one filesystem tree.
///
/// The shell owns the tree but not the session location: every call takes the
/// caller's current location and the reply carries the (possibly new) one.
#[derive(Debug, Clone)]
pub struct Shell {
    tree: FileTree,
    home: Location,
}

impl Shell {
    pub fn new(tree: FileTree, home: Location) -> Self {
        Self { tree, home }
    }

    pub fn home(&self) -> &Location {
        &self.home
    }

    #[cfg(test)]
    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    /// Runs `name` with `args`. Failures come back as text, never as an error.
    pub fn execute(&self, location: &Location, name: &str, args: &[String]) -> Reply {
        debug!("Executing '{}' with {:?} at {}", name, args, location);

        let result = name
            .parse::<Command>()
            .and_then(|command| self.dispatch(command, location, args));

        match result {
            Ok(reply) => reply,
            Err(error) => {
                debug!("Command '{}' failed: {}", name, error);
                Reply::output(error.to_string(), location.clone())
            }
        }
    }

    /// Resumes the operation suspended by `challenge` with the caller's secret.
    pub fn answer(&mut self, challenge: Challenge, secret: &str) -> String {
        self.resume(challenge, secret)
            .unwrap_or_else(|error| error.to_string())
    }

    fn dispatch(
        &self,
        command: Command,
        location: &Location,
        args: &[String],
    ) -> Result<Reply, CommandError> {
        let target = args.first().map(String::as_str);
        let stay = |outcome| Reply {
            outcome,
            location: location.clone(),
        };

        match command {
            Command::Cd => self.cd(location, target),
            Command::Pwd => Ok(stay(Outcome::Output(location.to_string()))),
            Command::Ls => Ok(stay(Outcome::Output(self.ls(location, target)?))),
            Command::Cat => Ok(stay(self.cat(location, target)?)),
            Command::Protect => Ok(stay(self.protect(location, target)?)),
            Command::Unprotect => Ok(stay(self.unprotect(location, target)?)),
            Command::Tree => Ok(stay(Outcome::Output(self.tree_of(location, target)?))),
        }
    }

    fn cd(&self, location: &Location, target: Option<&str>) -> Result<Reply, CommandError> {
        let Some(path) = target.filter(|path| *path != "~") else {
            return Ok(Reply::output("", self.home.clone()));
        };

        let resolved = location.resolve(path);
        let node = self
            .tree
            .lookup(&resolved)
            .context(NoSuchDirectorySnafu { path })?;
        ensure!(node.is_directory(), NotADirectorySnafu { path });

        if node.name() == fixture::EXECUTABLES_DIR {
            let listing = self.ls(&resolved, None)?;
            return Ok(Reply::output(
                format!("{EXECUTABLES_HINT}\n\n{listing}"),
                resolved,
            ));
        }

        Ok(Reply::output("", resolved))
    }

    fn ls(&self, location: &Location, target: Option<&str>) -> Result<String, CommandError> {
        let resolved = target.map_or_else(|| location.clone(), |path| location.resolve(path));
        let node = self.tree.lookup(&resolved).context(CannotAccessSnafu {
            path: target.unwrap_or_default(),
        })?;

        if !node.is_directory() {
            return Ok(node.name().to_string());
        }

        let names = node
            .sorted_children()
            .into_iter()
            .map(|child| child.display_name())
            .collect::<Vec<_>>();
        Ok(names.join("\n"))
    }

    fn cat(&self, location: &Location, target: Option<&str>) -> Result<Outcome, CommandError> {
        let (resolved, node) = self.file_at(Command::Cat, location, target)?;

        match node {
            Node::File {
                content,
                protection: None,
                ..
            } => Ok(Outcome::Output(content.clone().unwrap_or_default())),
            _ => Ok(Outcome::Challenge(Challenge::new(
                ChallengeKind::Read,
                resolved,
                target.unwrap_or_default(),
            ))),
        }
    }

    fn protect(&self, location: &Location, target: Option<&str>) -> Result<Outcome, CommandError> {
        let (resolved, node) = self.file_at(Command::Protect, location, target)?;
        let path = target.unwrap_or_default();
        ensure!(!node.is_protected(), AlreadyProtectedSnafu { path });

        Ok(Outcome::Challenge(Challenge::new(
            ChallengeKind::Protect,
            resolved,
            path,
        )))
    }

    fn unprotect(&self, location: &Location, target: Option<&str>) -> Result<Outcome, CommandError> {
        let (resolved, node) = self.file_at(Command::Unprotect, location, target)?;
        let path = target.unwrap_or_default();
        ensure!(node.is_protected(), NotProtectedSnafu { path });

        Ok(Outcome::Challenge(Challenge::new(
            ChallengeKind::Unprotect,
            resolved,
            path,
        )))
    }

    fn tree_of(&self, location: &Location, target: Option<&str>) -> Result<String, CommandError> {
        let path = target.unwrap_or_default();
        let resolved = target.map_or_else(|| location.clone(), |path| location.resolve(path));
        let node = self
            .tree
            .lookup(&resolved)
            .context(TreeNotFoundSnafu { path })?;
        ensure!(node.is_directory(), TreeNotADirectorySnafu { path });

        Ok(RenderedTree::of(node).to_string())
    }

    /// Shared argument, existence and type checks of the file commands.
    fn file_at(
        &self,
        command: Command,
        location: &Location,
        target: Option<&str>,
    ) -> Result<(Location, &Node), CommandError> {
        let path = target.context(UsageSnafu {
            command,
            argument: "file",
        })?;
        let resolved = location.resolve(path);
        let node = self
            .tree
            .lookup(&resolved)
            .context(NoSuchFileSnafu { command, path })?;
        ensure!(!node.is_directory(), IsADirectorySnafu { command, path });

        Ok((resolved, node))
    }

    fn resume(&mut self, challenge: Challenge, secret: &str) -> Result<String, CommandError> {
        let kind = challenge.kind();
        let command = kind.command();
        let path = challenge.path();

        let node = self
            .tree
            .lookup_mut(challenge.target())
            .context(NoSuchFileSnafu { command, path })?;
        let Node::File {
            content,
            protection,
            ..
        } = node
        else {
            return IsADirectorySnafu { command, path }.fail();
        };

        match kind {
            ChallengeKind::Read => {
                gate::admit(protection.as_ref(), secret)?;
                Ok(content.clone().unwrap_or_default())
            }
            ChallengeKind::Protect => {
                ensure!(protection.is_none(), AlreadyProtectedSnafu { path });
                *protection = Some(gate::seal(secret)?);
                info!("Protected {}", challenge.target());
                Ok(format!("{path} is now password protected"))
            }
            ChallengeKind::Unprotect => {
                let current = protection.as_ref().context(NotProtectedSnafu { path })?;
                gate::admit(Some(current), secret)?;
                *protection = None;
                info!("Removed protection from {}", challenge.target());
                Ok(format!("{path} is no longer protected"))
            }
        }
    }
}
