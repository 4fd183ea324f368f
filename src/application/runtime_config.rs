use std::path::PathBuf;

use crate::cli::Cli;
use crate::repl::Markup;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub config: Option<PathBuf>,
    pub exec: Vec<String>,
    pub markup: Markup,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            exec: cli.exec,
            markup: if cli.raw {
                Markup::Raw
            } else {
                Markup::Strip
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn collects_repeated_exec_lines() {
        let cli = Cli::parse_from(["termfolio", "-e", "cd docs", "-e", "ls", "--raw"]);

        let runtime_config = RuntimeConfig::from(cli);

        assert_eq!(runtime_config.exec, vec!["cd docs", "ls"]);
        assert_eq!(runtime_config.markup, Markup::Raw);
        assert!(runtime_config.config.is_none());
    }

    #[test]
    fn defaults_to_interactive_stripped_output() {
        let runtime_config = RuntimeConfig::from(Cli::parse_from(["termfolio"]));

        assert!(runtime_config.exec.is_empty());
        assert_eq!(runtime_config.markup, Markup::Strip);
    }
}
