use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// A terminal portfolio: browse a small simulated filesystem with pwd, cd, ls,
/// cat, tree, protect and unprotect.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML configuration file. Defaults to ./termfolio.yaml when it exists
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Run this command line instead of starting the prompt. Can be repeated
    #[clap(long = "exec", short = 'e', value_name = "LINE")]
    pub exec: Vec<String>,

    /// Print inline markup as-is instead of stripping tags
    #[clap(long)]
    pub raw: bool,
}
