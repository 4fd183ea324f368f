use std::io;

use compio::{fs, io::compat::AsyncStream};
use futures::io::BufReader;
use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{ConfigLoadError, ShellConfig};
use crate::repl::{Prompt, Repl};

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let config = ShellConfig::read(runtime_config.config.as_deref())
            .await
            .context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let shell = config.build_shell().context(ConfigSnafu)?;
        let colored = supports_color::on(Stream::Stdout).is_some();
        let prompt = Prompt::new(&config.username, &config.hostname, colored);
        let mut repl = Repl::new(shell, prompt, runtime_config.markup);

        let input = BufReader::new(AsyncStream::new(fs::stdin()));
        let output = AsyncStream::new(fs::stdout());
        if runtime_config.exec.is_empty() {
            info!("Starting interactive session at {}", repl.location());
            repl.run(input, output).await.context(TerminalSnafu)?;
        } else {
            info!("Running {} command lines", runtime_config.exec.len());
            repl.run_script(&runtime_config.exec, input, output)
                .await
                .context(TerminalSnafu)?;
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigLoadError },
    #[snafu(display("Lost the terminal while running the session"))]
    TerminalError { source: io::Error },
}
