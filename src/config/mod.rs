mod shell_config;

pub use shell_config::{ConfigLoadError, ShellConfig};
