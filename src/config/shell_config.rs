use std::{
    borrow::Cow,
    io,
    path::{Path, PathBuf},
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    commands::Shell,
    ext::PathDisplayExt,
    filesystem::{FileTree, Location, Node, Protection, fixture},
};

pub const CONFIG_FILE_NAME: &str = "termfolio.yaml";

const DEFAULT_USERNAME: &str = "guest";
const DEFAULT_HOSTNAME: &str = "stanley.dev";

/// Settings read from the YAML config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub username: String,
    pub hostname: String,
    pub home: Location,
    /// Replacement for the children of the root. `None` keeps the built-in tree.
    pub filesystem: Option<Vec<Node>>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            home: Location::absolute(fixture::DEFAULT_HOME),
            filesystem: None,
        }
    }
}

impl ShellConfig {
    /// Reads `path` if given. Otherwise tries [`CONFIG_FILE_NAME`] in the working
    /// directory and falls back to defaults when it does not exist.
    pub async fn read(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        if let Some(path) = path {
            return Self::from_path(path.to_path_buf()).await;
        }

        Self::from_path(PathBuf::from(CONFIG_FILE_NAME))
            .await
            .or_else(Self::missing_as_default)
    }

    fn missing_as_default(error: ConfigLoadError) -> Result<Self, ConfigLoadError> {
        match error {
            ConfigLoadError::ReadError { ref source, .. }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                info!("No {} found, using the built-in configuration", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
            error => Err(error),
        }
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, ConfigLoadError> {
        debug!("Reading config file: {}", path.display_best_effort());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display_best_effort(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display_best_effort(),
        })?;
        contents.as_str().try_into()
    }

    pub fn build_tree(&self) -> FileTree {
        match &self.filesystem {
            Some(children) => FileTree::new(children.iter().cloned()),
            None => fixture::portfolio(),
        }
    }

    /// Builds the shell, checking that the configured home is a directory of the tree.
    pub fn build_shell(&self) -> Result<Shell, ConfigLoadError> {
        let tree = self.build_tree();
        let home = tree.lookup(&self.home).context(HomeNotFoundSnafu {
            home: self.home.to_string(),
        })?;
        ensure!(
            home.is_directory(),
            HomeNotADirectorySnafu {
                home: self.home.to_string()
            }
        );

        Ok(Shell::new(tree, self.home.clone()))
    }

    fn parse_prompt<'a>(
        config: &mut Self,
        top_level: &LinkedHashMap<Yaml<'a>, Yaml<'a>>,
    ) -> Result<(), ConfigLoadError> {
        let Some(prompt) = field(top_level, "prompt") else {
            return Ok(());
        };
        let prompt = prompt
            .as_mapping()
            .context(InvalidFieldSnafu { field: "prompt" })?;

        if let Some(username) = field(prompt, "username") {
            config.username = string_value(username, "prompt.username")?;
        }
        if let Some(hostname) = field(prompt, "hostname") {
            config.hostname = string_value(hostname, "prompt.hostname")?;
        }
        Ok(())
    }

    fn parse_children<'a>(
        entries: &LinkedHashMap<Yaml<'a>, Yaml<'a>>,
    ) -> Result<Vec<Node>, ConfigLoadError> {
        entries
            .iter()
            .filter_map(|(key, value)| match key.as_str() {
                Some(name) => Some((name, value)),
                None => {
                    warn!("Skipping filesystem entry with a non-string name: {:?}", key);
                    None
                }
            })
            .map(|(name, value)| Self::parse_node(name, value))
            .collect()
    }

    /// A node with a `children` mapping is a directory, anything else is a file.
    fn parse_node(name: &str, data: &Yaml) -> Result<Node, ConfigLoadError> {
        ensure!(
            !matches!(name, "" | "." | "..") && !name.contains('/'),
            InvalidNodeSnafu { name }
        );

        if let Yaml::Value(Scalar::Null) = data {
            return Ok(Node::File {
                name: name.to_string(),
                content: None,
                is_executable: false,
                protection: None,
            });
        }

        let entry = data.as_mapping().context(InvalidNodeSnafu { name })?;

        if let Some(children) = field(entry, "children") {
            let children = children
                .as_mapping()
                .context(InvalidNodeSnafu { name })?;
            return Ok(Node::directory(name, Self::parse_children(children)?));
        }

        let content = field(entry, "content")
            .map(|value| string_value(value, "content"))
            .transpose()?;
        let is_executable = match field(entry, "executable") {
            None => false,
            Some(Yaml::Value(Scalar::Boolean(flag))) => *flag,
            Some(_) => return InvalidFieldSnafu { field: "executable" }.fail(),
        };
        let password = field(entry, "password")
            .map(|value| string_value(value, "password"))
            .transpose()?;
        if password.as_deref() == Some("") {
            return EmptyPasswordSnafu { name }.fail();
        }

        Ok(Node::File {
            name: name.to_string(),
            content,
            is_executable,
            protection: password.map(Protection::new),
        })
    }
}

impl TryFrom<&str> for ShellConfig {
    type Error = ConfigLoadError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedConfigSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let mut config = Self::default();
        Self::parse_prompt(&mut config, top_level)?;

        if let Some(home) = field(top_level, "home") {
            let home = string_value(home, "home")?;
            ensure!(
                home.starts_with('/'),
                InvalidFieldSnafu { field: "home" }
            );
            config.home = Location::absolute(&home);
        }

        if let Some(filesystem) = field(top_level, "filesystem") {
            let entries = filesystem
                .as_mapping()
                .context(InvalidFieldSnafu {
                    field: "filesystem",
                })?;
            config.filesystem = Some(Self::parse_children(entries)?);
        }

        debug!("Parsed config: {:?}", config);
        Ok(config)
    }
}

fn field<'a, 'y>(
    map: &'y LinkedHashMap<Yaml<'a>, Yaml<'a>>,
    name: &'a str,
) -> Option<&'y Yaml<'a>> {
    map.get(&Yaml::Value(Scalar::String(Cow::Borrowed(name))))
}

/// Strings and integers are accepted wherever text is expected, so `password: 1234` works.
fn string_value(value: &Yaml, field: &'static str) -> Result<String, ConfigLoadError> {
    match value {
        Yaml::Value(Scalar::String(text)) => Ok(text.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Ok(number.to_string()),
        _ => InvalidFieldSnafu { field }.fail(),
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigLoadError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: io::Error,
    },
    #[snafu(display("The config file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config field '{}' has an invalid value", field))]
    InvalidField { field: &'static str },
    #[snafu(display("Filesystem entry '{}' is invalid", name))]
    InvalidNode { name: String },
    #[snafu(display("Filesystem entry '{}' has an empty password", name))]
    EmptyPassword { name: String },
    #[snafu(display("Home location {} does not exist", home))]
    HomeNotFound { home: String },
    #[snafu(display("Home location {} is not a directory", home))]
    HomeNotADirectory { home: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use snafu::IntoError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[compio::test]
    async fn config_returns_error_on_nonexistent_file() {
        let result = ShellConfig::from_path(PathBuf::from("nonexistent.yaml")).await;

        assert!(matches!(result, Err(ConfigLoadError::ReadError { .. })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let error = ReadSnafu {
            file_path: CONFIG_FILE_NAME,
        }
        .into_error(io::Error::from(io::ErrorKind::NotFound));

        let config = ShellConfig::missing_as_default(error).expect("Missing file should be fine");

        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn unreadable_file_is_still_an_error() {
        let error = ReadSnafu {
            file_path: CONFIG_FILE_NAME,
        }
        .into_error(io::Error::from(io::ErrorKind::PermissionDenied));

        let result = ShellConfig::missing_as_default(error);

        assert!(matches!(result, Err(ConfigLoadError::ReadError { .. })));
    }

    #[compio::test]
    async fn config_reads_file_from_disk() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "prompt:\n  username: lyds").expect("Failed to write to temp file");

        let config = ShellConfig::read(Some(temp_file.path()))
            .await
            .expect("Failed to read config");

        assert_eq!(config.username, "lyds");
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
    }

    #[test]
    fn config_returns_error_on_invalid_yaml() {
        let result: Result<ShellConfig, _> = "invalid: yaml: content: [unclosed".try_into();

        assert!(matches!(result, Err(ConfigLoadError::ParseError { .. })));
    }

    #[test]
    fn config_returns_error_on_empty_file() {
        let result: Result<ShellConfig, _> = "".try_into();

        assert!(matches!(result, Err(ConfigLoadError::MalformedConfig)));
    }

    #[test]
    fn config_returns_error_when_top_level_is_not_map() {
        let result: Result<ShellConfig, _> = "- item1\n- item2".try_into();

        assert!(matches!(result, Err(ConfigLoadError::TopLevelNotMap)));
    }

    #[test]
    fn config_without_known_keys_is_default() {
        let config: ShellConfig = "other: value".try_into().expect("Config should parse");

        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn config_reads_prompt_and_home() {
        let yaml = r#"
prompt:
  username: visitor
  hostname: example.org
home: /dev/stanley/docs
"#;

        let config: ShellConfig = yaml.try_into().expect("Config should parse");

        assert_eq!(config.username, "visitor");
        assert_eq!(config.hostname, "example.org");
        assert_eq!(config.home, Location::absolute("/dev/stanley/docs"));
    }

    #[test]
    fn config_rejects_relative_home() {
        let result: Result<ShellConfig, _> = "home: dev/stanley".try_into();

        assert!(matches!(
            result,
            Err(ConfigLoadError::InvalidField { field: "home" })
        ));
    }

    #[test]
    fn config_builds_custom_filesystem() {
        let yaml = r#"
home: /home/visitor
filesystem:
  home:
    children:
      visitor:
        children:
          notes.txt:
            content: hello
          vault.txt:
            content: hidden
            password: 1234
          run.exe:
            executable: true
          empty.txt:
"#;

        let config: ShellConfig = yaml.try_into().expect("Config should parse");
        let shell = config.build_shell().expect("Home should exist");
        let tree = shell.tree();

        assert_eq!(
            tree.lookup(&Location::absolute("/home/visitor/notes.txt")),
            Some(&Node::file("notes.txt", "hello"))
        );
        assert_eq!(
            tree.lookup(&Location::absolute("/home/visitor/vault.txt")),
            Some(&Node::protected_file("vault.txt", "hidden", "1234"))
        );
        assert_eq!(
            tree.lookup(&Location::absolute("/home/visitor/run.exe")),
            Some(&Node::executable("run.exe"))
        );
        assert!(
            tree.lookup(&Location::absolute("/home/visitor/empty.txt"))
                .is_some_and(|node| !node.is_directory())
        );
    }

    #[test]
    fn config_rejects_empty_password() {
        let yaml = "filesystem:\n  a.txt:\n    password: \"\"\n";

        let result: Result<ShellConfig, _> = yaml.try_into();

        assert!(matches!(
            result,
            Err(ConfigLoadError::EmptyPassword { .. })
        ));
    }

    #[rstest]
    #[case::current("filesystem:\n  .:\n    content: x\n", ".")]
    #[case::parent("filesystem:\n  ..:\n    children: {}\n", "..")]
    #[case::nested("filesystem:\n  dev:\n    children:\n      ..:\n", "..")]
    #[case::slash("filesystem:\n  a/b.txt:\n    content: x\n", "a/b.txt")]
    fn config_rejects_unreachable_names(#[case] yaml: &str, #[case] expected: &str) {
        let result: Result<ShellConfig, _> = yaml.try_into();

        assert!(
            matches!(&result, Err(ConfigLoadError::InvalidNode { name }) if name == expected),
            "{result:?}"
        );
    }

    #[test]
    fn config_rejects_non_boolean_executable_flag() {
        let yaml = "filesystem:\n  a.exe:\n    executable: sometimes\n";

        let result: Result<ShellConfig, _> = yaml.try_into();

        assert!(matches!(
            result,
            Err(ConfigLoadError::InvalidField {
                field: "executable"
            })
        ));
    }

    #[test]
    fn missing_home_is_reported() {
        let config: ShellConfig = "home: /nowhere".try_into().expect("Config should parse");

        assert!(matches!(
            config.build_shell(),
            Err(ConfigLoadError::HomeNotFound { .. })
        ));
    }

    #[test]
    fn file_home_is_reported() {
        let config: ShellConfig = "home: /dev/stanley/secrets.txt"
            .try_into()
            .expect("Config should parse");

        assert!(matches!(
            config.build_shell(),
            Err(ConfigLoadError::HomeNotADirectory { .. })
        ));
    }

    #[test]
    fn default_config_builds_fixture_shell() {
        let shell = ShellConfig::default()
            .build_shell()
            .expect("Default home should exist");

        assert_eq!(shell.tree(), &fixture::portfolio());
        assert_eq!(shell.home().to_string(), fixture::DEFAULT_HOME);
    }
}
