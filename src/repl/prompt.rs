use colored::Colorize;

use crate::filesystem::Location;

/// The `user@host: where $` line shown before every command.
#[derive(Debug, Clone)]
pub struct Prompt {
    username: String,
    hostname: String,
    colored: bool,
}

impl Prompt {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>, colored: bool) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            colored,
        }
    }

    pub fn render(&self, location: &Location, home: &Location) -> String {
        let place = Self::place(location, home);
        if !self.colored {
            return format!("{}@{}: {} $ ", self.username, self.hostname, place);
        }

        let host = format!("{}:", self.hostname);
        let place = format!("{place} $");
        format!(
            "{}{}{} {} ",
            self.username.as_str().yellow(),
            "@".dimmed(),
            host.as_str().green(),
            place.as_str().dimmed()
        )
    }

    /// `/` at the root, `~` at home, otherwise the current directory name.
    fn place<'a>(location: &'a Location, home: &Location) -> &'a str {
        if location.is_root() {
            "/"
        } else if location == home {
            "~"
        } else {
            location.last_segment()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/", "guest@stanley.dev: / $ ")]
    #[case("/dev/stanley", "guest@stanley.dev: ~ $ ")]
    #[case("/dev/stanley/docs", "guest@stanley.dev: docs $ ")]
    #[case("/dev", "guest@stanley.dev: dev $ ")]
    fn renders_plain_prompt(#[case] location: &str, #[case] expected: &str) {
        let prompt = Prompt::new("guest", "stanley.dev", false);

        let rendered = prompt.render(
            &Location::absolute(location),
            &Location::absolute("/dev/stanley"),
        );

        assert_eq!(rendered, expected);
    }
}
