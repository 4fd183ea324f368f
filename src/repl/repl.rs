use std::io;

use futures::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, StreamExt, io::Lines};
use tracing::debug;

use crate::commands::{Outcome, Shell};
use crate::ext::MarkupExt;
use crate::filesystem::Location;
use crate::repl::Prompt;

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// How inline markup in command output reaches the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    #[default]
    Strip,
    Raw,
}

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end: reads command lines, prints their output and
/// answers password challenges with the next input line.
pub struct Repl {
    shell: Shell,
    location: Location,
    prompt: Prompt,
    markup: Markup,
}

impl Repl {
    pub fn new(shell: Shell, prompt: Prompt, markup: Markup) -> Self {
        let location = shell.home().clone();
        Self {
            shell,
            location,
            prompt,
            markup,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Interactive loop until `exit`, `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            let prompt = self.prompt.render(&self.location, self.shell.home());
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next().await.transpose()? else {
                output.write_all(b"\n").await?;
                break;
            };
            if let Flow::Exit = self.handle_line(&line, &mut lines, &mut output).await? {
                break;
            }
        }

        output.flush().await
    }

    /// Runs the given command lines in order. Secrets are still read from `input`.
    pub async fn run_script<R, W>(
        &mut self,
        script: &[String],
        input: R,
        mut output: W,
    ) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        for line in script {
            if let Flow::Exit = self.handle_line(line, &mut lines, &mut output).await? {
                break;
            }
        }
        output.flush().await
    }

    async fn handle_line<R, W>(
        &mut self,
        line: &str,
        lines: &mut Lines<R>,
        output: &mut W,
    ) -> io::Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Flow::Continue);
        };
        if EXIT_COMMANDS.contains(&name) {
            debug!("Leaving the shell");
            return Ok(Flow::Exit);
        }
        let args = words.map(str::to_string).collect::<Vec<_>>();

        let reply = self.shell.execute(&self.location, name, &args);
        self.location = reply.location;

        let text = match reply.outcome {
            Outcome::Output(text) => text,
            Outcome::Challenge(challenge) => {
                let question = format!("{} ", challenge.prompt());
                output.write_all(question.as_bytes()).await?;
                output.flush().await?;
                // End of input answers with an empty secret.
                let secret = lines.next().await.transpose()?.unwrap_or_default();
                self.shell.answer(challenge, &secret)
            }
        };

        self.print(&text, output).await?;
        Ok(Flow::Continue)
    }

    async fn print<W>(&self, text: &str, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut shown = match self.markup {
            Markup::Strip => text.strip_markup(),
            Markup::Raw => text.to_string(),
        };
        if !shown.is_empty() {
            shown.push('\n');
            output.write_all(shown.as_bytes()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::fixture;
    use futures::io::Cursor;

    fn repl(markup: Markup) -> Repl {
        let shell = Shell::new(
            fixture::portfolio(),
            Location::absolute(fixture::DEFAULT_HOME),
        );
        Repl::new(shell, Prompt::new("guest", "stanley.dev", false), markup)
    }

    async fn session(repl: &mut Repl, input: &str) -> String {
        let mut output = Vec::new();
        repl.run(Cursor::new(input), &mut output)
            .await
            .expect("In-memory IO should not fail");
        String::from_utf8(output).expect("Output should be UTF-8")
    }

    #[compio::test]
    async fn navigates_and_prints_prompts() {
        let mut repl = repl(Markup::Strip);

        let output = session(&mut repl, "pwd\ncd docs\npwd\nexit\n").await;

        assert_eq!(
            output,
            "guest@stanley.dev: ~ $ /dev/stanley\n\
             guest@stanley.dev: ~ $ \
             guest@stanley.dev: docs $ /dev/stanley/docs\n\
             guest@stanley.dev: docs $ "
        );
        assert_eq!(repl.location().to_string(), "/dev/stanley/docs");
    }

    #[compio::test]
    async fn answers_challenges_with_next_line() {
        let mut repl = repl(Markup::Strip);

        let output = session(&mut repl, "cat secrets.txt\n10/29\n").await;

        assert!(
            output.contains("This file is password protected. Enter password: Hi Lyds, <3\n"),
            "{output}"
        );
    }

    #[compio::test]
    async fn raw_markup_is_printed_verbatim() {
        let mut repl = repl(Markup::Raw);

        let output = session(&mut repl, "cat secrets.txt\n10/29\n").await;

        assert!(
            output.contains(r#"<span class="text-dark-red">Hi Lyds, <3</span>"#),
            "{output}"
        );
    }

    #[compio::test]
    async fn end_of_input_answers_with_empty_secret() {
        let mut repl = repl(Markup::Strip);

        let output = session(&mut repl, "protect docs/no-hands.txt").await;

        assert!(output.contains("protect: operation cancelled"), "{output}");
    }

    #[compio::test]
    async fn blank_lines_are_ignored() {
        let mut repl = repl(Markup::Strip);

        let output = session(&mut repl, "\n   \nquit\n").await;

        assert_eq!(output, "guest@stanley.dev: ~ $ ".repeat(3));
    }

    #[compio::test]
    async fn script_runs_lines_and_reads_secrets_from_input() {
        let mut repl = repl(Markup::Strip);
        let lines = ["protect name-ascii.txt", "unprotect name-ascii.txt", "ls"]
            .map(str::to_string);
        let mut output = Vec::new();

        repl.run_script(&lines, Cursor::new("pw\npw\n"), &mut output)
            .await
            .expect("In-memory IO should not fail");

        let output = String::from_utf8(output).expect("Output should be UTF-8");
        assert!(output.contains("name-ascii.txt is now password protected"));
        assert!(output.contains("name-ascii.txt is no longer protected"));
        assert!(output.ends_with("secrets.txt\n"), "{output}");
    }

    #[compio::test]
    async fn cd_into_executables_strips_hint_markup() {
        let mut repl = repl(Markup::Strip);

        let output = session(&mut repl, "cd executables\n").await;

        assert!(output.contains("Run one with ./[program].exe\n\ndatamines.exe"));
    }
}
