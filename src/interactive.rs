//! Line-oriented prompt for driving the dashboard by hand
//!
//! Each command maps onto one dashboard interaction (typing in the search
//! box, clicking a header, switching tabs, pressing an export button) and
//! re-renders the page afterwards.

use crate::{
    app::App,
    dashboard::{ExportAction, Tab},
    error::{AppError, Result},
    view::SortKey,
};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;

const PROMPT: &str = "speed> ";

/// A parsed prompt command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Clear,
    Sort(SortKey),
    Tab(Tab),
    Export(ExportAction),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    /// The search text after the command word is kept as typed, including
    /// its spaces; other arguments are trimmed.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "find" | "/" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "sort" => Ok(Command::Sort(argument(word, rest, "a column name")?.parse()?)),
            "tab" => Ok(Command::Tab(argument(word, rest, "a tab name")?.parse()?)),
            "export" => Ok(Command::Export(argument(word, rest, "an export action")?.parse()?)),
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(AppError::parse(format!(
                "Unknown command '{}'. Type 'help' for the list of commands",
                word
            ))),
        }
    }
}

fn argument<'a>(word: &str, rest: &'a str, what: &str) -> Result<&'a str> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(AppError::parse(format!("'{}' needs {}", word, what)))
    } else {
        Ok(rest)
    }
}

/// Text printed by the `help` command
pub fn command_help() -> String {
    let commands = [
        ("search <text>", "filter rows by service, test type or location"),
        ("clear", "clear the search"),
        ("sort <column>", "click a header: service, testType, speed, location, date"),
        ("tab <name>", "switch to table, analytics, settings, help or export"),
        ("export <action>", "press an export button: csv, excel, json, print, share-link, email"),
        ("show", "render the current tab again"),
        ("help", "show this list"),
        ("quit", "leave the prompt"),
    ];

    let mut help = String::from("Commands:\n");
    for (usage, description) in commands {
        help.push_str(&format!("  {:<17} {}\n", usage, description));
    }
    help
}

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Interactive session bound to a running application
pub struct InteractiveSession<'a> {
    app: &'a mut App,
    use_colors: bool,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(app: &'a mut App, use_colors: bool) -> Self {
        Self { app, use_colors }
    }

    /// Apply one command and return the text to show
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let render = |app: &App| app.coordinator().render_active(app.dashboard());

        let output = match command {
            Command::Search(term) => {
                self.app.search(&term);
                render(&*self.app)?
            }
            Command::Clear => {
                self.app.search("");
                render(&*self.app)?
            }
            Command::Sort(key) => {
                self.app.sort(key);
                render(&*self.app)?
            }
            Command::Tab(tab) => {
                self.app.select_tab(tab);
                render(&*self.app)?
            }
            Command::Export(action) => {
                let message = self.app.export(action).message();
                self.app.coordinator().formatter().format_warning(&message)?
            }
            Command::Show => render(&*self.app)?,
            Command::Help => command_help(),
            Command::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(output))
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "Type 'help' for commands, 'quit' to leave.")?;
        self.write_prompt(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.write_prompt(output)?;
                continue;
            }

            match line.parse::<Command>().and_then(|command| self.execute(command)) {
                Ok(Flow::Continue(text)) => writeln!(output, "{}", text)?,
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => writeln!(output, "{}", self.app.coordinator().formatter().format_error(&e.to_string())?)?,
            }

            self.write_prompt(output)?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.use_colors {
            write!(output, "{}", PROMPT.bold())?;
        } else {
            write!(output, "{}", PROMPT)?;
        }
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::Cli, models::Config};
    use clap::Parser;
    use std::io::Cursor;

    fn app() -> App {
        let cli = Cli::parse_from(["speed-analytics", "--no-color", "--interactive"]);
        let mut config = Config::default();
        config.enable_color = false;
        App::with_config(cli, config).unwrap()
    }

    fn session_output(script: &str) -> (App, String) {
        let mut app = app();
        let mut output = Vec::new();
        InteractiveSession::new(&mut app, false)
            .run(Cursor::new(script.as_bytes().to_vec()), &mut output)
            .unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("search moscow".parse::<Command>().unwrap(), Command::Search("moscow".into()));
        assert_eq!("search St. Petersburg".parse::<Command>().unwrap(), Command::Search("St. Petersburg".into()));
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(String::new()));
        assert_eq!("  SORT speed ".parse::<Command>().unwrap(), Command::Sort(SortKey::Speed));
        assert_eq!("tab analytics".parse::<Command>().unwrap(), Command::Tab(Tab::Analytics));
        assert_eq!("export csv".parse::<Command>().unwrap(), Command::Export(ExportAction::Csv));
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_search_text_kept_as_typed() {
        assert_eq!("search load ".parse::<Command>().unwrap(), Command::Search("load ".into()));
        assert_eq!("find  st. ".parse::<Command>().unwrap(), Command::Search(" st. ".into()));
        assert_eq!("search load\r\n".parse::<Command>().unwrap(), Command::Search("load".into()));
    }

    #[test]
    fn test_search_with_trailing_space_matches_load_time_only() {
        let (app, output) = session_output("search load \nquit\n");
        let ids: Vec<u32> = app.dashboard().view().visible_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6]);
        assert!(output.contains("(1 of 8 records)"));
    }

    #[test]
    fn test_parse_errors() {
        assert!("sort".parse::<Command>().unwrap_err().to_string().contains("needs a column name"));
        assert!("sort status".parse::<Command>().unwrap_err().to_string().contains("not sortable"));
        assert!("tab reports".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().unwrap_err().to_string().contains("Unknown command 'dance'"));
    }

    #[test]
    fn test_session_applies_commands() {
        let (app, output) = session_output("search moscow\nsort speed\nsort speed\nquit\n");
        let ids: Vec<u32> = app.dashboard().view().visible_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 8, 1, 3]);
        assert!(output.contains("(4 of 8 records)"));
    }

    #[test]
    fn test_session_recovers_from_bad_input() {
        let (app, output) = session_output("tab nowhere\ntab help\n");
        assert!(output.contains("ERROR:"));
        assert_eq!(app.dashboard().active_tab(), Tab::Help);
    }

    #[test]
    fn test_clear_and_export() {
        let (app, output) = session_output("search kazan\nclear\nexport email\n");
        assert!(app.dashboard().view().search().is_empty());
        assert!(output.contains("Send by email: not available"));
    }

    #[test]
    fn test_help_command() {
        let (_, output) = session_output("help\nquit\n");
        assert!(output.contains("Commands:"));
        assert!(output.contains("sort <column>"));
    }
}
