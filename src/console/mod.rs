//! Console interaction for scaffolding runs
//!
//! Prompts and status lines go through the [`Console`] trait so a run can be
//! driven by a real terminal or by scripted answers:
//!
//! ```no_run
//! use codecept_scaffold::console::{ask, Answer, ScriptedConsole};
//!
//! let mut console = ScriptedConsole::new(["1"]);
//! let browser = ask(&mut console, "Select a browser", &Answer::from(["firefox", "chrome"]))?;
//! assert_eq!(browser, "chrome");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod scripted;
mod terminal;

use anyhow::Result;
use colored::Colorize;

use crate::error::ScaffoldError;

pub use scripted::ScriptedConsole;
pub use terminal::Terminal;

/// Visual style of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Info,
    Success,
    Warning,
    Highlight,
    Emphasis,
    Banner,
}

impl Style {
    /// Render `text` with ANSI styling (a no-op when colors are disabled)
    pub fn paint(self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Info => text.cyan().to_string(),
            Style::Success => text.white().on_green().bold().to_string(),
            Style::Warning => text.black().on_yellow().bold().to_string(),
            Style::Highlight => text.green().to_string(),
            Style::Emphasis => text.bold().to_string(),
            Style::Banner => text.white().on_magenta().to_string(),
        }
    }
}

/// Synchronous prompt/output capability
pub trait Console {
    /// Write one styled line
    fn emit(&mut self, style: Style, text: &str) -> Result<()>;

    /// Write a question without a line break; `hint` is the default shown inline
    fn prompt(&mut self, text: &str, hint: Option<&str>) -> Result<()>;

    /// Read one line of input, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Non-interactive consoles answer every question with its default
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Second argument of a question: a default answer or a list of choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(Option<String>),
    Choices(Vec<String>),
}

impl From<&str> for Answer {
    fn from(default: &str) -> Self {
        Answer::Text(Some(default.to_string()))
    }
}

impl From<String> for Answer {
    fn from(default: String) -> Self {
        Answer::Text(Some(default))
    }
}

impl From<Option<&str>> for Answer {
    fn from(default: Option<&str>) -> Self {
        Answer::Text(default.map(str::to_string))
    }
}

impl From<Vec<String>> for Answer {
    fn from(choices: Vec<String>) -> Self {
        Answer::Choices(choices)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(choices: Vec<&str>) -> Self {
        Answer::Choices(choices.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Answer {
    fn from(choices: [&str; N]) -> Self {
        Answer::Choices(choices.iter().map(|c| c.to_string()).collect())
    }
}

/// Ask a single question and block until it is answered
///
/// Choices default to the first element and accept either the index or the
/// value; invalid answers are reported and asked again. Free-text questions
/// return the trimmed input, or the default for empty input. End of input
/// always selects the default.
pub fn ask(console: &mut dyn Console, question: &str, answer: &Answer) -> Result<String> {
    if !console.is_interactive() {
        return default_answer(question, answer);
    }

    let text = format!("? {question}");

    match answer {
        Answer::Choices(choices) => {
            let default = choices
                .first()
                .ok_or_else(|| ScaffoldError::EmptyChoices(question.to_string()))?;

            loop {
                for (index, choice) in choices.iter().enumerate() {
                    console.emit(Style::Plain, &format!("  [{index}] {choice}"))?;
                }
                console.prompt(&text, Some(default.as_str()))?;

                let Some(input) = console.read_line()? else {
                    return Ok(default.clone());
                };

                match select_choice(choices, input.trim()) {
                    Some(choice) => return Ok(choice),
                    None => console.emit(
                        Style::Warning,
                        &format!(" Value \"{}\" is invalid ", input.trim()),
                    )?,
                }
            }
        }
        Answer::Text(default) => {
            let default = default.clone().unwrap_or_default();
            let hint = (!default.is_empty()).then_some(default.as_str());
            console.prompt(&text, hint)?;

            match console.read_line()? {
                Some(input) if !input.trim().is_empty() => Ok(input.trim().to_string()),
                _ => Ok(default),
            }
        }
    }
}

/// Answer `question` without asking: the first choice or the default text
pub fn default_answer(question: &str, answer: &Answer) -> Result<String> {
    match answer {
        Answer::Choices(choices) => choices
            .first()
            .cloned()
            .ok_or_else(|| ScaffoldError::EmptyChoices(question.to_string()).into()),
        Answer::Text(default) => Ok(default.clone().unwrap_or_default()),
    }
}

/// Empty input picks the first choice; otherwise match by index, then by value
fn select_choice(choices: &[String], input: &str) -> Option<String> {
    if input.is_empty() {
        return choices.first().cloned();
    }
    if let Ok(index) = input.parse::<usize>() {
        if let Some(choice) = choices.get(index) {
            return Some(choice.clone());
        }
    }
    choices.iter().find(|c| c.as_str() == input).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_by_index_and_value() {
        let mut console = ScriptedConsole::new(["1", "firefox"]);
        let answer = Answer::from(["firefox", "chrome"]);
        assert_eq!(ask(&mut console, "browser", &answer).unwrap(), "chrome");
        assert_eq!(ask(&mut console, "browser", &answer).unwrap(), "firefox");
    }

    #[test]
    fn test_choice_defaults_to_first() {
        let answer = Answer::from(["firefox", "chrome"]);

        let mut empty_line = ScriptedConsole::new([""]);
        assert_eq!(ask(&mut empty_line, "browser", &answer).unwrap(), "firefox");

        let mut no_input = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(ask(&mut no_input, "browser", &answer).unwrap(), "firefox");
    }

    #[test]
    fn test_invalid_choice_is_asked_again() {
        let mut console = ScriptedConsole::new(["opera", "7", "chrome"]);
        let answer = Answer::from(["firefox", "chrome"]);
        assert_eq!(ask(&mut console, "browser", &answer).unwrap(), "chrome");

        let warnings = console
            .transcript()
            .iter()
            .filter(|(style, _)| *style == Style::Warning)
            .count();
        assert_eq!(warnings, 2);
        assert!(console.contains("Value \"opera\" is invalid"));
    }

    #[test]
    fn test_choice_list_is_rendered() {
        let mut console = ScriptedConsole::new(["0"]);
        ask(&mut console, "browser", &Answer::from(["firefox", "chrome"])).unwrap();
        assert!(console.contains("[0] firefox"));
        assert!(console.contains("[1] chrome"));
        assert!(console.contains("? browser (firefox)"));
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let mut console = ScriptedConsole::new(["0"]);
        let err = ask(&mut console, "browser", &Answer::Choices(vec![])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::EmptyChoices(_))
        ));
    }

    #[test]
    fn test_text_answer_and_default() {
        let answer = Answer::from("firefox");

        let mut typed = ScriptedConsole::new(["  chrome "]);
        assert_eq!(ask(&mut typed, "browser", &answer).unwrap(), "chrome");

        let mut empty = ScriptedConsole::new([""]);
        assert_eq!(ask(&mut empty, "browser", &answer).unwrap(), "firefox");
    }

    #[test]
    fn test_text_without_default() {
        let mut console = ScriptedConsole::new([""]);
        assert_eq!(ask(&mut console, "namespace", &Answer::Text(None)).unwrap(), "");
        assert!(console.contains("? namespace"));
        assert!(!console.contains("()"));
    }

    #[test]
    fn test_non_interactive_uses_defaults() {
        let mut console = ScriptedConsole::new(["chrome", "chrome"]).non_interactive();
        let choice = ask(&mut console, "browser", &Answer::from(["firefox", "chrome"])).unwrap();
        let text = ask(&mut console, "url", &Answer::from("http://localhost")).unwrap();
        assert_eq!(choice, "firefox");
        assert_eq!(text, "http://localhost");
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_default_answer() {
        assert_eq!(default_answer("browser", &Answer::from(["firefox", "chrome"])).unwrap(), "firefox");
        assert_eq!(default_answer("namespace", &Answer::Text(None)).unwrap(), "");
        assert!(default_answer("browser", &Answer::Choices(vec![])).is_err());
    }
}
