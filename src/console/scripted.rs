use anyhow::Result;
use std::collections::VecDeque;

use super::{Console, Style};

/// Console fed from a fixed list of answers, recording everything it is shown
///
/// Used by tests and for unattended runs. Once the answers run out every
/// further read reports end of input.
#[derive(Debug)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<(Style, String)>,
    interactive: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            interactive: true,
        }
    }

    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// Every line and prompt written so far, unstyled
    pub fn transcript(&self) -> &[(Style, String)] {
        &self.transcript
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().map(|(_, line)| line.as_str())
    }

    /// True when any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Default for ScriptedConsole {
    /// Interactive, with no answers
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, style: Style, text: &str) -> Result<()> {
        self.transcript.push((style, text.to_string()));
        Ok(())
    }

    fn prompt(&mut self, text: &str, hint: Option<&str>) -> Result<()> {
        let line = match hint {
            Some(hint) => format!("{text} ({hint})"),
            None => text.to_string(),
        };
        self.transcript.push((Style::Plain, line));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
