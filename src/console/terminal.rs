use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use super::{Console, Style};

/// Console on stdin/stdout
pub struct Terminal {
    interactive: bool,
    quiet: bool,
}

impl Terminal {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            quiet: false,
        }
    }

    /// Suppress all output (used when a machine-readable report is printed instead)
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

impl Console for Terminal {
    fn emit(&mut self, style: Style, text: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        writeln!(out, "{}", style.paint(text))?;
        Ok(())
    }

    fn prompt(&mut self, text: &str, hint: Option<&str>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        match hint {
            Some(hint) => write!(out, "{text} {} ", Style::Highlight.paint(&format!("({hint})")))?,
            None => write!(out, "{text} ")?,
        }
        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read answer from stdin")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive && !self.quiet
    }
}
