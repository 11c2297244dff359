// Wed Jan 15 2026 - Alex

use super::command::Command;
use super::errors::{CommandResult, ErrorDisplay};
use crate::config::Config;
use crate::structure::{ReportFormatter, SerializableReport, TypeRegistry};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Defined(String),
    Report(String),
    Exit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub errors: usize,
}

/// Reads commands line by line and applies them to a registry it owns.
pub struct Session {
    registry: TypeRegistry,
    formatter: ReportFormatter,
    errors: ErrorDisplay,
    json_output: bool,
    prompt: Option<String>,
    stats: SessionStats,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            registry: TypeRegistry::new(),
            formatter: ReportFormatter::new().detailed(config.detailed),
            errors: ErrorDisplay::new().with_colors(config.color),
            json_output: config.json_output,
            prompt: config.show_prompt.then(|| config.prompt.clone()),
            stats: SessionStats::default(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        log::trace!("Executing {}", command);
        let outcome = match command {
            Command::Atomic { name, size, alignment } => {
                self.registry.define_atomic(&name, size, alignment)?;
                Outcome::Defined(name)
            }
            Command::Struct { name, members } => {
                self.registry.define_struct(&name, &members)?;
                Outcome::Defined(name)
            }
            Command::Union { name, members } => {
                self.registry.define_union(&name, &members)?;
                Outcome::Defined(name)
            }
            Command::Describe { name } => {
                let report = self.registry.describe(&name)?;
                let text = if self.json_output {
                    SerializableReport::from(&report).to_json()? + "\n"
                } else {
                    self.formatter.render(&report)
                };
                Outcome::Report(text)
            }
            Command::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }

    /// Handles one raw line, writing any report or error to `out`.
    /// Returns `false` once the session should stop.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                self.stats.errors += 1;
                writeln!(out, "{}", self.errors.format_command(&e))?;
                return Ok(true);
            }
        };

        self.stats.commands += 1;
        match self.execute(command) {
            Ok(Outcome::Exit) => return Ok(false),
            Ok(Outcome::Report(text)) => write!(out, "{}", text)?,
            Ok(Outcome::Defined(_)) => {}
            Err(e) => {
                self.stats.errors += 1;
                writeln!(out, "{}", self.errors.format_command(&e))?;
            }
        }
        Ok(true)
    }

    /// Runs until `SALIR` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<SessionStats> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                if self.prompt.is_some() {
                    writeln!(out)?;
                }
                break;
            };
            if !self.handle_line(&line?, &mut out)? {
                break;
            }
        }
        out.flush()?;
        Ok(self.stats)
    }
}
