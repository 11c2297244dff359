// Wed Jan 15 2026 - Alex

use super::errors::{CommandError, CommandResult};
use std::fmt;

/// One line of the interpreter's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Atomic { name: String, size: i64, alignment: i64 },
    Struct { name: String, members: Vec<String> },
    Union { name: String, members: Vec<String> },
    Describe { name: String },
    Exit,
}

impl Command {
    /// Parses a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&action, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match action {
            "ATOMICO" => match args {
                [name, size, alignment] => Self::Atomic {
                    name: name.to_string(),
                    size: parse_int("tamaño", size)?,
                    alignment: parse_int("alineación", alignment)?,
                },
                _ => return Err(usage("ATOMICO <nombre> <tamaño> <alineación>")),
            },
            "STRUCT" => {
                let (name, members) = aggregate_args(args, "STRUCT <nombre> <tipo> ...")?;
                Self::Struct { name, members }
            }
            "UNION" => {
                let (name, members) = aggregate_args(args, "UNION <nombre> <tipo> ...")?;
                Self::Union { name, members }
            }
            "DESCRIBIR" => match args {
                [name] => Self::Describe {
                    name: name.to_string(),
                },
                _ => return Err(usage("DESCRIBIR <nombre>")),
            },
            "SALIR" => match args {
                [] => Self::Exit,
                _ => return Err(usage("SALIR")),
            },
            other => return Err(CommandError::Unrecognized(other.to_string())),
        };

        Ok(Some(command))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Atomic { .. } => "ATOMICO",
            Self::Struct { .. } => "STRUCT",
            Self::Union { .. } => "UNION",
            Self::Describe { .. } => "DESCRIBIR",
            Self::Exit => "SALIR",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic { name, size, alignment } => write!(f, "ATOMICO {} {} {}", name, size, alignment),
            Self::Struct { name, members } | Self::Union { name, members } => {
                write!(f, "{} {}", self.keyword(), name)?;
                for member in members {
                    write!(f, " {}", member)?;
                }
                Ok(())
            }
            Self::Describe { name } => write!(f, "DESCRIBIR {}", name),
            Self::Exit => write!(f, "SALIR"),
        }
    }
}

/// Members may be empty here; the registry reports that case itself.
fn aggregate_args(args: &[&str], form: &str) -> CommandResult<(String, Vec<String>)> {
    match args.split_first() {
        Some((name, members)) => Ok((
            name.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        )),
        None => Err(usage(form)),
    }
}

fn parse_int(field: &str, token: &str) -> CommandResult<i64> {
    token
        .parse()
        .map_err(|_| CommandError::Malformed(format!("{} no es un entero: {}", field, token)))
}

fn usage(form: &str) -> CommandError {
    CommandError::Malformed(format!("uso: {}", form))
}
