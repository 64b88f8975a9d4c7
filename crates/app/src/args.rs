use std::fmt;

use quiz_core::model::{ParticipantId, ROSTER_SIZE};

pub const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidParticipant { raw: String },
    NotAllowed { flag: &'static str, command: Command },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidParticipant { raw } => {
                write!(f, "invalid --participant value: {raw} (expected 1..={ROSTER_SIZE})")
            }
            ArgsError::NotAllowed { flag, command } => {
                write!(f, "{flag} is not accepted by `{}`", command.name())
            }
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Status,
    Reset,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Status => "status",
            Self::Reset => "reset",
            Self::Help => "help",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub db_url: String,
    pub reproducible_choices: bool,
    pub json: bool,
    pub participant: Option<ParticipantId>,
}

/// Values read from the environment before flags are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDefaults {
    pub db_url: Option<String>,
    pub reproducible_choices: Option<String>,
}

impl EnvDefaults {
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            db_url: std::env::var("QUIZ_DB_URL").ok(),
            reproducible_choices: std::env::var("QUIZ_REPRODUCIBLE_CHOICES").ok(),
        }
    }
}

fn env_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim),
        Some("1" | "true" | "TRUE" | "yes" | "on")
    )
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_participant(raw: String) -> Result<ParticipantId, ArgsError> {
    match raw.parse::<ParticipantId>() {
        Ok(id) if (1..=ROSTER_SIZE).contains(&id.value()) => Ok(id),
        _ => Err(ArgsError::InvalidParticipant { raw }),
    }
}

impl Args {
    /// Parse `argv` (without the program name). No subcommand means `ui`.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown commands or flags and malformed values.
    pub fn parse(
        argv: impl IntoIterator<Item = String>,
        env: &EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut iter = argv.into_iter().peekable();
        let command = match iter.peek().map(String::as_str) {
            None => Command::Ui,
            Some("--help" | "-h" | "help") => return Ok(Self::help(env)),
            Some(first) if first.starts_with("--") => Command::Ui,
            Some(first) => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                iter.next();
                command
            }
        };

        let mut args = Self {
            command,
            db_url: env
                .db_url
                .clone()
                .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url),
            reproducible_choices: env_flag(env.reproducible_choices.as_deref()),
            json: false,
            participant: None,
        };

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut iter, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    args.db_url = normalize_sqlite_url(value);
                }
                "--reproducible-choices" => args.reproducible_choices = true,
                "--json" => {
                    if command != Command::Status {
                        return Err(ArgsError::NotAllowed { flag: "--json", command });
                    }
                    args.json = true;
                }
                "--participant" => {
                    if command != Command::Reset {
                        return Err(ArgsError::NotAllowed {
                            flag: "--participant",
                            command,
                        });
                    }
                    let value = require_value(&mut iter, "--participant")?;
                    args.participant = Some(parse_participant(value)?);
                }
                "--help" | "-h" => return Ok(Self::help(env)),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(args)
    }

    fn help(env: &EnvDefaults) -> Self {
        Self {
            command: Command::Help,
            db_url: env.db_url.clone().unwrap_or_else(|| DEFAULT_DB_URL.into()),
            reproducible_choices: false,
            json: false,
            participant: None,
        }
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui]  [--db <sqlite_url>] [--reproducible-choices]");
    eprintln!("  app status [--db <sqlite_url>] [--json]");
    eprintln!("  app reset  [--db <sqlite_url>] [--participant <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_REPRODUCIBLE_CHOICES=1, RUST_LOG");
}

/// Turn a bare or relative path into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(args.iter().map(|s| (*s).to_string()), &EnvDefaults::default())
    }

    #[test]
    fn no_arguments_launch_the_ui_with_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, Command::Ui);
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert!(!args.reproducible_choices);
    }

    #[test]
    fn leading_flag_implies_ui() {
        let args = parse(&["--reproducible-choices", "--db", "sqlite://x.db"]).unwrap();
        assert_eq!(args.command, Command::Ui);
        assert!(args.reproducible_choices);
        assert_eq!(args.db_url, "sqlite://x.db");
    }

    #[test]
    fn status_accepts_json() {
        let args = parse(&["status", "--json"]).unwrap();
        assert_eq!(args.command, Command::Status);
        assert!(args.json);
        assert_eq!(
            parse(&["ui", "--json"]),
            Err(ArgsError::NotAllowed {
                flag: "--json",
                command: Command::Ui
            })
        );
    }

    #[test]
    fn reset_takes_an_optional_roster_seat() {
        assert_eq!(parse(&["reset"]).unwrap().participant, None);
        assert_eq!(
            parse(&["reset", "--participant", "12"]).unwrap().participant,
            Some(ParticipantId::new(12))
        );
        for bad in ["0", "41", "x"] {
            assert_eq!(
                parse(&["reset", "--participant", bad]),
                Err(ArgsError::InvalidParticipant { raw: bad.into() })
            );
        }
        assert_eq!(
            parse(&["reset", "--participant"]),
            Err(ArgsError::MissingValue {
                flag: "--participant"
            })
        );
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert_eq!(parse(&["seed"]), Err(ArgsError::UnknownCommand("seed".into())));
        assert_eq!(parse(&["ui", "--fast"]), Err(ArgsError::UnknownArg("--fast".into())));
        assert_eq!(
            parse(&["--db", " "]),
            Err(ArgsError::InvalidDbUrl { raw: " ".into() })
        );
    }

    #[test]
    fn environment_supplies_defaults_and_flags_override() {
        let env = EnvDefaults {
            db_url: Some("sqlite://env.db".into()),
            reproducible_choices: Some("1".into()),
        };
        let args = Args::parse(Vec::new(), &env).unwrap();
        assert_eq!(args.db_url, "sqlite://env.db");
        assert!(args.reproducible_choices);

        let args = Args::parse(["--db".to_string(), "sqlite://flag.db".to_string()], &env).unwrap();
        assert_eq!(args.db_url, "sqlite://flag.db");
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("data/quiz.sqlite3".into());
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("data/quiz.sqlite3"));
        assert!(std::path::Path::new(url.trim_start_matches("sqlite://")).is_absolute());
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
