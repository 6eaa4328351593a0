//! Command-line arguments shared by all commands.

use brace_match::{Direction, MatchConfig};

use crate::CliError;

/// Parsed arguments of one command: positionals plus flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub positional: Vec<String>,
    pub backward: bool,
    /// `--strict` / `--lenient`; the file type's rule when unset.
    pub strict: Option<bool>,
    pub limit: Option<usize>,
    /// Extension from `--type=<ext>`, overriding the file's own.
    pub file_type: Option<String>,
}

impl Args {
    /// Parse the arguments following the command name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut parsed = Args::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--backward" || arg == "-b" {
                parsed.backward = true;
            } else if arg == "--strict" {
                parsed.strict = Some(true);
            } else if arg == "--lenient" {
                parsed.strict = Some(false);
            } else if let Some(limit) = arg.strip_prefix("--limit=") {
                let limit = limit
                    .parse()
                    .map_err(|_| CliError::BadLimit(limit.to_string()))?;
                parsed.limit = Some(limit);
            } else if let Some(ext) = arg.strip_prefix("--type=") {
                parsed.file_type = Some(ext.trim_start_matches('.').to_string());
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(CliError::UnknownOption(arg.to_string()));
            } else {
                parsed.positional.push(arg.to_string());
            }
        }
        Ok(parsed)
    }

    pub fn path(&self) -> Result<&str, CliError> {
        self.positional
            .first()
            .map(String::as_str)
            .ok_or(CliError::MissingArgument("file"))
    }

    pub fn offset(&self) -> Result<u32, CliError> {
        let arg = self
            .positional
            .get(1)
            .ok_or(CliError::MissingArgument("offset"))?;
        arg.parse().map_err(|_| CliError::BadOffset(arg.clone()))
    }

    pub fn direction(&self) -> Direction {
        if self.backward {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn config(&self) -> MatchConfig {
        MatchConfig {
            strict: self.strict,
            step_limit: self.limit,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_flags_and_positionals() {
        let args = Args::parse(&["a.xml", "--backward", "12", "--strict", "--limit=100"]).unwrap();
        assert_eq!(args.path().unwrap(), "a.xml");
        assert_eq!(args.offset().unwrap(), 12);
        assert_eq!(args.direction(), Direction::Backward);
        assert_eq!(
            args.config(),
            MatchConfig {
                strict: Some(true),
                step_limit: Some(100),
            }
        );
    }

    #[test]
    fn test_last_strictness_flag_wins() {
        let args = Args::parse(&["--strict", "--lenient"]).unwrap();
        assert_eq!(args.strict, Some(false));
    }

    #[test]
    fn test_type_override() {
        let args = Args::parse(&["page.txt", "--type=.html"]).unwrap();
        assert_eq!(args.file_type.as_deref(), Some("html"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Args::parse(&["--limit=many"]),
            Err(CliError::BadLimit(limit)) if limit == "many"
        ));
        assert!(matches!(
            Args::parse(&["--fast"]),
            Err(CliError::UnknownOption(_))
        ));

        let args = Args::parse(&["a.java", "x"]).unwrap();
        assert!(matches!(args.offset(), Err(CliError::BadOffset(_))));
        let args = Args::parse::<&str>(&[]).unwrap();
        assert!(matches!(args.path(), Err(CliError::MissingArgument("file"))));
        assert_eq!(
            Args::parse(&["a.java"]).unwrap().offset().unwrap_err().to_string(),
            "missing argument <offset>"
        );
    }
}
