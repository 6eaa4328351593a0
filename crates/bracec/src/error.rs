use std::io;

/// Errors reported by `bracec` commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot determine the file type of '{0}'; pass --type=<ext>")]
    UnknownFileType(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("invalid offset '{0}'")]
    BadOffset(String),
    #[error("offset {offset} is past the end of the file ({len} bytes)")]
    OffsetOutOfRange { offset: u32, len: usize },
    #[error("no token at offset {0}")]
    NoToken(u32),
    #[error("invalid step limit '{0}'")]
    BadLimit(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Map a failed read of `path`.
    pub(crate) fn read(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound(path.to_string()),
            _ => CliError::Read {
                path: path.to_string(),
                source,
            },
        }
    }
}
