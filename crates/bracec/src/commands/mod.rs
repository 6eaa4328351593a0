//! Command handlers for the `bracec` CLI.
//!
//! Each submodule implements one command. Loading the input file and
//! resolving its file type is shared and lives here in the module root.

mod brace;
mod nav;
mod tokens;

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use brace_ir::{Language, Span, StreamCursor, TokenStream};
use brace_lexer::lex_stream;
use brace_match::{BraceService, FileType};

use crate::{Args, CliError};

pub use brace::{args_command, match_command, scope_command};
pub use nav::nav_command;
pub use tokens::tokens_command;

/// A `bracec` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Tokens,
    Match,
    Scope,
    Args,
    Nav,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tokens" => Some(Command::Tokens),
            "match" => Some(Command::Match),
            "scope" => Some(Command::Scope),
            "args" => Some(Command::Args),
            "nav" => Some(Command::Nav),
            _ => None,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Tokens => "bracec tokens <file> [--type=<ext>]",
            Command::Match => {
                "bracec match <file> <offset> [--backward] [--strict|--lenient] [--limit=N]"
            }
            Command::Scope => "bracec scope <file> <offset> [--limit=N]",
            Command::Args => "bracec args <file> <offset> [--limit=N]",
            Command::Nav => "bracec nav <file> <offset> [--strict|--lenient]",
        }
    }

    /// Load the file named in `args` and run the command on it.
    pub fn run(self, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
        let input = Input::load(args)?;
        self.run_on(&input, args, out)
    }

    /// Run the command on already loaded input.
    pub fn run_on(self, input: &Input, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
        tracing::debug!(
            command = ?self,
            file_type = %input.file_type,
            tokens = input.stream.tokens().len(),
            "running command"
        );
        match self {
            Command::Tokens => tokens_command(input, out),
            Command::Match => match_command(input, args, out),
            Command::Scope => scope_command(input, args, out),
            Command::Args => args_command(input, args, out),
            Command::Nav => nav_command(input, args, out),
        }
    }
}

/// A lexed input file.
#[derive(Debug)]
pub struct Input {
    pub path: String,
    pub file_type: FileType,
    pub stream: TokenStream,
}

impl Input {
    pub fn load(args: &Args) -> Result<Self, CliError> {
        let path = args.path()?;
        let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
        Self::from_source(path, &text, args.file_type.as_deref())
    }

    /// Lex `text` as the file type of `type_ext`, or of `path`'s extension.
    pub fn from_source(path: &str, text: &str, type_ext: Option<&str>) -> Result<Self, CliError> {
        let ext = type_ext.or_else(|| Path::new(path).extension().and_then(OsStr::to_str));
        let file_type = ext
            .and_then(FileType::from_extension)
            .ok_or_else(|| CliError::UnknownFileType(path.to_string()))?;
        let language = file_type.language().unwrap_or(Language::PlainText);
        Ok(Input {
            path: path.to_string(),
            stream: lex_stream(text, language),
            file_type,
        })
    }

    fn check_offset(&self, offset: u32) -> Result<(), CliError> {
        let len = self.stream.text().len();
        if offset as usize > len {
            return Err(CliError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    /// Cursor on the token containing `offset`.
    fn cursor_at(&self, offset: u32) -> Result<StreamCursor<'_>, CliError> {
        self.check_offset(offset)?;
        let index = self
            .stream
            .token_index_at(offset)
            .ok_or(CliError::NoToken(offset))?;
        Ok(self.stream.cursor_at_index(index))
    }

    /// `start..end` plus the token text.
    fn describe(&self, span: Span) -> String {
        format!("{span} `{}`", self.stream.token_text(span))
    }
}

fn service(args: &Args) -> BraceService {
    BraceService::with_config(args.config())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
