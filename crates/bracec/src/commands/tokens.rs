//! `tokens`: dump the highlighter's token stream.

use std::io::Write;

use super::Input;
use crate::CliError;

/// Print every token's kind, span and text.
pub fn tokens_command(input: &Input, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(
        out,
        "Tokens for '{}' ({} tokens, {}):",
        input.path,
        input.stream.tokens().len(),
        input.file_type
    )?;
    for (token, text) in input.stream.iter_with_text() {
        writeln!(out, "  {} @ {} {text:?}", token.kind, token.span)?;
    }
    Ok(())
}
