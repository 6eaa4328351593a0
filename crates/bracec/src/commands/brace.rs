//! `match`, `scope` and `args`: the matcher's searches.

use std::io::Write;

use brace_ir::{TokenCursor, TokenKind};
use brace_match::{Direction, MatchResult};

use super::{service, Input};
use crate::{Args, CliError};

/// Match the bracket at the offset and report its partner.
pub fn match_command(input: &Input, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let mut cursor = input.cursor_at(args.offset()?)?;
    let service = service(args);
    let brace = input.describe(cursor.span());
    let file_type = &input.file_type;
    let text = input.stream.text();

    if !service.is_open_token(file_type, cursor.kind())
        && !service.is_close_token(file_type, &cursor, text)
    {
        writeln!(out, "{brace}: not a bracket")?;
        return Ok(());
    }

    let direction = args.direction();
    match service.match_brace(file_type, text, &mut cursor, direction) {
        MatchResult::Matched { partner } => {
            writeln!(out, "{brace}: matched {}", input.describe(partner))?;
        }
        MatchResult::Mismatched { partner } => {
            writeln!(out, "{brace}: mismatched {}", input.describe(partner))?;
        }
        MatchResult::Exhausted => {
            let boundary = match direction {
                Direction::Forward => "end",
                Direction::Backward => "start",
            };
            writeln!(out, "{brace}: no partner before the {boundary} of the file")?;
        }
        MatchResult::Interrupted => {
            writeln!(
                out,
                "{brace}: scan stopped after {} steps",
                args.limit.unwrap_or_default()
            )?;
        }
    }
    Ok(())
}

/// Report the structural opening bracket enclosing the offset.
pub fn scope_command(input: &Input, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let cursor = input.cursor_at(args.offset()?)?;
    let service = service(args);
    let found =
        service.find_structural_left_brace(&input.file_type, input.stream.text(), cursor);
    match found.and_then(|offset| input.stream.token_index_at(offset)) {
        Some(index) => {
            let span = input.stream.cursor_at_index(index).span();
            writeln!(out, "scope opens at {}", input.describe(span))?;
        }
        None => writeln!(out, "no enclosing scope")?,
    }
    Ok(())
}

/// Report the outermost `(` and `)` around the offset.
pub fn args_command(input: &Input, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let cursor = input.cursor_at(args.offset()?)?;
    let service = service(args);
    let (file_type, text) = (&input.file_type, input.stream.text());

    let left = service.find_leftmost_lparen(file_type, text, cursor, TokenKind::LParen);
    let right = service.find_rightmost_rparen(file_type, text, cursor, TokenKind::RParen);
    for (label, offset) in [("(", left), (")", right)] {
        match offset {
            Some(offset) => writeln!(out, "{label} at {offset}")?,
            None => writeln!(out, "{label} not found")?,
        }
    }
    Ok(())
}
