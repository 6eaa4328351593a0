//! `nav`: caret navigation context.

use std::io::Write;

use brace_ir::Span;
use brace_match::brace_navigation_at;

use super::{service, Input};
use crate::{Args, CliError};

/// Report the bracket a caret at the offset refers to and where
/// "go to matching brace" would move it.
pub fn nav_command(input: &Input, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let offset = args.offset()?;
    input.check_offset(offset)?;
    let service = service(args);

    let Some(nav) = brace_navigation_at(&service, &input.stream, &input.file_type, offset) else {
        writeln!(out, "no matched bracket at the caret")?;
        return Ok(());
    };
    let brace = input
        .stream
        .token_index_at(nav.brace_offset)
        .map(|index| input.stream.cursor_at_index(index).token().span)
        .unwrap_or(Span::new(nav.brace_offset, nav.brace_offset));
    let side = if nav.caret_after_brace { "before" } else { "at" };
    writeln!(
        out,
        "bracket {} {side} the caret, navigate to {}",
        input.describe(brace),
        nav.navigation_offset
    )?;
    Ok(())
}
