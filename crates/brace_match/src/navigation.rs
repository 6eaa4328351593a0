//! Caret-relative brace lookup.
//!
//! Decides which bracket a caret at a text offset refers to and where a
//! "go to matching brace" action would move it.

use brace_ir::{StreamCursor, TokenCursor, TokenStream};

use crate::file_type::FileType;
use crate::matcher::{Direction, MatchResult};
use crate::service::BraceService;

/// A matched bracket next to the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BraceNavigation {
    /// Start of the bracket the caret refers to.
    pub brace_offset: u32,
    /// Where the caret goes: the end of a forward partner, the start of a
    /// backward one.
    pub navigation_offset: u32,
    /// The bracket ends at the caret rather than starting at it.
    pub caret_after_brace: bool,
}

/// Find the matched bracket for a caret at `offset`.
///
/// Candidates, first match wins:
/// 1. a closing bracket just before the caret
/// 2. an opening bracket at the caret
/// 3. an opening bracket just before the caret
/// 4. a closing bracket at the caret
///
/// Brackets whose scan does not end in a match are skipped.
pub fn brace_navigation_at(
    service: &BraceService,
    stream: &TokenStream,
    file_type: &FileType,
    offset: u32,
) -> Option<BraceNavigation> {
    let classifier = service.classifier(file_type);
    let text = stream.text();
    let token_at = |offset: u32| {
        stream
            .token_index_at(offset)
            .map(|index| stream.cursor_at_index(index))
    };
    let before = offset.checked_sub(1).and_then(token_at);
    let at = token_at(offset);

    let candidates: [(Option<StreamCursor<'_>>, Direction, bool); 4] = [
        (before, Direction::Backward, true),
        (at, Direction::Forward, false),
        (before, Direction::Forward, true),
        (at, Direction::Backward, false),
    ];

    for (cursor, direction, caret_after_brace) in candidates {
        let Some(mut cursor) = cursor else {
            continue;
        };
        let is_brace = match direction {
            Direction::Forward => classifier.is_open_token(cursor.kind()),
            Direction::Backward => classifier.is_close_token(&cursor, text),
        };
        if !is_brace {
            continue;
        }

        let brace_offset = cursor.start();
        let MatchResult::Matched { partner } =
            service.match_brace(file_type, text, &mut cursor, direction)
        else {
            continue;
        };
        let navigation_offset = match direction {
            Direction::Forward => partner.end,
            Direction::Backward => partner.start,
        };
        tracing::debug!(brace_offset, navigation_offset, "caret brace found");
        return Some(BraceNavigation {
            brace_offset,
            navigation_offset,
            caret_after_brace,
        });
    }
    None
}
