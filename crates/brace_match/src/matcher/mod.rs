//! Matcher: stack-based bracket scans.
//!
//! All scans walk a [`TokenCursor`] one token at a time, consult the
//! [`Classifier`] at each step and keep a small stack of open brackets.
//! Opening and closing are direction-relative: scanning backward, a
//! closing bracket opens a nesting level and an opening bracket closes it.
//!
//! Scans never fail. Unbalanced or truncated input ends the scan with a
//! negative result.

mod control;
mod result;

pub use control::{from_fn, FnControl, ScanControl, StepLimit, Unbounded};
pub use result::MatchResult;

use brace_ir::{TokenCursor, TokenKind};
use smallvec::SmallVec;

use crate::classifier::{names_equal, Classifier};

/// Scan direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn step<C: TokenCursor>(self, cursor: &mut C) {
        match self {
            Direction::Forward => cursor.advance(),
            Direction::Backward => cursor.retreat(),
        }
    }
}

/// Open brackets of a scan with their tag names.
type TagStack<'t> = SmallVec<[(TokenKind, Option<&'t str>); 16]>;

/// The scan algorithms over one text.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    classifier: &'a Classifier,
    text: &'a str,
}

impl<'a> Matcher<'a> {
    pub fn new(classifier: &'a Classifier, text: &'a str) -> Self {
        Matcher { classifier, text }
    }

    /// True if the token under `cursor` opens a nesting level when
    /// scanning in `direction`.
    #[inline]
    fn opens<C: TokenCursor>(&self, cursor: &C, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.classifier.is_open_token(cursor.kind()),
            Direction::Backward => self.classifier.is_close_token(cursor, self.text),
        }
    }

    /// True if the token under `cursor` closes a nesting level when
    /// scanning in `direction`.
    #[inline]
    fn closes<C: TokenCursor>(&self, cursor: &C, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.classifier.is_close_token(cursor, self.text),
            Direction::Backward => self.classifier.is_open_token(cursor.kind()),
        }
    }

    /// Find the partner of the bracket under `cursor`.
    ///
    /// Tokens of other groups are skipped. Unless matching is strict, tags
    /// named differently from the starting tag are skipped too. `strict`
    /// overrides the group's strict-tag rule. On success the cursor is left
    /// on the partner.
    ///
    /// Scanning forward from the `>` of a start tag scans as if from the
    /// tag's `<`, so the partner is the end tag's `>`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is at a stream boundary.
    #[tracing::instrument(level = "trace", skip_all, fields(direction = ?direction))]
    pub fn match_brace<C: TokenCursor>(
        &self,
        cursor: &mut C,
        direction: Direction,
        strict: Option<bool>,
        control: impl ScanControl,
    ) -> MatchResult {
        assert!(
            !cursor.at_end(),
            "match_brace called with the cursor at a stream boundary"
        );
        let result = self.scan_match(cursor, direction, strict, control);
        tracing::trace!(?result, "brace scan finished");
        result
    }

    fn scan_match<C: TokenCursor>(
        &self,
        cursor: &mut C,
        direction: Direction,
        strict: Option<bool>,
        mut control: impl ScanControl,
    ) -> MatchResult {
        let classifier = self.classifier;
        let mut start_kind = cursor.kind();
        let group = classifier.token_group(start_kind);
        let strict = strict.unwrap_or_else(|| classifier.is_strict_tag_matching(group));
        let case_sensitive = classifier.are_tags_case_sensitive(group);
        let start_name = classifier.tag_name(cursor, self.text);

        if direction == Direction::Forward
            && start_kind == TokenKind::TagEnd
            && classifier.is_tag_aware(start_kind)
            && !classifier.is_close_token(cursor, self.text)
        {
            start_kind = TokenKind::StartTagStart;
        }

        let mut stack: TagStack<'a> = SmallVec::new();
        stack.push((start_kind, start_name));

        loop {
            if !control.should_continue() {
                return MatchResult::Interrupted;
            }
            direction.step(cursor);
            if cursor.at_end() {
                return MatchResult::Exhausted;
            }

            let kind = cursor.kind();
            if classifier.token_group(kind) != group {
                continue;
            }
            let name = classifier.tag_name(cursor, self.text);
            if !strict && !names_equal(start_name, name, case_sensitive) {
                continue;
            }

            if self.opens(cursor, direction) {
                stack.push((kind, name));
            } else if self.closes(cursor, direction) {
                let partner = cursor.span();
                let Some((top_kind, top_name)) = stack.pop() else {
                    return MatchResult::Mismatched { partner };
                };
                if !classifier.is_pair_braces(top_kind, kind)
                    || (strict && !names_equal(top_name, name, case_sensitive))
                {
                    return MatchResult::Mismatched { partner };
                }
                if stack.is_empty() {
                    return MatchResult::Matched { partner };
                }
            }
        }
    }

    /// Offset of the structural opening bracket enclosing `cursor`.
    ///
    /// Scans backward from the token under the cursor (inclusive), looking
    /// only at structural brackets. Returns `None` when the nesting does
    /// not pair up or the start of the stream is reached.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn find_structural_left_brace<C: TokenCursor>(
        &self,
        mut cursor: C,
        mut control: impl ScanControl,
    ) -> Option<u32> {
        let classifier = self.classifier;
        let mut stack: TagStack<'a> = SmallVec::new();

        while !cursor.at_end() {
            if !control.should_continue() {
                return None;
            }
            let kind = cursor.kind();
            if classifier.is_structural_brace(kind) {
                if classifier.is_close_token(&cursor, self.text) {
                    stack.push((kind, classifier.tag_name(&cursor, self.text)));
                } else if classifier.is_open_token(kind) {
                    let Some((top_kind, top_name)) = stack.pop() else {
                        tracing::trace!(offset = cursor.start(), "structural brace found");
                        return Some(cursor.start());
                    };
                    let name = classifier.tag_name(&cursor, self.text);
                    let case_sensitive =
                        classifier.are_tags_case_sensitive(classifier.token_group(kind));
                    if !classifier.is_pair_braces(top_kind, kind)
                        || !names_equal(top_name, name, case_sensitive)
                    {
                        return None;
                    }
                }
            }
            cursor.retreat();
        }
        None
    }

    /// Offset of the outermost un-nested `lparen` left of `cursor`.
    ///
    /// The token under the cursor is the anchor and is not examined. The
    /// scan stops at the first bracket that cannot pair with the innermost
    /// open one, or at a bracket of another kind at depth zero, returning
    /// the last candidate seen.
    pub fn find_leftmost_lparen<C: TokenCursor>(
        &self,
        cursor: C,
        lparen: TokenKind,
        control: impl ScanControl,
    ) -> Option<u32> {
        self.paren_scan(cursor, lparen, Direction::Backward, Reach::Outermost, control)
    }

    /// Offset of the outermost un-nested `rparen` right of `cursor`.
    pub fn find_rightmost_rparen<C: TokenCursor>(
        &self,
        cursor: C,
        rparen: TokenKind,
        control: impl ScanControl,
    ) -> Option<u32> {
        self.paren_scan(cursor, rparen, Direction::Forward, Reach::Outermost, control)
    }

    /// Offset of the nearest un-nested `lparen` left of `cursor`.
    pub fn find_left_lparen<C: TokenCursor>(
        &self,
        cursor: C,
        lparen: TokenKind,
        control: impl ScanControl,
    ) -> Option<u32> {
        self.paren_scan(cursor, lparen, Direction::Backward, Reach::Nearest, control)
    }

    /// Offset of the nearest un-nested `rparen` right of `cursor`.
    pub fn find_right_rparen<C: TokenCursor>(
        &self,
        cursor: C,
        rparen: TokenKind,
        control: impl ScanControl,
    ) -> Option<u32> {
        self.paren_scan(cursor, rparen, Direction::Forward, Reach::Nearest, control)
    }

    #[tracing::instrument(level = "trace", skip(self, cursor, control))]
    fn paren_scan<C: TokenCursor>(
        &self,
        mut cursor: C,
        target: TokenKind,
        direction: Direction,
        reach: Reach,
        mut control: impl ScanControl,
    ) -> Option<u32> {
        let classifier = self.classifier;
        let mut stack: SmallVec<[TokenKind; 16]> = SmallVec::new();
        let mut found = None;

        loop {
            if !control.should_continue() {
                return None;
            }
            direction.step(&mut cursor);
            if cursor.at_end() {
                break;
            }

            let kind = cursor.kind();
            if self.closes(&cursor, direction) {
                if let Some(top) = stack.pop() {
                    if !classifier.is_pair_braces(kind, top) {
                        break;
                    }
                } else if kind == target {
                    found = Some(cursor.start());
                    if reach == Reach::Nearest {
                        break;
                    }
                } else {
                    break;
                }
            } else if self.opens(&cursor, direction) {
                stack.push(kind);
            }
        }
        tracing::trace!(?found, "paren scan finished");
        found
    }
}

/// Which candidate a paren scan reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reach {
    /// The first un-nested candidate.
    Nearest,
    /// The last un-nested candidate before the scan stops.
    Outermost,
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
