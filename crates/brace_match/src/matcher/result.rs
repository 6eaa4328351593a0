//! Outcome of a directional match.

use brace_ir::Span;

/// Result of [`Matcher::match_brace`](super::Matcher::match_brace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The partner was found.
    Matched { partner: Span },
    /// A closing token was reached that does not pair with the innermost
    /// open bracket (wrong kind, or a tag-name mismatch in strict mode).
    Mismatched { partner: Span },
    /// The stream ended before any partner appeared.
    Exhausted,
    /// The scan control stopped the scan.
    Interrupted,
}

impl MatchResult {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// The partner (or mismatched) token, if one was reached.
    #[inline]
    pub fn partner(&self) -> Option<Span> {
        match *self {
            MatchResult::Matched { partner } | MatchResult::Mismatched { partner } => Some(partner),
            MatchResult::Exhausted | MatchResult::Interrupted => None,
        }
    }

    /// Start offset of [`partner`](Self::partner).
    #[inline]
    pub fn partner_offset(&self) -> Option<u32> {
        self.partner().map(|span| span.start)
    }
}
