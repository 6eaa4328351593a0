//! Bracket Classifier.
//!
//! Stateless queries over the table resolved for one file type. Every
//! per-kind lookup consults the resolved table first and falls back to the
//! host default table for kinds the resolved table does not mention, so
//! the legacy default brackets keep working in every file type.
//!
//! Queries that depend on surrounding tokens (tag-end disambiguation, tag
//! names) take a cursor by reference and only ever move clones of it.

use std::sync::Arc;

use brace_ir::{TokenCursor, TokenKind};

use crate::table::{
    is_void_element, BraceRole, BraceTable, GroupRules, MarkupCaps, TokenGroup,
};

/// Per-file-type view over a resolved table and the default table.
#[derive(Clone, Debug)]
pub struct Classifier {
    table: Arc<BraceTable>,
    fallback: Arc<BraceTable>,
}

impl Classifier {
    pub fn new(table: Arc<BraceTable>, fallback: Arc<BraceTable>) -> Self {
        Classifier { table, fallback }
    }

    /// The table resolved for the file type.
    pub fn table(&self) -> &BraceTable {
        &self.table
    }

    /// The table that answers for `kind`.
    #[inline]
    fn owner(&self, kind: TokenKind) -> Option<&BraceTable> {
        if self.table.mentions(kind) {
            Some(&self.table)
        } else if self.fallback.mentions(kind) {
            Some(&self.fallback)
        } else {
            None
        }
    }

    #[inline]
    fn role(&self, kind: TokenKind) -> Option<BraceRole> {
        self.owner(kind).and_then(|t| t.role_of(kind))
    }

    /// Markup capabilities of the table owning `kind`, if it is tag-aware.
    #[inline]
    fn markup_caps(&self, kind: TokenKind) -> Option<MarkupCaps> {
        self.owner(kind).and_then(BraceTable::markup)
    }

    /// True if `kind` is answered by a table that tracks tag names.
    pub fn is_tag_aware(&self, kind: TokenKind) -> bool {
        self.markup_caps(kind).is_some()
    }

    pub fn token_group(&self, kind: TokenKind) -> TokenGroup {
        self.owner(kind)
            .and_then(|t| t.group_of(kind))
            .unwrap_or(TokenGroup::Undefined)
    }

    /// Tag rules of `group`, from the resolved table if it uses the group.
    pub fn group_rules(&self, group: TokenGroup) -> GroupRules {
        if self.table.uses_group(group) {
            self.table.rules(group)
        } else {
            self.fallback.rules(group)
        }
    }

    pub fn is_strict_tag_matching(&self, group: TokenGroup) -> bool {
        self.group_rules(group).contains(GroupRules::STRICT_TAGS)
    }

    pub fn are_tags_case_sensitive(&self, group: TokenGroup) -> bool {
        self.group_rules(group).contains(GroupRules::CASE_SENSITIVE)
    }

    pub fn is_open_token(&self, kind: TokenKind) -> bool {
        self.role(kind) == Some(BraceRole::Open)
    }

    /// True if the token under `cursor` closes a pair.
    ///
    /// A markup tag end `>` closes only the end tag it terminates, except
    /// in dialects with void elements, where the polarity is inverted for
    /// void names: `<br>` closes itself and `</br>` closes nothing.
    pub fn is_close_token<C: TokenCursor>(&self, cursor: &C, text: &str) -> bool {
        let kind = cursor.kind();
        if self.role(kind) != Some(BraceRole::Close) {
            return false;
        }
        if kind != TokenKind::TagEnd {
            return true;
        }
        let Some(caps) = self.markup_caps(kind) else {
            return true;
        };

        let ends_end_tag = self.has_end_tag_start(cursor);
        if caps.contains(MarkupCaps::VOID_ELEMENTS)
            && self.tag_name(cursor, text).is_some_and(is_void_element)
        {
            return !ends_end_tag;
        }
        ends_end_tag
    }

    /// True if `a` and `b` form a pair, in either order.
    pub fn is_pair_braces(&self, a: TokenKind, b: TokenKind) -> bool {
        if self.table.mentions(a) || self.table.mentions(b) {
            self.table.is_pair(a, b)
        } else {
            self.fallback.is_pair(a, b)
        }
    }

    pub fn is_structural_brace(&self, kind: TokenKind) -> bool {
        self.owner(kind).is_some_and(|t| t.is_structural(kind))
    }

    /// The first kind `kind` pairs with.
    pub fn opposite_brace(&self, kind: TokenKind) -> Option<TokenKind> {
        self.owner(kind)?.partners(kind).first().copied()
    }

    /// Whether typing `lbrace` before a token of kind `next` (`None` at end
    /// of text) should auto-insert its closing brace.
    pub fn is_paired_braces_allowed_before(
        &self,
        lbrace: TokenKind,
        next: Option<TokenKind>,
    ) -> bool {
        match self.owner(lbrace) {
            Some(table) => table.allows_paired_braces_before(next),
            None => true,
        }
    }

    /// Walk back from a tag end to the tag's opener: true if it is `</`.
    pub fn has_end_tag_start<C: TokenCursor>(&self, cursor: &C) -> bool {
        let mut probe = cursor.clone();
        let mut balance = 0i32;
        while balance >= 0 {
            probe.retreat();
            if probe.at_end() {
                return false;
            }
            match probe.kind() {
                TokenKind::TagEnd | TokenKind::EmptyElementEnd => balance += 1,
                TokenKind::EndTagStart => {
                    balance -= 1;
                    if balance < 0 {
                        return true;
                    }
                }
                TokenKind::StartTagStart => balance -= 1,
                _ => {}
            }
        }
        false
    }

    /// Tag name associated with the token under `cursor`.
    ///
    /// For `<` and `</` the name follows, possibly after one whitespace
    /// token. For `>` and `/>` the name is found by walking back to the
    /// tag's name, skipping over nested complete tags. Only tag-aware
    /// tables have tag names.
    pub fn tag_name<'t, C: TokenCursor>(&self, cursor: &C, text: &'t str) -> Option<&'t str> {
        let kind = cursor.kind();
        self.markup_caps(kind)?;
        match kind {
            TokenKind::StartTagStart | TokenKind::EndTagStart => {
                let mut probe = cursor.clone();
                probe.advance();
                if !probe.at_end() && probe.kind() == TokenKind::Whitespace {
                    probe.advance();
                }
                if !probe.at_end() && probe.kind() == TokenKind::TagName {
                    return probe.span().slice(text);
                }
                None
            }
            TokenKind::TagEnd | TokenKind::EmptyElementEnd => {
                let mut probe = cursor.clone();
                let mut balance = 0i32;
                loop {
                    probe.retreat();
                    if probe.at_end() {
                        return None;
                    }
                    match probe.kind() {
                        TokenKind::TagEnd | TokenKind::EmptyElementEnd => balance += 1,
                        TokenKind::TagName => {
                            balance -= 1;
                            if balance < 0 {
                                return probe.span().slice(text);
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => None,
        }
    }
}

/// Compare two optional tag names.
pub(crate) fn names_equal(a: Option<&str>, b: Option<&str>, case_sensitive: bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if case_sensitive => a == b,
        (Some(a), Some(b)) => a
            .chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase)),
        _ => false,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
