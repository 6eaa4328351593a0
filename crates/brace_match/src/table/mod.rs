//! Bracket-pair tables.
//!
//! A [`BraceTable`] is the per-language configuration the engine consumes:
//! which token kinds pair with which, which pairs are structural, which
//! group each kind belongs to, and the tag-matching rules of each group.
//! Tables are immutable once built and shared behind `Arc`.

mod builtin;

pub use builtin::{is_void_element, VOID_ELEMENTS};

use std::fmt;

use brace_ir::{Language, TokenKind};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Coarse category of bracket syntax.
///
/// Tokens of different groups are transparent to each other during a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenGroup {
    Undefined,
    Code,
    XmlTag,
    XmlAttributeValue,
    EmbeddedScript,
    DocComment,
    /// Comment and CDATA delimiters in markup.
    MarkupSection,
}

impl TokenGroup {
    pub const COUNT: usize = 7;

    pub const ALL: [TokenGroup; Self::COUNT] = [
        TokenGroup::Undefined,
        TokenGroup::Code,
        TokenGroup::XmlTag,
        TokenGroup::XmlAttributeValue,
        TokenGroup::EmbeddedScript,
        TokenGroup::DocComment,
        TokenGroup::MarkupSection,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            TokenGroup::Undefined => "undefined",
            TokenGroup::Code => "code",
            TokenGroup::XmlTag => "xml-tag",
            TokenGroup::XmlAttributeValue => "xml-attribute-value",
            TokenGroup::EmbeddedScript => "embedded-script",
            TokenGroup::DocComment => "doc-comment",
            TokenGroup::MarkupSection => "markup-section",
        }
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Tag-name rules of a group.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GroupRules: u8 {
        /// Opening and closing tags must carry equal names.
        const STRICT_TAGS = 1 << 0;
        /// Tag names compare case-sensitively.
        const CASE_SENSITIVE = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Markup dialect capabilities of a table.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkupCaps: u8 {
        /// The dialect has void elements (`<br>`): the `>` ending a void
        /// start tag closes the element, and the `>` of an end tag for a
        /// void name does not.
        const VOID_ELEMENTS = 1 << 0;
    }
}

/// One opening/closing pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracePair {
    pub open: TokenKind,
    pub close: TokenKind,
    pub group: TokenGroup,
    /// The pair delimits a scope (eligible for scope highlighting).
    pub structural: bool,
}

impl BracePair {
    pub const fn new(
        open: TokenKind,
        close: TokenKind,
        group: TokenGroup,
        structural: bool,
    ) -> Self {
        BracePair {
            open,
            close,
            group,
            structural,
        }
    }
}

/// Role of a kind within its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BraceRole {
    Open,
    Close,
    /// Belongs to a group without being a brace (e.g. `</`).
    Member,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct KindEntry {
    group: TokenGroup,
    role: BraceRole,
    structural: bool,
}

/// Error building a [`BraceTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table `{table}`: {kind} is paired with itself")]
    SelfPair { table: String, kind: TokenKind },
    #[error("table `{table}`: {kind} is used both as an opening and a closing brace")]
    RoleConflict { table: String, kind: TokenKind },
    #[error("table `{table}`: {kind} belongs to both the {first} and the {second} group")]
    GroupConflict {
        table: String,
        kind: TokenKind,
        first: TokenGroup,
        second: TokenGroup,
    },
}

/// Bracket-pair table of one language or file type.
#[derive(Clone, Debug)]
pub struct BraceTable {
    name: String,
    pairs: Vec<BracePair>,
    kinds: FxHashMap<TokenKind, KindEntry>,
    partners: FxHashMap<TokenKind, SmallVec<[TokenKind; 2]>>,
    rules: [GroupRules; TokenGroup::COUNT],
    markup: Option<MarkupCaps>,
    allowed_before: Option<Vec<TokenKind>>,
}

impl BraceTable {
    pub fn builder(name: impl Into<String>) -> BraceTableBuilder {
        BraceTableBuilder {
            name: name.into(),
            pairs: Vec::new(),
            members: Vec::new(),
            rules: [GroupRules::empty(); TokenGroup::COUNT],
            markup: None,
            allowed_before: None,
        }
    }

    /// The built-in table of `language`, if it has one.
    pub fn builtin(language: Language) -> Option<BraceTable> {
        builtin::language_table(language)
    }

    /// The host default table used when nothing more specific applies.
    pub fn host_default() -> BraceTable {
        builtin::default_table()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pairs(&self) -> &[BracePair] {
        &self.pairs
    }

    /// True if the table assigns `kind` to a group.
    #[inline]
    pub fn mentions(&self, kind: TokenKind) -> bool {
        self.kinds.contains_key(&kind)
    }

    #[inline]
    pub fn group_of(&self, kind: TokenKind) -> Option<TokenGroup> {
        self.kinds.get(&kind).map(|e| e.group)
    }

    #[inline]
    pub fn role_of(&self, kind: TokenKind) -> Option<BraceRole> {
        self.kinds.get(&kind).map(|e| e.role)
    }

    #[inline]
    pub fn is_structural(&self, kind: TokenKind) -> bool {
        self.kinds.get(&kind).is_some_and(|e| e.structural)
    }

    /// True if `a` and `b` form a pair, in either order.
    pub fn is_pair(&self, a: TokenKind, b: TokenKind) -> bool {
        self.partners(a).contains(&b)
    }

    /// Kinds that pair with `kind`, in declaration order.
    pub fn partners(&self, kind: TokenKind) -> &[TokenKind] {
        self.partners
            .get(&kind)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    pub fn rules(&self, group: TokenGroup) -> GroupRules {
        self.rules[group.index()]
    }

    /// True if any kind of the table belongs to `group`.
    pub fn uses_group(&self, group: TokenGroup) -> bool {
        self.kinds.values().any(|e| e.group == group)
    }

    /// Markup capabilities; `None` for tables that know nothing of tag names.
    pub fn markup(&self) -> Option<MarkupCaps> {
        self.markup
    }

    /// Whether a closing brace may be auto-inserted before `next`
    /// (`None` meaning end of text).
    pub fn allows_paired_braces_before(&self, next: Option<TokenKind>) -> bool {
        match (&self.allowed_before, next) {
            (None, _) | (Some(_), None) => true,
            (Some(kinds), Some(next)) => kinds.contains(&next),
        }
    }
}

/// Builder for [`BraceTable`].
#[derive(Clone, Debug)]
pub struct BraceTableBuilder {
    name: String,
    pairs: Vec<BracePair>,
    members: Vec<(TokenKind, TokenGroup)>,
    rules: [GroupRules; TokenGroup::COUNT],
    markup: Option<MarkupCaps>,
    allowed_before: Option<Vec<TokenKind>>,
}

impl BraceTableBuilder {
    #[must_use]
    pub fn pair(
        mut self,
        open: TokenKind,
        close: TokenKind,
        group: TokenGroup,
        structural: bool,
    ) -> Self {
        self.pairs.push(BracePair::new(open, close, group, structural));
        self
    }

    /// Add a kind to `group` without making it a brace.
    #[must_use]
    pub fn member(mut self, kind: TokenKind, group: TokenGroup) -> Self {
        self.members.push((kind, group));
        self
    }

    #[must_use]
    pub fn rules(mut self, group: TokenGroup, rules: GroupRules) -> Self {
        self.rules[group.index()] = rules;
        self
    }

    /// Mark the table as tag-name aware, with the given dialect capabilities.
    #[must_use]
    pub fn markup(mut self, caps: MarkupCaps) -> Self {
        self.markup = Some(caps);
        self
    }

    /// Restrict auto-inserted closing braces to positions before `kinds`
    /// or at end of text.
    #[must_use]
    pub fn paired_braces_allowed_before(mut self, kinds: &[TokenKind]) -> Self {
        self.allowed_before = Some(kinds.to_vec());
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<BraceTable, TableError> {
        self.validate()?;
        Ok(self.finish())
    }

    /// Check pairs and members for conflicts.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen: FxHashMap<TokenKind, (TokenGroup, BraceRole)> = FxHashMap::default();
        let pair_roles = self.pairs.iter().flat_map(|p| {
            [
                (p.open, p.group, BraceRole::Open),
                (p.close, p.group, BraceRole::Close),
            ]
        });
        let member_roles = self
            .members
            .iter()
            .map(|&(kind, group)| (kind, group, BraceRole::Member));

        for pair in &self.pairs {
            if pair.open == pair.close {
                return Err(TableError::SelfPair {
                    table: self.name.clone(),
                    kind: pair.open,
                });
            }
        }

        for (kind, group, role) in pair_roles.chain(member_roles) {
            match seen.get(&kind).copied() {
                None => {
                    seen.insert(kind, (group, role));
                }
                Some((first, _)) if first != group => {
                    return Err(TableError::GroupConflict {
                        table: self.name.clone(),
                        kind,
                        first,
                        second: group,
                    });
                }
                Some((_, existing)) if existing != role => {
                    return Err(TableError::RoleConflict {
                        table: self.name.clone(),
                        kind,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Build without validation; later declarations override earlier ones.
    pub(crate) fn finish(self) -> BraceTable {
        let mut kinds = FxHashMap::default();
        let mut partners: FxHashMap<TokenKind, SmallVec<[TokenKind; 2]>> = FxHashMap::default();

        for &(kind, group) in &self.members {
            kinds.insert(
                kind,
                KindEntry {
                    group,
                    role: BraceRole::Member,
                    structural: false,
                },
            );
        }
        for pair in &self.pairs {
            for (kind, role) in [(pair.open, BraceRole::Open), (pair.close, BraceRole::Close)] {
                let entry = kinds.entry(kind).or_insert(KindEntry {
                    group: pair.group,
                    role,
                    structural: false,
                });
                entry.group = pair.group;
                entry.role = role;
                entry.structural |= pair.structural;
            }
            push_partner(&mut partners, pair.open, pair.close);
            push_partner(&mut partners, pair.close, pair.open);
        }

        BraceTable {
            name: self.name,
            pairs: self.pairs,
            kinds,
            partners,
            rules: self.rules,
            markup: self.markup,
            allowed_before: self.allowed_before,
        }
    }
}

fn push_partner(
    partners: &mut FxHashMap<TokenKind, SmallVec<[TokenKind; 2]>>,
    kind: TokenKind,
    partner: TokenKind,
) {
    let list = partners.entry(kind).or_default();
    if !list.contains(&partner) {
        list.push(partner);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
