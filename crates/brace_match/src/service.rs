//! `BraceService`: registry plus configuration behind one entry point.

use brace_ir::{TokenCursor, TokenKind};

use crate::classifier::Classifier;
use crate::file_type::FileType;
use crate::matcher::{Direction, MatchResult, Matcher, StepLimit};
use crate::registry::TableRegistry;
use crate::table::TokenGroup;

/// Matching configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// Overrides every group's strict-tag rule when set.
    pub strict: Option<bool>,
    /// Maximum number of steps per scan; unbounded when `None`.
    pub step_limit: Option<usize>,
}

/// The engine's entry point: classifier queries and scans keyed by file type.
#[derive(Debug, Default)]
pub struct BraceService {
    registry: TableRegistry,
    config: MatchConfig,
}

impl BraceService {
    pub fn new(registry: TableRegistry, config: MatchConfig) -> Self {
        BraceService { registry, config }
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self::new(TableRegistry::new(), config)
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    pub fn classifier(&self, file_type: &FileType) -> Classifier {
        self.registry.classifier(file_type)
    }

    fn control(&self) -> Option<StepLimit> {
        self.config.step_limit.map(StepLimit::new)
    }

    pub fn is_open_token(&self, file_type: &FileType, kind: TokenKind) -> bool {
        self.classifier(file_type).is_open_token(kind)
    }

    pub fn is_close_token<C: TokenCursor>(
        &self,
        file_type: &FileType,
        cursor: &C,
        text: &str,
    ) -> bool {
        self.classifier(file_type).is_close_token(cursor, text)
    }

    pub fn is_pair_braces(&self, file_type: &FileType, a: TokenKind, b: TokenKind) -> bool {
        self.classifier(file_type).is_pair_braces(a, b)
    }

    pub fn is_structural_brace(&self, file_type: &FileType, kind: TokenKind) -> bool {
        self.classifier(file_type).is_structural_brace(kind)
    }

    pub fn token_group(&self, file_type: &FileType, kind: TokenKind) -> TokenGroup {
        self.classifier(file_type).token_group(kind)
    }

    /// Match the bracket under `cursor` with the configured strictness.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is at a stream boundary.
    pub fn match_brace<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: &mut C,
        direction: Direction,
    ) -> MatchResult {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).match_brace(
            cursor,
            direction,
            self.config.strict,
            self.control(),
        )
    }

    pub fn find_structural_left_brace<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: C,
    ) -> Option<u32> {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).find_structural_left_brace(cursor, self.control())
    }

    pub fn find_leftmost_lparen<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: C,
        lparen: TokenKind,
    ) -> Option<u32> {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).find_leftmost_lparen(cursor, lparen, self.control())
    }

    pub fn find_rightmost_rparen<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: C,
        rparen: TokenKind,
    ) -> Option<u32> {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).find_rightmost_rparen(cursor, rparen, self.control())
    }

    pub fn find_left_lparen<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: C,
        lparen: TokenKind,
    ) -> Option<u32> {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).find_left_lparen(cursor, lparen, self.control())
    }

    pub fn find_right_rparen<C: TokenCursor>(
        &self,
        file_type: &FileType,
        text: &str,
        cursor: C,
        rparen: TokenKind,
    ) -> Option<u32> {
        let classifier = self.classifier(file_type);
        Matcher::new(&classifier, text).find_right_rparen(cursor, rparen, self.control())
    }
}
