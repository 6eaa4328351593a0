//! Bracket and tag matching over highlighter token streams.
//!
//! Given a [`TokenStream`](brace_ir::TokenStream) and a cursor positioned
//! on a bracket-like token, the engine finds its partner by scanning
//! forward or backward with a stack of open pairs. The pieces, leaves
//! first:
//!
//! - [`table`]: per-language bracket-pair tables (configuration data)
//! - [`registry`]: resolves and memoizes the table for a [`FileType`]
//! - [`classifier`]: stateless queries over a resolved table
//! - [`matcher`]: the scan algorithms
//! - [`navigation`]: caret-relative brace lookup
//! - [`BraceService`]: facade bundling a registry and a [`MatchConfig`]
//!
//! Matching never fails. Malformed or truncated input yields a negative
//! [`MatchResult`] or `None`, never an error.

pub mod classifier;
mod file_type;
pub mod matcher;
pub mod navigation;
pub mod registry;
mod service;
pub mod table;

pub use classifier::Classifier;
pub use file_type::FileType;
pub use matcher::{
    Direction, FnControl, MatchResult, Matcher, ScanControl, StepLimit, Unbounded,
};
pub use navigation::{brace_navigation_at, BraceNavigation};
pub use registry::{TableRegistry, TableResolver};
pub use service::{BraceService, MatchConfig};
pub use table::{BracePair, BraceTable, GroupRules, MarkupCaps, TableError, TokenGroup};
