use super::*;
use brace_ir::TokenKind;
use pretty_assertions::assert_eq;

use crate::table::TokenGroup;

/// Resolves a fixed table for file types whose name ends with `suffix`.
struct SuffixResolver {
    suffix: &'static str,
    table: Arc<BraceTable>,
}

impl TableResolver for SuffixResolver {
    fn name(&self) -> &str {
        "suffix"
    }

    fn resolve(&self, file_type: &FileType) -> Option<Arc<BraceTable>> {
        file_type
            .name()
            .ends_with(self.suffix)
            .then(|| Arc::clone(&self.table))
    }
}

fn angle_table() -> BraceTable {
    BraceTable::builder("angles")
        .pair(TokenKind::Lt, TokenKind::Gt, TokenGroup::Code, false)
        .build()
        .unwrap()
}

#[test]
fn test_builtin_languages_resolve_to_their_tables() {
    let registry = TableRegistry::new();
    assert_eq!(registry.table_for(&FileType::JAVA).name(), "Java");
    assert_eq!(registry.table_for(&FileType::XHTML).name(), "XHTML");
    assert_eq!(
        registry
            .table_for(&FileType::custom("Thymeleaf", Some(Language::Html)))
            .name(),
        "HTML"
    );
}

#[test]
fn test_unknown_types_fall_back_to_default() {
    let registry = TableRegistry::new();
    assert_eq!(registry.table_for(&FileType::PLAIN_TEXT).name(), "default");
    assert_eq!(
        registry
            .table_for(&FileType::custom("Makefile", None))
            .name(),
        "default"
    );
}

#[test]
fn test_explicit_registration_wins() {
    let registry = TableRegistry::builder()
        .register(FileType::JAVA, angle_table())
        .build();
    assert_eq!(registry.table_for(&FileType::JAVA).name(), "angles");
    assert_eq!(registry.table_for(&FileType::JSON).name(), "JSON");
}

#[test]
fn test_custom_resolver_runs_after_builtins() {
    let registry = TableRegistry::builder()
        .resolver(SuffixResolver {
            suffix: ".tpl",
            table: Arc::new(angle_table()),
        })
        .build();
    assert_eq!(
        registry
            .table_for(&FileType::custom("page.tpl", None))
            .name(),
        "angles"
    );
    // A language table answers before the custom resolver is asked.
    assert_eq!(
        registry
            .table_for(&FileType::custom("x.tpl", Some(Language::Json)))
            .name(),
        "JSON"
    );
}

#[test]
fn test_replacing_default_table() {
    let registry = TableRegistry::builder().default_table(angle_table()).build();
    assert_eq!(registry.table_for(&FileType::PLAIN_TEXT).name(), "angles");
    assert_eq!(registry.default_table().name(), "angles");
}

#[test]
fn test_lookups_are_memoized() {
    let registry = TableRegistry::new();
    assert_eq!(registry.cached_len(), 0);
    let first = registry.table_for(&FileType::HTML);
    let second = registry.table_for(&FileType::HTML);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.cached_len(), 1);
    registry.table_for(&FileType::XML);
    assert_eq!(registry.cached_len(), 2);
}

#[test]
fn test_concurrent_population_publishes_one_table() {
    let registry = TableRegistry::new();
    let file_type = FileType::custom("shared", None);

    let tables: Vec<Arc<BraceTable>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| registry.table_for(&file_type)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }
    assert_eq!(registry.cached_len(), 1);
}

#[test]
fn test_classifier_uses_resolved_and_default_tables() {
    let registry = TableRegistry::new();
    let classifier = registry.classifier(&FileType::JSON);
    assert_eq!(classifier.table().name(), "JSON");
    // `(` is not in the JSON table but the default table pairs it.
    assert!(classifier.is_open_token(TokenKind::LParen));
    assert!(classifier.is_structural_brace(TokenKind::LBracket));
}

#[test]
fn test_debug_lists_resolvers() {
    let registry = TableRegistry::new();
    let debug = format!("{registry:?}");
    assert!(debug.contains("explicit"), "{debug}");
    assert!(debug.contains("language"), "{debug}");
}
