use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builtin_tables_validate() {
    for language in Language::ALL {
        let Some(table) = BraceTable::builtin(language) else {
            assert_eq!(language, Language::PlainText);
            continue;
        };
        let rebuilt = BraceTable::builder(table.name());
        let rebuilt = table.pairs().iter().fold(rebuilt, |b, p| {
            b.pair(p.open, p.close, p.group, p.structural)
        });
        assert!(rebuilt.build().is_ok(), "{} table is invalid", table.name());
    }
}

#[test]
fn test_java_table() {
    let java = BraceTable::builtin(Language::Java).unwrap();
    assert!(java.is_pair(TokenKind::LParen, TokenKind::RParen));
    assert!(java.is_pair(TokenKind::RParen, TokenKind::LParen));
    assert!(!java.is_pair(TokenKind::LParen, TokenKind::RBracket));
    assert!(java.is_structural(TokenKind::LBrace));
    assert!(!java.is_structural(TokenKind::LParen));
    assert_eq!(java.role_of(TokenKind::RBrace), Some(BraceRole::Close));
    assert_eq!(
        java.group_of(TokenKind::DocInlineTagStart),
        Some(TokenGroup::DocComment)
    );
    assert_eq!(java.markup(), None);
    assert!(!java.mentions(TokenKind::StartTagStart));
}

#[test]
fn test_markup_tables_rules() {
    let xml = BraceTable::builtin(Language::Xml).unwrap();
    let html = BraceTable::builtin(Language::Html).unwrap();
    let xhtml = BraceTable::builtin(Language::Xhtml).unwrap();

    assert_eq!(
        xml.rules(TokenGroup::XmlTag),
        GroupRules::STRICT_TAGS | GroupRules::CASE_SENSITIVE
    );
    assert_eq!(html.rules(TokenGroup::XmlTag), GroupRules::empty());
    assert_eq!(html.markup(), Some(MarkupCaps::VOID_ELEMENTS));
    assert_eq!(xhtml.markup(), Some(MarkupCaps::empty()));
    assert_eq!(
        xml.partners(TokenKind::StartTagStart),
        &[TokenKind::TagEnd, TokenKind::EmptyElementEnd]
    );
    assert_eq!(xml.role_of(TokenKind::EndTagStart), Some(BraceRole::Member));
}

#[test]
fn test_jsp_scriptlets_share_closer() {
    let jsp = BraceTable::builtin(Language::Jsp).unwrap();
    assert_eq!(jsp.partners(TokenKind::ScriptletEnd).len(), 4);
    assert!(jsp.is_pair(TokenKind::ScriptExpressionStart, TokenKind::ScriptletEnd));
    assert!(jsp.uses_group(TokenGroup::EmbeddedScript));
    let html = BraceTable::builtin(Language::Html).unwrap();
    assert!(!html.uses_group(TokenGroup::EmbeddedScript));
}

#[test]
fn test_default_table_covers_legacy_kinds() {
    let default = BraceTable::host_default();
    for kind in [
        TokenKind::LParen,
        TokenKind::StartTagStart,
        TokenKind::AttrValueStart,
        TokenKind::ScriptletStart,
        TokenKind::DocInlineTagStart,
    ] {
        assert_eq!(default.role_of(kind), Some(BraceRole::Open), "{kind}");
    }
    assert_eq!(default.rules(TokenGroup::XmlTag), GroupRules::STRICT_TAGS);
}

#[test]
fn test_paired_braces_allowed_before() {
    let java = BraceTable::builtin(Language::Java).unwrap();
    assert!(java.allows_paired_braces_before(Some(TokenKind::Whitespace)));
    assert!(java.allows_paired_braces_before(Some(TokenKind::RParen)));
    assert!(java.allows_paired_braces_before(None));
    assert!(!java.allows_paired_braces_before(Some(TokenKind::Ident)));

    let json = BraceTable::builtin(Language::Json).unwrap();
    assert!(json.allows_paired_braces_before(Some(TokenKind::Ident)));
}

#[test]
fn test_self_pair_is_rejected() {
    let err = BraceTable::builder("bad")
        .pair(TokenKind::Operator, TokenKind::Operator, TokenGroup::Code, false)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TableError::SelfPair {
            table: "bad".into(),
            kind: TokenKind::Operator
        }
    );
}

#[test]
fn test_role_conflict_is_rejected() {
    let err = BraceTable::builder("bad")
        .pair(TokenKind::Lt, TokenKind::Gt, TokenGroup::Code, false)
        .pair(TokenKind::Gt, TokenKind::Lt, TokenGroup::Code, false)
        .build()
        .unwrap_err();
    assert!(matches!(err, TableError::RoleConflict { kind: TokenKind::Gt, .. }));
    assert_eq!(
        err.to_string(),
        "table `bad`: > is used both as an opening and a closing brace"
    );
}

#[test]
fn test_group_conflict_is_rejected() {
    let err = BraceTable::builder("bad")
        .pair(TokenKind::LParen, TokenKind::RParen, TokenGroup::Code, false)
        .member(TokenKind::RParen, TokenGroup::XmlTag)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TableError::GroupConflict {
            table: "bad".into(),
            kind: TokenKind::RParen,
            first: TokenGroup::Code,
            second: TokenGroup::XmlTag,
        }
    );
}

#[test]
fn test_void_elements() {
    assert!(is_void_element("br"));
    assert!(is_void_element("BR"));
    assert!(is_void_element("Img"));
    assert!(!is_void_element("div"));
    assert!(!is_void_element(""));
}
