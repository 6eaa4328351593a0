//! End-to-end matching scenarios through the public API.
//!
//! Each test lexes a source with the reference lexers, resolves the table
//! through a registry and queries a `BraceService`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use brace_ir::{Language, Span, TokenKind, TokenStream};
use brace_lexer::lex_stream;
use brace_match::table::TokenGroup;
use brace_match::{
    brace_navigation_at, BraceNavigation, BraceService, BraceTable, Direction, FileType,
    GroupRules, MarkupCaps, MatchConfig, MatchResult, TableRegistry, TableResolver,
};
use pretty_assertions::assert_eq;

fn stream_for(source: &str, file_type: &FileType) -> TokenStream {
    lex_stream(source, file_type.language().unwrap())
}

fn match_at(
    service: &BraceService,
    file_type: &FileType,
    source: &str,
    offset: u32,
    direction: Direction,
) -> MatchResult {
    let stream = stream_for(source, file_type);
    let mut cursor = stream.cursor_at(offset);
    service.match_brace(file_type, stream.text(), &mut cursor, direction)
}

#[test]
fn nested_call_parens() {
    let result = match_at(
        &BraceService::default(),
        &FileType::JAVA,
        "a(b(c)d)e",
        1,
        Direction::Forward,
    );
    assert!(result.is_matched());
    assert_eq!(result.partner_offset(), Some(7));
}

#[test]
fn wrong_closer_reports_partner() {
    let result = match_at(&BraceService::default(), &FileType::JAVA, "(]", 0, Direction::Forward);
    assert!(!result.is_matched());
    assert_eq!(result.partner_offset(), Some(1));
}

#[test]
fn strict_tags_from_start_tag_end() {
    let result = match_at(
        &BraceService::default(),
        &FileType::XML,
        "<div><span></span></div>",
        4,
        Direction::Forward,
    );
    assert!(result.is_matched());
    assert_eq!(result.partner_offset(), Some(23));
}

#[test]
fn strict_tags_reject_case_mismatch() {
    let service = BraceService::default();
    let xml = match_at(&service, &FileType::XML, "<Div></div>", 0, Direction::Forward);
    assert!(!xml.is_matched());
    let html = match_at(&service, &FileType::HTML, "<Div></div>", 0, Direction::Forward);
    assert!(html.is_matched());
}

#[test]
fn leftmost_lparen_from_final_rparen() {
    let service = BraceService::default();
    let stream = lex_stream("f(g(x), h(y))", Language::Java);
    let offset = service.find_leftmost_lparen(
        &FileType::JAVA,
        stream.text(),
        stream.cursor_at(12),
        TokenKind::LParen,
    );
    assert_eq!(offset, Some(1));
}

#[test]
fn argument_bounds_around_caret() {
    let service = BraceService::default();
    let stream = lex_stream("f(g(x), h(y))", Language::Java);
    let at = |offset| stream.cursor_at(offset);
    let text = stream.text();

    assert_eq!(
        service.find_left_lparen(&FileType::JAVA, text, at(7), TokenKind::LParen),
        Some(1)
    );
    assert_eq!(
        service.find_right_rparen(&FileType::JAVA, text, at(7), TokenKind::RParen),
        Some(12)
    );
    assert_eq!(
        service.find_rightmost_rparen(&FileType::JAVA, text, at(10), TokenKind::RParen),
        Some(12)
    );
}

#[test]
fn scope_of_caret() {
    let source = "class A {\n  void f() {\n    g();\n  }\n}\n";
    let service = BraceService::default();
    let stream = lex_stream(source, Language::Java);
    let inner = source.find("g()").unwrap() as u32;
    let outer = source.find("void").unwrap() as u32;

    assert_eq!(
        service.find_structural_left_brace(&FileType::JAVA, stream.text(), stream.cursor_at(inner)),
        source.find("() {").map(|i| i as u32 + 3)
    );
    assert_eq!(
        service.find_structural_left_brace(&FileType::JAVA, stream.text(), stream.cursor_at(outer)),
        Some(8)
    );
}

#[test]
fn json_structure() {
    let source = r#"{"a": [1, {"b": [2]}], "c": {}}"#;
    let stream = lex_stream(source, Language::Json);
    let service = BraceService::default();
    let mut cursor = stream.cursor_at(0);
    let result = service.match_brace(&FileType::JSON, stream.text(), &mut cursor, Direction::Forward);
    assert_eq!(result.partner_offset(), Some(source.len() as u32 - 1));

    let inside = source.find('2').unwrap() as u32;
    assert_eq!(
        service.find_structural_left_brace(&FileType::JSON, stream.text(), stream.cursor_at(inside)),
        Some(inside - 1)
    );
}

#[test]
fn jsp_mixes_tags_and_scriptlets() {
    let source = "<ul><% for (int i = 0; i < n; i++) { %><li><%= i %></li><% } %></ul>";
    let service = BraceService::default();
    let end = source.len() as u32 - 1;

    let from_list = match_at(&service, &FileType::JSP, source, 0, Direction::Forward);
    assert_eq!(from_list.partner_offset(), Some(end));

    let expr = source.find("<%=").unwrap() as u32;
    let from_expr = match_at(&service, &FileType::JSP, source, expr, Direction::Forward);
    assert_eq!(from_expr.partner_offset(), source.find("%></li>").map(|i| i as u32));
}

#[test]
fn html_void_and_unclosed_elements() {
    let source = "<ul><li>one<li>two<br></ul>";
    let service = BraceService::default();
    let end = source.len() as u32 - 1;
    let result = match_at(&service, &FileType::HTML, source, 0, Direction::Forward);
    assert_eq!(result, MatchResult::Matched { partner: Span::new(end, end + 1) });

    let br = source.find("<br>").unwrap() as u32;
    let result = match_at(&service, &FileType::HTML, source, br, Direction::Forward);
    assert_eq!(result.partner_offset(), Some(br + 3));
}

#[test]
fn step_limit_from_config() {
    let source = format!("{}{}", "(".repeat(100), ")".repeat(100));
    let limited = BraceService::with_config(MatchConfig {
        step_limit: Some(50),
        ..MatchConfig::default()
    });
    assert_eq!(
        match_at(&limited, &FileType::JAVA, &source, 0, Direction::Forward),
        MatchResult::Interrupted
    );
    let unlimited = BraceService::default();
    assert_eq!(
        match_at(&unlimited, &FileType::JAVA, &source, 0, Direction::Forward).partner_offset(),
        Some(199)
    );
}

#[test]
fn unknown_file_type_uses_default_table() {
    let service = BraceService::default();
    let unknown = FileType::custom("Unknown", None);

    let code = lex_stream("x { [ ] }", Language::Java);
    let mut cursor = code.cursor_at(2);
    let result = service.match_brace(&unknown, code.text(), &mut cursor, Direction::Forward);
    assert_eq!(result.partner_offset(), Some(8));

    let markup = lex_stream("<a><B></b></A>", Language::Html);
    let mut cursor = markup.cursor_at(0);
    let result = service.match_brace(&unknown, markup.text(), &mut cursor, Direction::Forward);
    assert_eq!(result.partner_offset(), Some(13));
}

/// Resolves the `Template` file type to a table where `<%` and `%>` are structural.
struct TemplateResolver {
    table: Arc<BraceTable>,
}

impl TableResolver for TemplateResolver {
    fn name(&self) -> &str {
        "templates"
    }

    fn resolve(&self, file_type: &FileType) -> Option<Arc<BraceTable>> {
        (file_type.name() == "Template").then(|| Arc::clone(&self.table))
    }
}

#[test]
fn custom_resolver_table() {
    let table = BraceTable::builder("Template")
        .pair(
            TokenKind::ScriptletStart,
            TokenKind::ScriptletEnd,
            TokenGroup::EmbeddedScript,
            true,
        )
        .rules(TokenGroup::XmlTag, GroupRules::empty())
        .markup(MarkupCaps::empty())
        .build()
        .unwrap();
    let registry = TableRegistry::builder()
        .resolver(TemplateResolver {
            table: Arc::new(table),
        })
        .build();
    let service = BraceService::new(registry, MatchConfig::default());
    let template = FileType::custom("Template", None);

    assert!(service.is_structural_brace(&template, TokenKind::ScriptletStart));
    // kinds the template table leaves out still come from the default table
    assert!(service.is_structural_brace(&template, TokenKind::LBrace));
    assert_eq!(service.registry().table_for(&template).name(), "Template");
}

#[test]
fn navigation_through_service() {
    let service = BraceService::default();
    let stream = lex_stream("if (a) { b(); }", Language::Java);
    assert_eq!(
        brace_navigation_at(&service, &stream, &FileType::JAVA, 8),
        Some(BraceNavigation {
            brace_offset: 7,
            navigation_offset: 15,
            caret_after_brace: true,
        })
    );
    assert_eq!(brace_navigation_at(&service, &stream, &FileType::JAVA, 1), None);
}
