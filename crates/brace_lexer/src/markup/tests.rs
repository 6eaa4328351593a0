use super::*;
use pretty_assertions::assert_eq;

fn lexed(source: &str, options: MarkupOptions) -> Vec<(TokenKind, &str)> {
    lex_markup(source, options)
        .iter()
        .map(|t| (t.kind, &source[t.span.to_range()]))
        .collect()
}

fn xml(source: &str) -> Vec<(TokenKind, &str)> {
    lexed(source, MarkupOptions::default())
}

#[test]
fn test_element_with_attribute() {
    assert_eq!(
        xml(r#"<a href="x">t</a>"#),
        vec![
            (TokenKind::StartTagStart, "<"),
            (TokenKind::TagName, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::AttrName, "href"),
            (TokenKind::AttrEq, "="),
            (TokenKind::AttrValueStart, "\""),
            (TokenKind::AttrValue, "x"),
            (TokenKind::AttrValueEnd, "\""),
            (TokenKind::TagEnd, ">"),
            (TokenKind::MarkupText, "t"),
            (TokenKind::EndTagStart, "</"),
            (TokenKind::TagName, "a"),
            (TokenKind::TagEnd, ">"),
        ]
    );
}

#[test]
fn test_empty_element() {
    assert_eq!(
        xml("<br/>"),
        vec![
            (TokenKind::StartTagStart, "<"),
            (TokenKind::TagName, "br"),
            (TokenKind::EmptyElementEnd, "/>"),
        ]
    );
}

#[test]
fn test_empty_attribute_value() {
    assert_eq!(
        xml("<a b=''>"),
        vec![
            (TokenKind::StartTagStart, "<"),
            (TokenKind::TagName, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::AttrName, "b"),
            (TokenKind::AttrEq, "="),
            (TokenKind::AttrValueStart, "'"),
            (TokenKind::AttrValueEnd, "'"),
            (TokenKind::TagEnd, ">"),
        ]
    );
}

#[test]
fn test_comment_and_cdata() {
    assert_eq!(
        xml("<!-- <a> --><![CDATA[<b>]]>"),
        vec![
            (TokenKind::MarkupCommentStart, "<!--"),
            (TokenKind::MarkupCommentData, " <a> "),
            (TokenKind::MarkupCommentEnd, "-->"),
            (TokenKind::CdataStart, "<![CDATA["),
            (TokenKind::CdataData, "<b>"),
            (TokenKind::CdataEnd, "]]>"),
        ]
    );
}

#[test]
fn test_declaration_and_entities() {
    assert_eq!(
        xml("<?xml version=\"1.0\"?>&amp;& x"),
        vec![
            (TokenKind::MarkupDeclaration, "<?xml version=\"1.0\"?>"),
            (TokenKind::EntityRef, "&amp;"),
            (TokenKind::MarkupText, "&"),
            (TokenKind::Whitespace, " "),
            (TokenKind::MarkupText, "x"),
        ]
    );
}

#[test]
fn test_lone_less_than_is_text() {
    assert_eq!(
        xml("1 < 2"),
        vec![
            (TokenKind::MarkupText, "1"),
            (TokenKind::Whitespace, " "),
            (TokenKind::MarkupText, "<"),
            (TokenKind::Whitespace, " "),
            (TokenKind::MarkupText, "2"),
        ]
    );
}

#[test]
fn test_unclosed_tag_ends_at_next_tag() {
    let kinds: Vec<_> = xml("<a <b>").into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::StartTagStart,
            TokenKind::TagName,
            TokenKind::Whitespace,
            TokenKind::StartTagStart,
            TokenKind::TagName,
            TokenKind::TagEnd,
        ]
    );
}

#[test]
fn test_scriptlets_only_when_enabled() {
    let jsp = MarkupOptions { scriptlets: true };
    assert_eq!(
        lexed("<%= a(b) %>", jsp),
        vec![
            (TokenKind::ScriptExpressionStart, "<%="),
            (TokenKind::ScriptCode, " a(b) "),
            (TokenKind::ScriptletEnd, "%>"),
        ]
    );
    assert_eq!(xml("<%")[0], (TokenKind::MarkupText, "<"));
}

#[test]
fn test_unterminated_attribute_value_runs_to_end() {
    assert_eq!(
        xml("<a b=\"x>"),
        vec![
            (TokenKind::StartTagStart, "<"),
            (TokenKind::TagName, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::AttrName, "b"),
            (TokenKind::AttrEq, "="),
            (TokenKind::AttrValueStart, "\""),
            (TokenKind::AttrValue, "x>"),
        ]
    );
}

#[test]
fn test_bad_characters_in_tag() {
    assert_eq!(xml("<a /x>")[3], (TokenKind::BadCharacter, "/"));
    assert_eq!(xml("<a #>")[3], (TokenKind::BadCharacter, "#"));
}
