//! Built-in bracket tables.

use brace_ir::{Language, TokenKind};

use super::{BraceTable, BraceTableBuilder, GroupRules, MarkupCaps, TokenGroup};

/// HTML elements that never have an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr", "basefont", "frame", "isindex", "keygen", "command",
];

/// True if `name` is an HTML void element (ASCII case-insensitive).
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name))
}

/// Kinds before which Java auto-inserts a closing brace.
const JAVA_ALLOWED_BEFORE: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::DocCommentStart,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RBrace,
    TokenKind::Semicolon,
    TokenKind::Comma,
];

const SCRIPT_OPENERS: [TokenKind; 4] = [
    TokenKind::ScriptletStart,
    TokenKind::ScriptExpressionStart,
    TokenKind::ScriptDirectiveStart,
    TokenKind::ScriptDeclarationStart,
];

pub(crate) fn language_table(language: Language) -> Option<BraceTable> {
    let builder = match language {
        Language::Java => java(),
        Language::Json => json(),
        Language::Xml => xml(),
        Language::Html => html(),
        Language::Xhtml => xhtml(),
        Language::Jsp => jsp(),
        Language::PlainText => return None,
    };
    debug_assert!(builder.validate().is_ok(), "built-in table is invalid");
    Some(builder.finish())
}

/// Java code brackets plus the legacy markup, script and doc defaults.
pub(crate) fn default_table() -> BraceTable {
    let builder = scripts(markup(code_pairs(BraceTable::builder("default"))))
        .rules(TokenGroup::XmlTag, GroupRules::STRICT_TAGS)
        .markup(MarkupCaps::empty())
        .paired_braces_allowed_before(JAVA_ALLOWED_BEFORE);
    debug_assert!(builder.validate().is_ok(), "default table is invalid");
    builder.finish()
}

/// `()`, `{}`, `[]` and doc-comment inline tags.
fn code_pairs(builder: BraceTableBuilder) -> BraceTableBuilder {
    builder
        .pair(TokenKind::LParen, TokenKind::RParen, TokenGroup::Code, false)
        .pair(TokenKind::LBrace, TokenKind::RBrace, TokenGroup::Code, true)
        .pair(TokenKind::LBracket, TokenKind::RBracket, TokenGroup::Code, false)
        .pair(
            TokenKind::DocInlineTagStart,
            TokenKind::DocInlineTagEnd,
            TokenGroup::DocComment,
            false,
        )
}

/// Tags, attribute values, comments and CDATA sections.
fn markup(builder: BraceTableBuilder) -> BraceTableBuilder {
    builder
        .pair(TokenKind::StartTagStart, TokenKind::TagEnd, TokenGroup::XmlTag, true)
        .pair(
            TokenKind::StartTagStart,
            TokenKind::EmptyElementEnd,
            TokenGroup::XmlTag,
            true,
        )
        .member(TokenKind::EndTagStart, TokenGroup::XmlTag)
        .member(TokenKind::TagName, TokenGroup::XmlTag)
        .pair(
            TokenKind::AttrValueStart,
            TokenKind::AttrValueEnd,
            TokenGroup::XmlAttributeValue,
            false,
        )
        .pair(
            TokenKind::MarkupCommentStart,
            TokenKind::MarkupCommentEnd,
            TokenGroup::MarkupSection,
            false,
        )
        .pair(TokenKind::CdataStart, TokenKind::CdataEnd, TokenGroup::MarkupSection, false)
}

/// JSP scriptlet delimiters, all closed by `%>`.
fn scripts(builder: BraceTableBuilder) -> BraceTableBuilder {
    SCRIPT_OPENERS.iter().fold(builder, |builder, &open| {
        builder.pair(open, TokenKind::ScriptletEnd, TokenGroup::EmbeddedScript, false)
    })
}

fn java() -> BraceTableBuilder {
    code_pairs(BraceTable::builder("Java")).paired_braces_allowed_before(JAVA_ALLOWED_BEFORE)
}

fn json() -> BraceTableBuilder {
    BraceTable::builder("JSON")
        .pair(TokenKind::LBrace, TokenKind::RBrace, TokenGroup::Code, true)
        .pair(TokenKind::LBracket, TokenKind::RBracket, TokenGroup::Code, true)
}

fn xml() -> BraceTableBuilder {
    markup(BraceTable::builder("XML"))
        .rules(
            TokenGroup::XmlTag,
            GroupRules::STRICT_TAGS | GroupRules::CASE_SENSITIVE,
        )
        .markup(MarkupCaps::empty())
}

fn html() -> BraceTableBuilder {
    markup(BraceTable::builder("HTML"))
        .rules(TokenGroup::XmlTag, GroupRules::empty())
        .markup(MarkupCaps::VOID_ELEMENTS)
}

fn xhtml() -> BraceTableBuilder {
    markup(BraceTable::builder("XHTML"))
        .rules(
            TokenGroup::XmlTag,
            GroupRules::STRICT_TAGS | GroupRules::CASE_SENSITIVE,
        )
        .markup(MarkupCaps::empty())
}

fn jsp() -> BraceTableBuilder {
    scripts(markup(BraceTable::builder("JSP")))
        .rules(TokenGroup::XmlTag, GroupRules::empty())
        .markup(MarkupCaps::VOID_ELEMENTS)
}
