//! Highlighter lexers for brace matching.
//!
//! These lexers play the role of the editor's syntax highlighter: they turn
//! text into a flat `TokenList` that tiles the input, trivia included, so
//! that a cursor can walk it in both directions.
//!
//! - [`lex_code`]: Java-like code, with `/** ... */` doc comments lexed by a
//!   separate sub-lexer so inline tags (`{@link Foo}`) surface as tokens.
//! - [`lex_markup`]: XML / HTML / JSP markup, hand-written modal scanner.
//!
//! Lexing never fails. Bytes that fit no rule become `BadCharacter` tokens
//! and unterminated constructs run to the end of the text.

mod code;
mod markup;

pub use code::lex_code;
pub use markup::{lex_markup, MarkupOptions};

use brace_ir::{Language, TokenList, TokenStream};

/// Lex `source` with the highlighter for `language`.
pub fn lex(source: &str, language: Language) -> TokenList {
    match language {
        Language::Java | Language::Json | Language::PlainText => lex_code(source),
        Language::Xml | Language::Html | Language::Xhtml => {
            lex_markup(source, MarkupOptions::default())
        }
        Language::Jsp => lex_markup(source, MarkupOptions { scriptlets: true }),
    }
}

/// Lex `source` and pair the tokens with the text.
pub fn lex_stream(source: &str, language: Language) -> TokenStream {
    TokenStream::new(source, lex(source, language))
}
