//! Property-based tests for the highlighter lexers.
//!
//! Every lexer must tile its input: tokens are non-empty, contiguous, and
//! together cover the whole text, whatever bytes it contains.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use brace_ir::{Language, TokenList};
use brace_lexer::lex;
use proptest::prelude::*;

fn assert_tiles(source: &str, tokens: &TokenList) {
    let mut expected_start = 0u32;
    for token in tokens {
        assert_eq!(token.span.start, expected_start, "gap before {:?}", token);
        assert!(!token.span.is_empty(), "empty token {:?}", token);
        assert!(
            source.is_char_boundary(token.span.end as usize),
            "token {:?} splits a character",
            token
        );
        expected_start = token.span.end;
    }
    assert_eq!(expected_start as usize, source.len());
}

/// Text biased toward the characters the lexers care about.
fn markup_ish() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"([<>/!?%="'&;\-\[\]a-z #{}@*]|CDATA|é){0,60}"#)
        .expect("valid regex")
}

proptest! {
    #[test]
    fn every_lexer_tiles_arbitrary_text(source in any::<String>()) {
        for language in Language::ALL {
            assert_tiles(&source, &lex(&source, language));
        }
    }

    #[test]
    fn every_lexer_tiles_markup_like_text(source in markup_ish()) {
        for language in Language::ALL {
            assert_tiles(&source, &lex(&source, language));
        }
    }

    #[test]
    fn lexing_is_deterministic(source in markup_ish()) {
        for language in Language::ALL {
            prop_assert_eq!(lex(&source, language), lex(&source, language));
        }
    }
}

#[test]
fn lexers_accept_empty_input() {
    for language in Language::ALL {
        assert!(lex("", language).is_empty());
    }
}
