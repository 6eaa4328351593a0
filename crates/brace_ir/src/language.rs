//! Lexical language families.

use std::fmt;

/// The lexical family of a text.
///
/// Selects the highlighter used to tokenize a text and the built-in bracket
/// table used to classify its tokens. `Java` is the host language whose
/// brackets act as the default for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Json,
    Xml,
    Html,
    Xhtml,
    Jsp,
    PlainText,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 7] = [
        Language::Java,
        Language::Json,
        Language::Xml,
        Language::Html,
        Language::Xhtml,
        Language::Jsp,
        Language::PlainText,
    ];

    /// Guess the language from a file extension (without the leading dot).
    ///
    /// Matching is ASCII case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let lang = match ext.as_str() {
            "java" | "c" | "h" | "cpp" | "cc" | "hpp" | "cs" | "js" | "ts" | "rs" | "kt" | "go" => {
                Language::Java
            }
            "json" => Language::Json,
            "xml" | "xsd" | "xsl" | "svg" | "pom" => Language::Xml,
            "html" | "htm" => Language::Html,
            "xhtml" => Language::Xhtml,
            "jsp" | "jspx" | "tag" => Language::Jsp,
            "txt" | "text" => Language::PlainText,
            _ => return None,
        };
        Some(lang)
    }

    /// Display name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Html => "HTML",
            Language::Xhtml => "XHTML",
            Language::Jsp => "JSP",
            Language::PlainText => "Plain text",
        }
    }

    /// True for the tag-based languages lexed by the markup highlighter.
    pub const fn is_markup(self) -> bool {
        matches!(
            self,
            Language::Xml | Language::Html | Language::Xhtml | Language::Jsp
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
