//! File types: the key under which bracket tables are resolved.

use std::borrow::Cow;
use std::fmt;

use brace_ir::Language;

/// A named kind of file, optionally backed by a built-in [`Language`].
///
/// Host applications can define their own file types with
/// [`FileType::custom`]; a custom type without a language resolves to an
/// explicitly registered table or to the default table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileType {
    name: Cow<'static, str>,
    language: Option<Language>,
}

impl FileType {
    pub const JAVA: FileType = FileType::builtin("Java", Language::Java);
    pub const JSON: FileType = FileType::builtin("JSON", Language::Json);
    pub const XML: FileType = FileType::builtin("XML", Language::Xml);
    pub const HTML: FileType = FileType::builtin("HTML", Language::Html);
    pub const XHTML: FileType = FileType::builtin("XHTML", Language::Xhtml);
    pub const JSP: FileType = FileType::builtin("JSP", Language::Jsp);
    pub const PLAIN_TEXT: FileType = FileType::builtin("PLAIN_TEXT", Language::PlainText);

    const fn builtin(name: &'static str, language: Language) -> Self {
        FileType {
            name: Cow::Borrowed(name),
            language: Some(language),
        }
    }

    /// A host-defined file type.
    pub fn custom(name: impl Into<Cow<'static, str>>, language: Option<Language>) -> Self {
        FileType {
            name: name.into(),
            language,
        }
    }

    /// The built-in file type of `language`.
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::Java => Self::JAVA,
            Language::Json => Self::JSON,
            Language::Xml => Self::XML,
            Language::Html => Self::HTML,
            Language::Xhtml => Self::XHTML,
            Language::Jsp => Self::JSP,
            Language::PlainText => Self::PLAIN_TEXT,
        }
    }

    /// Built-in file type for a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Language::from_extension(ext).map(Self::for_language)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
