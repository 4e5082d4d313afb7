//! Style identifiers for syntax highlighting
//!
//! This module defines the token categories the engine assigns to text.
//! The engine never decides how a category looks; hosts map each
//! identifier to a color and weight (see `crate::theme`).

use serde::Deserialize;

/// Token categories exposed to the host for theme mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum StyleId {
    /// Language keywords (if, for, return, ...)
    Keyword,
    /// Capitalized identifiers that usually name types or classes
    TypeOrClassName,
    /// Comments running to end of line (// or #)
    LineComment,
    /// Comments that may span lines (/* */)
    BlockComment,
    /// Quoted string literals
    StringLiteral,
    /// Identifiers directly followed by an opening parenthesis
    CallTarget,
    /// Numeric literals
    NumericLiteral,
    /// Preprocessor-style directives (#include)
    Directive,
    /// Unstyled text
    PlainText,
}

impl StyleId {
    /// Every style identifier, in declaration order
    pub const ALL: [StyleId; 9] = [
        StyleId::Keyword,
        StyleId::TypeOrClassName,
        StyleId::LineComment,
        StyleId::BlockComment,
        StyleId::StringLiteral,
        StyleId::CallTarget,
        StyleId::NumericLiteral,
        StyleId::Directive,
        StyleId::PlainText,
    ];

    /// Get a human-readable name for this style
    pub fn name(&self) -> &'static str {
        match self {
            StyleId::Keyword => "Keyword",
            StyleId::TypeOrClassName => "TypeOrClassName",
            StyleId::LineComment => "LineComment",
            StyleId::BlockComment => "BlockComment",
            StyleId::StringLiteral => "StringLiteral",
            StyleId::CallTarget => "CallTarget",
            StyleId::NumericLiteral => "NumericLiteral",
            StyleId::Directive => "Directive",
            StyleId::PlainText => "PlainText",
        }
    }

    /// Parse a style identifier from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    /// Whether this style marks commented-out text
    pub fn is_comment(&self) -> bool {
        matches!(self, StyleId::LineComment | StyleId::BlockComment)
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for style in StyleId::ALL {
            assert_eq!(StyleId::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(StyleId::from_name("Comment"), None);
        assert_eq!(StyleId::from_name(""), None);
    }

    #[test]
    fn test_comment_styles() {
        assert!(StyleId::LineComment.is_comment());
        assert!(StyleId::BlockComment.is_comment());
        assert!(!StyleId::StringLiteral.is_comment());
    }
}
