//! Language profiles for syntax highlighting
//!
//! A `LanguageProfile` is pure data: an ordered list of single-line rules
//! plus an optional span rule. Profiles are built once, validated, wrapped
//! in an `Arc` by the registry and never mutated afterwards.

use super::rules::{PatternRule, SpanRule};

/// A complete rule set for one language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Profile id (e.g., "cpp", "py")
    pub id: String,
    /// File extensions resolved to this profile (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Single-line rules, in application order (later rules win overlaps)
    pub rules: Vec<PatternRule>,
    /// Multi-line span rule, if the language has one
    pub span: Option<SpanRule>,
}

impl LanguageProfile {
    /// Create a new empty profile
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
            span: None,
        }
    }

    /// Add file extensions
    pub fn add_extensions(&mut self, exts: &[&str]) {
        self.extensions
            .extend(exts.iter().map(|ext| ext.to_ascii_lowercase()));
    }

    /// Append a single-line rule
    ///
    /// Order is significant: it is the order rules are painted in.
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Set the multi-line span rule
    pub fn set_span(&mut self, rule: SpanRule) {
        self.span = Some(rule);
    }

    /// Check whether this profile can carry state across lines
    pub fn has_span(&self) -> bool {
        self.span.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::StyleId;

    #[test]
    fn test_rules_keep_insertion_order() {
        let mut profile = LanguageProfile::new("test");
        profile.add_rule(PatternRule::new("first", r"a", StyleId::Keyword).unwrap());
        profile.add_rule(PatternRule::new("second", r"b", StyleId::NumericLiteral).unwrap());
        profile.add_rule(PatternRule::new("third", r"c", StyleId::Directive).unwrap());

        let names: Vec<_> = profile.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_extensions_lowercased() {
        let mut profile = LanguageProfile::new("test");
        profile.add_extensions(&["C", "hpp"]);
        assert_eq!(profile.extensions, ["c", "hpp"]);
        assert!(!profile.has_span());
    }
}
