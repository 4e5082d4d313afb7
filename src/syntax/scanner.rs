//! Single-line rule scanner
//!
//! Applies a profile's single-line rules to one line. Span delimiters are
//! ignored here; they belong to the driver.

use super::language::LanguageProfile;
use super::style::{LineStyleResult, StyleMask};

/// Scan a whole line with the profile's single-line rules
pub fn scan(text: &str, profile: &LanguageProfile) -> LineStyleResult {
    let mut mask = StyleMask::new(text.len());
    scan_into(text, 0, profile, &mut mask);
    mask.into_result()
}

/// Paint the matches of every rule found at or after `start` into `mask`
///
/// Rules are applied in order against the raw text, so a later rule
/// overwrites an earlier one wherever both match.
pub fn scan_into(text: &str, start: usize, profile: &LanguageProfile, mask: &mut StyleMask) {
    for rule in &profile.rules {
        for range in rule.find_all(text, start) {
            mask.paint(range, rule.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::PatternRule;
    use crate::syntax::style::StyledSpan;
    use crate::syntax::tokens::StyleId;

    fn create_test_profile() -> LanguageProfile {
        let mut profile = LanguageProfile::new("test");
        profile.add_rule(PatternRule::new("keyword", r"\b(?:for|int)\b", StyleId::Keyword).unwrap());
        profile.add_rule(
            PatternRule::new("class", r"\b[A-Z][A-Za-z0-9_]*\b", StyleId::TypeOrClassName).unwrap(),
        );
        profile.add_rule(PatternRule::new("line_comment", r"//.*", StyleId::LineComment).unwrap());
        profile.add_rule(
            PatternRule::with_group("call", r"\b([A-Za-z0-9_]+)\(", StyleId::CallTarget, 1).unwrap(),
        );
        profile
    }

    #[test]
    fn test_keyword_word_boundaries() {
        let profile = create_test_profile();
        let result = scan("xfor for forx", &profile);
        assert_eq!(result.spans(), &[StyledSpan::new(5, 3, StyleId::Keyword)]);
    }

    #[test]
    fn test_later_rule_overwrites() {
        let profile = create_test_profile();
        // Matches both the class rule and the call rule; call comes later
        let result = scan("Widget(1)", &profile);
        assert_eq!(result.spans(), &[StyledSpan::new(0, 6, StyleId::CallTarget)]);

        // Comment overwrites keyword and class matches inside it
        let result = scan("// for Foo", &profile);
        assert_eq!(result.spans(), &[StyledSpan::new(0, 10, StyleId::LineComment)]);
    }

    #[test]
    fn test_matching_ignores_earlier_styles() {
        let profile = create_test_profile();
        // The call rule still matches inside the comment and repaints it
        let result = scan("// run()", &profile);
        assert_eq!(
            result.spans(),
            &[
                StyledSpan::new(0, 3, StyleId::LineComment),
                StyledSpan::new(3, 3, StyleId::CallTarget),
                StyledSpan::new(6, 2, StyleId::LineComment),
            ]
        );
    }

    #[test]
    fn test_scan_into_suffix_only() {
        let profile = create_test_profile();
        let text = "int x; int y";
        let mut mask = StyleMask::new(text.len());
        scan_into(text, 5, &profile, &mut mask);
        assert_eq!(mask.into_result().spans(), &[StyledSpan::new(7, 3, StyleId::Keyword)]);
    }

    #[test]
    fn test_empty_line() {
        let profile = create_test_profile();
        assert!(scan("", &profile).is_empty());
    }
}
