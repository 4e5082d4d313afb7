//! Generic fallback profile

use super::number_rule;
use crate::error::Result;
use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::StyleId;

/// Id of the fallback profile
pub const GENERIC_ID: &str = "generic";

/// Create the fallback profile: numbers and quoted strings, no keywords
pub fn generic_profile() -> Result<LanguageProfile> {
    let mut profile = LanguageProfile::new(GENERIC_ID);

    profile.add_rule(number_rule()?);
    profile.add_rule(PatternRule::new("string", r#"".*"|'.*'"#, StyleId::StringLiteral)?);

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::driver::highlight_line;
    use crate::syntax::rules::LineState;

    fn tokens(text: &str) -> Vec<(&str, StyleId)> {
        let profile = generic_profile().unwrap();
        let result = highlight_line(text, LineState::Outside, &profile);
        assert_eq!(result.exit, LineState::Outside);
        result
            .styles
            .iter()
            .map(|span| (&text[span.range()], span.style))
            .collect()
    }

    #[test]
    fn test_string_and_number() {
        assert_eq!(
            tokens(r#""hello" 42"#),
            [
                (r#""hello""#, StyleId::StringLiteral),
                ("42", StyleId::NumericLiteral),
            ]
        );
    }

    #[test]
    fn test_no_keywords_or_comments() {
        assert!(tokens("if while return /* x */ // y").is_empty());
    }

    #[test]
    fn test_strings_repaint_numbers() {
        assert_eq!(tokens("'2'"), [("'2'", StyleId::StringLiteral)]);
    }
}
