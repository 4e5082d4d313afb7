//! Python language profile

use super::{call_target_rule, keyword_rule, number_rule};
use crate::error::Result;
use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::StyleId;

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not", "or",
    "pass", "print", "raise", "return", "try", "while", "with", "yield", "True", "False", "None",
];

/// Create Python profile
///
/// Python has no block comments, so the profile carries no span rule and
/// every line exits `Outside`.
pub fn python_profile() -> Result<LanguageProfile> {
    let mut profile = LanguageProfile::new("py");
    profile.add_extensions(&["py", "pyw", "pyi"]);

    profile.add_rule(keyword_rule(KEYWORDS)?);
    profile.add_rule(PatternRule::new("comment", r"#.*", StyleId::LineComment)?);
    profile.add_rule(PatternRule::new("string", r#"".*"|'.*'"#, StyleId::StringLiteral)?);
    profile.add_rule(call_target_rule()?);
    profile.add_rule(number_rule()?);

    Ok(profile)
}
