//! JavaScript/TypeScript language profile

use super::{call_target_rule, keyword_rule, number_rule};
use crate::error::Result;
use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::{PatternRule, SpanRule};
use crate::syntax::tokens::StyleId;

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "delete", "do", "else",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof",
    "let", "new", "null", "return", "super", "switch", "this", "throw", "true", "try", "typeof",
    "undefined", "var", "void", "while", "with", "yield",
];

/// Create JavaScript profile (also used for TypeScript)
pub fn javascript_profile() -> Result<LanguageProfile> {
    let mut profile = LanguageProfile::new("js");
    profile.add_extensions(&["js", "ts", "mjs", "cjs", "jsx", "tsx"]);

    profile.add_rule(keyword_rule(KEYWORDS)?);
    profile.add_rule(PatternRule::new("line_comment", r"//.*", StyleId::LineComment)?);
    profile.add_rule(PatternRule::new(
        "string",
        r#"".*"|'.*'|`.*`"#,
        StyleId::StringLiteral,
    )?);
    profile.add_rule(call_target_rule()?);
    profile.add_rule(number_rule()?);

    profile.set_span(SpanRule::new(
        "block_comment",
        r"/\*",
        r"\*/",
        StyleId::BlockComment,
    )?);

    Ok(profile)
}
