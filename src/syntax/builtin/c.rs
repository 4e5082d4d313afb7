//! C/C++ language profile

use super::{call_target_rule, keyword_rule, number_rule};
use crate::error::Result;
use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::{PatternRule, SpanRule};
use crate::syntax::tokens::StyleId;

const KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr", "continue",
    "default", "delete", "do", "double", "else", "enum", "explicit", "extern", "false", "float",
    "for", "friend", "if", "inline", "int", "long", "namespace", "new", "noexcept", "nullptr",
    "operator", "private", "protected", "public", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "template", "this", "throw", "true", "try", "typedef", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Create the C-family profile (C and C++)
pub fn cpp_profile() -> Result<LanguageProfile> {
    let mut profile = LanguageProfile::new("cpp");
    profile.add_extensions(&["cpp", "c", "h", "hpp", "cc", "cxx", "hh"]);

    profile.add_rule(keyword_rule(KEYWORDS)?);
    profile.add_rule(PatternRule::new(
        "class_name",
        r"\b[A-Z][A-Za-z0-9_]*\b",
        StyleId::TypeOrClassName,
    )?);
    profile.add_rule(PatternRule::new("line_comment", r"//.*", StyleId::LineComment)?);
    profile.add_rule(PatternRule::new("string", r#"".*""#, StyleId::StringLiteral)?);
    profile.add_rule(call_target_rule()?);
    profile.add_rule(number_rule()?);
    profile.add_rule(PatternRule::new("directive", r"#[A-Za-z0-9_]+", StyleId::Directive)?);

    profile.set_span(SpanRule::new(
        "block_comment",
        r"/\*",
        r"\*/",
        StyleId::BlockComment,
    )?);

    Ok(profile)
}
