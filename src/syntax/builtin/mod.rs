//! Built-in language profiles
//!
//! Rule order inside each profile is the painting order: when two rules
//! match the same text, the one added later wins.

mod c;
mod generic;
mod javascript;
mod python;

use crate::error::Result;
use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::StyleId;

pub use generic::GENERIC_ID;

/// Build every built-in profile except the fallback
///
/// Fails if any pattern does not compile; nothing is registered then.
pub fn all_profiles() -> Result<Vec<LanguageProfile>> {
    Ok(vec![
        c::cpp_profile()?,
        python::python_profile()?,
        javascript::javascript_profile()?,
    ])
}

/// Build the generic fallback profile
pub fn fallback_profile() -> Result<LanguageProfile> {
    generic::generic_profile()
}

/// Join keywords into one word-bounded alternation
fn word_list(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

/// Keyword rule from a word list
fn keyword_rule(words: &[&str]) -> Result<PatternRule> {
    PatternRule::new("keyword", &word_list(words), StyleId::Keyword)
}

/// Identifier immediately followed by `(`
fn call_target_rule() -> Result<PatternRule> {
    PatternRule::with_group("call_target", r"\b([A-Za-z0-9_]+)\(", StyleId::CallTarget, 1)
}

/// Integer or simple decimal literal
fn number_rule() -> Result<PatternRule> {
    PatternRule::new("number", r"\b[0-9]+\.?[0-9]*\b", StyleId::NumericLiteral)
}
