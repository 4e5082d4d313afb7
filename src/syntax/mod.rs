//! Syntax highlighting module
//!
//! This module provides the incremental highlighting engine:
//! - Language profiles (ordered single-line rules plus a span rule)
//! - The single-line scanner
//! - The span-carry driver and per-document propagation

mod builtin;
mod driver;
mod engine;
mod language;
mod offsets;
mod registry;
mod rules;
mod scanner;
mod style;
mod tokens;

pub use builtin::GENERIC_ID;
pub use driver::{highlight_line, HighlightResult};
pub use engine::{Highlighter, LineEdit, TextSource};
pub use language::LanguageProfile;
pub use offsets::OffsetEncoding;
pub use registry::ProfileRegistry;
pub use rules::{LineState, PatternRule, SpanRule};
pub use scanner::scan;
pub use style::{LineStyleResult, StyleMask, StyledSpan};
pub use tokens::StyleId;
