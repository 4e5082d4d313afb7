//! hilite - incremental line-oriented syntax highlighting
//!
//! The engine classifies the text of each line into style identifiers
//! using ordered regex rules, and carries one bit of state from line to
//! line so block comments stay correct across edits without rescanning
//! the whole document.
//!
//! ```
//! use hilite::syntax::{Highlighter, ProfileRegistry, StyleId};
//!
//! let registry = ProfileRegistry::new().unwrap();
//! let mut doc = vec!["int x; /* note".to_string(), "done */ x++;".to_string()];
//!
//! let mut hl = Highlighter::new(registry.resolve("cpp"));
//! hl.on_document_loaded(&doc);
//! assert_eq!(hl.styled_spans(1).style_at(0), StyleId::BlockComment);
//!
//! doc[0] = "int x;".to_string();
//! hl.on_lines_changed(&doc, 0, 1, 1);
//! assert_eq!(hl.styled_spans(1).style_at(0), StyleId::PlainText);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod syntax;
pub mod terminal;
pub mod theme;

pub use config::Config;
pub use document::Document;
pub use error::{HighlightError, Result};
pub use syntax::{Highlighter, ProfileRegistry, StyleId};
pub use theme::Theme;
