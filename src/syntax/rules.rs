//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and classify
//! source text, plus the single bit of state carried between lines.

use std::ops::Range;

use regex::Regex;

use super::tokens::StyleId;
use crate::error::{HighlightError, Result};

/// Compile a pattern, naming the rule it belongs to on failure
fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
        rule: rule.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Step past the character starting at `pos`
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |ch| pos + ch.len_utf8())
}

/// A single-line pattern rule
///
/// Matches a regex anywhere in a line and assigns a style to the match.
/// Rules never see past the end of the line.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Style assigned to matches
    pub style: StyleId,
    /// Capture group that receives the style (0 = whole match)
    pub group: usize,
}

impl PatternRule {
    /// Create a rule styling the whole match
    pub fn new(name: &str, pattern: &str, style: StyleId) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: compile(name, pattern)?,
            style,
            group: 0,
        })
    }

    /// Create a rule styling only one capture group of each match
    ///
    /// `regex` has no look-around, so context such as "followed by `(`"
    /// is matched and then left unstyled.
    pub fn with_group(name: &str, pattern: &str, style: StyleId, group: usize) -> Result<Self> {
        let mut rule = Self::new(name, pattern, style)?;
        if group >= rule.pattern.captures_len() {
            return Err(HighlightError::InvalidPattern {
                rule: name.to_string(),
                pattern: pattern.to_string(),
                source: regex::Error::Syntax(format!("no capture group {}", group)),
            });
        }
        rule.group = group;
        Ok(rule)
    }

    /// Find every non-overlapping match at or after `start`
    ///
    /// The whole line stays visible to the regex so that anchors and word
    /// boundaries at `start` see the real preceding text.
    pub fn find_all(&self, text: &str, start: usize) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut pos = start;
        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            // Group 0 always participates in a match
            let whole = caps.get(0).map_or(pos..pos, |m| m.range());
            if let Some(m) = caps.get(self.group) {
                if !m.is_empty() {
                    found.push(m.range());
                }
            }
            pos = if whole.is_empty() {
                if whole.end >= text.len() {
                    break;
                }
                next_char_boundary(text, whole.end)
            } else {
                whole.end
            };
        }
        found
    }
}

/// A multi-line span rule (block comments)
///
/// The open and close delimiters are searched independently of the
/// single-line rules; everything between them is styled as one span.
#[derive(Debug, Clone)]
pub struct SpanRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that opens the span
    pub open: Regex,
    /// Pattern that closes the span
    pub close: Regex,
    /// Style for the whole span, delimiters included
    pub style: StyleId,
}

impl SpanRule {
    /// Create a new span rule
    ///
    /// Delimiters that can match the empty string are rejected, since the
    /// open/close search would never advance.
    pub fn new(name: &str, open: &str, close: &str, style: StyleId) -> Result<Self> {
        let open = compile(name, open)?;
        let close = compile(name, close)?;
        if open.is_match("") || close.is_match("") {
            return Err(HighlightError::EmptyDelimiter {
                rule: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            open,
            close,
            style,
        })
    }

    /// Find the next open delimiter at or after `start`
    pub fn find_open(&self, text: &str, start: usize) -> Option<Range<usize>> {
        if start >= text.len() {
            return None;
        }
        self.open.find_at(text, start).map(|m| m.range())
    }

    /// Find the end of the next close delimiter at or after `start`
    pub fn find_close(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }
        self.close.find_at(text, start).map(|m| m.end())
    }
}

/// Line state for tracking multi-line spans
///
/// Stored per line as the state at the end of that line; the next line
/// starts from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Not inside a span
    #[default]
    Outside,
    /// Inside an unterminated span
    InsideSpan,
}

impl LineState {
    /// Check if we're inside a span
    pub fn is_inside_span(&self) -> bool {
        matches!(self, LineState::InsideSpan)
    }
}
