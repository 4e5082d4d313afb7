//! Document representation - a collection of lines
//!
//! A minimal host-side document used by the command-line front end and
//! by tests. Every edit reports the `LineEdit` the highlighter needs.

use std::path::Path;

use crate::error::Result;
use crate::syntax::{LineEdit, TextSource};

/// A document made of lines without terminators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Lines of text (always at least one)
    lines: Vec<String>,
}

impl Document {
    /// Create a document with a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a document from text, splitting on '\n' and dropping '\r'
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// Create a document from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// Get all lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace `count` lines at `start` with the lines of `text`
    ///
    /// `text` is split on '\n'; an empty string removes the lines.
    pub fn replace_lines(&mut self, start: usize, count: usize, text: &str) -> LineEdit {
        let new_lines = if text.is_empty() {
            Vec::new()
        } else {
            split_lines(text)
        };
        self.splice_lines(start, count, new_lines)
    }

    /// Insert text at a byte position, splitting lines on '\n'
    pub fn insert_str(&mut self, line: usize, byte_pos: usize, text: &str) -> LineEdit {
        let line = line.min(self.lines.len() - 1);
        let current = &self.lines[line];
        let byte_pos = floor_char_boundary(current, byte_pos);
        let joined = format!("{}{}{}", &current[..byte_pos], text, &current[byte_pos..]);
        self.splice_lines(line, 1, split_lines(&joined))
    }

    /// Delete the text between two positions, joining lines as needed
    pub fn delete_range(
        &mut self,
        (start_line, start_byte): (usize, usize),
        (end_line, end_byte): (usize, usize),
    ) -> LineEdit {
        let last = self.lines.len() - 1;
        let start_line = start_line.min(last);
        let end_line = end_line.clamp(start_line, last);
        let head_line = &self.lines[start_line];
        let head = &head_line[..floor_char_boundary(head_line, start_byte)];
        let tail_line = &self.lines[end_line];
        let mut tail_start = floor_char_boundary(tail_line, end_byte);
        if start_line == end_line {
            tail_start = tail_start.max(head.len());
        }
        let joined = format!("{}{}", head, &tail_line[tail_start..]);
        self.splice_lines(start_line, end_line - start_line + 1, split_lines(&joined))
    }

    fn splice_lines(&mut self, start: usize, count: usize, new_lines: Vec<String>) -> LineEdit {
        let start = start.min(self.lines.len());
        let end = start.saturating_add(count).min(self.lines.len());
        let new_count = new_lines.len();
        self.lines.splice(start..end, new_lines);
        if self.lines.is_empty() {
            // Keep at least one line; it shows up as an inserted line
            self.lines.push(String::new());
            return LineEdit::new(start, end - start, 1);
        }
        LineEdit::new(start, end - start, new_count)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }
}

/// Split text into lines; empty text is one empty line
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Find the nearest valid UTF-8 char boundary at or before `pos`
fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}
