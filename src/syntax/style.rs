//! Styled spans within a single line
//!
//! Rules paint into a `StyleMask` (one slot per byte of the line) in
//! order, so a later paint simply overwrites an earlier one. The finished
//! mask collapses into a `LineStyleResult`: ordered, non-overlapping runs.

use std::ops::Range;

use super::tokens::StyleId;

/// A styled run of text within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Style applied to the run
    pub style: StyleId,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(start: usize, len: usize, style: StyleId) -> Self {
        Self { start, len, style }
    }

    /// Byte offset one past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Byte range covered by this span
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Styles computed for one line
///
/// Spans are sorted by start offset and never overlap. Bytes not covered
/// by any span are plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStyleResult {
    spans: Vec<StyledSpan>,
}

impl LineStyleResult {
    /// Result with no styled spans
    pub const EMPTY: LineStyleResult = LineStyleResult { spans: Vec::new() };

    /// Get the spans in order
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Iterate over the spans in order
    pub fn iter(&self) -> std::slice::Iter<'_, StyledSpan> {
        self.spans.iter()
    }

    /// Check if nothing on the line is styled
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Style at a byte position (`PlainText` if unstyled)
    pub fn style_at(&self, pos: usize) -> StyleId {
        let idx = self.spans.partition_point(|span| span.end() <= pos);
        match self.spans.get(idx) {
            Some(span) if span.contains(pos) => span.style,
            _ => StyleId::PlainText,
        }
    }
}

impl<'a> IntoIterator for &'a LineStyleResult {
    type Item = &'a StyledSpan;
    type IntoIter = std::slice::Iter<'a, StyledSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Per-byte paint buffer for one line
#[derive(Debug, Clone)]
pub struct StyleMask {
    slots: Vec<Option<StyleId>>,
}

impl StyleMask {
    /// Create an unpainted mask for a line of `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Length of the line in bytes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the line is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Paint a byte range, overwriting whatever was there
    pub fn paint(&mut self, range: Range<usize>, style: StyleId) {
        let end = range.end.min(self.slots.len());
        let start = range.start.min(end);
        for slot in &mut self.slots[start..end] {
            *slot = Some(style);
        }
    }

    /// Collapse the mask into ordered runs
    pub fn into_result(self) -> LineStyleResult {
        let mut spans: Vec<StyledSpan> = Vec::new();
        for (pos, slot) in self.slots.into_iter().enumerate() {
            let Some(style) = slot else { continue };
            match spans.last_mut() {
                Some(last) if last.style == style && last.end() == pos => last.len += 1,
                _ => spans.push(StyledSpan::new(pos, 1, style)),
            }
        }
        LineStyleResult { spans }
    }
}
