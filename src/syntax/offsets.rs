//! Offset conversion for hosts that do not index text in UTF-8 bytes
//!
//! Styles are computed in UTF-8 byte offsets. A host that places its
//! caret in UTF-16 code units or in characters has to convert spans before
//! painting, or the highlighting drifts away from the caret on any line
//! containing non-ASCII text.

use super::style::{LineStyleResult, StyledSpan};

/// Code unit a host uses to index a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetEncoding {
    /// UTF-8 bytes (native)
    #[default]
    Utf8,
    /// UTF-16 code units
    Utf16,
    /// Unicode scalar values
    Chars,
}

impl OffsetEncoding {
    /// Convert a byte offset within `text` to this encoding
    ///
    /// Offsets past the end clamp to the line length; offsets inside a
    /// multi-byte sequence count the partial character as not yet reached.
    pub fn offset_of(&self, text: &str, byte: usize) -> usize {
        let byte = byte.min(text.len());
        match self {
            OffsetEncoding::Utf8 => byte,
            OffsetEncoding::Utf16 => text
                .char_indices()
                .take_while(|(idx, _)| *idx < byte)
                .filter(|(idx, ch)| idx + ch.len_utf8() <= byte)
                .map(|(_, ch)| ch.len_utf16())
                .sum(),
            OffsetEncoding::Chars => text
                .char_indices()
                .filter(|(idx, ch)| idx + ch.len_utf8() <= byte)
                .count(),
        }
    }

    /// Convert every span of a line result to this encoding
    pub fn convert(&self, text: &str, result: &LineStyleResult) -> Vec<StyledSpan> {
        result
            .iter()
            .map(|span| {
                let start = self.offset_of(text, span.start);
                let end = self.offset_of(text, span.end());
                StyledSpan::new(start, end - start, span.style)
            })
            .collect()
    }
}
