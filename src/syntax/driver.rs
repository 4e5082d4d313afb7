//! Span-carry driver
//!
//! Computes the styles of one line from its text, the state it enters
//! with and the active profile, and reports the state it exits with.
//! This is a pure function; the per-document bookkeeping lives in
//! `engine`.

use super::language::LanguageProfile;
use super::rules::{LineState, SpanRule};
use super::scanner;
use super::style::{LineStyleResult, StyleMask};

/// Result of highlighting a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    /// Styled spans in this line
    pub styles: LineStyleResult,
    /// State at end of line (the next line enters with it)
    pub exit: LineState,
}

/// Highlight a single line
///
/// Inside a span, the line is searched for the close delimiter from
/// column 0; whatever follows the close is handled like a fresh line
/// outside any span. Outside a span, the single-line rules run first and
/// span delimiters are painted over them.
pub fn highlight_line(text: &str, entering: LineState, profile: &LanguageProfile) -> HighlightResult {
    let mut mask = StyleMask::new(text.len());

    let Some(span) = profile.span.as_ref() else {
        scanner::scan_into(text, 0, profile, &mut mask);
        return HighlightResult {
            styles: mask.into_result(),
            exit: LineState::Outside,
        };
    };

    let mut pos = 0;
    if entering.is_inside_span() {
        match span.find_close(text, 0) {
            Some(end) => {
                mask.paint(0..end, span.style);
                pos = end;
            }
            None => {
                mask.paint(0..text.len(), span.style);
                return HighlightResult {
                    styles: mask.into_result(),
                    exit: LineState::InsideSpan,
                };
            }
        }
    }

    scanner::scan_into(text, pos, profile, &mut mask);
    let exit = paint_spans(text, pos, span, &mut mask);

    HighlightResult {
        styles: mask.into_result(),
        exit,
    }
}

/// Paint every span opened at or after `pos`, returning the exit state
fn paint_spans(text: &str, mut pos: usize, span: &SpanRule, mask: &mut StyleMask) -> LineState {
    while let Some(open) = span.find_open(text, pos) {
        match span.find_close(text, open.end) {
            Some(close_end) => {
                mask.paint(open.start..close_end, span.style);
                pos = close_end;
            }
            None => {
                mask.paint(open.start..text.len(), span.style);
                return LineState::InsideSpan;
            }
        }
    }
    LineState::Outside
}
