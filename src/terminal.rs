//! Terminal output of highlighted lines using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::syntax::{LineState, LineStyleResult};
use crate::theme::{TextFormat, Theme};

/// Get terminal width in columns, if stdout is a terminal
pub fn terminal_width() -> Option<usize> {
    terminal::size().ok().map(|(cols, _)| usize::from(cols))
}

/// Byte length of the longest prefix of `text` that fits in `cols` columns
pub fn clip_to_width(text: &str, cols: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > cols {
            return idx;
        }
    }
    text.len()
}

/// Writes highlighted lines to an output stream
pub struct Printer<W: Write> {
    out: W,
    theme: Theme,
    /// Whether to emit colors and attributes
    color: bool,
    /// Maximum display columns per line
    width: Option<usize>,
}

impl<W: Write> Printer<W> {
    /// Create a printer with colors enabled and no width limit
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            color: true,
            width: None,
        }
    }

    /// Builder: enable or disable colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder: clip lines to a number of display columns
    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Write one line with its styles
    pub fn write_line(&mut self, text: &str, styles: &LineStyleResult) -> Result<()> {
        let end = self.width.map_or(text.len(), |cols| clip_to_width(text, cols));
        let mut pos = 0;

        for span in styles {
            if span.start >= end {
                break;
            }
            if span.start > pos {
                queue!(self.out, Print(&text[pos..span.start]))?;
            }
            let span_end = span.end().min(end);
            let format = self.theme.format(span.style);
            self.set_format(format)?;
            queue!(self.out, Print(&text[span.start..span_end]))?;
            self.reset_format(format)?;
            pos = span_end;
        }

        if pos < end {
            queue!(self.out, Print(&text[pos..end]))?;
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    /// Write the spans of one line as text, one per row
    pub fn write_spans(
        &mut self,
        line: usize,
        text: &str,
        styles: &LineStyleResult,
        exit: LineState,
    ) -> Result<()> {
        for span in styles {
            writeln!(
                self.out,
                "{}:{}+{} {} {:?}",
                line + 1,
                span.start,
                span.len,
                span.style,
                &text[span.range()]
            )?;
        }
        if exit.is_inside_span() {
            writeln!(self.out, "{}: InsideSpan", line + 1)?;
        }
        Ok(())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn set_format(&mut self, format: TextFormat) -> Result<()> {
        if !self.color || format.is_default() {
            return Ok(());
        }
        if let Some(fg) = format.fg {
            queue!(
                self.out,
                SetForegroundColor(Color::Rgb {
                    r: fg.r,
                    g: fg.g,
                    b: fg.b
                })
            )?;
        }
        if format.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if format.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        Ok(())
    }

    fn reset_format(&mut self, format: TextFormat) -> Result<()> {
        if !self.color || format.is_default() {
            return Ok(());
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }
}
