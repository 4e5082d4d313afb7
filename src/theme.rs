//! Theme mapping from style identifiers to text formats
//!
//! The engine only classifies text; this is where a host decides what
//! each class looks like.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::HighlightError;
use crate::syntax::StyleId;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse "#rrggbb" (the leading '#' is optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = HighlightError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s).ok_or(HighlightError::InvalidColor(s))
    }
}

/// Text format attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    /// Foreground color (None = terminal default)
    pub fg: Option<Rgb>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl TextFormat {
    /// Create a format with just a foreground color
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial format read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatOverride {
    pub fg: Option<Rgb>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// Formats for every style identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    formats: HashMap<StyleId, TextFormat>,
}

impl Default for Theme {
    fn default() -> Self {
        let comment = TextFormat::fg(Rgb::new(106, 153, 85)).with_italic();
        let formats = StyleId::ALL
            .into_iter()
            .map(|style| {
                let format = match style {
                    StyleId::Keyword => TextFormat::fg(Rgb::new(86, 156, 214)).with_bold(),
                    StyleId::TypeOrClassName => TextFormat::fg(Rgb::new(78, 201, 176)).with_bold(),
                    StyleId::LineComment | StyleId::BlockComment => comment,
                    StyleId::StringLiteral => TextFormat::fg(Rgb::new(206, 145, 120)),
                    StyleId::CallTarget => TextFormat::fg(Rgb::new(220, 220, 170)).with_bold(),
                    StyleId::NumericLiteral => TextFormat::fg(Rgb::new(181, 206, 168)),
                    StyleId::Directive => TextFormat::fg(Rgb::new(155, 155, 155)),
                    StyleId::PlainText => TextFormat::default(),
                };
                (style, format)
            })
            .collect();
        Self { formats }
    }
}

impl Theme {
    /// Get the format for a style
    pub fn format(&self, style: StyleId) -> TextFormat {
        self.formats.get(&style).copied().unwrap_or_default()
    }

    /// Apply config overrides on top of this theme
    pub fn apply(&mut self, overrides: &HashMap<StyleId, FormatOverride>) {
        for (style, over) in overrides {
            let format = self.formats.entry(*style).or_default();
            if let Some(fg) = over.fg {
                format.fg = Some(fg);
            }
            if let Some(bold) = over.bold {
                format.bold = bold;
            }
            if let Some(italic) = over.italic {
                format.italic = italic;
            }
        }
    }
}
