use std::ops::Range;

use serde::{Deserialize, Serialize};

/// `(offset, length)` in UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub offset: usize,
    pub length: usize,
}

impl TextRange {
    pub fn new(offset: usize, length: usize) -> Self {
        TextRange { offset, length }
    }

    pub fn from_bounds(start: usize, end: usize) -> Self {
        TextRange::new(start, end.saturating_sub(start))
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Overlap of two ranges; `None` when they only touch or are disjoint.
    pub fn intersection(&self, other: TextRange) -> Option<TextRange> {
        let start = self.offset.max(other.offset);
        let end = self.end().min(other.end());
        (start < end).then(|| TextRange::from_bounds(start, end))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            size: 16.0,
            bold: false,
            italic: false,
            monospace: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Attributes {
    pub fn merge(&mut self, other: &Attributes) {
        if other.font.is_some() {
            self.font = other.font.clone();
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground.clone();
        }
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        if other.underline.is_some() {
            self.underline = other.underline;
        }
        if other.strikethrough.is_some() {
            self.strikethrough = other.strikethrough;
        }
        if other.link.is_some() {
            self.link = other.link.clone();
        }
    }

    pub fn with_baseline(mut self, baseline: &Attributes) -> Self {
        if self.font.is_none() {
            self.font = baseline.font.clone();
        }
        if self.foreground.is_none() {
            self.foreground = baseline.foreground.clone();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRun {
    pub range: TextRange,
    pub attributes: Attributes,
}

/// Plain characters of a post plus the style runs the upstream renderer
/// produced for them. Structural tags are still present in `text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    #[serde(default)]
    pub runs: Vec<StyleRun>,
}

impl RichText {
    pub fn new(text: impl Into<String>, runs: Vec<StyleRun>) -> Self {
        RichText {
            text: text.into(),
            runs,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        RichText::new(text, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledSegment {
    pub text: String,
    pub attributes: Attributes,
}

/// Fully styled text handed to the renderer: every byte belongs to exactly
/// one segment, and neighbouring segments never share attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyledText {
    pub segments: Vec<StyledSegment>,
}

impl StyledText {
    pub fn plain(text: &str, baseline: &Attributes) -> Self {
        let mut styled = StyledText::default();
        styled.push(text, Attributes::default().with_baseline(baseline));
        styled
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, text: &str, attributes: Attributes) {
        if text.is_empty() {
            return;
        }

        match self.segments.last_mut() {
            Some(last) if last.attributes == attributes => last.text.push_str(text),
            _ => self.segments.push(StyledSegment {
                text: text.to_string(),
                attributes,
            }),
        }
    }
}
