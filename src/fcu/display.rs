//! Display line types

use smallvec::SmallVec;
use std::fmt;

/// Marker contained in the title and footer lines
pub const HEADER_MARKER: &str = "==========";

/// Marker contained in the separator line
pub const SEPARATOR_MARKER: &str = "----------";

/// Number of lines the formatter always produces
pub const PANEL_LINE_COUNT: usize = 9;

/// Ordered lines for one refresh
///
/// Inline capacity covers the panel plus a few status lines, so a normal
/// refresh does not allocate for the sequence itself.
pub type DisplayLines = SmallVec<[DisplayLine; 12]>;

/// Rendering emphasis of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    /// Regular data line
    #[default]
    Normal,
    /// Title, separator or footer
    Header,
}

/// One line of overlay text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    text: String,
    emphasis: Emphasis,
}

impl DisplayLine {
    /// Build a line, deriving its emphasis from the text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let emphasis = Self::emphasis_for(&text);
        Self { text, emphasis }
    }

    /// Emphasis implied by a line's content
    ///
    /// Only the header and separator markers count. The five-dash placeholders
    /// used for unavailable values are shorter than the marker.
    pub fn emphasis_for(text: &str) -> Emphasis {
        if text.contains(HEADER_MARKER) || text.contains(SEPARATOR_MARKER) {
            Emphasis::Header
        } else {
            Emphasis::Normal
        }
    }

    /// Line text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line emphasis
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
