//! Placing panel lines on screen
//!
//! Lines are drawn top to bottom at a fixed pitch, starting a fixed inset
//! below the window's top edge. Header lines get their own colour. Lines that
//! would start below the bottom edge are clipped.

use crate::config::WindowGeometry;
use crate::fcu::{DisplayLine, Emphasis};

/// RGB colour with components in [0, 1], as the host's text API expects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color {
    /// Plain white, used for data lines
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Cyan used for header, separator and footer lines
    pub const HEADER: Self = Self {
        r: 0.0,
        g: 0.85,
        b: 1.0,
    };

    /// Components as an array
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Colour for an emphasis
pub fn color_for(emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Normal => Color::WHITE,
        Emphasis::Header => Color::HEADER,
    }
}

/// Host-side text drawing
pub trait LineRenderer {
    /// Draw one line with its baseline-left corner at `(x, y)`
    fn draw_line(&mut self, x: i32, y: i32, color: Color, text: &str);
}

/// Where each line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    x: i32,
    first_y: i32,
    pitch: i32,
    bottom: i32,
}

impl LineLayout {
    /// Derive the layout from window geometry
    pub fn from_geometry(geometry: &WindowGeometry) -> Self {
        Self {
            x: geometry.left.saturating_add(geometry.text_inset_x),
            first_y: geometry.top.saturating_sub(geometry.text_inset_y),
            pitch: geometry.line_pitch.max(1),
            bottom: geometry.bottom,
        }
    }

    /// Position of the line at `index`, or `None` if it falls below the window
    pub fn position(&self, index: usize) -> Option<(i32, i32)> {
        let index = i32::try_from(index).ok()?;
        let y = self.first_y.checked_sub(index.checked_mul(self.pitch)?)?;
        (y >= self.bottom).then_some((self.x, y))
    }
}

/// Draw `lines` in order; returns how many fit inside the window
pub fn render_lines<R: LineRenderer + ?Sized>(
    renderer: &mut R,
    layout: &LineLayout,
    lines: &[DisplayLine],
) -> usize {
    let mut drawn = 0;
    for (index, line) in lines.iter().enumerate() {
        let Some((x, y)) = layout.position(index) else {
            break;
        };
        renderer.draw_line(x, y, color_for(line.emphasis()), line.text());
        drawn += 1;
    }
    drawn
}

/// Renderer that keeps the drawn text, for terminals and tests
#[derive(Debug, Default, Clone)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    /// Empty renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines drawn since the last [`take`](Self::take)
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Return and clear the drawn lines
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineRenderer for TextRenderer {
    fn draw_line(&mut self, _x: i32, _y: i32, _color: Color, text: &str) {
        self.lines.push(text.to_string());
    }
}
