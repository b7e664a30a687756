//! Horizontal rule with an optional justified title.
//!
//! Used on its own as a separator, and by [`Panel`](super::Panel) to draw its
//! top edge.

use super::border::{BorderPart, BoxBorder};
use boxframe_core::{
    line_width, truncate_with_ellipsis, Measurement, RenderOptions, Renderable, Segment, Style,
};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Horizontal placement of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

/// A horizontal line drawn with a border's top glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    title: Option<String>,
    title_style: Option<Style>,
    justify: Justify,
    border: BoxBorder,
    style: Style,
    use_safe_border: bool,
    title_padding: usize,
    title_spacing: usize,
}

impl Default for Rule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule {
    /// Create an untitled rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            title_style: None,
            justify: Justify::default(),
            border: BoxBorder::Square,
            style: Style::plain(),
            use_safe_border: true,
            title_padding: 2,
            title_spacing: 1,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the title.
    #[must_use]
    pub fn with_optional_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Style for the title text. Defaults to the line style.
    #[must_use]
    pub fn with_title_style(mut self, style: Option<Style>) -> Self {
        self.title_style = style;
        self
    }

    /// Set the title justification.
    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set the glyph set.
    #[must_use]
    pub fn with_border(mut self, border: BoxBorder) -> Self {
        self.border = border;
        self
    }

    /// Set the line style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Degrade to ASCII glyphs on terminals without Unicode support.
    #[must_use]
    pub fn with_safe_border(mut self, use_safe_border: bool) -> Self {
        self.use_safe_border = use_safe_border;
        self
    }

    /// Number of line glyphs between the edge and a left/right title.
    #[must_use]
    pub fn with_title_padding(mut self, cells: usize) -> Self {
        self.title_padding = cells;
        self
    }

    /// Number of blank cells on each side of the title.
    #[must_use]
    pub fn with_title_spacing(mut self, cells: usize) -> Self {
        self.title_spacing = cells;
        self
    }

    fn plain_line(&self, border: BoxBorder, width: usize) -> Vec<Segment> {
        vec![
            Segment::new(border.repeat(BorderPart::Top, width), self.style),
            Segment::line_break(),
        ]
    }

    fn title_segments(&self, title: &str, width: usize) -> Vec<Segment> {
        let title = title.replace('\n', " ");
        let title = title.trim();
        let style = self.title_style.unwrap_or(self.style);
        let segments = vec![Segment::new(title, style)];
        if title.width() > width {
            truncate_with_ellipsis(&segments, width)
        } else {
            segments
        }
    }

    /// Left and right line runs around a title `title_width` cells wide.
    fn line_segments(
        &self,
        border: BoxBorder,
        width: usize,
        title_width: usize,
    ) -> (Segment, Segment) {
        let spacing = " ".repeat(self.title_spacing);
        let free = width.saturating_sub(title_width + 2 * self.title_spacing);
        let left_len = match self.justify {
            Justify::Left => self.title_padding,
            Justify::Center => free / 2,
            Justify::Right => free.saturating_sub(self.title_padding),
        }
        .min(free);
        let right_len = free - left_len;

        let left = format!("{}{spacing}", border.repeat(BorderPart::Top, left_len));
        let right = format!("{spacing}{}", border.repeat(BorderPart::Top, right_len));
        (
            Segment::new(left, self.style),
            Segment::new(right, self.style),
        )
    }
}

impl Renderable for Rule {
    fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
        Measurement::exact(max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let border = self.border.resolve(&options.capabilities, self.use_safe_border);
        let extra = 2 * self.title_padding + 2 * self.title_spacing;

        let Some(title) = self.title.as_deref() else {
            return self.plain_line(border, max_width);
        };
        if max_width <= extra {
            return self.plain_line(border, max_width);
        }

        let title = self.title_segments(title, max_width - extra);
        if title.is_empty() {
            return self.plain_line(border, max_width);
        }

        let (left, right) = self.line_segments(border, max_width, line_width(&title));
        let mut segments = Vec::with_capacity(title.len() + 3);
        segments.push(left);
        segments.extend(title);
        segments.push(right);
        segments.push(Segment::line_break());
        segments
    }
}
