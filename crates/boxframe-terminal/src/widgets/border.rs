//! Box-drawing glyph sets for framing content.

use boxframe_core::{Segment, Style, TerminalCapabilities};
use serde::{Deserialize, Serialize};

/// A named set of border glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxBorder {
    /// No visible border; every glyph is a space.
    None,
    /// ASCII only: +-+|+-+
    Ascii,
    /// Single line: ┌─┐│└─┘
    #[default]
    Square,
    /// Rounded corners: ╭─╮│╰─╯
    Rounded,
    /// Double line: ╔═╗║╚═╝
    Double,
    /// Heavy/thick: ┏━┓┃┗━┛
    Heavy,
}

/// A position on a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPart {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl BoxBorder {
    /// Glyphs in order: top-left, top, top-right, left, right, bottom-left,
    /// bottom, bottom-right.
    #[must_use]
    pub const fn glyphs(&self) -> [&'static str; 8] {
        match self {
            Self::None => [" ", " ", " ", " ", " ", " ", " ", " "],
            Self::Ascii => ["+", "-", "+", "|", "|", "+", "-", "+"],
            Self::Square => ["┌", "─", "┐", "│", "│", "└", "─", "┘"],
            Self::Rounded => ["╭", "─", "╮", "│", "│", "╰", "─", "╯"],
            Self::Double => ["╔", "═", "╗", "║", "║", "╚", "═", "╝"],
            Self::Heavy => ["┏", "━", "┓", "┃", "┃", "┗", "━", "┛"],
        }
    }

    /// The glyph drawn at `part`.
    #[must_use]
    pub const fn glyph(&self, part: BorderPart) -> &'static str {
        let glyphs = self.glyphs();
        match part {
            BorderPart::TopLeft => glyphs[0],
            BorderPart::Top => glyphs[1],
            BorderPart::TopRight => glyphs[2],
            BorderPart::Left => glyphs[3],
            BorderPart::Right => glyphs[4],
            BorderPart::BottomLeft => glyphs[5],
            BorderPart::Bottom => glyphs[6],
            BorderPart::BottomRight => glyphs[7],
        }
    }

    /// The glyph at `part` as a styled fragment.
    #[must_use]
    pub fn segment(&self, part: BorderPart, style: Style) -> Segment {
        Segment::new(self.glyph(part), style)
    }

    /// The glyph at `part` repeated `count` times.
    #[must_use]
    pub fn repeat(&self, part: BorderPart, count: usize) -> String {
        self.glyph(part).repeat(count)
    }

    /// Whether any glyph is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The variant to use on terminals without extended glyph support.
    #[must_use]
    pub const fn safe_border(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Ascii | Self::Square | Self::Rounded | Self::Double | Self::Heavy => Self::Ascii,
        }
    }

    /// Resolve the variant actually drawn on a terminal.
    ///
    /// Falls back to [`Self::safe_border`] only when `use_safe_border` is set
    /// and the terminal cannot render Unicode glyphs.
    #[must_use]
    pub const fn resolve(
        &self,
        capabilities: &TerminalCapabilities,
        use_safe_border: bool,
    ) -> Self {
        if use_safe_border && !capabilities.unicode {
            self.safe_border()
        } else {
            *self
        }
    }
}
