//! Padding insets and the decorator that applies them.

use boxframe_core::{
    line_width, split_lines, truncate_with_ellipsis, Measurement, RenderOptions, Renderable,
    Segment,
};
use serde::{Deserialize, Serialize};

/// Blank space around content, in cells. Field order follows CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    /// Create padding from top, right, bottom and left insets.
    #[must_use]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every edge.
    #[must_use]
    pub const fn all(amount: usize) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// `vertical` above and below, `horizontal` left and right.
    #[must_use]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Left and right only.
    #[must_use]
    pub const fn horizontal(amount: usize) -> Self {
        Self::symmetric(0, amount)
    }

    /// Top and bottom only.
    #[must_use]
    pub const fn vertical(amount: usize) -> Self {
        Self::symmetric(amount, 0)
    }

    /// Total horizontal inset.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.left + self.right
    }

    /// Total vertical inset.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.top + self.bottom
    }
}

/// Wraps a renderable in blank padding.
///
/// Rows never exceed the width passed to `render`: a row that would (insets
/// wider than the space, or a glyph wider than the child column) is cropped
/// with an ellipsis and filled back to the row width.
pub struct Padder<R> {
    child: R,
    padding: Padding,
}

impl<R: Renderable> Padder<R> {
    /// Pad `child` by `padding`. The result shrinks to the child's width.
    #[must_use]
    pub fn new(child: R, padding: Padding) -> Self {
        Self { child, padding }
    }

    /// The insets applied.
    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }
}

impl<R: Renderable> Renderable for Padder<R> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let padding_width = self.padding.width();
        self.child
            .measure(options, max_width.saturating_sub(padding_width))
            .grow(padding_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = self.padding;
        let child_max = max_width.saturating_sub(left + right);
        let child_width = self.child.measure(options, child_max).max;
        let width = (child_width + left + right).min(max_width);

        let mut result = Vec::new();
        for _ in 0..top {
            result.push(Segment::padding(width));
            result.push(Segment::line_break());
        }

        for line in split_lines(self.child.render(options, child_max), child_max, None) {
            let mut row = Vec::with_capacity(line.len() + 3);
            if left > 0 {
                row.push(Segment::padding(left));
            }
            row.extend(line);
            if right > 0 {
                row.push(Segment::padding(right));
            }
            if line_width(&row) > width {
                row = truncate_with_ellipsis(&row, width);
            }
            let fill = width.saturating_sub(line_width(&row));
            if fill > 0 {
                row.push(Segment::padding(fill));
            }
            result.extend(row);
            result.push(Segment::line_break());
        }

        for _ in 0..bottom {
            result.push(Segment::padding(width));
            result.push(Segment::line_break());
        }

        result
    }
}
