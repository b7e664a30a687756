//! Width bounds reported by renderables.

use serde::{Deserialize, Serialize};

/// Minimum and maximum width, in terminal cells, a renderable needs.
///
/// `min` is the narrowest width the content can be wrapped to; `max` is the
/// width it takes when unconstrained. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Narrowest usable width.
    pub min: usize,
    /// Natural width.
    pub max: usize,
}

impl Measurement {
    /// Create a measurement, lowering `min` to `max` if needed.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self {
            min: if min > max { max } else { min },
            max,
        }
    }

    /// A measurement where min and max coincide.
    #[must_use]
    pub const fn exact(width: usize) -> Self {
        Self::new(width, width)
    }

    /// Add `amount` cells to both bounds.
    #[must_use]
    pub const fn grow(&self, amount: usize) -> Self {
        Self::new(
            self.min.saturating_add(amount),
            self.max.saturating_add(amount),
        )
    }

    /// Raise `max` to at least `width`, leaving `min` untouched.
    #[must_use]
    pub const fn with_max_at_least(&self, width: usize) -> Self {
        if width > self.max {
            Self::new(self.min, width)
        } else {
            *self
        }
    }

    /// Normalize against an available width: never wider than `max_width`.
    #[must_use]
    pub fn fit(&self, max_width: usize) -> Self {
        Self::new(self.min.min(max_width), self.max.min(max_width))
    }
}
