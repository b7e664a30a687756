//! The measure/render contract every piece of content implements.
//!
//! Rendering is a two-pass protocol:
//!
//! 1. **Measure**: report the narrowest and natural width for a given
//!    maximum, so containers can negotiate their own size.
//! 2. **Render**: produce a flat stream of [`Segment`]s for a concrete width.
//!
//! Both passes are pure functions of `&self` and the [`RenderOptions`]; a
//! renderable holds no state between calls, so rendering twice with the same
//! inputs yields identical output.
//!
//! # Examples
//!
//! ```
//! use boxframe_core::{Measurement, RenderOptions, Renderable, Segment};
//!
//! struct Dot;
//!
//! impl Renderable for Dot {
//!     fn measure(&self, _options: &RenderOptions, _max_width: usize) -> Measurement {
//!         Measurement::exact(1)
//!     }
//!
//!     fn render(&self, _options: &RenderOptions, _max_width: usize) -> Vec<Segment> {
//!         vec![Segment::plain(".")]
//!     }
//! }
//!
//! let options = RenderOptions::new(10);
//! assert_eq!(Dot.measure(&options, 10), Measurement::exact(1));
//! assert_eq!(Dot.render(&options, 10)[0].text(), ".");
//! ```

use crate::measurement::Measurement;
use crate::options::RenderOptions;
use crate::segment::Segment;
use std::sync::Arc;

/// Content that can be measured and rendered into terminal fragments.
pub trait Renderable: Send + Sync {
    /// Width bounds of this content when at most `max_width` cells are free.
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement;

    /// Render into fragments no wider than `max_width` cells per line.
    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        (**self).render(options, max_width)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        (**self).render(options, max_width)
    }
}

impl<T: Renderable + ?Sized> Renderable for Arc<T> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        (**self).render(options, max_width)
    }
}
