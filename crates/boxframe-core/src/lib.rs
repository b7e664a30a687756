//! Core types and traits for boxframe.
//!
//! This crate provides the primitives every boxframe renderable shares:
//! - Styled fragments: [`Segment`], [`Style`], [`Color`]
//! - The line splitter: [`split_lines`]
//! - Width negotiation: [`Measurement`]
//! - The render context: [`RenderOptions`], [`TerminalCapabilities`]
//! - The measure/render contract: [`Renderable`]

mod color;
mod error;
mod measurement;
mod options;
pub mod renderable;
pub mod segment;
mod style;

pub use color::{Color, ColorParseError};
pub use error::LayoutError;
pub use measurement::Measurement;
pub use options::{ColorMode, RenderOptions, TerminalCapabilities, DEFAULT_WIDTH};
pub use renderable::Renderable;
pub use segment::{
    line_width, split_lines, truncate_with_ellipsis, Lines, Segment, SegmentKind, ELLIPSIS,
};
pub use style::{Modifiers, Style};
