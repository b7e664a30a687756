//! Terminal panels for boxframe.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)] // "more than 3 bools in struct"
#![allow(clippy::doc_markdown)] // "item in documentation missing backticks"
//!
//! This crate builds the renderables from `boxframe_core` abstractions
//! (Segment, Measurement, Renderable) and writes them to the terminal using
//! `crossterm` directly.
//!
//! # Example
//!
//! ```
//! use boxframe_core::RenderOptions;
//! use boxframe_terminal::{render_plain, Panel, Text};
//!
//! let panel = Panel::new(Text::new("Hello, world!")).with_title("Greeting");
//! let text = render_plain(&panel, &RenderOptions::new(40));
//! assert!(text.starts_with("┌─Greeting"));
//! ```

mod error;
pub mod output;
pub mod widgets;

pub use error::TuiError;
pub use output::{print, render_plain, to_plain_text, write_segments};
pub use widgets::{
    BorderPart, BoxBorder, Justify, Padder, Padding, Panel, PanelBuilder, PanelConfig,
    PanelHeader, Rule, Text,
};
