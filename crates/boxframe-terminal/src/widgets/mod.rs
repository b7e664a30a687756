//! Renderables built on the boxframe core.
//!
//! [`Panel`] is the centerpiece; the rest are its building blocks and the
//! content most commonly placed inside it.

mod border;
mod padding;
mod panel;
mod rule;
mod text;

pub use border::{BorderPart, BoxBorder};
pub use padding::{Padder, Padding};
pub use panel::{Panel, PanelBuilder, PanelConfig, PanelHeader};
pub use rule::{Justify, Rule};
pub use text::Text;
