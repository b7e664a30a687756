//! Render context: terminal capabilities and size constraints.

use serde::{Deserialize, Serialize};

/// Default width used when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

/// Whether styled output may carry colors.
///
/// Colors are written as 24-bit RGB; terminals that cannot show them are
/// expected to be run with `NO_COLOR` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// 24-bit RGB colors.
    #[default]
    TrueColor,
    /// Attributes only.
    Mono,
}

impl ColorMode {
    /// Color mode for the given `NO_COLOR` and `TERM` values. A non-empty
    /// `NO_COLOR`, a `dumb` terminal or no terminal at all means mono.
    #[must_use]
    pub fn from_env_values(no_color: Option<&str>, term: Option<&str>) -> Self {
        let no_color = no_color.is_some_and(|v| !v.is_empty());
        if no_color || matches!(term, None | Some("" | "dumb")) {
            Self::Mono
        } else {
            Self::TrueColor
        }
    }

    /// Whether colors are written at all.
    #[must_use]
    pub const fn has_color(self) -> bool {
        matches!(self, Self::TrueColor)
    }
}

/// What the output terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalCapabilities {
    /// Color depth.
    pub color_mode: ColorMode,
    /// Whether extended (box-drawing) glyphs render correctly.
    pub unicode: bool,
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            unicode: true,
        }
    }
}

impl TerminalCapabilities {
    /// Detect capabilities from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        let locale = var("LC_ALL")
            .filter(|v| !v.is_empty())
            .or_else(|| var("LC_CTYPE").filter(|v| !v.is_empty()))
            .or_else(|| var("LANG"));
        Self::detect_with_env(
            var("NO_COLOR").as_deref(),
            var("TERM").as_deref(),
            locale.as_deref(),
        )
    }

    /// Detect capabilities from explicit environment values.
    ///
    /// Unicode support is assumed when the locale names a UTF-8 codeset and
    /// the terminal is not `dumb`/`linux` (the kernel console font lacks most
    /// box-drawing glyphs).
    #[must_use]
    pub fn detect_with_env(
        no_color: Option<&str>,
        term: Option<&str>,
        locale: Option<&str>,
    ) -> Self {
        let utf8_locale = locale.is_some_and(|l| {
            let l = l.to_ascii_lowercase();
            l.contains("utf-8") || l.contains("utf8")
        });
        let limited_term = matches!(term, Some("dumb" | "linux"));
        Self {
            color_mode: ColorMode::from_env_values(no_color, term),
            unicode: utf8_locale && !limited_term,
        }
    }

    /// Capabilities of a plain ASCII terminal.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            color_mode: ColorMode::Mono,
            unicode: false,
        }
    }
}

/// Ambient constraints for one render call.
///
/// Renderables read these but never mutate them; containers pass modified
/// copies to their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Width of the output surface in cells.
    pub width: usize,
    /// Fixed height imposed by the caller, if any.
    pub height: Option<usize>,
    /// Terminal capabilities.
    pub capabilities: TerminalCapabilities,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl RenderOptions {
    /// Options for a surface `width` cells wide with default capabilities.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            height: None,
            capabilities: TerminalCapabilities::default(),
        }
    }

    /// Options for the current terminal, falling back to [`DEFAULT_WIDTH`]
    /// when `COLUMNS` is unset or invalid.
    #[must_use]
    pub fn detect() -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        Self {
            width,
            height: None,
            capabilities: TerminalCapabilities::detect(),
        }
    }

    /// Copy with a different width.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Copy with a different height constraint.
    #[must_use]
    pub const fn with_height(mut self, height: Option<usize>) -> Self {
        self.height = height;
        self
    }

    /// Copy with different capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: TerminalCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Whether extended glyphs can be drawn.
    #[must_use]
    pub const fn unicode(&self) -> bool {
        self.capabilities.unicode
    }
}
