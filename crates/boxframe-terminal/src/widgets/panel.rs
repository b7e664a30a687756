//! Bordered, padded, optionally titled container around one child.
//!
//! Rendering happens in four steps:
//!
//! 1. Measure the padded child to pick the panel width (shrink to content
//!    unless `expand` is set, never wider than the available width).
//! 2. Draw the top edge, with the header justified inside it.
//! 3. Render the child at the inner width, split it into lines, optionally
//!    keep only a scroll window of them, and frame each line.
//! 4. Draw the bottom edge and, unless the panel is inline, a final line
//!    break.
//!
//! Every row is exactly the panel width. A panel narrower than two cells has
//! no room for a frame and is drawn without one; with no inner width left
//! the child is not drawn at all.

use super::border::{BorderPart, BoxBorder};
use super::padding::{Padder, Padding};
use super::rule::{Justify, Rule};
use boxframe_core::{
    line_width, split_lines, LayoutError, Measurement, RenderOptions, Renderable, Segment, Style,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Cells taken by the left and right border glyphs together.
const EDGE_WIDTH: usize = 2;

/// Title drawn in a panel's top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelHeader {
    /// Title text. Newlines are collapsed to spaces.
    pub text: String,
    /// Placement within the edge; left when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    /// Title style; the border style when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl PanelHeader {
    /// Left-justified header in the border style.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            justify: None,
            style: None,
        }
    }

    /// Set the justification.
    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Set the title style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Everything that shapes a panel besides its child.
///
/// The value is fixed once the panel is built; every render reads it
/// without mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Glyph set for the frame.
    pub border: BoxBorder,
    /// Style of the frame glyphs; plain when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<Style>,
    /// Degrade to ASCII glyphs on terminals without Unicode support.
    pub use_safe_border: bool,
    /// Fill the available width instead of shrinking to content.
    pub expand: bool,
    /// Insets between the frame and the child.
    pub padding: Padding,
    /// Title in the top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<PanelHeader>,
    /// Requested outer width; only ever widens the panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Requested outer height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    /// Lines scrolled back from the end when content exceeds the height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<usize>,
    /// Nested in a layout that manages its own line breaks.
    pub inline: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            border: BoxBorder::Square,
            border_style: None,
            use_safe_border: true,
            expand: false,
            padding: Padding::horizontal(1),
            header: None,
            width: None,
            height: None,
            scroll_offset: None,
            inline: false,
        }
    }
}

/// A bordered box around a single renderable.
///
/// ```
/// use boxframe_core::{RenderOptions, Renderable};
/// use boxframe_terminal::{to_plain_text, BoxBorder, Panel, Text};
///
/// let panel = Panel::new(Text::new("hi")).with_border(BoxBorder::Ascii);
/// let out = panel.render(&RenderOptions::new(80), 80);
/// assert_eq!(to_plain_text(&out), "+----+\n| hi |\n+----+\n");
/// ```
pub struct Panel {
    child: Box<dyn Renderable>,
    config: PanelConfig,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Panel {
    /// Create a panel with the default configuration.
    #[must_use]
    pub fn new(child: impl Renderable + 'static) -> Self {
        Self::with_config(child, PanelConfig::default())
    }

    /// Create a panel from an explicit configuration.
    #[must_use]
    pub fn with_config(child: impl Renderable + 'static, config: PanelConfig) -> Self {
        Self {
            child: Box::new(child),
            config,
        }
    }

    /// Start a builder; the child is validated on [`PanelBuilder::build`].
    #[must_use]
    pub fn builder() -> PanelBuilder {
        PanelBuilder::default()
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Set the border glyph set.
    #[must_use]
    pub fn with_border(mut self, border: BoxBorder) -> Self {
        self.config.border = border;
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn with_border_style(mut self, style: Style) -> Self {
        self.config.border_style = Some(style);
        self
    }

    /// Enable or disable the ASCII fallback.
    #[must_use]
    pub fn with_safe_border(mut self, use_safe_border: bool) -> Self {
        self.config.use_safe_border = use_safe_border;
        self
    }

    /// Fill the available width.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.config.expand = expand;
        self
    }

    /// Set the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.config.padding = padding;
        self
    }

    /// Set the header.
    #[must_use]
    pub fn with_header(mut self, header: PanelHeader) -> Self {
        self.config.header = Some(header);
        self
    }

    /// Set a left-justified header.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_header(PanelHeader::new(title))
    }

    /// Request an outer width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.config.width = Some(width);
        self
    }

    /// Request an outer height.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.config.height = Some(height);
        self
    }

    /// Scroll back `offset` lines from the end of overflowing content.
    #[must_use]
    pub fn with_scroll_offset(mut self, offset: usize) -> Self {
        self.config.scroll_offset = Some(offset);
        self
    }

    /// Mark the panel as nested inside another layout.
    #[must_use]
    pub fn inline(mut self, inline: bool) -> Self {
        self.config.inline = inline;
        self
    }

    fn resolve_border(&self, options: &RenderOptions) -> BoxBorder {
        self.config
            .border
            .resolve(&options.capabilities, self.config.use_safe_border)
    }

    fn padded_child(&self) -> Padder<&dyn Renderable> {
        Padder::new(self.child.as_ref(), self.config.padding)
    }

    /// Content height: the explicit height wins; expanding panels fall back
    /// to the height imposed by the caller.
    fn resolve_height(&self, options: &RenderOptions) -> Option<usize> {
        let explicit = self.config.height.map(|h| h.saturating_sub(2));
        if self.config.expand {
            explicit.or_else(|| options.height.map(|h| h.saturating_sub(2)))
        } else {
            explicit
        }
    }

    fn push_top_edge(
        &self,
        result: &mut Vec<Segment>,
        options: &RenderOptions,
        border: BoxBorder,
        style: Style,
        panel_width: usize,
    ) {
        let header = self.config.header.as_ref();
        let rule = Rule::new()
            .with_style(style)
            .with_border(border)
            .with_safe_border(false)
            .with_title_padding(1)
            .with_title_spacing(0)
            .with_optional_title(header.map(|h| h.text.clone()))
            .with_title_style(header.and_then(|h| h.style))
            .with_justify(header.and_then(|h| h.justify).unwrap_or(Justify::Left));

        // A header row narrower than the corners is the bare rule.
        let corners = panel_width >= EDGE_WIDTH;
        let rule_width = if corners {
            panel_width - EDGE_WIDTH
        } else {
            panel_width
        };
        if corners {
            result.push(border.segment(BorderPart::TopLeft, style));
        }
        result.extend(
            rule.render(options, rule_width)
                .into_iter()
                .filter(|segment| !segment.is_line_break()),
        );
        if corners {
            result.push(border.segment(BorderPart::TopRight, style));
        }
        result.push(Segment::line_break());
    }

    fn push_bottom_edge(
        result: &mut Vec<Segment>,
        border: BoxBorder,
        style: Style,
        panel_width: usize,
    ) {
        result.push(border.segment(BorderPart::BottomLeft, style));
        result.push(Segment::new(
            border.repeat(BorderPart::Bottom, panel_width.saturating_sub(EDGE_WIDTH)),
            style,
        ));
        result.push(border.segment(BorderPart::BottomRight, style));
    }
}

/// Keep the `height` lines ending `offset` lines before the last one.
///
/// Only applies when both are set and the content overflows; a window that
/// would start before the first line starts at the first line instead.
fn scroll_window(
    lines: &[Vec<Segment>],
    height: Option<usize>,
    offset: Option<usize>,
) -> &[Vec<Segment>] {
    match (height, offset) {
        (Some(height), Some(offset)) if lines.len() > height => {
            let start = lines.len().saturating_sub(height.saturating_add(offset));
            let end = (start + height).min(lines.len());
            &lines[start..end]
        }
        _ => lines,
    }
}

impl Renderable for Panel {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let border = self.resolve_border(options);
        let edge_width = if border.is_visible() { EDGE_WIDTH } else { 0 };

        let mut child_width = self
            .padded_child()
            .measure(options, max_width.saturating_sub(edge_width));
        if let Some(width) = self.config.width {
            child_width = child_width.with_max_at_least(width.saturating_sub(edge_width));
        }
        let measurement = child_width.grow(edge_width);
        trace!(max_width, ?measurement, "panel measured");
        measurement
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let border_style = self.config.border_style.unwrap_or_default();
        let inline = self.config.inline;

        let width = self.measure(options, max_width);
        let panel_width = if self.config.expand {
            max_width
        } else {
            width.max.min(max_width)
        };

        // The frame needs both edge cells; a narrower panel drops it.
        let border = if panel_width < EDGE_WIDTH {
            BoxBorder::None
        } else {
            self.resolve_border(options)
        };
        let show_border = border.is_visible();
        let edge_width = if show_border { EDGE_WIDTH } else { 0 };
        let inner_width = panel_width.saturating_sub(edge_width);
        let height = self.resolve_height(options);

        let mut result = Vec::new();
        if show_border {
            self.push_top_edge(&mut result, options, border, border_style, panel_width);
        } else if self.config.header.is_some() {
            self.push_top_edge(&mut result, options, BoxBorder::None, border_style, panel_width);
        }

        let lines: Vec<Vec<Segment>> = if inner_width == 0 {
            Vec::new()
        } else {
            let child_options = options.with_height(height);
            let child_segments = self.padded_child().render(&child_options, inner_width);
            split_lines(child_segments, inner_width, None).collect()
        };
        let visible = scroll_window(&lines, height, self.config.scroll_offset);
        debug!(
            ?border,
            panel_width,
            inner_width,
            ?height,
            total_lines = lines.len(),
            visible_lines = visible.len(),
            "rendering panel"
        );

        let last_index = visible.len().saturating_sub(1);
        for (index, line) in visible.iter().enumerate() {
            if line.len() == 1 && line[0].is_whitespace() {
                trace!(index, "skipping whitespace-only row");
                continue;
            }

            if show_border {
                result.push(border.segment(BorderPart::Left, border_style));
            }

            result.extend(line.iter().cloned());
            let content_width = line_width(line);
            if content_width < inner_width {
                result.push(Segment::padding(inner_width - content_width));
            }

            if show_border {
                result.push(border.segment(BorderPart::Right, border_style));
            }

            let last = index == last_index;
            if !(last && !show_border && !inline) {
                result.push(Segment::line_break());
            }
        }

        if show_border {
            Self::push_bottom_edge(&mut result, border, border_style, panel_width);
        }

        if !inline {
            result.push(Segment::line_break());
        }

        result
    }
}

/// Builds a [`Panel`], failing when no child was given.
#[derive(Default)]
pub struct PanelBuilder {
    child: Option<Box<dyn Renderable>>,
    config: PanelConfig,
}

impl PanelBuilder {
    /// Set the child content.
    #[must_use]
    pub fn child(mut self, child: impl Renderable + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Set the child content from an already boxed renderable, if any.
    #[must_use]
    pub fn boxed_child(mut self, child: Option<Box<dyn Renderable>>) -> Self {
        self.child = child;
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Finish the panel.
    pub fn build(self) -> Result<Panel, LayoutError> {
        let child = self
            .child
            .ok_or_else(|| LayoutError::InvalidArgument("panel child is required".to_string()))?;
        Ok(Panel {
            child,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Text;
    use boxframe_core::{Color, TerminalCapabilities};

    fn rows(segments: &[Segment]) -> Vec<String> {
        let mut rows = vec![String::new()];
        for segment in segments {
            if segment.is_line_break() {
                rows.push(String::new());
            } else if let Some(row) = rows.last_mut() {
                row.push_str(segment.text());
            }
        }
        rows
    }

    fn render(panel: &Panel, width: usize) -> Vec<Segment> {
        panel.render(&RenderOptions::new(width), width)
    }

    fn numbered(count: usize) -> Text {
        Text::new(
            (1..=count)
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Renders the height it was given, to observe the child context.
    struct HeightProbe;

    impl Renderable for HeightProbe {
        fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
            Measurement::exact(10).fit(max_width)
        }

        fn render(&self, options: &RenderOptions, _max_width: usize) -> Vec<Segment> {
            vec![Segment::plain(format!("{:?}", options.height))]
        }
    }

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.border, BoxBorder::Square);
        assert_eq!(config.padding, Padding::horizontal(1));
        assert!(config.use_safe_border);
        assert!(!config.expand);
        assert!(!config.inline);
    }

    #[test]
    fn test_simple_panel() {
        let out = render(&Panel::new(Text::new("hi")), 80);
        assert_eq!(rows(&out), vec!["┌────┐", "│ hi │", "└────┘", ""]);
    }

    #[test]
    fn test_padded_panel_with_explicit_width() {
        let panel = Panel::new(Text::new("hi"))
            .with_padding(Padding::new(1, 0, 1, 0))
            .with_width(10);
        let out = render(&panel, 80);
        assert_eq!(
            rows(&out),
            vec![
                "┌────────┐",
                "│        │",
                "│hi      │",
                "│        │",
                "└────────┘",
                ""
            ]
        );
    }

    #[test]
    fn test_measure_adds_edges_and_padding() {
        let panel = Panel::new(Text::new("hello world"));
        let m = panel.measure(&RenderOptions::default(), 80);
        assert_eq!(m, Measurement::new(9, 15));
    }

    #[test]
    fn test_measure_borderless_has_no_edges() {
        let panel = Panel::new(Text::new("abc")).with_border(BoxBorder::None);
        let m = panel.measure(&RenderOptions::default(), 80);
        assert_eq!(m, Measurement::exact(5));
    }

    #[test]
    fn test_explicit_width_only_grows() {
        let panel = Panel::new(Text::new("hello world")).with_width(4);
        let m = panel.measure(&RenderOptions::default(), 80);
        assert_eq!(m, Measurement::new(9, 15));

        let panel = Panel::new(Text::new("ab")).with_width(30);
        let m = panel.measure(&RenderOptions::default(), 80);
        assert_eq!(m, Measurement::new(6, 30));
    }

    #[test]
    fn test_expand_fills_width() {
        let out = render(&Panel::new(Text::new("x")).expand(true), 12);
        for row in rows(&out).iter().filter(|r| !r.is_empty()) {
            assert_eq!(row.chars().count(), 12);
        }
    }

    #[test]
    fn test_panel_narrower_than_content_wraps() {
        let out = render(&Panel::new(Text::new("one two three")), 9);
        let rows = rows(&out);
        assert_eq!(rows[0], "┌───────┐");
        assert_eq!(&rows[1..4], ["│ one   │", "│ two   │", "│ three │"]);
    }

    #[test]
    fn test_header_left_justified_by_default() {
        let panel = Panel::new(Text::new("content")).with_title("Hi");
        let out = render(&panel, 80);
        assert_eq!(rows(&out)[0], "┌─Hi──────┐");
    }

    #[test]
    fn test_header_centered() {
        let panel = Panel::new(Text::new("content"))
            .with_header(PanelHeader::new("Hi").with_justify(Justify::Center));
        let out = render(&panel, 80);
        assert_eq!(rows(&out)[0], "┌───Hi────┐");
    }

    #[test]
    fn test_header_style() {
        let style = Style::plain().fg(Color::RED);
        let panel = Panel::new(Text::new("content"))
            .with_header(PanelHeader::new("Hi").with_style(style));
        let out = render(&panel, 80);
        assert!(out.iter().any(|s| s.text() == "Hi" && *s.style() == style));
    }

    #[test]
    fn test_borderless_header() {
        let panel = Panel::new(Text::new("content"))
            .with_border(BoxBorder::None)
            .with_title("Title");
        let out = render(&panel, 80);
        let rows = rows(&out);
        assert_eq!(rows, vec!["  Title  ", " content ", ""]);
        assert!(!out.iter().any(|s| s.text() == "│"));
    }

    #[test]
    fn test_borderless_without_header_has_no_top_edge() {
        let panel = Panel::new(Text::new("a\nb")).with_border(BoxBorder::None);
        let out = render(&panel, 80);
        assert_eq!(rows(&out), vec![" a ", " b ", ""]);
    }

    #[test]
    fn test_border_style_applied_to_glyphs() {
        let style = Style::plain().fg(Color::BLUE);
        let panel = Panel::new(Text::new("x")).with_border_style(style);
        let out = render(&panel, 80);
        assert!(out
            .iter()
            .filter(|s| s.text() == "│" || s.text() == "┌")
            .all(|s| *s.style() == style));
    }

    #[test]
    fn test_safe_border_fallback() {
        let options = RenderOptions::new(80).with_capabilities(TerminalCapabilities::ascii());
        let panel = Panel::new(Text::new("x")).with_border(BoxBorder::Rounded);
        let out = panel.render(&options, 80);
        assert_eq!(rows(&out)[0], "+---+");

        let panel = panel.with_safe_border(false);
        let out = panel.render(&options, 80);
        assert_eq!(rows(&out)[0], "╭───╮");
    }

    #[test]
    fn test_whitespace_only_rows_skipped() {
        let panel = Panel::new(Text::new("\n   \n")).with_padding(Padding::default());
        let out = render(&panel, 80);
        assert_eq!(rows(&out), vec!["┌───┐", "│   │", "└───┘", ""]);
    }

    #[test]
    fn test_scroll_offset_zero_shows_tail() {
        let panel = Panel::new(numbered(6))
            .with_padding(Padding::default())
            .with_height(5)
            .with_scroll_offset(0);
        let out = render(&panel, 80);
        assert_eq!(&rows(&out)[1..4], ["│4│", "│5│", "│6│"]);
    }

    #[test]
    fn test_scroll_offset_moves_window_back() {
        let panel = Panel::new(numbered(6))
            .with_padding(Padding::default())
            .with_height(5)
            .with_scroll_offset(1);
        let out = render(&panel, 80);
        assert_eq!(&rows(&out)[1..4], ["│3│", "│4│", "│5│"]);
    }

    #[test]
    fn test_scroll_offset_past_start_clamps() {
        let panel = Panel::new(numbered(6))
            .with_padding(Padding::default())
            .with_height(5)
            .with_scroll_offset(40);
        let out = render(&panel, 80);
        assert_eq!(&rows(&out)[1..5], ["│1│", "│2│", "│3│", "└─┘"]);
    }

    #[test]
    fn test_height_without_scroll_offset_keeps_all_lines() {
        let panel = Panel::new(numbered(6))
            .with_padding(Padding::default())
            .with_height(5);
        let out = render(&panel, 80);
        assert_eq!(rows(&out).len(), 6 + 2 + 1);
    }

    #[test]
    fn test_context_height_ignored_unless_expanding() {
        let options = RenderOptions::new(80).with_height(Some(5));
        let panel = Panel::new(numbered(6))
            .with_padding(Padding::default())
            .with_scroll_offset(0);
        assert_eq!(rows(&panel.render(&options, 80)).len(), 6 + 2 + 1);

        let panel = panel.expand(true);
        let out = panel.render(&options, 80);
        assert_eq!(rows(&out).len(), 3 + 2 + 1);
        assert!(rows(&out)[1].starts_with("│4"));
    }

    #[test]
    fn test_child_receives_resolved_height() {
        let options = RenderOptions::new(80).with_height(Some(9));
        let panel = Panel::new(HeightProbe).with_padding(Padding::default());
        assert!(rows(&panel.render(&options, 80))[1].contains("None"));

        let panel = Panel::new(HeightProbe)
            .with_padding(Padding::default())
            .expand(true);
        assert!(rows(&panel.render(&options, 80))[1].contains("Some(7)"));

        let panel = Panel::new(HeightProbe)
            .with_padding(Padding::default())
            .with_height(4);
        assert!(rows(&panel.render(&options, 80))[1].contains("Some(2)"));
    }

    #[test]
    fn test_inline_drops_final_break() {
        let panel = Panel::new(Text::new("x"));
        let block = render(&panel, 80);
        let inline = render(&Panel::new(Text::new("x")).inline(true), 80);
        let breaks = |s: &[Segment]| s.iter().filter(|s| s.is_line_break()).count();
        assert_eq!(breaks(&block), breaks(&inline) + 1);
        assert!(block.last().is_some_and(Segment::is_line_break));
        assert!(!inline.last().is_some_and(Segment::is_line_break));
    }

    #[test]
    fn test_borderless_emits_exactly_one_final_break() {
        for inline in [false, true] {
            let panel = Panel::new(Text::new("a\nb"))
                .with_border(BoxBorder::None)
                .inline(inline);
            let out = render(&panel, 80);
            assert_eq!(out.iter().filter(|s| s.is_line_break()).count(), 2);
            assert!(out.last().is_some_and(Segment::is_line_break));
        }
    }

    #[test]
    fn test_narrow_rows_match_panel_width() {
        for width in 0..8 {
            for text in ["hello", "日本", "a\nb", ""] {
                let panel = Panel::new(Text::new(text)).with_title("T");
                let options = RenderOptions::new(width);
                let panel_width = panel.measure(&options, width).max.min(width);
                let out = panel.render(&options, width);
                assert!(out.last().is_some_and(Segment::is_line_break));
                for line in split_lines(out, usize::MAX, None) {
                    assert_eq!(line_width(&line), panel_width, "{text:?} at {width}");
                }
            }
        }
    }

    #[test]
    fn test_zero_inner_width_drops_content() {
        let panel = Panel::new(Text::new("hello")).with_padding(Padding::default());
        assert_eq!(rows(&render(&panel, 2)), vec!["┌┐", "└┘", ""]);
    }

    #[test]
    fn test_glyph_wider_than_inner_width_is_elided() {
        let out = render(&Panel::new(Text::new("日本")), 3);
        assert_eq!(rows(&out), vec!["┌─┐", "│…│", "│…│", "└─┘", ""]);
    }

    #[test]
    fn test_frame_dropped_below_two_cells() {
        let out = render(&Panel::new(Text::new("x")), 1);
        assert_eq!(rows(&out), vec!["…", ""]);

        let panel = Panel::new(Text::new("x"))
            .with_border(BoxBorder::None)
            .with_title("Title");
        assert_eq!(rows(&render(&panel, 1)), vec![" ", "…", ""]);
        assert_eq!(rows(&render(&panel, 0)), vec!["", "", ""]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let panel = Panel::new(numbered(4))
            .with_title("T")
            .with_height(4)
            .with_scroll_offset(1);
        assert_eq!(render(&panel, 30), render(&panel, 30));
    }

    #[test]
    fn test_nested_panels() {
        let inner = Panel::new(Text::new("in")).inline(true);
        let outer = Panel::new(inner).with_border(BoxBorder::Double);
        let out = render(&outer, 80);
        assert_eq!(
            rows(&out),
            vec!["╔════════╗", "║ ┌────┐ ║", "║ │ in │ ║", "║ └────┘ ║", "╚════════╝", ""]
        );
    }

    #[test]
    fn test_builder_requires_child() {
        let err = Panel::builder().build().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument(_)));

        let err = Panel::builder().boxed_child(None).build().unwrap_err();
        assert!(err.to_string().contains("child"));
    }

    #[test]
    fn test_builder_with_config() {
        let config = PanelConfig {
            border: BoxBorder::Heavy,
            ..PanelConfig::default()
        };
        let panel = Panel::builder()
            .child(Text::new("x"))
            .config(config.clone())
            .build()
            .unwrap();
        assert_eq!(panel.config(), &config);
        assert_eq!(rows(&render(&panel, 80))[0], "┏━━━┓");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{"border":"rounded","expand":true,"header":{"text":"T","justify":"right"}}"#;
        let config: PanelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.border, BoxBorder::Rounded);
        assert!(config.expand);
        assert_eq!(config.padding, Padding::horizontal(1));
        assert_eq!(
            config.header,
            Some(PanelHeader::new("T").with_justify(Justify::Right))
        );
        assert!(config.use_safe_border);
    }

    #[test]
    fn test_scroll_window_unit() {
        let lines: Vec<Vec<Segment>> = (0..5)
            .map(|i| vec![Segment::plain(i.to_string())])
            .collect();
        assert_eq!(scroll_window(&lines, Some(2), Some(0)), &lines[3..5]);
        assert_eq!(scroll_window(&lines, Some(2), Some(2)), &lines[1..3]);
        assert_eq!(scroll_window(&lines, Some(2), Some(9)), &lines[0..2]);
        assert_eq!(scroll_window(&lines, Some(9), Some(0)).len(), 5);
        assert_eq!(scroll_window(&lines, None, Some(0)).len(), 5);
        assert_eq!(scroll_window(&lines, Some(2), None).len(), 5);
    }
}
