//! Plain text content with word wrapping.

use boxframe_core::{Measurement, RenderOptions, Renderable, Segment, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A block of text rendered in a single style.
///
/// Lines are separated by `\n`. When a line is wider than the available
/// width it is wrapped at whitespace; words longer than the width are broken
/// between graphemes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    content: String,
    style: Style,
}

impl Text {
    /// Create a new text block.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Style::plain(),
        }
    }

    /// Set the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Make text bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn source_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

impl Renderable for Text {
    fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
        let mut min = 0;
        let mut max = 0;
        for line in self.source_lines() {
            max = max.max(line.width());
            for word in line.split_whitespace() {
                min = min.max(word.width());
            }
        }
        Measurement::new(min, max).fit(max_width)
    }

    fn render(&self, _options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let lines: Vec<String> = self
            .source_lines()
            .flat_map(|line| wrap_line(line, max_width))
            .collect();

        let mut result = Vec::with_capacity(lines.len() * 2);
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                result.push(Segment::line_break());
            }
            if !line.is_empty() {
                result.push(Segment::new(line, self.style));
            }
        }
        result
    }
}

/// Greedy word wrap of one source line.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in tokens(line) {
        let token_width = token.width();
        if current_width + token_width <= width {
            current.push_str(token);
            current_width += token_width;
            continue;
        }

        if token.starts_with(char::is_whitespace) {
            // Whitespace at a wrap point is dropped.
            flush(&mut current, &mut lines);
            current_width = 0;
            continue;
        }

        if current_width > 0 {
            flush(&mut current, &mut lines);
            current_width = 0;
        }

        if token_width <= width {
            current.push_str(token);
            current_width = token_width;
            continue;
        }

        for grapheme in token.graphemes(true) {
            let grapheme_width = grapheme.width();
            if current_width > 0 && current_width + grapheme_width > width {
                flush(&mut current, &mut lines);
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
    }

    flush(&mut current, &mut lines);
    lines
}

/// Move `current` into `lines` without trailing whitespace, skipping blanks.
fn flush(current: &mut String, lines: &mut Vec<String>) {
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    current.clear();
}

/// Split into alternating runs of whitespace and non-whitespace.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_space)
            .map_or(rest.len(), |(i, _)| i);
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
