//! Styled text fragments and the line splitter.
//!
//! A [`Segment`] is the atomic unit of terminal output: a run of text with a
//! [`Style`], a run of structural padding, or a line break. Renderables emit
//! flat `Vec<Segment>` streams; containers regroup them into lines with
//! [`split_lines`].

use crate::style::Style;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Ellipsis appended by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "…";

/// What a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Content text.
    Text,
    /// Blank filler inserted by a layout container.
    Padding,
    /// End of the current line.
    LineBreak,
}

/// An immutable styled run of text, padding, or a line break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    text: CompactString,
    style: Style,
    kind: SegmentKind,
}

impl Segment {
    /// Create a text segment.
    #[must_use]
    pub fn new(text: impl Into<CompactString>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            kind: SegmentKind::Text,
        }
    }

    /// Create an unstyled text segment.
    #[must_use]
    pub fn plain(text: impl Into<CompactString>) -> Self {
        Self::new(text, Style::plain())
    }

    /// Create `width` cells of unstyled padding.
    #[must_use]
    pub fn padding(width: usize) -> Self {
        Self::padding_styled(width, Style::plain())
    }

    /// Create `width` cells of padding carrying a style (e.g. a background).
    #[must_use]
    pub fn padding_styled(width: usize, style: Style) -> Self {
        Self {
            text: CompactString::from(" ".repeat(width)),
            style,
            kind: SegmentKind::Padding,
        }
    }

    /// Create a line break marker.
    #[must_use]
    pub fn line_break() -> Self {
        Self {
            text: CompactString::const_new("\n"),
            style: Style::plain(),
            kind: SegmentKind::LineBreak,
        }
    }

    /// The segment text (`"\n"` for line breaks).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The display style.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// The segment kind.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether this is a line break marker.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.kind == SegmentKind::LineBreak
    }

    /// Whether this is structural padding.
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.kind == SegmentKind::Padding
    }

    /// Whether this is a content segment made only of whitespace.
    ///
    /// Padding and line breaks are never whitespace-only content.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == SegmentKind::Text && self.text.chars().all(char::is_whitespace)
    }

    /// Number of terminal cells this segment occupies.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        if self.is_line_break() {
            0
        } else {
            self.text.width()
        }
    }

    /// Copy of this segment with another style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Split into two segments so the first occupies at most `cells` cells.
    ///
    /// The cut always falls on a grapheme boundary; a wide glyph straddling
    /// the cut moves entirely to the right half.
    #[must_use]
    pub fn split_at_cell(&self, cells: usize) -> (Self, Self) {
        let mut width = 0;
        let mut byte = self.text.len();
        for (offset, grapheme) in self.text.grapheme_indices(true) {
            let w = grapheme.width();
            if width + w > cells {
                byte = offset;
                break;
            }
            width += w;
        }
        self.split_at_byte(byte)
    }

    fn split_first_grapheme(&self) -> (Self, Self) {
        let byte = self
            .text
            .graphemes(true)
            .next()
            .map_or(self.text.len(), str::len);
        self.split_at_byte(byte)
    }

    fn split_at_byte(&self, byte: usize) -> (Self, Self) {
        let (left, right) = self.text.split_at(byte);
        (self.with_text(left), self.with_text(right))
    }

    fn with_text(&self, text: &str) -> Self {
        Self {
            text: CompactString::new(text),
            style: self.style,
            kind: self.kind,
        }
    }
}

/// Total cell width of a line of segments.
#[must_use]
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_width).sum()
}

/// Crop a line to `width` cells, ending in `…` when anything was removed.
#[must_use]
pub fn truncate_with_ellipsis(line: &[Segment], width: usize) -> Vec<Segment> {
    if line_width(line) <= width {
        return line.to_vec();
    }
    if width == 0 {
        return Vec::new();
    }

    let mut budget = width - ELLIPSIS.width();
    let mut out = Vec::with_capacity(line.len() + 1);
    let mut style = line.first().map(|s| *s.style()).unwrap_or_default();
    for segment in line {
        let w = segment.cell_width();
        style = *segment.style();
        if w <= budget {
            budget -= w;
            out.push(segment.clone());
            continue;
        }
        let (left, _) = segment.split_at_cell(budget);
        if !left.text().is_empty() {
            out.push(left);
        }
        break;
    }
    out.push(Segment::new(ELLIPSIS, style));
    out
}

/// Lazily regroup a segment stream into lines no wider than `max_width`.
///
/// Line breaks (and `\n` inside text segments) end a line; a line that would
/// overflow is wrapped at the last fitting cell. Every produced line holds at
/// least one grapheme when content remains, so a zero width or a wide glyph
/// in a narrow column cannot stall the splitter. Such a forced line may be
/// wider than `max_width`; callers that need a hard bound crop it with
/// [`truncate_with_ellipsis`]. A trailing line break does not produce an
/// extra empty line, nor does the break right after a forced glyph. Iteration stops after `max_lines` lines
/// when a limit is given.
pub fn split_lines<I>(segments: I, max_width: usize, max_lines: Option<usize>) -> Lines<I::IntoIter>
where
    I: IntoIterator<Item = Segment>,
{
    Lines {
        source: segments.into_iter(),
        pending: VecDeque::new(),
        max_width,
        max_lines,
        produced: 0,
        done: false,
    }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<I> {
    source: I,
    pending: VecDeque<Segment>,
    max_width: usize,
    max_lines: Option<usize>,
    produced: usize,
    done: bool,
}

impl<I: Iterator<Item = Segment>> Lines<I> {
    fn next_segment(&mut self) -> Option<Segment> {
        let segment = self.pending.pop_front().or_else(|| self.source.next())?;
        if segment.kind() != SegmentKind::Text {
            return Some(segment);
        }
        match segment.text().find('\n') {
            Some(pos) => {
                let head = segment.with_text(&segment.text()[..pos]);
                let tail = segment.with_text(&segment.text()[pos + 1..]);
                if !tail.text().is_empty() {
                    self.pending.push_front(tail);
                }
                self.pending.push_front(Segment::line_break());
                if head.text().is_empty() {
                    self.pending.pop_front()
                } else {
                    Some(head)
                }
            }
            None => Some(segment),
        }
    }

    /// Drop the next segment if it ends the line a forced glyph already
    /// ended.
    fn skip_line_break(&mut self) {
        if let Some(next) = self.next_segment() {
            if !next.is_line_break() {
                self.pending.push_front(next);
            }
        }
    }

    fn finish_line(&mut self, line: Vec<Segment>) -> Option<Vec<Segment>> {
        self.produced += 1;
        Some(line)
    }
}

impl<I: Iterator<Item = Segment>> Iterator for Lines<I> {
    type Item = Vec<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.max_lines.is_some_and(|max| self.produced >= max) {
            return None;
        }

        let mut line = Vec::new();
        let mut width = 0;
        loop {
            let Some(segment) = self.next_segment() else {
                self.done = true;
                return if line.is_empty() {
                    None
                } else {
                    self.finish_line(line)
                };
            };

            if segment.is_line_break() {
                return self.finish_line(line);
            }

            let w = segment.cell_width();
            if width + w <= self.max_width {
                width += w;
                line.push(segment);
                continue;
            }

            let (left, right) = segment.split_at_cell(self.max_width.saturating_sub(width));
            if !left.text().is_empty() {
                line.push(left);
                self.pending.push_front(right);
            } else if line.is_empty() {
                let (first, rest) = segment.split_first_grapheme();
                line.push(first);
                if rest.text().is_empty() {
                    self.skip_line_break();
                } else {
                    self.pending.push_front(rest);
                }
            } else {
                self.pending.push_front(segment);
            }
            return self.finish_line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use proptest::prelude::*;

    fn texts(line: &[Segment]) -> String {
        line.iter().map(Segment::text).collect()
    }

    fn collect(segments: Vec<Segment>, width: usize) -> Vec<String> {
        split_lines(segments, width, None)
            .map(|line| texts(&line))
            .collect()
    }

    #[test]
    fn test_cell_width_wide_and_zero_width() {
        assert_eq!(Segment::plain("abc").cell_width(), 3);
        assert_eq!(Segment::plain("日本").cell_width(), 4);
        assert_eq!(Segment::plain("e\u{301}").cell_width(), 1);
        assert_eq!(Segment::line_break().cell_width(), 0);
        assert_eq!(Segment::padding(5).cell_width(), 5);
    }

    #[test]
    fn test_whitespace_predicate() {
        assert!(Segment::plain("   ").is_whitespace());
        assert!(Segment::plain("").is_whitespace());
        assert!(!Segment::plain(" a ").is_whitespace());
        assert!(!Segment::padding(3).is_whitespace());
        assert!(!Segment::line_break().is_whitespace());
    }

    #[test]
    fn test_split_at_cell() {
        let seg = Segment::new("hello", Style::plain().bold());
        let (l, r) = seg.split_at_cell(2);
        assert_eq!(l.text(), "he");
        assert_eq!(r.text(), "llo");
        assert_eq!(l.style(), seg.style());
    }

    #[test]
    fn test_split_at_cell_wide_glyph_moves_right() {
        let (l, r) = Segment::plain("a日b").split_at_cell(2);
        assert_eq!(l.text(), "a");
        assert_eq!(r.text(), "日b");
    }

    #[test]
    fn test_split_lines_on_breaks() {
        let segments = vec![
            Segment::plain("one"),
            Segment::line_break(),
            Segment::plain("two"),
            Segment::line_break(),
        ];
        assert_eq!(collect(segments, 80), vec!["one", "two"]);
    }

    #[test]
    fn test_split_lines_blank_lines_kept() {
        let segments = vec![
            Segment::plain("a"),
            Segment::line_break(),
            Segment::line_break(),
            Segment::plain("b"),
        ];
        assert_eq!(collect(segments, 80), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_embedded_newline() {
        assert_eq!(
            collect(vec![Segment::plain("ab\ncd\n")], 80),
            vec!["ab", "cd"]
        );
        assert_eq!(collect(vec![Segment::plain("\nx")], 80), vec!["", "x"]);
    }

    #[test]
    fn test_split_lines_wraps_overflow() {
        let segments = vec![Segment::plain("abc"), Segment::plain("defg")];
        assert_eq!(collect(segments, 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_split_lines_zero_width_makes_progress() {
        assert_eq!(collect(vec![Segment::plain("ab")], 0), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_wide_glyph_in_narrow_column() {
        assert_eq!(collect(vec![Segment::plain("日本")], 1), vec!["日", "本"]);
    }

    #[test]
    fn test_forced_glyph_swallows_its_line_break() {
        let segments = vec![
            Segment::plain("日"),
            Segment::line_break(),
            Segment::plain("x"),
        ];
        assert_eq!(collect(segments, 1), vec!["日", "x"]);
        assert_eq!(collect(vec![Segment::plain("ab\ncd")], 0), vec!["a", "b", "c", "d"]);
        assert_eq!(collect(vec![Segment::plain("日\n\nx")], 1), vec!["日", "", "x"]);
    }

    #[test]
    fn test_split_lines_max_lines() {
        let lines: Vec<_> = split_lines(vec![Segment::plain("abcdef")], 2, Some(2)).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[1]), "cd");
    }

    #[test]
    fn test_split_lines_preserves_styles() {
        let red = Style::plain().fg(Color::RED);
        let lines: Vec<_> = split_lines(vec![Segment::new("abcd", red)], 2, None).collect();
        assert!(lines.iter().flatten().all(|s| *s.style() == red));
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        let line = vec![Segment::plain("Hello"), Segment::plain(" World")];
        assert_eq!(texts(&truncate_with_ellipsis(&line, 7)), "Hello …");
        assert_eq!(texts(&truncate_with_ellipsis(&line, 11)), "Hello World");
        assert_eq!(texts(&truncate_with_ellipsis(&line, 1)), "…");
        assert!(truncate_with_ellipsis(&line, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_split_lines_respects_width(text in "[a-z \u{65e5}]{0,60}", width in 2usize..20) {
            for line in split_lines(vec![Segment::plain(text)], width, None) {
                prop_assert!(line_width(&line) <= width);
            }
        }

        #[test]
        fn prop_no_spurious_empty_lines(text in "[a-z\u{65e5}\n]{0,40}", width in 0usize..3) {
            let body = text.strip_suffix('\n').unwrap_or(&text);
            let expected = if text.is_empty() {
                0
            } else {
                body.split('\n').filter(|line| line.is_empty()).count()
            };
            let empty = split_lines(vec![Segment::plain(text)], width, None)
                .filter(Vec::is_empty)
                .count();
            prop_assert_eq!(empty, expected);
        }

        #[test]
        fn prop_split_lines_preserves_content(text in "[a-z ]{0,60}", width in 1usize..20) {
            let joined: String = split_lines(vec![Segment::plain(text.clone())], width, None)
                .map(|line| texts(&line))
                .collect();
            prop_assert_eq!(joined, text);
        }
    }
}
