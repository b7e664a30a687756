//! Writing rendered segments to a terminal or a string.
//!
//! Styled output goes through crossterm commands queued on a buffered
//! writer; style escapes are only emitted when the style changes between
//! segments. Colors go out as 24-bit RGB, or not at all in
//! [`ColorMode::Mono`].

use crate::error::TuiError;
use boxframe_core::{Color, ColorMode, Modifiers, RenderOptions, Renderable, Segment, Style};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use std::io::{self, BufWriter, Write};
use tracing::debug;

const MODIFIER_ATTRIBUTES: [(Modifiers, Attribute); 8] = [
    (Modifiers::BOLD, Attribute::Bold),
    (Modifiers::ITALIC, Attribute::Italic),
    (Modifiers::UNDERLINE, Attribute::Underlined),
    (Modifiers::STRIKETHROUGH, Attribute::CrossedOut),
    (Modifiers::DIM, Attribute::Dim),
    (Modifiers::BLINK, Attribute::SlowBlink),
    (Modifiers::REVERSE, Attribute::Reverse),
    (Modifiers::HIDDEN, Attribute::Hidden),
];

/// Concatenate segment text, turning line breaks into `\n`.
#[must_use]
pub fn to_plain_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.is_line_break() {
                "\n"
            } else {
                segment.text()
            }
        })
        .collect()
}

/// Render `renderable` at the options' width and return the plain text.
#[must_use]
pub fn render_plain(renderable: &dyn Renderable, options: &RenderOptions) -> String {
    to_plain_text(&renderable.render(options, options.width))
}

/// Write segments with their styles as terminal escape sequences.
///
/// Styles are reset before every line break and at the end, so the output
/// never leaks attributes into whatever follows it.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn write_segments<W: Write>(
    writer: &mut W,
    segments: &[Segment],
    color_mode: ColorMode,
) -> io::Result<()> {
    let mut out = BufWriter::with_capacity(8192, writer);
    let mut current = Style::plain();
    let mut style_changes = 0usize;

    for segment in segments {
        if segment.is_line_break() {
            if !current.is_plain() {
                reset(&mut out)?;
                current = Style::plain();
            }
            queue!(out, Print('\n'))?;
            continue;
        }

        let style = *segment.style();
        if style != current {
            apply_style(&mut out, style, color_mode)?;
            current = style;
            style_changes += 1;
        }
        queue!(out, Print(segment.text()))?;
    }

    if !current.is_plain() {
        reset(&mut out)?;
    }
    out.flush()?;
    debug!(segments = segments.len(), style_changes, "segments written");
    Ok(())
}

/// Render and write to stdout.
///
/// # Errors
///
/// Returns [`TuiError::Io`] if stdout cannot be written.
pub fn print(renderable: &dyn Renderable, options: &RenderOptions) -> Result<(), TuiError> {
    let segments = renderable.render(options, options.width);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_segments(&mut lock, &segments, options.capabilities.color_mode)?;
    Ok(())
}

fn reset<W: Write>(writer: &mut W) -> io::Result<()> {
    queue!(writer, SetAttribute(Attribute::Reset), ResetColor)
}

fn apply_style<W: Write>(writer: &mut W, style: Style, color_mode: ColorMode) -> io::Result<()> {
    // Attribute reset must come before colors; it clears them too.
    reset(writer)?;

    if color_mode.has_color() {
        if let Some(fg) = style.fg {
            queue!(writer, SetForegroundColor(rgb(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(writer, SetBackgroundColor(rgb(bg)))?;
        }
    }
    for (modifier, attribute) in MODIFIER_ATTRIBUTES {
        if style.modifiers.contains(modifier) {
            queue!(writer, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Transparent lets the terminal default show through.
fn rgb(color: Color) -> CrosstermColor {
    if color.is_transparent() {
        return CrosstermColor::Reset;
    }
    let (r, g, b) = color.to_rgb8();
    CrosstermColor::Rgb { r, g, b }
}
