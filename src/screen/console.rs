//! # Scrolling Console
//!
//! Terminal-like text output on top of a pixel surface.
//!
//! ## Algorithm
//!
//! The printed values are joined into one string and split on `'\n'`.
//! Every piece after the first starts a new line: the cursor returns to
//! the left edge and moves down one line height. When the line would run
//! past the bottom edge, the whole surface is scrolled up by the overflow,
//! one scanline at a time, top to bottom. Since the source row is always
//! below the destination row, no row is overwritten before it is copied.
//!
//! The cursor stays right after the last glyph, so output that does not
//! end in a newline is continued by the next `print`.

use alloc::string::String;
use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb888;
use log::debug;

use super::clip::text_visible;
use super::display::Display;
use crate::devices::framebuffer::Surface;
use crate::error::ScreenError;
use crate::font::{Font, FontEngine};

/// Separator and terminator used by `Display::print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions<'a> {
    /// Inserted between two values.
    pub sep: &'a str,
    /// Appended after the last value.
    pub end: &'a str,
}

impl<'a> PrintOptions<'a> {
    pub fn sep(self, sep: &'a str) -> Self {
        Self { sep, ..self }
    }

    pub fn end(self, end: &'a str) -> Self {
        Self { end, ..self }
    }
}

impl Default for PrintOptions<'_> {
    fn default() -> Self {
        Self { sep: " ", end: "\n" }
    }
}

impl<S, E> Display<S, E>
where
    S: Surface,
    E: FontEngine,
{
    /// Print `values` at the cursor, scrolling as needed.
    pub fn print(&mut self, values: &[&dyn fmt::Display], options: PrintOptions<'_>) -> Result<(), ScreenError> {
        if self.style.is_none() {
            return Err(ScreenError::FontNotLoaded);
        }
        let text = join(values, options)?;

        self.clear_once();
        self.print_lines(&text);
        Ok(())
    }

    /// Print a single string followed by a newline.
    pub fn print_str(&mut self, text: &str) -> Result<(), ScreenError> {
        let values: [&dyn fmt::Display; 1] = [&text];
        self.print(&values, PrintOptions::default())
    }

    fn print_lines(&mut self, text: &str) {
        let size = self.size();
        let height = size.height as i32;
        let Self {
            surface,
            config,
            style,
            cursor,
            ..
        } = self;
        let Some(style) = style.as_ref() else {
            return;
        };
        let font = style.font();
        let line_height = font.line_height() as i32;

        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                cursor.x = 0;
                cursor.y += line_height;
            }

            let overflow = cursor.y + line_height - height;
            if overflow > 0 {
                scroll_up(surface, overflow as u32, height as u32, config.background);
                cursor.y -= overflow;
            }

            let width = font.text_width(line);
            if !line.is_empty() && text_visible(size, *cursor, width, line_height as u32) {
                font.draw(line, *cursor, style.color(), surface);
            }
            cursor.x = cursor.x.saturating_add(i32::try_from(width).unwrap_or(i32::MAX));
        }
    }
}

/// Move the surface content up by `rows`, painting the exposed rows.
fn scroll_up<S: Surface>(surface: &mut S, rows: u32, height: u32, background: Rgb888) {
    debug!("scrolling {} of {} rows", rows, height);

    for y in 0..height {
        let copied = y
            .checked_add(rows)
            .is_some_and(|src| surface.copy_scanline(src, y));
        if !copied {
            surface.fill_scanline(y, background);
        }
    }
}

fn join(values: &[&dyn fmt::Display], options: PrintOptions<'_>) -> Result<String, ScreenError> {
    let mut text = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            text.push_str(options.sep);
        }
        write!(text, "{}", value).map_err(|_| ScreenError::Format)?;
    }
    text.push_str(options.end);
    Ok(text)
}

/// Formatted output continues the current line; newlines come from the
/// formatted text itself.
impl<S, E> Write for Display<S, E>
where
    S: Surface,
    E: FontEngine,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let values: [&dyn fmt::Display; 1] = [&s];
        self.print(&values, PrintOptions::default().end(""))
            .map_err(|_| fmt::Error)
    }
}
