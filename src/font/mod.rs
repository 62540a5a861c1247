//! # Fonts
//!
//! Font loading and text metrics for the display console.
//!
//! ## Modules
//!
//! - `descriptor`: `FontDescriptor` and its weight/slant/width/DPI parts
//! - `mono`: `MonoFontEngine`, backed by the embedded-graphics bitmap fonts
//!
//! The console only talks to the `FontEngine` and `Font` traits. A loaded
//! font is a plain owned value; dropping it releases it.

pub mod descriptor;
pub mod mono;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

pub use crate::error::FontError;
pub use descriptor::{Dpi, FontDescriptor, Slant, Weight, Width};
pub use mono::{MonoFace, MonoFontEngine, Script};

/// A loaded font.
pub trait Font {
    /// Vertical distance between two printed lines, in pixels.
    fn line_height(&self) -> u32;

    /// Horizontal advance of `text`, in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Render `text` with its top-left corner at `origin`.
    ///
    /// A `None` color renders nothing. Returns the position following the
    /// last glyph.
    fn draw<D>(&self, text: &str, origin: Point, color: Option<Rgb888>, target: &mut D) -> Point
    where
        D: DrawTarget<Color = Rgb888>;
}

/// Source of fonts.
pub trait FontEngine {
    type Font: Font;

    fn load(&self, descriptor: &FontDescriptor<'_>) -> Result<Self::Font, FontError>;
}
