//! Display state, lazy clear and drawing primitives
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, RoundedRectangle},
};
use log::{debug, warn};

use super::clip;
use super::config::ScreenConfig;
use super::style::{FontRequest, TextStyle};
use crate::devices::framebuffer::{Color, Surface};
use crate::error::ScreenError;
use crate::font::{Font, FontEngine, MonoFontEngine};

/// A display surface with drawing primitives and a scrolling text console.
pub struct Display<S, E = MonoFontEngine>
where
    E: FontEngine,
{
    pub(super) surface: S,
    engine: E,
    pub(super) config: ScreenConfig,
    width: u32,
    height: u32,
    pub(super) cleared: bool,
    pub(super) style: Option<TextStyle<E::Font>>,
    pub(super) cursor: Point,
}

impl<S, E> Display<S, E>
where
    S: Surface,
    E: FontEngine,
{
    /// Take over a surface. The geometry is read once here, then the
    /// configured default font is loaded if there is one.
    pub fn new(surface: S, engine: E, config: ScreenConfig) -> Self {
        let Size { width, height } = surface.size();
        debug!("display {}x{} ready", width, height);

        let mut display = Self {
            surface,
            engine,
            config,
            width,
            height,
            cleared: false,
            style: None,
            cursor: Point::zero(),
        };

        if let Some(request) = config.default_font {
            match display.set_font(request) {
                Ok(()) => {}
                Err(ScreenError::FontLoad(cause)) => {
                    warn!("Could not load default font: {}", cause)
                }
                Err(err) => warn!("Could not load default font: {}", err),
            }
        }
        display
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Where the next printed character goes.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn has_font(&self) -> bool {
        self.style.is_some()
    }

    /// Current text color, `None` when no font is loaded.
    pub fn text_color(&self) -> Option<Option<Rgb888>> {
        self.style.as_ref().map(TextStyle::color)
    }

    /// Line height of the current font.
    pub fn line_height(&self) -> Option<u32> {
        self.style.as_ref().map(|style| style.font().line_height())
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub(super) fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    // =========================================================================
    // CLEARING
    // =========================================================================

    /// Wipe the surface to the background and move the cursor home.
    pub fn clear(&mut self) {
        self.wipe();
        self.cursor = Point::zero();
    }

    /// Wipe the surface if nothing has done so yet.
    pub(super) fn clear_once(&mut self) {
        if !self.cleared {
            self.wipe();
        }
    }

    fn wipe(&mut self) {
        self.surface.clear(self.config.background).ok();
        self.cleared = true;
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.clear_once();
        if let Some(color) = color.to_rgb888() {
            Pixel(Point::new(x, y), color).draw(&mut self.surface).ok();
        }
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.clear_once();
        let Some((start, end)) = clip::clip_line(self.size(), Point::new(x1, y1), Point::new(x2, y2)) else {
            return;
        };
        Line::new(start, end)
            .into_styled(outline(color))
            .draw(&mut self.surface)
            .ok();
    }

    /// Draw a box with corners `(x1, y1)` and `(x2, y2)`, both included.
    ///
    /// A positive `corner_radius` rounds the corners.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_box(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        corner_radius: i32,
        filled: bool,
        color: Color,
    ) {
        self.clear_once();
        let style = if filled { solid(color) } else { outline(color) };
        let radius = corner_radius.max(0) as u32;
        let rect = clip::clamp_box(self.size(), Point::new(x1, y1), Point::new(x2, y2), radius);

        if radius > 0 {
            let radius = Size::new_equal(radius.min(clip::MAX_RADIUS));
            RoundedRectangle::with_equal_corners(rect, radius)
                .into_styled(style)
                .draw(&mut self.surface)
                .ok();
        } else {
            rect.into_styled(style).draw(&mut self.surface).ok();
        }
    }

    /// Draw a circle centered on `(x, y)`.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, filled: bool, color: Color) {
        self.clear_once();
        let center = Point::new(x, y);
        let radius = radius.max(0) as u32;
        if !clip::circle_visible(self.size(), center, radius) {
            return;
        }

        if radius <= clip::MAX_RADIUS {
            let style = if filled { solid(color) } else { outline(color) };
            Circle::with_center(center, radius * 2 + 1)
                .into_styled(style)
                .draw(&mut self.surface)
                .ok();
        } else if let Some(color) = color.to_rgb888() {
            let pixels = clip::large_circle_points(self.size(), center, radius, filled)
                .map(|point| Pixel(point, color));
            self.surface.draw_iter(pixels).ok();
        }
    }

    /// Draw one line of text with its top-left corner at `(x, y)`.
    ///
    /// `color` becomes the text color for later output as well. The print
    /// cursor is not moved.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> Result<(), ScreenError> {
        if self.style.is_none() {
            return Err(ScreenError::FontNotLoaded);
        }
        self.clear_once();

        let size = self.size();
        let style = self.style.as_mut().ok_or(ScreenError::FontNotLoaded)?;
        style.set_color(color.to_rgb888());

        let origin = Point::new(x, y);
        let font = style.font();
        if clip::text_visible(size, origin, font.text_width(text), font.line_height()) {
            font.draw(text, origin, style.color(), &mut self.surface);
        }
        Ok(())
    }

    // =========================================================================
    // FONTS
    // =========================================================================

    /// Load a font and make it the current one.
    ///
    /// The text color survives a font change. Without a previous font the
    /// color starts out black.
    pub fn set_font(&mut self, request: FontRequest<'_>) -> Result<(), ScreenError> {
        request.validate()?;

        let font = self.engine.load(&request.descriptor()).map_err(|cause| {
            debug!("font {:?} rejected: {}", request, cause);
            ScreenError::FontLoad(cause)
        })?;
        debug!("font {:?} loaded, line height {}", request, font.line_height());

        if let Some(style) = &mut self.style {
            style.replace_font(font);
        } else {
            self.style = Some(TextStyle::new(font, Color::Black.to_rgb888()));
        }
        Ok(())
    }
}

fn outline(color: Color) -> PrimitiveStyle<Rgb888> {
    match color.to_rgb888() {
        Some(color) => PrimitiveStyle::with_stroke(color, 1),
        None => PrimitiveStyle::new(),
    }
}

fn solid(color: Color) -> PrimitiveStyle<Rgb888> {
    match color.to_rgb888() {
        Some(color) => PrimitiveStyle::with_fill(color),
        None => PrimitiveStyle::new(),
    }
}
