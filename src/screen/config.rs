use embedded_graphics::pixelcolor::Rgb888;

use super::style::FontRequest;

/// Settings applied when a display is first set up.
#[derive(Debug, Clone, Copy)]
pub struct ScreenConfig {
    /// Color used by `clear`, the lazy clear and rows exposed by scrolling.
    pub background: Rgb888,
    /// Font loaded at setup. `None` leaves the display without a font until
    /// `set_font` succeeds.
    pub default_font: Option<FontRequest<'static>>,
}

impl ScreenConfig {
    /// White background with the 12 point default font, as on the EV3 brick.
    pub fn ev3() -> Self {
        Self {
            background: Rgb888::new(255, 255, 255),
            default_font: Some(FontRequest::new()),
        }
    }

    /// White background, no font loaded at setup.
    pub fn without_font() -> Self {
        Self {
            default_font: None,
            ..Self::ev3()
        }
    }

    pub fn with_background(self, background: Rgb888) -> Self {
        Self { background, ..self }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::ev3()
    }
}
