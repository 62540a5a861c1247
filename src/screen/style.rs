use embedded_graphics::pixelcolor::Rgb888;
use log::trace;

use crate::error::ScreenError;
use crate::font::{Dpi, FontDescriptor, Slant, Weight, Width};

/// Arguments of `Display::set_font`.
///
/// Defaults: default family, 12 points, regular weight and slant, no
/// language or script hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRequest<'a> {
    pub family: Option<&'a str>,
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    pub lang: Option<&'a str>,
    pub script: Option<&'a str>,
}

impl<'a> FontRequest<'a> {
    pub const fn new() -> Self {
        Self {
            family: None,
            size: 12,
            bold: false,
            italic: false,
            monospace: false,
            lang: None,
            script: None,
        }
    }

    pub fn family(self, family: &'a str) -> Self {
        Self { family: Some(family), ..self }
    }

    pub fn size(self, size: i32) -> Self {
        Self { size, ..self }
    }

    pub fn bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub fn italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    pub fn monospace(self, monospace: bool) -> Self {
        Self { monospace, ..self }
    }

    pub fn lang(self, lang: &'a str) -> Self {
        Self { lang: Some(lang), ..self }
    }

    pub fn script(self, script: &'a str) -> Self {
        Self { script: Some(script), ..self }
    }

    /// Reject malformed input before anything is loaded.
    ///
    /// Script tags are ISO 15924 codes, so the length is counted in bytes.
    pub fn validate(&self) -> Result<(), ScreenError> {
        match self.script.map(str::len) {
            Some(len) if len != 4 => Err(ScreenError::InvalidScript { len }),
            _ => Ok(()),
        }
    }

    /// Full descriptor handed to the font engine.
    pub fn descriptor(&self) -> FontDescriptor<'a> {
        FontDescriptor {
            family: self.family,
            size: self.size,
            dpi: Dpi::Native,
            weight: if self.bold { Weight::Bold } else { Weight::Regular },
            slant: if self.italic { Slant::Italic } else { Slant::Regular },
            width: Width::Regular,
            monospace: self.monospace,
            lang: self.lang,
            script: self.script,
        }
    }
}

impl Default for FontRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Font and foreground color used for text output.
pub struct TextStyle<F> {
    font: F,
    color: Option<Rgb888>,
}

impl<F> TextStyle<F> {
    pub fn new(font: F, color: Option<Rgb888>) -> Self {
        Self { font, color }
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Foreground color; `None` is transparent.
    pub fn color(&self) -> Option<Rgb888> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Rgb888>) {
        self.color = color;
    }

    /// Swap in a new font, releasing the old one. The color is kept.
    pub fn replace_font(&mut self, font: F) {
        let previous = core::mem::replace(&mut self.font, font);
        drop(previous);
        trace!("released previous font");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = FontRequest::default();
        assert_eq!(request.size, 12);
        assert_eq!(request.family, None);
        assert!(!request.bold && !request.italic && !request.monospace);
        assert_eq!(request.descriptor(), FontDescriptor::default());
    }

    #[test]
    fn test_descriptor_maps_flags() {
        let descriptor = FontRequest::new()
            .family("fixed")
            .size(20)
            .bold(true)
            .italic(true)
            .monospace(true)
            .lang("ru")
            .script("Cyrl")
            .descriptor();

        assert_eq!(descriptor.family, Some("fixed"));
        assert_eq!(descriptor.size, 20);
        assert_eq!(descriptor.dpi, Dpi::Native);
        assert_eq!(descriptor.weight, Weight::Bold);
        assert_eq!(descriptor.slant, Slant::Italic);
        assert_eq!(descriptor.width, Width::Regular);
        assert!(descriptor.monospace);
        assert_eq!(descriptor.lang, Some("ru"));
        assert_eq!(descriptor.script, Some("Cyrl"));
    }

    #[test]
    fn test_script_must_have_four_characters() {
        assert!(FontRequest::new().validate().is_ok());
        assert!(FontRequest::new().script("Latn").validate().is_ok());
        for script in ["", "Lat", "Latin", "Кирл"] {
            assert_eq!(
                FontRequest::new().script(script).validate(),
                Err(ScreenError::InvalidScript { len: script.len() })
            );
        }
    }

    #[test]
    fn test_replace_font_keeps_color() {
        let red = Some(Rgb888::new(255, 0, 0));
        let mut style = TextStyle::new(1u8, red);
        style.replace_font(2);
        assert_eq!(*style.font(), 2);
        assert_eq!(style.color(), red);
    }
}
