//! # Bitmap Font Engine
//!
//! Resolves font descriptors against the fixed-size bitmap faces shipped
//! with embedded-graphics.
//!
//! ## Face selection
//!
//! 1. The script (or, failing that, the language) picks a glyph set:
//!    ISO-8859-1 for Latin, ISO-8859-5 for Cyrillic, ISO-8859-7 for Greek.
//! 2. The point size is converted to a pixel height using the descriptor
//!    DPI, or the engine's native DPI.
//! 3. Among the faces with the requested weight and slant, the tallest one
//!    that fits the pixel height wins. If none fits, the shortest is used.

use core::fmt;

use embedded_graphics::{
    mono_font::{iso_8859_1, iso_8859_5, iso_8859_7, MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{renderer::TextRenderer, Baseline, Text},
};
use libm::roundf;

use super::{Dpi, Font, FontDescriptor, FontEngine, Slant, Weight, Width};
use crate::error::FontError;

/// Resolution of the EV3 LCD as reported to text layout: one point per pixel.
pub const DEFAULT_DPI: u32 = 72;

/// Families answered by this engine. All of them are the X11 "fixed" faces.
const FAMILIES: [&str; 4] = ["fixed", "misc-fixed", "monospace", "mono"];

/// Languages written in Cyrillic unless a script says otherwise.
const CYRILLIC_LANGS: [&str; 7] = ["ru", "uk", "be", "bg", "sr", "mk", "kk"];

/// Glyph repertoire of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
}

impl Script {
    /// Parse an ISO 15924 tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("Latn") {
            Some(Script::Latin)
        } else if tag.eq_ignore_ascii_case("Cyrl") {
            Some(Script::Cyrillic)
        } else if tag.eq_ignore_ascii_case("Grek") {
            Some(Script::Greek)
        } else {
            None
        }
    }

    /// Usual script of a language tag such as `ru` or `el-GR`.
    pub fn for_lang(lang: &str) -> Self {
        let primary = lang.split(|c| c == '-' || c == '_').next().unwrap_or(lang);
        if CYRILLIC_LANGS.iter().any(|l| primary.eq_ignore_ascii_case(l)) {
            Script::Cyrillic
        } else if primary.eq_ignore_ascii_case("el") {
            Script::Greek
        } else {
            Script::Latin
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Script::Latin => "Latn",
            Script::Cyrillic => "Cyrl",
            Script::Greek => "Grek",
        }
    }

    fn faces(self) -> &'static [Face] {
        match self {
            Script::Latin => LATIN_FACES,
            Script::Cyrillic => CYRILLIC_FACES,
            Script::Greek => GREEK_FACES,
        }
    }
}

struct Face {
    font: &'static MonoFont<'static>,
    weight: Weight,
    slant: Slant,
}

impl Face {
    const fn new(font: &'static MonoFont<'static>, weight: Weight, slant: Slant) -> Self {
        Self { font, weight, slant }
    }

    fn height(&self) -> u32 {
        self.font.character_size.height
    }

    fn width(&self) -> u32 {
        self.font.character_size.width
    }
}

macro_rules! faces {
    ($set:ident) => {
        &[
            Face::new(&$set::FONT_4X6, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_5X7, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_5X8, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_6X9, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_6X10, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_6X12, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_6X13, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_6X13_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_6X13_ITALIC, Weight::Regular, Slant::Italic),
            Face::new(&$set::FONT_7X13, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_7X13_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_7X13_ITALIC, Weight::Regular, Slant::Italic),
            Face::new(&$set::FONT_7X14, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_7X14_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_8X13, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_8X13_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_8X13_ITALIC, Weight::Regular, Slant::Italic),
            Face::new(&$set::FONT_9X15, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_9X15_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_9X18, Weight::Regular, Slant::Regular),
            Face::new(&$set::FONT_9X18_BOLD, Weight::Bold, Slant::Regular),
            Face::new(&$set::FONT_10X20, Weight::Regular, Slant::Regular),
        ]
    };
}

const LATIN_FACES: &[Face] = faces!(iso_8859_1);
const CYRILLIC_FACES: &[Face] = faces!(iso_8859_5);
const GREEK_FACES: &[Face] = faces!(iso_8859_7);

/// Handle to one bitmap face.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MonoFace {
    script: Script,
    index: usize,
}

impl MonoFace {
    fn face(&self) -> &'static Face {
        &self.script.faces()[self.index]
    }

    fn font(&self) -> &'static MonoFont<'static> {
        self.face().font
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn weight(&self) -> Weight {
        self.face().weight
    }

    pub fn slant(&self) -> Slant {
        self.face().slant
    }

    /// Size of one glyph cell.
    pub fn glyph_size(&self) -> Size {
        self.font().character_size
    }

    fn style(&self, color: Option<Rgb888>) -> MonoTextStyle<'static, Rgb888> {
        let mut style = MonoTextStyle::new(self.font(), Rgb888::BLACK);
        style.text_color = color;
        style
    }
}

impl fmt::Debug for MonoFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.glyph_size();
        f.debug_struct("MonoFace")
            .field("script", &self.script.tag())
            .field("glyph", &format_args!("{}x{}", size.width, size.height))
            .field("weight", &self.weight())
            .field("slant", &self.slant())
            .finish()
    }
}

impl Font for MonoFace {
    fn line_height(&self) -> u32 {
        self.style(None).line_height()
    }

    fn text_width(&self, text: &str) -> u32 {
        let metrics = self
            .style(None)
            .measure_string(text, Point::zero(), Baseline::Top);
        metrics.next_position.x.max(0) as u32
    }

    fn draw<D>(&self, text: &str, origin: Point, color: Option<Rgb888>, target: &mut D) -> Point
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Text::with_baseline(text, origin, self.style(color), Baseline::Top)
            .draw(target)
            .unwrap_or(origin)
    }
}

/// Font engine serving the embedded-graphics bitmap fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoFontEngine {
    native_dpi: u32,
}

impl MonoFontEngine {
    pub const fn new(native_dpi: u32) -> Self {
        Self { native_dpi }
    }

    pub fn native_dpi(&self) -> u32 {
        self.native_dpi
    }

    /// Pixel height of a point size at the given resolution.
    pub fn pixel_height(&self, size: i32, dpi: Dpi) -> u32 {
        let dpi = match dpi {
            Dpi::Native => self.native_dpi,
            Dpi::Fixed(dpi) => dpi,
        };
        roundf(size as f32 * dpi as f32 / 72.0).max(0.0) as u32
    }

    fn script_for(descriptor: &FontDescriptor<'_>) -> Result<Script, FontError> {
        match (descriptor.script, descriptor.lang) {
            (Some(tag), _) => Script::from_tag(tag).ok_or(FontError::UnsupportedScript),
            (None, Some(lang)) => Ok(Script::for_lang(lang)),
            (None, None) => Ok(Script::Latin),
        }
    }
}

impl Default for MonoFontEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

impl FontEngine for MonoFontEngine {
    type Font = MonoFace;

    fn load(&self, descriptor: &FontDescriptor<'_>) -> Result<MonoFace, FontError> {
        if let Some(family) = descriptor.family {
            if !FAMILIES.iter().any(|f| family.eq_ignore_ascii_case(f)) {
                return Err(FontError::UnknownFamily);
            }
        }
        if descriptor.size <= 0 {
            return Err(FontError::InvalidSize(descriptor.size));
        }
        if descriptor.width != Width::Regular {
            return Err(FontError::NoMatchingFace);
        }

        let script = Self::script_for(descriptor)?;
        let target = self.pixel_height(descriptor.size, descriptor.dpi);

        // Every face here is monospaced, so `descriptor.monospace` always holds.
        let candidates = script
            .faces()
            .iter()
            .enumerate()
            .filter(|(_, face)| face.weight == descriptor.weight && face.slant == descriptor.slant);

        let fitting = candidates
            .clone()
            .filter(|(_, face)| face.height() <= target)
            .max_by_key(|(_, face)| (face.height(), face.width()));
        let chosen = fitting.or_else(|| candidates.min_by_key(|(_, face)| (face.height(), face.width())));

        match chosen {
            Some((index, _)) => Ok(MonoFace { script, index }),
            None => Err(FontError::NoMatchingFace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(descriptor: FontDescriptor<'_>) -> Result<MonoFace, FontError> {
        MonoFontEngine::default().load(&descriptor)
    }

    #[test]
    fn test_default_descriptor_picks_six_by_twelve() {
        let face = load(FontDescriptor::default()).unwrap();
        assert_eq!(face.glyph_size(), Size::new(6, 12));
        assert_eq!(face.script(), Script::Latin);
        assert_eq!(face.line_height(), 12);
    }

    #[test]
    fn test_text_width_is_advance() {
        let face = load(FontDescriptor::default()).unwrap();
        assert_eq!(face.text_width(""), 0);
        assert_eq!(face.text_width("AB"), 12);
        assert_eq!(face.text_width("hello"), 30);
    }

    #[test]
    fn test_size_picks_tallest_fitting_face() {
        let cases = [
            (6, Size::new(4, 6)),
            (13, Size::new(8, 13)),
            (16, Size::new(9, 15)),
            (20, Size::new(10, 20)),
            (72, Size::new(10, 20)),
        ];
        for (size, glyph) in cases {
            let face = load(FontDescriptor { size, ..Default::default() }).unwrap();
            assert_eq!(face.glyph_size(), glyph, "size {}", size);
        }
    }

    #[test]
    fn test_tiny_size_falls_back_to_smallest_face() {
        let face = load(FontDescriptor { size: 2, ..Default::default() }).unwrap();
        assert_eq!(face.glyph_size(), Size::new(4, 6));
    }

    #[test]
    fn test_dpi_scales_point_size() {
        assert_eq!(MonoFontEngine::default().native_dpi(), DEFAULT_DPI);

        let engine = MonoFontEngine::new(96);
        assert_eq!(engine.native_dpi(), 96);
        assert_eq!(engine.pixel_height(12, Dpi::Native), 16);
        assert_eq!(engine.pixel_height(12, Dpi::Fixed(72)), 12);

        let face = engine.load(&FontDescriptor::default()).unwrap();
        assert_eq!(face.glyph_size(), Size::new(9, 15));
    }

    #[test]
    fn test_bold_and_italic_faces() {
        let bold = load(FontDescriptor { weight: Weight::Bold, ..Default::default() }).unwrap();
        assert_eq!(bold.weight(), Weight::Bold);
        assert_eq!(bold.glyph_size(), Size::new(6, 13));

        let italic = load(FontDescriptor { slant: Slant::Italic, size: 13, ..Default::default() }).unwrap();
        assert_eq!(italic.slant(), Slant::Italic);
        assert_eq!(italic.glyph_size(), Size::new(8, 13));
    }

    #[test]
    fn test_bold_italic_has_no_face() {
        let result = load(FontDescriptor {
            weight: Weight::Bold,
            slant: Slant::Italic,
            ..Default::default()
        });
        assert_eq!(result, Err(FontError::NoMatchingFace));
    }

    #[test]
    fn test_family_names() {
        for family in ["fixed", "Fixed", "misc-fixed", "monospace"] {
            assert!(load(FontDescriptor { family: Some(family), ..Default::default() }).is_ok());
        }
        let result = load(FontDescriptor { family: Some("Lucida"), ..Default::default() });
        assert_eq!(result, Err(FontError::UnknownFamily));
    }

    #[test]
    fn test_invalid_size_and_width() {
        assert_eq!(load(FontDescriptor { size: 0, ..Default::default() }), Err(FontError::InvalidSize(0)));
        for width in [Width::Condensed, Width::Expanded] {
            assert_eq!(
                load(FontDescriptor { width, ..Default::default() }),
                Err(FontError::NoMatchingFace)
            );
        }
    }

    #[test]
    fn test_script_and_language_select_glyph_set() {
        let cyrillic = load(FontDescriptor { script: Some("Cyrl"), ..Default::default() }).unwrap();
        assert_eq!(cyrillic.script(), Script::Cyrillic);

        let greek = load(FontDescriptor { lang: Some("el-GR"), ..Default::default() }).unwrap();
        assert_eq!(greek.script(), Script::Greek);

        let russian = load(FontDescriptor { lang: Some("ru_RU"), ..Default::default() }).unwrap();
        assert_eq!(russian.script(), Script::Cyrillic);

        // An explicit script wins over the language.
        let latin = load(FontDescriptor { lang: Some("ru"), script: Some("Latn"), ..Default::default() }).unwrap();
        assert_eq!(latin.script(), Script::Latin);

        let unknown = load(FontDescriptor { script: Some("Hani"), ..Default::default() });
        assert_eq!(unknown, Err(FontError::UnsupportedScript));

        for script in [Script::Latin, Script::Cyrillic, Script::Greek] {
            assert_eq!(Script::from_tag(script.tag()), Some(script));
        }
        assert_eq!(Script::from_tag("grek"), Some(Script::Greek));
    }

    #[test]
    fn test_transparent_text_draws_nothing() {
        use crate::devices::framebuffer::{FrameInfo, FramebufferWriter};

        let face = load(FontDescriptor::default()).unwrap();
        let mut fb = FramebufferWriter::in_memory(FrameInfo::gray8(20, 12));
        let next = face.draw("AB", Point::zero(), None, &mut fb);
        assert_eq!(next.x, 12);
        assert!(fb.buffer().iter().all(|&b| b == 0));

        face.draw("AB", Point::zero(), Some(Rgb888::WHITE), &mut fb);
        assert!(fb.buffer().iter().any(|&b| b == 255));
    }
}
