/// Stroke weight requested from the font engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Slant requested from the font engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Regular,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Condensed,
    Regular,
    Expanded,
}

/// Resolution used to turn a point size into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dpi {
    /// Whatever the attached screen reports.
    Native,
    Fixed(u32),
}

/// Everything the font engine needs to pick a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor<'a> {
    /// `None` selects the engine's default family.
    pub family: Option<&'a str>,
    /// Size in points.
    pub size: i32,
    pub dpi: Dpi,
    pub weight: Weight,
    pub slant: Slant,
    pub width: Width,
    pub monospace: bool,
    /// Language hint such as `en` or `ru-RU`.
    pub lang: Option<&'a str>,
    /// ISO 15924 script tag such as `Latn`.
    pub script: Option<&'a str>,
}

impl Default for FontDescriptor<'_> {
    fn default() -> Self {
        Self {
            family: None,
            size: 12,
            dpi: Dpi::Native,
            weight: Weight::Regular,
            slant: Slant::Regular,
            width: Width::Regular,
            monospace: false,
            lang: None,
            script: None,
        }
    }
}
