//! Color palette and resolution to concrete RGB values
use embedded_graphics::pixelcolor::Rgb888;

/// Closed set of colors accepted by the drawing operations.
///
/// The RGB values follow the standard web (CSS) palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
    /// Transparent: drawing with it puts no pixels down.
    None = 0,
    #[default]
    Black = 1,
    Blue = 2,
    Green = 3,
    Yellow = 4,
    Red = 5,
    White = 6,
    Brown = 7,
    Orange = 8,
    Purple = 9,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::None,
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::White,
        Color::Brown,
        Color::Orange,
        Color::Purple,
    ];

    /// Look up a palette entry by its raw value.
    pub const fn from_raw(value: u8) -> Option<Color> {
        match value {
            0 => Some(Color::None),
            1 => Some(Color::Black),
            2 => Some(Color::Blue),
            3 => Some(Color::Green),
            4 => Some(Color::Yellow),
            5 => Some(Color::Red),
            6 => Some(Color::White),
            7 => Some(Color::Brown),
            8 => Some(Color::Orange),
            9 => Some(Color::Purple),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Concrete color for this entry, `None` for the transparent entry.
    pub const fn to_rgb888(self) -> Option<Rgb888> {
        match self {
            Color::None => None,
            Color::Black => Some(Rgb888::new(0, 0, 0)),
            Color::Blue => Some(Rgb888::new(0, 0, 255)),
            Color::Green => Some(Rgb888::new(0, 128, 0)),
            Color::Yellow => Some(Rgb888::new(255, 255, 0)),
            Color::Red => Some(Rgb888::new(255, 0, 0)),
            Color::White => Some(Rgb888::new(255, 255, 255)),
            Color::Brown => Some(Rgb888::new(165, 42, 42)),
            Color::Orange => Some(Rgb888::new(255, 165, 0)),
            Color::Purple => Some(Rgb888::new(128, 0, 128)),
        }
    }
}

/// Resolve a raw palette value. Unknown values fall back to black.
pub fn resolve_raw(value: u8) -> Option<Rgb888> {
    Color::from_raw(value)
        .unwrap_or(Color::Black)
        .to_rgb888()
}

impl From<Color> for Option<Rgb888> {
    fn from(color: Color) -> Self {
        color.to_rgb888()
    }
}
