use core::fmt;

/// Broad class of a `ScreenError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller input, rejected before anything changed.
    Validation,
    /// Missing or unavailable resource. Prior state is left intact.
    Runtime,
}

/// Reasons a font engine can refuse a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    UnknownFamily,
    InvalidSize(i32),
    UnsupportedScript,
    NoMatchingFace,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::UnknownFamily => write!(f, "unknown font family"),
            FontError::InvalidSize(size) => write!(f, "invalid font size {}", size),
            FontError::UnsupportedScript => write!(f, "unsupported script"),
            FontError::NoMatchingFace => write!(f, "no face matches the requested style"),
        }
    }
}

impl core::error::Error for FontError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    /// A script tag was not exactly four characters long.
    InvalidScript { len: usize },
    /// Text output was requested before any font was loaded.
    FontNotLoaded,
    FontLoad(FontError),
    /// A value passed to `print` failed to format itself.
    Format,
}

impl ScreenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScreenError::InvalidScript { .. } => ErrorKind::Validation,
            ScreenError::FontNotLoaded | ScreenError::FontLoad(_) | ScreenError::Format => {
                ErrorKind::Runtime
            }
        }
    }
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::InvalidScript { .. } => write!(f, "script code must have 4 characters"),
            ScreenError::FontNotLoaded => write!(f, "Font is not loaded"),
            ScreenError::FontLoad(_) => write!(f, "Failed to load font"),
            ScreenError::Format => write!(f, "value could not be formatted"),
        }
    }
}

impl core::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ScreenError::FontLoad(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<FontError> for ScreenError {
    fn from(err: FontError) -> Self {
        ScreenError::FontLoad(err)
    }
}
