//! # Screen
//!
//! Drawing and text output for a single display.
//!
//! ## Layout
//!
//! - `display`: the `Display` state, lazy clear and the drawing primitives
//! - `console`: `print` and scrolling
//! - `style`: font requests and the current text style
//! - `config`: setup options
//! - `clip`: keeps out-of-range coordinates away from the rasterizer
//!
//! ## Global access
//!
//! A device has one screen, and every part of a program should draw to the
//! same one. `Screen` is a slot meant for a `static`: the first `init` builds
//! the `Display`, later calls hand back the same instance.
//!
//! ```ignore
//! static SCREEN: Screen<FramebufferWriter<&'static mut [u8]>> = Screen::new();
//!
//! let display = SCREEN.init(ScreenConfig::ev3(), || FramebufferWriter::new(buffer, info));
//! display.lock().print_str("Hello")?;
//! ```

mod clip;
pub mod config;
pub mod console;
pub mod display;
pub mod style;

pub use config::ScreenConfig;
pub use console::PrintOptions;
pub use display::Display;
pub use style::{FontRequest, TextStyle};

use log::info;
use spin::{Mutex, Once};

use crate::devices::framebuffer::Surface;
use crate::font::{FontEngine, MonoFontEngine};

/// Process-wide home of the one `Display`.
pub struct Screen<S, E = MonoFontEngine>
where
    E: FontEngine,
{
    display: Once<Mutex<Display<S, E>>>,
}

impl<S, E> Screen<S, E>
where
    S: Surface,
    E: FontEngine,
{
    pub const fn new() -> Self {
        Self { display: Once::new() }
    }

    /// Set up the display with the default engine, or return the existing
    /// one. `surface` only runs the first time.
    pub fn init<F>(&self, config: ScreenConfig, surface: F) -> &Mutex<Display<S, E>>
    where
        F: FnOnce() -> S,
        E: Default,
    {
        self.init_with_engine(config, surface, E::default)
    }

    /// Like `init`, with a caller-supplied font engine.
    pub fn init_with_engine<F, G>(&self, config: ScreenConfig, surface: F, engine: G) -> &Mutex<Display<S, E>>
    where
        F: FnOnce() -> S,
        G: FnOnce() -> E,
    {
        self.display.call_once(|| {
            info!("initializing screen");
            Mutex::new(Display::new(surface(), engine(), config))
        })
    }

    /// The display, if `init` has run.
    pub fn get(&self) -> Option<&Mutex<Display<S, E>>> {
        self.display.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.display.is_completed()
    }
}

impl<S, E> Default for Screen<S, E>
where
    S: Surface,
    E: FontEngine,
{
    fn default() -> Self {
        Self::new()
    }
}
