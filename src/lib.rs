//! # brickscreen
//!
//! Display console for small embedded screens: pixel, line, box and circle
//! primitives, font selection and a `print` that scrolls like a terminal.
//!
//! ## Modules
//!
//! - `devices::framebuffer`: the drawing surface and the named color palette
//! - `font`: font descriptors, the `FontEngine` seam and the bitmap engine
//! - `screen`: the `Display`, its console and the global `Screen` slot
//! - `error`: error types
//!
//! Logging goes through the `log` facade; the host installs the logger.

#![no_std]

extern crate alloc;

pub mod devices;
pub mod error;
pub mod font;
pub mod screen;

pub use devices::framebuffer::{color::resolve_raw, Color, FrameInfo, FramebufferWriter, PixelFormat, Surface};
pub use error::{ErrorKind, FontError, ScreenError};
pub use font::{Font, FontEngine, MonoFontEngine};
pub use screen::{Display, FontRequest, PrintOptions, Screen, ScreenConfig};
