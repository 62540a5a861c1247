//! # Framebuffer Graphics Module
//!
//! Pixel surfaces and the color palette used by the display console.
//!
//! ## Modules
//!
//! - `framebuffer`: `Surface` trait and the linear `FramebufferWriter`
//! - `color`: `Color` palette with its fixed RGB table
//!
//! ## Scrolling
//!
//! Surfaces have no notion of text lines. Scrolling is done by the
//! console copying whole scanlines upward with `Surface::copy_scanline`
//! and painting the exposed rows with `Surface::fill_scanline`.

pub mod framebuffer;
pub mod color;

pub use color::Color;
pub use framebuffer::{FrameInfo, FramebufferWriter, PixelFormat, Surface};
