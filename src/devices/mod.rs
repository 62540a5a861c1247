//! Device Subsystem
//!
//! Output devices driven by the console:
//! - `framebuffer`: pixel surfaces and the color palette
pub mod framebuffer;
