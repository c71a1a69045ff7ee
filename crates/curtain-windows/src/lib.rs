//! Windows backend for Curtain.
//!
//! [`Win32Overlay`] implements [`curtain_core::OverlayWindow`] as a
//! borderless topmost popup driven by the thread's message queue.

#![cfg(windows)]

mod dpi;
mod error;
mod message;
mod window;

pub use dpi::enable_dpi_awareness;
pub use error::WindowsError;
pub use window::Win32Overlay;
