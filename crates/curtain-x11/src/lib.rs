//! X11 backend for Curtain, built on `x11rb`.
//!
//! [`X11Overlay`] implements [`curtain_core::OverlayWindow`] for a
//! frameless, always-on-top window on the display named by `$DISPLAY`.

mod atoms;
mod cursor;
mod error;
mod event;
mod hints;
mod window;

pub use error::X11Error;
pub use window::X11Overlay;
