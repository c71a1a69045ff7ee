pub mod color;
pub mod config;
pub mod decoration;
pub mod error;
pub mod event;
pub mod geometry;
pub mod interaction;
pub mod log;
pub mod rect;
pub mod region;
pub mod runner;
pub mod window;

pub use color::Color;
pub use config::Config;
pub use decoration::{Decorations, Shape, Style, StylePreset};
pub use error::{Error, Result};
pub use event::{Button, InputEvent};
pub use geometry::{DragSession, MinSize};
pub use rect::{Point, Rect};
pub use region::Region;
pub use runner::{Settings, run};
pub use window::{OverlayWindow, WindowOptions};
