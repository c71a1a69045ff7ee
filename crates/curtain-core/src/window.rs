use crate::decoration::Shape;
use crate::{Color, InputEvent, Rect, Region, Result};

/// What a platform backend needs to create the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    /// Initial screen geometry.
    pub geometry: Rect,
    pub title: String,
    /// Instance name reported to the window manager (`WM_CLASS` on X11).
    pub instance: String,
    /// Class name reported to the window manager.
    pub class: String,
    /// Whole-window opacity, `0.0..=1.0`.
    pub opacity: f64,
    pub background: Color,
    /// Color used to paint decorations.
    pub accent: Color,
}

impl WindowOptions {
    /// Opacity as a 32-bit cardinal (`0xFFFFFFFF` = opaque).
    pub fn opacity_cardinal(&self) -> u32 {
        (self.opacity.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32
    }

    /// Opacity as an 8-bit alpha value (`255` = opaque).
    pub fn opacity_alpha(&self) -> u8 {
        (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Platform-agnostic overlay window.
///
/// Each platform crate (e.g. `curtain-x11`) provides its own
/// implementation. The runner only talks to the window through this
/// trait, which keeps the drag/resize engine testable with a fake.
pub trait OverlayWindow {
    /// Current size as the window system sees it.
    fn size(&self) -> Result<(i32, i32)>;

    /// Screen position of the window's top-left corner.
    fn position(&self) -> Result<(i32, i32)>;

    /// Moves and resizes the window in one request.
    fn apply_geometry(&mut self, rect: Rect) -> Result<()>;

    /// Blocks until the next input event arrives.
    fn next_event(&mut self) -> Result<InputEvent>;

    /// Repaints the whole window with its background.
    fn clear(&mut self) -> Result<()>;

    /// Draws decorations on top of the background.
    fn paint(&mut self, shapes: &[Shape]) -> Result<()>;

    /// Shows a cursor matching `region`, or the default cursor for `None`.
    fn set_cursor(&mut self, region: Option<Region>) -> Result<()>;

    /// Current geometry, assembled from [`size`](Self::size) and
    /// [`position`](Self::position).
    fn geometry(&self) -> Result<Rect> {
        Ok(Rect::from_parts(self.position()?, self.size()?))
    }
}
