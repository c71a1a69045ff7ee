//! Converting pointer displacement into new window geometry.
//!
//! These are pure functions over [`Rect`] so they can be tested without
//! a display server. The platform crate reads a geometry snapshot when a
//! drag starts and applies whatever [`update`] returns on every motion
//! event.

use crate::{Point, Rect, Region};

/// Smallest size the overlay may be resized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize {
    pub width: i32,
    pub height: i32,
}

impl MinSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for MinSize {
    fn default() -> Self {
        Self::new(50, 50)
    }
}

/// Computes the window geometry for a drag or resize.
///
/// `dx`/`dy` are the cumulative pointer displacement since the press,
/// in screen coordinates. The moving edges follow the pointer and the
/// opposite edges stay put. Width and height are then raised to `min`.
///
/// The position is not compensated when a dimension hits the floor: a
/// top-left resize dragged past the minimum keeps moving `x`/`y` while
/// the size stays at `min`, which shifts the window instead of pinning
/// its bottom-right corner.
pub fn update(region: Region, anchor: Rect, dx: i32, dy: i32, min: MinSize) -> Rect {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = anchor;

    let (nx, ny, nw, nh) = match region {
        Region::Drag => (x + dx, y + dy, w, h),
        Region::ResizeTopLeft => (x + dx, y + dy, w - dx, h - dy),
        Region::ResizeTopRight => (x, y + dy, w + dx, h - dy),
        Region::ResizeBottomLeft => (x + dx, y, w - dx, h + dy),
        Region::ResizeBottomRight => (x, y, w + dx, h + dy),
    };

    Rect::new(nx, ny, nw.max(min.width), nh.max(min.height))
}

/// State captured when the primary button goes down.
///
/// Lives for exactly one press/release interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Which handle the press landed on.
    pub region: Region,
    /// Pointer position in screen coordinates at press time.
    pub anchor_pointer: Point,
    /// Window geometry at press time.
    pub anchor_geometry: Rect,
}

impl DragSession {
    /// Starts a session. `local` is the press position relative to the
    /// window, `root` the same position in screen coordinates.
    pub fn begin(local: Point, root: Point, anchor_geometry: Rect, margin: i32) -> Self {
        let region = crate::region::classify(
            local.x,
            local.y,
            anchor_geometry.width,
            anchor_geometry.height,
            margin,
        );
        Self {
            region,
            anchor_pointer: root,
            anchor_geometry,
        }
    }

    /// Geometry for the pointer now being at `root` (screen coordinates).
    pub fn geometry_at(&self, root: Point, min: MinSize) -> Rect {
        let (dx, dy) = root.delta_from(self.anchor_pointer);
        update(self.region, self.anchor_geometry, dx, dy, min)
    }
}
