//! Hit-testing a pointer position against the overlay's hot regions.
//!
//! The window body moves the window; the four corners resize it. Edges
//! are not separate handles: a press near an edge but away from a
//! corner is a plain drag.

/// The part of the overlay a pointer position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Anywhere that is not a corner handle. Moves the window.
    Drag,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

impl Region {
    /// All regions, in hit-test precedence order (corners first).
    pub const ALL: [Region; 5] = [
        Region::ResizeTopLeft,
        Region::ResizeTopRight,
        Region::ResizeBottomLeft,
        Region::ResizeBottomRight,
        Region::Drag,
    ];

    /// Returns `true` for the four corner handles.
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Drag)
    }

    /// Short lowercase name, used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::ResizeTopLeft => "top-left",
            Self::ResizeTopRight => "top-right",
            Self::ResizeBottomLeft => "bottom-left",
            Self::ResizeBottomRight => "bottom-right",
        }
    }
}

/// Classifies a window-local pointer position.
///
/// `px`/`py` are relative to the window's top-left corner and `margin`
/// is the size of the square corner handles. Rules are checked in a
/// fixed order (top-left, top-right, bottom-left, bottom-right) and the
/// first match wins, so on windows no larger than `2 * margin` the
/// earlier corner takes the overlapping area.
pub fn classify(px: i32, py: i32, width: i32, height: i32, margin: i32) -> Region {
    let left = px <= margin;
    let right = px >= width - margin;
    let top = py <= margin;
    let bottom = py >= height - margin;

    if left && top {
        Region::ResizeTopLeft
    } else if right && top {
        Region::ResizeTopRight
    } else if left && bottom {
        Region::ResizeBottomLeft
    } else if right && bottom {
        Region::ResizeBottomRight
    } else {
        Region::Drag
    }
}
