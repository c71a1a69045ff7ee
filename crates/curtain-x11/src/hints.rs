//! Property payloads and protocol-range conversions.

use curtain_core::Rect;
use x11rb::protocol::xproto::Rectangle;

const MWM_HINTS_DECORATIONS: u32 = 1 << 1;

/// `_MOTIF_WM_HINTS` asking the window manager for no decorations:
/// flags, functions, decorations, input mode, status.
pub fn motif_hints() -> [u32; 5] {
    [MWM_HINTS_DECORATIONS, 0, 0, 0, 0]
}

/// `WM_CLASS` payload: two NUL-terminated strings.
pub fn wm_class(instance: &str, class: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(instance.len() + class.len() + 2);
    bytes.extend_from_slice(instance.as_bytes());
    bytes.push(0);
    bytes.extend_from_slice(class.as_bytes());
    bytes.push(0);
    bytes
}

/// Clamps a coordinate to the 16-bit range the core protocol carries.
pub fn coord(v: i32) -> i16 {
    v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Clamps a width or height to a valid, non-zero 16-bit extent.
pub fn extent(v: i32) -> u16 {
    v.clamp(1, i32::from(u16::MAX)) as u16
}

pub fn rectangle(rect: Rect) -> Rectangle {
    Rectangle {
        x: coord(rect.x),
        y: coord(rect.y),
        width: extent(rect.width),
        height: extent(rect.height),
    }
}
