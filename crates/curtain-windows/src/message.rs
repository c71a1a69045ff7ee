//! Decoding of mouse window messages.

use curtain_core::{Button, Rect};
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_RBUTTONDOWN, WM_RBUTTONUP,
};

/// Splits a mouse-message `LPARAM` into signed client coordinates.
///
/// The words are sign-extended because captured pointers report
/// positions left of or above the window as negative values.
pub fn split_lparam(lparam: isize) -> (i32, i32) {
    let x = (lparam & 0xFFFF) as u16 as i16;
    let y = ((lparam >> 16) & 0xFFFF) as u16 as i16;
    (i32::from(x), i32::from(y))
}

/// Maps a button message to the button and whether it went down.
pub fn button_message(msg: u32) -> Option<(Button, bool)> {
    match msg {
        WM_LBUTTONDOWN => Some((Button::Primary, true)),
        WM_LBUTTONUP => Some((Button::Primary, false)),
        WM_MBUTTONDOWN => Some((Button::Middle, true)),
        WM_MBUTTONUP => Some((Button::Middle, false)),
        WM_RBUTTONDOWN => Some((Button::Secondary, true)),
        WM_RBUTTONUP => Some((Button::Secondary, false)),
        _ => None,
    }
}

pub fn to_win_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.x + rect.width,
        bottom: rect.y + rect.height,
    }
}
