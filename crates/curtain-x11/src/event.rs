use curtain_core::{Button, InputEvent, Point};
use x11rb::protocol::Event;
use x11rb::protocol::xproto::{Atom, EventMask};

/// Events the overlay selects on its window.
pub fn event_mask() -> EventMask {
    EventMask::EXPOSURE
        | EventMask::BUTTON_PRESS
        | EventMask::BUTTON_RELEASE
        | EventMask::BUTTON1_MOTION
        | EventMask::POINTER_MOTION
        | EventMask::ENTER_WINDOW
        | EventMask::LEAVE_WINDOW
        | EventMask::STRUCTURE_NOTIFY
}

/// Translates a raw X event into an [`InputEvent`].
///
/// Returns `None` for events the overlay ignores, including all but the
/// last expose in a series.
pub fn translate(event: &Event, delete_window: Atom) -> Option<InputEvent> {
    match event {
        Event::ButtonPress(e) => Some(InputEvent::ButtonPress {
            button: Button::from_number(e.detail),
            local: point(e.event_x, e.event_y),
            root: point(e.root_x, e.root_y),
        }),
        Event::ButtonRelease(e) => Some(InputEvent::ButtonRelease {
            button: Button::from_number(e.detail),
        }),
        Event::MotionNotify(e) => Some(InputEvent::Motion {
            local: point(e.event_x, e.event_y),
            root: point(e.root_x, e.root_y),
        }),
        Event::EnterNotify(_) => Some(InputEvent::Enter),
        Event::LeaveNotify(_) => Some(InputEvent::Leave),
        Event::Expose(e) if e.count == 0 => Some(InputEvent::Expose),
        Event::ClientMessage(e) if e.format == 32 && e.data.as_data32()[0] == delete_window => {
            Some(InputEvent::CloseRequested)
        }
        _ => None,
    }
}

fn point(x: i16, y: i16) -> Point {
    Point::new(i32::from(x), i32::from(y))
}
