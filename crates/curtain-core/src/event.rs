use crate::Point;

/// A pointer button as reported by the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Usually the left button. The only one that drags or resizes.
    Primary,
    Middle,
    Secondary,
    /// Wheel "buttons" and anything beyond the first three.
    Other(u8),
}

impl Button {
    /// Maps a conventional 1-based button number (X11 numbering).
    pub fn from_number(n: u8) -> Self {
        match n {
            1 => Self::Primary,
            2 => Self::Middle,
            3 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A platform-agnostic input event for the overlay window.
///
/// Platform crates translate raw window-system events into these
/// variants; everything the overlay does not react to is dropped
/// before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A button went down. `local` is relative to the window, `root`
    /// is the same position in screen coordinates.
    ButtonPress {
        button: Button,
        local: Point,
        root: Point,
    },

    /// A button was released.
    ButtonRelease { button: Button },

    /// The pointer moved over the window, or anywhere while a button
    /// grab is active.
    Motion { local: Point, root: Point },

    /// The pointer entered the window.
    Enter,

    /// The pointer left the window.
    Leave,

    /// Part of the window needs repainting.
    Expose,

    /// The user or window manager asked the window to close.
    CloseRequested,
}
