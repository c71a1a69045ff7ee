//! Cosmetic feedback drawn on top of the overlay.
//!
//! The engine never depends on anything here. A [`Decorations`] value
//! describes what to draw (a border frame, corner indicators) and
//! whether it only shows while the pointer is over the window; the
//! runner decides when to call into it.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// Named decoration presets selectable from config or the CLI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// A flat, undecorated block.
    Plain,
    /// A border frame that is always visible.
    Outlined,
    /// Border plus corner squares, shown only while hovering.
    #[default]
    Indicators,
}

impl StylePreset {
    pub fn style(self) -> Style {
        match self {
            Self::Plain => Style {
                border: false,
                indicators: false,
                hover: false,
            },
            Self::Outlined => Style {
                border: true,
                indicators: false,
                hover: false,
            },
            Self::Indicators => Style {
                border: true,
                indicators: true,
                hover: true,
            },
        }
    }
}

/// Which decorations are drawn and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Frame around the window edge.
    pub border: bool,
    /// Filled squares marking the four resize handles.
    pub indicators: bool,
    /// Only show decorations while the pointer is over the window.
    pub hover: bool,
}

/// Something to draw, in window-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A solid rectangle.
    Fill(Rect),
    /// A band of `thickness` pixels running along the inside of `rect`.
    Frame { rect: Rect, thickness: i32 },
}

impl Shape {
    /// Decomposes the shape into solid rectangles.
    ///
    /// Frames become four strips (top, bottom, left, right) that do not
    /// overlap. The thickness is capped so opposite strips never cross.
    pub fn fill_rects(&self) -> Vec<Rect> {
        match *self {
            Shape::Fill(r) => {
                if r.is_empty() {
                    Vec::new()
                } else {
                    vec![r]
                }
            }
            Shape::Frame { rect, thickness } => {
                let t = thickness.min(rect.width / 2).min(rect.height / 2);
                if t <= 0 || rect.is_empty() {
                    return Vec::new();
                }
                let inner_h = rect.height - 2 * t;
                let mut strips = vec![
                    Rect::new(rect.x, rect.y, rect.width, t),
                    Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
                    Rect::new(rect.x, rect.y + t, t, inner_h),
                    Rect::new(rect.x + rect.width - t, rect.y + t, t, inner_h),
                ];
                strips.retain(|r| !r.is_empty());
                strips
            }
        }
    }
}

/// Decoration settings resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorations {
    pub style: Style,
    pub border_width: i32,
    pub indicator_size: i32,
}

impl Decorations {
    /// Returns `true` if nothing would ever be drawn.
    pub fn is_empty(&self) -> bool {
        !(self.style.border && self.border_width > 0)
            && !(self.style.indicators && self.indicator_size > 0)
    }

    /// Shapes for a window of the given size.
    pub fn shapes(&self, width: i32, height: i32) -> Vec<Shape> {
        let mut shapes = Vec::new();

        if self.style.border && self.border_width > 0 {
            shapes.push(Shape::Frame {
                rect: Rect::new(0, 0, width, height),
                thickness: self.border_width,
            });
        }

        if self.style.indicators && self.indicator_size > 0 {
            let s = self.indicator_size;
            shapes.extend([
                Shape::Fill(Rect::new(0, 0, s, s)),
                Shape::Fill(Rect::new(width - s, 0, s, s)),
                Shape::Fill(Rect::new(0, height - s, s, s)),
                Shape::Fill(Rect::new(width - s, height - s, s, s)),
            ]);
        }

        shapes
    }
}
