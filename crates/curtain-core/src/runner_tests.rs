use std::collections::VecDeque;

use super::*;
use crate::decoration::{Shape, StylePreset};
use crate::{Point, Region};

/// Calls made by the runner, in order.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Apply(Rect),
    Clear,
    Paint(Vec<Shape>),
    Cursor(Option<Region>),
}

/// An in-memory window that replays scripted events and records calls.
struct FakeWindow {
    geometry: Rect,
    events: VecDeque<InputEvent>,
    calls: Vec<Call>,
}

impl FakeWindow {
    fn new(geometry: Rect, events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            geometry,
            events: events.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    fn applied(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Apply(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl OverlayWindow for FakeWindow {
    fn size(&self) -> Result<(i32, i32)> {
        Ok((self.geometry.width, self.geometry.height))
    }

    fn position(&self) -> Result<(i32, i32)> {
        Ok((self.geometry.x, self.geometry.y))
    }

    fn apply_geometry(&mut self, rect: Rect) -> Result<()> {
        self.geometry = rect;
        self.calls.push(Call::Apply(rect));
        Ok(())
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| crate::Error::Backend("event script exhausted".into()))
    }

    fn clear(&mut self) -> Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn paint(&mut self, shapes: &[Shape]) -> Result<()> {
        self.calls.push(Call::Paint(shapes.to_vec()));
        Ok(())
    }

    fn set_cursor(&mut self, region: Option<Region>) -> Result<()> {
        self.calls.push(Call::Cursor(region));
        Ok(())
    }
}

const START: Rect = Rect {
    x: 500,
    y: 900,
    width: 1600,
    height: 100,
};

fn settings(preset: StylePreset) -> Settings {
    Settings {
        margin: 20,
        min: MinSize::new(50, 50),
        decorations: Decorations {
            style: preset.style(),
            border_width: 5,
            indicator_size: 20,
        },
        cursors: true,
    }
}

/// Press at a window-local point on a window sitting at `START`.
fn press_at(x: i32, y: i32) -> InputEvent {
    InputEvent::ButtonPress {
        button: Button::Primary,
        local: Point::new(x, y),
        root: Point::new(START.x + x, START.y + y),
    }
}

fn motion_to(root_x: i32, root_y: i32) -> InputEvent {
    InputEvent::Motion {
        local: Point::new(root_x - START.x, root_y - START.y),
        root: Point::new(root_x, root_y),
    }
}

fn release() -> InputEvent {
    InputEvent::ButtonRelease {
        button: Button::Primary,
    }
}

#[test]
fn run_returns_on_close_request() {
    let mut window = FakeWindow::new(START, [InputEvent::CloseRequested]);
    assert!(run(&mut window, &settings(StylePreset::Plain)).is_ok());
    assert!(window.calls.is_empty());
}

#[test]
fn run_propagates_window_errors() {
    let mut window = FakeWindow::new(START, []);
    let err = run(&mut window, &settings(StylePreset::Plain)).unwrap_err();
    assert!(matches!(err, crate::Error::Backend(_)));
}

#[test]
fn drag_moves_window_once_per_motion() {
    let mut window = FakeWindow::new(
        START,
        [
            press_at(800, 50),
            motion_to(1310, 950),
            motion_to(1350, 920),
            release(),
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Plain)).unwrap();

    assert_eq!(
        window.applied(),
        vec![
            Rect::new(510, 900, 1600, 100),
            Rect::new(550, 870, 1600, 100)
        ]
    );
}

#[test]
fn resize_from_corner_respects_minimum() {
    let mut window = FakeWindow::new(
        START,
        [
            press_at(1595, 95),
            motion_to(START.x + 1595 - 1600, START.y + 95),
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Plain)).unwrap();

    assert_eq!(window.applied(), vec![Rect::new(500, 900, 50, 100)]);
}

#[test]
fn secondary_button_never_drags() {
    let mut window = FakeWindow::new(
        START,
        [
            InputEvent::ButtonPress {
                button: Button::Secondary,
                local: Point::new(800, 50),
                root: Point::new(1300, 950),
            },
            motion_to(1400, 1000),
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Plain)).unwrap();

    assert!(window.applied().is_empty());
}

#[test]
fn secondary_release_does_not_end_drag() {
    let mut runner = Runner::new(settings(StylePreset::Plain));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, press_at(800, 50)).unwrap();
    runner
        .handle(
            &mut window,
            InputEvent::ButtonRelease {
                button: Button::Secondary,
            },
        )
        .unwrap();

    assert!(runner.interaction().is_dragging());
}

#[test]
fn motion_after_release_does_not_move() {
    let mut window = FakeWindow::new(
        START,
        [
            press_at(800, 50),
            release(),
            motion_to(1400, 1000),
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Plain)).unwrap();

    assert!(window.applied().is_empty());
}

#[test]
fn plain_style_never_paints() {
    let mut window = FakeWindow::new(
        START,
        [
            InputEvent::Expose,
            InputEvent::Enter,
            motion_to(510, 910),
            InputEvent::Leave,
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Plain)).unwrap();

    assert_eq!(
        window.count(|c| matches!(c, Call::Paint(_) | Call::Clear)),
        0
    );
}

#[test]
fn hover_style_redraws_only_when_region_changes() {
    let mut window = FakeWindow::new(
        START,
        [
            motion_to(1300, 950),
            motion_to(1310, 955),
            motion_to(505, 905),
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &settings(StylePreset::Indicators)).unwrap();

    assert_eq!(window.count(|c| matches!(c, Call::Paint(_))), 2);
    assert_eq!(
        window
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Cursor(_)))
            .cloned()
            .collect::<Vec<_>>(),
        vec![
            Call::Cursor(Some(Region::Drag)),
            Call::Cursor(Some(Region::ResizeTopLeft))
        ]
    );
}

#[test]
fn hover_style_clears_on_leave_and_release() {
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, InputEvent::Leave).unwrap();
    assert_eq!(window.calls.last(), Some(&Call::Clear));

    runner.handle(&mut window, press_at(800, 50)).unwrap();
    window.calls.clear();
    runner.handle(&mut window, release()).unwrap();
    assert_eq!(window.calls, vec![Call::Clear]);
}

#[test]
fn leave_while_dragging_keeps_decorations() {
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, press_at(10, 10)).unwrap();
    window.calls.clear();
    runner.handle(&mut window, InputEvent::Leave).unwrap();

    assert!(window.calls.is_empty());
}

#[test]
fn hover_style_skips_expose_while_dragging() {
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, InputEvent::Expose).unwrap();
    assert_eq!(window.count(|c| matches!(c, Call::Paint(_))), 1);

    runner.handle(&mut window, press_at(800, 50)).unwrap();
    runner.handle(&mut window, InputEvent::Expose).unwrap();
    assert_eq!(window.count(|c| matches!(c, Call::Paint(_))), 1);
}

#[test]
fn outlined_style_paints_on_every_expose() {
    let mut runner = Runner::new(settings(StylePreset::Outlined));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, press_at(800, 50)).unwrap();
    runner.handle(&mut window, InputEvent::Expose).unwrap();
    runner.handle(&mut window, InputEvent::Enter).unwrap();

    assert_eq!(window.count(|c| matches!(c, Call::Paint(_))), 1);
    assert_eq!(window.count(|c| matches!(c, Call::Clear)), 0);
}

#[test]
fn resize_repaints_with_new_size() {
    let mut runner = Runner::new(settings(StylePreset::Outlined));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, press_at(1595, 95)).unwrap();
    window.calls.clear();
    runner.handle(&mut window, motion_to(2105, 1005)).unwrap();

    assert_eq!(
        window.calls,
        vec![
            Call::Apply(Rect::new(500, 900, 1610, 110)),
            Call::Clear,
            Call::Paint(vec![Shape::Frame {
                rect: Rect::new(0, 0, 1610, 110),
                thickness: 5
            }]),
        ]
    );
}

#[test]
fn hover_style_redraws_on_enter() {
    // Arrange
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);

    // Act
    runner.handle(&mut window, InputEvent::Enter).unwrap();

    // Assert
    assert_eq!(window.calls.len(), 2);
    assert_eq!(window.calls[0], Call::Clear);
    assert!(matches!(&window.calls[1], Call::Paint(shapes) if shapes.len() == 5));
}

#[test]
fn hover_style_repaints_after_corner_resize() {
    // Arrange
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);
    runner.handle(&mut window, press_at(10, 10)).unwrap();
    window.calls.clear();

    // Act
    runner.handle(&mut window, motion_to(480, 890)).unwrap();

    // Assert
    assert_eq!(window.calls.len(), 3);
    assert_eq!(window.calls[0], Call::Apply(Rect::new(470, 880, 1630, 120)));
    assert_eq!(window.calls[1], Call::Clear);
    match &window.calls[2] {
        Call::Paint(shapes) => {
            assert_eq!(shapes.len(), 5);
            assert_eq!(
                shapes[0],
                Shape::Frame {
                    rect: Rect::new(0, 0, 1630, 120),
                    thickness: 5
                }
            );
        }
        other => panic!("expected a paint, got {other:?}"),
    }
}

#[test]
fn drag_does_not_repaint() {
    let mut runner = Runner::new(settings(StylePreset::Indicators));
    let mut window = FakeWindow::new(START, []);

    runner.handle(&mut window, press_at(800, 50)).unwrap();
    window.calls.clear();
    runner.handle(&mut window, motion_to(1400, 960)).unwrap();

    assert_eq!(window.calls, vec![Call::Apply(Rect::new(600, 910, 1600, 100))]);
}

#[test]
fn cursors_can_be_disabled() {
    let mut s = settings(StylePreset::Plain);
    s.cursors = false;
    let mut window = FakeWindow::new(
        START,
        [
            motion_to(1300, 950),
            press_at(10, 10),
            InputEvent::Leave,
            InputEvent::CloseRequested,
        ],
    );

    run(&mut window, &s).unwrap();

    assert_eq!(window.count(|c| matches!(c, Call::Cursor(_))), 0);
}
