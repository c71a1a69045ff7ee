//! The press / motion / release state machine.
//!
//! [`Interaction`] owns everything that used to live in loose loop
//! variables: whether a drag is in progress, the anchor captured at
//! press time, and the region last seen under the pointer.

use crate::geometry::{DragSession, MinSize};
use crate::{Point, Rect, Region, region};

/// Where the interaction currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone)]
pub struct Interaction {
    margin: i32,
    min: MinSize,
    phase: Phase,
    hover: Option<Region>,
}

impl Interaction {
    pub fn new(margin: i32, min: MinSize) -> Self {
        Self {
            margin,
            min,
            phase: Phase::Idle,
            hover: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Region last computed under the pointer. Cosmetic only.
    pub fn hover(&self) -> Option<Region> {
        self.hover
    }

    /// Starts a drag session for a primary-button press.
    ///
    /// `geometry` is the window's current geometry. A press while a
    /// session is already active replaces it.
    pub fn press(&mut self, local: Point, root: Point, geometry: Rect) -> Region {
        let session = DragSession::begin(local, root, geometry, self.margin);
        self.phase = Phase::Dragging(session);
        self.hover = Some(session.region);
        session.region
    }

    /// New geometry for the pointer being at `root`, or `None` when idle.
    pub fn motion(&self, root: Point) -> Option<Rect> {
        match self.phase {
            Phase::Dragging(session) => Some(session.geometry_at(root, self.min)),
            Phase::Idle => None,
        }
    }

    /// Ends the current session, returning it if there was one.
    pub fn release(&mut self) -> Option<DragSession> {
        let ended = match self.phase {
            Phase::Dragging(session) => Some(session),
            Phase::Idle => None,
        };
        self.phase = Phase::Idle;
        self.hover = None;
        ended
    }

    /// Re-classifies the pointer while idle.
    ///
    /// Returns the new region when it differs from the previous one, and
    /// `None` when nothing changed or a drag is in progress.
    pub fn hover_at(&mut self, local: Point, (width, height): (i32, i32)) -> Option<Region> {
        if self.is_dragging() {
            return None;
        }
        let region = region::classify(local.x, local.y, width, height, self.margin);
        if self.hover == Some(region) {
            return None;
        }
        self.hover = Some(region);
        Some(region)
    }

    /// Forgets the hover region when the pointer leaves, unless dragging.
    ///
    /// Returns `true` if the hover state was reset.
    pub fn leave(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.hover = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: Rect = Rect {
        x: 500,
        y: 900,
        width: 1600,
        height: 100,
    };

    fn interaction() -> Interaction {
        Interaction::new(20, MinSize::new(50, 50))
    }

    #[test]
    fn starts_idle() {
        let i = interaction();
        assert_eq!(i.phase(), Phase::Idle);
        assert_eq!(i.hover(), None);
        assert_eq!(i.motion(Point::new(10, 10)), None);
    }

    #[test]
    fn press_motion_release_cycle() {
        let mut i = interaction();

        let region = i.press(Point::new(800, 50), Point::new(1300, 950), GEOMETRY);
        assert_eq!(region, Region::Drag);
        assert!(i.is_dragging());

        let moved = i.motion(Point::new(1350, 920));
        assert_eq!(moved, Some(Rect::new(550, 870, 1600, 100)));

        let ended = i.release().unwrap();
        assert_eq!(ended.anchor_geometry, GEOMETRY);
        assert!(!i.is_dragging());
        assert_eq!(i.motion(Point::new(0, 0)), None);
    }

    #[test]
    fn release_when_idle_is_harmless() {
        let mut i = interaction();
        assert_eq!(i.release(), None);
        assert_eq!(i.phase(), Phase::Idle);
    }

    #[test]
    fn second_press_restarts_session() {
        let mut i = interaction();
        i.press(Point::new(800, 50), Point::new(1300, 950), GEOMETRY);

        let moved = Rect::new(0, 0, 1600, 100);
        let region = i.press(Point::new(5, 5), Point::new(5, 5), moved);

        assert_eq!(region, Region::ResizeTopLeft);
        match i.phase() {
            Phase::Dragging(s) => assert_eq!(s.anchor_geometry, moved),
            Phase::Idle => panic!("expected a drag session"),
        }
    }

    #[test]
    fn hover_reports_only_changes() {
        let mut i = interaction();
        let size = (1600, 100);

        assert_eq!(i.hover_at(Point::new(800, 50), size), Some(Region::Drag));
        assert_eq!(i.hover_at(Point::new(700, 40), size), None);
        assert_eq!(
            i.hover_at(Point::new(1595, 95), size),
            Some(Region::ResizeBottomRight)
        );
    }

    #[test]
    fn hover_is_frozen_while_dragging() {
        let mut i = interaction();
        i.press(Point::new(10, 10), Point::new(510, 910), GEOMETRY);

        assert_eq!(i.hover_at(Point::new(800, 50), (1600, 100)), None);
        assert_eq!(i.hover(), Some(Region::ResizeTopLeft));
        assert!(!i.leave());
    }

    #[test]
    fn leave_resets_hover_when_idle() {
        let mut i = interaction();
        i.hover_at(Point::new(800, 50), (1600, 100));

        assert!(i.leave());
        assert_eq!(i.hover(), None);
    }
}
