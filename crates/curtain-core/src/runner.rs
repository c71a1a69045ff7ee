//! The overlay's event loop.
//!
//! Blocks on [`OverlayWindow::next_event`] and feeds every event
//! through the [`Interaction`] state machine, issuing move/resize and
//! redraw requests back to the window. Returns once the window is asked
//! to close.

use tracing::{debug, info};

use crate::decoration::Decorations;
use crate::geometry::MinSize;
use crate::interaction::{Interaction, Phase};
use crate::{Button, InputEvent, OverlayWindow, Rect, Result};

/// Everything the loop needs besides the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Size of the square corner handles, in pixels.
    pub margin: i32,
    pub min: MinSize,
    pub decorations: Decorations,
    /// Whether to ask the window for region-specific cursors.
    pub cursors: bool,
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs until the window receives a close request.
pub fn run<W: OverlayWindow>(window: &mut W, settings: &Settings) -> Result<()> {
    let mut runner = Runner::new(*settings);
    loop {
        let event = window.next_event()?;
        if runner.handle(window, event)? == Flow::Exit {
            info!("Close requested, shutting down");
            return Ok(());
        }
    }
}

/// Per-window loop state.
pub struct Runner {
    settings: Settings,
    interaction: Interaction,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            interaction: Interaction::new(settings.margin, settings.min),
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Handles a single event. Every event maps to a defined transition;
    /// only window-system failures produce an error.
    pub fn handle<W: OverlayWindow>(&mut self, window: &mut W, event: InputEvent) -> Result<Flow> {
        match event {
            InputEvent::ButtonPress {
                button: Button::Primary,
                local,
                root,
            } => {
                let geometry = window.geometry()?;
                let region = self.interaction.press(local, root, geometry);
                debug!(
                    "Press at ({}, {}) on {} handle, anchor {geometry:?}",
                    local.x,
                    local.y,
                    region.as_str()
                );
                self.update_cursor(window)?;
            }
            InputEvent::ButtonRelease {
                button: Button::Primary,
            } => {
                if let Some(session) = self.interaction.release() {
                    debug!("Released {} handle", session.region.as_str());
                    if self.hover_style() {
                        window.clear()?;
                    }
                }
            }
            InputEvent::ButtonPress { .. } | InputEvent::ButtonRelease { .. } => {}
            InputEvent::Motion { local, root } => {
                if let Some(rect) = self.interaction.motion(root) {
                    window.apply_geometry(rect)?;
                    if self.is_resizing() {
                        self.redraw_after_resize(window, rect)?;
                    }
                } else if self.interaction.hover_at(local, window.size()?).is_some() {
                    self.update_cursor(window)?;
                    if self.hover_style() {
                        window.clear()?;
                        self.draw(window)?;
                    }
                }
            }
            InputEvent::Enter => {
                if self.hover_style() {
                    window.clear()?;
                    self.draw(window)?;
                }
            }
            InputEvent::Leave => {
                if self.interaction.leave() {
                    self.update_cursor(window)?;
                    if self.hover_style() {
                        window.clear()?;
                    }
                }
            }
            InputEvent::Expose => {
                if !self.hover_style() || !self.interaction.is_dragging() {
                    self.draw(window)?;
                }
            }
            InputEvent::CloseRequested => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn decorations(&self) -> Option<&Decorations> {
        let d = &self.settings.decorations;
        (!d.is_empty()).then_some(d)
    }

    fn hover_style(&self) -> bool {
        self.decorations().is_some_and(|d| d.style.hover)
    }

    fn is_resizing(&self) -> bool {
        matches!(self.interaction.phase(), Phase::Dragging(s) if s.region.is_resize())
    }

    fn draw<W: OverlayWindow>(&self, window: &mut W) -> Result<()> {
        let Some(d) = self.decorations() else {
            return Ok(());
        };
        let (width, height) = window.size()?;
        window.paint(&d.shapes(width, height))
    }

    /// Repaints for the geometry just requested. The window system may
    /// not have processed the resize yet, so the new size is used
    /// directly instead of being queried.
    fn redraw_after_resize<W: OverlayWindow>(&self, window: &mut W, rect: Rect) -> Result<()> {
        let Some(d) = self.decorations() else {
            return Ok(());
        };
        window.clear()?;
        window.paint(&d.shapes(rect.width, rect.height))
    }

    fn update_cursor<W: OverlayWindow>(&self, window: &mut W) -> Result<()> {
        if self.settings.cursors {
            window.set_cursor(self.interaction.hover())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
