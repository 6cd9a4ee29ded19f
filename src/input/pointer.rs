//! # Pointer Tracking
//!
//! Converts raw per-frame pointer samples into press/enter/release/leave
//! events on board tiles.

use crate::game::{PointerEvent, Position};
use crate::rendering::BoardLayout;

/// Raw pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Button went down this frame
    pub pressed: bool,
    /// Button is held
    pub down: bool,
    /// Button went up this frame
    pub released: bool,
}

/// Remembers which tile the pointer was last over while a drag is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerTracker {
    /// Tile under the pointer during an active drag
    hovered: Option<Position>,
    dragging: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Turns one frame's sample into pointer events.
    pub fn update(&mut self, sample: PointerSample, layout: &BoardLayout) -> Vec<PointerEvent> {
        let cell = layout.cell_at(sample.x, sample.y);
        let mut events = Vec::new();

        if sample.pressed {
            if let Some(pos) = cell {
                events.push(PointerEvent::Press(pos));
                self.dragging = true;
                self.hovered = Some(pos);
            }
            return events;
        }

        if !self.dragging {
            return events;
        }

        if sample.released {
            events.push(PointerEvent::Release);
            self.dragging = false;
            self.hovered = None;
        } else if sample.down {
            match cell {
                Some(pos) if Some(pos) != self.hovered => {
                    events.push(PointerEvent::Enter(pos));
                    self.hovered = Some(pos);
                }
                Some(_) => {}
                None => {
                    events.push(PointerEvent::Leave);
                    self.dragging = false;
                    self.hovered = None;
                }
            }
        } else {
            // Button came up without a release event, e.g. focus was lost
            events.push(PointerEvent::Release);
            self.dragging = false;
            self.hovered = None;
        }

        events
    }
}
