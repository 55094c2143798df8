//! The rendering collaborator as seen by the controller.
//!
//! The controller never draws. It tells a [`Stage`] which clip to show and
//! where, and asks it for the current viewport size. The browser host backs
//! this with a canvas ([`crate::engine::CanvasStage`]); [`HeadlessStage`]
//! records the calls instead, for tests and the simulator.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use serde::Serialize;

use crate::clip::{Clip, ClipDeck, Swap};
use crate::geom::{Point, Size};

/// What the controller needs from the renderer.
pub trait Stage {
    /// Current drawable size. May change between calls if the host resizes.
    fn viewport(&self) -> Size;

    /// Make `clip` the only visible, playing clip, placed at `at`.
    fn show_clip(&mut self, clip: Clip, at: Point);

    /// Move the visible clip without changing it.
    fn move_to(&mut self, at: Point);

    /// Held-by-pointer feedback. Stages without a cursor can ignore it.
    fn set_held(&mut self, _held: bool) {}
}

/// One recorded stage instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StageCall {
    ShowClip { clip: Clip, at: Point },
    MoveTo { at: Point },
    SetHeld { held: bool },
}

/// A stage that draws nothing and remembers everything.
#[derive(Debug, Clone)]
pub struct HeadlessStage {
    viewport: Size,
    deck: ClipDeck,
    position: Point,
    held: bool,
    calls: Vec<StageCall>,
    swaps: Vec<Swap>,
}

impl HeadlessStage {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            deck: ClipDeck::new(),
            position: Point::default(),
            held: false,
            calls: Vec::new(),
            swaps: Vec::new(),
        }
    }

    /// Simulate a host window resize.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Every call received, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[StageCall] {
        &self.calls
    }

    /// Drain recorded calls, keeping the stage state.
    pub fn take_calls(&mut self) -> Vec<StageCall> {
        std::mem::take(&mut self.calls)
    }

    /// Every visibility toggle actually performed, oldest first.
    #[must_use]
    pub fn swaps(&self) -> &[Swap] {
        &self.swaps
    }

    #[must_use]
    pub fn visible_clip(&self) -> Option<Clip> {
        self.deck.visible()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Stage for HeadlessStage {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn show_clip(&mut self, clip: Clip, at: Point) {
        self.calls.push(StageCall::ShowClip { clip, at });
        self.position = at;
        if let Some(swap) = self.deck.show(clip) {
            self.swaps.push(swap);
        }
    }

    fn move_to(&mut self, at: Point) {
        self.calls.push(StageCall::MoveTo { at });
        self.position = at;
    }

    fn set_held(&mut self, held: bool) {
        self.calls.push(StageCall::SetHeld { held });
        self.held = held;
    }
}
