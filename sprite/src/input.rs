//! Input model: host events, facing direction, and the character state machine.
//!
//! `Event` is everything the host can tell the controller: a frame tick or a
//! pointer event in scene coordinates. `State` is the logical state of the
//! character; the `Dragging` variant carries the gesture context needed to
//! keep the sprite under the pointer without jumping.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Vec2};

/// An event delivered by the host, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// One rendered frame elapsed.
    Tick,
    /// Primary pointer pressed at a scene position.
    PointerDown(Point),
    /// Pointer moved to a scene position.
    PointerMove(Point),
    /// Pointer released at a scene position (inside or outside the canvas).
    PointerUp(Point),
}

/// Which way the character faces (and walks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Horizontal sign: `1.0` for right, `-1.0` for left.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Logical state of the character.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum State {
    /// Walking horizontally, flipping at the bounds.
    #[default]
    Walking,
    /// Standing still until the idle duration runs out.
    Idle,
    /// Held by the pointer.
    Dragging {
        /// Pointer contact point minus character origin at pointer-down.
        anchor: Vec2,
    },
    /// Flung and falling under gravity until it settles.
    Bouncing,
}

impl State {
    /// Stable lowercase name, used in logs and by the browser host.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Bouncing => "bouncing",
        }
    }

    /// Whether a pointer-down may start a drag from this state.
    #[must_use]
    pub fn is_grabbable(&self, policy: DragPolicy) -> bool {
        match self {
            Self::Walking | Self::Idle => true,
            Self::Dragging { .. } => false,
            Self::Bouncing => policy == DragPolicy::AllowWhileBouncing,
        }
    }
}

/// Whether a bouncing character can be caught mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// Pointer-down is ignored while bouncing.
    #[default]
    BlockWhileBouncing,
    /// Pointer-down interrupts the bounce and starts a drag.
    AllowWhileBouncing,
}
