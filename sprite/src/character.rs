#[cfg(test)]
#[path = "character_test.rs"]
mod character_test;

use rand::Rng;

use crate::config::FrameRange;
use crate::geom::{Point, Vec2};
use crate::input::{Facing, State};

/// The one mutable record the controller owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Centre of the sprite, scene coordinates.
    pub position: Point,
    /// Only meaningful while bouncing; zero otherwise.
    pub velocity: Vec2,
    pub facing: Facing,
    pub state: State,
    /// Walking ticks left before idling.
    pub idle_countdown: u32,
    /// Idle ticks left before walking again.
    pub idle_duration: u32,
}

impl Character {
    /// A character walking right at `position` with no timers drawn yet.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            state: State::Walking,
            idle_countdown: 0,
            idle_duration: 0,
        }
    }

    /// Draw a fresh idle countdown from `range`.
    pub fn draw_idle_countdown<R: Rng>(&mut self, rng: &mut R, range: FrameRange) {
        self.idle_countdown = rng.random_range(range.as_range());
    }

    /// Draw a fresh idle duration from `range`.
    pub fn draw_idle_duration<R: Rng>(&mut self, rng: &mut R, range: FrameRange) {
        self.idle_duration = rng.random_range(range.as_range());
    }

    /// The drag anchor, if the character is currently held.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<Vec2> {
        match self.state {
            State::Dragging { anchor } => Some(anchor),
            _ => None,
        }
    }
}
