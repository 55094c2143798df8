//! The character controller: per-tick state advancement and pointer handling.
//!
//! ## State machine
//!
//! | From | Trigger | To |
//! |------|---------|----|
//! | Walking | idle countdown hits zero | Idle |
//! | Walking | horizontal bound reached | Walking, facing flipped |
//! | Idle | idle duration hits zero | Walking |
//! | Walking / Idle | pointer-down on the sprite | Dragging |
//! | Dragging | pointer-up inside bounds | Walking |
//! | Dragging | pointer-up outside bounds | Bouncing |
//! | Bouncing | both velocity components under epsilon | Walking |
//!
//! Bouncing may also be grabbed when the config's
//! [`DragPolicy`](crate::input::DragPolicy) allows it.
//! Any other event in any state is a no-op.
//!
//! Bounds are recomputed from [`Stage::viewport`] every time they are needed,
//! so a host resize takes effect on the next event.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use rand::Rng;

use crate::character::Character;
use crate::clip::Clip;
use crate::config::ControllerConfig;
use crate::error::SetupError;
use crate::geom::{Bounds, Point, Vec2};
use crate::hit::hit_test;
use crate::input::{Event, Facing, State};
use crate::stage::Stage;

/// A change of logical state caused by one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: State,
    pub to: State,
}

/// Owns the character and drives it from host events.
///
/// `S` is the rendering collaborator; `R` is the random source used for idle
/// timers and bounce aim. Seed `R` to make a run reproducible.
pub struct Controller<S, R> {
    stage: S,
    rng: R,
    config: ControllerConfig,
    character: Character,
}

impl<S: Stage, R: Rng> Controller<S, R> {
    /// Build the controller and show the initial walking clip.
    ///
    /// The character starts walking right at `config.start_x`, halfway down
    /// the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidConfig`] if `config` fails validation and
    /// [`SetupError::EmptySurface`] if the stage has no drawable area.
    pub fn new(stage: S, rng: R, config: ControllerConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let viewport = stage.viewport();
        if !viewport.has_area() {
            return Err(SetupError::EmptySurface { width: viewport.width, height: viewport.height });
        }

        let start = Point::new(config.start_x, viewport.height / 2.0);
        let mut controller = Self { stage, rng, config, character: Character::new(start) };
        controller.character.draw_idle_countdown(&mut controller.rng, controller.config.idle_countdown);
        controller.show_current_clip();
        log::debug!(
            "knight ready at ({:.1}, {:.1}), idle in {} ticks",
            start.x,
            start.y,
            controller.character.idle_countdown
        );
        Ok(controller)
    }

    /// Feed one host event through the state machine.
    ///
    /// Returns the transition if the logical state changed. Direction flips
    /// and drag moves are not transitions.
    pub fn handle(&mut self, event: Event) -> Option<Transition> {
        let from = self.character.state;
        match event {
            Event::Tick => self.tick(),
            Event::PointerDown(pt) => self.pointer_down(pt),
            Event::PointerMove(pt) => self.pointer_move(pt),
            Event::PointerUp(pt) => self.pointer_up(pt),
        }
        let to = self.character.state;
        if std::mem::discriminant(&from) == std::mem::discriminant(&to) {
            return None;
        }
        log::debug!("knight {} -> {}", from.name(), to.name());
        Some(Transition { from, to })
    }

    // --- Queries ---

    /// The movement rectangle for the current viewport.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::inset(self.stage.viewport(), self.config.sheet.rendered_size())
    }

    #[must_use]
    pub fn character(&self) -> &Character {
        &self.character
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.character.state
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.character.position
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.character.facing
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.character.velocity
    }

    /// The clip that matches the current state.
    #[must_use]
    pub fn clip(&self) -> Clip {
        Clip::for_state(&self.character.state, self.character.facing)
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    // --- Tick ---

    fn tick(&mut self) {
        match self.character.state {
            State::Walking => self.tick_walking(),
            State::Idle => self.tick_idle(),
            State::Dragging { .. } => {}
            State::Bouncing => self.tick_bouncing(),
        }
    }

    fn tick_walking(&mut self) {
        let bounds = self.bounds();
        let c = &mut self.character;
        c.position.x += self.config.walk_speed * c.facing.sign();

        let flipped = match c.facing {
            Facing::Right => c.position.x >= bounds.right,
            Facing::Left => c.position.x <= bounds.left,
        };
        if flipped {
            c.position.x = bounds.clamp_x(c.position.x);
            c.facing = c.facing.flipped();
        }

        c.idle_countdown = c.idle_countdown.saturating_sub(1);
        if c.idle_countdown == 0 {
            self.enter_idle();
        } else if flipped {
            self.show_current_clip();
        } else {
            self.stage.move_to(self.character.position);
        }
    }

    fn tick_idle(&mut self) {
        let c = &mut self.character;
        c.idle_duration = c.idle_duration.saturating_sub(1);
        if c.idle_duration == 0 {
            self.enter_walking();
        }
    }

    #[allow(clippy::float_cmp)]
    fn tick_bouncing(&mut self) {
        let bounds = self.bounds();
        let cfg = &self.config;
        let c = &mut self.character;

        if c.velocity.x.abs() < cfg.settle_epsilon && c.velocity.y.abs() < cfg.settle_epsilon {
            c.position.y = bounds.mid_y();
            log::debug!("bounce settled at x={:.1}", c.position.x);
            self.enter_walking();
            return;
        }

        c.velocity.y += cfg.gravity;
        c.position += c.velocity;

        // A wall hit pins to the wall and reflects that axis.
        let x = bounds.clamp_x(c.position.x);
        if x != c.position.x {
            c.position.x = x;
            c.velocity.x = -c.velocity.x * cfg.restitution;
        }
        let y = bounds.clamp_y(c.position.y);
        if y != c.position.y {
            c.position.y = y;
            c.velocity.y = -c.velocity.y * cfg.restitution;
        }

        c.velocity = c.velocity * cfg.friction;
        self.stage.move_to(c.position);
    }

    // --- Pointer ---

    fn pointer_down(&mut self, pt: Point) {
        if !self.character.state.is_grabbable(self.config.drag_policy) {
            return;
        }
        if !hit_test(pt, self.character.position, self.config.sheet.rendered_size()) {
            return;
        }
        if self.character.state == State::Bouncing {
            log::debug!("caught mid-bounce");
        }

        log::debug!("grabbed at ({:.1}, {:.1})", pt.x, pt.y);
        self.character.velocity = Vec2::ZERO;
        self.character.state = State::Dragging { anchor: pt - self.character.position };
        self.stage.set_held(true);
        self.show_current_clip();
    }

    fn pointer_move(&mut self, pt: Point) {
        let Some(anchor) = self.character.drag_anchor() else {
            return;
        };
        self.character.position = pt - anchor;
        self.stage.move_to(self.character.position);
    }

    fn pointer_up(&mut self, pt: Point) {
        let Some(anchor) = self.character.drag_anchor() else {
            return;
        };
        self.character.position = pt - anchor;
        self.stage.set_held(false);

        if self.bounds().contains(self.character.position) {
            self.enter_walking();
        } else {
            self.launch();
        }
    }

    // --- State entry ---

    fn enter_walking(&mut self) {
        self.character.state = State::Walking;
        self.character.velocity = Vec2::ZERO;
        self.character.draw_idle_countdown(&mut self.rng, self.config.idle_countdown);
        self.show_current_clip();
    }

    fn enter_idle(&mut self) {
        self.character.state = State::Idle;
        self.character.draw_idle_duration(&mut self.rng, self.config.idle_duration);
        self.show_current_clip();
    }

    /// Fling toward a jittered point near the centre of the bounds, with an
    /// upward kick.
    fn launch(&mut self) {
        let cfg = &self.config;
        let jitter = Vec2::new(
            (self.rng.random::<f64>() - 0.5) * cfg.aim_jitter_x,
            (self.rng.random::<f64>() - 0.5) * cfg.aim_jitter_y,
        );
        let target = self.bounds().center() + jitter;
        let mut velocity = (target - self.character.position) * cfg.aim_gain;
        velocity.y -= cfg.launch_lift;

        log::debug!("bounce launched with velocity ({:.2}, {:.2})", velocity.x, velocity.y);
        self.character.velocity = velocity;
        self.character.state = State::Bouncing;
        self.show_current_clip();
    }

    fn show_current_clip(&mut self) {
        let clip = self.clip();
        self.stage.show_clip(clip, self.character.position);
    }
}
