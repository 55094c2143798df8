//! Controller tuning, loadable from JSON.
//!
//! Every field is optional in JSON; missing fields take the defaults from
//! [`crate::consts`]. Values are range-checked once in [`ControllerConfig::validate`]
//! so the controller itself never has to.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::clip::SheetLayout;
use crate::consts::{
    AIM_GAIN, AIM_JITTER_X, AIM_JITTER_Y, FRICTION, GRAVITY, HELD_ALPHA, IDLE_COUNTDOWN_MAX, IDLE_COUNTDOWN_MIN,
    IDLE_DURATION_MAX, IDLE_DURATION_MIN, LAUNCH_LIFT, RESTITUTION, SETTLE_EPSILON, START_X, WALK_SPEED,
};
use crate::error::SetupError;
use crate::input::DragPolicy;

/// Half-open range of ticks, `min..max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub min: u32,
    pub max: u32,
}

impl FrameRange {
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn as_range(self) -> Range<u32> {
        self.min..self.max
    }

    fn validate(self, name: &str) -> Result<(), SetupError> {
        if self.min == 0 {
            return Err(SetupError::InvalidConfig(format!("{name}.min must be at least 1")));
        }
        if self.max <= self.min {
            return Err(SetupError::InvalidConfig(format!(
                "{name} range is empty ({}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Tuning for walking, idling and bounce physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Walking speed in pixels per tick.
    pub walk_speed: f64,
    /// Starting x; y starts at the vertical middle of the viewport.
    pub start_x: f64,
    /// Ticks of walking before idling.
    pub idle_countdown: FrameRange,
    /// Ticks spent idling.
    pub idle_duration: FrameRange,
    pub gravity: f64,
    pub restitution: f64,
    pub friction: f64,
    pub settle_epsilon: f64,
    pub aim_gain: f64,
    pub launch_lift: f64,
    pub aim_jitter_x: f64,
    pub aim_jitter_y: f64,
    pub drag_policy: DragPolicy,
    /// Sprite opacity while held.
    pub held_alpha: f64,
    pub sheet: SheetLayout,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            start_x: START_X,
            idle_countdown: FrameRange::new(IDLE_COUNTDOWN_MIN, IDLE_COUNTDOWN_MAX),
            idle_duration: FrameRange::new(IDLE_DURATION_MIN, IDLE_DURATION_MAX),
            gravity: GRAVITY,
            restitution: RESTITUTION,
            friction: FRICTION,
            settle_epsilon: SETTLE_EPSILON,
            aim_gain: AIM_GAIN,
            launch_lift: LAUNCH_LIFT,
            aim_jitter_x: AIM_JITTER_X,
            aim_jitter_y: AIM_JITTER_Y,
            drag_policy: DragPolicy::default(),
            held_alpha: HELD_ALPHA,
            sheet: SheetLayout::default(),
        }
    }
}

impl ControllerConfig {
    /// Parse overrides from JSON and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ConfigParse`] for malformed JSON and
    /// [`SetupError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, SetupError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Range-check every field.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SetupError> {
        require(self.walk_speed > 0.0 && self.walk_speed.is_finite(), "walk_speed must be positive")?;
        require(self.start_x.is_finite(), "start_x must be finite")?;
        self.idle_countdown.validate("idle_countdown")?;
        self.idle_duration.validate("idle_duration")?;
        require(self.gravity >= 0.0 && self.gravity.is_finite(), "gravity must be non-negative")?;
        require((0.0..1.0).contains(&self.restitution), "restitution must be in [0, 1)")?;
        require(self.friction > 0.0 && self.friction <= 1.0, "friction must be in (0, 1]")?;
        require(self.settle_epsilon > 0.0 && self.settle_epsilon.is_finite(), "settle_epsilon must be positive")?;
        require(self.aim_gain >= 0.0 && self.aim_gain.is_finite(), "aim_gain must be non-negative")?;
        require(self.launch_lift.is_finite(), "launch_lift must be finite")?;
        require(
            self.aim_jitter_x >= 0.0 && self.aim_jitter_y >= 0.0,
            "aim jitter must be non-negative",
        )?;
        require((0.0..=1.0).contains(&self.held_alpha), "held_alpha must be in [0, 1]")?;
        self.sheet.validate()
    }
}

fn require(ok: bool, message: &str) -> Result<(), SetupError> {
    if ok { Ok(()) } else { Err(SetupError::InvalidConfig(message.to_string())) }
}
