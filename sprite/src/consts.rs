//! Shared numeric constants for the sprite crate.
//!
//! Timings are in frames; the host ticks once per rendered frame (~60 fps).

// ── Walking ─────────────────────────────────────────────────────

/// Horizontal walking speed in pixels per tick.
pub const WALK_SPEED: f64 = 0.6;

/// Initial horizontal position of the character.
pub const START_X: f64 = 100.0;

/// Idle countdown range in ticks (≈4–9 s), upper bound exclusive.
pub const IDLE_COUNTDOWN_MIN: u32 = 240;
pub const IDLE_COUNTDOWN_MAX: u32 = 540;

/// Idle duration range in ticks (≈1–3 s), upper bound exclusive.
pub const IDLE_DURATION_MIN: u32 = 60;
pub const IDLE_DURATION_MAX: u32 = 180;

// ── Bouncing ────────────────────────────────────────────────────

/// Added to vertical velocity every bouncing tick.
pub const GRAVITY: f64 = 0.5;

/// Fraction of velocity kept (and reversed) after hitting a bound.
pub const RESTITUTION: f64 = 0.65;

/// Per-tick velocity decay multiplier.
pub const FRICTION: f64 = 0.985;

/// Both velocity components must be below this to settle.
pub const SETTLE_EPSILON: f64 = 0.2;

/// Fraction of the launch-to-target distance used as initial velocity.
pub const AIM_GAIN: f64 = 0.12;

/// Upward impulse subtracted from the initial vertical velocity.
pub const LAUNCH_LIFT: f64 = 6.0;

/// Full width of the random spread around the bounds centre.
pub const AIM_JITTER_X: f64 = 150.0;
pub const AIM_JITTER_Y: f64 = 80.0;

// ── Sprite sheet ────────────────────────────────────────────────

/// Source frame size on the sheet, in pixels.
pub const FRAME_SIZE_PX: f64 = 32.0;

/// Render scale applied to each frame.
pub const RENDER_SCALE: f64 = 4.0;

/// Frames per clip row.
pub const FRAMES_PER_CLIP: u32 = 4;

/// Animation speeds in frames advanced per tick.
pub const WALK_ANIM_SPEED: f64 = 0.09;
pub const IDLE_ANIM_SPEED: f64 = 0.05;
pub const DANGLE_ANIM_SPEED: f64 = 0.05;

/// Opacity of the sprite while held by the pointer.
pub const HELD_ALPHA: f64 = 0.8;
