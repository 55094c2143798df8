//! Animated clips: which one is showing, how far each has played, and where
//! its frames live on the sprite sheet.

#[cfg(test)]
#[path = "clip_test.rs"]
mod clip_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DANGLE_ANIM_SPEED, FRAME_SIZE_PX, FRAMES_PER_CLIP, IDLE_ANIM_SPEED, RENDER_SCALE, WALK_ANIM_SPEED,
};
use crate::error::SetupError;
use crate::geom::Size;
use crate::input::{Facing, State};

/// A pre-built looping animation the character can wear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clip {
    WalkRight,
    WalkLeft,
    IdleRight,
    IdleLeft,
    /// Shown while held or bouncing.
    Dangle,
}

impl Clip {
    pub const ALL: [Clip; 5] = [Clip::WalkRight, Clip::WalkLeft, Clip::IdleRight, Clip::IdleLeft, Clip::Dangle];

    /// The clip that must be visible for a given state and facing.
    #[must_use]
    pub fn for_state(state: &State, facing: Facing) -> Self {
        match (state, facing) {
            (State::Walking, Facing::Right) => Self::WalkRight,
            (State::Walking, Facing::Left) => Self::WalkLeft,
            (State::Idle, Facing::Right) => Self::IdleRight,
            (State::Idle, Facing::Left) => Self::IdleLeft,
            (State::Dragging { .. } | State::Bouncing, _) => Self::Dangle,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::WalkRight => 0,
            Self::WalkLeft => 1,
            Self::IdleRight => 2,
            Self::IdleLeft => 3,
            Self::Dangle => 4,
        }
    }
}

// =============================================================
// Playback
// =============================================================

/// Frame cursor of a single clip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipPlayer {
    cursor: f64,
}

impl ClipPlayer {
    /// Advance by `speed` frames, wrapping at `frame_count`.
    pub fn advance(&mut self, speed: f64, frame_count: u32) {
        if frame_count == 0 {
            return;
        }
        self.cursor = (self.cursor + speed).rem_euclid(f64::from(frame_count));
    }

    /// The frame currently on screen.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&self) -> u32 {
        self.cursor.floor() as u32
    }
}

/// Visibility toggles performed by a clip switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swap {
    /// The clip that was hidden and stopped, if one was showing.
    pub hidden: Option<Clip>,
    /// The clip that became visible and started playing.
    pub shown: Clip,
}

/// The set of clips attached to the character; exactly one is visible.
///
/// Hidden clips are stopped, not rewound: when shown again they resume from
/// the frame they were on.
#[derive(Debug, Clone, Default)]
pub struct ClipDeck {
    visible: Option<Clip>,
    players: [ClipPlayer; 5],
}

impl ClipDeck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `clip` the only visible clip.
    ///
    /// Returns `None` when `clip` is already visible; nothing is toggled.
    pub fn show(&mut self, clip: Clip) -> Option<Swap> {
        if self.visible == Some(clip) {
            return None;
        }
        let hidden = self.visible.replace(clip);
        Some(Swap { hidden, shown: clip })
    }

    #[must_use]
    pub fn visible(&self) -> Option<Clip> {
        self.visible
    }

    /// Advance the visible clip by one tick.
    pub fn advance(&mut self, layout: &SheetLayout) {
        if let Some(clip) = self.visible {
            self.players[clip.index()].advance(layout.anim_speed(clip), layout.frames_per_clip);
        }
    }

    /// Current frame of `clip`.
    #[must_use]
    pub fn frame(&self, clip: Clip) -> u32 {
        self.players[clip.index()].frame()
    }
}

// =============================================================
// Sheet layout
// =============================================================

/// Sheet row of each clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipRows {
    pub walk_right: u32,
    pub walk_left: u32,
    pub idle_right: u32,
    pub idle_left: u32,
    pub dangle: u32,
}

impl Default for ClipRows {
    fn default() -> Self {
        Self { idle_right: 0, walk_right: 1, idle_left: 2, walk_left: 3, dangle: 0 }
    }
}

impl ClipRows {
    #[must_use]
    pub fn row(&self, clip: Clip) -> u32 {
        match clip {
            Clip::WalkRight => self.walk_right,
            Clip::WalkLeft => self.walk_left,
            Clip::IdleRight => self.idle_right,
            Clip::IdleLeft => self.idle_left,
            Clip::Dangle => self.dangle,
        }
    }

    fn max_row(&self) -> u32 {
        Clip::ALL.iter().map(|c| self.row(*c)).max().unwrap_or_default()
    }
}

/// Geometry of the sprite sheet: one clip per row, frames left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub frame_width: f64,
    pub frame_height: f64,
    pub scale: f64,
    pub frames_per_clip: u32,
    pub rows: ClipRows,
    pub walk_speed: f64,
    pub idle_speed: f64,
    pub dangle_speed: f64,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            frame_width: FRAME_SIZE_PX,
            frame_height: FRAME_SIZE_PX,
            scale: RENDER_SCALE,
            frames_per_clip: FRAMES_PER_CLIP,
            rows: ClipRows::default(),
            walk_speed: WALK_ANIM_SPEED,
            idle_speed: IDLE_ANIM_SPEED,
            dangle_speed: DANGLE_ANIM_SPEED,
        }
    }
}

/// A source rectangle on the sheet, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SheetLayout {
    /// On-screen size of one frame.
    #[must_use]
    pub fn rendered_size(&self) -> Size {
        Size::new(self.frame_width * self.scale, self.frame_height * self.scale)
    }

    #[must_use]
    pub fn anim_speed(&self, clip: Clip) -> f64 {
        match clip {
            Clip::WalkRight | Clip::WalkLeft => self.walk_speed,
            Clip::IdleRight | Clip::IdleLeft => self.idle_speed,
            Clip::Dangle => self.dangle_speed,
        }
    }

    /// Where frame `frame` of `clip` sits on the sheet.
    #[must_use]
    pub fn source_rect(&self, clip: Clip, frame: u32) -> SourceRect {
        SourceRect {
            x: f64::from(frame) * self.frame_width,
            y: f64::from(self.rows.row(clip)) * self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    /// Check the layout itself is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidConfig`] for non-positive sizes, scale or
    /// frame count, or negative animation speeds.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.frame_width > 0.0 && self.frame_height > 0.0) {
            return Err(SetupError::InvalidConfig("sheet frame size must be positive".into()));
        }
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(SetupError::InvalidConfig("sheet scale must be positive".into()));
        }
        if self.frames_per_clip == 0 {
            return Err(SetupError::InvalidConfig("sheet needs at least one frame per clip".into()));
        }
        if [self.walk_speed, self.idle_speed, self.dangle_speed].iter().any(|s| !(*s >= 0.0)) {
            return Err(SetupError::InvalidConfig("animation speeds must be non-negative".into()));
        }
        Ok(())
    }

    /// Check that an image of `width` x `height` covers every frame of every clip.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::SheetNotLoaded`] for an empty image and
    /// [`SetupError::SheetTooSmall`] when a row or column falls off the image.
    pub fn check_sheet(&self, width: f64, height: f64) -> Result<(), SetupError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SetupError::SheetNotLoaded);
        }
        let need_width = f64::from(self.frames_per_clip) * self.frame_width;
        let need_height = (f64::from(self.rows.max_row()) + 1.0) * self.frame_height;
        if width < need_width || height < need_height {
            return Err(SetupError::SheetTooSmall { width, height, need_width, need_height });
        }
        Ok(())
    }
}
