#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Vec2;

// =============================================================
// Clip selection
// =============================================================

#[test]
fn walking_clips_follow_facing() {
    assert_eq!(Clip::for_state(&State::Walking, Facing::Right), Clip::WalkRight);
    assert_eq!(Clip::for_state(&State::Walking, Facing::Left), Clip::WalkLeft);
}

#[test]
fn idle_clips_follow_facing() {
    assert_eq!(Clip::for_state(&State::Idle, Facing::Right), Clip::IdleRight);
    assert_eq!(Clip::for_state(&State::Idle, Facing::Left), Clip::IdleLeft);
}

#[test]
fn dragging_and_bouncing_dangle_either_way() {
    let dragging = State::Dragging { anchor: Vec2::new(1.0, 2.0) };
    for facing in [Facing::Right, Facing::Left] {
        assert_eq!(Clip::for_state(&dragging, facing), Clip::Dangle);
        assert_eq!(Clip::for_state(&State::Bouncing, facing), Clip::Dangle);
    }
}

#[test]
fn clip_indices_are_distinct() {
    let mut seen = Clip::ALL.iter().map(|c| c.index()).collect::<Vec<_>>();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), Clip::ALL.len());
}

// =============================================================
// ClipPlayer
// =============================================================

#[test]
fn player_starts_at_frame_zero() {
    assert_eq!(ClipPlayer::default().frame(), 0);
}

#[test]
fn player_advances_fractionally() {
    let mut p = ClipPlayer::default();
    for _ in 0..10 {
        p.advance(0.09, 4);
    }
    // 0.9 frames in: still on frame 0.
    assert_eq!(p.frame(), 0);
    for _ in 0..2 {
        p.advance(0.09, 4);
    }
    assert_eq!(p.frame(), 1);
}

#[test]
fn player_wraps_at_frame_count() {
    let mut p = ClipPlayer::default();
    p.advance(3.5, 4);
    assert_eq!(p.frame(), 3);
    p.advance(1.0, 4);
    assert_eq!(p.frame(), 0);
}

#[test]
fn player_ignores_empty_clip() {
    let mut p = ClipPlayer::default();
    p.advance(1.0, 0);
    assert_eq!(p.frame(), 0);
}

// =============================================================
// ClipDeck
// =============================================================

#[test]
fn deck_starts_with_nothing_visible() {
    assert_eq!(ClipDeck::new().visible(), None);
}

#[test]
fn first_show_has_nothing_to_hide() {
    let mut deck = ClipDeck::new();
    let swap = deck.show(Clip::WalkRight);
    assert_eq!(swap, Some(Swap { hidden: None, shown: Clip::WalkRight }));
    assert_eq!(deck.visible(), Some(Clip::WalkRight));
}

#[test]
fn switching_hides_previous() {
    let mut deck = ClipDeck::new();
    deck.show(Clip::WalkRight);
    let swap = deck.show(Clip::Dangle);
    assert_eq!(swap, Some(Swap { hidden: Some(Clip::WalkRight), shown: Clip::Dangle }));
}

#[test]
fn showing_same_clip_twice_toggles_nothing() {
    let mut deck = ClipDeck::new();
    assert!(deck.show(Clip::IdleLeft).is_some());
    assert!(deck.show(Clip::IdleLeft).is_none());
    assert_eq!(deck.visible(), Some(Clip::IdleLeft));
}

#[test]
fn only_visible_clip_advances() {
    let layout = SheetLayout { walk_speed: 1.0, idle_speed: 1.0, ..SheetLayout::default() };
    let mut deck = ClipDeck::new();
    deck.show(Clip::WalkRight);
    deck.advance(&layout);
    deck.advance(&layout);
    assert_eq!(deck.frame(Clip::WalkRight), 2);
    assert_eq!(deck.frame(Clip::IdleRight), 0);
}

#[test]
fn hidden_clip_keeps_its_frame() {
    let layout = SheetLayout { walk_speed: 1.0, ..SheetLayout::default() };
    let mut deck = ClipDeck::new();
    deck.show(Clip::WalkRight);
    deck.advance(&layout);
    deck.show(Clip::Dangle);
    deck.advance(&layout);
    deck.show(Clip::WalkRight);
    assert_eq!(deck.frame(Clip::WalkRight), 1);
}

#[test]
fn advance_without_visible_clip_is_noop() {
    let mut deck = ClipDeck::new();
    deck.advance(&SheetLayout::default());
    for clip in Clip::ALL {
        assert_eq!(deck.frame(clip), 0);
    }
}

// =============================================================
// SheetLayout
// =============================================================

#[test]
fn default_layout_renders_128px() {
    assert_eq!(SheetLayout::default().rendered_size(), Size::new(128.0, 128.0));
}

#[test]
fn default_rows_match_sheet() {
    let rows = ClipRows::default();
    assert_eq!(rows.row(Clip::IdleRight), 0);
    assert_eq!(rows.row(Clip::WalkRight), 1);
    assert_eq!(rows.row(Clip::IdleLeft), 2);
    assert_eq!(rows.row(Clip::WalkLeft), 3);
    assert_eq!(rows.row(Clip::Dangle), 0);
}

#[test]
fn source_rect_for_walk_left_frame_two() {
    let r = SheetLayout::default().source_rect(Clip::WalkLeft, 2);
    assert_eq!(r, SourceRect { x: 64.0, y: 96.0, width: 32.0, height: 32.0 });
}

#[test]
fn anim_speed_by_clip_family() {
    let layout = SheetLayout::default();
    assert_eq!(layout.anim_speed(Clip::WalkLeft), 0.09);
    assert_eq!(layout.anim_speed(Clip::IdleRight), 0.05);
    assert_eq!(layout.anim_speed(Clip::Dangle), 0.05);
}

#[test]
fn default_layout_validates() {
    assert_eq!(SheetLayout::default().validate(), Ok(()));
}

#[test]
fn zero_frames_rejected() {
    let layout = SheetLayout { frames_per_clip: 0, ..SheetLayout::default() };
    assert!(matches!(layout.validate(), Err(SetupError::InvalidConfig(_))));
}

#[test]
fn zero_scale_rejected() {
    let layout = SheetLayout { scale: 0.0, ..SheetLayout::default() };
    assert!(matches!(layout.validate(), Err(SetupError::InvalidConfig(_))));
}

#[test]
fn negative_speed_rejected() {
    let layout = SheetLayout { idle_speed: -0.1, ..SheetLayout::default() };
    assert!(matches!(layout.validate(), Err(SetupError::InvalidConfig(_))));
}

#[test]
fn full_sheet_accepted() {
    assert_eq!(SheetLayout::default().check_sheet(128.0, 128.0), Ok(()));
}

#[test]
fn empty_sheet_is_not_loaded() {
    assert_eq!(SheetLayout::default().check_sheet(0.0, 0.0), Err(SetupError::SheetNotLoaded));
}

#[test]
fn short_sheet_rejected() {
    let err = SheetLayout::default().check_sheet(128.0, 64.0);
    assert_eq!(
        err,
        Err(SetupError::SheetTooSmall { width: 128.0, height: 64.0, need_width: 128.0, need_height: 128.0 })
    );
}

#[test]
fn huge_row_index_is_too_small_not_overflow() {
    let rows = ClipRows { dangle: u32::MAX, ..ClipRows::default() };
    let layout = SheetLayout { rows, ..SheetLayout::default() };
    let err = layout.check_sheet(128.0, 128.0);
    assert!(
        matches!(err, Err(SetupError::SheetTooSmall { need_height, .. }) if need_height > 128.0),
        "got {err:?}"
    );
}
