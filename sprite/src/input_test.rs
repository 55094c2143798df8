#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Facing
// =============================================================

#[test]
fn facing_default_is_right() {
    assert_eq!(Facing::default(), Facing::Right);
}

#[test]
fn facing_sign() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
}

#[test]
fn facing_flip_is_involution() {
    assert_eq!(Facing::Right.flipped(), Facing::Left);
    assert_eq!(Facing::Left.flipped().flipped(), Facing::Left);
}

#[test]
fn facing_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Facing::Left).unwrap_or_default(), "\"left\"");
}

// =============================================================
// State
// =============================================================

#[test]
fn state_default_is_walking() {
    assert_eq!(State::default(), State::Walking);
}

#[test]
fn state_names() {
    assert_eq!(State::Walking.name(), "walking");
    assert_eq!(State::Idle.name(), "idle");
    assert_eq!(State::Dragging { anchor: Vec2::ZERO }.name(), "dragging");
    assert_eq!(State::Bouncing.name(), "bouncing");
}

#[test]
fn walking_and_idle_are_grabbable() {
    for policy in [DragPolicy::BlockWhileBouncing, DragPolicy::AllowWhileBouncing] {
        assert!(State::Walking.is_grabbable(policy));
        assert!(State::Idle.is_grabbable(policy));
    }
}

#[test]
fn dragging_is_never_grabbable() {
    let state = State::Dragging { anchor: Vec2::new(3.0, 4.0) };
    assert!(!state.is_grabbable(DragPolicy::BlockWhileBouncing));
    assert!(!state.is_grabbable(DragPolicy::AllowWhileBouncing));
}

#[test]
fn bouncing_follows_policy() {
    assert!(!State::Bouncing.is_grabbable(DragPolicy::BlockWhileBouncing));
    assert!(State::Bouncing.is_grabbable(DragPolicy::AllowWhileBouncing));
}

// =============================================================
// DragPolicy
// =============================================================

#[test]
fn drag_policy_default_blocks() {
    assert_eq!(DragPolicy::default(), DragPolicy::BlockWhileBouncing);
}

#[test]
fn drag_policy_parses_snake_case() {
    let policy: DragPolicy = serde_json::from_str("\"allow_while_bouncing\"").unwrap_or_default();
    assert_eq!(policy, DragPolicy::AllowWhileBouncing);
}
