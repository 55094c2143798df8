#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point / Vec2 arithmetic ---

#[test]
fn point_minus_point_is_offset() {
    let d = Point::new(10.0, 4.0) - Point::new(3.0, 6.0);
    assert_eq!(d, Vec2::new(7.0, -2.0));
}

#[test]
fn point_plus_offset_round_trips() {
    let origin = Point::new(120.0, 80.0);
    let pointer = Point::new(130.0, 95.0);
    let anchor = pointer - origin;
    assert_eq!(pointer - anchor, origin);
    assert_eq!(origin + anchor, pointer);
}

#[test]
fn add_assign_moves_point() {
    let mut p = Point::new(1.0, 1.0);
    p += Vec2::new(0.5, -2.0);
    assert_eq!(p, Point::new(1.5, -1.0));
}

#[test]
fn vec_scales() {
    assert_eq!(Vec2::new(2.0, -4.0) * 0.5, Vec2::new(1.0, -2.0));
}

// --- Size ---

#[test]
fn size_has_area() {
    assert!(Size::new(10.0, 1.0).has_area());
    assert!(!Size::new(0.0, 10.0).has_area());
    assert!(!Size::new(10.0, -1.0).has_area());
    assert!(!Size::new(f64::NAN, 10.0).has_area());
}

// --- Bounds ---

#[test]
fn inset_by_half_sprite() {
    let b = Bounds::inset(Size::new(1000.0, 350.0), Size::new(128.0, 128.0));
    assert_eq!(b.left, 64.0);
    assert_eq!(b.right, 936.0);
    assert_eq!(b.top, 64.0);
    assert_eq!(b.bottom, 286.0);
}

#[test]
fn center_and_mid_y() {
    let b = Bounds::inset(Size::new(1000.0, 350.0), Size::new(128.0, 128.0));
    assert!(approx_eq(b.center().x, 500.0));
    assert!(approx_eq(b.center().y, 175.0));
    assert!(approx_eq(b.mid_y(), 175.0));
}

#[test]
fn contains_is_inclusive() {
    let b = Bounds { left: 0.0, right: 10.0, top: 0.0, bottom: 10.0 };
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
    assert!(!b.contains(Point::new(5.0, -0.1)));
}

#[test]
fn clamp_pins_to_edges() {
    let b = Bounds { left: 5.0, right: 10.0, top: 1.0, bottom: 2.0 };
    assert_eq!(b.clamp_x(-3.0), 5.0);
    assert_eq!(b.clamp_x(7.0), 7.0);
    assert_eq!(b.clamp_x(11.0), 10.0);
    assert_eq!(b.clamp_y(0.0), 1.0);
    assert_eq!(b.clamp_y(3.0), 2.0);
}

#[test]
fn clamp_on_degenerate_bounds_pins_to_midpoint() {
    // Viewport narrower than the sprite.
    let b = Bounds::inset(Size::new(100.0, 100.0), Size::new(128.0, 128.0));
    assert!(b.left > b.right);
    assert_eq!(b.clamp_x(0.0), 50.0);
    assert_eq!(b.clamp_x(50.0), 50.0);
    assert_eq!(b.clamp_x(900.0), 50.0);
    assert_eq!(b.clamp_y(-10.0), 50.0);
}
