use super::*;

fn stage() -> HeadlessStage {
    HeadlessStage::new(Size::new(1000.0, 350.0))
}

#[test]
fn new_stage_is_blank() {
    let s = stage();
    assert!(s.calls().is_empty());
    assert!(s.swaps().is_empty());
    assert_eq!(s.visible_clip(), None);
    assert!(!s.is_held());
}

#[test]
fn viewport_reports_and_resizes() {
    let mut s = stage();
    assert_eq!(s.viewport(), Size::new(1000.0, 350.0));
    s.resize(Size::new(640.0, 480.0));
    assert_eq!(s.viewport(), Size::new(640.0, 480.0));
}

#[test]
fn show_clip_records_and_positions() {
    let mut s = stage();
    s.show_clip(Clip::WalkRight, Point::new(100.0, 175.0));
    assert_eq!(s.calls(), &[StageCall::ShowClip { clip: Clip::WalkRight, at: Point::new(100.0, 175.0) }]);
    assert_eq!(s.visible_clip(), Some(Clip::WalkRight));
    assert_eq!(s.position(), Point::new(100.0, 175.0));
}

#[test]
fn repeated_show_records_call_but_not_swap() {
    let mut s = stage();
    s.show_clip(Clip::IdleLeft, Point::default());
    s.show_clip(Clip::IdleLeft, Point::new(5.0, 5.0));
    assert_eq!(s.calls().len(), 2);
    assert_eq!(s.swaps().len(), 1);
    assert_eq!(s.position(), Point::new(5.0, 5.0));
}

#[test]
fn move_to_keeps_clip() {
    let mut s = stage();
    s.show_clip(Clip::Dangle, Point::default());
    s.move_to(Point::new(3.0, 4.0));
    assert_eq!(s.visible_clip(), Some(Clip::Dangle));
    assert_eq!(s.position(), Point::new(3.0, 4.0));
    assert_eq!(s.swaps().len(), 1);
}

#[test]
fn set_held_tracks_flag() {
    let mut s = stage();
    s.set_held(true);
    assert!(s.is_held());
    s.set_held(false);
    assert!(!s.is_held());
    assert_eq!(s.calls().len(), 2);
}

#[test]
fn take_calls_drains() {
    let mut s = stage();
    s.move_to(Point::default());
    assert_eq!(s.take_calls().len(), 1);
    assert!(s.calls().is_empty());
}

#[test]
fn stage_call_serializes_tagged() {
    let json = serde_json::to_value(StageCall::ShowClip { clip: Clip::WalkLeft, at: Point::new(1.0, 2.0) })
        .unwrap_or_default();
    assert_eq!(json["op"], "show_clip");
    assert_eq!(json["clip"], "walk_left");
    assert_eq!(json["at"]["x"], 1.0);
}
