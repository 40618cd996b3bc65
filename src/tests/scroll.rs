use super::{ScrollCommander, ScrollDirection, ScrollOptions, ScrollTarget};
use crate::document::PageLayout;
use crate::geometry::{Extent, Viewport};
use crate::section::SectionId;
use std::time::{Duration, Instant};

fn layout() -> PageLayout {
    let mut layout = PageLayout::new(5000.0);
    layout.insert(SectionId::Hero, Extent::new(0.0, 1000.0));
    layout.insert(SectionId::Experience, Extent::new(1000.0, 1500.0));
    layout
}

fn settle(commander: &mut ScrollCommander, viewport: &mut Viewport) -> usize {
    let mut frames = 0;
    while commander.is_animating() {
        commander.tick(viewport);
        frames += 1;
        assert!(frames < 1000, "smooth scroll never settled");
    }
    frames
}

#[test]
fn test_target_subtracts_header_height() {
    let mut commander = ScrollCommander::default();
    let target = commander
        .scroll_to_section(&layout(), SectionId::Experience)
        .unwrap();
    assert!((target.offset() - 920.0).abs() < f64::EPSILON);
    assert_eq!(target, ScrollTarget::for_element(1000.0, 80.0));
}

#[test]
fn test_smooth_scroll_eases_onto_target() {
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);
    commander.scroll_to_section(&layout(), SectionId::Experience);

    assert!(commander.tick(&mut viewport));
    let first_step = viewport.scroll_y;
    assert!(first_step > 0.0 && first_step < 920.0);

    let frames = settle(&mut commander, &mut viewport);
    assert!(frames > 1);
    assert!((viewport.scroll_y - 920.0).abs() < f64::EPSILON);
    assert!(!commander.tick(&mut viewport));
}

#[test]
fn test_missing_section_is_a_no_op() {
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);
    viewport.scroll_to(400.0);

    assert!(commander
        .scroll_to_section(&layout(), SectionId::Contact)
        .is_none());
    assert!(!commander.is_animating());
    assert!(!commander.tick(&mut viewport));
    assert!((viewport.scroll_y - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_scroll_to_top_and_cancel() {
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);
    viewport.scroll_to(2000.0);

    commander.scroll_to_top();
    commander.tick(&mut viewport);
    commander.cancel();
    let stopped_at = viewport.scroll_y;
    assert!(stopped_at < 2000.0);
    assert!(!commander.tick(&mut viewport));
    assert!((viewport.scroll_y - stopped_at).abs() < f64::EPSILON);

    commander.scroll_to_top();
    settle(&mut commander, &mut viewport);
    assert!(viewport.scroll_y.abs() < f64::EPSILON);
}

#[test]
fn test_target_above_origin_settles_at_zero() {
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);
    viewport.scroll_to(500.0);
    let target = commander
        .scroll_to_section(&layout(), SectionId::Hero)
        .unwrap();
    assert!((target.offset() + 80.0).abs() < f64::EPSILON);
    settle(&mut commander, &mut viewport);
    assert!(viewport.scroll_y.abs() < f64::EPSILON);
}

#[test]
fn test_past_threshold_toggles_at_boundary() {
    let start = Instant::now();
    let frame = Duration::from_millis(16);
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);

    assert!(commander.record_scroll(&viewport, start));
    assert!(!commander.is_past_threshold());

    viewport.scroll_to(300.0);
    assert!(commander.record_scroll(&viewport, start + frame));
    assert!(!commander.is_past_threshold());

    viewport.scroll_to(301.0);
    assert!(commander.record_scroll(&viewport, start + frame * 2));
    assert!(commander.is_past_threshold());

    viewport.scroll_to(0.0);
    assert!(commander.record_scroll(&viewport, start + frame * 3));
    assert!(!commander.is_past_threshold());
}

#[test]
fn test_throttled_sample_is_flushed() {
    let start = Instant::now();
    let mut commander = ScrollCommander::new(ScrollOptions::default());
    let mut viewport = Viewport::new(800.0, 5000.0);

    commander.record_scroll(&viewport, start);
    viewport.scroll_to(1000.0);
    assert!(!commander.record_scroll(&viewport, start + Duration::from_millis(4)));
    assert!(!commander.is_past_threshold());

    assert!(commander.poll(&viewport, start + Duration::from_millis(20)));
    assert!(commander.is_past_threshold());
}

#[test]
fn test_progress_and_direction() {
    let start = Instant::now();
    let frame = Duration::from_millis(16);
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(1000.0, 5000.0);

    commander.record_scroll(&viewport, start);
    assert_eq!(commander.direction(), None);
    assert!(commander.progress().abs() < f64::EPSILON);

    viewport.scroll_to(2000.0);
    commander.record_scroll(&viewport, start + frame);
    assert!((commander.progress() - 0.5).abs() < 1e-9);
    assert_eq!(commander.direction(), Some(ScrollDirection::Down));

    // Small jitter does not flip direction.
    viewport.scroll_to(1995.0);
    commander.record_scroll(&viewport, start + frame * 2);
    assert_eq!(commander.direction(), Some(ScrollDirection::Down));

    viewport.scroll_to(1500.0);
    commander.record_scroll(&viewport, start + frame * 3);
    assert_eq!(commander.direction(), Some(ScrollDirection::Up));

    viewport.scroll_to(4000.0);
    commander.record_scroll(&viewport, start + frame * 4);
    assert!((commander.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_header_hides_scrolling_down_and_returns_scrolling_up() {
    let start = Instant::now();
    let frame = Duration::from_millis(16);
    let mut commander = ScrollCommander::default();
    let mut viewport = Viewport::new(800.0, 5000.0);

    commander.record_scroll(&viewport, start);
    assert!(commander.is_header_visible());
    assert!(!commander.is_scrolled());

    // Down, but not yet past the hide offset.
    viewport.scroll_to(80.0);
    commander.record_scroll(&viewport, start + frame);
    assert!(commander.is_scrolled());
    assert!(commander.is_header_visible());

    viewport.scroll_to(400.0);
    commander.record_scroll(&viewport, start + frame * 2);
    assert!(!commander.is_header_visible());

    // Jitter below the hysteresis keeps it hidden.
    viewport.scroll_to(395.0);
    commander.record_scroll(&viewport, start + frame * 3);
    assert!(!commander.is_header_visible());

    viewport.scroll_to(300.0);
    commander.record_scroll(&viewport, start + frame * 4);
    assert_eq!(commander.direction(), Some(ScrollDirection::Up));
    assert!(commander.is_header_visible());

    viewport.scroll_to(20.0);
    commander.record_scroll(&viewport, start + frame * 5);
    assert!(!commander.is_scrolled());
    assert!(commander.is_header_visible());
}
