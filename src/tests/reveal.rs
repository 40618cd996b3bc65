use super::{RevealAnimator, RevealPolicy};
use crate::geometry::{Extent, Viewport};
use crate::responsive::DeviceType;
use std::time::{Duration, Instant};

fn viewport_at(scroll_y: f64) -> Viewport {
    Viewport {
        scroll_y,
        height: 800.0,
        document_height: 5000.0,
    }
}

#[test]
fn test_reveal_fires_once_across_scroll_out_and_back() {
    let now = Instant::now();
    let mut animator = RevealAnimator::new(RevealPolicy::desktop());
    let block = animator.mount(Extent::new(1500.0, 200.0), now);

    assert!(animator.observe(&viewport_at(0.0), now).is_empty());
    assert!(!animator.is_revealed(block));

    assert_eq!(animator.observe(&viewport_at(1000.0), now), vec![block]);
    assert!(animator.is_revealed(block));

    // Out of view, then back in: nothing new fires and the block stays revealed.
    assert!(animator.observe(&viewport_at(3000.0), now).is_empty());
    assert!(animator.is_revealed(block));
    assert!(animator.observe(&viewport_at(1000.0), now).is_empty());
    assert_eq!(animator.pending(), 0);
}

#[test]
fn test_bottom_margin_delays_reveal() {
    let now = Instant::now();
    let mut animator = RevealAnimator::new(RevealPolicy::desktop());
    // Top edge sits 30 units above the viewport bottom, inside the 50 unit margin.
    let block = animator.mount(Extent::new(770.0, 100.0), now);
    assert!(animator.observe(&viewport_at(0.0), now).is_empty());
    assert_eq!(animator.observe(&viewport_at(100.0), now), vec![block]);
}

#[test]
fn test_mobile_fallback_forces_reveal() {
    let mounted = Instant::now();
    let mut animator = RevealAnimator::new(RevealPolicy::for_device(DeviceType::Mobile));
    let block = animator.mount(Extent::new(4000.0, 100.0), mounted);

    let early = mounted + Duration::from_millis(1999);
    assert!(animator.observe(&viewport_at(0.0), early).is_empty());

    let late = mounted + Duration::from_secs(2);
    assert_eq!(animator.observe(&viewport_at(0.0), late), vec![block]);
    assert!(animator.observe(&viewport_at(0.0), late).is_empty());
}

#[test]
fn test_desktop_has_no_fallback() {
    let mounted = Instant::now();
    let mut animator = RevealAnimator::new(RevealPolicy::for_device(DeviceType::Desktop));
    animator.mount(Extent::new(4000.0, 100.0), mounted);
    let much_later = mounted + Duration::from_secs(60);
    assert!(animator.observe(&viewport_at(0.0), much_later).is_empty());
    assert_eq!(animator.pending(), 1);
}

#[test]
fn test_unmount_forgets_block() {
    let now = Instant::now();
    let mut animator = RevealAnimator::new(RevealPolicy::desktop());
    let block = animator.mount(Extent::new(0.0, 100.0), now);
    animator.unmount(block);
    assert!(animator.observe(&viewport_at(0.0), now).is_empty());
    assert!(!animator.is_revealed(block));
    assert_eq!(animator.pending(), 0);
}
