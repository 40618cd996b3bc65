use super::{Debounce, Throttle};
use std::time::{Duration, Instant};

#[test]
fn test_leading_edge_then_trailing_flush() {
    let start = Instant::now();
    let mut throttle = Throttle::new(Duration::from_millis(16));

    assert!(throttle.hit(start));
    assert!(!throttle.hit(start + Duration::from_millis(5)));
    assert!(!throttle.hit(start + Duration::from_millis(10)));
    assert!(throttle.is_pending());

    // Window not over yet.
    assert!(!throttle.poll(start + Duration::from_millis(12)));
    assert!(throttle.poll(start + Duration::from_millis(16)));
    assert!(!throttle.is_pending());
    assert!(!throttle.poll(start + Duration::from_millis(40)));
}

#[test]
fn test_poll_without_pending_does_nothing() {
    let start = Instant::now();
    let mut throttle = Throttle::default();
    assert!(!throttle.poll(start));
    assert!(throttle.hit(start));
    assert!(!throttle.poll(start + Duration::from_secs(1)));
}

#[test]
fn test_debounce_fires_once_after_quiet() {
    let start = Instant::now();
    let mut debounce = Debounce::new(Duration::from_millis(150));

    debounce.trigger(start);
    debounce.trigger(start + Duration::from_millis(100));
    assert!(!debounce.poll(start + Duration::from_millis(200)));
    assert!(debounce.poll(start + Duration::from_millis(250)));
    assert!(!debounce.poll(start + Duration::from_millis(400)));

    debounce.trigger(start + Duration::from_millis(500));
    debounce.cancel();
    assert!(!debounce.poll(start + Duration::from_secs(2)));
}
