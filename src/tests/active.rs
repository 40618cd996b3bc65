use super::ActiveSection;
use crate::section::SectionId;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_starts_unset() {
    let active = ActiveSection::new();
    assert_eq!(active.get(), None);
}

#[test]
fn test_listeners_see_changes_only() {
    let mut active = ActiveSection::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let _sub = active.subscribe(move |id| log.borrow_mut().push(id));

    assert!(active.set(SectionId::Hero));
    assert!(!active.set(SectionId::Hero));
    assert!(active.set(SectionId::Skills));

    assert_eq!(*seen.borrow(), vec![SectionId::Hero, SectionId::Skills]);
    assert_eq!(active.get(), Some(SectionId::Skills));
}

#[test]
fn test_dropping_subscription_unregisters() {
    let mut active = ActiveSection::new();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let sub = active.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(active.listener_count(), 1);

    active.set(SectionId::Hero);
    sub.unsubscribe();
    assert_eq!(active.listener_count(), 0);
    active.set(SectionId::Contact);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_unsubscribe_from_inside_listener() {
    let mut active = ActiveSection::new();
    let slot: Rc<RefCell<Option<super::Subscription>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let sub = active.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        inner.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    active.set(SectionId::Hero);
    active.set(SectionId::Skills);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(active.listener_count(), 0);
}
