use super::{SectionId, SectionRegistry};
use crate::error::Error;

#[test]
fn test_parse_known_and_alias_tokens() {
    assert_eq!("skills".parse::<SectionId>().unwrap(), SectionId::Skills);
    assert_eq!("Contact".parse::<SectionId>().unwrap(), SectionId::Contact);
    assert_eq!("intro".parse::<SectionId>().unwrap(), SectionId::Hero);
    assert_eq!("work".parse::<SectionId>().unwrap(), SectionId::Experience);
}

#[test]
fn test_unknown_token_rejected_at_parse() {
    let err = "blog".parse::<SectionId>().unwrap_err();
    assert!(matches!(err, Error::UnknownSection(ref s) if s == "blog"));
}

#[test]
fn test_registry_keeps_insertion_order() {
    let registry =
        SectionRegistry::new([SectionId::Hero, SectionId::Experience, SectionId::Contact]).unwrap();
    let order: Vec<SectionId> = registry.iter().collect();
    assert_eq!(
        order,
        vec![SectionId::Hero, SectionId::Experience, SectionId::Contact]
    );
    assert_eq!(registry.position(SectionId::Contact), Some(2));
    assert_eq!(registry.first(), SectionId::Hero);
    assert_eq!(registry.next(SectionId::Hero), Some(SectionId::Experience));
    assert_eq!(registry.next(SectionId::Contact), None);
    assert_eq!(registry.prev(SectionId::Hero), None);
    assert_eq!(registry.prev(SectionId::Contact), Some(SectionId::Experience));
}

#[test]
fn test_registry_rejects_duplicates_and_empty() {
    assert!(matches!(
        SectionRegistry::new([SectionId::Hero, SectionId::Hero]),
        Err(Error::DuplicateSection("hero"))
    ));
    assert!(matches!(
        SectionRegistry::new(Vec::new()),
        Err(Error::EmptyRegistry)
    ));
}

#[test]
fn test_handles_resolve_once() {
    let registry = SectionRegistry::new([SectionId::Hero, SectionId::Skills]).unwrap();
    let handle = registry.handle(SectionId::Skills).unwrap();
    assert_eq!(handle.index(), 1);
    assert_eq!(registry.get(handle), Some(SectionId::Skills));
    assert!(registry.handle(SectionId::Contact).is_none());
}
