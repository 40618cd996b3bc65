use super::Profile;
use crate::error::Error;
use crate::section::SectionId;
use std::io::Write;
use tempfile::NamedTempFile;

const JSON: &str = r#"{
    "name": "Sam Lee",
    "headline": "Designer",
    "sections": [
        { "id": "intro", "blocks": [{ "heading": "Hi", "body": ["Hello there."] }] },
        { "id": "work", "title": "Jobs", "blocks": [{ "heading": "Designer", "period": "2020 - now" }] },
        { "id": "contact" }
    ]
}"#;

#[test]
fn test_parse_profile_with_aliases_and_defaults() {
    let profile = Profile::from_json(JSON).unwrap();
    assert_eq!(
        profile.section_ids(),
        vec![SectionId::Hero, SectionId::Experience, SectionId::Contact]
    );
    assert_eq!(profile.sections[1].heading(), "Jobs");
    assert_eq!(profile.sections[2].heading(), "Contact");
    assert!(profile.sections[2].blocks.is_empty());
    assert!(profile.avatar.is_none());
}

#[test]
fn test_unknown_section_is_rejected() {
    let json = r#"{ "name": "X", "sections": [{ "id": "blog" }] }"#;
    let err = Profile::from_json(json).unwrap_err();
    assert!(matches!(err, Error::Profile(_)));
    assert!(err.to_string().contains("blog"));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{JSON}").unwrap();
    let profile = Profile::load(file.path()).unwrap();
    assert_eq!(profile.name, "Sam Lee");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Profile::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_sample_round_trips_through_json() {
    let sample = Profile::sample();
    let json = serde_json::to_string(&sample).unwrap();
    assert_eq!(Profile::from_json(&json).unwrap(), sample);
}

#[test]
fn test_project_categories_are_distinct_and_ordered() {
    let sample = Profile::sample();
    assert_eq!(sample.project_categories(), vec!["Open source", "Side project"]);

    let json = r#"{ "name": "X", "sections": [
        { "id": "skills", "blocks": [{ "heading": "Rust", "category": "Tools" }] },
        { "id": "projects", "blocks": [{ "heading": "a" }, { "heading": "b", "category": "Web" }] }
    ] }"#;
    let profile = Profile::from_json(json).unwrap();
    assert_eq!(profile.project_categories(), vec!["Web"]);
}

#[test]
fn test_blank_profile_has_one_empty_section() {
    let blank = Profile::blank("Sam");
    assert_eq!(blank.name, "Sam");
    assert_eq!(blank.section_ids(), vec![SectionId::Hero]);
    assert!(blank.sections[0].blocks.is_empty());
}
