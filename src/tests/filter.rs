use super::{ProjectFilter, NO_MATCHES};
use crate::profile::{Block, Profile};
use crate::section::SectionId;

fn headings(profile: &Profile, id: SectionId) -> Vec<String> {
    profile
        .sections
        .iter()
        .filter(|s| s.id == id)
        .flat_map(|s| s.blocks.iter().map(|b| b.heading.clone()))
        .collect()
}

#[test]
fn test_inactive_filter_keeps_everything() {
    let sample = Profile::sample();
    let filter = ProjectFilter::new();
    assert!(!filter.is_active());
    assert_eq!(filter.apply(&sample), sample);
    assert_eq!(filter.label(), "all");
}

#[test]
fn test_category_narrows_only_projects() {
    let sample = Profile::sample();
    let mut filter = ProjectFilter::new();
    filter.set_category(Some("Open source".to_string()));

    let filtered = filter.apply(&sample);
    assert_eq!(headings(&filtered, SectionId::Projects), vec!["tideline", "quarry"]);
    assert_eq!(
        headings(&filtered, SectionId::Experience),
        headings(&sample, SectionId::Experience)
    );
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let mut filter = ProjectFilter::new();
    let block = Block {
        heading: "quarry".to_string(),
        subheading: Some("Contributor".to_string()),
        body: vec!["Query planner fixes.".to_string()],
        tags: vec!["SQL".to_string()],
        ..Block::default()
    };

    for term in ["QUARRY", "contrib", "planner", "sql", "  sql  "] {
        filter.set_search(term);
        assert!(filter.matches(&block), "{term:?} should match");
    }
    filter.set_search("kafka");
    assert!(!filter.matches(&block));

    // Category applies on top of the search.
    filter.set_search("sql");
    filter.set_category(Some("Web".to_string()));
    assert!(!filter.matches(&block));
}

#[test]
fn test_no_matches_leaves_placeholder() {
    let mut filter = ProjectFilter::new();
    filter.set_search("cobol");
    let filtered = filter.apply(&Profile::sample());
    assert_eq!(headings(&filtered, SectionId::Projects), vec![NO_MATCHES]);
    assert_eq!(filtered.section_ids(), Profile::sample().section_ids());
}

#[test]
fn test_cycle_category_wraps_back_to_all() {
    let available = vec!["Open source".to_string(), "Side project".to_string()];
    let mut filter = ProjectFilter::new();

    assert_eq!(filter.cycle_category(&available), Some("Open source"));
    assert_eq!(filter.cycle_category(&available), Some("Side project"));
    assert_eq!(filter.cycle_category(&available), None);
    assert_eq!(filter.cycle_category(&[]), None);

    filter.set_category(Some("Retired".to_string()));
    assert_eq!(filter.cycle_category(&available), None);
}

#[test]
fn test_search_editing_and_label() {
    let mut filter = ProjectFilter::new();
    for c in "rust!".chars() {
        filter.push_search(c);
    }
    filter.pop_search();
    assert_eq!(filter.search(), "rust");
    filter.set_category(Some("Open source".to_string()));
    assert_eq!(filter.label(), "Open source \"rust\"");

    filter.clear();
    assert!(!filter.is_active());
    assert_eq!(filter.category(), None);
}
