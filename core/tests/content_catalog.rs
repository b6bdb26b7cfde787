use std::collections::HashSet;

use portfolio_core::content::{
    gallery_by_id, project_by_id, skill_by_name, GALLERY, PROFILE, PROJECTS, SKILLS,
};
use portfolio_core::{CardDeck, ItemId, PointerTilt};

#[test]
fn project_ids_are_unique() {
    let ids: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn gallery_ids_are_nonzero_and_unique() {
    assert!(GALLERY.iter().all(|item| item.id != ItemId(0)));
    let ids: HashSet<_> = GALLERY.iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), GALLERY.len());
    assert!(gallery_by_id(ItemId(0)).is_none());
}

#[test]
fn lookups_find_catalog_entries() {
    for project in PROJECTS {
        assert_eq!(project_by_id(project.id).map(|found| found.title), Some(project.title));
    }
    for item in GALLERY {
        assert!(gallery_by_id(item.id).is_some());
    }
    if let Some(skill) = SKILLS.first() {
        let upper = skill.name.to_ascii_uppercase();
        assert_eq!(skill_by_name(&format!("  {upper} ")).map(|s| s.id), Some(skill.id));
    }
    assert!(project_by_id(ItemId(u32::MAX)).is_none());
}

#[test]
fn controllers_build_from_catalog() {
    let deck = CardDeck::from_items(PROJECTS);
    assert_eq!(deck.len(), PROJECTS.len());
    let tilt = PointerTilt::from_tiles(SKILLS);
    assert_eq!(tilt.tiles().len(), SKILLS.len());
}

#[test]
fn profile_has_a_name() {
    assert!(!PROFILE.name.trim().is_empty());
}
