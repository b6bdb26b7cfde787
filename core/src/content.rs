use crate::item::{DisplayItem, GalleryItem, ItemId, SkillTile, TileId};

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub resume_href: &'static str,
    pub resume_download: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github_url: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Clone, Copy, Debug)]
pub struct ExperienceProject {
    pub name: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub projects: &'static [ExperienceProject],
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub score: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ResearchHighlight {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/portfolio_content.rs"));

pub fn project_by_id(id: ItemId) -> Option<&'static DisplayItem> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn skill_by_name(name: &str) -> Option<&'static SkillTile> {
    let trimmed = name.trim();
    SKILLS
        .iter()
        .find(|skill| skill.name.eq_ignore_ascii_case(trimmed))
}

pub fn gallery_by_id(id: ItemId) -> Option<&'static GalleryItem> {
    GALLERY.iter().find(|item| item.id == id)
}
