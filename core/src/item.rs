use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A project card in the showcase deck. Built once from the content catalog
/// and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayItem {
    pub id: ItemId,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub technologies: &'static [&'static str],
    pub gradient: &'static str,
    pub accent: &'static str,
    pub icon: &'static str,
    pub live_demo: Option<&'static str>,
    pub source_code: Option<&'static str>,
}

impl DisplayItem {
    pub fn has_links(&self) -> bool {
        self.live_demo.is_some() || self.source_code.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillTile {
    pub id: TileId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
    pub icon: &'static str,
}
