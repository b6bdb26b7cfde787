use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ContentFile {
    profile: ProfileEntry,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    skills: Vec<SkillEntry>,
    #[serde(default)]
    gallery: Vec<GalleryEntry>,
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
    #[serde(default)]
    featured: Vec<FeaturedEntry>,
    research: Option<ResearchEntry>,
}

#[derive(Deserialize)]
struct ProfileEntry {
    name: String,
    first_name: String,
    role: String,
    tagline: String,
    image: String,
    image_alt: String,
    resume_href: String,
    resume_download: String,
    location: String,
    email: String,
    phone: String,
    github_url: String,
    #[serde(default)]
    socials: Vec<SocialEntry>,
}

#[derive(Deserialize)]
struct SocialEntry {
    label: String,
    url: String,
    icon: String,
}

#[derive(Deserialize)]
struct ProjectEntry {
    id: u32,
    title: String,
    category: String,
    description: String,
    details: String,
    #[serde(default)]
    technologies: Vec<String>,
    gradient: String,
    accent: String,
    icon: String,
    live_demo: Option<String>,
    source_code: Option<String>,
}

#[derive(Deserialize)]
struct SkillEntry {
    name: String,
    icon: String,
    color: String,
    bg: String,
}

#[derive(Deserialize)]
struct GalleryEntry {
    id: u32,
    title: String,
    description: String,
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    url: String,
    icon: String,
}

#[derive(Deserialize)]
struct ExperienceEntry {
    company: String,
    role: String,
    period: String,
    #[serde(default)]
    projects: Vec<ExperienceProjectEntry>,
}

#[derive(Deserialize)]
struct ExperienceProjectEntry {
    name: String,
    desc: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct EducationEntry {
    degree: String,
    school: String,
    period: String,
    score: String,
}

#[derive(Deserialize)]
struct FeaturedEntry {
    title: String,
    desc: String,
    icon: String,
}

#[derive(Deserialize)]
struct ResearchEntry {
    title: String,
    subtitle: String,
    desc: String,
    #[serde(default)]
    tags: Vec<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate_content(&content, &content_path);

    let mut output = String::new();
    write_profile(&mut output, &content.profile);
    write_projects(&mut output, &content.projects);
    write_skills(&mut output, &content.skills);
    write_gallery(&mut output, &content.gallery);
    write_experience(&mut output, &content.experience);
    write_education(&mut output, &content.education);
    write_featured(&mut output, &content.featured);
    write_research(&mut output, content.research.as_ref());

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_content.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PORTFOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_opt_string(value: Option<&String>) -> String {
    match value {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn check_url(field: &str, owner: &str, value: &str, content_path: &Path) {
    if value.trim().is_empty() {
        panic!(
            "{field} for '{owner}' cannot be empty in {}",
            content_path.display()
        );
    }
    if value.starts_with("data:") {
        panic!(
            "{field} for '{owner}' cannot be a data URL in {}",
            content_path.display()
        );
    }
}

fn validate_content(content: &ContentFile, content_path: &Path) {
    let profile = &content.profile;
    if profile.name.trim().is_empty() {
        panic!("profile name cannot be empty in {}", content_path.display());
    }
    check_url("image", &profile.name, &profile.image, content_path);
    check_url("resume_href", &profile.name, &profile.resume_href, content_path);
    check_url("github_url", &profile.name, &profile.github_url, content_path);
    for social in &profile.socials {
        check_url("url", &social.label, &social.url, content_path);
    }

    let mut ids = HashSet::new();
    for project in &content.projects {
        if project.id == 0 {
            panic!(
                "project '{}' must have a non-zero id in {}",
                project.title,
                content_path.display()
            );
        }
        if project.title.trim().is_empty() {
            panic!(
                "project {} has an empty title in {}",
                project.id,
                content_path.display()
            );
        }
        if !ids.insert(project.id) {
            panic!(
                "duplicate project id {} in {}",
                project.id,
                content_path.display()
            );
        }
        if let Some(url) = project.live_demo.as_ref() {
            check_url("live_demo", &project.title, url, content_path);
        }
        if let Some(url) = project.source_code.as_ref() {
            check_url("source_code", &project.title, url, content_path);
        }
    }

    let mut names = HashSet::new();
    for skill in &content.skills {
        if skill.name.trim().is_empty() {
            panic!("skill name cannot be empty in {}", content_path.display());
        }
        if !names.insert(skill.name.to_ascii_lowercase()) {
            panic!(
                "duplicate skill '{}' in {}",
                skill.name,
                content_path.display()
            );
        }
    }

    let mut gallery_ids = HashSet::new();
    for item in &content.gallery {
        if item.id == 0 {
            panic!(
                "gallery item '{}' must have a non-zero id in {}",
                item.title,
                content_path.display()
            );
        }
        if item.title.trim().is_empty() {
            panic!(
                "gallery item {} has an empty title in {}",
                item.id,
                content_path.display()
            );
        }
        if !gallery_ids.insert(item.id) {
            panic!(
                "duplicate gallery id {} in {}",
                item.id,
                content_path.display()
            );
        }
        check_url("image", &item.title, &item.image, content_path);
        check_url("url", &item.title, &item.url, content_path);
    }
}

fn write_profile(output: &mut String, profile: &ProfileEntry) {
    writeln!(output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(output, "    name: {},", rust_string(&profile.name)).unwrap();
    writeln!(output, "    first_name: {},", rust_string(&profile.first_name)).unwrap();
    writeln!(output, "    role: {},", rust_string(&profile.role)).unwrap();
    writeln!(output, "    tagline: {},", rust_string(&profile.tagline)).unwrap();
    writeln!(output, "    image: {},", rust_string(&profile.image)).unwrap();
    writeln!(output, "    image_alt: {},", rust_string(&profile.image_alt)).unwrap();
    writeln!(output, "    resume_href: {},", rust_string(&profile.resume_href)).unwrap();
    writeln!(output, "    resume_download: {},", rust_string(&profile.resume_download)).unwrap();
    writeln!(output, "    location: {},", rust_string(&profile.location)).unwrap();
    writeln!(output, "    email: {},", rust_string(&profile.email)).unwrap();
    writeln!(output, "    phone: {},", rust_string(&profile.phone)).unwrap();
    writeln!(output, "    github_url: {},", rust_string(&profile.github_url)).unwrap();
    writeln!(output, "    socials: &[").unwrap();
    for social in &profile.socials {
        writeln!(
            output,
            "        SocialLink {{ label: {}, url: {}, icon: {} }},",
            rust_string(&social.label),
            rust_string(&social.url),
            rust_string(&social.icon)
        )
        .unwrap();
    }
    writeln!(output, "    ],").unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_projects(output: &mut String, projects: &[ProjectEntry]) {
    writeln!(output, "pub const PROJECTS: &[DisplayItem] = &[").unwrap();
    for project in projects {
        writeln!(output, "    DisplayItem {{").unwrap();
        writeln!(output, "        id: ItemId({}),", project.id).unwrap();
        writeln!(output, "        title: {},", rust_string(&project.title)).unwrap();
        writeln!(output, "        category: {},", rust_string(&project.category)).unwrap();
        writeln!(output, "        description: {},", rust_string(&project.description)).unwrap();
        writeln!(output, "        details: {},", rust_string(&project.details)).unwrap();
        writeln!(
            output,
            "        technologies: {},",
            rust_str_slice(&project.technologies)
        )
        .unwrap();
        writeln!(output, "        gradient: {},", rust_string(&project.gradient)).unwrap();
        writeln!(output, "        accent: {},", rust_string(&project.accent)).unwrap();
        writeln!(output, "        icon: {},", rust_string(&project.icon)).unwrap();
        writeln!(
            output,
            "        live_demo: {},",
            rust_opt_string(project.live_demo.as_ref())
        )
        .unwrap();
        writeln!(
            output,
            "        source_code: {},",
            rust_opt_string(project.source_code.as_ref())
        )
        .unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_skills(output: &mut String, skills: &[SkillEntry]) {
    writeln!(output, "pub const SKILLS: &[SkillTile] = &[").unwrap();
    for (index, skill) in skills.iter().enumerate() {
        writeln!(
            output,
            "    SkillTile {{ id: TileId({}), name: {}, icon: {}, color: {}, bg: {} }},",
            index,
            rust_string(&skill.name),
            rust_string(&skill.icon),
            rust_string(&skill.color),
            rust_string(&skill.bg)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_gallery(output: &mut String, gallery: &[GalleryEntry]) {
    writeln!(output, "pub const GALLERY: &[GalleryItem] = &[").unwrap();
    for item in gallery {
        writeln!(output, "    GalleryItem {{").unwrap();
        writeln!(output, "        id: ItemId({}),", item.id).unwrap();
        writeln!(output, "        title: {},", rust_string(&item.title)).unwrap();
        writeln!(output, "        description: {},", rust_string(&item.description)).unwrap();
        writeln!(output, "        image: {},", rust_string(&item.image)).unwrap();
        writeln!(output, "        tags: {},", rust_str_slice(&item.tags)).unwrap();
        writeln!(output, "        url: {},", rust_string(&item.url)).unwrap();
        writeln!(output, "        icon: {},", rust_string(&item.icon)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_experience(output: &mut String, experience: &[ExperienceEntry]) {
    writeln!(output, "pub const EXPERIENCE: &[Experience] = &[").unwrap();
    for entry in experience {
        writeln!(output, "    Experience {{").unwrap();
        writeln!(output, "        company: {},", rust_string(&entry.company)).unwrap();
        writeln!(output, "        role: {},", rust_string(&entry.role)).unwrap();
        writeln!(output, "        period: {},", rust_string(&entry.period)).unwrap();
        writeln!(output, "        projects: &[").unwrap();
        for project in &entry.projects {
            writeln!(
                output,
                "            ExperienceProject {{ name: {}, desc: {}, tags: {} }},",
                rust_string(&project.name),
                rust_string(&project.desc),
                rust_str_slice(&project.tags)
            )
            .unwrap();
        }
        writeln!(output, "        ],").unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_education(output: &mut String, education: &[EducationEntry]) {
    writeln!(output, "pub const EDUCATION: &[Education] = &[").unwrap();
    for entry in education {
        writeln!(
            output,
            "    Education {{ degree: {}, school: {}, period: {}, score: {} }},",
            rust_string(&entry.degree),
            rust_string(&entry.school),
            rust_string(&entry.period),
            rust_string(&entry.score)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_featured(output: &mut String, featured: &[FeaturedEntry]) {
    writeln!(output, "pub const FEATURED: &[FeaturedProject] = &[").unwrap();
    for entry in featured {
        writeln!(
            output,
            "    FeaturedProject {{ title: {}, desc: {}, icon: {} }},",
            rust_string(&entry.title),
            rust_string(&entry.desc),
            rust_string(&entry.icon)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_research(output: &mut String, research: Option<&ResearchEntry>) {
    let Some(research) = research else {
        writeln!(output, "pub const RESEARCH: Option<ResearchHighlight> = None;").unwrap();
        return;
    };
    writeln!(
        output,
        "pub const RESEARCH: Option<ResearchHighlight> = Some(ResearchHighlight {{"
    )
    .unwrap();
    writeln!(output, "    title: {},", rust_string(&research.title)).unwrap();
    writeln!(output, "    subtitle: {},", rust_string(&research.subtitle)).unwrap();
    writeln!(output, "    desc: {},", rust_string(&research.desc)).unwrap();
    writeln!(output, "    tags: {},", rust_str_slice(&research.tags)).unwrap();
    writeln!(output, "}});").unwrap();
}
