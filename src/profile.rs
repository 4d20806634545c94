// src/profile.rs
//
// Static page content. Everything here comes from the `[profile]` table of
// the site config; the templates only read it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub about: Vec<String>,

    // Paths relative to the static mount, e.g. "profile.jpg".
    pub photo: Option<String>,
    pub resume: Option<String>,

    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100, clamped when rendered.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub kind: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: Option<String>,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// File name under `static/certificates/`.
    pub file: Option<String>,
}

impl Certification {
    pub fn href(&self) -> Option<String> {
        self.file
            .as_deref()
            .map(|file| static_href(&["certificates", file]))
    }
}

impl Profile {
    pub fn photo_href(&self) -> Option<String> {
        self.photo.as_deref().map(|p| static_href(&[p]))
    }

    pub fn resume_href(&self) -> Option<String> {
        self.resume.as_deref().map(|p| static_href(&[p]))
    }

    /// Certification categories with their counts, in first-seen order.
    pub fn certification_categories(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = Vec::new();
        for cert in &self.certifications {
            match out.iter_mut().find(|(name, _)| *name == cert.category) {
                Some((_, count)) => *count += 1,
                None => out.push((cert.category.as_str(), 1)),
            }
        }
        out
    }
}

/// `/static/<seg>/<seg>` with every segment percent-encoded. Segments may
/// themselves contain `/` (e.g. "img/me.jpg"); those are split first.
pub fn static_href(segments: &[&str]) -> String {
    let mut href = String::from("/static");
    for seg in segments.iter().flat_map(|s| s.split('/')) {
        if seg.is_empty() {
            continue;
        }
        href.push('/');
        href.push_str(&urlencoding::encode(seg));
    }
    href
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Software Developer".to_string(),
            tagline: "I build things for the web.".to_string(),
            location: None,
            email: None,
            phone: None,
            about: vec![
                "Tell visitors who you are. Edit the [profile] table in portfolio.toml.".to_string(),
            ],
            photo: None,
            resume: None,
            socials: Vec::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            certifications: Vec::new(),
        }
    }
}
