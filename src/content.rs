//! Static portfolio content.
//!
//! The records shown by the document are authored in `assets/portfolio.json`
//! and compiled into the binary. Nothing mutates them after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const EMBEDDED_PORTFOLIO: &str = include_str!("../assets/portfolio.json");

/// Everything the document renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: Vec<Paragraph>,
    pub news: Vec<NewsItem>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectCard>,
}

/// Owner of the portfolio, shown in the header, hero and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Letters drawn in the avatar badge
    pub initials: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A paragraph of running text, some spans of which may be links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

impl Paragraph {
    /// Returns the paragraph's text without link targets.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub venue: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Portfolio {
    /// Parses portfolio content from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse portfolio content")
    }

    /// Loads the content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_PORTFOLIO).context("Embedded portfolio content is invalid")
    }
}
