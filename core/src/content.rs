//! Portfolio Content Store
//!
//! The content store is the single source of truth for everything the page
//! displays: personal info, skill lists, the experience timeline, project
//! cards and theme color tokens. It is loaded exactly once before the first
//! render and never mutated afterwards; every section renderer reads the
//! same snapshot for the whole session.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "personal":   { "name": "...", "title": "...", "summary": "...",
//!                   "email": "...", "github": "...", "linkedin": "..." },
//!   "skills":     { "frontend": [...], "backend": [...],
//!                   "devops": [...], "architecture": [...] },
//!   "focus":      ["..."],
//!   "experience": [ { "year": "...", "company": "...", ... } ],
//!   "projects":   [ { "title": "...", "tech": [...], ... } ],
//!   "theme":      { "colors": { "accent": "#00ff95" } }
//! }
//! ```
//!
//! `personal`, `skills`, `experience` and `projects` are required; `focus`
//! and `theme` default to empty. Missing optional fields inside any section
//! deserialize to empty strings/lists, never to an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level sections that must be present for the page to render at all.
pub const REQUIRED_SECTIONS: &[&str] = &["personal", "skills", "experience", "projects"];

/// Errors raised while loading the content document.
///
/// All of these are fatal to startup: the page must never render from a
/// partially-initialized store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backing file could not be read
    #[error("failed to read content file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The document is not valid JSON or has a malformed section
    #[error("failed to parse content document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required top-level section is absent
    #[error("content document is missing required section `{0}`")]
    MissingSection(&'static str),
}

/// Name, title and contact details for the hero and contact sections
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// Skill lists grouped by category, in display order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub devops: Vec<String>,
    pub architecture: Vec<String>,
}

impl Skills {
    /// Categories in the order the hero terminal block lists them.
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Frontend", self.frontend.as_slice()),
            ("Backend", self.backend.as_slice()),
            ("DevOps", self.devops.as_slice()),
            ("Architecture", self.architecture.as_slice()),
        ]
    }
}

/// One entry of the experience timeline.
///
/// Entries are kept in document order (reverse-chronological by convention);
/// the store never re-sorts them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub year: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// One project card
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub demo: String,
    pub github: String,
}

/// Semantic color roles, consumed only by presentation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: BTreeMap<String, String>,
}

/// The immutable portfolio document.
///
/// Constructed through [`ContentStore::load`] / [`ContentStore::from_json`]
/// and then read-only: there is no mutation API.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStore {
    personal: Personal,
    skills: Skills,
    focus: Vec<String>,
    experience: Vec<ExperienceEntry>,
    projects: Vec<Project>,
    theme: Theme,
}

impl ContentStore {
    /// Load the content document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading content document");
        Self::from_json(&raw)
    }

    /// Parse a content document from a JSON string.
    ///
    /// Required sections are checked on the raw document first so that the
    /// error names the missing section instead of surfacing as a generic
    /// deserialization failure.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        for &section in REQUIRED_SECTIONS {
            if value.get(section).is_none() {
                return Err(ContentError::MissingSection(section));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The content document bundled into the binary at build time.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(include_str!("../../content/portfolio.json"))
    }

    pub fn personal(&self) -> &Personal {
        &self.personal
    }

    pub fn skills(&self) -> &Skills {
        &self.skills
    }

    /// Current focus areas; empty when the section is absent.
    pub fn focus(&self) -> &[String] {
        &self.focus
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Theme tokens; empty when the section is absent.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
