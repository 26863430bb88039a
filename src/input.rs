//! Analysis input — loading GitHub-shaped JSON and curating it for the engine.
//!
//! Accepts GitHub REST field names (`full_name`, `stargazers_count`, ...)
//! alongside short aliases, drops forks and archived repos from the owned
//! list, and deduplicates both lists before anything is scored.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::persona::{GithubProfile, ProfileInput, RepoRecord};

/// Path value meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

// ─────────────────────────────────────────────────────────────────
// Raw Shapes
// ─────────────────────────────────────────────────────────────────

/// Repository as returned by the GitHub API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRepo {
    pub full_name: String,

    pub language: Option<String>,

    pub topics: Vec<String>,

    pub description: Option<String>,

    #[serde(alias = "stars")]
    pub stargazers_count: u64,

    #[serde(alias = "forks")]
    pub forks_count: u64,

    #[serde(alias = "url")]
    pub html_url: Option<String>,

    pub fork: bool,

    pub archived: bool,
}

impl RawRepo {
    pub fn into_record(self) -> RepoRecord {
        let mut record = RepoRecord::new(self.full_name);
        record.language = self.language.filter(|l| !l.trim().is_empty());
        record.topics = self.topics;
        record.description = self.description.filter(|d| !d.trim().is_empty());
        record.stars = self.stargazers_count;
        record.forks = self.forks_count;
        if let Some(url) = self.html_url.filter(|u| !u.is_empty()) {
            record.url = url;
        }
        record
    }
}

/// Raw input document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub profile: GithubProfile,
    pub owned: Vec<RawRepo>,
    pub starred: Vec<RawRepo>,
}

// ─────────────────────────────────────────────────────────────────
// Curated Input
// ─────────────────────────────────────────────────────────────────

/// Curated input, ready for the engine.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    pub profile: GithubProfile,
    pub owned: Vec<RepoRecord>,
    pub starred: Vec<RepoRecord>,
}

impl AnalysisInput {
    /// Load from a JSON file, or stdin for `-`.
    pub fn load(path: &str) -> Result<Self> {
        let (content, origin) = if path == STDIN_MARKER {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::IoRead {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            (buf, PathBuf::from("<stdin>"))
        } else {
            let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
            if !expanded.exists() {
                return Err(Error::input_not_found(&expanded));
            }
            let content = fs::read_to_string(&expanded).map_err(|e| Error::IoRead {
                path: expanded.clone(),
                source: e,
            })?;
            (content, expanded)
        };

        let input = Self::from_json(&content, &origin)?;
        info!(
            source = %origin.display(),
            login = %input.profile.login,
            owned = input.owned.len(),
            starred = input.starred.len(),
            "Input loaded"
        );
        Ok(input)
    }

    /// Parse and curate a JSON document.
    pub fn from_json(content: &str, origin: &Path) -> Result<Self> {
        let raw: RawInput = serde_json::from_str(content).map_err(|e| Error::InputParse {
            path: origin.to_path_buf(),
            source: e,
        })?;
        Ok(curate(raw))
    }

    pub fn as_profile_input(&self) -> ProfileInput<'_> {
        ProfileInput {
            profile: &self.profile,
            owned: &self.owned,
            starred: &self.starred,
        }
    }
}

/// Drop forks/archived owned repos and deduplicate both lists.
pub fn curate(raw: RawInput) -> AnalysisInput {
    let owned_total = raw.owned.len();
    let starred_total = raw.starred.len();

    let owned = dedupe(raw.owned.into_iter().filter(|r| !r.fork && !r.archived));
    let starred = dedupe(raw.starred.into_iter());

    debug!(
        owned_kept = owned.len(),
        owned_dropped = owned_total - owned.len(),
        starred_kept = starred.len(),
        starred_dropped = starred_total - starred.len(),
        "Input curated"
    );

    AnalysisInput {
        profile: raw.profile,
        owned,
        starred,
    }
}

/// Parse an `--as-of` value: RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_as_of(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            Error::invalid_argument("--as-of", format!("'{}' is not RFC 3339 or YYYY-MM-DD", value))
        })
}

fn dedupe(repos: impl Iterator<Item = RawRepo>) -> Vec<RepoRecord> {
    let mut seen = HashSet::new();
    repos
        .filter(|r| !r.full_name.trim().is_empty())
        .filter(|r| seen.insert(r.full_name.to_lowercase()))
        .map(RawRepo::into_record)
        .collect()
}
