//! Core types for the persona engine.
//!
//! Repository snapshots and profile metadata come in; score vectors, persona
//! cards, project cards and interest clusters come out. Everything here is a
//! plain value: built fresh per computation and never mutated afterwards.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::catalog::Category;

// ─────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────

/// One repository as handed over by the fetching layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoRecord {
    /// Stable `owner/name` identifier.
    pub full_name: String,

    /// Primary language, if GitHub detected one.
    pub language: Option<String>,

    /// Topic tags (compared case-insensitively).
    pub topics: Vec<String>,

    /// Free-text description.
    pub description: Option<String>,

    /// Stargazer count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,

    /// Canonical URL.
    pub url: String,
}

impl RepoRecord {
    /// Create a record with only the identifier set.
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let url = format!("https://github.com/{}", full_name);
        Self {
            full_name,
            url,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stars = stars;
        self
    }

    pub fn with_forks(mut self, forks: u64) -> Self {
        self.forks = forks;
        self
    }

    /// Name segment after the owner separator (`owner/name` -> `name`).
    pub fn short_name(&self) -> &str {
        self.full_name
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.full_name)
    }

    /// Case-insensitive exact topic membership.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }

    /// Case-insensitive language equality. A missing language never matches.
    pub fn language_is(&self, language: &str) -> bool {
        self.language
            .as_deref()
            .map_or(false, |l| l.eq_ignore_ascii_case(language))
    }
}

/// Account profile metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubProfile {
    pub login: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    pub followers: u64,

    pub following: u64,

    /// Account creation timestamp (RFC 3339 or `YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Borrowed view over everything one computation needs.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInput<'a> {
    pub profile: &'a GithubProfile,
    pub owned: &'a [RepoRecord],
    pub starred: &'a [RepoRecord],
}

// ─────────────────────────────────────────────────────────────────
// Score Vectors
// ─────────────────────────────────────────────────────────────────

/// Raw per-category scores, kept in catalog order.
///
/// Every category of the catalog the vector was built from is present;
/// unknown ids read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreVector {
    entries: Vec<(&'static str, f64)>,
}

impl ScoreVector {
    /// All-zero vector over the given categories.
    pub fn zeroed(categories: &[Category]) -> Self {
        Self {
            entries: categories.iter().map(|c| (c.id, 0.0)).collect(),
        }
    }

    /// Build from explicit pairs, in the given order.
    pub fn from_pairs(pairs: &[(&'static str, f64)]) -> Self {
        Self {
            entries: pairs.to_vec(),
        }
    }

    pub fn get(&self, id: &str) -> f64 {
        self.entries
            .iter()
            .find(|(cid, _)| *cid == id)
            .map_or(0.0, |(_, v)| *v)
    }

    /// Add to a category's score. Ids outside the vector are ignored.
    pub fn add(&mut self, id: &str, amount: f64) {
        if let Some((_, v)) = self.entries.iter_mut().find(|(cid, _)| *cid == id) {
            *v += amount;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Largest score, or 0 for an empty vector.
    pub fn max(&self) -> f64 {
        self.entries.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, v) in &self.entries {
            map.serialize_entry(id, v)?;
        }
        map.end()
    }
}

/// Scores rescaled to the 40..=100 display range (0 means no signal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedVector {
    entries: Vec<(&'static str, u32)>,
}

impl NormalizedVector {
    pub fn from_pairs(pairs: &[(&'static str, u32)]) -> Self {
        Self {
            entries: pairs.to_vec(),
        }
    }

    pub(crate) fn from_entries(entries: Vec<(&'static str, u32)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> u32 {
        self.entries
            .iter()
            .find(|(cid, _)| *cid == id)
            .map_or(0, |(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn max(&self) -> u32 {
        self.entries.iter().map(|(_, v)| *v).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NormalizedVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, v) in &self.entries {
            map.serialize_entry(id, v)?;
        }
        map.end()
    }
}

// ─────────────────────────────────────────────────────────────────
// Outputs
// ─────────────────────────────────────────────────────────────────

/// A category whose owned-only score cleared the activation threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivePersona {
    pub persona_id: &'static str,

    /// Normalized score / 100.
    pub confidence: f64,

    /// Dense 0-based position by descending confidence.
    pub rank: usize,
}

/// One labelled bar on a persona card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBar {
    pub label: String,
    pub value: u32,
}

/// Fully composed record for one active persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaCard {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub icon: String,
    pub color: String,
    pub gradient: [String; 2],
    pub confidence: f64,
    pub rank: usize,
    /// Experience label, e.g. `"10+ years"` or `"Active"`.
    pub experience: String,
    pub stats: Vec<StatBar>,
    pub stack: Vec<String>,
    pub details: Vec<String>,
    pub starred_repos: Vec<String>,
}

/// A named group of starred repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestCluster {
    pub label: String,
    /// Display bucket, e.g. `"10+ repos"`.
    pub count_label: String,
    pub examples: Vec<String>,
    pub count: usize,
}

/// One owned repository with its persona affinities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub tags: Vec<String>,
    /// Category ids by descending match strength.
    pub personas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
}

/// One radar chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    pub value: u32,
    pub color: String,
    pub category_id: String,
}

/// Complete output of one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDocument {
    pub profile: GithubProfile,
    pub personas: Vec<PersonaCard>,
    pub projects: Vec<ProjectCard>,
    pub radar: Vec<RadarAxis>,
    pub clusters: Vec<InterestCluster>,
}

impl fmt::Display for ProfileDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.profile.login)?;
        for card in &self.personas {
            writeln!(
                f,
                "  #{} {} ({:.0}%, {})",
                card.rank + 1,
                card.title,
                card.confidence * 100.0,
                card.experience
            )?;
        }
        writeln!(f, "  {} projects, {} interest clusters", self.projects.len(), self.clusters.len())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(RepoRecord::new("rust-lang/cargo").short_name(), "cargo");
        assert_eq!(RepoRecord::new("standalone").short_name(), "standalone");
    }

    #[test]
    fn test_default_url() {
        let repo = RepoRecord::new("octo/hello");
        assert_eq!(repo.url, "https://github.com/octo/hello");
    }

    #[test]
    fn test_topic_and_language_helpers() {
        let repo = RepoRecord::new("a/b")
            .with_language("Rust")
            .with_topics(["CLI", "terminal"]);
        assert!(repo.has_topic("cli"));
        assert!(!repo.has_topic("cl"));
        assert!(repo.language_is("rust"));
        assert!(!RepoRecord::new("a/c").language_is("rust"));
    }

    #[test]
    fn test_score_vector_unknown_ids() {
        let mut v = ScoreVector::from_pairs(&[("systems", 1.0)]);
        v.add("nope", 5.0);
        v.add("systems", 2.0);
        assert_eq!(v.get("systems"), 3.0);
        assert_eq!(v.get("nope"), 0.0);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_vectors_serialize_as_maps() {
        let v = NormalizedVector::from_pairs(&[("systems", 100), ("cloud", 0)]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"systems":100,"cloud":0}"#);
    }

    #[test]
    fn test_repo_deserialize_defaults() {
        let repo: RepoRecord = serde_json::from_str(r#"{"full_name":"a/b"}"#).unwrap();
        assert!(repo.language.is_none());
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stars, 0);
    }
}
