//! Repo scoring, score aggregation and normalization.
//!
//! A repository earns points against a category for each signal it shares
//! with it. Two aggregate vectors are built per computation: owned-only
//! (what the account builds) and combined (stars plus weighted owned repos,
//! what the account engages with).

use serde::Serialize;

use super::catalog::Category;
use super::matching::{LengthGated, MatchStrategy};
use super::types::{NormalizedVector, RepoRecord, ScoreVector};

// ─────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────

pub const LANGUAGE_WEIGHT: f64 = 2.0;
pub const TOPIC_WEIGHT: f64 = 3.0;
pub const DESCRIPTION_KEYWORD_WEIGHT: f64 = 1.5;
pub const NAME_KEYWORD_WEIGHT: f64 = 1.0;

/// Per-repo multiplier for starred repositories.
pub const STARRED_MULTIPLIER: f64 = 1.0;
/// Per-repo multiplier for owned repositories in the combined vector.
pub const OWNED_MULTIPLIER: f64 = 3.0;

/// Lowest normalized value a category with any signal displays.
pub const NORMALIZED_FLOOR: f64 = 40.0;
/// Width of the display range above the floor.
pub const NORMALIZED_SPAN: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────
// Single Repo
// ─────────────────────────────────────────────────────────────────

/// Score one repository against one category with the default matching rule.
pub fn score(repo: &RepoRecord, category: &Category) -> f64 {
    score_with(&LengthGated, repo, category)
}

/// Score one repository against one category with an explicit matching rule.
pub fn score_with<M>(strategy: &M, repo: &RepoRecord, category: &Category) -> f64
where
    M: MatchStrategy + ?Sized,
{
    let mut total = 0.0;

    if let Some(language) = repo.language.as_deref() {
        if category
            .languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
        {
            total += LANGUAGE_WEIGHT;
        }
    }

    let topic_hits = repo
        .topics
        .iter()
        .filter(|t| category.topics.iter().any(|ct| strategy.topic_matches(t, ct)))
        .count();
    total += topic_hits as f64 * TOPIC_WEIGHT;

    if let Some(description) = repo.description.as_deref() {
        let hits = category
            .keywords
            .iter()
            .filter(|k| strategy.keyword_matches(description, k))
            .count();
        total += hits as f64 * DESCRIPTION_KEYWORD_WEIGHT;
    }

    let name = repo.short_name();
    let name_hits = category
        .keywords
        .iter()
        .filter(|k| strategy.keyword_matches(name, k))
        .count();
    total += name_hits as f64 * NAME_KEYWORD_WEIGHT;

    total
}

// ─────────────────────────────────────────────────────────────────
// Aggregation
// ─────────────────────────────────────────────────────────────────

/// Sum every repo's score per category, each scaled by `multiplier`.
pub fn aggregate(repos: &[RepoRecord], categories: &[Category], multiplier: f64) -> ScoreVector {
    let mut vector = ScoreVector::zeroed(categories);
    for repo in repos {
        for category in categories {
            let s = score(repo, category);
            if s > 0.0 {
                vector.add(category.id, s * multiplier);
            }
        }
    }
    vector
}

/// Scores from owned repositories only. Drives persona identity.
pub fn owned_scores(owned: &[RepoRecord], categories: &[Category]) -> ScoreVector {
    aggregate(owned, categories, 1.0)
}

/// Starred repositories at 1x plus owned repositories at 3x. Drives the radar.
pub fn combined_scores(
    owned: &[RepoRecord],
    starred: &[RepoRecord],
    categories: &[Category],
) -> ScoreVector {
    let mut combined = aggregate(starred, categories, STARRED_MULTIPLIER);
    for (id, value) in aggregate(owned, categories, OWNED_MULTIPLIER).iter() {
        combined.add(id, value);
    }
    combined
}

// ─────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────

/// Rescale to 40..=100, keeping 0 for categories without signal.
///
/// The strongest category always lands on 100.
pub fn normalize(vector: &ScoreVector) -> NormalizedVector {
    let max = vector.max();
    let entries = vector
        .iter()
        .map(|(id, score)| {
            let value = if max > 0.0 && score > 0.0 {
                (NORMALIZED_FLOOR + (score / max) * NORMALIZED_SPAN).round() as u32
            } else {
                0
            };
            (id, value)
        })
        .collect();
    NormalizedVector::from_entries(entries)
}

/// Raw and normalized vectors for both scoring passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub owned: ScoreVector,
    pub combined: ScoreVector,
    pub owned_normalized: NormalizedVector,
    pub combined_normalized: NormalizedVector,
}

impl ScoreReport {
    pub fn compute(owned: &[RepoRecord], starred: &[RepoRecord], categories: &[Category]) -> Self {
        let owned_raw = owned_scores(owned, categories);
        let combined_raw = combined_scores(owned, starred, categories);
        Self {
            owned_normalized: normalize(&owned_raw),
            combined_normalized: normalize(&combined_raw),
            owned: owned_raw,
            combined: combined_raw,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
