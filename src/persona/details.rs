//! Persona card composition.
//!
//! Turns an [`ActivePersona`] into the card shown to users: titled with an
//! experience prefix, a tagline picked by rank, stat bars spread around the
//! category score, a technology stack, evidence bullets and the starred
//! repositories that back the persona up.

use std::collections::{HashMap, HashSet};

use super::catalog::{Category, StackPool};
use super::experience;
use super::scorer::score;
use super::types::{ActivePersona, NormalizedVector, PersonaCard, ProfileInput, RepoRecord, StatBar};

// ─────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────

/// Offsets applied per stat index so bars vary but stay reproducible.
pub const STAT_OFFSETS: [i32; 4] = [-5, 3, -8, 5];

pub const STAT_MIN: i32 = 30;
pub const STAT_MAX: i32 = 100;

pub const FIXED_STACK_LIMIT: usize = 10;
pub const DERIVED_STACK_LIMIT: usize = 12;
pub const TOP_LANGUAGES: usize = 3;
pub const RELEVANT_STARRED_LIMIT: usize = 8;

/// Minimum per-repo score for a starred repo to be listed on a card.
pub const RELEVANT_STARRED_MIN_SCORE: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────
// Card Builder
// ─────────────────────────────────────────────────────────────────

/// Build the card for one active persona.
///
/// `combined` supplies the category score behind the stat bars and the
/// experience ratio.
pub fn build_persona_card(
    active: &ActivePersona,
    category: &Category,
    combined: &NormalizedVector,
    input: &ProfileInput<'_>,
    current_year: i32,
) -> PersonaCard {
    let category_score = combined.get(category.id);
    let exp = experience::estimate(
        input.profile.created_at.as_deref(),
        category_score,
        combined.max(),
        current_year,
    );

    let prefix = if exp.prefix.is_empty() {
        category.default_prefix().unwrap_or("")
    } else {
        exp.prefix
    };

    PersonaCard {
        id: category.id.to_string(),
        title: resolve_title(prefix, category.title),
        tagline: pick_tagline(category, active.rank).to_string(),
        icon: category.icon.to_string(),
        color: category.color.to_string(),
        gradient: [category.gradient[0].to_string(), category.gradient[1].to_string()],
        confidence: active.confidence,
        rank: active.rank,
        experience: exp.years,
        stats: stat_bars(category, category_score),
        stack: resolve_stack(category, input.owned, input.starred),
        details: evidence(category, input.owned, input.starred),
        starred_repos: relevant_starred(category, input.starred),
    }
}

/// `"{prefix} {title}"`, or the bare title for an empty prefix.
pub fn resolve_title(prefix: &str, title: &str) -> String {
    if prefix.is_empty() {
        title.to_string()
    } else {
        format!("{} {}", prefix, title)
    }
}

/// Tagline for a card at `rank`, cycling through the category taglines.
pub fn pick_tagline(category: &Category, rank: usize) -> &'static str {
    if category.taglines.is_empty() {
        return "";
    }
    category.taglines[rank % category.taglines.len()]
}

/// One bar per stat label, offset from the category score and clamped.
pub fn stat_bars(category: &Category, normalized_score: u32) -> Vec<StatBar> {
    category
        .stat_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let offset = STAT_OFFSETS[i % STAT_OFFSETS.len()];
            let value = (normalized_score as i32 + offset).clamp(STAT_MIN, STAT_MAX);
            StatBar {
                label: label.to_string(),
                value: value as u32,
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Stack
// ─────────────────────────────────────────────────────────────────

/// Fixed pool (truncated) or a stack derived from matching repositories.
pub fn resolve_stack(
    category: &Category,
    owned: &[RepoRecord],
    starred: &[RepoRecord],
) -> Vec<String> {
    match category.stack {
        StackPool::Fixed(items) => items
            .iter()
            .take(FIXED_STACK_LIMIT)
            .map(|s| s.to_string())
            .collect(),
        StackPool::Derived => derive_stack(category, owned, starred),
    }
}

fn derive_stack(category: &Category, owned: &[RepoRecord], starred: &[RepoRecord]) -> Vec<String> {
    let mut tally = Tally::default();
    for repo in matching(category, owned, starred) {
        if let Some(language) = repo.language.as_deref() {
            tally.bump(language);
        }
        for topic in &repo.topics {
            tally.bump(&capitalize_topic(topic));
        }
    }
    tally.ranked(DERIVED_STACK_LIMIT)
}

/// `"react-native"` -> `"React Native"`.
pub fn capitalize_topic(topic: &str) -> String {
    topic
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive frequency counter that remembers first spelling and order.
#[derive(Default)]
struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn bump(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        let key = value.to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    fn ranked(mut self, limit: usize) -> Vec<String> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.into_iter().take(limit).map(|(v, _)| v).collect()
    }
}

// ─────────────────────────────────────────────────────────────────
// Evidence
// ─────────────────────────────────────────────────────────────────

/// Matching repos over owned then starred, each `full_name` counted once.
fn matching<'r>(
    category: &'r Category,
    owned: &'r [RepoRecord],
    starred: &'r [RepoRecord],
) -> impl Iterator<Item = &'r RepoRecord> + 'r {
    let mut seen = HashSet::new();
    owned
        .iter()
        .chain(starred.iter())
        .filter(move |r| seen.insert(r.full_name.to_lowercase()))
        .filter(move |r| score(r, category) > 0.0)
}

fn plural_repos(n: usize) -> &'static str {
    if n == 1 {
        "repository"
    } else {
        "repositories"
    }
}

/// Human-readable evidence bullets for a persona.
pub fn evidence(category: &Category, owned: &[RepoRecord], starred: &[RepoRecord]) -> Vec<String> {
    let mut details = Vec::new();

    let owned_hits = owned.iter().filter(|r| score(r, category) > 0.0).count();
    if owned_hits > 0 {
        details.push(format!("Maintains {} related {}", owned_hits, plural_repos(owned_hits)));
    }

    let starred_hits = starred.iter().filter(|r| score(r, category) > 0.0).count();
    if starred_hits > 0 {
        details.push(format!("Starred {} related {}", starred_hits, plural_repos(starred_hits)));
    }

    let mut languages = Tally::default();
    for repo in matching(category, owned, starred) {
        if let Some(language) = repo.language.as_deref() {
            languages.bump(language);
        }
    }
    let top = languages.ranked(TOP_LANGUAGES);
    if !top.is_empty() {
        details.push(format!("Top languages: {}", top.join(", ")));
    }

    details
}

/// Short names of the best-scoring starred repos for this category.
pub fn relevant_starred(category: &Category, starred: &[RepoRecord]) -> Vec<String> {
    let mut scored: Vec<(&RepoRecord, f64)> = starred
        .iter()
        .map(|r| (r, score(r, category)))
        .filter(|(_, s)| *s >= RELEVANT_STARRED_MIN_SCORE)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(RELEVANT_STARRED_LIMIT)
        .map(|(r, _)| r.short_name().to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::catalog::lookup;
    use crate::persona::types::GithubProfile;

    fn rust_repo(name: &str) -> RepoRecord {
        RepoRecord::new(format!("me/{}", name))
            .with_language("Rust")
            .with_topics(["embedded", "no-std"])
    }

    #[test]
    fn test_stat_bars_offsets() {
        let systems = lookup("systems").unwrap();
        let values: Vec<_> = stat_bars(systems, 70).iter().map(|s| s.value).collect();
        assert_eq!(values, vec![65, 73, 62, 75]);
    }

    #[test]
    fn test_stat_bars_clamped() {
        let systems = lookup("systems").unwrap();
        let high: Vec<_> = stat_bars(systems, 100).iter().map(|s| s.value).collect();
        assert_eq!(high, vec![95, 100, 92, 100]);
        let low: Vec<_> = stat_bars(systems, 0).iter().map(|s| s.value).collect();
        assert_eq!(low, vec![30, 30, 30, 30]);
    }

    #[test]
    fn test_resolve_title() {
        assert_eq!(resolve_title("Staff", "Platform Engineer"), "Staff Platform Engineer");
        assert_eq!(resolve_title("", "Platform Engineer"), "Platform Engineer");
    }

    #[test]
    fn test_capitalize_topic() {
        assert_eq!(capitalize_topic("react-native"), "React Native");
        assert_eq!(capitalize_topic("rust"), "Rust");
        assert_eq!(capitalize_topic("no--std"), "No Std");
        assert_eq!(capitalize_topic(""), "");
    }

    #[test]
    fn test_fixed_stack_truncated() {
        let platform = lookup("platform").unwrap();
        let stack = resolve_stack(platform, &[], &[]);
        assert_eq!(stack.len(), FIXED_STACK_LIMIT);
        assert_eq!(stack[0], "Kubernetes");
    }

    #[test]
    fn test_derived_stack_ranked_by_frequency() {
        let systems = lookup("systems").unwrap();
        let owned = vec![rust_repo("a"), rust_repo("b")];
        let starred = vec![RepoRecord::new("x/y").with_language("C").with_topics(["kernel"])];
        let stack = resolve_stack(systems, &owned, &starred);
        assert_eq!(stack, vec!["Rust", "Embedded", "No Std", "C", "Kernel"]);
    }

    #[test]
    fn test_derived_stack_dedupes_case_insensitively() {
        let systems = lookup("systems").unwrap();
        let owned = vec![RepoRecord::new("me/z").with_language("Rust").with_topics(["rust"])];
        let stack = resolve_stack(systems, &owned, &[]);
        assert_eq!(stack, vec!["Rust"]);
    }

    #[test]
    fn test_evidence() {
        let systems = lookup("systems").unwrap();
        let owned = vec![rust_repo("a")];
        let starred = vec![
            rust_repo("b"),
            rust_repo("c"),
            RepoRecord::new("x/zig").with_language("Zig"),
        ];
        let details = evidence(systems, &owned, &starred);
        assert_eq!(
            details,
            vec![
                "Maintains 1 related repository".to_string(),
                "Starred 3 related repositories".to_string(),
                "Top languages: Rust, Zig".to_string(),
            ]
        );
    }

    #[test]
    fn test_owned_and_starred_repo_counted_once() {
        let systems = lookup("systems").unwrap();
        let owned = vec![RepoRecord::new("me/zkernel")
            .with_language("Zig")
            .with_topics(["kernel"])];
        let starred = vec![
            RepoRecord::new("ME/zkernel").with_language("Zig").with_topics(["kernel"]),
            rust_repo("b"),
            rust_repo("c"),
        ];

        // zig would tie rust at two hits if the shared repo counted twice
        let stack = resolve_stack(systems, &owned, &starred);
        assert_eq!(stack[0], "Rust");
        assert_eq!(stack.iter().filter(|s| *s == "Zig").count(), 1);

        let details = evidence(systems, &owned, &starred);
        assert_eq!(details[2], "Top languages: Rust, Zig");
    }

    #[test]
    fn test_evidence_empty() {
        let systems = lookup("systems").unwrap();
        assert!(evidence(systems, &[], &[]).is_empty());
    }

    #[test]
    fn test_relevant_starred() {
        let systems = lookup("systems").unwrap();
        let starred = vec![
            RepoRecord::new("a/weak").with_description("tiny runtime"), // 1.5
            RepoRecord::new("a/lang").with_language("C"),               // 2
            rust_repo("strong"),                                        // 2 + 3
        ];
        assert_eq!(relevant_starred(systems, &starred), vec!["strong", "lang"]);
    }

    #[test]
    fn test_relevant_starred_capped() {
        let systems = lookup("systems").unwrap();
        let starred: Vec<_> = (0..12).map(|i| rust_repo(&format!("r{}", i))).collect();
        let names = relevant_starred(systems, &starred);
        assert_eq!(names.len(), RELEVANT_STARRED_LIMIT);
        assert_eq!(names[0], "r0");
    }

    #[test]
    fn test_build_card_uses_default_prefix() {
        let systems = lookup("systems").unwrap();
        let profile = GithubProfile {
            login: "me".into(),
            created_at: Some("2024-01-01T00:00:00Z".into()),
            ..Default::default()
        };
        let owned = vec![rust_repo("a")];
        let input = ProfileInput {
            profile: &profile,
            owned: &owned,
            starred: &[],
        };
        let active = ActivePersona {
            persona_id: "systems",
            confidence: 1.0,
            rank: 1,
        };
        let combined = NormalizedVector::from_pairs(&[("systems", 100)]);

        let card = build_persona_card(&active, systems, &combined, &input, 2026);
        // two-year-old account gets no seniority, so the category prefix applies
        assert_eq!(card.title, "Bare-Metal Systems Engineer");
        assert_eq!(card.experience, "2+ years");
        assert_eq!(card.tagline, systems.taglines[1]);
        assert_eq!(card.stats.len(), 4);
        assert!(card.starred_repos.is_empty());
    }

    #[test]
    fn test_build_card_prefers_experience_prefix() {
        let platform = lookup("platform").unwrap();
        let profile = GithubProfile {
            login: "me".into(),
            created_at: Some("2012-05-05T00:00:00Z".into()),
            ..Default::default()
        };
        let input = ProfileInput {
            profile: &profile,
            owned: &[],
            starred: &[],
        };
        let active = ActivePersona {
            persona_id: "platform",
            confidence: 0.9,
            rank: 0,
        };
        let combined = NormalizedVector::from_pairs(&[("systems", 100), ("platform", 90)]);

        let card = build_persona_card(&active, platform, &combined, &input, 2026);
        assert_eq!(card.title, "Principal Platform Engineer");
        assert_eq!(card.experience, "14+ years");
    }
}
