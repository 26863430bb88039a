//! Interest clustering of starred repositories.
//!
//! Clusters are independent of the persona catalog: each one is a named
//! predicate over a repository, and a cluster shows up when it selects at
//! least two starred repos.

use super::types::{InterestCluster, RepoRecord};

pub const MIN_CLUSTER_SIZE: usize = 2;
pub const MAX_CLUSTERS: usize = 12;
pub const MAX_EXAMPLES: usize = 5;

/// A named repository predicate.
pub struct ClusterDef {
    pub label: &'static str,
    pub matcher: fn(&RepoRecord) -> bool,
}

fn any_topic(repo: &RepoRecord, topics: &[&str]) -> bool {
    topics.iter().any(|t| repo.has_topic(t))
}

fn description_mentions(repo: &RepoRecord, needles: &[&str]) -> bool {
    repo.description.as_deref().map_or(false, |d| {
        let d = d.to_lowercase();
        needles.iter().any(|n| d.contains(n))
    })
}

static CLUSTERS: &[ClusterDef] = &[
    ClusterDef {
        label: "Rust Ecosystem",
        matcher: |r| r.language_is("Rust"),
    },
    ClusterDef {
        label: "CLI Tools",
        matcher: |r| {
            any_topic(r, &["cli", "command-line", "terminal"])
                || description_mentions(r, &["command line", "command-line"])
        },
    },
    ClusterDef {
        label: "AI & Machine Learning",
        matcher: |r| {
            any_topic(
                r,
                &["machine-learning", "deep-learning", "llm", "ai", "nlp", "pytorch", "tensorflow"],
            ) || description_mentions(r, &["machine learning", "neural network", "language model"])
        },
    },
    ClusterDef {
        label: "Web Frontend",
        matcher: |r| {
            any_topic(r, &["react", "vue", "svelte", "nextjs", "angular", "frontend", "css"])
        },
    },
    ClusterDef {
        label: "DevOps & Infrastructure",
        matcher: |r| {
            any_topic(
                r,
                &["kubernetes", "docker", "devops", "terraform", "ci-cd", "helm", "ansible"],
            )
        },
    },
    ClusterDef {
        label: "Databases",
        matcher: |r| {
            any_topic(
                r,
                &["database", "sql", "postgres", "postgresql", "sqlite", "redis", "mongodb"],
            )
                || description_mentions(r, &["database"])
        },
    },
    ClusterDef {
        label: "Security",
        matcher: |r| {
            any_topic(
                r,
                &["security", "pentest", "ctf", "cryptography", "infosec", "vulnerability"],
            )
                || description_mentions(r, &["security", "exploit"])
        },
    },
    ClusterDef {
        label: "Game Development",
        matcher: |r| {
            any_topic(r, &["game", "gamedev", "game-engine", "unity", "godot", "bevy"])
                || description_mentions(r, &["game engine"])
        },
    },
    ClusterDef {
        label: "Go Ecosystem",
        matcher: |r| r.language_is("Go"),
    },
    ClusterDef {
        label: "Python Ecosystem",
        matcher: |r| r.language_is("Python"),
    },
    ClusterDef {
        label: "Dotfiles & Terminal",
        matcher: |r| {
            any_topic(r, &["dotfiles", "neovim", "vim", "zsh", "tmux", "nixos"])
                || r.short_name().to_lowercase().contains("dotfiles")
        },
    },
    ClusterDef {
        label: "Awesome Lists",
        matcher: |r| {
            any_topic(r, &["awesome", "awesome-list"])
                || r.short_name().to_lowercase().starts_with("awesome")
        },
    },
];

/// The cluster definitions, in catalog order.
pub fn definitions() -> &'static [ClusterDef] {
    CLUSTERS
}

/// Display bucket for a match count.
pub fn count_label(count: usize) -> String {
    match count {
        n if n >= 15 => "15+ repos".to_string(),
        n if n >= 10 => "10+ repos".to_string(),
        n if n >= 5 => "5+ repos".to_string(),
        n => format!("{} repos", n),
    }
}

/// Group starred repositories into interest clusters.
///
/// Sorted by match count (ties keep definition order), at most
/// [`MAX_CLUSTERS`] entries.
pub fn cluster_interests(starred: &[RepoRecord]) -> Vec<InterestCluster> {
    let mut clusters: Vec<InterestCluster> = CLUSTERS
        .iter()
        .filter_map(|def| {
            let hits: Vec<&RepoRecord> = starred.iter().filter(|r| (def.matcher)(r)).collect();
            if hits.len() < MIN_CLUSTER_SIZE {
                return None;
            }
            Some(InterestCluster {
                label: def.label.to_string(),
                count_label: count_label(hits.len()),
                examples: hits
                    .iter()
                    .take(MAX_EXAMPLES)
                    .map(|r| r.short_name().to_string())
                    .collect(),
                count: hits.len(),
            })
        })
        .collect();

    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters.truncate(MAX_CLUSTERS);
    clusters
}
