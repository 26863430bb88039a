//! Project mapping — owned repositories to persona-tagged project cards.

use std::collections::HashSet;

use super::catalog::Category;
use super::details::capitalize_topic;
use super::scorer::score;
use super::types::{ProjectCard, RepoRecord};

/// Minimum per-repo score for a category to tag a project.
///
/// Lower than persona activation: this is item-level relevance.
pub const PROJECT_MATCH_THRESHOLD: f64 = 2.0;

pub const MAX_PROJECT_TAGS: usize = 8;

/// Category ids relevant to one repository, strongest first.
pub fn map_to_personas(repo: &RepoRecord, categories: &[Category]) -> Vec<&'static str> {
    let mut hits: Vec<(&'static str, f64)> = categories
        .iter()
        .map(|c| (c.id, score(repo, c)))
        .filter(|(_, s)| *s >= PROJECT_MATCH_THRESHOLD)
        .collect();
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));
    hits.into_iter().map(|(id, _)| id).collect()
}

/// Language first, then capitalized topics; no repeats, capped.
pub fn technology_tags(repo: &RepoRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    if let Some(language) = repo.language.as_deref() {
        seen.insert(language.to_lowercase());
        tags.push(language.to_string());
    }
    for topic in &repo.topics {
        let tag = capitalize_topic(topic);
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_lowercase()) {
            tags.push(tag);
        }
    }

    tags.truncate(MAX_PROJECT_TAGS);
    tags
}

/// Card for one owned repository, or `None` when no category matches.
pub fn build_project_card(repo: &RepoRecord, categories: &[Category]) -> Option<ProjectCard> {
    let personas = map_to_personas(repo, categories);
    if personas.is_empty() {
        return None;
    }

    Some(ProjectCard {
        name: repo.short_name().to_string(),
        description: repo.description.clone(),
        url: repo.url.clone(),
        tags: technology_tags(repo),
        personas: personas.into_iter().map(str::to_string).collect(),
        language: repo.language.clone(),
        stars: repo.stars,
        forks: repo.forks,
    })
}

/// Cards for every matching owned repository, most-starred first.
pub fn build_project_cards(owned: &[RepoRecord], categories: &[Category]) -> Vec<ProjectCard> {
    let mut cards: Vec<ProjectCard> = owned
        .iter()
        .filter_map(|r| build_project_card(r, categories))
        .collect();
    cards.sort_by(|a, b| b.stars.cmp(&a.stars));
    cards
}
