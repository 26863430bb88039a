//! Profile engine: composes scoring, activation, card building, clustering
//! and project mapping into one pure computation.
//!
//! ```text
//! owned ──► owned_scores ──► normalize ──► determine_personas ─┐
//!        │                                                     ├─► persona cards ─► radar
//! starred┴► combined_scores ─► normalize ──────────────────────┘
//! starred ─► cluster_interests
//! owned   ─► build_project_cards
//! ```

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, trace};

use super::activation::determine_personas;
use super::catalog::{self, Category};
use super::clusters::cluster_interests;
use super::details::build_persona_card;
use super::projects::build_project_cards;
use super::scorer::ScoreReport;
use super::types::{NormalizedVector, PersonaCard, ProfileDocument, ProfileInput, RadarAxis};

/// Maximum number of radar axes.
pub const MAX_RADAR_AXES: usize = 9;

/// Stateless engine over a category catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProfileEngine<'c> {
    categories: &'c [Category],
}

impl Default for ProfileEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileEngine<'static> {
    /// Engine over the built-in catalog.
    pub fn new() -> Self {
        Self {
            categories: catalog::all(),
        }
    }
}

impl<'c> ProfileEngine<'c> {
    /// Engine over a custom catalog.
    pub fn with_categories(categories: &'c [Category]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'c [Category] {
        self.categories
    }

    pub fn category(&self, id: &str) -> Option<&'c Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Both scoring passes, raw and normalized.
    pub fn scores(&self, input: &ProfileInput<'_>) -> ScoreReport {
        ScoreReport::compute(input.owned, input.starred, self.categories)
    }

    /// Run the full pipeline. `as_of` supplies the year used for account age.
    pub fn compute(&self, input: &ProfileInput<'_>, as_of: DateTime<Utc>) -> ProfileDocument {
        debug!(
            login = %input.profile.login,
            owned = input.owned.len(),
            starred = input.starred.len(),
            "Computing profile"
        );

        let report = self.scores(input);
        trace!(owned = ?report.owned, combined = ?report.combined, "Raw scores");

        let active = determine_personas(&report.owned_normalized);
        debug!(
            active = ?active.iter().map(|p| p.persona_id).collect::<Vec<_>>(),
            "Personas activated"
        );

        let personas: Vec<PersonaCard> = active
            .iter()
            .filter_map(|a| {
                self.category(a.persona_id).map(|category| {
                    build_persona_card(
                        a,
                        category,
                        &report.combined_normalized,
                        input,
                        as_of.year(),
                    )
                })
            })
            .collect();

        let radar = radar_axes(&personas, self.categories, &report.combined_normalized);
        let projects = build_project_cards(input.owned, self.categories);
        let clusters = cluster_interests(input.starred);

        debug!(
            personas = personas.len(),
            projects = projects.len(),
            clusters = clusters.len(),
            "Profile computed"
        );

        ProfileDocument {
            profile: input.profile.clone(),
            personas,
            projects,
            radar,
            clusters,
        }
    }
}

/// One axis per persona card in rank order, capped at [`MAX_RADAR_AXES`].
pub fn radar_axes(
    personas: &[PersonaCard],
    categories: &[Category],
    combined: &NormalizedVector,
) -> Vec<RadarAxis> {
    personas
        .iter()
        .filter_map(|card| categories.iter().find(|c| c.id == card.id))
        .take(MAX_RADAR_AXES)
        .map(|category| RadarAxis {
            label: category.title.to_string(),
            value: combined.get(category.id),
            color: category.color.to_string(),
            category_id: category.id.to_string(),
        })
        .collect()
}

/// Convenience wrapper over the built-in catalog.
pub fn compute_profile(input: &ProfileInput<'_>, as_of: DateTime<Utc>) -> ProfileDocument {
    ProfileEngine::new().compute(input, as_of)
}
