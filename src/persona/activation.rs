//! Persona activation — thresholding normalized scores into active personas.

use super::catalog;
use super::types::{ActivePersona, NormalizedVector};

/// Minimum normalized score for a category to become a persona.
pub const ACTIVATION_THRESHOLD: u32 = 45;

/// Outcome for one candidate category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// At or above the threshold.
    Active,
    /// Below the threshold; excluded from output.
    Dormant,
}

impl Activation {
    pub fn classify(normalized_score: u32) -> Self {
        if normalized_score >= ACTIVATION_THRESHOLD {
            Activation::Active
        } else {
            Activation::Dormant
        }
    }
}

/// Active personas ordered by descending score.
///
/// Ties keep the vector's (catalog) order. The reserved easter-egg category
/// is never returned, whatever its score.
pub fn determine_personas(normalized: &NormalizedVector) -> Vec<ActivePersona> {
    let mut active: Vec<(&'static str, u32)> = normalized
        .iter()
        .filter(|(id, _)| !catalog::is_reserved(id))
        .filter(|(_, score)| Activation::classify(*score) == Activation::Active)
        .collect();

    // stable: equal scores keep input order
    active.sort_by(|a, b| b.1.cmp(&a.1));

    active
        .into_iter()
        .enumerate()
        .map(|(rank, (persona_id, score))| ActivePersona {
            persona_id,
            confidence: f64::from(score) / 100.0,
            rank,
        })
        .collect()
}
