//! Customization layer applied on top of a computed profile document.
//!
//! Hides personas the account owner opted out of and can force the reserved
//! easter-egg persona in. The engine never looks at any of this; it runs on
//! the finished document.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::EASTER_EGG_ID;
use super::details::{build_persona_card, pick_tagline};
use super::engine::{radar_axes, ProfileEngine};
use super::types::{ActivePersona, ProfileDocument, ProfileInput};

/// Owner-supplied display preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customization {
    /// Category ids to drop from the document. Unknown ids are ignored.
    pub hidden_personas: Vec<String>,

    /// Force the easter-egg persona onto the document.
    pub show_easter_egg: bool,
}

impl Customization {
    pub fn is_empty(&self) -> bool {
        self.hidden_personas.is_empty() && !self.show_easter_egg
    }

    fn hides(&self, id: &str) -> bool {
        self.hidden_personas
            .iter()
            .any(|h| h.trim().eq_ignore_ascii_case(id))
    }
}

/// Apply `custom` to a document produced by `engine` from `input`.
pub fn apply_customization(
    engine: &ProfileEngine<'_>,
    doc: &mut ProfileDocument,
    custom: &Customization,
    input: &ProfileInput<'_>,
    as_of: DateTime<Utc>,
) {
    if custom.is_empty() {
        return;
    }

    for id in &custom.hidden_personas {
        if !engine.categories().iter().any(|c| c.id.eq_ignore_ascii_case(id.trim())) {
            debug!(persona = %id, "Ignoring unknown hidden persona");
        }
    }

    let report = engine.scores(input);

    doc.personas.retain(|card| !custom.hides(&card.id));
    for project in &mut doc.projects {
        project.personas.retain(|id| !custom.hides(id));
    }

    if custom.show_easter_egg
        && !custom.hides(EASTER_EGG_ID)
        && !doc.personas.iter().any(|c| c.id == EASTER_EGG_ID)
    {
        if let Some(category) = engine.category(EASTER_EGG_ID) {
            let forced = ActivePersona {
                persona_id: category.id,
                confidence: f64::from(report.owned_normalized.get(category.id)) / 100.0,
                rank: doc.personas.len(),
            };
            debug!(confidence = forced.confidence, "Adding easter-egg persona");
            doc.personas.push(build_persona_card(
                &forced,
                category,
                &report.combined_normalized,
                input,
                as_of.year(),
            ));
        }
    }

    for (rank, card) in doc.personas.iter_mut().enumerate() {
        card.rank = rank;
        if let Some(category) = engine.category(&card.id) {
            card.tagline = pick_tagline(category, rank).to_string();
        }
    }

    doc.radar = radar_axes(&doc.personas, engine.categories(), &report.combined_normalized);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::types::{GithubProfile, RepoRecord};
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn fixture() -> (GithubProfile, Vec<RepoRecord>) {
        let profile = GithubProfile {
            login: "dadcoder".into(),
            created_at: Some("2020-01-01".into()),
            ..Default::default()
        };
        let owned = vec![
            RepoRecord::new("dadcoder/pun-engine")
                .with_language("Rust")
                .with_topics(["dad-jokes", "humor"])
                .with_description("Serves jokes over HTTP")
                .with_stars(10),
            RepoRecord::new("dadcoder/cluster")
                .with_language("Go")
                .with_topics(["kubernetes"])
                .with_stars(5),
        ];
        (profile, owned)
    }

    fn run(custom: &Customization) -> ProfileDocument {
        let (profile, owned) = fixture();
        let engine = ProfileEngine::new();
        let input = ProfileInput {
            profile: &profile,
            owned: &owned,
            starred: &[],
        };
        let mut doc = engine.compute(&input, as_of());
        apply_customization(&engine, &mut doc, custom, &input, as_of());
        doc
    }

    #[test]
    fn test_noop() {
        let (profile, owned) = fixture();
        let input = ProfileInput {
            profile: &profile,
            owned: &owned,
            starred: &[],
        };
        let plain = ProfileEngine::new().compute(&input, as_of());
        assert_eq!(run(&Customization::default()), plain);
        assert!(plain.personas.iter().all(|c| c.id != EASTER_EGG_ID));
    }

    #[test]
    fn test_hide_persona() {
        let custom = Customization {
            hidden_personas: vec!["SYSTEMS".into(), "not-a-persona".into()],
            ..Default::default()
        };
        let doc = run(&custom);
        assert!(doc.personas.iter().all(|c| c.id != "systems"));
        assert!(doc.radar.iter().all(|a| a.category_id != "systems"));
        assert!(doc.projects.iter().all(|p| !p.personas.contains(&"systems".to_string())));
        for (i, card) in doc.personas.iter().enumerate() {
            assert_eq!(card.rank, i);
        }
    }

    #[test]
    fn test_hidden_top_persona_shifts_taglines() {
        let engine = ProfileEngine::new();
        let plain = run(&Customization::default());
        let top = plain.personas[0].id.clone();

        let custom = Customization {
            hidden_personas: vec![top.clone()],
            ..Default::default()
        };
        let doc = run(&custom);
        assert!(!doc.personas.is_empty());
        assert!(doc.personas.iter().all(|c| c.id != top));

        for card in &doc.personas {
            let category = engine.category(&card.id).unwrap();
            let expected = category.taglines[card.rank % category.taglines.len()];
            assert_eq!(card.tagline, expected, "tagline of {} at rank {}", card.id, card.rank);
        }
    }

    #[test]
    fn test_force_easter_egg() {
        let custom = Customization {
            show_easter_egg: true,
            ..Default::default()
        };
        let doc = run(&custom);
        let last = doc.personas.last().unwrap();
        assert_eq!(last.id, EASTER_EGG_ID);
        assert_eq!(last.rank, doc.personas.len() - 1);
        assert!(last.confidence > 0.0);
        assert!(doc.radar.iter().any(|a| a.category_id == EASTER_EGG_ID));
    }

    #[test]
    fn test_hidden_beats_forced() {
        let custom = Customization {
            hidden_personas: vec!["dad".into()],
            show_easter_egg: true,
        };
        let doc = run(&custom);
        assert!(doc.personas.iter().all(|c| c.id != EASTER_EGG_ID));
    }
}
