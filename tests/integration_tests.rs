//! Engine integration tests
//!
//! Runs the full pipeline through the public library API on the sample
//! account in `tests/fixtures/sample_input.json`.

mod common;

use persona_radar::input::AnalysisInput;
use persona_radar::persona::{
    apply_customization, compute_profile, Category, Customization, ProfileDocument, ProfileEngine,
};

fn sample() -> AnalysisInput {
    AnalysisInput::load(common::sample_input().to_str().unwrap()).unwrap()
}

fn analyze(input: &AnalysisInput) -> ProfileDocument {
    compute_profile(&input.as_profile_input(), common::as_of())
}

// ─────────────────────────────────────────────────────────────────
// Input Curation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_sample_curation() {
    let input = sample();
    let owned: Vec<_> = input.owned.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(owned, vec!["ferris/tiny-kernel", "ferris/dotfiles", "ferris/site"]);
    assert_eq!(input.starred.len(), 3);
    assert_eq!(input.starred[0].stars, 90000);
}

// ─────────────────────────────────────────────────────────────────
// Personas
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_persona_cards() {
    let doc = analyze(&sample());

    let summary: Vec<_> = doc
        .personas
        .iter()
        .map(|p| (p.id.as_str(), p.rank, p.title.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("systems", 0, "Principal Systems Engineer"),
            ("linux", 1, "Principal Linux Enthusiast"),
            ("frontend", 2, "Pixel-Perfect Frontend Developer"),
        ]
    );

    // systems and linux tie on owned score; frontend is 2 / 10.5
    assert_eq!(doc.personas[0].confidence, 1.0);
    assert_eq!(doc.personas[1].confidence, 1.0);
    assert_eq!(doc.personas[2].confidence, 0.51);

    for card in &doc.personas {
        assert_eq!(card.experience, "14+ years");
        assert_eq!(card.stats.len(), 4);
        assert!(card.stats.iter().all(|s| (30..=100).contains(&s.value)));
    }
}

#[test]
fn test_systems_details() {
    let doc = analyze(&sample());
    let systems = &doc.personas[0];

    let stats: Vec<u32> = systems.stats.iter().map(|s| s.value).collect();
    assert_eq!(stats, vec![95, 100, 92, 100]);

    assert_eq!(
        systems.details,
        vec![
            "Maintains 1 related repository".to_string(),
            "Starred 2 related repositories".to_string(),
            "Top languages: Rust".to_string(),
        ]
    );
    assert_eq!(systems.starred_repos, vec!["rust", "ripgrep"]);
    assert_eq!(systems.stack.first().map(String::as_str), Some("Rust"));
    assert!(systems.stack.contains(&"Kernel".to_string()));
}

#[test]
fn test_derived_stack() {
    let doc = analyze(&sample());
    // linux derives its stack from the dotfiles repo
    let linux = &doc.personas[1];
    assert_eq!(linux.stack, vec!["Shell", "Dotfiles", "Neovim"]);
}

// ─────────────────────────────────────────────────────────────────
// Radar, Projects, Clusters
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_radar() {
    let doc = analyze(&sample());
    let radar: Vec<_> = doc
        .radar
        .iter()
        .map(|a| (a.category_id.as_str(), a.value))
        .collect();
    assert_eq!(radar, vec![("systems", 100), ("linux", 86), ("frontend", 49)]);
    assert_eq!(doc.radar[0].label, "Systems Engineer");
}

#[test]
fn test_projects() {
    let doc = analyze(&sample());
    let names: Vec<_> = doc.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["tiny-kernel", "dotfiles", "site"]);

    let kernel = &doc.projects[0];
    assert_eq!(kernel.personas, vec!["systems".to_string()]);
    assert_eq!(kernel.tags, vec!["Rust", "Kernel", "Embedded"]);
    assert_eq!(kernel.url, "https://github.com/ferris/tiny-kernel");
    assert_eq!(kernel.forks, 8);
}

#[test]
fn test_clusters() {
    let doc = analyze(&sample());
    let clusters: Vec<_> = doc
        .clusters
        .iter()
        .map(|c| (c.label.as_str(), c.count, c.examples.clone()))
        .collect();
    assert_eq!(
        clusters,
        vec![
            ("Rust Ecosystem", 2, vec!["rust".to_string(), "ripgrep".to_string()]),
            ("CLI Tools", 2, vec!["ripgrep".to_string(), "fzf".to_string()]),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────
// Customization and Serialization
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_customization_roundtrip() {
    let input = sample();
    let profile_input = input.as_profile_input();
    let engine = ProfileEngine::new();

    let mut doc = engine.compute(&profile_input, common::as_of());
    let custom = Customization {
        hidden_personas: vec!["systems".into()],
        show_easter_egg: true,
    };
    apply_customization(&engine, &mut doc, &custom, &profile_input, common::as_of());

    let ids: Vec<_> = doc.personas.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["linux", "frontend", "dad"]);
    assert!(doc.projects.iter().all(|p| !p.personas.contains(&"systems".to_string())));
    assert_eq!(doc.personas[2].confidence, 0.0);

    // taglines follow the new ranks, not the ones assigned before hiding
    for card in &doc.personas {
        let category = Category::lookup(&card.id).unwrap();
        assert_eq!(card.tagline, category.taglines[card.rank % category.taglines.len()]);
    }
}

#[test]
fn test_document_json_shape() {
    let doc = analyze(&sample());
    let json = serde_json::to_value(&doc).unwrap();

    for key in ["profile", "personas", "projects", "radar", "clusters"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["personas"][0]["gradient"][0], "#f74c00");
    assert_eq!(json["profile"]["followers"], 1200);
}
