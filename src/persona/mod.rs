//! Persona engine — deterministic classification of a GitHub account into
//! career personas, a skill radar, interest clusters and project cards.
//!
//! Every function here is a pure transformation of in-memory inputs. Fetching,
//! caching and rendering belong to the callers.

pub mod activation;
pub mod catalog;
pub mod clusters;
pub mod customize;
pub mod details;
pub mod engine;
pub mod experience;
pub mod matching;
pub mod projects;
pub mod scorer;
pub mod types;

pub use activation::{determine_personas, Activation, ACTIVATION_THRESHOLD};
pub use catalog::{Category, StackPool, EASTER_EGG_ID};
pub use clusters::cluster_interests;
pub use customize::{apply_customization, Customization};
pub use engine::{compute_profile, ProfileEngine, MAX_RADAR_AXES};
pub use experience::Experience;
pub use matching::{LengthGated, MatchStrategy};
pub use projects::{build_project_cards, map_to_personas};
pub use scorer::{combined_scores, normalize, owned_scores, score, ScoreReport};
pub use types::{
    ActivePersona, GithubProfile, InterestCluster, NormalizedVector, PersonaCard, ProfileDocument,
    ProfileInput, ProjectCard, RadarAxis, RepoRecord, ScoreVector, StatBar,
};
