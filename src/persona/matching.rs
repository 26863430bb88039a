//! Token matching rules used by the repo scorer.
//!
//! Which topic/keyword pairs count as a hit decides which repositories feed
//! which personas, so the rule lives behind a single trait and the scorer is
//! generic over it.

/// Tokens shorter than this only match exactly.
pub const MIN_FUZZY_TOPIC_LEN: usize = 3;

/// Keywords shorter than this never match description or name text.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Predicate pair deciding topic and keyword hits.
pub trait MatchStrategy {
    /// Whether a repository topic matches a category topic.
    fn topic_matches(&self, repo_topic: &str, category_topic: &str) -> bool;

    /// Whether a category keyword occurs in a piece of text.
    fn keyword_matches(&self, text: &str, keyword: &str) -> bool;
}

/// Case-insensitive, length-gated substring matching.
///
/// Topics match by bidirectional containment unless either side is shorter
/// than [`MIN_FUZZY_TOPIC_LEN`], in which case they must be equal. Keywords
/// must be at least [`MIN_KEYWORD_LEN`] characters and appear in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthGated;

impl MatchStrategy for LengthGated {
    fn topic_matches(&self, repo_topic: &str, category_topic: &str) -> bool {
        let repo_topic = repo_topic.to_lowercase();
        let category_topic = category_topic.to_lowercase();
        if repo_topic.is_empty() || category_topic.is_empty() {
            return false;
        }

        if repo_topic.chars().count() < MIN_FUZZY_TOPIC_LEN
            || category_topic.chars().count() < MIN_FUZZY_TOPIC_LEN
        {
            return repo_topic == category_topic;
        }

        repo_topic.contains(&category_topic) || category_topic.contains(&repo_topic)
    }

    fn keyword_matches(&self, text: &str, keyword: &str) -> bool {
        if keyword.chars().count() < MIN_KEYWORD_LEN {
            return false;
        }
        text.to_lowercase().contains(&keyword.to_lowercase())
    }
}
