use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::rng::XorShift64;

pub const MAX_KEYWORDS: usize = 8;
pub const RANDOM_SUBSET_SIZE: usize = 5;
pub const MAX_SUGGESTIONS: usize = 5;

/// How the keyword display picks from a result's keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordSelection {
    /// The first eight keywords, in order.
    #[default]
    Leading,
    /// Five keywords drawn at random from the whole list.
    RandomSubset,
}

impl KeywordSelection {
    /// `salt` varies the random draw between renderers. The draw depends only
    /// on `salt` and the keywords, so the same result always shows the same
    /// subset.
    pub fn select(self, keywords: &[String], salt: u64) -> Vec<String> {
        match self {
            KeywordSelection::Leading => keywords.iter().take(MAX_KEYWORDS).cloned().collect(),
            KeywordSelection::RandomSubset => {
                let mut pool = keywords.to_vec();
                XorShift64::seeded(salt ^ content_hash(keywords)).shuffle(&mut pool);
                pool.truncate(RANDOM_SUBSET_SIZE);
                pool
            }
        }
    }
}

pub fn select_suggestions(suggestions: &[String]) -> Vec<String> {
    suggestions.iter().take(MAX_SUGGESTIONS).cloned().collect()
}

fn content_hash(keywords: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    keywords.hash(&mut hasher);
    hasher.finish()
}
