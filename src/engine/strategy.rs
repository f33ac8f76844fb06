//! Strategy trait and the per-request seed context.

use super::syllables::{extract_syllables, normalize};
use super::types::Scored;

/// Letters and syllables derived once per request from the parents' names.
/// A missing letter is `None`, which never equals a real character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeds {
    pub father_first: Option<char>,
    pub mother_last: Option<char>,
    pub father_syllables: Vec<String>,
    pub mother_syllables: Vec<String>,
}

impl Seeds {
    pub fn new(father: &str, mother: &str) -> Self {
        Self {
            father_first: normalize(father).chars().next(),
            mother_last: normalize(mother).chars().last(),
            father_syllables: extract_syllables(father),
            mother_syllables: extract_syllables(mother),
        }
    }
}

/// A corpus name as seen by strategies
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub name: &'a str,
    /// Normalized form used for all comparisons
    pub lower: String,
}

impl<'a> Candidate<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            lower: normalize(name),
        }
    }

    pub fn first(&self) -> Option<char> {
        self.lower.chars().next()
    }

    pub fn last(&self) -> Option<char> {
        self.lower.chars().last()
    }

    pub fn contains_letter(&self, letter: Option<char>) -> bool {
        letter.is_some_and(|c| self.lower.contains(c))
    }
}

pub trait MatchStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    /// `None` skips the candidate for this strategy
    fn score(&self, seeds: &Seeds, candidate: &Candidate<'_>) -> Option<Scored>;
}
