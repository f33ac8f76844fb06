//! Syllable blending: overlap between the parents' syllable windows and a candidate.

use super::strategy::{Candidate, MatchStrategy, Seeds};
use super::types::Scored;

pub const DEFAULT_MIN_MATCHES: usize = 2;

pub struct SyllableBlender {
    min_matches: usize,
}

impl Default for SyllableBlender {
    fn default() -> Self {
        Self {
            min_matches: DEFAULT_MIN_MATCHES,
        }
    }
}

impl SyllableBlender {
    pub fn new(min_matches: usize) -> Self {
        Self {
            min_matches: min_matches.max(1),
        }
    }

    /// Father syllables found in the candidate plus mother syllables found in it.
    /// Each syllable counts at most once per seed.
    pub fn overlap(seeds: &Seeds, candidate: &Candidate<'_>) -> usize {
        let hits = |syllables: &[String]| {
            syllables
                .iter()
                .filter(|s| candidate.lower.contains(s.as_str()))
                .count()
        };
        hits(&seeds.father_syllables) + hits(&seeds.mother_syllables)
    }
}

impl MatchStrategy for SyllableBlender {
    fn name(&self) -> &'static str {
        "syllable_blend"
    }

    fn score(&self, seeds: &Seeds, candidate: &Candidate<'_>) -> Option<Scored> {
        let count = Self::overlap(seeds, candidate);
        if count < self.min_matches {
            return None;
        }
        // Not clamped: heavy overlap can score above 100.
        Some(Scored {
            confidence: 40 + 10 * count as u32,
            tag: format!("{} syllable match", count),
        })
    }
}
