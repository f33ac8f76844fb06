//! Father-first-letter / mother-last-letter pattern rules.

use super::strategy::{Candidate, MatchStrategy, Seeds};
use super::types::Scored;

/// Pattern rules in priority order; the first that holds wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    PerfectDual,
    FatherPrefix,
    MotherSuffix,
    ContainsBoth,
    Partial,
}

impl PatternRule {
    pub fn confidence(&self) -> u32 {
        match self {
            PatternRule::PerfectDual => 95,
            PatternRule::FatherPrefix => 75,
            PatternRule::MotherSuffix => 70,
            PatternRule::ContainsBoth => 50,
            PatternRule::Partial => 30,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PatternRule::PerfectDual => "perfect dual match",
            PatternRule::FatherPrefix => "father-prefix match",
            PatternRule::MotherSuffix => "mother-suffix match",
            PatternRule::ContainsBoth => "contains both",
            PatternRule::Partial => "partial match",
        }
    }

    pub fn classify(seeds: &Seeds, candidate: &Candidate<'_>) -> Option<Self> {
        let starts = seeds.father_first.is_some() && candidate.first() == seeds.father_first;
        let ends = seeds.mother_last.is_some() && candidate.last() == seeds.mother_last;
        let has_father = candidate.contains_letter(seeds.father_first);
        let has_mother = candidate.contains_letter(seeds.mother_last);

        if starts && ends {
            Some(PatternRule::PerfectDual)
        } else if starts {
            Some(PatternRule::FatherPrefix)
        } else if ends {
            Some(PatternRule::MotherSuffix)
        } else if has_father && has_mother {
            Some(PatternRule::ContainsBoth)
        } else if has_father || has_mother {
            Some(PatternRule::Partial)
        } else {
            None
        }
    }
}

pub struct ExactPatternMatcher;

impl MatchStrategy for ExactPatternMatcher {
    fn name(&self) -> &'static str {
        "exact_pattern"
    }

    fn score(&self, seeds: &Seeds, candidate: &Candidate<'_>) -> Option<Scored> {
        PatternRule::classify(seeds, candidate).map(|rule| Scored {
            confidence: rule.confidence(),
            tag: rule.tag().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(father: &str, mother: &str, name: &str) -> Option<PatternRule> {
        PatternRule::classify(&Seeds::new(father, mother), &Candidate::new(name))
    }

    #[test]
    fn test_perfect_dual() {
        // a...r
        assert_eq!(rule("Akmal", "Nilufar", "Amir"), Some(PatternRule::PerfectDual));
    }

    #[test]
    fn test_father_prefix() {
        assert_eq!(rule("Akmal", "Nilufar", "Akmal"), Some(PatternRule::FatherPrefix));
    }

    #[test]
    fn test_mother_suffix() {
        assert_eq!(rule("Akmal", "Nilufar", "Nodir"), Some(PatternRule::MotherSuffix));
    }

    #[test]
    fn test_contains_both() {
        // no leading a, no trailing r, contains both
        assert_eq!(rule("Akmal", "Nilufar", "Farrux"), Some(PatternRule::ContainsBoth));
    }

    #[test]
    fn test_partial() {
        assert_eq!(rule("Akmal", "Nilufar", "Davron"), Some(PatternRule::ContainsBoth));
        assert_eq!(rule("Akmal", "Nilufar", "Bekzod"), None);
        assert_eq!(rule("Akmal", "Nilufar", "Husan"), Some(PatternRule::Partial));
        assert_eq!(rule("Akmal", "Nilufar", "Elyor"), Some(PatternRule::MotherSuffix));
    }

    #[test]
    fn test_no_letters_never_match() {
        assert_eq!(rule("", "", "Amir"), None);
        assert_eq!(rule("  ", "", "Zafar"), None);
    }

    #[test]
    fn test_one_missing_seed_still_matches_other() {
        assert_eq!(rule("", "Nilufar", "Timur"), Some(PatternRule::MotherSuffix));
        assert_eq!(rule("Timur", "", "Timur"), Some(PatternRule::FatherPrefix));
        assert_eq!(rule("Timur", "", "Islom"), None);
        assert_eq!(rule("Timur", "", "Husan"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(rule("akmal", "NILUFAR", "AMIR"), Some(PatternRule::PerfectDual));
    }

    #[test]
    fn test_scored_output() {
        let scored = ExactPatternMatcher
            .score(&Seeds::new("Akmal", "Nilufar"), &Candidate::new("Amir"))
            .unwrap();
        assert_eq!(scored.confidence, 95);
        assert_eq!(scored.tag, "perfect dual match");
    }
}
