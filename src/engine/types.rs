//! Types produced by the name engine.

use crate::corpus::Gender;
use serde::{Deserialize, Serialize};

/// One ranked suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
    /// `"<base meaning> [<tag>]"`
    pub meaning: String,
    pub origin: String,
    pub gender: Gender,
    /// Ranking score. Syllable matches can exceed 100.
    pub confidence: u32,
}

impl GeneratedName {
    /// Bracketed match tag, if the meaning carries one
    pub fn tag(&self) -> Option<&str> {
        split_tag(&self.meaning).1
    }

    /// Meaning without the trailing match tag
    pub fn base_meaning(&self) -> &str {
        split_tag(&self.meaning).0
    }
}

pub(crate) fn tagged(base: &str, tag: &str) -> String {
    format!("{} [{}]", base, tag)
}

fn split_tag(meaning: &str) -> (&str, Option<&str>) {
    meaning
        .strip_suffix(']')
        .and_then(|rest| rest.rsplit_once(" ["))
        .map_or((meaning, None), |(base, tag)| (base, Some(tag)))
}

/// Score assigned to a candidate by a single strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub confidence: u32,
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(meaning: &str) -> GeneratedName {
        GeneratedName {
            name: "Amir".into(),
            meaning: meaning.into(),
            origin: "Arabcha".into(),
            gender: Gender::Boy,
            confidence: 75,
        }
    }

    #[test]
    fn test_tag_split() {
        let g = sample("Rahbar, amirlik qiluvchi [father-prefix match]");
        assert_eq!(g.tag(), Some("father-prefix match"));
        assert_eq!(g.base_meaning(), "Rahbar, amirlik qiluvchi");
    }

    #[test]
    fn test_untagged_meaning() {
        let g = sample("Rahbar");
        assert_eq!(g.tag(), None);
        assert_eq!(g.base_meaning(), "Rahbar");
    }

    #[test]
    fn test_serializes_gender_lowercase() {
        let json = serde_json::to_value(sample("x [y]")).unwrap();
        assert_eq!(json["gender"], "boy");
        assert_eq!(json["confidence"], 75);
    }
}
