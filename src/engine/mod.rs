//! Name engine: runs match strategies over the corpus, enriches, ranks.
//! Scoring is deterministic and driven purely by string comparisons.

pub mod blend;
pub mod exact;
pub mod strategy;
pub mod syllables;
pub mod types;

use crate::config::Config;
use crate::corpus::{
    Gender, GenderFilter, NameCorpus, NameMeaning, PLACEHOLDER_MEANING, PLACEHOLDER_ORIGIN,
};
use crate::enrich::{self, Enricher, NoopEnricher};
use crate::error::{IsmForgeError, Result};
use blend::SyllableBlender;
use exact::ExactPatternMatcher;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use strategy::{Candidate, MatchStrategy, Seeds};
use tracing::{debug, info, warn};
use types::{GeneratedName, Scored, tagged};

pub const DEFAULT_RESULT_LIMIT: usize = 10;
/// Output never grows past this, whatever the configuration says
pub const MAX_RESULT_LIMIT: usize = 10;

pub struct NameEngine {
    corpus: Arc<NameCorpus>,
    strategies: Vec<Arc<dyn MatchStrategy>>, // run in order; earlier strategies claim names first
    enricher: Arc<dyn Enricher>,
    enrich_timeout: Option<Duration>,
    limit: usize,
}

impl NameEngine {
    /// Exact pattern matching, then syllable blending, no enrichment, top 10
    pub fn new(corpus: Arc<NameCorpus>) -> Self {
        Self {
            corpus,
            strategies: vec![
                Arc::new(ExactPatternMatcher),
                Arc::new(SyllableBlender::default()),
            ],
            enricher: Arc::new(NoopEnricher),
            enrich_timeout: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(|e| IsmForgeError::Config {
            message: e.to_string(),
        })?;
        let corpus = match config.engine.corpus_path.as_deref() {
            Some(path) => Arc::new(NameCorpus::from_path(path)?),
            None => NameCorpus::builtin(),
        };
        let enricher = enrich::from_config(&config.enrichment)?;

        Ok(Self::new(corpus)
            .with_strategies(vec![
                Arc::new(ExactPatternMatcher),
                Arc::new(SyllableBlender::new(config.engine.min_syllable_matches)),
            ])
            .with_enricher(enricher)
            .with_enrich_timeout(Some(Duration::from_millis(config.enrichment.timeout_ms)))
            .with_limit(config.engine.result_limit))
    }

    pub fn with_strategies(mut self, strategies: Vec<Arc<dyn MatchStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_enricher(mut self, enricher: Arc<dyn Enricher>) -> Self {
        self.enricher = enricher;
        self
    }

    pub fn with_enrich_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.enrich_timeout = timeout;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_RESULT_LIMIT);
        self
    }

    pub fn corpus(&self) -> &NameCorpus {
        &self.corpus
    }

    /// Ranked suggestions for a child of `father` and `mother`
    pub async fn generate(
        &self,
        father: &str,
        mother: &str,
        filter: GenderFilter,
    ) -> Vec<GeneratedName> {
        let results = self.score(father, mother, filter);
        let results = self.enrich(results, filter).await;
        rank(results, self.limit)
    }

    /// Like [`generate`](Self::generate) with the filter given as text; unknown
    /// filters are rejected rather than defaulted.
    pub async fn generate_str(
        &self,
        father: &str,
        mother: &str,
        gender: &str,
    ) -> Result<Vec<GeneratedName>> {
        let filter: GenderFilter = gender.parse()?;
        Ok(self.generate(father, mother, filter).await)
    }

    /// Run every strategy over the filtered corpus. Output is in discovery
    /// order, unranked, with each name at most once.
    pub fn score(&self, father: &str, mother: &str, filter: GenderFilter) -> Vec<GeneratedName> {
        let seeds = Seeds::new(father, mother);
        info!(
            "Generating names: father='{}' first={:?}, mother='{}' last={:?}, gender={}",
            father.trim(),
            seeds.father_first,
            mother.trim(),
            seeds.mother_last,
            filter
        );

        let mut results: Vec<GeneratedName> = Vec::new();
        let mut emitted: HashSet<String> = HashSet::new();

        for strategy in &self.strategies {
            let before = results.len();
            for (name, gender) in self.corpus.pool(filter) {
                if emitted.contains(name) {
                    continue;
                }
                let candidate = Candidate::new(name);
                let Some(scored) = strategy.score(&seeds, &candidate) else {
                    continue;
                };
                emitted.insert(name.to_string());
                results.push(self.record(name, gender, scored));
            }
            debug!(
                "Strategy {} emitted {} names",
                strategy.name(),
                results.len() - before
            );
        }
        results
    }

    fn record(&self, name: &str, gender: Gender, scored: Scored) -> GeneratedName {
        let (meaning, origin) = match self.corpus.meaning(name) {
            Some(entry) => (entry.meaning.as_str(), entry.origin.as_str()),
            None => (PLACEHOLDER_MEANING, PLACEHOLDER_ORIGIN),
        };
        GeneratedName {
            name: name.to_string(),
            meaning: tagged(meaning, &scored.tag),
            origin: origin.to_string(),
            gender,
            confidence: scored.confidence,
        }
    }

    async fn enrich(&self, results: Vec<GeneratedName>, filter: GenderFilter) -> Vec<GeneratedName> {
        let attempt = self.enricher.enrich(results.clone());
        let outcome = match self.enrich_timeout {
            Some(limit) => match tokio::time::timeout(limit, attempt).await {
                Ok(outcome) => outcome,
                Err(_) => Err(IsmForgeError::Timeout {
                    operation: format!("{} enrichment", self.enricher.name()),
                    timeout_ms: limit.as_millis() as u64,
                }
                .into()),
            },
            None => attempt.await,
        };

        match outcome {
            Ok(enriched) => retain_invariants(enriched, filter, &self.corpus),
            Err(e) => {
                warn!(
                    "Enrichment via {} unavailable, using local results: {}",
                    self.enricher.name(),
                    e
                );
                results
            }
        }
    }

    /// Is this exact name present in either gender pool
    pub fn validate_name(&self, name: &str) -> bool {
        self.corpus.contains(name)
    }

    /// Lookup entry for an exact name, `None` when absent
    pub fn name_meaning(&self, name: &str) -> Option<&NameMeaning> {
        self.corpus.meaning(name)
    }
}

/// Drop records an enricher added outside the filter, names missing from the
/// corpus or carrying a gender other than their corpus tag, and repeated names
fn retain_invariants(
    names: Vec<GeneratedName>,
    filter: GenderFilter,
    corpus: &NameCorpus,
) -> Vec<GeneratedName> {
    let mut seen: HashSet<String> = HashSet::new();
    names
        .into_iter()
        .filter(|n| {
            corpus.gender_of(&n.name) == Some(n.gender)
                && filter.admits(n.gender)
                && seen.insert(n.name.clone())
        })
        .collect()
}

/// Stable sort by confidence descending, then keep the first `limit`
pub fn rank(mut names: Vec<GeneratedName>, limit: usize) -> Vec<GeneratedName> {
    names.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    names.truncate(limit);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> NameEngine {
        NameEngine::new(NameCorpus::builtin())
    }

    fn named(name: &str, confidence: u32) -> GeneratedName {
        GeneratedName {
            name: name.into(),
            meaning: "m [t]".into(),
            origin: "o".into(),
            gender: Gender::Boy,
            confidence,
        }
    }

    #[test]
    fn test_rank_is_stable_and_truncates() {
        let ranked = rank(
            vec![named("a", 30), named("b", 70), named("c", 70), named("d", 95)],
            3,
        );
        let order: Vec<&str> = ranked.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(order, vec!["d", "b", "c"]);
    }

    #[tokio::test]
    async fn test_limit_is_capped() {
        let engine = engine().with_limit(50);
        let names = engine.generate("Akmal", "Nilufar", GenderFilter::All).await;
        assert_eq!(names.len(), MAX_RESULT_LIMIT);
    }

    #[test]
    fn test_score_uses_lookup_and_placeholder() {
        let results = engine().score("Akmal", "Nilufar", GenderFilter::Boy);
        let amir = results.iter().find(|r| r.name == "Amir").unwrap();
        assert_eq!(amir.confidence, 95);
        assert_eq!(amir.meaning, "Rahbar, amirlik qiluvchi [perfect dual match]");
        assert_eq!(amir.origin, "Arabcha");

        let akmal = results.iter().find(|r| r.name == "Akmal").unwrap();
        assert_eq!(akmal.confidence, 75);
        assert_eq!(akmal.meaning, format!("{} [father-prefix match]", PLACEHOLDER_MEANING));
        assert_eq!(akmal.origin, PLACEHOLDER_ORIGIN);
    }

    #[test]
    fn test_score_discovery_order_exact_first() {
        let corpus = NameCorpus::builder()
            .boy("Temur")
            .boy("Umid")
            .boy("Mirzo")
            .build()
            .unwrap();
        let engine = NameEngine::new(Arc::new(corpus));

        let scored = engine.score("Timur", "Umida", GenderFilter::All);
        let order: Vec<(&str, u32)> = scored
            .iter()
            .map(|r| (r.name.as_str(), r.confidence))
            .collect();
        // um, umi, mi, mid, id from "umida"; "mirzo" only shares "mi"
        assert_eq!(order, vec![("Temur", 75), ("Umid", 90)]);
        assert_eq!(scored[1].tag(), Some("5 syllable match"));

        let ranked = rank(scored, DEFAULT_RESULT_LIMIT);
        assert_eq!(ranked[0].name, "Umid");
    }

    #[test]
    fn test_names_missed_by_both_strategies_are_dropped() {
        // Oydin and Shirin hold neither 'a' nor any shared syllable
        let results = engine().score("Anvar", "Malika", GenderFilter::Girl);
        assert_eq!(results.len(), 25);
        assert!(results.iter().all(|r| r.name != "Oydin" && r.name != "Shirin"));
        let unique: HashSet<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn test_retain_invariants() {
        let mut girl = named("Aisha", 50);
        girl.gender = Gender::Girl;
        let kept = retain_invariants(
            vec![named("Amir", 95), named("Amir", 10), girl],
            GenderFilter::Boy,
            &NameCorpus::builtin(),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].confidence, 95);
    }

    #[test]
    fn test_retain_invariants_checks_corpus_tag() {
        // Bobur is not in the corpus; Malika is a girl relabelled as a boy
        let kept = retain_invariants(
            vec![named("Bobur", 99), named("Malika", 98), named("Amir", 95)],
            GenderFilter::Boy,
            &NameCorpus::builtin(),
        );
        let order: Vec<&str> = kept.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(order, vec!["Amir"]);
    }
}
