//! Gender-tagged name corpus and the meaning lookup table.
//!
//! A `NameCorpus` is built once and shared behind `Arc`; nothing mutates it
//! after construction. `NameCorpus::builtin()` returns the stock Uzbek corpus,
//! while tests and alternate deployments assemble their own through
//! [`NameCorpus::builder`] or a TOML corpus file.

mod builtin;

use crate::error::{IsmForgeError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Meaning used when a corpus name has no lookup entry
pub const PLACEHOLDER_MEANING: &str = "Go'zal va ma'noli ism";
/// Origin used when a corpus name has no lookup entry
pub const PLACEHOLDER_ORIGIN: &str = "O'zbekcha";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which gender pool a request draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderFilter {
    Boy,
    Girl,
    All,
}

impl GenderFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::Boy => "boy",
            GenderFilter::Girl => "girl",
            GenderFilter::All => "all",
        }
    }

    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::Boy => gender == Gender::Boy,
            GenderFilter::Girl => gender == Gender::Girl,
            GenderFilter::All => true,
        }
    }
}

impl From<Gender> for GenderFilter {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Boy => GenderFilter::Boy,
            Gender::Girl => GenderFilter::Girl,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = IsmForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "boy" => Ok(GenderFilter::Boy),
            "girl" => Ok(GenderFilter::Girl),
            "all" => Ok(GenderFilter::All),
            other => Err(IsmForgeError::InvalidParams {
                message: format!(
                    "Unknown gender filter '{}'. Expected one of: boy, girl, all",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Human-readable meaning and linguistic origin of a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMeaning {
    pub meaning: String,
    pub origin: String,
}

/// On-disk corpus layout
#[derive(Debug, Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    boys: Vec<String>,
    #[serde(default)]
    girls: Vec<String>,
    #[serde(default)]
    meanings: HashMap<String, NameMeaning>,
}

/// Immutable gender-partitioned name collection
#[derive(Debug, Clone, Default)]
pub struct NameCorpus {
    boys: Vec<String>,
    girls: Vec<String>,
    genders: HashMap<String, Gender>,
    meanings: HashMap<String, NameMeaning>,
}

static BUILTIN: Lazy<Arc<NameCorpus>> = Lazy::new(|| {
    let mut builder = NameCorpus::builder();
    for name in builtin::BOYS {
        builder = builder.boy(*name);
    }
    for name in builtin::GIRLS {
        builder = builder.girl(*name);
    }
    for (name, meaning, origin) in builtin::MEANINGS {
        builder = builder.meaning(*name, *meaning, *origin);
    }
    Arc::new(builder.assemble())
});

impl NameCorpus {
    /// Shared handle to the stock Uzbek corpus
    pub fn builtin() -> Arc<NameCorpus> {
        BUILTIN.clone()
    }

    pub fn builder() -> NameCorpusBuilder {
        NameCorpusBuilder::default()
    }

    /// Parse a TOML corpus document:
    ///
    /// ```toml
    /// boys = ["Amir", "Timur"]
    /// girls = ["Aisha"]
    ///
    /// [meanings.Amir]
    /// meaning = "Rahbar"
    /// origin = "Arabcha"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: CorpusDocument = toml::from_str(content)?;
        let mut builder = NameCorpus::builder();
        for name in doc.boys {
            builder = builder.boy(name);
        }
        for name in doc.girls {
            builder = builder.girl(name);
        }
        for (name, entry) in doc.meanings {
            builder = builder.meaning(name, entry.meaning, entry.origin);
        }
        builder.build()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IsmForgeError::Corpus {
            message: format!("Failed to read corpus file {}: {}", path.display(), e),
        })?;
        let corpus = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded corpus from {} ({} boys, {} girls, {} meanings)",
            path.display(),
            corpus.boys.len(),
            corpus.girls.len(),
            corpus.meanings.len()
        );
        Ok(corpus)
    }

    /// Names admitted by `filter` with their gender tag, boys before girls
    pub fn pool(&self, filter: GenderFilter) -> impl Iterator<Item = (&str, Gender)> + '_ {
        let boys = self
            .boys
            .iter()
            .filter(move |_| filter.admits(Gender::Boy))
            .map(|n| (n.as_str(), Gender::Boy));
        let girls = self
            .girls
            .iter()
            .filter(move |_| filter.admits(Gender::Girl))
            .map(|n| (n.as_str(), Gender::Girl));
        boys.chain(girls)
    }

    /// Is this exact (trimmed) name present in either gender pool
    pub fn contains(&self, name: &str) -> bool {
        self.genders.contains_key(name.trim())
    }

    pub fn gender_of(&self, name: &str) -> Option<Gender> {
        self.genders.get(name.trim()).copied()
    }

    /// Lookup entry for an exact name; `None` when the name has no entry
    pub fn meaning(&self, name: &str) -> Option<&NameMeaning> {
        self.meanings.get(name)
    }

    /// Closest corpus name by edit distance, for "did you mean" hints
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.boys
            .iter()
            .chain(self.girls.iter())
            .map(|candidate| {
                (
                    candidate.as_str(),
                    strsim::levenshtein(&wanted, &candidate.to_lowercase()),
                )
            })
            .min_by_key(|(_, distance)| *distance)
            .and_then(|(candidate, distance)| (distance < 3).then_some(candidate))
    }

    pub fn len(&self) -> usize {
        self.boys.len() + self.girls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects names and meanings before freezing them into a [`NameCorpus`]
#[derive(Debug, Default)]
pub struct NameCorpusBuilder {
    entries: Vec<(String, Gender)>,
    meanings: Vec<(String, NameMeaning)>,
}

impl NameCorpusBuilder {
    pub fn boy(self, name: impl Into<String>) -> Self {
        self.name(name, Gender::Boy)
    }

    pub fn girl(self, name: impl Into<String>) -> Self {
        self.name(name, Gender::Girl)
    }

    pub fn name(mut self, name: impl Into<String>, gender: Gender) -> Self {
        self.entries.push((name.into().trim().to_string(), gender));
        self
    }

    pub fn meaning(
        mut self,
        name: impl Into<String>,
        meaning: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        self.meanings.push((
            name.into().trim().to_string(),
            NameMeaning {
                meaning: meaning.into(),
                origin: origin.into(),
            },
        ));
        self
    }

    /// Freeze the corpus, rejecting empty names and names tagged with both genders
    pub fn build(self) -> Result<NameCorpus> {
        let mut seen: HashMap<&str, Gender> = HashMap::new();
        for (name, gender) in &self.entries {
            if name.is_empty() {
                return Err(IsmForgeError::Corpus {
                    message: "corpus names cannot be empty".into(),
                });
            }
            if let Some(previous) = seen.insert(name.as_str(), *gender)
                && previous != *gender
            {
                return Err(IsmForgeError::Corpus {
                    message: format!("'{}' is listed as both {} and {}", name, previous, gender),
                });
            }
        }
        for (name, _) in &self.meanings {
            if !seen.contains_key(name.as_str()) {
                tracing::warn!("Meaning entry for '{}' has no matching corpus name", name);
            }
        }
        Ok(self.assemble())
    }

    /// Repeated names keep their first position
    fn assemble(self) -> NameCorpus {
        let mut corpus = NameCorpus::default();
        for (name, gender) in self.entries {
            if corpus.genders.contains_key(&name) {
                continue;
            }
            corpus.genders.insert(name.clone(), gender);
            match gender {
                Gender::Boy => corpus.boys.push(name),
                Gender::Girl => corpus.girls.push(name),
            }
        }
        corpus.meanings = self.meanings.into_iter().collect();
        corpus
    }
}
