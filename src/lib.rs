pub mod config;
pub mod corpus;
pub mod engine;
pub mod enrich;
pub mod error;

pub use corpus::{Gender, GenderFilter, NameCorpus, NameMeaning};
pub use engine::NameEngine;
pub use engine::types::GeneratedName;
pub use error::{IsmForgeError, Result};

