//! Seed normalization and syllable windows.
//!
//! A "syllable" here is any 2- or 3-character window of the normalized seed,
//! not a linguistic syllable.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Trim, NFKC-normalize and lowercase a seed or candidate name. NFKC folds
/// compatibility forms (full-width letters, ligatures) onto plain letters
/// before any comparison.
pub fn normalize(input: &str) -> String {
    input.trim().nfkc().collect::<String>().to_lowercase()
}

/// Deduplicated 2- and 3-character windows of `seed`, in first-seen order.
/// Seeds shorter than two characters yield nothing.
pub fn extract_syllables(seed: &str) -> Vec<String> {
    let chars: Vec<char> = normalize(seed).chars().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for i in 0..chars.len().saturating_sub(1) {
        let pair: String = chars[i..i + 2].iter().collect();
        if seen.insert(pair.clone()) {
            out.push(pair);
        }
        if i + 3 <= chars.len() {
            let triple: String = chars[i..i + 3].iter().collect();
            if seen.insert(triple.clone()) {
                out.push(triple);
            }
        }
    }
    out
}
