//! Rule-based pluralization and singular/plural overlap estimation.
//!
//! Animal reference lists routinely carry both a singular and its plural as
//! separate rows, so one concept named twice ("cat ... cats") can surface as
//! two matched entries. This crate quantifies that failure mode: derive a
//! plural for every matched word from an ordered suffix-rule table, pool the
//! candidates with a small table of known irregular animal plurals, and
//! count how many candidates literally appear in the matched list.
//!
//! The result is advisory. It estimates a rate of likely double-counted
//! singular/plural pairs and is reported next to the match table, never
//! subtracted from it.
//!
//! # How it works
//! 1. Normalize each matched word.
//! 2. Derive its plural, first matching suffix rule wins.
//! 3. Add the irregular plurals to the candidate pool (once per call).
//! 4. Count candidates present in the matched list by exact equality.
//!
//! # Example
//! ```rust
//! use fluency_plural::{estimate_overlap, pluralize};
//!
//! assert_eq!(pluralize("pony"), "ponies");
//! assert_eq!(pluralize("wolf"), "wolves");
//! assert_eq!(estimate_overlap(&["cat", "cats"]), 1);
//! assert_eq!(estimate_overlap(&["dog"]), 0);
//! ```

use fluency_types::normalize;

/// Known irregular animal plurals, pooled with the derived candidates on
/// every estimate regardless of which singulars matched.
///
/// "monkeys" and "turkeys" live here because the `y` rule below mis-derives
/// `-ey` words ("monkey" -> "monkeies").
pub const IRREGULAR_PLURALS: [&str; 5] = ["mice", "geese", "oxen", "monkeys", "turkeys"];

/// Suffix rules in evaluation order; the first matching suffix wins and the
/// replacement substitutes the suffix. Words matching no rule take a plain
/// `s`. The `s` rule fires before `us`, so `-us` words pluralize with `-es`.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("y", "ies"),
    ("f", "ves"),
    ("s", "ses"),
    ("x", "xes"),
    ("z", "zes"),
    ("ch", "ches"),
    ("sh", "shes"),
    ("us", "i"),
];

/// Derive the plural form of a normalized singular word.
pub fn pluralize(word: &str) -> String {
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(plural) = apply_rule(word, suffix, replacement) {
            return plural;
        }
    }
    format!("{word}s")
}

fn apply_rule(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .map(|stem| format!("{stem}{replacement}"))
}

/// Estimate how many matched words duplicate another matched word as its
/// plural.
///
/// Each matched word is normalized and pluralized; the candidates plus
/// [`IRREGULAR_PLURALS`] are then checked for literal membership (exact
/// equality, not substring) in the normalized matched list, one increment
/// per candidate found.
pub fn estimate_overlap<S: AsRef<str>>(matched: &[S]) -> usize {
    let words: Vec<String> = matched.iter().map(|w| normalize(w.as_ref())).collect();

    let mut candidates: Vec<String> = words.iter().map(|w| pluralize(w)).collect();
    candidates.extend(IRREGULAR_PLURALS.iter().map(|s| (*s).to_string()));

    candidates
        .iter()
        .filter(|candidate| words.iter().any(|w| w == *candidate))
        .count()
}
