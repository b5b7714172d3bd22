use fluency_lexicon::Lexicon;
use fluency_plural::estimate_overlap;
use fluency_types::{CountEntry, MatchResult, normalize};
use tracing::warn;

/// Remove size-adjective occurrences from a transcript before animal
/// matching, so an adjective token cannot be mistaken for, or fuse with, an
/// animal token.
///
/// The scan is a sequential fold over the list: each size word is counted
/// and deleted from the text the previous deletions produced, so later list
/// entries never re-count text an earlier entry already consumed. Matching
/// here is plain substring, no word boundaries; size adjectives are allowed
/// to hit prefixes and suffixes of inflected forms.
pub fn strip_size_adjectives(transcript: &str, size_words: &[String]) -> (String, MatchResult) {
    let mut text = normalize(transcript);
    let mut stripped = Vec::new();

    for raw in size_words {
        let word = normalize(raw);
        if word.is_empty() {
            warn!("skipping size adjective with empty normalized form: {raw:?}");
            continue;
        }
        let count = text.matches(word.as_str()).count();
        if count > 0 {
            text = text.replace(word.as_str(), "");
            stripped.push(CountEntry { word, count });
        }
    }

    (text, stripped)
}

/// Count animal-name mentions in an adjective-stripped transcript.
///
/// The working text gets one leading and one trailing space and every
/// candidate is matched space-padded, so names only ever match as whole
/// words ("cat" cannot hit "category"). A matched name is deleted in its
/// unpadded form before the next list entry is tried; when two names overlap
/// as substrings, list order decides which one wins. The reference list is
/// expected to arrive pre-ordered to make that resolution sane.
pub fn match_animals(stripped: &str, animal_words: &[String]) -> MatchResult {
    let mut text = format!(" {} ", normalize(stripped));
    let mut matches = Vec::new();

    for raw in animal_words {
        let word = normalize(raw);
        if word.is_empty() {
            // A padded empty word would match at every position.
            warn!("skipping animal name with empty normalized form: {raw:?}");
            continue;
        }
        let padded = format!(" {word} ");
        let count = text.matches(padded.as_str()).count();
        if count > 0 {
            text = text.replace(word.as_str(), "");
            matches.push(CountEntry { word, count });
        }
    }

    matches
}

/// Score one transcript: strip size adjectives, then match animal names.
///
/// The lexicon comes in already loaded; this function never touches storage.
pub fn count_animals(transcript: &str, lexicon: &Lexicon) -> MatchResult {
    let (stripped, _) = strip_size_adjectives(transcript, lexicon.size_adjectives.entries());
    match_animals(&stripped, lexicon.animals.entries())
}

/// Estimate how many matched entries are singular/plural double counts of
/// the same concept. Advisory; never folded back into the match table.
pub fn count_plurals(matches: &MatchResult) -> usize {
    let words: Vec<&str> = matches.iter().map(|e| e.word.as_str()).collect();
    estimate_overlap(&words)
}
