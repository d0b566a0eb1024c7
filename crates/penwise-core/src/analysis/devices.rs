//! Literary device detection.
//!
//! Each detector is an independent left-to-right scan that emits one
//! [`LiteraryDevice`] per non-overlapping match. The patterns are crude and
//! over-broad on purpose ("was a dog" counts as a metaphor); findings from
//! different detectors are never merged or deduplicated.

use std::sync::LazyLock;

use regex::Regex;

use super::reports::{DeviceKind, LiteraryDevice};

/// A whole ASCII word.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

/// Copula + article + word.
static METAPHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:is|are|was|were)\s+(?:a|an|the)\s+\w+").expect("valid regex")
});

/// "like"/"as" + article + word.
static SIMILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:like|as)\s+(?:a|an|the)\s+\w+").expect("valid regex")
});

/// "the" + word + human verb.
static PERSONIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bthe\s+\w+\s+(?:sings|dances|whispers|cries|laughs|smiles|weeps|roars|sleeps|walks|runs|talks|thinks)\b",
    )
    .expect("valid regex")
});

/// Absolute quantifier + any word.
static HYPERBOLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:never|always|forever|everyone|no one|all|none)\s+\w+")
        .expect("valid regex")
});

/// Find runs of two or more consecutive words that start with the same
/// consonant, case-insensitively. Words must be separated by whitespace
/// only; each run is reported once, spanning its first to last word.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_alliteration(text: &str) -> Vec<LiteraryDevice> {
    let mut found = Vec::new();
    // (run start, run end, initial, words in run)
    let mut run: Option<(usize, usize, char, usize)> = None;

    for m in WORD_RE.find_iter(text) {
        let initial = m
            .as_str()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .filter(is_consonant);

        let continues = match (run, initial) {
            (Some((_, end, c, _)), Some(i)) => {
                c == i && text[end..m.start()].chars().all(char::is_whitespace)
            }
            _ => false,
        };

        if continues {
            if let Some(current) = run.as_mut() {
                current.1 = m.end();
                current.3 += 1;
            }
            continue;
        }

        if let Some((start, end, _, len)) = run.take()
            && len >= 2
        {
            found.push(LiteraryDevice::new(DeviceKind::Alliteration, &text[start..end]));
        }
        run = initial.map(|i| (m.start(), m.end(), i, 1));
    }

    if let Some((start, end, _, len)) = run
        && len >= 2
    {
        found.push(LiteraryDevice::new(DeviceKind::Alliteration, &text[start..end]));
    }

    found
}

/// Find copula + article + noun constructions ("the moon was a lantern").
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_metaphors(text: &str) -> Vec<LiteraryDevice> {
    scan(&METAPHOR_RE, DeviceKind::Metaphor, text)
}

/// Find "like"/"as" + article + noun constructions.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_similes(text: &str) -> Vec<LiteraryDevice> {
    scan(&SIMILE_RE, DeviceKind::Simile, text)
}

/// Find "the <thing> <human verb>" constructions.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_personification(text: &str) -> Vec<LiteraryDevice> {
    scan(&PERSONIFICATION_RE, DeviceKind::Personification, text)
}

/// Find absolute quantifiers followed by a word.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_hyperbole(text: &str) -> Vec<LiteraryDevice> {
    scan(&HYPERBOLE_RE, DeviceKind::Hyperbole, text)
}

/// Run every detector and concatenate the findings in a fixed order:
/// alliteration, metaphor, simile, personification, hyperbole.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_literary_devices(text: &str) -> Vec<LiteraryDevice> {
    let mut devices = detect_alliteration(text);
    devices.extend(detect_metaphors(text));
    devices.extend(detect_similes(text));
    devices.extend(detect_personification(text));
    devices.extend(detect_hyperbole(text));
    tracing::debug!(count = devices.len(), "literary devices detected");
    devices
}

fn scan(re: &Regex, kind: DeviceKind, text: &str) -> Vec<LiteraryDevice> {
    re.find_iter(text)
        .map(|m| LiteraryDevice::new(kind, m.as_str()))
        .collect()
}

fn is_consonant(c: &char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples(devices: &[LiteraryDevice]) -> Vec<&str> {
        devices.iter().map(|d| d.example.as_str()).collect()
    }

    #[test]
    fn alliteration_spans_whole_run() {
        let found = detect_alliteration("Peter Piper picked peppers today.");
        assert_eq!(examples(&found), vec!["Peter Piper picked peppers"]);
        assert_eq!(found[0].kind, DeviceKind::Alliteration);
    }

    #[test]
    fn alliteration_ignores_vowels_and_single_words() {
        assert!(detect_alliteration("An apple is enough.").is_empty());
        assert!(detect_alliteration("Big red dog.").is_empty());
    }

    #[test]
    fn alliteration_breaks_on_punctuation() {
        // The comma separates the words, so no run forms.
        assert!(detect_alliteration("silver, sand").is_empty());
    }

    #[test]
    fn alliteration_finds_multiple_runs_in_order() {
        let found = detect_alliteration("big brown bears sleep soundly");
        assert_eq!(examples(&found), vec!["big brown bears", "sleep soundly"]);
    }

    #[test]
    fn metaphor_matches_copula_article_noun() {
        let found = detect_metaphors("The classroom was a zoo. Her eyes are the stars.");
        assert_eq!(examples(&found), vec!["was a zoo", "are the stars"]);
    }

    #[test]
    fn simile_matches_like_and_as() {
        let found = detect_similes("He ran like the wind and was as a ghost.");
        assert_eq!(examples(&found), vec!["like the wind", "as a ghost"]);
    }

    #[test]
    fn personification_needs_listed_verb() {
        let found = detect_personification("The wind whispers softly. The dog barks.");
        assert_eq!(examples(&found), vec!["The wind whispers"]);
    }

    #[test]
    fn hyperbole_matches_absolutes() {
        let found = detect_hyperbole("I will never forget. No one cares.");
        assert_eq!(examples(&found), vec!["never forget", "No one cares"]);
    }

    #[test]
    fn detectors_are_deterministic() {
        let text = "The wind whispers like a ghost. Everyone knows the sea was a monster.";
        assert_eq!(detect_literary_devices(text), detect_literary_devices(text));
    }

    #[test]
    fn combined_order_is_by_detector_and_never_deduplicated() {
        // "was" is shared by the metaphor and the hyperbole match
        let text = "Everyone was a hero.";
        let found = detect_literary_devices(text);
        let kinds: Vec<DeviceKind> = found.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DeviceKind::Metaphor, DeviceKind::Hyperbole]);
        assert_eq!(examples(&found), vec!["was a hero", "Everyone was"]);
    }

    #[test]
    fn explanation_is_static_per_kind() {
        let found = detect_metaphors("It was a storm. She is a rock.");
        assert_eq!(found[0].explanation, found[1].explanation);
    }

    #[test]
    fn empty_text_finds_nothing() {
        assert!(detect_literary_devices("").is_empty());
    }
}
