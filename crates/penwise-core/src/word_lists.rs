//! Curated word lists for writing analysis.
//!
//! Stop words for overuse detection, "telling" vocabulary for the
//! show/don't-tell meter, irregular past participles for passive cues, and
//! common student misspellings.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Function words never reported as overused.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "should",
        "could", "may", "might", "must", "can", "it", "its", "this", "that", "these", "those",
        "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she", "her", "they",
        "them", "their", "as", "so", "if", "then", "than", "not", "no", "there", "here", "when",
        "where", "what", "which", "who", "how", "all", "s", "t",
    ]
    .into_iter()
    .collect()
});

/// Emotion, judgment, intensifier, and generic-verb words that signal
/// "telling" rather than "showing".
pub static TELLING_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Emotions
        "happy",
        "sad",
        "angry",
        "scared",
        "afraid",
        "excited",
        "nervous",
        "worried",
        "upset",
        "lonely",
        "jealous",
        "bored",
        "tired",
        "surprised",
        "frightened",
        "annoyed",
        "anxious",
        "embarrassed",
        "proud",
        "miserable",
        "furious",
        "terrified",
        // Judgments
        "beautiful",
        "ugly",
        "nice",
        "good",
        "bad",
        "great",
        "amazing",
        "awesome",
        "terrible",
        "horrible",
        "wonderful",
        "interesting",
        "boring",
        "pretty",
        "scary",
        // Intensifiers
        "very",
        "really",
        "extremely",
        "quite",
        "totally",
        "so",
        // Generic verbs of state and perception
        "felt",
        "feel",
        "feels",
        "seemed",
        "seems",
        "looked",
        "appeared",
        "realized",
        "knew",
        "thought",
        "noticed",
        "decided",
    ]
    .into_iter()
    .collect()
});

/// Irregular past participles that follow passive auxiliaries.
pub static IRREGULAR_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "been", "begun", "bitten", "blown", "broken", "brought", "built", "bought", "caught",
        "chosen", "done", "drawn", "driven", "eaten", "fallen", "felt", "found", "forgotten",
        "frozen", "given", "gone", "grown", "heard", "held", "hidden", "hit", "hurt", "kept",
        "known", "laid", "led", "left", "lost", "made", "meant", "met", "paid", "put", "read",
        "ridden", "rung", "risen", "run", "said", "seen", "sent", "set", "shaken", "shot",
        "shown", "shut", "sold", "spoken", "spent", "stolen", "struck", "sung", "sunk", "swept",
        "taken", "taught", "thrown", "told", "torn", "understood", "woken", "won", "worn",
        "written",
    ]
    .into_iter()
    .collect()
});

/// Participles ending in `-ed` that usually act as adjectives after "is"/"was".
pub static ADJECTIVE_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "tired",
        "excited",
        "bored",
        "scared",
        "worried",
        "interested",
        "surprised",
        "annoyed",
        "embarrassed",
        "frightened",
        "married",
        "supposed",
        "used",
        "red",
        "bed",
        "need",
        "seed",
        "feed",
        "speed",
        "shed",
        "sled",
        "wed",
    ]
    .into_iter()
    .collect()
});

/// Common misspellings mapped to their corrections.
pub static MISSPELLINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("teh", "the"),
        ("recieve", "receive"),
        ("recieved", "received"),
        ("beleive", "believe"),
        ("beleived", "believed"),
        ("freind", "friend"),
        ("freinds", "friends"),
        ("wierd", "weird"),
        ("untill", "until"),
        ("occured", "occurred"),
        ("begining", "beginning"),
        ("definately", "definitely"),
        ("seperate", "separate"),
        ("tommorow", "tomorrow"),
        ("tomorow", "tomorrow"),
        ("alot", "a lot"),
        ("becuase", "because"),
        ("beacuse", "because"),
        ("thier", "their"),
        ("truely", "truly"),
        ("suprise", "surprise"),
        ("suprised", "surprised"),
        ("neccessary", "necessary"),
        ("necesary", "necessary"),
        ("accross", "across"),
        ("arguement", "argument"),
        ("calender", "calendar"),
        ("embarass", "embarrass"),
        ("enviroment", "environment"),
        ("goverment", "government"),
        ("happend", "happened"),
        ("immediatly", "immediately"),
        ("knowlege", "knowledge"),
        ("libary", "library"),
        ("noticable", "noticeable"),
        ("persue", "pursue"),
        ("realy", "really"),
        ("rember", "remember"),
        ("shoud", "should"),
        ("sentance", "sentence"),
        ("wich", "which"),
        ("whith", "with"),
        ("writting", "writing"),
        ("finaly", "finally"),
        ("familar", "familiar"),
        ("dissapear", "disappear"),
        ("dissapeared", "disappeared"),
        ("dissapointed", "disappointed"),
        ("excercise", "exercise"),
        ("grammer", "grammar"),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telling_words_are_lowercase() {
        assert!(TELLING_WORDS.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn misspellings_never_map_to_themselves() {
        assert!(MISSPELLINGS.iter().all(|(wrong, right)| wrong != right));
    }

    #[test]
    fn stop_words_cover_articles() {
        for w in ["the", "a", "an"] {
            assert!(STOP_WORDS.contains(w));
        }
    }
}
