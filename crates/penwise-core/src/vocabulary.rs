//! Per-genre vocabulary sets and replacement suggestions.
//!
//! Each [`TextType`] owns a static [`VocabularySet`]: power words,
//! transition words, a weak-word replacement map, and sentence starters.
//! Text-type labels are resolved once at the boundary with
//! [`TextType::resolve`]; unknown labels fall back to narrative.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The genre a piece of writing is practising.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    /// Story writing (default).
    #[default]
    Narrative,
    /// Argument and opinion writing.
    Persuasive,
    /// Description of a place, person, or object.
    Descriptive,
    /// Informative writing that explains.
    Expository,
    /// Open-ended creative writing.
    Creative,
}

impl TextType {
    /// All text types, in display order.
    pub const ALL: [Self; 5] = [
        Self::Narrative,
        Self::Persuasive,
        Self::Descriptive,
        Self::Expository,
        Self::Creative,
    ];

    /// Resolve a free-form label. Case and surrounding whitespace are ignored;
    /// anything unrecognized resolves to [`TextType::Narrative`].
    pub fn resolve(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "persuasive" => Self::Persuasive,
            "descriptive" => Self::Descriptive,
            "expository" => Self::Expository,
            "creative" => Self::Creative,
            "narrative" => Self::Narrative,
            other => {
                tracing::debug!(label = other, "unknown text type, using narrative");
                Self::Narrative
            }
        }
    }

    /// Returns the text type as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Narrative => "narrative",
            Self::Persuasive => "persuasive",
            Self::Descriptive => "descriptive",
            Self::Expository => "expository",
            Self::Creative => "creative",
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TextType {
    fn from(label: &str) -> Self {
        Self::resolve(label)
    }
}

/// Static vocabulary for one text type.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularySet {
    /// Strong, vivid words suited to the genre.
    pub power_words: Vec<&'static str>,
    /// Words and phrases that link ideas.
    pub transition_words: Vec<&'static str>,
    /// Weak word → stronger alternatives.
    pub replacements: HashMap<&'static str, Vec<&'static str>>,
    /// Ways to open a sentence.
    pub sentence_starters: Vec<&'static str>,
}

impl VocabularySet {
    fn new(
        power_words: &[&'static str],
        transition_words: &[&'static str],
        replacements: &[(&'static str, &[&'static str])],
        sentence_starters: &[&'static str],
    ) -> Self {
        Self {
            power_words: power_words.to_vec(),
            transition_words: transition_words.to_vec(),
            replacements: replacements
                .iter()
                .map(|(weak, strong)| (*weak, strong.to_vec()))
                .collect(),
            sentence_starters: sentence_starters.to_vec(),
        }
    }
}

static NARRATIVE: LazyLock<VocabularySet> = LazyLock::new(|| {
    VocabularySet::new(
        &[
            "trembling", "whispered", "thundered", "glimmering", "shattered", "lurched",
            "desperate", "breathless", "crept", "vanished", "echoed", "clutched",
        ],
        &[
            "suddenly", "meanwhile", "moments later", "without warning", "eventually",
            "as soon as", "that night", "in the distance", "before long", "finally",
        ],
        &[
            ("said", &["whispered", "muttered", "exclaimed", "shouted", "murmured", "replied"]),
            ("went", &["wandered", "hurried", "trudged", "dashed", "strolled", "crept"]),
            ("walked", &["strolled", "trudged", "marched", "shuffled", "ambled", "paced"]),
            ("ran", &["sprinted", "dashed", "bolted", "raced", "scurried", "fled"]),
            ("looked", &["glanced", "peered", "stared", "gazed", "glared", "squinted"]),
            ("saw", &["spotted", "glimpsed", "noticed", "witnessed", "observed"]),
            ("got", &["grabbed", "seized", "received", "earned", "snatched"]),
            ("good", &["brilliant", "marvellous", "delightful", "splendid", "excellent"]),
            ("bad", &["dreadful", "wretched", "awful", "grim", "sinister"]),
            ("big", &["enormous", "towering", "massive", "colossal", "vast"]),
            ("small", &["tiny", "minute", "miniature", "slight", "petite"]),
            ("happy", &["overjoyed", "elated", "cheerful", "delighted", "jubilant"]),
            ("sad", &["heartbroken", "sorrowful", "gloomy", "downcast", "miserable"]),
            ("scared", &["terrified", "petrified", "trembling", "panic-stricken", "uneasy"]),
            ("angry", &["furious", "seething", "livid", "irate", "fuming"]),
            ("nice", &["kind", "pleasant", "gentle", "warm-hearted", "charming"]),
            ("very", &["incredibly", "remarkably", "exceptionally", "intensely"]),
            ("thing", &["object", "item", "artefact", "device", "relic"]),
        ],
        &[
            "As the sun sank below the horizon,",
            "Without a word,",
            "Heart pounding,",
            "For a moment,",
            "In the silence that followed,",
            "Somewhere in the distance,",
        ],
    )
});

static PERSUASIVE: LazyLock<VocabularySet> = LazyLock::new(|| {
    VocabularySet::new(
        &[
            "essential", "undeniable", "crucial", "compelling", "vital", "urgent",
            "significant", "unquestionably", "evidently", "imperative",
        ],
        &[
            "furthermore", "moreover", "in addition", "however", "consequently",
            "therefore", "on the other hand", "in conclusion", "for example", "above all",
        ],
        &[
            ("said", &["argued", "claimed", "stated", "asserted", "maintained"]),
            ("think", &["believe", "maintain", "contend", "am convinced", "argue"]),
            ("good", &["beneficial", "valuable", "advantageous", "worthwhile", "effective"]),
            ("bad", &["harmful", "damaging", "detrimental", "unacceptable", "destructive"]),
            ("important", &["crucial", "vital", "essential", "significant", "critical"]),
            ("big", &["substantial", "considerable", "major", "significant"]),
            ("very", &["extremely", "profoundly", "overwhelmingly", "exceptionally"]),
            ("show", &["demonstrate", "prove", "illustrate", "reveal"]),
            ("many", &["numerous", "countless", "a multitude of", "a great number of"]),
            ("thing", &["issue", "factor", "matter", "concern", "aspect"]),
            ("get", &["obtain", "gain", "achieve", "secure"]),
        ],
        &[
            "It is undeniable that",
            "Imagine a world where",
            "Consider the fact that",
            "Without question,",
            "Critics may argue that",
            "The evidence clearly shows that",
        ],
    )
});

static DESCRIPTIVE: LazyLock<VocabularySet> = LazyLock::new(|| {
    VocabularySet::new(
        &[
            "shimmering", "velvety", "jagged", "luminous", "fragrant", "crumbling",
            "misty", "golden", "sparkling", "weathered", "crisp", "towering",
        ],
        &[
            "above", "beneath", "beyond", "in the foreground", "in the distance",
            "to the left", "nearby", "surrounding", "across", "at the centre",
        ],
        &[
            ("said", &["whispered", "murmured", "sighed", "breathed"]),
            ("looked", &["appeared", "gleamed", "shone", "loomed", "glistened"]),
            ("good", &["exquisite", "magnificent", "splendid", "pristine"]),
            ("bad", &["decaying", "grimy", "foul", "ramshackle"]),
            ("big", &["immense", "sprawling", "looming", "gigantic", "vast"]),
            ("small", &["delicate", "dainty", "tiny", "minuscule"]),
            ("pretty", &["stunning", "elegant", "exquisite", "radiant"]),
            ("beautiful", &["breathtaking", "dazzling", "enchanting", "gorgeous"]),
            ("nice", &["inviting", "cosy", "serene", "tranquil"]),
            ("old", &["ancient", "weathered", "timeworn", "crumbling"]),
            ("cold", &["icy", "frosty", "bitter", "glacial"]),
            ("hot", &["scorching", "sweltering", "blistering", "sizzling"]),
            ("very", &["intensely", "strikingly", "remarkably"]),
        ],
        &[
            "Bathed in light,",
            "At the edge of",
            "Rising above",
            "Hidden among",
            "The air was thick with",
            "Stretching as far as the eye could see,",
        ],
    )
});

static EXPOSITORY: LazyLock<VocabularySet> = LazyLock::new(|| {
    VocabularySet::new(
        &[
            "significant", "essential", "fundamental", "distinct", "notable", "primary",
            "consequently", "specifically", "effectively", "accurately",
        ],
        &[
            "firstly", "secondly", "in addition", "for instance", "as a result",
            "similarly", "in contrast", "to illustrate", "in summary", "therefore",
        ],
        &[
            ("said", &["explained", "noted", "reported", "stated", "described"]),
            ("show", &["demonstrate", "illustrate", "indicate", "reveal"]),
            ("good", &["effective", "useful", "reliable", "valuable"]),
            ("bad", &["ineffective", "problematic", "harmful", "flawed"]),
            ("big", &["substantial", "considerable", "extensive", "large-scale"]),
            ("small", &["minor", "limited", "modest", "slight"]),
            ("thing", &["factor", "element", "feature", "component"]),
            ("get", &["obtain", "acquire", "receive", "gain"]),
            ("use", &["employ", "apply", "utilise", "adopt"]),
            ("very", &["highly", "particularly", "considerably"]),
            ("lots", &["numerous", "many", "a range of", "several"]),
        ],
        &[
            "One key reason is",
            "To begin with,",
            "It is important to note that",
            "Research suggests that",
            "Another factor is",
            "As a result of this,",
        ],
    )
});

static CREATIVE: LazyLock<VocabularySet> = LazyLock::new(|| {
    VocabularySet::new(
        &[
            "kaleidoscopic", "ethereal", "whimsical", "spellbound", "luminescent",
            "cascading", "fractured", "hushed", "restless", "incandescent",
        ],
        &[
            "then", "until", "as if", "just as", "somehow", "all at once",
            "and yet", "long after", "in that instant", "at last",
        ],
        &[
            ("said", &["whispered", "sang", "confessed", "breathed", "declared"]),
            ("went", &["drifted", "soared", "tumbled", "glided", "wandered"]),
            ("looked", &["gazed", "peered", "marvelled", "glimpsed"]),
            ("good", &["magical", "wondrous", "glorious", "radiant"]),
            ("bad", &["ominous", "wicked", "sinister", "cursed"]),
            ("big", &["boundless", "colossal", "titanic", "mountainous"]),
            ("small", &["fragile", "wisp-like", "tiny", "slender"]),
            ("happy", &["euphoric", "radiant", "blissful", "giddy"]),
            ("sad", &["forlorn", "wistful", "melancholy", "desolate"]),
            ("dark", &["shadowy", "inky", "murky", "pitch-black"]),
            ("very", &["impossibly", "wildly", "achingly"]),
        ],
        &[
            "Once, long ago,",
            "If you listen closely,",
            "Nobody believed",
            "In a world where",
            "Like a secret waiting to be told,",
            "The moment it began,",
        ],
    )
});

/// The vocabulary set for a text type.
pub fn vocabulary_for(text_type: TextType) -> &'static VocabularySet {
    match text_type {
        TextType::Narrative => &*NARRATIVE,
        TextType::Persuasive => &*PERSUASIVE,
        TextType::Descriptive => &*DESCRIPTIVE,
        TextType::Expository => &*EXPOSITORY,
        TextType::Creative => &*CREATIVE,
    }
}

/// Stronger alternatives for `word`, or an empty list when none are known.
pub fn get_replacement_suggestions(word: &str, text_type: TextType) -> Vec<&'static str> {
    vocabulary_for(text_type)
        .replacements
        .get(word.to_lowercase().as_str())
        .cloned()
        .unwrap_or_default()
}

/// Power words for a text type.
pub fn get_power_words(text_type: TextType) -> &'static [&'static str] {
    &vocabulary_for(text_type).power_words
}

/// Transition words for a text type.
pub fn get_transition_words(text_type: TextType) -> &'static [&'static str] {
    &vocabulary_for(text_type).transition_words
}

/// Sentence starters for a text type.
pub fn get_sentence_starters(text_type: TextType) -> &'static [&'static str] {
    &vocabulary_for(text_type).sentence_starters
}

/// A weak word found in the text, with alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordUpgrade {
    /// The weak word, lowercased.
    pub word: String,
    /// Occurrences in the text.
    pub count: usize,
    /// Stronger alternatives.
    pub suggestions: Vec<String>,
}

/// Upgrade suggestions for every weak word present in `words`.
///
/// Words are matched case-insensitively and reported in first-seen order.
#[tracing::instrument(skip_all, fields(words = words.len(), text_type = %text_type))]
pub fn suggest_upgrades(words: &[String], text_type: TextType) -> Vec<WordUpgrade> {
    let vocab = vocabulary_for(text_type);
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut seen: HashSet<String> = HashSet::new();

    for w in words {
        let lower = w.to_lowercase();
        if !vocab.replacements.contains_key(lower.as_str()) {
            continue;
        }
        *counts.entry(lower.clone()).or_insert(0) += 1;
        if seen.insert(lower.clone()) {
            order.push(lower);
        }
    }

    order
        .into_iter()
        .map(|word| {
            let suggestions = vocab.replacements[word.as_str()]
                .iter()
                .map(|s| (*s).to_string())
                .collect();
            WordUpgrade {
                count: counts[&word],
                word,
                suggestions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn said_suggests_whispered_for_narrative() {
        let suggestions = get_replacement_suggestions("said", TextType::Narrative);
        assert!(!suggestions.is_empty());
        assert!(suggestions.contains(&"whispered"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            get_replacement_suggestions("SAID", TextType::Narrative),
            get_replacement_suggestions("said", TextType::Narrative),
        );
    }

    #[test]
    fn unknown_word_has_no_suggestions() {
        assert!(get_replacement_suggestions("xyzzy", TextType::Narrative).is_empty());
    }

    #[test]
    fn unknown_label_behaves_like_narrative() {
        let unknown = TextType::resolve("unknown_type");
        assert_eq!(unknown, TextType::Narrative);
        for word in ["said", "went", "xyzzy", "good"] {
            assert_eq!(
                get_replacement_suggestions(word, unknown),
                get_replacement_suggestions(word, TextType::Narrative),
            );
        }
        assert_eq!(get_power_words(unknown), get_power_words(TextType::Narrative));
    }

    #[test]
    fn resolve_ignores_case_and_whitespace() {
        assert_eq!(TextType::resolve("  Persuasive "), TextType::Persuasive);
        assert_eq!(TextType::resolve("EXPOSITORY"), TextType::Expository);
        assert_eq!(TextType::from("creative"), TextType::Creative);
    }

    #[test]
    fn every_type_has_a_full_set() {
        for t in TextType::ALL {
            let v = vocabulary_for(t);
            assert!(!v.power_words.is_empty(), "{t} power words");
            assert!(!v.transition_words.is_empty(), "{t} transitions");
            assert!(!v.replacements.is_empty(), "{t} replacements");
            assert!(!v.sentence_starters.is_empty(), "{t} starters");
        }
    }

    #[test]
    fn genres_differ() {
        assert_ne!(
            get_replacement_suggestions("said", TextType::Persuasive),
            get_replacement_suggestions("said", TextType::Narrative),
        );
    }

    #[test]
    fn upgrades_in_first_seen_order_with_counts() {
        let upgrades = suggest_upgrades(
            &words(&["He", "said", "it", "was", "Good", "and", "said", "more"]),
            TextType::Narrative,
        );
        assert_eq!(upgrades.len(), 2);
        assert_eq!(upgrades[0].word, "said");
        assert_eq!(upgrades[0].count, 2);
        assert_eq!(upgrades[1].word, "good");
        assert!(upgrades[0].suggestions.iter().any(|s| s == "whispered"));
    }

    #[test]
    fn text_type_serializes_lowercase() {
        let json = serde_json::to_string(&TextType::Descriptive).unwrap();
        assert_eq!(json, "\"descriptive\"");
    }
}
