//! Timed-practice coaching.
//!
//! Turns a [`TextAnalysis`] plus the practice clock into canned
//! encouragement, tips, and next steps. Everything here is a pure function
//! of its inputs; there is no session state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::TextAnalysis;
use crate::vocabulary::TextType;

/// Default exam word target.
pub const DEFAULT_TARGET_WORDS: usize = 250;

/// Words per minute the time advice expects.
const EXPECTED_WORDS_PER_MINUTE: u64 = 10;

/// Below this word count the "getting started" script is used.
const STARTER_WORD_LIMIT: usize = 50;

/// How urgently the student should act on the coaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on this before writing more.
    High,
    /// Worth fixing this session.
    Medium,
    /// On track; polish when time allows.
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// Coaching for one point in a timed practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NswCoachingResponse {
    /// Main coaching message for this stage of the piece.
    pub message: String,
    /// Short positive note.
    pub encouragement: String,
    /// Advice drawn from the script and the analysis.
    pub tips: Vec<String>,
    /// What to write next.
    pub next_steps: Vec<String>,
    /// Pacing advice from elapsed time and word count.
    pub time_advice: String,
    /// Progress against the word target.
    pub word_count_feedback: String,
    /// How urgently to act on this coaching.
    pub priority: Priority,
}

struct Script {
    message: &'static str,
    tips: &'static [&'static str],
    next_steps: &'static [&'static str],
}

/// Canned script for a text type, split at [`STARTER_WORD_LIMIT`].
fn script(text_type: TextType, word_count: usize) -> Script {
    let starting = word_count < STARTER_WORD_LIMIT;
    match (text_type, starting) {
        (TextType::Narrative, true) => Script {
            message: "Great start! Hook your reader with an exciting opening.",
            tips: &[
                "Start with action, dialogue, or a question",
                "Introduce your main character quickly",
                "Set the scene with sensory details",
            ],
            next_steps: &[
                "Describe where your story takes place",
                "Introduce the problem your character faces",
            ],
        },
        (TextType::Narrative, false) => Script {
            message: "Your story is taking shape. Keep building the tension.",
            tips: &[
                "Show your character's feelings through actions",
                "Use dialogue to move the story forward",
                "Vary your sentence lengths to control pace",
            ],
            next_steps: &[
                "Build towards the climax",
                "Plan a satisfying resolution",
            ],
        },
        (TextType::Persuasive, true) => Script {
            message: "Good start! Make your position clear from the first paragraph.",
            tips: &[
                "State your opinion in the introduction",
                "Preview your main arguments",
                "Open with a rhetorical question or striking fact",
            ],
            next_steps: &[
                "Write your first argument with evidence",
                "Use a topic sentence for each paragraph",
            ],
        },
        (TextType::Persuasive, false) => Script {
            message: "Your argument is developing. Strengthen it with evidence.",
            tips: &[
                "Support each point with an example",
                "Address a counter-argument",
                "Use persuasive devices such as the rule of three",
            ],
            next_steps: &[
                "Add your strongest argument",
                "Write a conclusion that restates your position",
            ],
        },
        (TextType::Descriptive, true) => Script {
            message: "Nice beginning! Paint a picture your reader can see.",
            tips: &[
                "Choose one clear subject to describe",
                "Use all five senses",
                "Pick precise nouns and vivid verbs",
            ],
            next_steps: &[
                "Describe the sounds and smells",
                "Zoom in on one striking detail",
            ],
        },
        (TextType::Descriptive, false) => Script {
            message: "Your description is coming alive. Add depth and mood.",
            tips: &[
                "Use similes and metaphors sparingly",
                "Create a consistent mood",
                "Organise details spatially or by importance",
            ],
            next_steps: &[
                "Add figurative language",
                "End with a lasting image",
            ],
        },
        (TextType::Expository, true) => Script {
            message: "Good start! Introduce your topic clearly.",
            tips: &[
                "Define your topic in the first sentence",
                "Tell the reader what they will learn",
                "Keep your tone factual",
            ],
            next_steps: &[
                "Explain your first main point",
                "Add a fact or example",
            ],
        },
        (TextType::Expository, false) => Script {
            message: "Your explanation is well underway. Keep it organised.",
            tips: &[
                "Use one paragraph per main idea",
                "Link ideas with transition words",
                "Support points with facts and examples",
            ],
            next_steps: &[
                "Cover any remaining main points",
                "Summarise the key ideas in a conclusion",
            ],
        },
        (TextType::Creative, true) => Script {
            message: "Great start! Let your imagination lead.",
            tips: &[
                "Try an unexpected opening",
                "Experiment with point of view",
                "Play with language and imagery",
            ],
            next_steps: &[
                "Develop your central idea",
                "Surprise your reader",
            ],
        },
        (TextType::Creative, false) => Script {
            message: "Your piece is full of ideas. Shape them into a whole.",
            tips: &[
                "Make sure every section serves your idea",
                "Use literary devices with purpose",
                "Read a sentence aloud to hear its rhythm",
            ],
            next_steps: &[
                "Strengthen your most original moment",
                "Craft a memorable ending",
            ],
        },
    }
}

/// Compose coaching against the default exam target.
pub fn compose_coaching_response(
    text_type: TextType,
    analysis: &TextAnalysis,
    word_count: usize,
    elapsed_secs: u64,
) -> NswCoachingResponse {
    compose_coaching_response_with_target(
        text_type,
        analysis,
        word_count,
        elapsed_secs,
        DEFAULT_TARGET_WORDS,
    )
}

/// Compose coaching against an explicit word target.
#[tracing::instrument(skip(analysis), fields(text_type = %text_type))]
pub fn compose_coaching_response_with_target(
    text_type: TextType,
    analysis: &TextAnalysis,
    word_count: usize,
    elapsed_secs: u64,
    target_words: usize,
) -> NswCoachingResponse {
    let script = script(text_type, word_count);
    let minutes = elapsed_secs / 60;

    let mut tips: Vec<String> = script.tips.iter().map(|t| (*t).to_string()).collect();
    tips.extend(analysis_tips(analysis));

    let response = NswCoachingResponse {
        message: script.message.to_string(),
        encouragement: encouragement(word_count).to_string(),
        tips,
        next_steps: script.next_steps.iter().map(|s| (*s).to_string()).collect(),
        time_advice: time_advice(word_count, minutes),
        word_count_feedback: word_count_feedback(word_count, target_words),
        priority: priority(minutes, word_count),
    };
    tracing::debug!(priority = %response.priority, minutes, "coaching composed");
    response
}

/// First true branch wins.
pub fn priority(minutes: u64, word_count: usize) -> Priority {
    if minutes > 30 && word_count < 200 {
        Priority::High
    } else if minutes > 20 || word_count > 100 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Compare progress against [`EXPECTED_WORDS_PER_MINUTE`].
pub fn time_advice(word_count: usize, minutes: u64) -> String {
    let expected = minutes * EXPECTED_WORDS_PER_MINUTE;
    if expected == 0 {
        return "You've just started. Take a minute to plan, then begin writing.".to_string();
    }

    let ratio = word_count as f64 / expected as f64;
    if ratio > 1.2 {
        format!(
            "You're ahead of pace ({word_count} words in {minutes} min). \
             Slow down and make every sentence count."
        )
    } else if ratio < 0.8 {
        format!(
            "You're behind pace (about {expected} words expected by now). \
             Focus on getting your ideas down."
        )
    } else {
        format!("You're on pace ({word_count} words in {minutes} min). Keep going.")
    }
}

/// Feedback bands relative to the word target.
pub fn word_count_feedback(word_count: usize, target_words: usize) -> String {
    if word_count < 50 {
        format!("{word_count} words so far. Get your opening down.")
    } else if word_count < 150 {
        format!("{word_count} words. Keep developing your ideas.")
    } else if word_count < target_words {
        format!(
            "{word_count} words. About {} more to reach {target_words}.",
            target_words - word_count
        )
    } else {
        format!(
            "{word_count} words. You've reached the {target_words}-word target; \
             focus on quality."
        )
    }
}

fn encouragement(word_count: usize) -> &'static str {
    if word_count < STARTER_WORD_LIMIT {
        "Every great piece starts with a single sentence. You've got this!"
    } else if word_count < 150 {
        "You're making real progress. Keep the ideas flowing!"
    } else {
        "Excellent work! Your writing is really developing."
    }
}

fn analysis_tips(analysis: &TextAnalysis) -> Vec<String> {
    let mut tips = Vec::new();
    if analysis.word_count > 0 && analysis.show_dont_tell_score < 0.7 {
        tips.push("Show, don't tell: replace feeling words with actions and details".to_string());
    }
    if analysis.average_sentence_length > 25.0 {
        tips.push("Some sentences are very long; try splitting one or two".to_string());
    }
    if analysis.word_count >= 20 && analysis.vocabulary_diversity < 0.5 {
        tips.push("You repeat words often; try some more varied vocabulary".to_string());
    }
    if !analysis.spelling_errors.is_empty() {
        tips.push(format!(
            "Check your spelling: {}",
            analysis.spelling_errors.join(", ")
        ));
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_text;

    fn blank() -> TextAnalysis {
        analyze_text("")
    }

    #[test]
    fn priority_cascade() {
        assert_eq!(priority(35, 150), Priority::High);
        assert_eq!(priority(25, 50), Priority::Medium);
        assert_eq!(priority(5, 10), Priority::Low);
        assert_eq!(priority(5, 120), Priority::Medium);
        assert_eq!(priority(35, 250), Priority::Medium);
    }

    #[test]
    fn priority_uses_whole_minutes() {
        let r = compose_coaching_response(TextType::Narrative, &blank(), 150, 35 * 60);
        assert_eq!(r.priority, Priority::High);
        // 30 min 59 s is still 30 whole minutes.
        let r = compose_coaching_response(TextType::Narrative, &blank(), 150, 30 * 60 + 59);
        assert_eq!(r.priority, Priority::Medium);
    }

    #[test]
    fn script_switches_at_fifty_words() {
        let early = compose_coaching_response(TextType::Persuasive, &blank(), 49, 300);
        let later = compose_coaching_response(TextType::Persuasive, &blank(), 50, 300);
        assert_ne!(early.message, later.message);
        assert!(early.message.contains("position"));
    }

    #[test]
    fn each_type_has_its_own_script() {
        let messages: std::collections::HashSet<String> = TextType::ALL
            .iter()
            .map(|t| compose_coaching_response(*t, &blank(), 10, 60).message)
            .collect();
        assert_eq!(messages.len(), TextType::ALL.len());
    }

    #[test]
    fn time_advice_bands() {
        assert!(time_advice(10, 0).contains("just started"));
        assert!(time_advice(130, 10).contains("ahead"));
        assert!(time_advice(70, 10).contains("behind"));
        assert!(time_advice(100, 10).contains("on pace"));
        assert!(time_advice(120, 10).contains("on pace"));
    }

    #[test]
    fn word_count_bands() {
        assert!(word_count_feedback(10, 250).contains("opening"));
        assert!(word_count_feedback(100, 250).contains("developing"));
        assert!(word_count_feedback(200, 250).contains("50 more"));
        assert!(word_count_feedback(260, 250).contains("reached"));
        assert!(word_count_feedback(160, 150).contains("reached the 150-word"));
    }

    #[test]
    fn analysis_adds_tips() {
        let analysis = analyze_text("I was sad. I felt angry. I recieve nothing.");
        let r = compose_coaching_response(TextType::Narrative, &analysis, 9, 60);
        assert!(r.tips.iter().any(|t| t.starts_with("Show, don't tell")));
        assert!(r.tips.iter().any(|t| t.contains("recieve")));
    }

    #[test]
    fn clean_analysis_adds_no_tips() {
        let r = compose_coaching_response(TextType::Creative, &blank(), 0, 0);
        assert_eq!(r.tips.len(), 3);
    }

    #[test]
    fn serializes_lowercase_priority() {
        let r = compose_coaching_response(TextType::Narrative, &blank(), 10, 300);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["priority"], "low");
        assert!(json["next_steps"].is_array());
    }
}
