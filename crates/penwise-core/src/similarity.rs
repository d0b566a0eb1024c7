//! Prompt similarity.
//!
//! Students often paste the writing prompt above their answer. These helpers
//! measure word overlap and strip the prompt back out before analysis.

use std::collections::HashSet;

use crate::text;

/// Leading paragraphs at or above this similarity to the prompt are dropped.
pub const PROMPT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Word-set Jaccard similarity over lowercased words. No stemming.
///
/// Two texts without words score 0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<String> = text::extract_words_lower(a).into_iter().collect();
    let right: HashSet<String> = text::extract_words_lower(b).into_iter().collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}

/// Remove a pasted prompt from the start of `content`.
///
/// A verbatim prefix (ignoring case and whitespace differences) is cut
/// first. Failing that, leading paragraphs that are near-copies of the
/// prompt are dropped. Content that never repeats the prompt is returned
/// trimmed but otherwise unchanged.
#[tracing::instrument(skip_all, fields(content_len = content.len(), prompt_len = prompt.len()))]
pub fn remove_prompt_from_content(content: &str, prompt: &str) -> String {
    if text::extract_words(prompt).is_empty() {
        return content.trim().to_string();
    }

    if let Some(rest) = strip_normalized_prefix(content, prompt) {
        tracing::debug!("prompt removed as verbatim prefix");
        return rest.trim().to_string();
    }

    let paragraphs = text::split_paragraphs(content);
    let kept: Vec<&str> = paragraphs
        .iter()
        .map(String::as_str)
        .skip_while(|p| jaccard_similarity(p, prompt) >= PROMPT_SIMILARITY_THRESHOLD)
        .collect();

    if kept.len() < paragraphs.len() {
        tracing::debug!(dropped = paragraphs.len() - kept.len(), "prompt paragraphs removed");
    }
    kept.join("\n\n")
}

/// Match `prefix` against the start of `content`, folding case and
/// collapsing whitespace runs. Returns the remainder of `content`.
///
/// Wherever the prefix has whitespace the content must too, and the match
/// must end on a word boundary.
fn strip_normalized_prefix<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = content.char_indices().peekable();
    let mut last = None;

    for (i, token) in prefix.split_whitespace().enumerate() {
        let mut gap = false;
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {
            gap = true;
        }
        if i > 0 && !gap {
            return None;
        }
        for expected in token.chars() {
            let (_, actual) = chars.next()?;
            if !actual.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
            last = Some(actual);
        }
    }

    let rest = chars.peek().map_or("", |&(idx, _)| &content[idx..]);
    let splits_word =
        last.is_some_and(is_word_char) && rest.chars().next().is_some_and(is_word_char);
    (!splits_word).then_some(rest)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "Write a story about a day at the beach.";

    #[test]
    fn jaccard_basics() {
        assert_eq!(jaccard_similarity("", ""), 0.0);
        assert_eq!(jaccard_similarity("a b", "A B"), 1.0);
        assert_eq!(jaccard_similarity("a b", "c d"), 0.0);
        assert!((jaccard_similarity("a b c", "b c d") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn jaccard_has_no_stemming() {
        assert_eq!(jaccard_similarity("run", "running"), 0.0);
    }

    #[test]
    fn strips_verbatim_prefix() {
        let content = format!("{PROMPT}\nThe sand was hot under my feet.");
        assert_eq!(
            remove_prompt_from_content(&content, PROMPT),
            "The sand was hot under my feet."
        );
    }

    #[test]
    fn prefix_stops_at_word_boundary() {
        let content = "Describe a caterpillar crawling.";
        assert_eq!(remove_prompt_from_content(content, "Describe a cat"), content);
    }

    #[test]
    fn prefix_requires_spaces_between_words() {
        let content = "Writeastory about rain.";
        assert_eq!(remove_prompt_from_content(content, "Write a story"), content);
    }

    #[test]
    fn prefix_ending_in_punctuation_may_touch_next_word() {
        let content = "Describe a cat.It purred.";
        assert_eq!(remove_prompt_from_content(content, "Describe a cat."), "It purred.");
    }

    #[test]
    fn prefix_match_ignores_case_and_spacing() {
        let content = "WRITE a story   about a day\nat the beach. Waves crashed.";
        assert_eq!(remove_prompt_from_content(content, PROMPT), "Waves crashed.");
    }

    #[test]
    fn drops_near_copy_paragraph() {
        let content = "Write one story about a day at the beach\n\nWaves crashed all day.";
        assert!(jaccard_similarity("Write one story about a day at the beach", PROMPT) >= 0.8);
        assert_eq!(remove_prompt_from_content(content, PROMPT), "Waves crashed all day.");
    }

    #[test]
    fn unrelated_content_is_kept() {
        let content = "My dog is brave.\n\nHe barks at the postman.";
        assert_eq!(remove_prompt_from_content(content, PROMPT), content);
    }

    #[test]
    fn empty_prompt_changes_nothing() {
        assert_eq!(remove_prompt_from_content("  Hello.  ", ""), "Hello.");
    }
}
