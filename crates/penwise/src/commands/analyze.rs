//! Analyze command: full writing analysis.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use penwise_core::TextType;
use penwise_core::analysis::{
    self, ALL_CHECKS, LiteraryDevice, OverusedWordsReport, SentenceVarietyAnalysis,
    ShowTellReport, TextAnalysis,
};
use penwise_core::vocabulary::WordUpgrade;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Text type (narrative, persuasive, descriptive, expository, creative).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub text_type: Option<String>,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude")]
    pub checks: Option<Vec<String>>,

    /// Checks to skip (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// File holding the writing prompt; removed from the start of the text.
    #[arg(long, value_name = "FILE")]
    pub prompt: Option<Utf8PathBuf>,
}

/// Resolve `--checks` / `--exclude` into the list to run, or `None` for all.
fn selected_checks(args: &AnalyzeArgs) -> anyhow::Result<Option<Vec<String>>> {
    match (&args.checks, &args.exclude) {
        (Some(checks), _) => Ok(Some(checks.clone())),
        (None, Some(exclude)) => {
            analysis::validate_checks(exclude)?;
            Ok(Some(
                ALL_CHECKS
                    .iter()
                    .filter(|name| !exclude.iter().any(|e| e == *name))
                    .map(|name| (*name).to_string())
                    .collect(),
            ))
        }
        (None, None) => Ok(None),
    }
}

/// Run full writing analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    default_type: TextType,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, exclude = ?args.exclude, "executing analyze command");

    let content = super::read_writing(&args.file, args.prompt.as_deref(), max_input_bytes)?;
    let text_type = super::resolve_text_type(args.text_type.as_deref(), default_type);
    let checks = selected_checks(&args)?;

    let report = analysis::run_full_analysis(&content, text_type, checks.as_deref())
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output, section by section
    println!("{} ({})", args.file.bold(), report.text_type);

    if let Some(ref m) = report.metrics {
        print_metrics(m);
    }
    if let Some(ref d) = report.literary_devices {
        print_devices(d);
    }
    if let Some(ref o) = report.overused_words {
        print_overused(o);
    }
    if let Some(ref s) = report.show_tell {
        print_show_tell(s);
    }
    if let Some(ref v) = report.sentence_variety {
        print_variety(v);
    }
    if let Some(ref u) = report.vocabulary {
        print_upgrades(u);
    }
    if let Some(ref g) = report.grammar {
        print_findings("Grammar:", g);
    }
    if let Some(ref s) = report.spelling {
        print_findings("Spelling:", s);
    }

    Ok(())
}

pub(crate) fn print_metrics(m: &TextAnalysis) {
    println!(
        "\n  {} {} words, {} sentences, avg {:.1} words/sentence, diversity {:.0}%",
        "Metrics:".cyan(),
        m.word_count,
        m.sentence_count,
        m.average_sentence_length,
        m.vocabulary_diversity * 100.0,
    );
}

pub(crate) fn print_devices(devices: &[LiteraryDevice]) {
    if devices.is_empty() {
        println!("\n  {} none found", "Devices:".cyan());
        return;
    }
    println!("\n  {} {} found", "Devices:".cyan(), devices.len());
    for d in devices {
        println!("    {} \"{}\"", format!("{}:", d.kind).green(), d.example);
        println!("      {}", d.explanation.dimmed());
    }
}

fn print_overused(o: &OverusedWordsReport) {
    if o.overused_words.is_empty() {
        return;
    }
    let words: Vec<_> = o
        .overused_words
        .iter()
        .map(|w| format!("\"{}\" ({}x)", w.word, w.count))
        .collect();
    println!("\n  {} {}", "Overused:".yellow(), words.join(", "));
}

pub(crate) fn print_show_tell(s: &ShowTellReport) {
    let score = format!("{:.0}%", s.score * 100.0);
    let score = if s.score >= 0.8 {
        score.green().to_string()
    } else if s.score >= 0.6 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    println!(
        "\n  {} score {}, {} telling words in {} words",
        "Show, don't tell:".cyan(),
        score,
        s.telling_word_count,
        s.total_words,
    );
    for sentence in &s.telling_sentences {
        println!("    - {sentence}");
    }
}

pub(crate) fn print_variety(v: &SentenceVarietyAnalysis) {
    let len = &v.sentence_length_distribution;
    let kinds = &v.sentence_type_distribution;
    println!(
        "\n  {} {} sentences, avg {:.1} words",
        "Variety:".cyan(),
        v.total_sentences,
        v.average_sentence_length,
    );
    println!(
        "    length: {} short / {} medium / {} long",
        len.short, len.medium, len.long
    );
    println!(
        "    type:   {} simple / {} compound / {} complex / {} compound-complex",
        kinds.simple, kinds.compound, kinds.complex, kinds.compound_complex
    );
}

fn print_upgrades(upgrades: &[WordUpgrade]) {
    if upgrades.is_empty() {
        return;
    }
    println!("\n  {}", "Word upgrades:".cyan());
    for u in upgrades {
        println!("    {} ({}x) -> {}", u.word.yellow(), u.count, u.suggestions.join(", "));
    }
}

fn print_findings(label: &str, findings: &[String]) {
    if findings.is_empty() {
        println!("\n  {} {}", label.cyan(), "no issues".green());
        return;
    }
    println!("\n  {} {} issues", label.yellow(), findings.len());
    for f in findings {
        println!("    - {f}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn args(checks: Option<&[&str]>, exclude: Option<&[&str]>) -> AnalyzeArgs {
        AnalyzeArgs {
            file: Utf8PathBuf::from("essay.txt"),
            text_type: None,
            checks: checks.map(owned),
            exclude: exclude.map(owned),
            prompt: None,
        }
    }

    #[test]
    fn no_selection_runs_everything() {
        assert_eq!(selected_checks(&args(None, None)).unwrap(), None);
    }

    #[test]
    fn exclude_removes_named_checks() {
        let selected = selected_checks(&args(None, Some(&["grammar", "spelling"])))
            .unwrap()
            .unwrap();
        assert_eq!(selected.len(), ALL_CHECKS.len() - 2);
        assert!(!selected.iter().any(|c| c == "grammar"));
    }

    #[test]
    fn unknown_exclude_is_an_error() {
        assert!(selected_checks(&args(None, Some(&["pacing"]))).is_err());
    }
}
