//! Coach command: timed-practice coaching.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use penwise_core::TextType;
use penwise_core::coaching::{NswCoachingResponse, Priority};
use penwise_core::feedback::{Feedback, FeedbackRequest, feedback_or_fallback};

/// Arguments for the `coach` subcommand.
#[derive(Args, Debug)]
pub struct CoachArgs {
    /// File holding the writing so far.
    pub file: Utf8PathBuf,

    /// Seconds since the practice session started.
    #[arg(long, value_name = "SECS")]
    pub elapsed: u64,

    /// Text type (narrative, persuasive, descriptive, expository, creative).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub text_type: Option<String>,

    /// Exam word target (overrides config).
    #[arg(long, value_name = "N")]
    pub target: Option<usize>,

    /// File holding the writing prompt; removed from the start of the text.
    #[arg(long, value_name = "FILE")]
    pub prompt: Option<Utf8PathBuf>,
}

#[instrument(name = "cmd_coach", skip_all, fields(file = %args.file, elapsed = args.elapsed))]
pub fn cmd_coach(
    args: CoachArgs,
    global_json: bool,
    default_type: TextType,
    default_target: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_writing(&args.file, args.prompt.as_deref(), max_input_bytes)?;
    let text_type = super::resolve_text_type(args.text_type.as_deref(), default_type);

    let request = FeedbackRequest {
        target_words: args.target.unwrap_or(default_target),
        ..FeedbackRequest::new(content, text_type, args.elapsed)
    };
    debug!(%text_type, target = request.target_words, "executing coach command");

    // No external provider is wired into the CLI; this always coaches locally.
    let feedback = feedback_or_fallback(None, &request);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
        return Ok(());
    }

    match feedback {
        Feedback::Model(text) => println!("{text}"),
        Feedback::Heuristic(response) => print_coaching(&response),
    }
    Ok(())
}

fn print_coaching(r: &NswCoachingResponse) {
    let priority = match r.priority {
        Priority::High => "high".red().bold().to_string(),
        Priority::Medium => "medium".yellow().to_string(),
        Priority::Low => "low".green().to_string(),
    };
    println!("{} [{}]", r.message.bold(), priority);
    println!("{}", r.encouragement);

    println!("\n  {} {}", "Time:".cyan(), r.time_advice);
    println!("  {} {}", "Words:".cyan(), r.word_count_feedback);

    println!("\n  {}", "Tips:".cyan());
    for tip in &r.tips {
        println!("    - {tip}");
    }
    println!("\n  {}", "Next steps:".cyan());
    for step in &r.next_steps {
        println!("    - {step}");
    }
}
