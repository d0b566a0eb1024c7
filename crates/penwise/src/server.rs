//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the writing analyzers over MCP on stdio so assistants and editors
//! can call them directly.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. Each `#[tool]` method delegates to
//! `penwise-core` and serializes the result as JSON text content.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use penwise_core::analysis::{self, devices};
use penwise_core::feedback::{FeedbackRequest, feedback_or_fallback};
use penwise_core::similarity;
use penwise_core::{TextType, vocabulary};

/// Defaults the server applies when a tool call leaves them out.
#[derive(Debug, Clone, Copy)]
pub struct ServerSettings {
    /// Used when a call has no `text_type`.
    pub text_type: TextType,
    /// Used when a call has no `target_words`.
    pub target_words: usize,
    /// Reject text larger than this many bytes. `None` disables the check.
    pub max_input_bytes: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            text_type: TextType::default(),
            target_words: penwise_core::coaching::DEFAULT_TARGET_WORDS,
            max_input_bytes: Some(penwise_core::DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_writing` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeWritingParams {
    /// The student's writing.
    pub text: String,
    /// Text type: narrative, persuasive, descriptive, expository, or creative.
    pub text_type: Option<String>,
    /// Checks to run. Omit for all checks.
    pub checks: Option<Vec<String>>,
    /// Writing prompt to strip from the start of the text.
    pub prompt: Option<String>,
}

/// Parameters for the `detect_devices` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectDevicesParams {
    /// The text to scan.
    pub text: String,
}

/// Parameters for the `suggest_vocabulary` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestVocabularyParams {
    /// Word to replace. Omit to get the full word bank.
    pub word: Option<String>,
    /// Text type: narrative, persuasive, descriptive, expository, or creative.
    pub text_type: Option<String>,
}

/// Parameters for the `coach_writing` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CoachWritingParams {
    /// The writing so far.
    pub text: String,
    /// Seconds since the practice session started.
    pub elapsed_secs: u64,
    /// Text type: narrative, persuasive, descriptive, expository, or creative.
    pub text_type: Option<String>,
    /// Exam word target.
    pub target_words: Option<usize>,
    /// Writing prompt to strip from the start of the text.
    pub prompt: Option<String>,
}

#[derive(Serialize)]
struct WordBank {
    text_type: TextType,
    power_words: &'static [&'static str],
    transition_words: &'static [&'static str],
    sentence_starters: &'static [&'static str],
}

#[derive(Serialize)]
struct Replacements<'a> {
    text_type: TextType,
    word: &'a str,
    suggestions: Vec<&'static str>,
}

/// MCP server exposing penwise analyzers.
#[derive(Clone)]
pub struct PenwiseServer {
    settings: ServerSettings,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for PenwiseServer {
    fn default() -> Self {
        Self::new(ServerSettings::default())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl PenwiseServer {
    /// Create a new MCP server instance.
    pub fn new(settings: ServerSettings) -> Self {
        Self {
            settings,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.settings.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn text_type(&self, label: Option<&str>) -> TextType {
        label.map_or(self.settings.text_type, TextType::resolve)
    }

    fn writing(text: String, prompt: Option<&str>) -> String {
        match prompt {
            Some(prompt) => similarity::remove_prompt_from_content(&text, prompt),
            None => text,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "text_types": TextType::ALL.iter().map(TextType::as_str).collect::<Vec<_>>(),
            "checks": analysis::ALL_CHECKS,
        });

        if params.format == "json" {
            return to_json(&info);
        }

        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run full writing analysis.
    #[tool(
        description = "Analyze student writing: metrics, literary devices, overused words, show-don't-tell, sentence variety, vocabulary upgrades, grammar, and spelling."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_writing(
        &self,
        Parameters(params): Parameters<AnalyzeWritingParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let text_type = self.text_type(params.text_type.as_deref());
        tracing::debug!(tool = "analyze_writing", %text_type, "executing MCP tool");

        let text = Self::writing(params.text, params.prompt.as_deref());
        let report = analysis::run_full_analysis(&text, text_type, params.checks.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(tool = "analyze_writing", "MCP tool completed");
        to_json(&report)
    }

    /// Detect literary devices.
    #[tool(
        description = "Find alliteration, metaphors, similes, personification, and hyperbole, in reading order."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_devices(
        &self,
        Parameters(params): Parameters<DetectDevicesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let found = devices::detect_literary_devices(&params.text);
        tracing::info!(tool = "detect_devices", count = found.len(), "MCP tool completed");
        to_json(&found)
    }

    /// Vocabulary suggestions.
    #[tool(
        description = "Suggest stronger replacements for a word, or return the power words, transitions, and sentence starters for a text type."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn suggest_vocabulary(
        &self,
        Parameters(params): Parameters<SuggestVocabularyParams>,
    ) -> Result<CallToolResult, McpError> {
        let text_type = self.text_type(params.text_type.as_deref());
        tracing::debug!(tool = "suggest_vocabulary", %text_type, "executing MCP tool");

        match params.word.as_deref() {
            Some(word) => to_json(&Replacements {
                text_type,
                word,
                suggestions: vocabulary::get_replacement_suggestions(word, text_type),
            }),
            None => to_json(&WordBank {
                text_type,
                power_words: vocabulary::get_power_words(text_type),
                transition_words: vocabulary::get_transition_words(text_type),
                sentence_starters: vocabulary::get_sentence_starters(text_type),
            }),
        }
    }

    /// Timed-practice coaching.
    #[tool(
        description = "Coach a timed writing session: encouragement, tips, next steps, pacing advice, word-count feedback, and priority."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", elapsed = params.elapsed_secs))]
    fn coach_writing(
        &self,
        Parameters(params): Parameters<CoachWritingParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let text_type = self.text_type(params.text_type.as_deref());

        let request = FeedbackRequest {
            target_words: params.target_words.unwrap_or(self.settings.target_words),
            ..FeedbackRequest::new(
                Self::writing(params.text, params.prompt.as_deref()),
                text_type,
                params.elapsed_secs,
            )
        };
        let feedback = feedback_or_fallback(None, &request);

        tracing::info!(tool = "coach_writing", "MCP tool completed");
        to_json(&feedback)
    }
}

#[tool_handler]
impl ServerHandler for PenwiseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to analyze and coach student writing.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const STORY: &str = "The storm was a monster. Thunder roared like a lion. I was very scared.";

    fn server() -> PenwiseServer {
        PenwiseServer::default()
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["text_types"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn analyze_writing_tool_works() {
        let params = Parameters(AnalyzeWritingParams {
            text: STORY.to_string(),
            text_type: Some("narrative".to_string()),
            checks: None,
            prompt: None,
        });
        let result = server()
            .analyze_writing(params)
            .expect("analyze_writing should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert_eq!(json["metrics"]["sentence_count"], 3);
        assert!(json["literary_devices"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn analyze_writing_rejects_unknown_check() {
        let params = Parameters(AnalyzeWritingParams {
            text: STORY.to_string(),
            text_type: None,
            checks: Some(vec!["pacing".to_string()]),
            prompt: None,
        });
        assert!(server().analyze_writing(params).is_err());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let small = PenwiseServer::new(ServerSettings {
            max_input_bytes: Some(10),
            ..ServerSettings::default()
        });
        let params = Parameters(DetectDevicesParams {
            text: STORY.to_string(),
        });
        assert!(small.detect_devices(params).is_err());
    }

    #[test]
    fn detect_devices_tool_lists_in_order() {
        let params = Parameters(DetectDevicesParams {
            text: STORY.to_string(),
        });
        let json = json_of(&server().detect_devices(params).unwrap());
        let kinds: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["type"].as_str().unwrap())
            .collect();
        assert!(kinds.contains(&"metaphor"));
        assert!(kinds.contains(&"simile"));
    }

    #[test]
    fn suggest_vocabulary_for_word() {
        let params = Parameters(SuggestVocabularyParams {
            word: Some("said".to_string()),
            text_type: None,
        });
        let json = json_of(&server().suggest_vocabulary(params).unwrap());
        let suggestions = json["suggestions"].as_array().unwrap();
        assert!(suggestions.iter().any(|s| s == "whispered"));
    }

    #[test]
    fn suggest_vocabulary_word_bank() {
        let params = Parameters(SuggestVocabularyParams {
            word: None,
            text_type: Some("persuasive".to_string()),
        });
        let json = json_of(&server().suggest_vocabulary(params).unwrap());
        assert_eq!(json["text_type"], "persuasive");
        assert!(!json["power_words"].as_array().unwrap().is_empty());
    }

    #[test]
    fn coach_writing_uses_local_coaching() {
        let params = Parameters(CoachWritingParams {
            text: STORY.to_string(),
            elapsed_secs: 35 * 60,
            text_type: None,
            target_words: None,
            prompt: None,
        });
        let json = json_of(&server().coach_writing(params).unwrap());
        assert_eq!(json["source"], "heuristic");
        assert_eq!(json["feedback"]["priority"], "high");
    }
}
