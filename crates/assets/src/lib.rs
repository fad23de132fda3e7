//! Static templates for the rampdev generators
//!
//! This crate provides a centralized location for the source snippets and
//! prompt texts the `gen` subcommand writes into the ramp server tree. The
//! content is pure data; nothing here is parsed or validated as code.

/// Prompt text for the expense extraction task
pub const EXTRACTION_PROMPT: &str = include_str!("../templates/extraction_prompt.txt");

/// Prompt text for the anomaly detection task
pub const ANOMALY_PROMPT: &str = include_str!("../templates/anomaly_prompt.txt");

/// Prompt text for the policy compliance task
pub const POLICY_PROMPT: &str = include_str!("../templates/policy_prompt.txt");

/// Scaffold for the Anthropic provider module
pub const PROVIDER_SCAFFOLD: &str = include_str!("../templates/anthropic.ts.tmpl");

/// Get the extraction prompt text
pub fn get_extraction_prompt() -> &'static str {
    EXTRACTION_PROMPT
}

/// Get the anomaly prompt text
pub fn get_anomaly_prompt() -> &'static str {
    ANOMALY_PROMPT
}

/// Get the policy prompt text
pub fn get_policy_prompt() -> &'static str {
    POLICY_PROMPT
}

/// Get the Anthropic provider scaffold
pub fn get_provider_scaffold() -> &'static str {
    PROVIDER_SCAFFOLD
}
