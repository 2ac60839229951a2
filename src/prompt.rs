//! Dotprompt document model.
//!
//! A Dotprompt file is YAML front-matter between `---` fences followed by
//! the prompt body. The front-matter pins the model to run and declares the
//! input schema: one string field per distinct variable referenced by the
//! body, or a single optional `text` field when the body references none.

use crate::error::{GraftError, Result};
use regex::Regex;
use serde::Serialize;
use serde_yaml::Mapping;
use std::sync::LazyLock;

/// Model identifier written to every generated file.
pub const MODEL: &str = "googleai/gemini-1.5-pro";

/// Matches a `{{identifier}}` reference made of word characters only.
static VARIABLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid variable token regex"));

/// Front-matter for a generated Dotprompt file.
#[derive(Debug, Clone, Serialize)]
pub struct PromptFrontmatter {
    pub model: String,
    pub input: InputSpec,
    pub output: OutputSpec,
}

/// Input schema block: variable name to type, in first-appearance order.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub schema: Mapping,
}

/// Output format block.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpec {
    pub format: String,
}

impl PromptFrontmatter {
    /// Build the front-matter for a rewritten prompt body.
    ///
    /// Every distinct `{{variable}}` of the body becomes a required string
    /// input; a body without variables gets the optional `text?` field so
    /// the schema block is never empty.
    pub fn for_body(body: &str) -> Self {
        let mut schema = Mapping::new();
        for var in extract_variables(body) {
            schema.insert(var.into(), "string".into());
        }
        if schema.is_empty() {
            schema.insert("text?".into(), "string".into());
        }

        PromptFrontmatter {
            model: MODEL.to_string(),
            input: InputSpec { schema },
            output: OutputSpec {
                format: "text".to_string(),
            },
        }
    }
}

/// Distinct `{{identifier}}` tokens of the body, in first-appearance order.
pub fn extract_variables(body: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for caps in VARIABLE_TOKEN.captures_iter(body) {
        let var = &caps[1];
        if !vars.iter().any(|v| v == var) {
            vars.push(var.to_string());
        }
    }
    vars
}

/// Render a complete document: fenced front-matter, then the body as-is.
pub fn render_document(body: &str) -> Result<String> {
    let frontmatter = PromptFrontmatter::for_body(body);
    let yaml = serde_yaml::to_string(&frontmatter)
        .map_err(|e| GraftError::UserError(format!("failed to serialize front-matter: {}", e)))?;

    let mut document = String::new();
    document.push_str("---\n");
    document.push_str(&yaml);
    document.push_str("---\n");
    document.push_str(body);
    Ok(document)
}
