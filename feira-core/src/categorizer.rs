//! Grocery item categorization via the Generative Language API
//!
//! The adapter is deliberately best-effort: it backs a fast-entry list UI,
//! so every failure class collapses to an empty mapping instead of an error
//! crossing the boundary. [`Categorizer::try_categorize`] keeps the fallible
//! contract visible for callers that want it.

use crate::config::Config;
use crate::gemini::{self, Content};
use crate::http::strip_markdown_json;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{error, info, warn};

/// Categories suggested to the model. The set is open: the model may answer
/// with any category string, and the UI renders whatever comes back.
const STANDARD_CATEGORIES: &str =
    "Hortifruti, Laticínios, Carnes, Limpeza, Padaria, Bebidas, Mercearia, Higiene, Outros";

/// Parsed body of the model's JSON answer
#[derive(Debug, Deserialize)]
struct CategorizedList {
    #[serde(default)]
    items: Vec<CategorizedItem>,
}

#[derive(Debug, Deserialize)]
struct CategorizedItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Stateless adapter: holds only its configuration, caches nothing across
/// calls. Concurrent invocations are independent.
pub struct Categorizer {
    config: Config,
}

impl Categorizer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Categorize grocery items, absorbing all failures.
    ///
    /// Always returns a mapping from item name to category. Items the
    /// service could not categorize are simply absent. Failures are logged
    /// and produce an empty mapping; nothing propagates to the caller.
    pub async fn categorize(&self, item_names: &[String]) -> HashMap<String, String> {
        match self.try_categorize(item_names).await {
            Ok(mapping) => mapping,
            Err(e) => {
                error!("Failed to categorize items: {e:#}");
                HashMap::new()
            }
        }
    }

    /// Fallible variant of [`categorize`](Self::categorize)
    ///
    /// Still returns an empty mapping (not an error) when the key is
    /// unconfigured, the input is empty, or the response carries no
    /// candidate text. Transport and parse problems surface as errors.
    pub async fn try_categorize(&self, item_names: &[String]) -> Result<HashMap<String, String>> {
        let Some(api_key) = self.config.usable_api_key() else {
            warn!("API key is missing or the sample placeholder; skipping categorization");
            return Ok(HashMap::new());
        };

        if item_names.is_empty() {
            return Ok(HashMap::new());
        }

        let contents = vec![
            Content::new(&self.config.instruction_role, instruction_prompt()),
            Content::user(user_prompt(item_names)),
        ];

        let start = Instant::now();
        let response = gemini::generate_content(&self.config, api_key, contents).await?;
        let duration_ms = start.elapsed().as_millis();

        let Some(text) = response.text() else {
            warn!(duration_ms = %duration_ms, "Response contained no candidate text");
            return Ok(HashMap::new());
        };

        let mapping = parse_items(text)?;

        info!(
            model = %self.config.model,
            requested = item_names.len(),
            categorized = mapping.len(),
            duration_ms = %duration_ms,
            "Categorization completed"
        );

        Ok(mapping)
    }
}

fn instruction_prompt() -> String {
    format!(
        r#"Categorize the following grocery items into standard categories (e.g., {}).

Return JSON only.
Format: {{ "items": [{{ "name": "Item Name", "category": "Category Name" }}] }}"#,
        STANDARD_CATEGORIES
    )
}

fn user_prompt(item_names: &[String]) -> String {
    format!("Items: {}", item_names.join(", "))
}

/// Parse the model's answer into a name → category mapping
///
/// Entries missing a name or category (or with empty ones) are skipped
/// silently; the rest of the list is kept.
fn parse_items(text: &str) -> Result<HashMap<String, String>> {
    let cleaned = strip_markdown_json(text);

    let parsed: CategorizedList = serde_json::from_str(cleaned)
        .with_context(|| format!("Failed to parse categorization response as JSON: {cleaned}"))?;

    let mut mapping = HashMap::new();
    for item in parsed.items {
        if let (Some(name), Some(category)) = (item.name, item.category) {
            if !name.is_empty() && !category.is_empty() {
                mapping.insert(name, category);
            }
        }
    }

    Ok(mapping)
}
