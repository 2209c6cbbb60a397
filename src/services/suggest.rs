//! Search, filtering, and draft generation.
//!
//! Mines prior successful requests on a topic and asks the generation
//! backend for a clearer rewrite grounded in those examples.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::llm::{LlmClient, DRAFT_PROMPT};
use crate::models::FoiaRequest;
use crate::muckrock::MuckRockClient;

/// Most examples ever sent to the generation backend.
pub const MAX_EXAMPLES: usize = 100;

/// Placeholder embedded for examples with no body text.
const NO_TEXT_PLACEHOLDER: &str = "[No text available]";

/// Partition records into (successful, unsuccessful) by status.
pub fn filter_requests(requests: Vec<FoiaRequest>) -> (Vec<FoiaRequest>, Vec<FoiaRequest>) {
    requests.into_iter().partition(|r| r.status.is_successful())
}

/// Successful examples prepared for the prompt.
#[derive(Debug)]
pub struct ExampleSet {
    examples: Vec<FoiaRequest>,
    /// Successful count before truncation.
    total: usize,
}

impl ExampleSet {
    /// Keep the first `MAX_EXAMPLES` records; the search API returns newest
    /// first, so the prefix is the most recent slice.
    pub fn new(mut successful: Vec<FoiaRequest>) -> Self {
        let total = successful.len();
        successful.truncate(MAX_EXAMPLES);
        Self {
            examples: successful,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn truncated(&self) -> bool {
        self.total > MAX_EXAMPLES
    }

    /// Render one `Title:`/`Body:` block per example, blank-line separated.
    pub fn render(&self) -> String {
        self.examples
            .iter()
            .map(|r| {
                format!(
                    "Title: {}\nBody: {}",
                    r.title,
                    r.body_text().unwrap_or(NO_TEXT_PLACEHOLDER)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Render the drafting prompt for a topic and example set.
pub fn build_prompt(topic: &str, examples: &ExampleSet) -> String {
    DRAFT_PROMPT
        .replace("{topic}", topic)
        .replace("{examples}", &examples.render())
}

/// Search prior requests on a topic, reporting the server-side total.
pub async fn search_requests(
    client: &MuckRockClient,
    topic: &str,
    jurisdiction: Option<i64>,
) -> Result<Vec<FoiaRequest>> {
    let page = client
        .search_requests(topic, jurisdiction, MAX_EXAMPLES)
        .await?;
    println!(
        "Found {} requests for topic '{}'{}",
        page.count,
        topic,
        if jurisdiction.is_some() {
            " in this jurisdiction"
        } else {
            ""
        }
    );
    Ok(page.results)
}

/// Generate a draft request from successful prior requests.
///
/// Returns None when there are no successful examples to work from; the
/// backend is not called in that case.
pub async fn generate_suggestion(
    llm: &LlmClient,
    topic: &str,
    requests: Vec<FoiaRequest>,
) -> Result<Option<String>> {
    let (successful, _) = filter_requests(requests);
    if successful.is_empty() {
        println!("No successful requests found to use as examples.");
        return Ok(None);
    }

    let examples = ExampleSet::new(successful);
    if examples.truncated() {
        println!(
            "{} successful requests found, but only sending the most recent {} to Gemini for parsing…",
            examples.total(),
            MAX_EXAMPLES
        );
    } else {
        println!(
            "Sending {} successful request{} to Gemini for parsing…",
            examples.len(),
            if examples.len() == 1 { "" } else { "s" }
        );
    }

    let prompt = build_prompt(topic, &examples);
    debug!("Drafting prompt is {} chars", prompt.len());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Waiting for {}...", llm.config().model));
    pb.enable_steady_tick(Duration::from_millis(100));

    let draft = llm.generate(&prompt).await;
    pb.finish_and_clear();

    Ok(Some(draft?))
}
