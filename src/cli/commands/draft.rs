//! Draft command.
//!
//! Walks the full pipeline: topic, jurisdiction, precedent search, generated
//! suggestion, and optional filing.

use std::io::{BufRead, Write};

use console::style;
use tracing::debug;

use crate::cli::interact::Console;
use crate::config::load_settings;
use crate::llm::{LlmClient, LlmConfig};
use crate::muckrock::MuckRockClient;
use crate::services::{file_request, generate_suggestion, search_requests, select_jurisdiction};

/// Search prior requests on a topic, draft a new one, and optionally file it.
pub async fn cmd_draft(topic: Option<String>, model: Option<String>) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let client = MuckRockClient::connect(&settings).await?;
    let mut console = Console::stdio();

    let topic = match topic {
        Some(topic) => topic,
        None => {
            match console.line_required("Enter the topic you want to file a FOIA request about")? {
                Some(topic) => topic,
                None => {
                    println!("{} Cancelled", style("!").yellow());
                    return Ok(());
                }
            }
        }
    };

    let jurisdiction = select_jurisdiction(&mut console, &client).await?;

    println!("Searching for FOIA requests about: {}", topic);
    let requests = search_requests(&client, &topic, jurisdiction).await?;

    // Only offer the model menu when there is something to generate from.
    let any_successful = requests.iter().any(|r| r.status.is_successful());
    let config = match model {
        Some(model) => LlmConfig::default().with_model(&model),
        None if any_successful => choose_model(&mut console, LlmConfig::default()).await?,
        None => LlmConfig::default(),
    };
    debug!("using generation model {}", config.model);
    let llm = LlmClient::new(config);

    match generate_suggestion(&llm, &topic, requests).await? {
        Some(draft) => {
            println!();
            println!("Suggested FOIA request:");
            println!();
            println!("{}", draft);

            let outcome = file_request(&mut console, &client, &draft, jurisdiction).await?;
            debug!("filing outcome: {:?}", outcome);
        }
        None => println!("Could not generate a suggestion."),
    }

    Ok(())
}

/// Offer the backend's model catalog for selection.
///
/// A listing failure is reported but never blocks drafting; the configured
/// model is kept in that case.
async fn choose_model<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: LlmConfig,
) -> anyhow::Result<LlmConfig> {
    let probe = LlmClient::new(config.clone());
    let models = match probe.list_models().await {
        Ok(models) if !models.is_empty() => models,
        Ok(_) => {
            println!(
                "{} No models reported by the API, using {}.",
                style("!").yellow(),
                config.model
            );
            return Ok(config);
        }
        Err(e) => {
            println!(
                "{} Could not list models ({}), using {}.",
                style("!").yellow(),
                e,
                config.model
            );
            return Ok(config);
        }
    };

    let default = models
        .iter()
        .position(|name| *name == config.model)
        .unwrap_or(0);

    println!();
    println!("Select a model:");
    for (idx, name) in models.iter().enumerate() {
        if idx == default {
            println!("{}. {} (default)", idx + 1, name);
        } else {
            println!("{}. {}", idx + 1, name);
        }
    }

    let choice = console.select_or_default("Choose a model by number", models.len(), default)?;
    let model = models[choice].clone();
    Ok(config.with_model(&model))
}
