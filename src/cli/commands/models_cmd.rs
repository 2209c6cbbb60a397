//! Models command.

use console::style;

use crate::llm::{LlmClient, LlmConfig};

/// List generation models available to the configured API key.
///
/// Needs only the generation backend configuration, not MuckRock credentials.
pub async fn cmd_models() -> anyhow::Result<()> {
    let config = LlmConfig::default();
    let client = LlmClient::new(config.clone());

    let models = client.list_models().await?;
    if models.is_empty() {
        println!("No generation models reported by the API.");
        return Ok(());
    }

    for name in &models {
        if *name == config.model {
            println!("{} {} (default)", style("*").green(), name);
        } else {
            println!("  {}", name);
        }
    }

    Ok(())
}
