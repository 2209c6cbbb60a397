//! Jurisdiction narrowing for request searches.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::cli::interact::{Console, MAX_SELECT_ATTEMPTS};
use crate::models::JurisdictionLevel;
use crate::muckrock::MuckRockClient;

/// Ask whether to narrow the search, then resolve an abbreviation to a
/// jurisdiction id.
///
/// Returns None when the user declines, cancels, or runs out of attempts;
/// the search then proceeds without a jurisdiction filter. `USA` resolves at
/// federal level, anything else at state level. The first match wins.
pub async fn select_jurisdiction<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &MuckRockClient,
) -> Result<Option<i64>> {
    let narrow = console.confirm(
        "Do you want to narrow the search to a specific state or only federal agencies?",
    )?;
    if !narrow {
        return Ok(None);
    }

    for _ in 0..MAX_SELECT_ATTEMPTS {
        let abbrev = match console.line_required(
            "Enter the jurisdiction abbreviation (e.g., MA, IL, send USA for federal)",
        )? {
            Some(input) => input.to_uppercase(),
            None => {
                println!("Searching without a jurisdiction filter.");
                return Ok(None);
            }
        };

        let level = JurisdictionLevel::for_abbrev(&abbrev);
        debug!("Resolving {} at level {}", abbrev, level.as_str());
        let jurisdictions = client.list_jurisdictions(&abbrev, level).await?;

        match jurisdictions.into_iter().next() {
            Some(jurisdiction) => {
                println!(
                    "Filtering to {} (ID {})",
                    jurisdiction.name, jurisdiction.id
                );
                return Ok(Some(jurisdiction.id));
            }
            None => println!(
                "No jurisdiction found with abbreviation '{}'. Please try again.",
                abbrev
            ),
        }
    }

    println!(
        "No jurisdiction matched after {} attempts, searching without a filter.",
        MAX_SELECT_ATTEMPTS
    );
    Ok(None)
}
