//! Filing workflow: confirm, pick an agency and an organization, submit.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use tracing::debug;

use crate::cli::interact::Console;
use crate::models::{Agency, NewFoiaRequest, Organization};
use crate::muckrock::MuckRockClient;

/// Title used when the user leaves the prompt blank.
const DEFAULT_TITLE: &str = "Public Records Request";

/// Most agency candidates shown per query.
const MAX_AGENCY_CHOICES: usize = 5;

/// How the filing workflow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingOutcome {
    /// The request was submitted.
    Filed,
    /// The user answered no at the confirmation gate.
    Declined,
    /// The user cancelled partway through.
    Cancelled,
}

/// Offer to file the drafted request.
///
/// Declining performs no further API calls. Cancelling at any later prompt
/// (empty input or exhausted attempts) abandons the filing without
/// submitting anything. A submission failure propagates to the caller.
pub async fn file_request<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &MuckRockClient,
    draft: &str,
    jurisdiction: Option<i64>,
) -> Result<FilingOutcome> {
    if !console.confirm("Would you like to file this request?")? {
        println!("Okay, not filing the request.");
        return Ok(FilingOutcome::Declined);
    }

    let Some(agency_id) = choose_agency(console, client, jurisdiction).await? else {
        println!("{} Filing cancelled.", style("!").yellow());
        return Ok(FilingOutcome::Cancelled);
    };

    let Some(org_id) = choose_organization(console, client).await? else {
        println!("{} Filing cancelled.", style("!").yellow());
        return Ok(FilingOutcome::Cancelled);
    };

    let title = console.line_or_default(
        "Enter a short title for your request [Public Records Request]",
        DEFAULT_TITLE,
    )?;

    debug!("Filing under agency {} and organization {}", agency_id, org_id);
    let request = NewFoiaRequest::new(title, draft.to_string(), org_id, agency_id);
    client.create_request(&request).await?;

    println!();
    println!("{} Request filed successfully!", style("✓").green());
    Ok(FilingOutcome::Filed)
}

/// Search agencies by name and pick one.
///
/// Only approved agencies are eligible. The query loop runs until a query
/// yields approved matches or the user cancels with empty input.
async fn choose_agency<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &MuckRockClient,
    jurisdiction: Option<i64>,
) -> Result<Option<i64>> {
    loop {
        let Some(query) = console.line_required("Enter the agency name to search")? else {
            return Ok(None);
        };

        let agencies = client.list_agencies(&query, jurisdiction).await?;
        let approved = approved_only(agencies);

        if approved.is_empty() {
            println!("No approved agencies found for '{}'. Try again.", query);
            continue;
        }

        return Ok(present_agency_choices(console, &approved)?);
    }
}

/// Keep only agencies eligible to receive a request.
fn approved_only(agencies: Vec<Agency>) -> Vec<Agency> {
    agencies.into_iter().filter(|a| a.is_approved()).collect()
}

/// Show at most `MAX_AGENCY_CHOICES` approved agencies and read a selection.
fn present_agency_choices<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    approved: &[Agency],
) -> io::Result<Option<i64>> {
    let choices = &approved[..approved.len().min(MAX_AGENCY_CHOICES)];

    println!();
    println!("Select an agency:");
    for (idx, agency) in choices.iter().enumerate() {
        println!("{}. {} (ID {})", idx + 1, agency.name, agency.id);
    }

    Ok(console
        .select("Choose an agency by number", choices.len())?
        .map(|idx| choices[idx].id))
}

/// Pick the organization to bill the request under.
async fn choose_organization<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &MuckRockClient,
) -> Result<Option<i64>> {
    let user = client.me().await?;
    if user.organizations.is_empty() {
        println!("No organizations found for your account.");
        return Ok(None);
    }

    let mut orgs = Vec::with_capacity(user.organizations.len());
    for org_id in &user.organizations {
        orgs.push(client.get_organization(*org_id).await?);
    }

    Ok(present_organization_choices(console, &orgs)?)
}

/// Show the user's organizations and read a selection.
fn present_organization_choices<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    orgs: &[Organization],
) -> io::Result<Option<i64>> {
    println!();
    println!("Select an organization to bill the request under:");
    for (idx, org) in orgs.iter().enumerate() {
        println!("{}. {} (ID {})", idx + 1, org.name, org.id);
    }

    Ok(console
        .select("Choose an organization by number", orgs.len())?
        .map(|idx| orgs[idx].id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgencyStatus;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn agency(id: i64, name: &str) -> Agency {
        Agency {
            id,
            name: name.to_string(),
            status: AgencyStatus::Approved,
            jurisdiction: None,
        }
    }

    fn org(id: i64, name: &str) -> Organization {
        Organization {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_only_approved_agencies_offered() {
        let with_status = |id, status| Agency {
            id,
            name: format!("Agency {}", id),
            status,
            jurisdiction: None,
        };
        let agencies = vec![
            with_status(1, AgencyStatus::Approved),
            with_status(2, AgencyStatus::Pending),
            with_status(3, AgencyStatus::Rejected),
            with_status(4, AgencyStatus::Other),
            with_status(5, AgencyStatus::Approved),
        ];

        let approved = approved_only(agencies);
        assert_eq!(
            approved.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 5]
        );
    }

    #[test]
    fn test_agency_choices_capped_at_five() {
        let approved: Vec<_> = (1..=7).map(|i| agency(i, &format!("Agency {}", i))).collect();

        // 6 is out of range when seven matches are capped to five
        let mut c = console("6\n5\n");
        let picked = present_agency_choices(&mut c, &approved).unwrap();
        assert_eq!(picked, Some(5));
    }

    #[test]
    fn test_agency_choice_first_entry() {
        let approved = vec![agency(41, "State Police"), agency(42, "City Clerk")];
        let picked = present_agency_choices(&mut console("1\n"), &approved).unwrap();
        assert_eq!(picked, Some(41));
    }

    #[test]
    fn test_agency_choice_empty_cancels() {
        let approved = vec![agency(41, "State Police")];
        let picked = present_agency_choices(&mut console("\n"), &approved).unwrap();
        assert_eq!(picked, None);
    }

    #[test]
    fn test_organization_out_of_range_reprompts() {
        let orgs = vec![org(10, "Newsroom"), org(11, "Freelance")];
        let picked = present_organization_choices(&mut console("99\n2\n"), &orgs).unwrap();
        assert_eq!(picked, Some(11));
    }

    #[test]
    fn test_organization_exhausted_attempts_cancel() {
        let orgs = vec![org(10, "Newsroom"), org(11, "Freelance")];
        let picked =
            present_organization_choices(&mut console("0\n3\nx\n99\n-2\n"), &orgs).unwrap();
        assert_eq!(picked, None);
    }

    #[tokio::test]
    async fn test_decline_makes_no_api_calls() {
        // The client points at an unroutable address; any API call would fail
        // the test. Declining must return before any call is attempted.
        let client = MuckRockClient::with_token("http://127.0.0.1:1/api_v2", "test-token");
        let mut c = console("n\n");

        let outcome = file_request(&mut c, &client, "Draft text.", None)
            .await
            .unwrap();
        assert_eq!(outcome, FilingOutcome::Declined);
    }
}
