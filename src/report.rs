//! Rendering of company snapshots for stdout.

use crate::company::CompanyState;
use crate::config::OutputFormat;

/// Render a snapshot in the requested format, without trailing newline.
pub fn render(state: &CompanyState, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(state),
        OutputFormat::Pretty => Ok(render_pretty(state)),
    }
}

fn render_pretty(state: &CompanyState) -> String {
    let claims: Vec<String> = state
        .claims_history
        .iter()
        .map(|c| {
            format!(
                "{{ name: {:?}, amountOfMoneyToCollect: {} }}",
                c.name, c.amount_of_money_to_collect
            )
        })
        .collect();
    let policies: Vec<String> = state.policies.iter().map(|p| format!("{:?}", p)).collect();

    format!(
        "claimsHistory: [{}]\naccounting: {}\npolicies: [{}]",
        claims.join(", "),
        state.accounting,
        policies.join(", ")
    )
}
