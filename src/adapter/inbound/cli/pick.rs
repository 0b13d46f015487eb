//! Interactive offer picker.
//!
//! Runs a scan, lets the operator tick offers in a multi-select list and
//! records each ticked offer as a bet. A failed insert is reported for that
//! offer alone.

use dialoguer::{theme::ColorfulTheme, MultiSelect};

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::scan::{outcome_label, point_label, run_scan, start_time};
use crate::domain::Offer;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;

/// One line in the selector.
pub(crate) fn item_label(offer: &Offer) -> String {
    let competitors = offer
        .competitor_prices
        .iter()
        .map(|c| format!("{} {}", c.bookmaker, c.price))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} | {} | {} {} {} | {} | score {:.4} | {}",
        offer.matchup(),
        start_time(offer),
        offer.market_key,
        outcome_label(offer),
        point_label(offer.outcome_point),
        offer.price,
        offer.outlier_score,
        competitors,
    )
}

/// Execute `pick`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`linescout pick` is interactive; use `linescout scan --json` instead"
                .to_string(),
        }
        .into());
    }

    let (config, report) = run_scan(args).await?;
    if report.offers.is_empty() {
        output::note("No offers matched the selection criteria.");
        return Ok(());
    }

    let items: Vec<String> = report.offers.iter().map(item_label).collect();
    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select offers to record (space to toggle, enter to confirm)")
        .items(&items)
        .interact()?;

    if chosen.is_empty() {
        output::note("Nothing selected.");
        return Ok(());
    }

    let recorder = bootstrap::build_recorder(&config)?;
    let offers: Vec<Offer> = chosen
        .into_iter()
        .filter_map(|i| report.offers.get(i).cloned())
        .collect();

    output::section("Recording");
    let mut failed = 0;
    for outcome in recorder.record_all(offers).await {
        match outcome.result {
            Ok(id) => output::success(&format!(
                "{} {} {}",
                outcome.offer.matchup(),
                outcome_label(&outcome.offer),
                output::muted(id)
            )),
            Err(e) => {
                failed += 1;
                output::error(&format!("{}: {e}", outcome.offer.matchup()));
            }
        }
    }
    if failed > 0 {
        output::warning(&format!("{} offer(s) not recorded", output::negative(failed)));
    }

    Ok(())
}
