//! Handler for `scan`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::application::ScanReport;
use crate::domain::Offer;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct OfferRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Matchup")]
    matchup: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Point")]
    point: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Books")]
    books: usize,
}

impl OfferRow {
    fn new(rank: usize, offer: &Offer) -> Self {
        Self {
            rank,
            matchup: offer.matchup(),
            start: start_time(offer),
            market: offer.market_key.clone(),
            outcome: outcome_label(offer),
            point: point_label(offer.outcome_point),
            price: offer.price.to_string(),
            score: format!("{:.4}", offer.outlier_score),
            books: offer.competitor_count(),
        }
    }
}

pub(super) fn start_time(offer: &Offer) -> String {
    offer
        .commence_time
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

pub(super) fn outcome_label(offer: &Offer) -> String {
    if offer.outcome_description.is_empty() {
        offer.outcome_name.clone()
    } else {
        format!("{} {}", offer.outcome_description, offer.outcome_name)
    }
}

pub(super) fn point_label(point: f64) -> String {
    if point == 0.0 {
        String::new()
    } else {
        format!("{point}")
    }
}

/// Load config, apply overrides and run one scan behind a spinner.
pub(super) async fn run_scan(args: &ScanArgs) -> Result<(Config, ScanReport)> {
    let mut config = config::load(&args.config.path)?;
    args.selection.apply(&mut config)?;
    super::init_logging(&config, true);

    let provider = bootstrap::build_provider(&config)?;
    let scanner = bootstrap::build_scanner(&config, provider);

    let sports: Vec<&str> = config.sports.iter().map(|s| s.key.as_str()).collect();
    let pb = output::spinner(&format!("Scanning {}", sports.join(", ")));
    match scanner.scan(&config.selection).await {
        Ok(report) => {
            output::spinner_success(
                &pb,
                &format!(
                    "Scanned {} events, {} lines",
                    report.events_scanned, report.lines_scored
                ),
            );
            Ok((config, report))
        }
        Err(e) => {
            output::spinner_fail(&pb, "Scan failed");
            Err(e)
        }
    }
}

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let (config, report) = run_scan(args).await?;

    if output::is_json() {
        output::json_output(json!({ "results": report.offers }));
        return Ok(());
    }

    output::section("Offers");
    output::field("Bookmaker", &config.selection.bookmaker);
    output::field(
        "Filter",
        format!(
            "price < {}, books > {}",
            config.selection.max_price, config.selection.min_competitors
        ),
    );

    if report.offers.is_empty() {
        output::note("No offers matched the selection criteria.");
        output::hint("loosen --max-price or --min-competitors");
        return Ok(());
    }

    let rows: Vec<OfferRow> = report
        .offers
        .iter()
        .enumerate()
        .map(|(i, offer)| OfferRow::new(i + 1, offer))
        .collect();
    output::lines(&Table::new(rows).to_string());

    if let Some(best) = report.offers.first() {
        output::field("Best", output::score(best.outlier_score));
    }
    output::hint(&format!(
        "run {} to record bets",
        output::highlight("linescout pick")
    ));

    Ok(())
}
