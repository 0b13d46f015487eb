//! Handler for `bets`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::BetsArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::domain::BetRecord;
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct BetRow {
    #[tabled(rename = "Recorded")]
    recorded: String,
    #[tabled(rename = "Matchup")]
    matchup: String,
    #[tabled(rename = "Book")]
    bookmaker: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&BetRecord> for BetRow {
    fn from(bet: &BetRecord) -> Self {
        let outcome = if bet.outcome_description.is_empty() {
            bet.outcome_name.clone()
        } else {
            format!("{} {}", bet.outcome_description, bet.outcome_name)
        };
        Self {
            recorded: bet.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            matchup: format!("{} vs. {}", bet.home_team, bet.away_team),
            bookmaker: bet.bookmaker.to_string(),
            market: bet.market_key.clone(),
            outcome,
            price: bet.price.to_string(),
            score: format!("{:.4}", bet.outlier_score),
            status: match (bet.finalized, bet.won) {
                (false, _) => "open",
                (true, true) => "won",
                (true, false) => "lost",
            },
        }
    }
}

/// Execute `bets`.
pub async fn execute(args: &BetsArgs) -> Result<()> {
    let mut config = config::load(&args.config.path)?;
    if let Some(ref db) = args.db {
        config.database = db.to_string_lossy().into_owned();
    }
    super::init_logging(&config, true);

    let recorder = bootstrap::build_recorder(&config)?;
    let bets = recorder.list().await?;

    if output::is_json() {
        output::json_output(json!({ "bets": bets }));
        return Ok(());
    }

    output::section("Bets");
    if bets.is_empty() {
        output::note("No bets recorded yet.");
        return Ok(());
    }

    let rows: Vec<BetRow> = bets.iter().map(BetRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Total", bets.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::testkit::domain::offer_with_score;

    #[test]
    fn new_bets_show_as_open() {
        let bet = BetRecord::from_offer(&offer_with_score("e1", "fanduel", 105, 1.2), Utc::now());
        let row = BetRow::from(&bet);
        assert_eq!(row.status, "open");
        assert_eq!(row.outcome, "Jayson Tatum Over");
        assert_eq!(row.matchup, "Boston Celtics vs. Houston Rockets");
    }
}
