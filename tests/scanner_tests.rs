//! Scanner tests over the scripted provider.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use linescout::application::{OfferScanner, SportScan};
use linescout::domain::{BookmakerKey, Criteria};
use linescout::error::Error;
use linescout::testkit::domain::{event_with_prices, summary};
use linescout::testkit::provider::ScriptedProvider;

const NHL: &str = "icehockey_nhl";

fn criteria(min_competitors: usize) -> Criteria {
    Criteria {
        bookmaker: BookmakerKey::from("fanduel"),
        max_price: 500,
        min_competitors,
        limit: 10,
    }
}

fn sports() -> Vec<SportScan> {
    vec![
        SportScan::new("basketball_nba", vec!["h2h".into()]),
        SportScan::new(NHL, vec!["h2h".into()]),
    ]
}

#[tokio::test]
async fn offers_from_every_sport_are_ranked_together() {
    let provider = ScriptedProvider::new()
        .with_events("basketball_nba", vec![summary("nba-1")])
        .with_events(NHL, vec![summary("nhl-1")])
        .with_odds(event_with_prices(
            "nba-1",
            &[("fanduel", 110), ("draftkings", 100), ("betmgm", 100)],
        ))
        .with_odds(event_with_prices(
            "nhl-1",
            &[("fanduel", 200), ("draftkings", 100), ("betmgm", 100)],
        ));

    let scanner = OfferScanner::new(Arc::new(provider), sports(), 2);
    let report = scanner.scan(&criteria(2)).await.unwrap();

    assert_eq!(report.events_scanned, 2);
    assert_eq!(report.lines_scored, 2);
    let ids: Vec<&str> = report.offers.iter().map(|o| o.event_id.as_str()).collect();
    assert_eq!(ids, vec!["nhl-1", "nba-1"]);
}

#[tokio::test]
async fn each_listed_event_is_fetched_once() {
    let events: Vec<_> = (0..6).map(|i| summary(&format!("e{i}"))).collect();
    let mut provider = ScriptedProvider::new().with_events("basketball_nba", events);
    for i in 0..6 {
        provider = provider.with_odds(event_with_prices(
            &format!("e{i}"),
            &[("fanduel", 100), ("draftkings", 100)],
        ));
    }
    let calls = provider.odds_calls();

    let scanner = OfferScanner::new(
        Arc::new(provider),
        vec![SportScan::new("basketball_nba", vec!["h2h".into()])],
        3,
    );
    let report = scanner.scan(&criteria(0)).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 6);
    assert_eq!(report.events_scanned, 6);
    assert_eq!(report.offers.len(), 6);
}

#[tokio::test]
async fn failing_event_fails_the_scan() {
    let provider = ScriptedProvider::new()
        .with_events("basketball_nba", vec![summary("ok"), summary("missing")])
        .with_odds(event_with_prices("ok", &[("fanduel", 100)]));

    let scanner = OfferScanner::new(Arc::new(provider), sports(), 1);
    let result = scanner.scan(&criteria(0)).await;

    assert!(matches!(result, Err(Error::Provider { status: 404, .. })));
}

#[tokio::test]
async fn sport_without_events_yields_empty_report() {
    let scanner = OfferScanner::new(Arc::new(ScriptedProvider::new()), sports(), 4);
    let report = scanner.scan(&criteria(0)).await.unwrap();

    assert_eq!(report.events_scanned, 0);
    assert!(report.offers.is_empty());
}

#[tokio::test]
async fn limit_truncates_after_ranking() {
    let provider = ScriptedProvider::new()
        .with_events("basketball_nba", vec![summary("a"), summary("b"), summary("c")])
        .with_odds(event_with_prices("a", &[("fanduel", 120), ("draftkings", 100)]))
        .with_odds(event_with_prices("b", &[("fanduel", 180), ("draftkings", 100)]))
        .with_odds(event_with_prices("c", &[("fanduel", 150), ("draftkings", 100)]));

    let scanner = OfferScanner::new(
        Arc::new(provider),
        vec![SportScan::new("basketball_nba", vec!["h2h".into()])],
        4,
    );
    let report = scanner
        .scan(&Criteria {
            limit: 2,
            ..criteria(1)
        })
        .await
        .unwrap();

    let ids: Vec<&str> = report.offers.iter().map(|o| o.event_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}
