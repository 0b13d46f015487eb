//! Grouping quotations into comparable lines.

use std::collections::HashMap;

use super::event::Event;
use super::quotation::{LineKey, Quotation};

/// All quotations sharing a [`LineKey`] within one event.
///
/// Never empty: a group can only be created from its first quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    key: LineKey,
    quotations: Vec<Quotation>,
}

impl LineGroup {
    /// Start a group from its first quotation.
    #[must_use]
    pub fn new(first: Quotation) -> Self {
        Self {
            key: first.line_key(),
            quotations: vec![first],
        }
    }

    /// Add a quotation to the group.
    ///
    /// # Panics
    ///
    /// Panics if the quotation belongs to a different line.
    pub fn push(&mut self, quotation: Quotation) {
        assert_eq!(
            quotation.line_key(),
            self.key,
            "quotation does not belong to this line group"
        );
        self.quotations.push(quotation);
    }

    #[must_use]
    pub fn key(&self) -> &LineKey {
        &self.key
    }

    #[must_use]
    pub fn quotations(&self) -> &[Quotation] {
        &self.quotations
    }

    /// The quotation that opened the group.
    #[must_use]
    pub fn first(&self) -> &Quotation {
        &self.quotations[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_quotations(self) -> Vec<Quotation> {
        self.quotations
    }
}

/// Partition every quotation of an event into line groups.
///
/// Groups come back in the order their key was first seen, and quotations
/// inside a group keep bookmaker → market → outcome discovery order. No
/// quotation is dropped.
#[must_use]
pub fn group_lines(event: &Event) -> Vec<LineGroup> {
    let mut index: HashMap<LineKey, usize> = HashMap::new();
    let mut groups: Vec<LineGroup> = Vec::new();

    for quotation in event.quotations() {
        let key = quotation.line_key();
        match index.get(&key) {
            Some(&slot) => groups[slot].quotations.push(quotation),
            None => {
                index.insert(key, groups.len());
                groups.push(LineGroup::new(quotation));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{Bookmaker, Market, Outcome};

    fn book(key: &str, outcomes: Vec<Outcome>) -> Bookmaker {
        let market = outcomes
            .into_iter()
            .fold(Market::new("totals"), Market::with_outcome);
        Bookmaker::new(key).with_market(market)
    }

    #[test]
    fn groups_same_line_across_bookmakers() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(book(
                "fanduel",
                vec![
                    Outcome::new("Over", -110).with_point(221.5),
                    Outcome::new("Under", -110).with_point(221.5),
                ],
            ))
            .with_bookmaker(book(
                "draftkings",
                vec![
                    Outcome::new("Over", -105).with_point(221.5),
                    Outcome::new("Under", -115).with_point(221.5),
                ],
            ));

        let groups = group_lines(&event);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key().outcome_name(), "Over");
        assert_eq!(groups[1].key().outcome_name(), "Under");
        assert!(groups.iter().all(|g| g.len() == 2));
    }

    #[test]
    fn different_points_split_groups() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(book("fanduel", vec![Outcome::new("Over", -110).with_point(221.5)]))
            .with_bookmaker(book(
                "draftkings",
                vec![Outcome::new("Over", -110).with_point(222.5)],
            ));

        let groups = group_lines(&event);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn every_quotation_lands_in_exactly_one_group() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(book(
                "a",
                vec![
                    Outcome::new("Over", -110).with_point(1.5),
                    Outcome::new("Over", 120).with_point(2.5),
                ],
            ))
            .with_bookmaker(book("b", vec![Outcome::new("Over", 105).with_point(1.5)]))
            .with_bookmaker(book("c", vec![Outcome::new("Under", -130).with_point(1.5)]));

        let groups = group_lines(&event);
        let total: usize = groups.iter().map(LineGroup::len).sum();

        assert_eq!(total, event.quotation_count());
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn discovery_order_is_preserved_within_group() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(book("first", vec![Outcome::new("Over", 100).with_point(1.5)]))
            .with_bookmaker(book("second", vec![Outcome::new("Over", 110).with_point(1.5)]))
            .with_bookmaker(book("third", vec![Outcome::new("Over", 120).with_point(1.5)]));

        let groups = group_lines(&event);
        let order: Vec<&str> = groups[0]
            .quotations()
            .iter()
            .map(|q| q.bookmaker.as_str())
            .collect();

        assert_eq!(order, vec!["first", "second", "third"]);
        assert_eq!(groups[0].first().bookmaker.as_str(), "first");
    }

    #[test]
    fn empty_event_yields_no_groups() {
        let event = Event::new("evt", "basketball_nba", "H", "A");
        assert!(group_lines(&event).is_empty());
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn push_rejects_foreign_line() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(book(
                "a",
                vec![
                    Outcome::new("Over", -110).with_point(1.5),
                    Outcome::new("Under", -110).with_point(1.5),
                ],
            ));
        let mut quotations = event.quotations();
        let mut group = LineGroup::new(quotations.next().unwrap());
        group.push(quotations.next().unwrap());
    }
}
