//! Ranking and grouping views over event lists.
//!
//! Every function here is pure: inputs are borrowed, outputs are fresh
//! vectors. Ranking order and display (date) order are independently
//! sorted copies, so sorting for one never disturbs the other. That is
//! why nothing in this module takes `&mut`.

use crate::details::{split_name, Event};

/// Up to `n` events ranked descending by tickets sold.
///
/// The sort is stable: events with equal sales keep their relative input
/// order. This is a contract, not an accident: callers display ties in
/// catalog order.
#[must_use]
pub fn top_n(events: &[Event], n: usize) -> Vec<Event> {
    let mut ranked = events.to_vec();
    ranked.sort_by(|a, b| b.details.tickets_sold.cmp(&a.details.tickets_sold));
    ranked.truncate(n);
    ranked
}

/// Events sorted ascending by date, for the chronological listing.
///
/// Stable, and independent of [`top_n`]: both work on their own copies.
#[must_use]
pub fn by_date(events: &[Event]) -> Vec<Event> {
    let mut listing = events.to_vec();
    listing.sort_by_key(|event| event.details.date);
    listing
}

/// Distinct sport names extracted from composite event names.
///
/// First-seen order, deduplicated. Names without a parenthesized suffix
/// contribute the empty-string sport (see [`split_name`]).
#[must_use]
pub fn distinct_sports<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sports: Vec<String> = Vec::new();
    for name in names {
        let (_, sport) = split_name(name.as_ref());
        if !sports.iter().any(|seen| seen == sport) {
            sports.push(sport.to_string());
        }
    }
    sports
}

/// Distinct event titles whose sport matches `sport` exactly.
///
/// Matching is case-sensitive with no trimming; first-seen order,
/// deduplicated.
#[must_use]
pub fn events_for_sport<S: AsRef<str>>(sport: &str, names: &[S]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for name in names {
        let (title, event_sport) = split_name(name.as_ref());
        if event_sport == sport && !titles.iter().any(|seen| seen == title) {
            titles.push(title.to_string());
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::EventDetails;

    fn event(name: &str, sold: u128, date: u128) -> Event {
        let (title, sport) = split_name(name);
        Event::new(
            name.to_string(),
            EventDetails {
                sport: sport.to_string(),
                title: title.to_string(),
                tickets_left: 100,
                tickets_sold: sold,
                date,
                description: String::new(),
                venue: String::new(),
            },
        )
    }

    #[test]
    fn top_n_sorts_descending_by_sold() {
        let events = vec![
            event("A (x)", 5, 1),
            event("B (x)", 20, 2),
            event("C (y)", 10, 3),
        ];
        let ranked = top_n(&events, 3);
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B (x)", "C (y)", "A (x)"]);
    }

    #[test]
    fn top_n_is_stable_under_ties() {
        let events = vec![
            event("First (x)", 7, 1),
            event("Second (x)", 7, 2),
            event("Third (x)", 7, 3),
            event("Winner (x)", 9, 4),
        ];
        let ranked = top_n(&events, 4);
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Winner (x)", "First (x)", "Second (x)", "Third (x)"]);
    }

    #[test]
    fn top_n_caps_at_available_events() {
        let events = vec![event("A (x)", 1, 1), event("B (x)", 2, 2)];
        assert_eq!(top_n(&events, 5).len(), 2);
        assert_eq!(top_n(&events, 1).len(), 1);
        assert!(top_n(&events, 0).is_empty());
    }

    #[test]
    fn ranking_does_not_disturb_date_order() {
        let events = vec![
            event("A (x)", 1, 30),
            event("B (x)", 9, 2),
            event("C (x)", 5, 17),
        ];
        let ranked = top_n(&events, 3);
        let listing = by_date(&events);

        let ranked_names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        let listing_names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(ranked_names, ["B (x)", "C (x)", "A (x)"]);
        assert_eq!(listing_names, ["B (x)", "C (x)", "A (x)"]);
        // Input untouched by either view.
        let input_names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(input_names, ["A (x)", "B (x)", "C (x)"]);
    }

    #[test]
    fn distinct_sports_deduplicates_in_first_seen_order() {
        assert_eq!(
            distinct_sports(&["A (x)", "B (x)", "C (y)"]),
            ["x", "y"]
        );
    }

    #[test]
    fn events_for_sport_filters_exactly() {
        assert_eq!(
            events_for_sport("x", &["A (x)", "B (y)", "C (x)"]),
            ["A", "C"]
        );
        // Case-sensitive, no trimming.
        assert!(events_for_sport("X", &["A (x)"]).is_empty());
        assert!(events_for_sport("x ", &["A (x)"]).is_empty());
    }

    #[test]
    fn events_for_sport_deduplicates_titles() {
        assert_eq!(
            events_for_sport("x", &["A (x)", "A (x)", "B (x)"]),
            ["A", "B"]
        );
    }

    #[test]
    fn names_without_parentheses_group_under_empty_sport() {
        let names = ["Ceremony", "A (x)", "Another Plain Name"];
        assert_eq!(distinct_sports(&names), ["", "x"]);
        assert_eq!(
            events_for_sport("", &names),
            ["Ceremony", "Another Plain Name"]
        );
    }
}
