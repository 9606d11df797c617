//! The event record and its composite naming scheme.
//!
//! An event is identified everywhere outside this crate by its composite
//! name, the `"<title> (<sport>)"` label. The name is really a flattened
//! compound key of two fields; [`split_name`] recovers them. Titles may
//! themselves contain parentheses, so parsing anchors on the *last* opening
//! parenthesis.

/// Details of a single sporting event.
///
/// Ticket counts and the date use `u128`: they cross the wire as decimal
/// text, so inventories far beyond `u64` survive transport unharmed.
///
/// Invariant: `tickets_left + tickets_sold` is fixed at creation time.
/// Reservations move units from left to sold and never create or destroy
/// them (see [`crate::ledger`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    /// Sport this event belongs to (e.g. "Swimming").
    pub sport: String,
    /// Event title (e.g. "Men's 100m Freestyle").
    pub title: String,
    /// Tickets still available for purchase.
    pub tickets_left: u128,
    /// Tickets already sold.
    pub tickets_sold: u128,
    /// Day of month the event takes place on (1–31).
    pub date: u128,
    /// Free-form description.
    pub description: String,
    /// Venue name.
    pub venue: String,
}

impl EventDetails {
    /// The composite catalog name for this event: `"<title> (<sport>)"`.
    ///
    /// This label is the sole external identifier; the catalog enforces
    /// uniqueness on it (same name overwrites, never duplicates).
    #[must_use]
    pub fn composite_name(&self) -> String {
        format!("{} ({})", self.title, self.sport)
    }
}

/// A catalog entry: a composite name paired with its details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Composite `"<title> (<sport>)"` name.
    pub name: String,
    /// Current details for the event.
    pub details: EventDetails,
}

impl Event {
    /// Pair a composite name with its details.
    #[must_use]
    pub const fn new(name: String, details: EventDetails) -> Self {
        Self { name, details }
    }
}

/// Split a composite name into `(title, sport)`.
///
/// The sport is the text between the last `(` and the first `)` after it;
/// the title is everything before that parenthesis, minus one separating
/// space. A name with no parenthesized suffix is all title: the sport
/// comes back as the empty string. This degenerate case is deliberate:
/// such names group under the empty sport rather than being rejected.
///
/// ```
/// use podium_core::split_name;
///
/// assert_eq!(split_name("Men's 100m (Swimming)"), ("Men's 100m", "Swimming"));
/// assert_eq!(split_name("Relay (4x100) (Track)"), ("Relay (4x100)", "Track"));
/// assert_eq!(split_name("Closing Ceremony"), ("Closing Ceremony", ""));
/// ```
#[must_use]
pub fn split_name(name: &str) -> (&str, &str) {
    if let Some(open) = name.rfind('(') {
        if let Some(close) = name[open + 1..].find(')') {
            let sport = &name[open + 1..open + 1 + close];
            let before = &name[..open];
            let title = before.strip_suffix(' ').unwrap_or(before);
            return (title, sport);
        }
    }
    (name, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventDetails {
        EventDetails {
            sport: "Swimming".to_string(),
            title: "Men's 100m Freestyle".to_string(),
            tickets_left: 250,
            tickets_sold: 0,
            date: 12,
            description: "Heats and final".to_string(),
            venue: "Aquatics Centre".to_string(),
        }
    }

    #[test]
    fn composite_name_format() {
        assert_eq!(
            sample().composite_name(),
            "Men's 100m Freestyle (Swimming)"
        );
    }

    #[test]
    fn split_round_trips_composite_name() {
        let details = sample();
        let name = details.composite_name();
        assert_eq!(split_name(&name), ("Men's 100m Freestyle", "Swimming"));
    }

    #[test]
    fn split_uses_last_parenthesis() {
        assert_eq!(
            split_name("4x100m Relay (Mixed) (Athletics)"),
            ("4x100m Relay (Mixed)", "Athletics")
        );
    }

    #[test]
    fn split_without_parentheses_yields_empty_sport() {
        assert_eq!(split_name("Opening Ceremony"), ("Opening Ceremony", ""));
    }

    #[test]
    fn split_with_unclosed_parenthesis_is_all_title() {
        assert_eq!(split_name("Broken (name"), ("Broken (name", ""));
    }

    #[test]
    fn split_empty_sport_suffix() {
        assert_eq!(split_name("Mystery ()"), ("Mystery", ""));
    }
}
