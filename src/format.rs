//! Pure event-to-text conversion. No rendering concerns here; the widgets
//! consume the rows this module produces.

use chrono::{DateTime, Utc};

use crate::domain::{ActionKind, FeedEvent};

/// Display-ready projection of one [`FeedEvent`], rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub author: String,
    pub summary: String,
    pub time_text: String,
}

impl DisplayRow {
    /// The combined one-line form used by the list variant.
    pub fn sentence(&self) -> String {
        format!("{} on {}", self.summary, self.time_text)
    }
}

pub fn display_rows(events: &[FeedEvent]) -> Vec<DisplayRow> {
    events.iter().map(display_row).collect()
}

pub fn display_row(event: &FeedEvent) -> DisplayRow {
    DisplayRow {
        author: event.author.clone(),
        summary: summary(event),
        time_text: format_timestamp(&event.timestamp),
    }
}

/// Human-readable sentence for an event. Unrecognized actions yield an
/// empty summary; the event is still rendered with author and timestamp.
pub fn summary(event: &FeedEvent) -> String {
    let from = event.from_branch.as_deref().unwrap_or("");
    match &event.action {
        ActionKind::Push => format!("{} pushed to {}", event.author, event.to_branch),
        ActionKind::PullRequest => format!(
            "{} submitted a pull request from {} to {}",
            event.author, from, event.to_branch
        ),
        ActionKind::Merge => format!(
            "{} merged branch {} to {}",
            event.author, from, event.to_branch
        ),
        ActionKind::Other(_) => String::new(),
    }
}

/// Long-form UTC timestamp, e.g. `2 January 2024, 03:04:05 UTC`.
/// Always evaluated on the UTC clock, independent of the host timezone.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-d %B %Y, %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_timestamp;

    fn event(action: &str, from: Option<&str>) -> FeedEvent {
        FeedEvent {
            author: "alice".to_string(),
            action: ActionKind::from(action.to_string()),
            from_branch: from.map(|s| s.to_string()),
            to_branch: "main".to_string(),
            timestamp: parse_timestamp("2024-01-02T03:04:05Z").unwrap(),
        }
    }

    #[test]
    fn push_sentence() {
        let row = display_row(&event("PUSH", None));
        assert_eq!(row.summary, "alice pushed to main");
        assert_eq!(
            row.sentence(),
            "alice pushed to main on 2 January 2024, 03:04:05 UTC"
        );
    }

    #[test]
    fn pull_request_sentence() {
        let row = display_row(&event("PULL_REQUEST", Some("feature")));
        assert_eq!(
            row.sentence(),
            "alice submitted a pull request from feature to main on 2 January 2024, 03:04:05 UTC"
        );
    }

    #[test]
    fn merge_sentence() {
        let row = display_row(&event("MERGE", Some("feature")));
        assert_eq!(
            row.sentence(),
            "alice merged branch feature to main on 2 January 2024, 03:04:05 UTC"
        );
    }

    #[test]
    fn timestamp_is_deterministic_utc() {
        let formatted = format_timestamp(&parse_timestamp("2024-01-02T03:04:05Z").unwrap());
        assert_eq!(formatted, "2 January 2024, 03:04:05 UTC");
        assert!(formatted.ends_with(" UTC"));

        // Offset inputs are normalized onto the UTC clock before formatting.
        let offset = format_timestamp(&parse_timestamp("2024-01-02T05:04:05+02:00").unwrap());
        assert_eq!(offset, formatted);
    }

    #[test]
    fn unknown_action_keeps_author_and_time() {
        let row = display_row(&event("FORCE_PUSH", None));
        assert_eq!(row.summary, "");
        assert_eq!(row.author, "alice");
        assert_eq!(row.time_text, "2 January 2024, 03:04:05 UTC");
    }

    #[test]
    fn formatting_is_idempotent() {
        let events = vec![event("PUSH", None), event("MERGE", Some("dev"))];
        assert_eq!(display_rows(&events), display_rows(&events));
    }
}
