use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Kind of repository activity reported by the feed server.
///
/// The server's set of action strings is open-ended; anything outside the
/// three known kinds lands in `Other` and is still shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActionKind {
    Push,
    PullRequest,
    Merge,
    Other(String),
}

impl From<String> for ActionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PUSH" => Self::Push,
            "PULL_REQUEST" => Self::PullRequest,
            "MERGE" => Self::Merge,
            _ => Self::Other(raw),
        }
    }
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "PUSH",
            Self::PullRequest => "PULL_REQUEST",
            Self::Merge => "MERGE",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded repository activity as delivered by `GET /events`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedEvent {
    pub author: String,
    pub action: ActionKind,
    /// Source branch; null/absent for pushes.
    #[serde(default)]
    pub from_branch: Option<String>,
    #[serde(default)]
    pub to_branch: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {}", raw)))
}

/// Parse a feed timestamp, always interpreted in UTC.
///
/// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS UTC` shape the
/// webhook server writes.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S UTC", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn decodes_known_actions() {
        let body = r#"[
            {"author": "alice", "action": "PUSH", "from_branch": null,
             "to_branch": "main", "timestamp": "2024-01-02T03:04:05Z"},
            {"author": "bob", "action": "PULL_REQUEST", "from_branch": "feature",
             "to_branch": "main", "timestamp": "2024-01-02T03:04:06Z"},
            {"author": "carol", "action": "MERGE", "from_branch": "feature",
             "to_branch": "main", "timestamp": "2024-01-02T03:04:07Z"}
        ]"#;

        let events: Vec<FeedEvent> = serde_json::from_str(body).expect("valid payload");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].action, ActionKind::Push);
        assert_eq!(events[0].from_branch, None);
        assert_eq!(events[1].action, ActionKind::PullRequest);
        assert_eq!(events[1].from_branch.as_deref(), Some("feature"));
        assert_eq!(events[2].action, ActionKind::Merge);
        assert_eq!(events[2].to_branch, "main");
    }

    #[test]
    fn unknown_action_is_tolerated() {
        let body = r#"{"author": "dave", "action": "FORCE_PUSH",
            "to_branch": "main", "timestamp": "2024-01-02T03:04:05Z"}"#;

        let event: FeedEvent = serde_json::from_str(body).expect("valid payload");
        assert_eq!(event.action, ActionKind::Other("FORCE_PUSH".to_string()));
        assert_eq!(event.action.as_str(), "FORCE_PUSH");
        assert_eq!(event.from_branch, None);
    }

    #[test]
    fn parses_server_timestamp_shape() {
        let parsed = parse_timestamp("2024-01-02 03:04:05 UTC").expect("parses");
        assert_eq!(parsed.hour(), 3);
        assert_eq!(parsed, parse_timestamp("2024-01-02T03:04:05Z").unwrap());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_timestamp("last tuesday").is_none());

        let body = r#"{"author": "a", "action": "PUSH",
            "to_branch": "main", "timestamp": "not a time"}"#;
        assert!(serde_json::from_str::<FeedEvent>(body).is_err());
    }
}
