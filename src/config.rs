use clap::{Parser, ValueEnum};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

#[derive(Parser, Debug, Default)]
#[command(name = "gitfeed", about = "terminal activity feed for repository events")]
pub struct Cli {
    /// Feed server base URL
    #[arg(long, env = "GITFEED_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Presentation variant for the feed
    #[arg(long, value_enum)]
    pub layout: Option<FeedLayout>,

    /// Polling interval in seconds
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Log file path
    #[arg(long, env = "GITFEED_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedLayout {
    List,
    Table,
}

impl FeedLayout {
    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Table => "table",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Table,
            Self::Table => Self::List,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub layout: Option<FeedLayout>,
    pub poll_interval: Option<u64>,
}

impl ConfigFile {
    pub fn load() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let config_path = config_dir.join("gitfeed").join("config.toml");
        let content = std::fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }
}

/// Resolved settings: CLI/env over config file over built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub layout: FeedLayout,
    pub poll_interval: u64,
    pub log_file: Option<String>,
}

impl Config {
    pub fn resolve(cli: Cli, file: ConfigFile) -> Self {
        Self {
            endpoint: cli
                .endpoint
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            layout: cli.layout.or(file.layout).unwrap_or(FeedLayout::List),
            poll_interval: cli
                .poll_interval
                .or(file.poll_interval)
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            log_file: cli.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::resolve(Cli::default(), ConfigFile::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.layout, FeedLayout::List);
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn cli_wins_over_config_file() {
        let cli = Cli {
            endpoint: Some("http://feed:8080".to_string()),
            poll_interval: Some(5),
            ..Cli::default()
        };
        let file = ConfigFile {
            endpoint: Some("http://other:9090".to_string()),
            layout: Some(FeedLayout::Table),
            poll_interval: Some(30),
        };

        let config = Config::resolve(cli, file);
        assert_eq!(config.endpoint, "http://feed:8080");
        assert_eq!(config.poll_interval, 5);
        // Unset on the CLI, so the file value applies.
        assert_eq!(config.layout, FeedLayout::Table);
    }

    #[test]
    fn config_file_parses_layout_names() {
        let file: ConfigFile = toml::from_str("layout = \"table\"\npoll_interval = 20")
            .expect("valid config");
        assert_eq!(file.layout, Some(FeedLayout::Table));
        assert_eq!(file.poll_interval, Some(20));
    }
}
