use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DOMAINS: &str = "http://cplusoj.com,http://cplusoj.com/d/senior,http://cplusoj.com/d/master";
const DEFAULT_EVENTS_URL: &str =
    "https://raw.githubusercontent.com/wing-heart-awa/cplus-better/main/countdown-events.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    /// Partition base URLs crawled for submission records.
    pub domains: Vec<String>,
    /// Identities whose records are crawled on every partition.
    pub users: Vec<String>,
    /// Remote fixed-event list; `None` disables fixed events entirely.
    pub events_url: Option<String>,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let data_path = env::var("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/state.json"));

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let domains = split_list(&env::var("OJ_DOMAINS").unwrap_or_else(|_| DEFAULT_DOMAINS.to_string()))
            .into_iter()
            .map(|domain| domain.trim_end_matches('/').to_string())
            .collect();

        let users = split_list(&env::var("OJ_USERS").unwrap_or_default());

        // An explicitly empty EVENTS_URL turns fixed events off.
        let events_url = match env::var("EVENTS_URL") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(value.trim().to_string()),
            Err(_) => Some(DEFAULT_EVENTS_URL.to_string()),
        };

        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self {
            data_path,
            port,
            domains,
            users,
            events_url,
            fetch_timeout,
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
