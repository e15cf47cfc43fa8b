use crate::config::Config;
use crate::models::{ProblemDot, StoredData};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
    pub data: Arc<Mutex<StoredData>>,
    /// Per-contest correction dots already fetched, keyed by contest link.
    /// Explicitly owned here so its reset semantics are an operation, not
    /// an accident of process lifetime.
    pub contest_cache: Arc<Mutex<HashMap<String, Vec<ProblemDot>>>>,
}

impl AppState {
    pub fn new(config: Config, client: reqwest::Client, data: StoredData) -> Self {
        Self {
            config,
            client,
            data: Arc::new(Mutex::new(data)),
            contest_cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
