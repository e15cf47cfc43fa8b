pub mod app;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod parse;
pub mod reduce;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, persist_data};
