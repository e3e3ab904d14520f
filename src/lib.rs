pub mod app;
pub mod config;
pub mod day;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod session;
pub mod state;
pub mod storage;
pub mod streak;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::KvStore;
