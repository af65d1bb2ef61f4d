pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod settings;
pub mod state;
pub mod stats;
pub mod storage;
pub mod telegram;

pub use app::router;
pub use config::Config;
pub use settings::{FileStore, KeyValueStore, MemoryStore, load_settings, save_settings};
pub use state::AppState;
pub use storage::load_data;
pub use telegram::TelegramClient;
