use crate::models::AppData;
use crate::settings::KeyValueStore;
use crate::telegram::TelegramClient;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub settings: Arc<dyn KeyValueStore>,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(
        data_path: PathBuf,
        data: AppData,
        settings: Arc<dyn KeyValueStore>,
        telegram: TelegramClient,
    ) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            settings,
            telegram,
        }
    }
}
