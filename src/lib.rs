pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    ai_service::AiService, car_service::CarService, settings_service::SettingsService,
    storage_service::StorageService, user_service::UserService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub car_service: CarService,
    pub settings_service: SettingsService,
    pub user_service: UserService,
    pub ai_service: AiService,
    pub storage_service: StorageService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let car_service = CarService::new(pool.clone());
        let settings_service = SettingsService::new(pool.clone());
        let user_service = UserService::new(pool.clone());
        let ai_service = AiService::new(config.gemini_api_key.clone(), http_client.clone());
        let storage_service = StorageService::new(
            config.supabase_url.clone(),
            config.supabase_service_key.clone(),
            config.storage_bucket.clone(),
            http_client,
        );

        Self {
            pool,
            car_service,
            settings_service,
            user_service,
            ai_service,
            storage_service,
        }
    }
}
