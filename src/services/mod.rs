pub mod ai_service;
pub mod car_service;
pub mod settings_service;
pub mod storage_service;
pub mod user_service;
