pub mod car_dto;
pub mod settings_dto;
