pub mod car;
pub mod dealership;
pub mod user;
pub mod working_hour;
