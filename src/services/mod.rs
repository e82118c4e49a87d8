pub mod balance_service;
pub mod welcome_service;
