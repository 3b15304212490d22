pub mod errors;
pub mod seed_service;
