pub mod seed_service_errors;
