pub mod config;
pub mod error;
pub mod logger;
pub mod message;
pub mod routes;
pub mod serverless;
pub mod services;
pub mod state;
