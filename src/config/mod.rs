/// Database connection and table creation
pub mod database;

/// Server and database settings from config.toml and the environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
