//! Application configuration loading

mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingConfig, PaginationConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
