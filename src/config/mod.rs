mod app_config;

pub use app_config::{AppConfig, DirectoryConfig, LogFormat, LoggingConfig, StoreConfig};
