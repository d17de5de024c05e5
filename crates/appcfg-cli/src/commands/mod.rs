//! Command implementations for appcfg-cli

pub mod publish;
pub mod status_bar;

pub use publish::run_publish_config;
pub use status_bar::run_status_bar;
