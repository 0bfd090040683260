/// Entry point handing out every resource service
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing one service implementation per resource family
pub mod services;
