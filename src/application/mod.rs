/// Application configuration module
pub mod config;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
