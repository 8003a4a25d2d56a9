/// HTTP transport backed by reqwest
pub mod http;
/// Transport trait consumed by models
pub mod interface;
/// Retry configuration for HTTP requests
pub mod retry;

pub use http::HttpTransport;
pub use interface::Transport;
pub use retry::RetryConfig;
