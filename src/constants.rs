/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = concat!("wl-model/", env!("CARGO_PKG_VERSION"));
/// Default base URL of the REST API
pub const DEFAULT_BASE_URL: &str = "https://staging.wellnessliving.com";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of requests allowed per rate limit period
pub const DEFAULT_MAX_REQUESTS: u32 = 60;
/// Default rate limit period in seconds
pub const DEFAULT_PERIOD_SECONDS: u64 = 60;
/// Default number of requests that may be sent back to back
pub const DEFAULT_BURST_SIZE: u32 = 10;
/// Default number of retries on `429 Too Many Requests`
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default delay in seconds between retries
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 2;
/// Value of the `status` field of a successful API response
pub const STATUS_OK: &str = "ok";
/// Booking mode of the client-facing application (`WlBookModeSid::APP_FRONTEND`)
pub const BOOK_MODE_APP_FRONTEND: i64 = 2;
/// Format of GMT dates sent to the API (MySQL `DATETIME`)
pub const MYSQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
