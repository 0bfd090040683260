/// Default base URL of the Balanced REST API
pub const DEFAULT_BASE_URL: &str = "https://api.balancedpayments.com/";
/// Revision of the Balanced API this client speaks
pub const API_REVISION: &str = "1.1";
/// Accept header pinned to the API revision above
pub const ACCEPT_HEADER: &str = "application/vnd.api+json;revision=1.1";
/// Content type used for JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("balanced-client/", env!("CARGO_PKG_VERSION"));
/// Largest amount, in cents, that may be credited to a card ($2,500)
pub const MAX_CARD_CREDIT_AMOUNT: i64 = 250_000;
/// Offset the server applies when a list request carries none
pub const DEFAULT_OFFSET: u32 = 0;
/// Page size the server applies when a list request carries none
pub const DEFAULT_LIMIT: u32 = 10;
/// Number of confirmation attempts a new bank account verification allows
pub const VERIFICATION_ATTEMPTS: u32 = 3;
