/// Base URL of the Trading 212 live API.
pub const DEFAULT_BASE_URL: &str = "https://live.trading212.com/api/v0";

/// Endpoint path for equity order history.
pub const ORDERS_ENDPOINT: &str = "/equity/history/orders";

/// Endpoint path for dividend history.
pub const DIVIDENDS_ENDPOINT: &str = "/history/dividends";

/// Endpoint path for cash transaction history (deposits, withdrawals, interest).
pub const CASH_TRANSACTIONS_ENDPOINT: &str = "/history/transactions";

/// Page size requested from every paginated endpoint.
pub const PAGE_SIZE: u32 = 50;

/// Unconditional delay between page requests. The upstream rate limit is
/// undocumented; 200ms has proven safe for full-history pulls.
pub const RATE_LIMIT_DELAY_MS: u64 = 200;

/// Per-request deadline so a stalled connection cannot hang the run.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Output file written to the working directory, overwritten each run.
pub const OUTPUT_FILENAME: &str = "finanzblick_import_trading212.csv";

/// Counterparty label for trade rows.
pub const RECIPIENT_MARKETS: &str = "Trading 212 Markets";

/// Counterparty label for dividend rows.
pub const RECIPIENT_DIVIDENDS: &str = "Trading 212 (Dividende)";

/// Counterparty label for cash transaction rows.
pub const RECIPIENT_CASH: &str = "Trading 212 Cash";

/// Keyring service name used when credentials are not set in the environment.
pub const SECRET_SERVICE: &str = "t212-finanzblick-sync";
