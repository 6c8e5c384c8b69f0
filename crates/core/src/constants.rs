/// Origin of the public tronalddump.io API
pub const DEFAULT_BASE_URL: &str = "https://api.tronalddump.io";

/// Product token sent in the `User-Agent` header
pub const USER_AGENT_PRODUCT: &str = "tronalddump-io/client-rust";

/// Wire format of quote timestamps (`yyyy-MM-dd'T'HH:mm:ss`, no zone, no fraction)
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default page number for searches
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for searches
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const TAGS_PATH: &str = "/tags";
pub const QUOTE_PATH: &str = "/quote";
pub const RANDOM_QUOTE_PATH: &str = "/random/quote";
pub const SEARCH_QUOTE_PATH: &str = "/search/quote";
