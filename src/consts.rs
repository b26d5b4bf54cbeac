//! Общие константы каталога (pagination, env, empty-state).

// -------- Pagination --------
/// Default page size. Unifies the two historic values (10 and 20) on 10.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Upper bound accepted from ENV/CLI; larger values are clamped.
pub const MAX_PAGE_SIZE: usize = 1000;

// -------- Data source --------
pub const DEFAULT_DATA_FILE: &str = "scheme.json";

// -------- ENV --------
pub const ENV_PAGE_SIZE: &str = "SCHEMEDIR_PAGE_SIZE";
pub const ENV_EMPTY_POLICY: &str = "SCHEMEDIR_EMPTY_POLICY";
pub const ENV_DATA: &str = "SCHEMEDIR_DATA";

// -------- Presentation --------
pub const EMPTY_TITLE: &str = "No schemes found";
pub const EMPTY_HINT: &str = "Try adjusting your search term.";
