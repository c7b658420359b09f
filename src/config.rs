//! Frontend Configuration
//!
//! Build-time overridable endpoints, same-origin defaults.

/// Base URL of the catalog API. Overridable at build time via the
/// `BOARDBASED_API_BASE` environment variable, falling back to a
/// same-origin `/api` prefix.
pub const API_BASE: &str = match option_env!("BOARDBASED_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Static CSV with one row per category, served alongside the app
pub const CATEGORY_CSV_URL: &str = "/boardgame.csv";

/// Quiet period before a typeahead query fires
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Page step for the grid and category results "load more"
pub const PAGE_STEP: u32 = 20;

/// Suggestions shown by the typeahead
pub const SUGGESTION_LIMIT: usize = 3;
