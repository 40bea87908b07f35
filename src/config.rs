//! Request configuration for the search page fetch

use std::time::Duration;

pub const SEARCH_URL: &str = "https://www.olx.in/items/q-car-cover?isSearchCall=true";

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

pub const TIMEOUT_SECS: u64 = 10;

/// Where and how the search page is requested.
///
/// `Default` yields the browser-like header set the site expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub search_url: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

impl ScraperConfig {
    /// Replace the search page URL
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Replace the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
