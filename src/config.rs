//! Configuration for the quote proxy

use log::debug;

/// Upstream used when `QUOTES_API_URL` is not set
pub const DEFAULT_QUOTES_API_URL: &str
  = "https://zenquotes.io/api/random";

/// Environment variable overriding the upstream endpoint
pub const QUOTES_API_URL_ENV: &str = "QUOTES_API_URL";

/// Hard limit for the single upstream call
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Provider name reported in the `source` field
pub const DEFAULT_SOURCE: &str = "ZenQuotes.io";

/// Quote proxy configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig
{   /// Upstream quotes endpoint
    pub api_url: String
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Provider name attached to every quote
    pub source: String
}

impl ProxyConfig
{   /// Build a config, taking the endpoint from the environment
    pub fn from_env() -> Self
    {   Self::with_api_url(
          std::env::var(QUOTES_API_URL_ENV).ok()
        )
    }

    /// Build a config from an optional endpoint override.
    /// Empty values fall back to the default endpoint.
    pub fn with_api_url(api_url: Option<String>) -> Self
    {   let api_url = api_url
          .map(|url| url.trim().to_string())
          .filter(|url| !url.is_empty())
          .unwrap_or_else(|| DEFAULT_QUOTES_API_URL.to_string());
        debug!("Resolved quotes endpoint: {}", api_url);
        ProxyConfig
        {   api_url
          , ..ProxyConfig::default()
        }
    }

    pub fn timeout(&self) -> std::time::Duration
    {   std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProxyConfig
{   fn default() -> Self
    {   ProxyConfig
        {   api_url: DEFAULT_QUOTES_API_URL.to_string()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , source: DEFAULT_SOURCE.to_string()
        }
    }
}
