//! Upstream quote providers

pub mod zenquotes;

use async_trait::async_trait;
use std::time::Duration;

// Re-export for convenience
pub use zenquotes::{decode_quote, HttpFetcher, UpstreamQuote};

/// Performs the single outbound GET for an invocation.
///
/// Implementations map transport faults and non-2xx statuses into
/// `Error::Connection` and `Error::HttpStatus` and hand back the raw
/// body of a successful exchange.
#[async_trait]
pub trait QuoteFetcher: Send + Sync
{   async fn fetch(
      &self
    , url: &str
    , timeout: Duration
    ) -> Result<Vec<u8>, crate::error::Error>;
}
