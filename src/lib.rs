//! Serverless proxy returning one random quote from ZenQuotes.io
//! as a JSON HTTP response.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod handler;

pub use config::ProxyConfig;
pub use error::Error;
pub use handler::QuoteProxyHandler;
pub use providers::{HttpFetcher, QuoteFetcher, UpstreamQuote};
pub use request::{
  ErrorPayload
, InvocationContext
, ProxyResponse
, QuotePayload
, RequestEvent
};

/// Platform entry point: resolve config from the environment,
/// call the quotes API once and return the gateway response.
pub async fn get_random_quote(
  event: &RequestEvent
, context: &InvocationContext
) -> ProxyResponse
{   let config = ProxyConfig::from_env();
    match HttpFetcher::new()
    {   Ok(fetcher) => {
          QuoteProxyHandler::new(config, fetcher)
            .handle(event, context)
            .await
        }
      , Err(e) => {
          log::error!("Cannot create HTTP client: {}", e);
          ProxyResponse::from_error(&e)
        }
    }
}
