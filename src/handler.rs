use log::{debug, error, info};
use crate::providers::QuoteFetcher;

/// Fetches one quote per invocation and shapes the gateway response.
///
/// Holds no per-invocation state, so one handler may serve
/// concurrent invocations.
pub struct QuoteProxyHandler<F: QuoteFetcher>
{   config: crate::config::ProxyConfig
  , fetcher: F
}

impl<F: QuoteFetcher> QuoteProxyHandler<F>
{   pub fn new(
      config: crate::config::ProxyConfig
    , fetcher: F
    ) -> Self
    {   debug!("Creating QuoteProxyHandler for {}", config.api_url);
        QuoteProxyHandler
        {   config
          , fetcher
        }
    }

    pub fn config(&self) -> &crate::config::ProxyConfig
    {   &self.config
    }

    /// Run the fetch/decode pipeline, yielding a payload or a failure kind
    pub async fn fetch_quote(&self)
      -> Result<crate::QuotePayload, crate::error::Error>
    {   let body = self.fetcher
          .fetch(&self.config.api_url, self.config.timeout())
          .await?;
        let quote = crate::providers::decode_quote(&body)?;
        Ok(quote.into_payload(&self.config.source))
    }

    /// Serve one invocation. Never fails: every fault becomes a response.
    pub async fn handle(
      &self
    , _event: &crate::RequestEvent
    , context: &crate::InvocationContext
    ) -> crate::ProxyResponse
    {   debug!(
          "Handling invocation {:?}",
          context.request_id
        );
        let result = self.fetch_quote().await;
        match &result
        {   Ok(payload) => {
              info!("Served quote by {}", payload.author);
            }
          , Err(e) => {
              error!("Invocation failed: {}", e);
            }
        }
        crate::ProxyResponse::from(result)
    }
}
