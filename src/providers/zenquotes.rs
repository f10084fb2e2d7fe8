use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use log::{debug, trace, error};
use std::time::Duration;

// ===== Wire Types =====

/// Element of the upstream JSON array. Only `q` and `a` are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamQuote
{   #[serde(rename = "q")]
    pub quote_text: String
  , #[serde(rename = "a")]
    pub author_name: String
}

impl UpstreamQuote
{   pub fn into_payload(self, source: &str) -> crate::QuotePayload
    {   crate::QuotePayload
        {   quote: self.quote_text
          , author: self.author_name
          , source: source.to_string()
        }
    }
}

/// Turn a raw upstream body into the first quote it carries.
///
/// Syntax errors are `InvalidJson`. `null`, non-arrays and empty arrays
/// are `InvalidResponse`. A first element without string `q`/`a`
/// fields, or a body that is not UTF-8, lands in the `Server` bucket.
pub fn decode_quote(body: &[u8])
  -> Result<UpstreamQuote, crate::error::Error>
{   let text = std::str::from_utf8(body).map_err(|e| {
      error!("Upstream body is not UTF-8: {}", e);
      crate::error::Error::Server(e.to_string())
    })?;
    trace!("Upstream body: {}", text);

    let value: Value = serde_json::from_str(text).map_err(|e| {
      error!("Parse error: {}", e);
      crate::error::Error::InvalidJson
    })?;

    let first = match value
    {   Value::Array(items) => items.into_iter().next()
      , _ => None
    }.ok_or_else(|| {
      error!("Upstream JSON is not a non-empty array");
      crate::error::Error::InvalidResponse
    })?;

    UpstreamQuote::deserialize(first).map_err(|e| {
      error!("Malformed quote element: {}", e);
      crate::error::Error::Server(e.to_string())
    })
}

// ===== HTTP Adapter =====

/// reqwest-backed fetcher used for real invocations
#[derive(Debug, Clone)]
pub struct HttpFetcher
{   http_client: reqwest::Client
}

impl HttpFetcher
{   pub fn new() -> Result<Self, crate::error::Error>
    {   debug!("Creating HttpFetcher");
        let http_client = reqwest::Client::builder()
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::Server(e.to_string())
          })?;
        Ok(HttpFetcher { http_client })
    }
}

#[async_trait]
impl crate::providers::QuoteFetcher for HttpFetcher
{   async fn fetch(
      &self
    , url: &str
    , timeout: Duration
    ) -> Result<Vec<u8>, crate::error::Error>
    {   debug!("GET {}", url);

        let response = self.http_client
          .get(url)
          .header("Accept", "application/json")
          .timeout(timeout)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::Connection(transport_reason(&e))
          })?;

        let status = response.status();
        trace!("Quotes API response status: {}", status);

        if !status.is_success()
        {   let reason = reason_phrase(&response);
            error!("Quotes API returned {}", status);
            return Err(crate::error::Error::HttpStatus
            {   code: status.as_u16()
              , reason
            });
        }

        let body = response.bytes().await.map_err(|e| {
          error!("Failed to read body: {}", e);
          crate::error::Error::Connection(transport_reason(&e))
        })?;

        debug!("Received {} bytes from quotes API", body.len());
        Ok(body.to_vec())
    }
}

/// Reason phrase sent by the upstream, else the standard one for the code.
fn reason_phrase(response: &reqwest::Response) -> String
{   let status = response.status();
    response.extensions()
      .get::<hyper::ext::ReasonPhrase>()
      .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
      .or_else(|| status.canonical_reason().map(str::to_string))
      .unwrap_or_else(|| "Unknown".to_string())
}

/// Innermost cause of a transport failure, e.g. "Connection refused".
fn transport_reason(err: &reqwest::Error) -> String
{   if err.is_timeout()
    {   return "timed out".to_string();
    }
    let mut cause: &dyn std::error::Error = err;
    while let Some(next) = cause.source()
    {   cause = next;
    }
    cause.to_string()
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    #[test]
    fn first_element_is_used()
    {   let body = br#"[{"q":"First","a":"One","h":"<b>"},{"q":"Second","a":"Two"}]"#;
        let quote = decode_quote(body).unwrap();
        assert_eq!(quote.quote_text, "First");
        assert_eq!(quote.author_name, "One");
    }

    #[test]
    fn empty_null_and_objects_are_invalid_responses()
    {   assert_eq!(decode_quote(b"[]"), Err(Error::InvalidResponse));
        assert_eq!(decode_quote(b"null"), Err(Error::InvalidResponse));
        assert_eq!(
          decode_quote(br#"{"q":"x","a":"y"}"#),
          Err(Error::InvalidResponse)
        );
        assert_eq!(decode_quote(b"42"), Err(Error::InvalidResponse));
    }

    #[test]
    fn syntax_errors_are_invalid_json()
    {   assert_eq!(decode_quote(b"not json"), Err(Error::InvalidJson));
        assert_eq!(decode_quote(b""), Err(Error::InvalidJson));
    }

    #[test]
    fn malformed_element_is_server_error()
    {   match decode_quote(br#"[{"a":"Anon"}]"#)
        {   Err(Error::Server(msg)) => assert!(msg.contains("`q`"))
          , other => panic!("unexpected: {:?}", other)
        }
        assert!(matches!(
          decode_quote(br#"[{"q":1,"a":"Anon"}]"#),
          Err(Error::Server(_))
        ));
        assert!(matches!(
          decode_quote(br#"["just a string"]"#),
          Err(Error::Server(_))
        ));
    }

    #[test]
    fn non_utf8_body_is_server_error()
    {   assert!(matches!(
          decode_quote(&[0xff, 0xfe, 0x5b]),
          Err(Error::Server(_))
        ));
    }

    #[test]
    fn payload_carries_source()
    {   let quote = UpstreamQuote
        {   quote_text: "Q".to_string()
          , author_name: "A".to_string()
        };
        let payload = quote.into_payload("ZenQuotes.io");
        assert_eq!(payload.source, "ZenQuotes.io");
        assert_eq!(payload.quote, "Q");
        assert_eq!(payload.author, "A");
    }
}
