//! Invocation contract types for the quote proxy

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Incoming trigger payload. Only signals an invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestEvent(pub serde_json::Value);

/// Runtime information supplied by the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext
{   #[serde(default)]
    pub request_id: Option<String>
  , #[serde(default)]
    pub function_name: Option<String>
}

/// Success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePayload
{   pub quote: String
  , pub author: String
  , pub source: String
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload
{   pub error: String
}

/// HTTP-style response handed back to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse
{   pub status_code: u16
  , #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>
  , pub body: String
}

impl ProxyResponse
{   /// 200 response with JSON and permissive CORS headers
    pub fn ok(payload: &QuotePayload)
      -> Result<Self, crate::error::Error>
    {   let body = serde_json::to_string(payload)
          .map_err(|e| crate::error::Error::Server(e.to_string()))?;
        let mut headers = BTreeMap::new();
        headers.insert(
          "Content-Type".to_string()
        , "application/json".to_string()
        );
        headers.insert(
          "Access-Control-Allow-Origin".to_string()
        , "*".to_string()
        );
        Ok(ProxyResponse
        {   status_code: 200
          , headers
          , body
        })
    }

    /// Error response carrying a single `error` field
    pub fn from_error(err: &crate::error::Error) -> Self
    {   let payload = ErrorPayload { error: err.to_string() };
        let body = serde_json::to_string(&payload)
          .unwrap_or_else(|e| {
            log::error!("Failed to encode error body: {}", e);
            String::from(r#"{"error":"Server error: response encoding failed"}"#)
          });
        ProxyResponse
        {   status_code: err.status_code()
          , headers: BTreeMap::new()
          , body
        }
    }
}

impl From<Result<QuotePayload, crate::error::Error>> for ProxyResponse
{   fn from(result: Result<QuotePayload, crate::error::Error>) -> Self
    {   match result.and_then(|payload| ProxyResponse::ok(&payload))
        {   Ok(response) => response
          , Err(err) => ProxyResponse::from_error(&err)
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    #[test]
    fn success_response_keeps_field_order_and_cors()
    {   let payload = QuotePayload
        {   quote: "Stay hungry.".to_string()
          , author: "Steve Jobs".to_string()
          , source: "ZenQuotes.io".to_string()
        };
        let response = ProxyResponse::ok(&payload).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(
          response.body,
          r#"{"quote":"Stay hungry.","author":"Steve Jobs","source":"ZenQuotes.io"}"#
        );
        assert_eq!(
          response.headers.get("Access-Control-Allow-Origin"),
          Some(&"*".to_string())
        );
        assert_eq!(
          response.headers.get("Content-Type"),
          Some(&"application/json".to_string())
        );
    }

    #[test]
    fn error_response_has_no_headers()
    {   let response = ProxyResponse::from_error(&Error::InvalidJson);
        assert_eq!(response.status_code, 502);
        assert!(response.headers.is_empty());
        assert_eq!(
          response.body,
          r#"{"error":"Invalid JSON response from quotes API"}"#
        );

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["statusCode"], 502);
        assert!(wire.get("headers").is_none());
    }

    #[test]
    fn every_error_body_has_error_field()
    {   let kinds = vec![
          Error::HttpStatus { code: 429, reason: "Too Many Requests".into() }
        , Error::Connection("timed out".into())
        , Error::InvalidJson
        , Error::InvalidResponse
        , Error::Server("missing field `a`".into())
        ];
        for err in kinds
        {   let response = ProxyResponse::from_error(&err);
            let body: ErrorPayload
              = serde_json::from_str(&response.body).unwrap();
            assert_eq!(body.error, err.to_string());
            assert_eq!(response.status_code, err.status_code());
        }
    }

    #[test]
    fn event_accepts_any_json()
    {   let event: RequestEvent
          = serde_json::from_str(r#"{"httpMethod":"GET"}"#).unwrap();
        assert_eq!(event.0["httpMethod"], "GET");
        let empty: RequestEvent = serde_json::from_str("null").unwrap();
        assert!(empty.0.is_null());
    }
}
