use std::fmt;

/// Failure kinds for one quote proxy invocation.
/// Each kind maps to one status code and one error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Upstream answered with a non-2xx status
    HttpStatus
    {   code: u16
      , reason: String
    }
  , /// DNS, connect, TLS or timeout failure
    Connection(String)
  , /// Upstream body is not valid JSON
    InvalidJson
  , /// Upstream JSON is not a non-empty array
    InvalidResponse
  , /// Anything else (malformed element, bad encoding, client setup)
    Server(String)
}

impl Error
{   /// HTTP status code returned to the caller for this failure
    pub fn status_code(&self) -> u16
    {   match self
        {   Error::HttpStatus { code, .. } => *code
          , Error::Connection(_) => 500
          , Error::InvalidJson => 502
          , Error::InvalidResponse => 502
          , Error::Server(_) => 500
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::HttpStatus { reason, .. } => {
              write!(f, "HTTP Error: {}", reason)
            }
          , Error::Connection(reason) => {
              write!(f, "Connection error: {}", reason)
            }
          , Error::InvalidJson => {
              write!(f,
                "Invalid JSON response from quotes API"
              )
            }
          , Error::InvalidResponse => {
              write!(f, "Invalid response from quotes API")
            }
          , Error::Server(msg) => {
              write!(f, "Server error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
