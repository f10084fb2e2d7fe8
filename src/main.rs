use log::{debug, error};
use tokio::io::AsyncReadExt;

/// Reads an optional trigger event from stdin and prints the
/// gateway response as JSON on stdout. Logs go to stderr.
#[tokio::main]
async fn main()
{   env_logger::init();

    let mut raw = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut raw).await
    {   error!("Failed to read event from stdin: {}", e);
    }

    let event = if raw.trim().is_empty()
    {   quote_proxy::RequestEvent::default()
    } else
    {   serde_json::from_str(&raw).unwrap_or_else(|e| {
          error!("Event is not JSON, ignoring it: {}", e);
          quote_proxy::RequestEvent::default()
        })
    };
    debug!("Invocation event: {:?}", event);

    let context = quote_proxy::InvocationContext::default();
    let response = quote_proxy::get_random_quote(&event, &context).await;

    match serde_json::to_string(&response)
    {   Ok(json) => println!("{}", json)
      , Err(e) => {
          error!("Failed to encode response: {}", e);
          std::process::exit(1);
        }
    }
}
