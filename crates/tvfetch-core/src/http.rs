//! Blocking HTTP GET via libcurl.
//!
//! One request per call, no custom headers and no body. The whole response
//! is buffered in memory; test-vector files are a few MB at most.

use crate::error::FetchError;
use std::time::Duration;
use url::Url;

/// Transport knobs. The defaults set no timeout at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Option<Duration>,
    pub follow_redirects: bool,
    pub max_redirections: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            follow_redirects: true,
            max_redirections: 10,
        }
    }
}

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET and buffers the body. Transport failures are errors;
/// HTTP error statuses are not (check `Response::is_success`).
pub fn get(url: &Url, opts: &HttpOptions) -> Result<Response, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(opts.follow_redirects)?;
    if opts.follow_redirects {
        easy.max_redirections(opts.max_redirections)?;
    }
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url = %url, status, bytes = body.len(), "GET complete");
    Ok(Response { status, body })
}
