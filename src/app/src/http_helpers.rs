//! HTTP helper functions for Crux Core
//!
//! Response interpretation is split into a pure part working on status code
//! and body, and a thin adapter over `crux_http` results.

use crux_http::Response;
use serde::de::DeserializeOwned;

use crate::types::FetchError;

/// Base URL for device endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending requests via `fetch()`, so
/// requests stay relative to the page served by the device.
pub const BASE_URL: &str = "http://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_prov_core::http_helpers::build_url;
/// let url = build_url("/listofScannedWifiNetworks");
/// assert_eq!(url, "http://relative/listofScannedWifiNetworks");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Only a plain 200 means the device finished its scan.
pub fn is_success_status(status: u16) -> bool {
    status == 200
}

/// Describe a non-success body for the user.
pub fn extract_error_message(body: Option<&[u8]>) -> String {
    match body {
        None => "no body".to_string(),
        Some([]) => "empty body".to_string(),
        Some(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => text.trim().to_string(),
            Err(e) => format!("invalid UTF-8: {e}"),
        },
    }
}

/// Interpret a completed response: anything but 200 is "not ready", a 200 body must parse.
pub fn interpret_json_response<T: DeserializeOwned>(
    status: u16,
    body: Option<Vec<u8>>,
) -> Result<T, FetchError> {
    if !is_success_status(status) {
        return Err(FetchError::NotReady {
            status,
            message: extract_error_message(body.as_deref()),
        });
    }

    match body {
        Some(bytes) if !bytes.is_empty() => {
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Malformed {
                message: format!("JSON parse error: {e}"),
            })
        }
        _ => Err(FetchError::Malformed {
            message: "empty response body".to_string(),
        }),
    }
}

/// Map a `crux_http` error; `crux_http` reports non-2xx answers as `HttpError::Http`.
pub fn map_http_error(error: crux_http::HttpError) -> FetchError {
    match error {
        crux_http::HttpError::Http { code, body, .. } => FetchError::NotReady {
            status: u16::from(code),
            message: extract_error_message(body.as_deref()),
        },
        other => FetchError::Transport {
            message: other.to_string(),
        },
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, FetchError> {
    match result {
        Ok(mut response) => {
            let status = u16::from(response.status());
            interpret_json_response(status, response.take_body())
        }
        Err(e) => Err(map_http_error(e)),
    }
}
