//! Navigation command definitions.
//!
//! The Core cannot touch `window.location`; it asks the Shell to redirect.

use crux_core::{capability::Operation, Command};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Credential-entry view that receives the selected network
pub const CREDENTIAL_ENTRY_PATH: &str = "password.html";

/// Query parameter carrying the selected SSID
pub const SSID_QUERY_PARAM: &str = "ssid";

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// Operations that the Shell needs to perform for navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationOperation {
    /// Replace the current page with `url`
    Redirect { url: String },
}

impl Operation for NavigationOperation {
    type Output = ();
}

/// Command-based navigation API
pub struct Navigation<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Navigation<Effect, Event>
where
    Effect: Send + From<crux_core::Request<NavigationOperation>> + 'static,
    Event: Send + 'static,
{
    /// Redirect the page; nothing comes back since the page is replaced
    pub fn redirect(url: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(NavigationOperation::Redirect { url: url.into() }).into()
    }
}

/// Percent-encode exactly like JavaScript's `encodeURIComponent`
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Destination of a selection: credential-entry view with the SSID attached
pub fn credential_entry_url(ssid: &str) -> String {
    format!(
        "{CREDENTIAL_ENTRY_PATH}?{SSID_QUERY_PARAM}={}",
        encode_uri_component(ssid)
    )
}

/// Recover the SSID from the credential-entry query string.
///
/// Accepts the query with or without its leading `?`. `+` is kept literal
/// since the encoder never produces it for a space.
pub fn decode_ssid_query(query: &str) -> Option<String> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SSID_QUERY_PARAM)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
}
