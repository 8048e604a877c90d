pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::navigation::{
        credential_entry_url, decode_ssid_query, encode_uri_component, NavigationOperation,
    },
    events::{Event, ScanEvent, SelectionEvent, UiEvent},
    http_helpers::{
        build_url, extract_error_message, interpret_json_response, is_success_status,
        map_http_error, process_json_response, BASE_URL,
    },
    model::Model,
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Navigation(NavigationOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type NavigationCmd = crate::commands::navigation::Navigation<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
