use crux_core::{render::render, Command};
use log::info;

use crate::commands::navigation::credential_entry_url;
use crate::events::{Event, SelectionEvent};
use crate::model::Model;
use crate::{Effect, NavigationCmd};

/// Handle selection of a rendered network button
pub fn handle(event: SelectionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SelectionEvent::Select { key } => {
            // Only the SSID travels to the next view
            let Some(url) = model
                .networks
                .find(&key)
                .map(|control| credential_entry_url(&control.ssid))
            else {
                return model.set_error_and_render(format!("Unknown network selection: {key}"));
            };

            info!("{key} selected, redirecting to {url}");
            model.selected = Some(key);
            Command::all([render(), NavigationCmd::redirect(url)])
        }
    }
}
