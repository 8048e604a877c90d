mod scan;
mod selection;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Page ready: the one scan of this page load
        Event::Initialize => scan::fetch(model),

        Event::Scan(scan_event) => scan::handle(scan_event, model),
        Event::Selection(selection_event) => selection::handle(selection_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
