use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete page state
/// Also serves as the ViewModel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Scan state
    pub scan_state: ScanState,

    // Network-list container, one control per rendered network
    pub networks: NetworkList,

    // Key of the control the user activated
    pub selected: Option<String>,

    // UI state
    pub error_message: Option<String>,
}

impl Model {
    /// Set an error message
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Record a failed scan; nothing from the scan is rendered
    pub fn fail_scan(&mut self, error: FetchError) {
        self.error_message = Some(error.to_string());
        self.scan_state = ScanState::Failed(error);
    }
}
