use serde::{Deserialize, Serialize};

use crate::types::{FetchError, ScanResponse};

/// Scan domain events (fetch the list, render buttons, manual entries)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Append one button with caller-chosen values, no scan involved
    AddNew {
        ssid: String,
        auth_label: String,
        rssi: i32,
    },
    /// Shell-side deadline for the pending scan request expired
    FetchTimeout,
    #[serde(skip)]
    FetchResponse(Result<ScanResponse, FetchError>),
}

/// Selection domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A network button was activated
    Select { key: String },
}

/// UI domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page is ready
    Initialize,
    Scan(ScanEvent),
    Selection(SelectionEvent),
    Ui(UiEvent),
}
