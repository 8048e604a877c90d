//! Scan endpoint wire format and the validated scan result
//!
//! The device answers `POST /listofScannedWifiNetworks` with
//! `{"status": .., "ap_count": N, "ap_records": [..]}`. The wire types keep
//! the field names of that payload; [`ScanResult`] is what the rest of the
//! core works with once the payload has been checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint path of the access point list
pub const SCAN_ENDPOINT: &str = "/listofScannedWifiNetworks";

/// Literal request body; the endpoint ignores it
pub const SCAN_REQUEST_MARKER: &str = "listofScannedWifiNetworks";

/// One access point as reported by the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApRecord {
    pub ssid: String,
    pub rssi: i32,
    pub authmode: i64,
}

/// Raw response body of the scan endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResponse {
    /// Device-side connection status, informational only
    #[serde(default)]
    pub status: i32,
    pub ap_count: u32,
    pub ap_records: Vec<ApRecord>,
}

impl ScanResponse {
    /// Build a well-formed response, keeping `ap_count` in sync with the records
    pub fn new(status: i32, ap_records: Vec<ApRecord>) -> Self {
        Self {
            status,
            ap_count: ap_records.len() as u32,
            ap_records,
        }
    }
}

/// A discovered network, immutable once parsed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkRecord {
    pub ssid: String,
    pub auth_code: i64,
    pub rssi: i32,
}

impl From<ApRecord> for NetworkRecord {
    fn from(record: ApRecord) -> Self {
        Self {
            ssid: record.ssid,
            auth_code: record.authmode,
            rssi: record.rssi,
        }
    }
}

/// Validated scan result, records in endpoint report order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    pub records: Vec<NetworkRecord>,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<ScanResponse> for ScanResult {
    type Error = FetchError;

    fn try_from(response: ScanResponse) -> Result<Self, Self::Error> {
        let received = response.ap_records.len() as u32;
        if response.ap_count != received {
            return Err(FetchError::CountMismatch {
                declared: response.ap_count,
                received,
            });
        }

        Ok(Self {
            records: response
                .ap_records
                .into_iter()
                .map(NetworkRecord::from)
                .collect(),
        })
    }
}

/// Why a scan produced no network list
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FetchError {
    #[error("could not reach the device: {message}")]
    Transport { message: String },
    #[error("device is not ready: HTTP {status} ({message})")]
    NotReady { status: u16, message: String },
    #[error("device sent an unreadable network list: {message}")]
    Malformed { message: String },
    #[error("device announced {declared} networks but listed {received}")]
    CountMismatch { declared: u32, received: u32 },
    #[error("device did not answer in time")]
    TimedOut,
}

/// Progress of the one scan a page performs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScanState {
    #[default]
    Idle,
    Loading,
    Loaded {
        count: u32,
    },
    /// Scan succeeded but no network is in range
    Empty,
    Failed(FetchError),
}

impl ScanState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScanState::Loading)
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        !matches!(self, ScanState::Idle | ScanState::Loading)
    }
}
