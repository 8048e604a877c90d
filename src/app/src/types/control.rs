use serde::{Deserialize, Serialize};

use super::auth_mode::AuthMode;

const CONTROL_KEY_PREFIX: &str = "net-";

/// Where a rendered control came from
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ControlOrigin {
    #[default]
    Scanned,
    Manual,
}

/// One selectable network button
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedControl {
    /// Synthetic element id, unique within the page
    pub key: String,
    pub ssid: String,
    /// `None` for manual entries and unknown codes
    pub auth_mode: Option<AuthMode>,
    pub auth_label: String,
    pub rssi: i32,
    /// Visible button text
    pub label: String,
    /// Key of the first control showing the same SSID, if any
    pub duplicate_of: Option<String>,
    pub origin: ControlOrigin,
}

/// Compose the visible button text
pub fn compose_label(ssid: &str, auth_label: &str, rssi: i32) -> String {
    format!("SSID: {ssid} Authmode: {auth_label} RSSI: {rssi}")
}

/// The page's network-list container
///
/// Append-only for the lifetime of the page. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkList {
    pub controls: Vec<RenderedControl>,
    next_id: u32,
}

impl NetworkList {
    /// Append one control and return it
    pub fn append(
        &mut self,
        ssid: String,
        auth_mode: Option<AuthMode>,
        auth_label: String,
        rssi: i32,
        origin: ControlOrigin,
    ) -> &RenderedControl {
        let key = format!("{CONTROL_KEY_PREFIX}{}", self.next_id);
        self.next_id += 1;

        let duplicate_of = self
            .controls
            .iter()
            .find(|c| c.ssid == ssid)
            .map(|c| c.duplicate_of.clone().unwrap_or_else(|| c.key.clone()));

        self.controls.push(RenderedControl {
            label: compose_label(&ssid, &auth_label, rssi),
            key,
            ssid,
            auth_mode,
            auth_label,
            rssi,
            duplicate_of,
            origin,
        });

        &self.controls[self.controls.len() - 1]
    }

    pub fn find(&self, key: &str) -> Option<&RenderedControl> {
        self.controls.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn count_by_origin(&self, origin: ControlOrigin) -> usize {
        self.controls.iter().filter(|c| c.origin == origin).count()
    }
}
