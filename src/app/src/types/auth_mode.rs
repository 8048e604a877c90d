use serde_repr::{Deserialize_repr, Serialize_repr};

/// Placeholder shown for security codes outside the known table
pub const UNKNOWN_AUTH_LABEL: &str = "UNKNOWN";

/// Security class reported by the scan endpoint as a small integer
#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AuthMode {
    Open = 0,
    Wep = 1,
    WpaPsk = 2,
    Wpa2Psk = 3,
    WpaWpa2Psk = 4,
    Wpa2Enterprise = 5,
    Wpa3Enterprise = 6,
    Wpa3Psk = 7,
    Wpa2Wpa3Psk = 8,
    WapiPsk = 9,
    Owe = 10,
    Wpa3EntSuiteB192Bit = 11,
    Wpa3PskExtKey = 12,
    Wpa3PskMixedExtKey = 13,
    Max = 14,
}

impl AuthMode {
    const ALL: [AuthMode; 15] = [
        AuthMode::Open,
        AuthMode::Wep,
        AuthMode::WpaPsk,
        AuthMode::Wpa2Psk,
        AuthMode::WpaWpa2Psk,
        AuthMode::Wpa2Enterprise,
        AuthMode::Wpa3Enterprise,
        AuthMode::Wpa3Psk,
        AuthMode::Wpa2Wpa3Psk,
        AuthMode::WapiPsk,
        AuthMode::Owe,
        AuthMode::Wpa3EntSuiteB192Bit,
        AuthMode::Wpa3PskExtKey,
        AuthMode::Wpa3PskMixedExtKey,
        AuthMode::Max,
    ];

    /// Look up the security class for a raw code; `None` outside 0..=14
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    #[cfg(test)]
    fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable label; both EAP codes share one label
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Open => "OPEN",
            AuthMode::Wep => "WEP",
            AuthMode::WpaPsk => "WPA_PSK",
            AuthMode::Wpa2Psk => "WPA2_PSK",
            AuthMode::WpaWpa2Psk => "WPA_WPA2_PSK",
            AuthMode::Wpa2Enterprise | AuthMode::Wpa3Enterprise => "Wifi EAP Security",
            AuthMode::Wpa3Psk => "WPA3_PSK",
            AuthMode::Wpa2Wpa3Psk => "WPA2_WPA3_PSK",
            AuthMode::WapiPsk => "WAPI_PSK",
            AuthMode::Owe => "OWE",
            AuthMode::Wpa3EntSuiteB192Bit => "WPA3_ENT_SUITE_B_192_BIT",
            AuthMode::Wpa3PskExtKey => "WPA3_PSK_EXT_KEY",
            AuthMode::Wpa3PskMixedExtKey => "WPA3_PSK + WPA3_PSK_EXT_KEY",
            AuthMode::Max => "MAX",
        }
    }
}

/// Resolve a raw security code straight to its display label
pub fn resolve_auth_label(code: i64) -> Option<&'static str> {
    AuthMode::from_code(code).map(AuthMode::label)
}
