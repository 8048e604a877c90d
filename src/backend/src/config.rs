use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// Application configuration loaded from environment variables at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// Scan source configuration
    pub scan: ScanConfig,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub port: u16,
    /// Directory holding `index.html`, `password.html` and static assets
    pub dist_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// JSON file with the access point records to report
    pub fixture_path: PathBuf,
    /// Upper bound on records in one response
    pub max_list_size: usize,
}

impl AppConfig {
    /// Load and validate all configuration from environment variables
    pub fn load() -> Result<Self> {
        Ok(Self {
            ui: UiConfig::load()?,
            scan: ScanConfig::load()?,
        })
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let port = env::var("UI_PORT")
            .unwrap_or_else(|_| "80".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        let dist_dir = env::var("UI_DIST_DIR")
            .unwrap_or_else(|_| "./dist".to_string())
            .into();

        Ok(Self { port, dist_dir })
    }
}

impl ScanConfig {
    pub const DEFAULT_MAX_LIST_SIZE: usize = 10;

    fn load() -> Result<Self> {
        let fixture_path = env::var("SCAN_FIXTURE_PATH")
            .unwrap_or_else(|_| "./scan.json".to_string())
            .into();

        let max_list_size = match env::var("MAX_SCAN_LIST_SIZE") {
            Ok(value) => value
                .parse::<usize>()
                .context("failed to parse MAX_SCAN_LIST_SIZE: invalid format")?,
            Err(_) => Self::DEFAULT_MAX_LIST_SIZE,
        };

        anyhow::ensure!(
            max_list_size > 0,
            "failed to load MAX_SCAN_LIST_SIZE: must be at least 1"
        );

        Ok(Self {
            fixture_path,
            max_list_size,
        })
    }
}
