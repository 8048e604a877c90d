use crate::config::ScanConfig;
use anyhow::{Context, Result};
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use serde::Deserialize;
use std::path::PathBuf;
use trait_variant::make;
use wifi_prov_core::types::{ApRecord, ScanResponse};

/// Source of the access point list reported by the scan endpoint
#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait ScanProvider {
    async fn scan(&self) -> Result<ScanResponse>;
}

/// On-disk scan result, `status` is optional
#[derive(Debug, Deserialize)]
struct ScanFixture {
    #[serde(default)]
    status: i32,
    ap_records: Vec<ApRecord>,
}

/// Serves a scan result from a JSON fixture file, re-read on every request
#[derive(Clone, Debug)]
pub struct FixtureScanProvider {
    path: PathBuf,
    max_list_size: usize,
}

impl FixtureScanProvider {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            path: config.fixture_path.clone(),
            max_list_size: config.max_list_size,
        }
    }
}

impl ScanProvider for FixtureScanProvider {
    async fn scan(&self) -> Result<ScanResponse> {
        let content = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read scan fixture {:?}", self.path))?;

        let fixture: ScanFixture =
            serde_json::from_slice(&content).context("failed to parse scan fixture")?;

        let mut records = fixture.ap_records;
        if records.len() > self.max_list_size {
            debug!(
                "truncating scan result from {} to {} records",
                records.len(),
                self.max_list_size
            );
            records.truncate(self.max_list_size);
        }

        Ok(ScanResponse::new(fixture.status, records))
    }
}
