use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// One polled snapshot of a monitored machine's metrics.
///
/// Every field is optional: agents report what they can, and the dashboard
/// substitutes a placeholder for anything missing. Records are never
/// rejected for incomplete data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostRecord {
    pub hostname: Option<String>,
    /// Last-seen time as reported by the agent. Opaque to the dashboard,
    /// displayed verbatim without parsing.
    pub timestamp: Option<String>,
    pub cpu_percent: Option<f64>,
    pub memory: Option<UsageBlock>,
    pub disk: Option<UsageBlock>,
}

/// Byte-count breakdown shared by the memory and disk sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageBlock {
    pub total: Option<u64>,
    pub used: Option<u64>,
    pub available: Option<u64>,
    pub percent: Option<f64>,
}

impl HostRecord {
    /// Sort key for the card list. Missing hostnames sort as empty string,
    /// comparison is case-insensitive.
    pub fn sort_key(&self) -> String {
        self.hostname
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
    }
}

/// Decode a JSON body into host records.
///
/// Returns `None` when the body is not an array (rendered as the empty
/// state, same as zero records). Individual elements that do not match the
/// record shape decode to an all-absent record instead of failing the list.
pub fn records_from_value(value: serde_json::Value) -> Option<Vec<HostRecord>> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return None,
    };

    Some(
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
    )
}

/// Time-aligned metric series feeding the two charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryPayload {
    pub timestamps: Vec<String>,
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
    pub network: Vec<f64>,
}

impl HistoryPayload {
    /// Number of data points (length of the timestamp axis).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Check that all five series share the timestamp axis length.
    ///
    /// A misaligned payload would silently misrender, so it is rejected
    /// before it reaches the charts.
    pub fn validate(&self) -> Result<()> {
        let n = self.timestamps.len();
        let series = [
            ("cpu", self.cpu.len()),
            ("memory", self.memory.len()),
            ("disk", self.disk.len()),
            ("network", self.network.len()),
        ];

        for (name, len) in series {
            if len != n {
                return Err(DashboardError::history(format!(
                    "series '{}' has {} points but {} timestamps",
                    name, len, n
                )));
            }
        }

        Ok(())
    }
}
