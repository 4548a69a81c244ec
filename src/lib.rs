// Hostdash Library - Public API

// Re-export error types
pub mod error;
pub use error::{DashboardError, Result};

// Module declarations
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::DashboardConfig;
pub use crate::core::metrics::{HistoryPayload, HostRecord, UsageBlock};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
