pub mod client;
pub mod config;
pub mod metrics;
pub mod poller;
pub mod status;

pub use client::{FetchOutcome, MetricsClient};
pub use config::DashboardConfig;
pub use metrics::{HistoryPayload, HostRecord, UsageBlock};
pub use poller::{PollState, Poller};
pub use status::{status_level, StatusLevel};
