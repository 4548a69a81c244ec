//! Terminal User Interface for the metrics dashboard.
//!
//! Provides a real-time view of host cards and history charts using ratatui.

mod app;
mod event_handler;
mod render;

pub use app::{run_dashboard_app, DashboardApp, TerminalSink};
pub use event_handler::DashboardEvent;
