//! Presentation layer: formatting, card assembly, chart binding, and the
//! terminal front end.

pub mod cards;
pub mod charts;
pub mod format;
pub mod tui;

pub use cards::{outcome_to_cards, render_hosts, CardList, HostCard};
pub use charts::{ChartController, ChartSink, RedrawMode};
pub use format::{byte_format, format_bytes, PLACEHOLDER};
