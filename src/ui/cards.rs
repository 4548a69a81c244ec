use crate::core::client::FetchOutcome;
use crate::core::metrics::{HostRecord, UsageBlock};
use crate::core::status::{status_level, StatusLevel};

use super::format::{byte_format, percent_suffix, PLACEHOLDER};

/// Status line when there are no records to show. Not an error state.
pub const STATUS_EMPTY: &str = "No hosts reporting yet";
/// Status line when the endpoint answered with a non-success status.
pub const STATUS_RESPONSE_FAILURE: &str = "Error fetching data";
/// Status line when the fetch failed at the network level.
pub const STATUS_TRANSPORT_FAILURE: &str = "Fetch error";

/// One rendered host card: display strings plus severity classifications
/// for the fields that have a percentage to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCard {
    pub title: String,
    pub last_seen: String,
    pub cpu: String,
    pub cpu_level: Option<StatusLevel>,
    pub memory: String,
    pub memory_level: Option<StatusLevel>,
    pub disk: String,
    pub disk_level: Option<StatusLevel>,
}

/// The full card panel: cards in display order plus the status line.
#[derive(Debug, Clone)]
pub struct CardList {
    pub cards: Vec<HostCard>,
    pub status: String,
}

impl CardList {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            status: STATUS_EMPTY.to_string(),
        }
    }

    fn failed(status: &str) -> Self {
        Self {
            cards: Vec::new(),
            status: status.to_string(),
        }
    }
}

impl Default for CardList {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build the card panel from a record list.
///
/// `None` (the payload was not a list) and the empty list both produce the
/// empty state. Records are sorted by hostname ascending in place, so the
/// caller's ordering is not preserved. The previous panel is always fully
/// replaced; there is no incremental diffing.
pub fn render_hosts(records: Option<&mut Vec<HostRecord>>) -> CardList {
    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => return CardList::empty(),
    };

    records.sort_by_key(|record| record.sort_key());

    let count = records.len();
    let status = format!(
        "Showing {} host{}",
        count,
        if count > 1 { "s" } else { "" }
    );

    CardList {
        cards: records.iter().map(build_card).collect(),
        status,
    }
}

/// Map a fetch outcome to the card panel it should display.
pub fn outcome_to_cards(outcome: FetchOutcome) -> CardList {
    match outcome {
        FetchOutcome::Records(Some(mut records)) => render_hosts(Some(&mut records)),
        FetchOutcome::Records(None) => render_hosts(None),
        FetchOutcome::ResponseFailure(_) => CardList::failed(STATUS_RESPONSE_FAILURE),
        FetchOutcome::TransportFailure(_) => CardList::failed(STATUS_TRANSPORT_FAILURE),
    }
}

fn build_card(record: &HostRecord) -> HostCard {
    let cpu = match record.cpu_percent {
        Some(percent) => format!("{}%", percent),
        None => PLACEHOLDER.to_string(),
    };

    HostCard {
        title: record
            .hostname
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        last_seen: record
            .timestamp
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        cpu,
        cpu_level: record.cpu_percent.map(|v| status_level(v, "cpu")),
        memory: usage_line(record.memory.as_ref()),
        memory_level: percent_level(record.memory.as_ref(), "memory"),
        disk: usage_line(record.disk.as_ref()),
        disk_level: percent_level(record.disk.as_ref(), "disk"),
    }
}

fn percent_level(block: Option<&UsageBlock>, kind: &str) -> Option<StatusLevel> {
    block
        .and_then(|block| block.percent)
        .map(|percent| status_level(percent, kind))
}

fn usage_line(block: Option<&UsageBlock>) -> String {
    // A missing section renders the same as a section with no fields
    let blank = UsageBlock::default();
    let block = block.unwrap_or(&blank);

    let line = format!(
        "Total: {}  Used: {}  Avail: {}  {}",
        byte_format(block.total),
        byte_format(block.used),
        byte_format(block.available),
        percent_suffix(block.percent)
    );

    line.trim_end().to_string()
}
