//! Time-series chart binding.
//!
//! The controller owns the chart models (labels, datasets, axis layout) and
//! pushes redraw/resize notifications into a [`ChartSink`]. The sink is the
//! actual rendering surface; the terminal front end draws from the models,
//! and tests substitute a recording stub.

use crate::core::metrics::HistoryPayload;
use crate::error::Result;

/// Entrance animation duration for the initial draw.
pub const ANIMATION_MS: u64 = 1000;

/// Upper bound on x-axis tick labels regardless of series length.
pub const MAX_X_TICKS: usize = 10;

/// Fixed maximum for the percent axes.
pub const PERCENT_AXIS_MAX: f64 = 100.0;

/// The two charts the dashboard maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    CpuMemory,
    DiskNetwork,
}

/// How a redraw should transition.
///
/// `None` skips the entrance animation; periodic updates use it so the
/// charts never replay the initial sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    Animated,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl SeriesKind {
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Cpu => "CPU %",
            SeriesKind::Memory => "Memory %",
            SeriesKind::Disk => "Disk %",
            SeriesKind::Network => "Network MB/s",
        }
    }

    pub fn is_percent(&self) -> bool {
        !matches!(self, SeriesKind::Network)
    }

    /// Unit suffix for tooltips and tick labels.
    pub fn unit_suffix(&self) -> &'static str {
        if self.is_percent() {
            "%"
        } else {
            " MB"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// Y-axis configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub side: AxisSide,
    /// Fixed upper bound; `None` lets the axis follow the data.
    pub max: Option<f64>,
    pub tick_suffix: &'static str,
    /// Whether this axis paints gridlines across the chart area.
    pub draw_grid: bool,
}

impl AxisSpec {
    fn percent(side: AxisSide) -> Self {
        Self {
            side,
            max: Some(PERCENT_AXIS_MAX),
            tick_suffix: "%",
            draw_grid: true,
        }
    }

    fn network_right() -> Self {
        Self {
            side: AxisSide::Right,
            max: None,
            tick_suffix: " MB",
            // Two grids overlaid are unreadable; only the left axis paints
            draw_grid: false,
        }
    }
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub kind: SeriesKind,
    pub axis: AxisSide,
    pub data: Vec<f64>,
}

/// Model of one line chart: labels, series, and axis layout.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub id: ChartId,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub left_axis: AxisSpec,
    pub right_axis: Option<AxisSpec>,
    pub max_x_ticks: usize,
    pub animation_ms: u64,
}

impl LineChart {
    fn cpu_memory(history: &HistoryPayload) -> Self {
        Self {
            id: ChartId::CpuMemory,
            labels: history.timestamps.clone(),
            datasets: vec![
                Dataset {
                    kind: SeriesKind::Cpu,
                    axis: AxisSide::Left,
                    data: history.cpu.clone(),
                },
                Dataset {
                    kind: SeriesKind::Memory,
                    axis: AxisSide::Left,
                    data: history.memory.clone(),
                },
            ],
            left_axis: AxisSpec::percent(AxisSide::Left),
            right_axis: None,
            max_x_ticks: MAX_X_TICKS,
            animation_ms: ANIMATION_MS,
        }
    }

    fn disk_network(history: &HistoryPayload) -> Self {
        Self {
            id: ChartId::DiskNetwork,
            labels: history.timestamps.clone(),
            datasets: vec![
                Dataset {
                    kind: SeriesKind::Disk,
                    axis: AxisSide::Left,
                    data: history.disk.clone(),
                },
                Dataset {
                    kind: SeriesKind::Network,
                    axis: AxisSide::Right,
                    data: history.network.clone(),
                },
            ],
            left_axis: AxisSpec::percent(AxisSide::Left),
            right_axis: Some(AxisSpec::network_right()),
            max_x_ticks: MAX_X_TICKS,
            animation_ms: ANIMATION_MS,
        }
    }

    /// X-axis tick labels thinned down to at most `max_x_ticks`.
    pub fn x_tick_labels(&self) -> Vec<&str> {
        thin_labels(&self.labels, self.max_x_ticks)
    }
}

/// Pick at most `max` evenly spaced labels.
pub fn thin_labels(labels: &[String], max: usize) -> Vec<&str> {
    if max == 0 || labels.is_empty() {
        return Vec::new();
    }
    let step = labels.len().div_ceil(max);
    labels
        .iter()
        .step_by(step)
        .map(String::as_str)
        .collect()
}

/// Tooltip text for a hovered point: one decimal, unit by series identity.
pub fn tooltip_label(kind: SeriesKind, value: f64) -> String {
    format!("{}: {:.1}{}", kind.label(), value, kind.unit_suffix())
}

/// Rendering surface notifications.
pub trait ChartSink {
    fn redraw(&mut self, chart: ChartId, mode: RedrawMode);
    fn resize(&mut self, chart: ChartId);
}

/// The two chart models, live after `init`.
#[derive(Debug, Clone)]
pub struct ChartPair {
    pub cpu_memory: LineChart,
    pub disk_network: LineChart,
}

/// Owns the chart models and their lifecycle.
///
/// Held by the application, never global, so independent controllers can
/// coexist (and be tested) without shared state.
pub struct ChartController<S: ChartSink> {
    sink: S,
    charts: Option<ChartPair>,
}

impl<S: ChartSink> ChartController<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, charts: None }
    }

    /// Build both charts from a history payload and draw them with the
    /// entrance animation. Rejects misaligned payloads.
    pub fn init(&mut self, history: &HistoryPayload) -> Result<()> {
        history.validate()?;

        self.charts = Some(ChartPair {
            cpu_memory: LineChart::cpu_memory(history),
            disk_network: LineChart::disk_network(history),
        });

        self.sink.redraw(ChartId::CpuMemory, RedrawMode::Animated);
        self.sink.redraw(ChartId::DiskNetwork, RedrawMode::Animated);

        Ok(())
    }

    /// Replace both charts' labels and data in place, then redraw without
    /// animation. A controller that was never initialized ignores updates.
    pub fn update(&mut self, history: &HistoryPayload) -> Result<()> {
        history.validate()?;

        let Some(charts) = self.charts.as_mut() else {
            return Ok(());
        };

        for chart in [&mut charts.cpu_memory, &mut charts.disk_network] {
            chart.labels.clone_from(&history.timestamps);
            for dataset in &mut chart.datasets {
                let source = match dataset.kind {
                    SeriesKind::Cpu => &history.cpu,
                    SeriesKind::Memory => &history.memory,
                    SeriesKind::Disk => &history.disk,
                    SeriesKind::Network => &history.network,
                };
                dataset.data.clone_from(source);
            }
        }

        self.sink.redraw(ChartId::CpuMemory, RedrawMode::None);
        self.sink.redraw(ChartId::DiskNetwork, RedrawMode::None);

        Ok(())
    }

    /// Notify the sink that the drawing surface changed size.
    pub fn resize(&mut self) {
        if self.charts.is_some() {
            self.sink.resize(ChartId::CpuMemory);
            self.sink.resize(ChartId::DiskNetwork);
        }
    }

    /// Drop the chart models. Updates after this are ignored until the next
    /// `init`.
    pub fn dispose(&mut self) {
        self.charts = None;
    }

    pub fn charts(&self) -> Option<&ChartPair> {
        self.charts.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
