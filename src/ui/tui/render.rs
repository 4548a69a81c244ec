use std::time::Instant;

use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset as ChartDataset, GraphType, Paragraph},
};

use crate::core::status::StatusLevel;
use crate::ui::charts::{tooltip_label, AxisSide, LineChart, PERCENT_AXIS_MAX};

use super::app::DashboardApp;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),      // Status header
            Constraint::Percentage(40), // Host cards
            Constraint::Min(10),        // Charts
            Constraint::Length(1),      // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_cards(frame, chunks[1], app);
    render_charts(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let poll_str = if app.poller.is_polling() {
        format!("auto-poll {}ms", app.poller.interval().as_millis())
    } else {
        "auto-poll off".to_string()
    };

    let refreshed = app
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let filter_str = if app.filter_active {
        format!(" │ filter: {}_", app.filter)
    } else if !app.filter.is_empty() {
        format!(" │ filter: {}", app.filter)
    } else {
        String::new()
    };

    let title = format!(
        " {} │ {} │ {} │ updated {}{} ",
        app.client.base_url(),
        app.cards.status,
        poll_str,
        refreshed,
        filter_str
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if app.cards.cards.is_empty() {
        let empty = Paragraph::new(app.cards.status.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Hosts ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    // Up to four cards per row, additional hosts wrap onto further rows
    let per_row = app.cards.cards.len().min(4);
    let rows = app.cards.cards.len().div_ceil(per_row);

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row_index, row_area) in row_chunks.iter().enumerate() {
        let cards = app
            .cards
            .cards
            .iter()
            .skip(row_index * per_row)
            .take(per_row)
            .collect::<Vec<_>>();

        let card_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);

        for (card, card_area) in cards.iter().zip(card_chunks.iter()) {
            let lines = vec![
                Line::from(vec![
                    Span::styled("Last seen: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(card.last_seen.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("CPU: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(card.cpu.as_str(), level_style(card.cpu_level)),
                ]),
                Line::from(vec![
                    Span::styled("Memory: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(card.memory.as_str(), level_style(card.memory_level)),
                ]),
                Line::from(vec![
                    Span::styled("Disk: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(card.disk.as_str(), level_style(card.disk_level)),
                ]),
            ];

            let widget = Paragraph::new(lines).block(
                Block::default()
                    .title(format!(" {} ", card.title))
                    .borders(Borders::ALL),
            );
            frame.render_widget(widget, *card_area);
        }
    }
}

fn render_charts(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(charts) = app.charts.charts() else {
        let placeholder = Paragraph::new("Waiting for history data")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" History ").borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let progress = app.charts.sink().animation_progress(Instant::now());
    render_line_chart(frame, chunks[0], &charts.cpu_memory, " CPU / Memory ", progress);
    render_line_chart(
        frame,
        chunks[1],
        &charts.disk_network,
        " Disk / Network ",
        progress,
    );
}

const SERIES_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::Cyan];

fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    chart: &LineChart,
    title: &str,
    progress: f64,
) {
    let point_count = chart.labels.len();
    // During the entrance animation only a prefix of each series is drawn
    let visible = ((point_count as f64) * progress).ceil() as usize;

    // The terminal has a single drawable y-range, so right-axis series are
    // rescaled onto the percent canvas and labelled with their real peak
    let mut series_points: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut series_names: Vec<String> = Vec::new();

    for dataset in &chart.datasets {
        let scale = match dataset.axis {
            AxisSide::Left => 1.0,
            AxisSide::Right => {
                let peak = dataset.data.iter().cloned().fold(0.0_f64, f64::max);
                if peak > 0.0 {
                    PERCENT_AXIS_MAX / peak
                } else {
                    1.0
                }
            }
        };

        // Legend doubles as the readout for the latest sample; rescaled
        // series also carry their real peak so the canvas stays readable
        let name = match (dataset.data.last(), dataset.axis) {
            (Some(&last), AxisSide::Left) => tooltip_label(dataset.kind, last),
            (Some(&last), AxisSide::Right) => {
                let peak = dataset.data.iter().cloned().fold(0.0_f64, f64::max);
                format!("{} (peak {:.1})", tooltip_label(dataset.kind, last), peak)
            }
            (None, _) => dataset.kind.label().to_string(),
        };

        series_points.push(
            dataset
                .data
                .iter()
                .take(visible)
                .enumerate()
                .map(|(i, &v)| (i as f64, v * scale))
                .collect(),
        );
        series_names.push(name);
    }

    let datasets = series_points
        .iter()
        .zip(series_names.iter())
        .zip(SERIES_COLORS.iter().cycle())
        .map(|((points, name), &color)| {
            ChartDataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points)
        })
        .collect::<Vec<_>>();

    let x_labels = chart
        .x_tick_labels()
        .into_iter()
        .map(|label| Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)))
        .collect::<Vec<_>>();

    let y_suffix = chart.left_axis.tick_suffix;
    let y_labels = vec![
        Span::raw(format!("0{}", y_suffix)),
        Span::raw(format!("50{}", y_suffix)),
        Span::raw(format!("100{}", y_suffix)),
    ];

    let widget = Chart::new(datasets)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, point_count.saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, chart.left_axis.max.unwrap_or(PERCENT_AXIS_MAX)])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

fn level_style(level: Option<StatusLevel>) -> Style {
    let color = match level {
        Some(StatusLevel::Good) => Color::Green,
        Some(StatusLevel::Warning) => Color::Yellow,
        Some(StatusLevel::Danger) => Color::Red,
        None => Color::Reset,
    };
    Style::default().fg(color)
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(" q quit │ r refresh │ a auto-poll │ / filter │ ? help ")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 44.min(area.width);
    let height = 10.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let text = vec![
        Line::from("q / Esc    quit"),
        Line::from("r          refresh now"),
        Line::from("a          toggle auto-poll"),
        Line::from("/          edit filter (Enter to apply)"),
        Line::from("?          toggle this help"),
        Line::from(""),
        Line::from("Fetch errors show in the status bar and"),
        Line::from("clear on the next successful poll."),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).block(Block::default().title(" Help ").borders(Borders::ALL)),
        popup,
    );
}
