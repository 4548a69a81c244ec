use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::client::MetricsClient;
use crate::core::config::DashboardConfig;
use crate::core::poller::Poller;
use crate::ui::cards::{outcome_to_cards, CardList};
use crate::ui::charts::{ChartController, ChartId, ChartSink, RedrawMode, ANIMATION_MS};

use super::event_handler::DashboardEvent;
use super::render::render_ui;

/// Redraw cadence while the entrance animation is sweeping.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Chart sink backed by the terminal draw loop.
///
/// ratatui repaints whole frames from the chart models, so a redraw request
/// only has to track animation state: an animated redraw starts the
/// entrance sweep, a plain one leaves it alone so periodic updates never
/// replay it.
#[derive(Debug, Default)]
pub struct TerminalSink {
    animation_started: Option<Instant>,
}

impl TerminalSink {
    /// Fraction of the entrance animation completed, in `0.0..=1.0`.
    pub fn animation_progress(&self, now: Instant) -> f64 {
        match self.animation_started {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_millis() as f64;
                (elapsed / ANIMATION_MS as f64).min(1.0)
            }
            None => 1.0,
        }
    }
}

impl ChartSink for TerminalSink {
    fn redraw(&mut self, _chart: ChartId, mode: RedrawMode) {
        if mode == RedrawMode::Animated {
            self.animation_started = Some(Instant::now());
        }
    }

    fn resize(&mut self, _chart: ChartId) {
        // Frames are repainted from scratch; nothing to invalidate
    }
}

/// Dashboard application state
pub struct DashboardApp {
    pub cards: CardList,
    pub charts: ChartController<TerminalSink>,
    pub poller: Poller,
    pub client: MetricsClient,
    pub filter: String,
    pub filter_active: bool,
    pub should_quit: bool,
    pub show_help: bool,
    pub last_refresh: Option<chrono::DateTime<chrono::Local>>,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> crate::error::Result<Self> {
        Ok(Self {
            cards: CardList::empty(),
            charts: ChartController::new(TerminalSink::default()),
            poller: Poller::new(Duration::from_millis(config.poll_interval_ms)),
            client: MetricsClient::new(&config.endpoint)?,
            filter: String::new(),
            filter_active: false,
            should_quit: false,
            show_help: false,
            last_refresh: None,
        })
    }

    /// Fetch the latest snapshot and history, and rebuild the view state.
    ///
    /// Fetch failures surface as status-line text only; they never abort
    /// the app. The next poll tick retries implicitly.
    pub fn refresh(&mut self) {
        let outcome = self.client.fetch_latest();
        self.cards = outcome_to_cards(outcome);

        if let Some(history) = self.client.fetch_history() {
            let bound = if self.charts.charts().is_none() {
                self.charts.init(&history)
            } else {
                self.charts.update(&history)
            };

            if let Err(err) = bound {
                log::warn!("Discarding history payload: {}", err);
            }
        }

        self.last_refresh = Some(chrono::Local::now());
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::Refresh => self.refresh(),
            DashboardEvent::ToggleAutoPoll => {
                if self.poller.is_polling() {
                    self.poller.stop();
                } else {
                    self.poller.start(Instant::now());
                }
            }
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::FilterChar(c) => {
                // Filter edits only trigger a re-fetch; the server decides
                // what the filter means. Records are never filtered here.
                self.filter.push(c);
                self.refresh();
            }
            DashboardEvent::FilterBackspace => {
                self.filter.pop();
                self.refresh();
            }
            DashboardEvent::None => {}
        }
    }
}

/// Run the dashboard TUI application
pub fn run_dashboard_app(config: &DashboardConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, config);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &DashboardConfig,
) -> Result<()> {
    let mut app = DashboardApp::new(config).context("Failed to create dashboard")?;

    // Initial load, then arm the poll timer if enabled
    app.refresh();
    if config.auto_poll {
        app.poller.start(Instant::now());
    }

    loop {
        terminal.draw(|frame| render_ui(frame, &app))?;

        // Wait for input, but wake up in time for the next poll tick
        let now = Instant::now();
        let timeout = app
            .poller
            .time_until_due(now)
            .unwrap_or(FRAME_INTERVAL)
            .min(FRAME_INTERVAL);

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let dashboard_event = map_key(&mut app, key.code);
                    app.handle_event(dashboard_event);
                }
            }
        }

        if app.should_quit {
            break;
        }

        if app.poller.poll_due(Instant::now()) {
            app.refresh();
        }
    }

    Ok(())
}

fn map_key(app: &mut DashboardApp, code: KeyCode) -> DashboardEvent {
    if app.filter_active {
        return match code {
            KeyCode::Esc | KeyCode::Enter => {
                app.filter_active = false;
                DashboardEvent::None
            }
            KeyCode::Backspace => DashboardEvent::FilterBackspace,
            KeyCode::Char(c) => DashboardEvent::FilterChar(c),
            _ => DashboardEvent::None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
        KeyCode::Char('r') => DashboardEvent::Refresh,
        KeyCode::Char('a') => DashboardEvent::ToggleAutoPoll,
        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
        KeyCode::Char('/') => {
            app.filter_active = true;
            DashboardEvent::None
        }
        _ => DashboardEvent::None,
    }
}
