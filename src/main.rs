use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use hostdash::core::client::MetricsClient;
use hostdash::ui::cards::outcome_to_cards;
use hostdash::ui::tui::run_dashboard_app;
use hostdash::DashboardConfig;

fn main() -> Result<()> {
    hostdash::init_logging();

    let matches = Command::new("hostdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for multi-host system metrics")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Metrics endpoint base URL"),
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .value_parser(clap::value_parser!(u64))
                .help("Poll interval in milliseconds"),
        )
        .arg(
            Arg::new("no-auto-poll")
                .long("no-auto-poll")
                .action(ArgAction::SetTrue)
                .help("Start with the poll timer disabled"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .action(ArgAction::SetTrue)
                .help("Fetch one snapshot, print the cards, and exit"),
        )
        .get_matches();

    // CLI flags override the persisted configuration
    let mut config = DashboardConfig::load().unwrap_or_default();
    if let Some(url) = matches.get_one::<String>("url") {
        config.endpoint = url.clone();
    }
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.poll_interval_ms = *interval;
    }
    if matches.get_flag("no-auto-poll") {
        config.auto_poll = false;
    }

    if matches.get_flag("once") {
        return print_once(&config);
    }

    run_dashboard_app(&config)
}

/// One-shot mode: fetch, print the card panel to stdout, exit.
fn print_once(config: &DashboardConfig) -> Result<()> {
    let client = MetricsClient::new(&config.endpoint)?;
    let list = outcome_to_cards(client.fetch_latest());

    println!("{}", list.status);
    for card in &list.cards {
        println!();
        println!("{}", card.title);
        println!("  Last seen: {}", card.last_seen);
        println!("  CPU: {}", card.cpu);
        println!("  Memory: {}", card.memory);
        println!("  Disk: {}", card.disk);
    }

    Ok(())
}
