use hostdash::ui::cards::{render_hosts, STATUS_EMPTY};
use hostdash::ui::PLACEHOLDER;
use hostdash::{HostRecord, UsageBlock};

fn named(hostname: &str) -> HostRecord {
    HostRecord {
        hostname: Some(hostname.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_empty_input_is_a_valid_state_not_an_error() {
    let list = render_hosts(None);
    assert_eq!(list.status, STATUS_EMPTY);
    assert!(list.cards.is_empty());

    let mut no_records = Vec::new();
    let list = render_hosts(Some(&mut no_records));
    assert_eq!(list.status, STATUS_EMPTY);
    assert!(list.cards.is_empty());
}

#[test]
fn test_cards_render_in_ascending_hostname_order() {
    let mut records = vec![named("b"), named("a")];
    let list = render_hosts(Some(&mut records));

    let titles: Vec<_> = list.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["a", "b"]);
}

#[test]
fn test_sort_is_case_insensitive() {
    let mut records = vec![named("Zulu"), named("alpha"), named("Mike")];
    let list = render_hosts(Some(&mut records));

    let titles: Vec<_> = list.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["alpha", "Mike", "Zulu"]);
}

#[test]
fn test_sort_mutates_the_callers_vector() {
    let mut records = vec![named("b"), named("a")];
    render_hosts(Some(&mut records));

    // In-place sort: callers must not assume input order is preserved
    assert_eq!(records[0].hostname.as_deref(), Some("a"));
}

#[test]
fn test_singular_and_plural_status_wording() {
    let mut one = vec![named("only")];
    assert_eq!(render_hosts(Some(&mut one)).status, "Showing 1 host");

    let mut three = vec![named("a"), named("b"), named("c")];
    assert_eq!(render_hosts(Some(&mut three)).status, "Showing 3 hosts");
}

#[test]
fn test_partial_record_degrades_per_field() {
    let mut records = vec![HostRecord {
        hostname: Some("db-1".into()),
        timestamp: None,
        cpu_percent: None,
        memory: Some(UsageBlock {
            total: Some(1536),
            used: None,
            available: None,
            percent: None,
        }),
        disk: None,
    }];

    let list = render_hosts(Some(&mut records));
    let card = &list.cards[0];

    assert_eq!(card.title, "db-1");
    assert_eq!(card.last_seen, PLACEHOLDER);
    assert_eq!(card.cpu, PLACEHOLDER);
    // Present fields format, absent fields fall back, percent suffix drops
    assert_eq!(
        card.memory,
        format!("Total: 1.50 KB  Used: {p}  Avail: {p}", p = PLACEHOLDER)
    );
    assert_eq!(
        card.disk,
        format!("Total: {p}  Used: {p}  Avail: {p}", p = PLACEHOLDER)
    );
}

#[test]
fn test_numeric_zero_is_rendered_not_placeholdered() {
    let mut records = vec![HostRecord {
        hostname: Some("idle".into()),
        cpu_percent: Some(0.0),
        memory: Some(UsageBlock {
            total: Some(0),
            used: Some(0),
            available: Some(0),
            percent: Some(0.0),
        }),
        ..Default::default()
    }];

    let list = render_hosts(Some(&mut records));
    let card = &list.cards[0];

    assert_eq!(card.cpu, "0%");
    assert_eq!(card.memory, "Total: 0 B  Used: 0 B  Avail: 0 B  0%");
}
