use hostdash::ui::charts::{ChartController, ChartId, ChartSink, RedrawMode, MAX_X_TICKS};
use hostdash::HistoryPayload;

/// Stub rendering sink that records every call it receives.
#[derive(Default)]
struct RecordingSink {
    redraws: Vec<(ChartId, RedrawMode)>,
    resizes: Vec<ChartId>,
}

impl ChartSink for RecordingSink {
    fn redraw(&mut self, chart: ChartId, mode: RedrawMode) {
        self.redraws.push((chart, mode));
    }

    fn resize(&mut self, chart: ChartId) {
        self.resizes.push(chart);
    }
}

fn history(n: usize) -> HistoryPayload {
    HistoryPayload {
        timestamps: (0..n).map(|i| format!("12:{:02}", i % 60)).collect(),
        cpu: (0..n).map(|i| i as f64).collect(),
        memory: vec![40.0; n],
        disk: vec![60.0; n],
        network: vec![2.5; n],
    }
}

#[test]
fn test_periodic_update_never_replays_entrance_animation() {
    let mut controller = ChartController::new(RecordingSink::default());
    controller.init(&history(10)).unwrap();

    controller.update(&history(11)).unwrap();
    controller.update(&history(12)).unwrap();

    let modes: Vec<_> = controller.sink().redraws.iter().map(|(_, m)| *m).collect();
    assert_eq!(
        modes,
        vec![
            RedrawMode::Animated,
            RedrawMode::Animated,
            RedrawMode::None,
            RedrawMode::None,
            RedrawMode::None,
            RedrawMode::None,
        ]
    );
}

#[test]
fn test_update_rebinds_labels_and_all_four_series() {
    let mut controller = ChartController::new(RecordingSink::default());
    controller.init(&history(5)).unwrap();

    let next = history(8);
    controller.update(&next).unwrap();

    let charts = controller.charts().unwrap();
    assert_eq!(charts.cpu_memory.labels, next.timestamps);
    assert_eq!(charts.cpu_memory.datasets[0].data, next.cpu);
    assert_eq!(charts.cpu_memory.datasets[1].data, next.memory);
    assert_eq!(charts.disk_network.labels, next.timestamps);
    assert_eq!(charts.disk_network.datasets[0].data, next.disk);
    assert_eq!(charts.disk_network.datasets[1].data, next.network);
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let mut first = ChartController::new(RecordingSink::default());
    let mut second = ChartController::new(RecordingSink::default());

    first.init(&history(4)).unwrap();
    second.update(&history(4)).unwrap();

    assert!(first.charts().is_some());
    assert!(second.charts().is_none());
    assert!(second.sink().redraws.is_empty());
}

#[test]
fn test_misaligned_series_fail_fast() {
    let mut controller = ChartController::new(RecordingSink::default());
    controller.init(&history(6)).unwrap();

    let mut bad = history(6);
    bad.memory.truncate(3);

    let err = controller.update(&bad).unwrap_err();
    assert!(err.to_string().contains("memory"));

    // The charts keep their previous, consistent data
    let charts = controller.charts().unwrap();
    assert_eq!(charts.cpu_memory.labels.len(), 6);
}

#[test]
fn test_x_tick_cap_holds_for_long_series() {
    let mut controller = ChartController::new(RecordingSink::default());
    controller.init(&history(500)).unwrap();

    let charts = controller.charts().unwrap();
    assert!(charts.cpu_memory.x_tick_labels().len() <= MAX_X_TICKS);
    assert!(charts.disk_network.x_tick_labels().len() <= MAX_X_TICKS);
}

#[test]
fn test_dispose_then_update_is_inert() {
    let mut controller = ChartController::new(RecordingSink::default());
    controller.init(&history(3)).unwrap();
    controller.dispose();

    controller.update(&history(4)).unwrap();
    assert!(controller.charts().is_none());
}
