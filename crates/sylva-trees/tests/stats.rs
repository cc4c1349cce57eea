use sylva_trees::stats::{GrowthStats, REPORT_INTERVAL};

#[test]
fn no_report_before_the_interval() {
    let mut stats = GrowthStats::new();
    for i in 0..REPORT_INTERVAL - 1 {
        assert!(stats.record(i % 4 == 0).is_none());
    }
    assert_eq!(stats.attempts(), REPORT_INTERVAL - 1);
}

#[test]
fn exactly_one_report_per_thousand_attempts() {
    let mut stats = GrowthStats::new();
    let mut reports = Vec::new();
    for i in 0..REPORT_INTERVAL {
        // one success in four
        if let Some(r) = stats.record(i % 4 == 0) {
            reports.push(r);
        }
    }
    assert_eq!(reports.len(), 1);
    let report = reports[0];
    assert_eq!(report.attempts, 1000);
    assert_eq!(report.successes, 250);
    assert_eq!(report.percent, 25.0);
}

#[test]
fn reports_recur_every_interval() {
    let mut stats = GrowthStats::new();
    let reports: Vec<_> = (0..REPORT_INTERVAL * 3)
        .filter_map(|_| stats.record(true))
        .collect();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[2].attempts, 3000);
    assert_eq!(reports[2].percent, 100.0);
}

#[test]
fn percent_tracks_the_running_ratio() {
    let mut stats = GrowthStats::new();
    assert_eq!(stats.percent(), 0.0);
    stats.record(true);
    stats.record(false);
    stats.record(false);
    stats.record(false);
    assert_eq!(stats.percent(), 25.0);
    assert_eq!(stats.attempts(), 4);
    assert_eq!(stats.successes(), 1);
}
