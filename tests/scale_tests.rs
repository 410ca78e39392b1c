use biotimeline::render::scale::{RANGE_END, RANGE_START, TimeScale};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_domain_start_maps_to_range_start() {
    let scale = TimeScale::new(d(1928, 5, 30), d(2019, 3, 29));
    assert_eq!(scale.map(d(1928, 5, 30)), RANGE_START);
}

#[test]
fn test_domain_end_maps_to_range_end() {
    let scale = TimeScale::new(d(1928, 5, 30), d(2019, 3, 29));
    assert_eq!(scale.map(d(2019, 3, 29)), RANGE_END);
}

#[test]
fn test_midpoint_maps_to_range_center() {
    // 20-day domain, exact midpoint
    let scale = TimeScale::new(d(2000, 1, 1), d(2000, 1, 21));
    let x = scale.map(d(2000, 1, 11));
    assert_eq!(x, (RANGE_START + RANGE_END) / 2.0);
}

#[test]
fn test_interior_dates_stay_inside_the_range() {
    let scale = TimeScale::new(d(1947, 3, 25), d(2026, 8, 5));
    for date in [d(1947, 3, 26), d(1990, 1, 1), d(2010, 12, 31), d(2026, 8, 4)] {
        let x = scale.map(date);
        assert!(x > RANGE_START && x < RANGE_END, "x = {x} for {date}");
    }
}

#[test]
fn test_mapping_is_monotonic() {
    let scale = TimeScale::new(d(1947, 3, 25), d(2026, 8, 5));
    assert!(scale.map(d(1960, 1, 1)) < scale.map(d(1990, 1, 1)));
    assert!(scale.map(d(1990, 1, 1)) < scale.map(d(2020, 1, 1)));
}

#[test]
fn test_degenerate_domain_maps_to_left_edge() {
    let scale = TimeScale::new(d(2000, 1, 1), d(2000, 1, 1));
    assert_eq!(scale.map(d(2000, 1, 1)), RANGE_START);
}

#[test]
fn test_ticks_count_and_bounds() {
    let scale = TimeScale::new(d(1928, 5, 30), d(2019, 3, 29));
    let ticks = scale.ticks(10);

    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks.first().unwrap().x, RANGE_START);
    assert_eq!(ticks.last().unwrap().x, RANGE_END);
    assert_eq!(ticks.first().unwrap().label, "1928");
    assert_eq!(ticks.last().unwrap().label, "2019");
}

#[test]
fn test_ticks_are_evenly_spaced() {
    let scale = TimeScale::new(d(1900, 1, 1), d(2000, 1, 1));
    let ticks = scale.ticks(10);

    let step = (RANGE_END - RANGE_START) / 9.0;
    for (i, pair) in ticks.windows(2).enumerate() {
        let gap = pair[1].x - pair[0].x;
        assert!((gap - step).abs() < 1e-9, "gap {} at index {}", gap, i);
    }
}
