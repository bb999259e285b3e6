use axistick::ticks::Multiplier;
use axistick::{AxisRange, Error, Formatter, GridStep, TickPlanner, compute_ticks, format_label};

use crate::{assert_tick_layout, labels, plan, positions};

#[test]
fn symmetric_range_over_800px() {
    let ticks = plan(-3.0, 3.0, 800);

    // 6 / 768 * 64 = 0.5
    assert_eq!(ticks.step(), Some(GridStep::new(Multiplier::Five, -1)));
    assert_eq!(
        labels(&ticks),
        [
            "-3", "-2.5", "-2", "-1.5", "-1", "-0.5", "0", "0.5", "1", "1.5", "2", "2.5", "3"
        ]
    );
    let pos = positions(&ticks);
    assert_eq!(pos.first(), Some(&16));
    assert_eq!(pos.last(), Some(&784));
    assert!(pos.windows(2).all(|w| w[1] - w[0] == 64));
    assert_tick_layout!(ticks);
}

#[test]
fn zero_range() {
    let ticks = plan(0.0, 0.0, 800);
    assert_eq!(labels(&ticks), ["0"]);
    assert_eq!(positions(&ticks), [400]);
}

#[test]
fn label_notation() {
    assert_eq!(format_label(0.00005), "5E-5");
    assert_eq!(format_label(42.5), "42.5");
}

#[test]
fn negative_range() {
    // 500 px: 26 px margins, 448 px of ticks
    // 990 / 448 * 64 = 141.4 --> 100
    let ticks = plan(-1000.0, -10.0, 500);
    assert_eq!(ticks.space().margin(), 26);
    assert_eq!(ticks.step(), Some(GridStep::new(Multiplier::One, 2)));
    assert_eq!(
        labels(&ticks),
        [
            "-1000", "-900", "-800", "-700", "-600", "-500", "-400", "-300", "-200", "-100"
        ]
    );
    assert_eq!(positions(&ticks)[0], 26);
    assert_tick_layout!(ticks);
}

#[test]
fn large_magnitude_uses_scientific_labels() {
    let ticks = plan(0.0, 1e6, 640);
    assert_eq!(ticks.step(), Some(GridStep::new(Multiplier::One, 5)));
    let l = labels(&ticks);
    assert_eq!(l.len(), 11);
    assert_eq!(l[..4], ["0", "1E5", "2E5", "3E5"]);
    assert_eq!(l[10], "1E6");
}

#[test]
fn offset_range_starts_on_grid() {
    // 7.3 / 640 * 64 = 0.73 --> 0.5
    let ticks = plan(100.1, 107.4, 640);
    assert_eq!(ticks.step(), Some(GridStep::new(Multiplier::Five, -1)));
    let l = labels(&ticks);
    assert_eq!(l.first(), Some(&"100.5"));
    assert_eq!(l.last(), Some(&"107"));
    assert_tick_layout!(ticks);
}

#[test]
fn forced_decimal_labels() {
    let range = AxisRange::new(0.0, 1e6).unwrap();
    let ticks = TickPlanner::new()
        .with_formatter(Formatter::Decimal(0))
        .plan(range, 640)
        .unwrap();
    assert_eq!(labels(&ticks)[..3], ["0", "100000", "200000"]);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        AxisRange::new(3.0, -3.0),
        Err(Error::InvalidAxisRange {
            min: 3.0,
            max: -3.0
        })
    );
    let range = AxisRange::new(-3.0, 3.0).unwrap();
    assert_eq!(compute_ticks(range, 0, 64), Err(Error::InvalidPixelSpace(0)));
    assert_eq!(compute_ticks(range, 800, -1), Err(Error::InvalidStepHint(-1)));
}

#[test]
fn range_narrower_than_f64_resolution() {
    // f64 values near 1e15 are 0.125 apart: the step is raised from 0.05 to 0.5
    let ticks = plan(1e15, 1e15 + 0.5, 700);
    assert_eq!(ticks.step(), Some(GridStep::new(Multiplier::Five, -1)));
    assert_eq!(positions(&ticks), [30, 670]);
    assert_tick_layout!(ticks);

    let ticks = plan(1e20, 1e20 + 65536.0, 800);
    assert_eq!(ticks.len(), 2);
    assert_tick_layout!(ticks);
}

#[test]
fn span_close_to_f64_max() {
    let range = AxisRange::new(0.0, 1.7e308).unwrap();
    let ticks = compute_ticks(range, 1, 64).expect("Should plan a huge span");
    assert_eq!(labels(&ticks), ["0"]);
    assert_tick_layout!(ticks);

    let ticks = plan(-8e307, 8e307, 800);
    assert!(!ticks.is_empty());
    assert_tick_layout!(ticks);
}

#[test]
fn narrow_pixel_space() {
    // shorter than one step hint, odd: 1 px of tick space
    let ticks = plan(0.0, 10.0, 11);
    assert_eq!(labels(&ticks), ["0"]);
    assert_eq!(positions(&ticks), [5]);

    // shorter than one step hint, even: no tick space left, single midpoint tick
    let ticks = plan(0.0, 10.0, 12);
    assert_eq!(ticks.step(), None);
    assert_eq!(labels(&ticks), ["5"]);
    assert_eq!(positions(&ticks), [6]);
}
