use axistick::defaults::{TICK_LABEL_PADDING, TICK_SIZE};
use axistick::{Axis, AxisRange, Direction, TickPlanner, geom};

use crate::assert_tick_layout;

fn paint_zone() -> geom::Rect {
    geom::Rect::from_xywh(40.0, 10.0, 600.0, 400.0).unwrap()
}

#[test]
fn x_and_y_axes_share_tick_values() {
    let range = AxisRange::new(0.0, 50.0).unwrap();
    let planner = TickPlanner::new();

    let x = Axis::new(range, Direction::X, paint_zone())
        .ticks(&planner)
        .unwrap();
    let y = Axis::new(range, Direction::Y, paint_zone())
        .ticks(&planner)
        .unwrap();

    assert_tick_layout!(x.set());
    assert_tick_layout!(y.set());

    // 600 px wide: 50 / 576 * 64 = 5.6 --> 5
    // 400 px high: 50 / 384 * 64 = 8.3 --> 10
    assert_eq!(x.set().step().map(|s| s.value()), Some(5.0));
    assert_eq!(y.set().step().map(|s| s.value()), Some(10.0));
    assert_eq!(x.set().len(), 11);
    assert_eq!(y.set().len(), 6);
}

#[test]
fn marks_stay_on_the_paint_zone_edge() {
    let zone = paint_zone();
    let range = AxisRange::new(-1.0, 1.0).unwrap();

    let x = Axis::new(range, Direction::X, zone)
        .ticks(&TickPlanner::new())
        .unwrap();
    for m in x.mark_segments(TICK_SIZE) {
        assert_eq!(m.start.y, zone.top());
        assert!(m.start.x >= zone.left() && m.start.x <= zone.right());
        assert_eq!(m.end.y - m.start.y, TICK_SIZE);
    }

    let y = Axis::new(range, Direction::Y, zone)
        .ticks(&TickPlanner::new())
        .unwrap();
    for m in y.mark_segments(TICK_SIZE) {
        assert_eq!(m.start.x, zone.right());
        assert!(m.start.y >= zone.top() && m.start.y <= zone.bottom());
        assert_eq!(m.start.x - m.end.x, TICK_SIZE);
    }
    let labels: Vec<&str> = y
        .label_anchors(TICK_SIZE, TICK_LABEL_PADDING)
        .map(|a| a.label)
        .collect();
    assert_eq!(labels.first(), Some(&"-1"));
    assert_eq!(labels.last(), Some(&"1"));
}

#[test]
fn degenerate_axis_marks_the_center() {
    let zone = paint_zone();
    let range = AxisRange::new(7.0, 7.0).unwrap();
    let x = Axis::new(range, Direction::X, zone)
        .ticks(&TickPlanner::new())
        .unwrap();
    let marks: Vec<_> = x.mark_segments(TICK_SIZE).collect();
    assert_eq!(marks.len(), 1);
    // 600 px: 12 px margins, 576 px of ticks
    assert_eq!(marks[0].start.x, zone.left() + 12.0 + 288.0);
}

#[test]
fn empty_zone_is_skipped() {
    let range = AxisRange::new(0.0, 1.0).unwrap();
    let zone = geom::Rect::from_xywh(0.0, 0.0, 0.5, 100.0).unwrap();
    let axis = Axis::new(range, Direction::X, zone);
    assert!(axis.ticks_or_skip(&TickPlanner::new()).is_none());
}
