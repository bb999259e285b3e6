//! Axis tick geometry
//!
//! An [`Axis`] couples a data range with a direction and the rectangle the axis is painted in.
//! Its working space, the paint zone width for X axes or height for Y axes, is the
//! pixel length handed to the [`TickPlanner`].
//!
//! Tick offsets grow rightwards on X axes and upwards on Y axes, while surface
//! coordinates have Y low at the top.
use crate::geom::{self, Point};
use crate::ticks::{AxisRange, Error, TickPlanner, TickSet};

/// Direction of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Horizontal axis. Ticks are laid out along the paint zone width.
    #[default]
    X,
    /// Vertical axis. Ticks are laid out along the paint zone height.
    Y,
}

/// A numeric axis placed on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    range: AxisRange,
    direction: Direction,
    paint_zone: geom::Rect,
}

impl Axis {
    /// Build an axis for `range`, painted in `paint_zone`
    pub fn new(range: AxisRange, direction: Direction, paint_zone: geom::Rect) -> Self {
        Axis {
            range,
            direction,
            paint_zone,
        }
    }

    /// The data range
    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// The direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The rectangle the axis is painted in
    pub fn paint_zone(&self) -> &geom::Rect {
        &self.paint_zone
    }

    /// Number of whole pixels available along the axis
    pub fn working_space(&self) -> i32 {
        let length = match self.direction {
            Direction::X => self.paint_zone.width(),
            Direction::Y => self.paint_zone.height(),
        };
        length as i32
    }

    /// Plan the ticks of this axis
    pub fn ticks(&self, planner: &TickPlanner) -> Result<AxisTicks, Error> {
        let set = planner.plan(self.range, self.working_space())?;
        Ok(AxisTicks {
            direction: self.direction,
            paint_zone: self.paint_zone,
            set,
        })
    }

    /// Plan the ticks of this axis, or log why there are none.
    /// A failed axis is drawn without ticks rather than failing the whole chart.
    pub fn ticks_or_skip(&self, planner: &TickPlanner) -> Option<AxisTicks> {
        match self.ticks(planner) {
            Ok(ticks) => Some(ticks),
            Err(err) => {
                log::warn!("skipping ticks of {:?} axis: {}", self.direction, err);
                None
            }
        }
    }
}

/// A tick mark segment, from the axis edge of the paint zone towards the labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Point on the paint zone edge
    pub start: Point,
    /// Point towards the label
    pub end: Point,
}

/// A label and the surface point it is aligned to.
///
/// X axis labels hang centered below their anchor.
/// Y axis labels are right-aligned and vertically centered on their anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor<'a> {
    /// The anchor point
    pub anchor: Point,
    /// The label text
    pub label: &'a str,
}

/// Ticks placed into the paint zone of an axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    direction: Direction,
    paint_zone: geom::Rect,
    set: TickSet,
}

impl AxisTicks {
    /// The planned ticks
    pub fn set(&self) -> &TickSet {
        &self.set
    }

    /// Unwrap the planned ticks
    pub fn into_set(self) -> TickSet {
        self.set
    }

    /// The axis direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The axis paint zone
    pub fn paint_zone(&self) -> &geom::Rect {
        &self.paint_zone
    }

    /// Surface coordinate along the axis of a tick offset
    pub fn surface_coord(&self, position: i32) -> f32 {
        match self.direction {
            Direction::X => self.paint_zone.left() + position as f32,
            Direction::Y => self.paint_zone.bottom() - position as f32,
        }
    }

    /// One segment per tick.
    /// X marks hang down from the top of the paint zone,
    /// Y marks extend leftwards from its right edge.
    pub fn mark_segments(&self, tick_size: f32) -> impl Iterator<Item = TickMark> + '_ {
        let zone = self.paint_zone;
        self.set.iter().map(move |t| {
            let c = self.surface_coord(t.position);
            match self.direction {
                Direction::X => TickMark {
                    start: Point::from_xy(c, zone.top()),
                    end: Point::from_xy(c, zone.top() + tick_size),
                },
                Direction::Y => TickMark {
                    start: Point::from_xy(zone.right(), c),
                    end: Point::from_xy(zone.right() - tick_size, c),
                },
            }
        })
    }

    /// All tick marks as a single path, ready to be stroked.
    /// `None` if there is no tick.
    pub fn marks_path(&self, tick_size: f32) -> Option<geom::Path> {
        let n = self.set.len();
        let mut pb = geom::PathBuilder::with_capacity(2 * n, 2 * n);
        for mark in self.mark_segments(tick_size) {
            pb.move_to(mark.start.x, mark.start.y);
            pb.line_to(mark.end.x, mark.end.y);
        }
        pb.finish()
    }

    /// Anchor points of the labels, `padding` pixels past the end of the tick marks
    pub fn label_anchors(
        &self,
        tick_size: f32,
        padding: f32,
    ) -> impl Iterator<Item = LabelAnchor<'_>> + '_ {
        let zone = self.paint_zone;
        self.set.iter().map(move |t| {
            let c = self.surface_coord(t.position);
            let anchor = match self.direction {
                Direction::X => Point::from_xy(c, zone.top() + tick_size + padding),
                Direction::Y => Point::from_xy(zone.right() - tick_size - padding, c),
            };
            LabelAnchor {
                anchor,
                label: t.label.as_str(),
            }
        })
    }

    /// The smallest rectangle containing all tick marks.
    /// `None` if there is no tick.
    pub fn marks_bounds(&self, tick_size: f32) -> Option<geom::Rect> {
        self.mark_segments(tick_size)
            .filter_map(|m| geom::Rect::from_corners(m.start, m.end))
            .reduce(|a, b| geom::Rect::unite(&a, &b))
    }
}
