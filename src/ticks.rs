//! Tick planning
//!
//! Given the data range of an axis and the number of pixels available to draw it,
//! this module selects a round grid step, places ticks on multiples of that step,
//! maps them to pixel offsets and formats their labels.
//!
//! Planning is a pure computation: a [`TickSet`] is built from scratch on every call
//! and nothing is cached between calls.
use std::fmt;

use fastnum::D128;

use crate::defaults;

mod format;
mod space;
mod step;

pub use format::{
    DECIMAL_FRACTION_DIGITS, Formatter, LabelFormatter, SCIENTIFIC_FRACTION_DIGITS, format_label,
    label_formatter,
};
pub use space::PixelSpace;
pub use step::{GridStep, Multiplier};

/// Errors that can occur during tick planning
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The range is reversed (`min > max`), not finite, or too wide to be measured
    InvalidAxisRange {
        /// Lower bound of the rejected range
        min: f64,
        /// Upper bound of the rejected range
        max: f64,
    },
    /// The pixel length of the axis is zero or negative
    InvalidPixelSpace(i32),
    /// The step hint is zero or negative
    InvalidStepHint(i32),
    /// A grid step hint that is not a finite positive number,
    /// rejected by [`GridStep::from_hint`].
    /// Planning never returns it: hints that overflow are scaled through their mantissa.
    DegenerateStep(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAxisRange { min, max } => {
                write!(f, "Invalid axis range: [{}, {}]", min, max)
            }
            Error::InvalidPixelSpace(length) => {
                write!(f, "Invalid pixel space: {} px", length)
            }
            Error::InvalidStepHint(hint) => write!(f, "Invalid step hint: {} px", hint),
            Error::DegenerateStep(hint) => write!(f, "Degenerate grid step hint: {}", hint),
        }
    }
}

impl std::error::Error for Error {}

/// The data range of an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Build a range from its bounds.
    /// `min == max` is accepted and yields a single tick.
    pub fn new(min: f64, max: f64) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(Error::InvalidAxisRange { min, max });
        }
        Ok(AxisRange { min, max })
    }

    /// The lower bound
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether both bounds are equal
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// The value halfway between the bounds
    pub fn midpoint(&self) -> f64 {
        if self.is_degenerate() {
            self.min
        } else {
            self.min + self.span() / 2.0
        }
    }
}

impl TryFrom<(f64, f64)> for AxisRange {
    type Error = Error;

    fn try_from((min, max): (f64, f64)) -> Result<Self, Self::Error> {
        AxisRange::new(min, max)
    }
}

/// A labeled mark on an axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// The data value of the tick
    pub value: f64,
    /// The pixel offset of the tick along the axis
    pub position: i32,
    /// The formatted label
    pub label: String,
}

/// The ticks of an axis for one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct TickSet {
    ticks: Vec<Tick>,
    step: Option<GridStep>,
    space: PixelSpace,
}

impl TickSet {
    /// The ticks, in ascending order of value and position
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Iterate over the ticks
    pub fn iter(&self) -> std::slice::Iter<'_, Tick> {
        self.ticks.iter()
    }

    /// Number of ticks
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Whether there is no tick at all
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Pixel offsets of the ticks
    pub fn positions(&self) -> impl Iterator<Item = i32> + '_ {
        self.ticks.iter().map(|t| t.position)
    }

    /// Labels of the ticks
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ticks.iter().map(|t| t.label.as_str())
    }

    /// Data values of the ticks
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.iter().map(|t| t.value)
    }

    /// The grid step, or `None` when a single tick was placed
    /// for a degenerate range or pixel space
    pub fn step(&self) -> Option<GridStep> {
        self.step
    }

    /// The pixel space the ticks were laid out in
    pub fn space(&self) -> PixelSpace {
        self.space
    }
}

impl IntoIterator for TickSet {
    type Item = Tick;
    type IntoIter = std::vec::IntoIter<Tick>;

    fn into_iter(self) -> Self::IntoIter {
        self.ticks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TickSet {
    type Item = &'a Tick;
    type IntoIter = std::slice::Iter<'a, Tick>;

    fn into_iter(self) -> Self::IntoIter {
        self.ticks.iter()
    }
}

/// Computes tick sets.
///
/// ```
/// use axistick::{AxisRange, TickPlanner};
///
/// let range = AxisRange::new(0.0, 100.0).unwrap();
/// let ticks = TickPlanner::new().plan(range, 640).unwrap();
///
/// assert_eq!(ticks.labels().collect::<Vec<_>>()[..3], ["0", "10", "20"]);
/// assert_eq!(ticks.positions().collect::<Vec<_>>()[..3], [0, 64, 128]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlanner {
    step_hint: i32,
    formatter: Formatter,
}

impl Default for TickPlanner {
    /// Return the default planner:
    /// - one tick every [`defaults::TICK_MARK_STEP_HINT`] pixels or so
    /// - automatic label format
    fn default() -> Self {
        TickPlanner {
            step_hint: defaults::TICK_MARK_STEP_HINT,
            formatter: Formatter::Auto,
        }
    }
}

impl TickPlanner {
    /// Returns a new `TickPlanner` with default parameters.
    /// (same as [`TickPlanner::default()`])
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new `TickPlanner` with the specified step hint (nominal pixel spacing between ticks).
    /// Hints below 2 pixels may place neighbouring ticks on the same pixel.
    pub fn with_step_hint(self, step_hint: i32) -> Self {
        Self { step_hint, ..self }
    }

    /// Returns a new `TickPlanner` with the specified label formatter
    pub fn with_formatter(self, formatter: Formatter) -> Self {
        Self { formatter, ..self }
    }

    /// The step hint in pixels
    pub fn step_hint(&self) -> i32 {
        self.step_hint
    }

    /// The label formatter
    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    /// Compute the ticks of `range` laid out over `pixel_length` pixels
    pub fn plan(&self, range: AxisRange, pixel_length: i32) -> Result<TickSet, Error> {
        let space = PixelSpace::new(pixel_length, self.step_hint)?;
        let fmt = label_formatter(&self.formatter);

        if range.is_degenerate() || space.tick_space() == 0 {
            let value = range.midpoint();
            log::debug!(
                "single tick {} for range [{}, {}] over {} px",
                value,
                range.min(),
                range.max(),
                pixel_length
            );
            return Ok(TickSet {
                ticks: vec![Tick {
                    value,
                    position: space.center(),
                    label: fmt.format_label(value),
                }],
                step: None,
                space,
            });
        }

        let step = GridStep::for_range(&range, space.tick_space(), self.step_hint)?;
        let ticks = place_ticks(&range, &space, &step, &*fmt)?;
        log::debug!(
            "grid step {} for range [{}, {}] over {} px: {} ticks",
            step,
            range.min(),
            range.max(),
            pixel_length,
            ticks.len()
        );
        Ok(TickSet {
            ticks,
            step: Some(step),
            space,
        })
    }
}

/// Compute the ticks of `range` laid out over `pixel_length` pixels,
/// with one tick every `step_hint` pixels or so, and automatic labels.
pub fn compute_ticks(range: AxisRange, pixel_length: i32, step_hint: i32) -> Result<TickSet, Error> {
    TickPlanner::new()
        .with_step_hint(step_hint)
        .plan(range, pixel_length)
}

fn place_ticks(
    range: &AxisRange,
    space: &PixelSpace,
    step: &GridStep,
    fmt: &dyn LabelFormatter,
) -> Result<Vec<Tick>, Error> {
    let invalid = || Error::InvalidAxisRange {
        min: range.min(),
        max: range.max(),
    };
    let min = step::decimal(range.min()).ok_or_else(invalid)?;
    let max = step::decimal(range.max()).ok_or_else(invalid)?;
    let grid = step.to_decimal();

    // smallest multiple of the grid step that is >= min
    let rem = min % grid;
    let first = if rem <= D128::ZERO {
        min - rem
    } else {
        min - rem + grid
    };

    let span = step::to_f64(&(max - min)).ok_or_else(invalid)?;
    let tick_space = space.tick_space();
    let mut ticks = Vec::new();
    let mut tick = first;
    while tick <= max {
        let value = step::to_f64(&tick).ok_or_else(invalid)?;
        let delta = step::to_f64(&(tick - min)).ok_or_else(invalid)?;
        let offset = (delta / span * tick_space as f64).round() as i32;
        let position = space.margin() + offset.clamp(0, tick_space);
        let label = fmt.format_label(value);
        log::trace!("tick {} at {} px", label, position);
        ticks.push(Tick {
            value,
            position,
            label,
        });
        tick = tick + grid;
    }
    Ok(ticks)
}
