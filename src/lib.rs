#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # axistick
 * _nice ticks for chart axes_.
 *
 * axistick computes where the tick marks of a numeric chart axis go and what they read.
 * Given the data range of the axis and the number of pixels it spans, it:
 *  - selects a round grid step of the form `{1, 2, 5, 10} × 10^k`,
 *  - places ticks on multiples of that step, accumulated in exact decimal arithmetic,
 *  - maps each tick to an integer pixel offset,
 *  - formats each label in fixed-point or scientific notation depending on its magnitude.
 *
 * ```
 * use axistick::{AxisRange, compute_ticks, defaults};
 *
 * let range = AxisRange::new(-3.0, 3.0)?;
 * let ticks = compute_ticks(range, 800, defaults::TICK_MARK_STEP_HINT)?;
 *
 * let labels: Vec<&str> = ticks.labels().collect();
 * assert_eq!(labels.first(), Some(&"-3"));
 * assert_eq!(labels.last(), Some(&"3"));
 * # Ok::<(), axistick::Error>(())
 * ```
 *
 * The [`axis`] module places a tick set into the paint zone of an axis and computes
 * the geometry of the tick marks and label anchors.
 * Drawing that geometry is left to the rendering surface.
 *
 * ## Crate features
 *
 *  - `diag`: implements [`miette::Diagnostic`](https://docs.rs/miette) for [`Error`].
 *
 * ## Logging
 *
 * axistick logs through the [`log`](https://docs.rs/log) facade.
 * The selected grid step is logged at `debug` level and every tick at `trace` level.
 */

pub mod axis;
#[cfg(feature = "diag")]
mod diag;
pub mod ticks;

pub use axis::{Axis, AxisTicks, Direction};
pub use ticks::{
    AxisRange, Error, Formatter, GridStep, PixelSpace, Tick, TickPlanner, TickSet,
    compute_ticks, format_label,
};

/// Rexports of [`axistick_base::geom`]` items
pub mod geom {
    pub use axistick_base::geom::*;
}

/// Default layout parameters
pub mod defaults {
    /// Nominal pixel spacing between two ticks
    pub const TICK_MARK_STEP_HINT: i32 = 64;

    /// Length of a tick mark, in pixels
    pub const TICK_SIZE: f32 = 4.0;

    /// Space between a tick mark and its label, in pixels
    pub const TICK_LABEL_PADDING: f32 = 4.0;
}
