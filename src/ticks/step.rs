//! Grid step selection
//!
//! The step between two ticks is always `{1, 2, 5, 10} × 10^k`.
//! It is assembled and accumulated as a decimal so that adding it many
//! times to the first tick never drifts away from the grid.
use std::fmt;

use fastnum::D128;

use super::{AxisRange, Error};

/// Round multiplier of a grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    /// `1 × 10^k`
    One,
    /// `2 × 10^k`
    Two,
    /// `5 × 10^k`
    Five,
    /// `10 × 10^k`
    Ten,
}

impl Multiplier {
    /// Snap a mantissa in `[1, 10)` to the closest round multiplier
    pub fn snap(mantissa: f64) -> Self {
        if mantissa > 7.5 {
            Multiplier::Ten
        } else if mantissa > 3.5 {
            Multiplier::Five
        } else if mantissa > 1.5 {
            Multiplier::Two
        } else {
            Multiplier::One
        }
    }

    /// The integer factor of this multiplier
    pub const fn factor(self) -> i32 {
        match self {
            Multiplier::One => 1,
            Multiplier::Two => 2,
            Multiplier::Five => 5,
            Multiplier::Ten => 10,
        }
    }
}

/// The constant difference in data value between consecutive ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridStep {
    multiplier: Multiplier,
    exponent: i32,
}

impl GridStep {
    /// Build a grid step of `multiplier × 10^exponent`
    pub const fn new(multiplier: Multiplier, exponent: i32) -> Self {
        GridStep {
            multiplier,
            exponent,
        }
    }

    /// Select the round step closest to `hint` (in data units).
    ///
    /// A zero hint yields `10`, so that tick iteration always progresses.
    pub fn from_hint(hint: f64) -> Result<Self, Error> {
        if !hint.is_finite() || hint < 0.0 {
            return Err(Error::DegenerateStep(hint));
        }
        let (mantissa, exponent) = decompose(hint);
        Ok(GridStep::new(Multiplier::snap(mantissa), exponent))
    }

    /// Select the grid step for `range` laid out over `tick_space` pixels,
    /// aiming at one tick every `step_hint` pixels.
    ///
    /// The step is never finer than twice the `f64` spacing at the range bounds,
    /// so that neighbouring ticks keep distinct values.
    pub fn for_range(range: &AxisRange, tick_space: i32, step_hint: i32) -> Result<Self, Error> {
        if tick_space <= 0 {
            return Err(Error::InvalidPixelSpace(tick_space));
        }
        if step_hint <= 0 {
            return Err(Error::InvalidStepHint(step_hint));
        }
        let span = range.span().abs();
        let scale = step_hint as f64 / tick_space as f64;
        let hint = span / tick_space as f64 * step_hint as f64;

        let mut step = if hint.is_normal() || span == 0.0 {
            GridStep::from_hint(hint)?
        } else {
            // overflow or underflow: scale the mantissa alone
            let (mantissa, exponent) = decompose(span);
            let (mantissa, shift) = decompose(mantissa * scale);
            GridStep::new(Multiplier::snap(mantissa), exponent + shift)
        };

        let resolution = 2.0 * ulp(range.min().abs().max(range.max().abs()));
        while step.value() < resolution {
            step = step.coarser();
        }
        Ok(step)
    }

    /// The next round step above this one
    pub const fn coarser(self) -> Self {
        match self.multiplier {
            Multiplier::One => GridStep::new(Multiplier::Two, self.exponent),
            Multiplier::Two => GridStep::new(Multiplier::Five, self.exponent),
            Multiplier::Five => GridStep::new(Multiplier::Ten, self.exponent),
            Multiplier::Ten => GridStep::new(Multiplier::Two, self.exponent + 1),
        }
    }

    /// The round multiplier
    pub const fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// The decimal exponent
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The exact decimal value of the step
    pub fn to_decimal(&self) -> D128 {
        D128::from(self.multiplier.factor()) * pow10(self.exponent)
    }

    /// The value of the step, rounded to the closest `f64`.
    /// Steps beyond the `f64` range are infinite.
    pub fn value(&self) -> f64 {
        to_f64(&self.to_decimal())
            .unwrap_or_else(|| self.multiplier.factor() as f64 * 10f64.powi(self.exponent))
    }
}

impl fmt::Display for GridStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}E{}", self.multiplier.factor(), self.exponent)
    }
}

/// `hint --> mantissa * 10 ** exponent`, e.g. `724.1 --> 7.241 * 10 ** 2`
fn decompose(hint: f64) -> (f64, i32) {
    if hint == 0.0 {
        return (1.0, 1);
    }
    let mut mantissa = hint;
    let mut exponent = 0;
    while mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    (mantissa, exponent)
}

fn pow10(exponent: i32) -> D128 {
    let mut value = D128::ONE;
    for _ in 0..exponent.unsigned_abs() {
        if exponent > 0 {
            value = value * D128::TEN;
        } else {
            value = value / D128::TEN;
        }
    }
    value
}

/// Decimal from the shortest representation that round-trips to `value`.
/// So `0.1` becomes exactly `0.1`, not the binary expansion of the double.
pub(super) fn decimal(value: f64) -> Option<D128> {
    if !value.is_finite() {
        return None;
    }
    format!("{value:e}").parse::<D128>().ok()
}

pub(super) fn to_f64(value: &D128) -> Option<f64> {
    value.to_string().parse::<f64>().ok()
}

/// Gap between `x` and the next `f64` towards zero, which is the widest
/// gap between two `f64` within `[-x, x]`.
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    if x == 0.0 {
        return 0.0;
    }
    x - f64::from_bits(x.to_bits() - 1)
}
