use super::Error;

/// Pixel budget of an axis, split into two equal margins and the tick space.
///
/// Ticks are laid out in `[margin, margin + tick_space]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSpace {
    length: i32,
    margin: i32,
    tick_space: i32,
}

impl PixelSpace {
    /// Split `length` pixels for ticks spaced by about `step_hint` pixels.
    ///
    /// The margin takes up what is left over after fitting whole step hints,
    /// or half the length when it is shorter than a single step hint.
    pub fn new(length: i32, step_hint: i32) -> Result<Self, Error> {
        if length <= 0 {
            return Err(Error::InvalidPixelSpace(length));
        }
        if step_hint <= 0 {
            return Err(Error::InvalidStepHint(step_hint));
        }
        let margin = if length >= step_hint {
            (length % step_hint) / 2
        } else {
            length / 2
        };
        Ok(PixelSpace {
            length,
            margin,
            tick_space: length - 2 * margin,
        })
    }

    /// The total length in pixels
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// The margin on each side
    pub const fn margin(&self) -> i32 {
        self.margin
    }

    /// The usable length for ticks
    pub const fn tick_space(&self) -> i32 {
        self.tick_space
    }

    /// The middle of the tick space
    pub const fn center(&self) -> i32 {
        self.margin + self.tick_space / 2
    }
}
