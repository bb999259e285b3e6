use std::fmt;

use crate::ticks::Error;

impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Error::InvalidAxisRange { .. } => "axistick::invalid_axis_range",
            Error::InvalidPixelSpace(..) => "axistick::invalid_pixel_space",
            Error::InvalidStepHint(..) => "axistick::invalid_step_hint",
            Error::DegenerateStep(..) => "axistick::degenerate_step",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Error::InvalidAxisRange { .. } => {
                "axis bounds must be finite, with min <= max and a finite span"
            }
            Error::InvalidPixelSpace(..) => "the axis must be at least one pixel long",
            Error::InvalidStepHint(..) => "the step hint must be a positive number of pixels",
            Error::DegenerateStep(..) => "the grid step hint must be a finite, non-negative number",
        };
        Some(Box::new(help))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }
}
