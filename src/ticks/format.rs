//! Tick label formatting
//!
//! The automatic format picks fixed-point notation for ordinary magnitudes
//! and scientific notation for tiny or huge ones.
use std::fmt::Debug;

/// Fractional digits of the fixed-point notation
pub const DECIMAL_FRACTION_DIGITS: usize = 11;
/// Fractional digits of the scientific notation mantissa
pub const SCIENTIFIC_FRACTION_DIGITS: usize = 3;

/// Magnitudes strictly between these bounds are printed in fixed-point notation
const FIXED_RANGE: (f64, f64) = (0.0001, 9999.0);

/// Selects how tick labels are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    /// Fixed-point or scientific, depending on the magnitude of each value
    #[default]
    Auto,
    /// Fixed-point with at most the given number of fractional digits
    Decimal(usize),
    /// Scientific with at most the given number of fractional digits in the mantissa
    Scientific(usize),
}

/// Formats a tick value into its label
pub trait LabelFormatter: Debug + Send + Sync {
    /// Format `value`
    fn format_label(&self, value: f64) -> String;
}

/// Build the label formatter described by `formatter`
pub fn label_formatter(formatter: &Formatter) -> Box<dyn LabelFormatter> {
    match *formatter {
        Formatter::Auto => Box::new(AutoLabelFormat),
        Formatter::Decimal(digits) => Box::new(DecimalLabelFormat(digits)),
        Formatter::Scientific(digits) => Box::new(SciLabelFormat(digits)),
    }
}

/// Format `value` with the automatic rule.
///
/// ```
/// assert_eq!(axistick::format_label(42.5), "42.5");
/// assert_eq!(axistick::format_label(0.00005), "5E-5");
/// assert_eq!(axistick::format_label(0.0), "0");
/// ```
pub fn format_label(value: f64) -> String {
    AutoLabelFormat.format_label(value)
}

#[derive(Debug, Clone, Copy)]
struct AutoLabelFormat;

impl LabelFormatter for AutoLabelFormat {
    fn format_label(&self, value: f64) -> String {
        let abs = value.abs();
        if value == 0.0 || (abs > FIXED_RANGE.0 && abs < FIXED_RANGE.1) {
            DecimalLabelFormat(DECIMAL_FRACTION_DIGITS).format_label(value)
        } else {
            SciLabelFormat(SCIENTIFIC_FRACTION_DIGITS).format_label(value)
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DecimalLabelFormat(usize);

impl LabelFormatter for DecimalLabelFormat {
    fn format_label(&self, value: f64) -> String {
        let label = format!("{value:.*}", self.0);
        match trim_fraction(&label) {
            "-0" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SciLabelFormat(usize);

impl LabelFormatter for SciLabelFormat {
    fn format_label(&self, value: f64) -> String {
        let label = format!("{value:.*e}", self.0);
        match label.split_once('e') {
            Some((mantissa, exp)) => format!("{}E{}", trim_fraction(mantissa), exp),
            None => label,
        }
    }
}

fn trim_fraction(num: &str) -> &str {
    if num.contains('.') {
        num.trim_end_matches('0').trim_end_matches('.')
    } else {
        num
    }
}
