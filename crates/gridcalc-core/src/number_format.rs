//! printf-style number formats
//!
//! Numbers are stored in cells as text, so the same format must be used when
//! classifying literals and when rendering expression results. The supported
//! syntax is literal text (with `%%` for a percent sign) around exactly one
//! conversion: `%[flags][width][.precision]verb`.
//!
//! - flags: `-` (left align), `+` (always print sign), space (pad positive
//!   numbers with a space), `0` (zero padding)
//! - verbs: `f`/`F` (fixed), `e`/`E` (exponent), `g`/`G` (shortest of the two)
//!
//! Precision defaults to 6 for `f` and `e`. Without a precision, `g` prints
//! the shortest digits that parse back to the same value, switching to
//! exponent form when the exponent is below -4 or at least 6. Non-finite
//! values render as `+Inf`, `-Inf`, `NaN`.

use crate::error::{Error, Result};
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

/// Format used when none is configured
pub const DEFAULT_NUMBER_FORMAT: &str = "%.2f";

const DEFAULT_PRECISION: usize = 6;

/// Exponent at which shortest `%g` output switches to exponent form
const SHORTEST_EXPONENT_LIMIT: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Fixed,
    Exponent { upper: bool },
    General { upper: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Conversion {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    verb: Verb,
}

/// A parsed printf-style number format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    source: String,
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            source: DEFAULT_NUMBER_FORMAT.to_string(),
            prefix: String::new(),
            conversion: Conversion {
                left_align: false,
                plus_sign: false,
                space_sign: false,
                zero_pad: false,
                width: 0,
                precision: Some(2),
                verb: Verb::Fixed,
            },
            suffix: String::new(),
        }
    }
}

impl NumberFormat {
    /// Parse a format string
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::NumberFormat;
    ///
    /// let fmt = NumberFormat::parse("%.3f").unwrap();
    /// assert_eq!(fmt.format(1.5), "1.500");
    ///
    /// let fmt = NumberFormat::parse("%08.2f%%").unwrap();
    /// assert_eq!(fmt.format(-3.14159), "-0003.14%");
    ///
    /// assert!(NumberFormat::parse("%d").is_err());
    /// ```
    pub fn parse(format: &str) -> Result<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion: Option<Conversion> = None;
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if c == '%' {
                if chars.peek() == Some(&'%') {
                    chars.next();
                    '%'
                } else {
                    if conversion.is_some() {
                        return Err(Error::number_format(format, "more than one conversion"));
                    }
                    conversion = Some(Self::parse_conversion(format, &mut chars)?);
                    continue;
                }
            } else {
                c
            };

            if conversion.is_some() {
                suffix.push(literal);
            } else {
                prefix.push(literal);
            }
        }

        let conversion =
            conversion.ok_or_else(|| Error::number_format(format, "no conversion verb"))?;

        Ok(Self {
            source: format.to_string(),
            prefix,
            conversion,
            suffix,
        })
    }

    fn parse_conversion(format: &str, chars: &mut Peekable<Chars<'_>>) -> Result<Conversion> {
        let mut left_align = false;
        let mut plus_sign = false;
        let mut space_sign = false;
        let mut zero_pad = false;

        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => left_align = true,
                '+' => plus_sign = true,
                ' ' => space_sign = true,
                '0' => zero_pad = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_number(format, chars)?.unwrap_or(0);

        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            // "%.f" means precision 0, as in C
            Some(take_number(format, chars)?.unwrap_or(0))
        } else {
            None
        };

        let verb = match chars.next() {
            Some('f') | Some('F') => Verb::Fixed,
            Some('e') => Verb::Exponent { upper: false },
            Some('E') => Verb::Exponent { upper: true },
            Some('g') => Verb::General { upper: false },
            Some('G') => Verb::General { upper: true },
            Some(other) => {
                return Err(Error::number_format(
                    format,
                    format!("unsupported verb '{}'", other),
                ))
            }
            None => return Err(Error::number_format(format, "incomplete conversion")),
        };

        Ok(Conversion {
            left_align,
            plus_sign,
            space_sign,
            zero_pad,
            width,
            precision,
            verb,
        })
    }

    /// The format string this was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a number
    pub fn format(&self, value: f64) -> String {
        let conv = &self.conversion;

        let (sign, digits) = if value.is_nan() {
            ("", "NaN".to_string())
        } else if value.is_infinite() {
            (if value < 0.0 { "-" } else { "+" }, "Inf".to_string())
        } else {
            let sign = if value.is_sign_negative() {
                "-"
            } else if conv.plus_sign {
                "+"
            } else if conv.space_sign {
                " "
            } else {
                ""
            };
            (sign, render(conv.verb, value.abs(), conv.precision))
        };

        let len = sign.len() + digits.len();
        let fill = conv.width.saturating_sub(len);

        let body = if fill == 0 {
            format!("{}{}", sign, digits)
        } else if conv.left_align {
            format!("{}{}{}", sign, digits, " ".repeat(fill))
        } else if conv.zero_pad && value.is_finite() {
            format!("{}{}{}", sign, "0".repeat(fill), digits)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, digits)
        };

        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for NumberFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn take_number(format: &str, chars: &mut Peekable<Chars<'_>>) -> Result<Option<usize>> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }

    if digits.is_empty() {
        return Ok(None);
    }

    digits
        .parse()
        .map(Some)
        .map_err(|_| Error::number_format(format, format!("number '{}' too large", digits)))
}

/// Render a non-negative finite value
fn render(verb: Verb, value: f64, precision: Option<usize>) -> String {
    match verb {
        Verb::Fixed => format!("{:.*}", precision.unwrap_or(DEFAULT_PRECISION), value),
        Verb::Exponent { upper } => {
            render_exponent(value, precision.unwrap_or(DEFAULT_PRECISION), upper)
        }
        Verb::General { upper } => render_general(value, precision, upper),
    }
}

/// C-style exponent notation: at least two exponent digits, explicit sign
fn render_exponent(value: f64, precision: usize, upper: bool) -> String {
    let rendered = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = split_exponent(&rendered);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exponent.unsigned_abs())
}

fn render_general(value: f64, precision: Option<usize>, upper: bool) -> String {
    let (scientific, limit) = match precision {
        Some(precision) => {
            let precision = precision.max(1);
            (format!("{:.*e}", precision - 1, value), precision as i32)
        }
        None => (format!("{:e}", value), SHORTEST_EXPONENT_LIMIT),
    };
    let (mantissa, exponent) = split_exponent(&scientific);

    if exponent < -4 || exponent >= limit {
        let marker = if upper { 'E' } else { 'e' };
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}{}{}{:02}",
            trim_fraction(mantissa),
            marker,
            sign,
            exponent.unsigned_abs()
        );
    }

    match precision {
        Some(precision) => {
            let decimals = (precision.max(1) as i32 - 1 - exponent).max(0) as usize;
            trim_fraction(&format!("{:.*}", decimals, value)).to_string()
        }
        // Display never uses exponent notation and keeps the shortest digits
        None => value.to_string(),
    }
}

fn split_exponent(rendered: &str) -> (&str, i32) {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_two_decimals() {
        assert_eq!(NumberFormat::default(), NumberFormat::parse("%.2f").unwrap());
        assert_eq!(NumberFormat::default().format(3.0), "3.00");
        assert_eq!(NumberFormat::default().format(-1.005e3), "-1005.00");
        assert_eq!(NumberFormat::default().as_str(), "%.2f");
    }

    #[test]
    fn test_fixed() {
        let fmt = NumberFormat::parse("%f").unwrap();
        assert_eq!(fmt.format(1.5), "1.500000");

        let fmt = NumberFormat::parse("%.0f").unwrap();
        assert_eq!(fmt.format(2.4), "2");

        let fmt = NumberFormat::parse("%.f").unwrap();
        assert_eq!(fmt.format(7.0), "7");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(NumberFormat::parse("%8.2f").unwrap().format(3.5), "    3.50");
        assert_eq!(NumberFormat::parse("%-8.2f|").unwrap().format(3.5), "3.50    |");
        assert_eq!(NumberFormat::parse("%08.2f").unwrap().format(-3.5), "-0003.50");
        assert_eq!(NumberFormat::parse("%+.1f").unwrap().format(2.0), "+2.0");
        assert_eq!(NumberFormat::parse("% .1f").unwrap().format(2.0), " 2.0");
        assert_eq!(NumberFormat::parse("%+.1f").unwrap().format(-2.0), "-2.0");
    }

    #[test]
    fn test_literal_text() {
        let fmt = NumberFormat::parse("$%.2f USD").unwrap();
        assert_eq!(fmt.format(12.0), "$12.00 USD");

        let fmt = NumberFormat::parse("%.1f%%").unwrap();
        assert_eq!(fmt.format(50.0), "50.0%");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(NumberFormat::parse("%e").unwrap().format(12345.678), "1.234568e+04");
        assert_eq!(NumberFormat::parse("%.2E").unwrap().format(0.00012), "1.20E-04");
        assert_eq!(NumberFormat::parse("%.1e").unwrap().format(0.0), "0.0e+00");
        assert_eq!(NumberFormat::parse("%.0e").unwrap().format(-5e100), "-5e+100");
    }

    #[test]
    fn test_general() {
        let fmt = NumberFormat::parse("%.3G").unwrap();
        assert_eq!(fmt.format(3.14159), "3.14");
        assert_eq!(fmt.format(31415.9), "3.14E+04");
        assert_eq!(fmt.format(1.0), "1");

        let fmt = NumberFormat::parse("%.6g").unwrap();
        assert_eq!(fmt.format(1234567.0), "1.23457e+06");
        assert_eq!(fmt.format(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_general_shortest() {
        let fmt = NumberFormat::parse("%g").unwrap();
        assert_eq!(fmt.format(100.0), "100");
        assert_eq!(fmt.format(0.5), "0.5");
        assert_eq!(fmt.format(0.0), "0");
        assert_eq!(fmt.format(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(fmt.format(123456.0), "123456");
        assert_eq!(fmt.format(1234567.0), "1.234567e+06");
        assert_eq!(fmt.format(1e6), "1e+06");
        assert_eq!(fmt.format(0.0001), "0.0001");
        assert_eq!(fmt.format(0.00001), "1e-05");
        assert_eq!(fmt.format(-2.5e-7), "-2.5e-07");
        assert_eq!(NumberFormat::parse("%G").unwrap().format(1234567.0), "1.234567E+06");
    }

    #[test]
    fn test_non_finite() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(f64::INFINITY), "+Inf");
        assert_eq!(fmt.format(f64::NEG_INFINITY), "-Inf");
        assert_eq!(fmt.format(f64::NAN), "NaN");

        // No zero padding for non-finite values
        assert_eq!(NumberFormat::parse("%06.1f").unwrap().format(f64::NAN), "   NaN");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "abc", "%", "%d", "%s", "%.2f %.2f", "%5", "%99999999999999999999999f"] {
            let err = NumberFormat::parse(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidNumberFormat { .. }),
                "expected InvalidNumberFormat for {:?}",
                bad
            );
        }
    }

    proptest! {
        #[test]
        fn prop_fixed_round_trip(value in -1.0e9f64..1.0e9f64) {
            let rendered = NumberFormat::default().format(value);
            let parsed: f64 = rendered.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 0.005 + value.abs() * 1e-12);
        }

        #[test]
        fn prop_exponent_round_trip(value in -1.0e30f64..1.0e30f64) {
            let fmt = NumberFormat::parse("%.8e").unwrap();
            let parsed: f64 = fmt.format(value).parse().unwrap();
            prop_assert!((parsed - value).abs() <= value.abs() * 1e-8);
        }

        #[test]
        fn prop_shortest_general_is_exact(value in -1.0e30f64..1.0e30f64) {
            let fmt = NumberFormat::parse("%g").unwrap();
            let parsed: f64 = fmt.format(value).parse().unwrap();
            prop_assert_eq!(parsed, value);
        }

        #[test]
        fn prop_rendering_is_stable(value in -1.0e9f64..1.0e9f64) {
            let fmt = NumberFormat::default();
            let once = fmt.format(value);
            let twice = fmt.format(once.parse().unwrap());
            prop_assert_eq!(once, twice);
        }
    }
}
