//! Numeric attribute values.  A [`Number`] is always finite, and remembers the exact spelling it
//! was parsed from so that literal values like `"25.0"` are written back out unchanged.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{Error, Result};

/// A finite number, plus (optionally) the text it was written as
#[derive(Debug, Clone)]
pub struct Number {
    value: f32,
    literal: Option<String>,
}

impl Number {
    /// Creates a computed `Number`, or `None` if `value` is NaN or infinite
    pub fn new(value: f32) -> Option<Self> {
        value.is_finite().then(|| Self {
            value: without_negative_zero(value),
            literal: None,
        })
    }

    /// Parses a `Number` from text, keeping the (trimmed) text as its spelling.  Spellings which
    /// aren't valid SVG numbers (e.g. `"5."`) or which write a negative zero fall back to the
    /// computed form.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let value = trimmed.parse::<f32>().ok()?;
        if !value.is_finite() {
            return None;
        }
        let keep_spelling = is_svg_number(trimmed) && !(value == 0.0 && trimmed.starts_with('-'));
        Some(Self {
            value: without_negative_zero(value),
            literal: keep_spelling.then(|| trimmed.to_owned()),
        })
    }

    /// A number known at compile time to be finite, along with how it should be spelled
    pub(crate) fn constant(value: f32, literal: &str) -> Self {
        debug_assert!(value.is_finite());
        Self {
            value,
            literal: Some(literal.to_owned()),
        }
    }

    /// A computed number which is known to be finite (e.g. derived from other `Number`s)
    pub(crate) fn computed(value: f32) -> Self {
        debug_assert!(value.is_finite());
        Self {
            value,
            literal: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns `self` if it's `>= 0`, otherwise an [`Error::InvalidDimension`] named `name`
    pub(crate) fn non_negative(self, name: &'static str) -> Result<Self> {
        if self.value >= 0.0 {
            Ok(self)
        } else {
            Err(Error::InvalidDimension {
                name,
                value: self.to_string(),
            })
        }
    }
}

fn without_negative_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Does `s` match SVG's number grammar: `[+-]? (digits | digits? "." digits) ([eE] [+-]? digits)?`
fn is_svg_number(s: &str) -> bool {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (mantissa, exponent) = match s.find(&['e', 'E'][..]) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let is_digits = |d: &str| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || is_digits(int)) && is_digits(frac),
        None => is_digits(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |e| {
        is_digits(e.strip_prefix(&['+', '-'][..]).unwrap_or(e))
    });
    mantissa_ok && exponent_ok
}

/// Two `Number`s are equal if their values are, regardless of spelling
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<f32> for Number {
    fn eq(&self, other: &f32) -> bool {
        self.value == *other
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        f64::from(self.value) == *other
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.value),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.into_number("value")
    }
}

/// Anything which can be turned into a named [`Number`].  This lets constructors accept either
/// numbers or numeric strings, and report *which* argument was bad.
pub trait IntoNumber {
    fn into_number(self, name: &'static str) -> Result<Number>;
}

impl IntoNumber for Number {
    fn into_number(self, _name: &'static str) -> Result<Number> {
        Ok(self)
    }
}

impl IntoNumber for &Number {
    fn into_number(self, _name: &'static str) -> Result<Number> {
        Ok(self.clone())
    }
}

impl IntoNumber for f32 {
    fn into_number(self, name: &'static str) -> Result<Number> {
        Number::new(self).ok_or_else(|| Error::InvalidDimension {
            name,
            value: self.to_string(),
        })
    }
}

impl IntoNumber for f64 {
    fn into_number(self, name: &'static str) -> Result<Number> {
        // Values too large for an `f32` become infinite, and are rejected
        Number::new(self as f32).ok_or_else(|| Error::InvalidDimension {
            name,
            value: self.to_string(),
        })
    }
}

impl IntoNumber for &str {
    fn into_number(self, name: &'static str) -> Result<Number> {
        Number::parse(self).ok_or_else(|| Error::InvalidDimension {
            name,
            value: self.to_owned(),
        })
    }
}

impl IntoNumber for &String {
    fn into_number(self, name: &'static str) -> Result<Number> {
        self.as_str().into_number(name)
    }
}

impl IntoNumber for String {
    fn into_number(self, name: &'static str) -> Result<Number> {
        self.as_str().into_number(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_spelling_is_kept() {
        let n: Number = "25.0".parse().unwrap();
        assert_eq!(n.value(), 25.0);
        assert_eq!(n.to_string(), "25.0");
        assert_eq!(" 425.0 ".into_number("y").unwrap().to_string(), "425.0");
    }

    #[test]
    fn computed_numbers_use_shortest_form() {
        assert_eq!(Number::new(250.0).unwrap().to_string(), "250");
        assert_eq!(Number::new(131.25).unwrap().to_string(), "131.25");
    }

    #[test]
    fn equality_ignores_spelling() {
        assert_eq!(Number::parse("25.0").unwrap(), Number::new(25.0).unwrap());
        assert_eq!(Number::parse("1e2").unwrap(), 100.0);
    }

    #[test]
    fn non_finite_and_garbage_are_rejected() {
        assert!(Number::new(f32::NAN).is_none());
        assert!(Number::new(f32::INFINITY).is_none());
        assert!(Number::parse("NaN").is_none());
        assert!(Number::parse("").is_none());
        match "abc".into_number("width") {
            Err(Error::InvalidDimension { name, value }) => {
                assert_eq!(name, "width");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn invalid_svg_spellings_are_normalized() {
        assert_eq!(Number::parse("5.").unwrap().to_string(), "5");
        assert_eq!(Number::parse("-0").unwrap().to_string(), "0");
        assert_eq!(Number::parse("-0.0").unwrap().to_string(), "0");
        assert_eq!(Number::new(-0.0).unwrap().to_string(), "0");
        // Valid SVG spellings are kept, even when unusual
        assert_eq!(Number::parse(".5").unwrap().to_string(), ".5");
        assert_eq!(Number::parse("+3").unwrap().to_string(), "+3");
        assert_eq!(Number::parse("1E+05").unwrap().to_string(), "1E+05");
        assert_eq!(Number::parse("-2.50").unwrap().to_string(), "-2.50");
    }

    #[test]
    fn svg_number_grammar() {
        for ok in ["0", "25.0", ".5", "-1e3", "+2.5E-2"] {
            assert!(is_svg_number(ok), "{} should be valid", ok);
        }
        for bad in ["5.", ".", "", "1e", "e5", "1.2.3", "--1", "1e+"] {
            assert!(!is_svg_number(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn f64_values_are_narrowed() {
        assert_eq!(250.0f64.into_number("x").unwrap().to_string(), "250");
        assert!(1e300f64.into_number("x").is_err());
    }

    #[test]
    fn negative_sizes_are_rejected() {
        let n = Number::new(-1.0).unwrap();
        assert!(matches!(
            n.non_negative("height"),
            Err(Error::InvalidDimension { name: "height", .. })
        ));
        assert!(Number::new(0.0).unwrap().non_negative("height").is_ok());
    }
}
