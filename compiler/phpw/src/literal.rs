//! PHP literal values.
//!
//! Property initializers and default arguments are rendered the way PHP's
//! `var_export` prints scalars, so the emitted text reads back as the same
//! value.

use std::fmt;

/// A scalar PHP literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("NULL"),
            Literal::Bool(true) => f.write_str("true"),
            Literal::Bool(false) => f.write_str("false"),
            Literal::Int(value) => write!(f, "{value}"),
            Literal::Float(value) => write_float(f, *value),
            Literal::Str(value) => write_single_quoted(f, value),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NAN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "INF" } else { "-INF" })
    } else {
        // Debug keeps the `.0` on integral values so PHP reads a float back.
        let repr = format!("{value:?}");
        match repr.split_once('e') {
            Some((mantissa, exponent)) => write_exponent(f, mantissa, exponent),
            None => f.write_str(&repr),
        }
    }
}

/// `1e20` becomes `1.0E+20`, `2.5e-7` becomes `2.5E-7`.
fn write_exponent(f: &mut fmt::Formatter<'_>, mantissa: &str, exponent: &str) -> fmt::Result {
    f.write_str(mantissa)?;
    if !mantissa.contains('.') {
        f.write_str(".0")?;
    }
    match exponent.strip_prefix('-') {
        Some(digits) => write!(f, "E-{digits}"),
        None => write!(f, "E+{exponent}"),
    }
}

fn write_single_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::Float(f64::from(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(Literal::Null.to_string(), "NULL");
        assert_eq!(Literal::from(true).to_string(), "true");
        assert_eq!(Literal::from(false).to_string(), "false");
        assert_eq!(Literal::from(12).to_string(), "12");
        assert_eq!(Literal::from(-7_i64).to_string(), "-7");
    }

    #[test]
    fn floats_keep_a_fraction() {
        assert_eq!(Literal::from(1.0).to_string(), "1.0");
        assert_eq!(Literal::from(0.5).to_string(), "0.5");
        assert_eq!(Literal::from(-2.25).to_string(), "-2.25");
    }

    #[test]
    fn large_and_small_floats_use_exponent_form() {
        assert_eq!(Literal::from(1e20).to_string(), "1.0E+20");
        assert_eq!(Literal::from(1e16).to_string(), "1.0E+16");
        assert_eq!(Literal::from(1.5e300).to_string(), "1.5E+300");
        assert_eq!(Literal::from(1e-5).to_string(), "1.0E-5");
        assert_eq!(Literal::from(-2.5e-7).to_string(), "-2.5E-7");
        assert_eq!(Literal::from(0.0001).to_string(), "0.0001");
        assert_eq!(Literal::from(1e15).to_string(), "1000000000000000.0");
    }

    #[test]
    fn non_finite_floats_use_php_constants() {
        assert_eq!(Literal::from(f64::NAN).to_string(), "NAN");
        assert_eq!(Literal::from(f64::INFINITY).to_string(), "INF");
        assert_eq!(Literal::from(f64::NEG_INFINITY).to_string(), "-INF");
    }

    #[test]
    fn strings_are_single_quoted_and_escaped() {
        assert_eq!(Literal::from("foo").to_string(), "'foo'");
        assert_eq!(Literal::from("it's").to_string(), r"'it\'s'");
        assert_eq!(Literal::from(r"C:\dir").to_string(), r"'C:\\dir'");
        assert_eq!(Literal::from("$x\n").to_string(), "'$x\n'");
    }

    #[test]
    fn none_is_null() {
        assert_eq!(Literal::from(None::<i32>), Literal::Null);
        assert_eq!(Literal::from(Some("a")), Literal::Str("a".to_owned()));
    }
}
