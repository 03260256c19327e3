use std::fmt::Display;

/// Fractional digits kept when rendering a real number.
const REAL_PRECISION: usize = 4;

/// Represents numeric values written into a PDF document.
///
/// PDF supports two types of numeric values:
/// - Integer values (signed 64-bit integers)
/// - Real values (IEEE double-precision floating-point numbers)
///
/// # Rendering
/// Integers are written in plain decimal. Reals are written with at most
/// four fractional digits; trailing zeros and a dangling decimal point are
/// dropped, so `14.4` stays `14.4` and `595.0` becomes `595`.
///
/// # Examples
/// 42              // Integer
/// -17             // Negative integer
/// 3.14            // Real number
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Numeric {
    /// An integer value stored as a 64-bit signed integer.
    Integer(i64),
    /// A real (floating-point) value stored as IEEE double-precision (64-bit).
    Real(f64),
}

impl Numeric {
    /// Returns the value as a float regardless of its kind.
    pub fn as_f64(&self) -> f64 {
        match self {
            Numeric::Integer(value) => *value as f64,
            Numeric::Real(value) => *value,
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{value}"),
            Numeric::Real(value) => {
                let rendered = format!("{:.*}", REAL_PRECISION, value);
                let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

                match rendered {
                    "-0" | "" => f.write_str("0"),
                    _ => f.write_str(rendered),
                }
            }
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Integer(value.into())
    }
}

impl From<usize> for Numeric {
    fn from(value: usize) -> Self {
        Numeric::Integer(value as i64)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Real(value)
    }
}
