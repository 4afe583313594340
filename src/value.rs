use std::fmt;

/// A value that can be written with [`Storage::set_item`](crate::Storage::set_item).
///
/// The store only ever holds strings. Every variant is turned into text with
/// the same rule a browser store applies to primitives:
///
/// * strings are kept verbatim
/// * booleans become `true` / `false`
/// * integers are written in decimal
/// * floats: `NaN`, `Infinity` and `-Infinity` for non-finite values,
///   otherwise the shortest round-trip digits, in fixed notation when the
///   decimal exponent is between -7 and 20 (`42.0` is `"42"`, `-0.0` is
///   `"0"`, `1e-6` is `"0.000001"`) and exponent notation outside it
///   (`1e21` is `"1e+21"`, `1e-7` is `"1e-7"`)
/// * null becomes `null`
///
/// Objects and arrays are not representable here. Structured
/// data goes through [`StorageExt::populate`](crate::StorageExt::populate).
#[derive(Clone, Debug, PartialEq)]
pub enum StorageValue {
    String(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Null,
}

impl StorageValue {
    /// Consume the value, returning the text that gets stored.
    pub fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for StorageValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::UInt(n) => write!(f, "{}", n),
            Self::Float(n) => write_float(f, *n),
            Self::Null => f.write_str("null"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // Covers -0.0 as well
    if n == 0.0 {
        return f.write_str("0");
    }
    if n < 0.0 {
        f.write_str("-")?;
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e20"
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return f.write_str(&sci),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

    // Position of the decimal point relative to the first digit
    let k = digits.len() as i32;
    let point = exp + 1;

    if k <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", first, sign, exp.abs())
        } else {
            write!(f, "{}.{}e{}{}", first, rest, sign, exp.abs())
        }
    }
}

impl From<String> for StorageValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for StorageValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<&String> for StorageValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<char> for StorageValue {
    fn from(c: char) -> Self {
        Self::String(c.to_string())
    }
}

impl From<bool> for StorageValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for StorageValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

macro_rules! from_int {
    ($variant:ident, $wide:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for StorageValue {
                fn from(n: $ty) -> Self {
                    Self::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

from_int!(Int, i64, i8, i16, i32);
from_int!(UInt, u64, u8, u16, u32);

impl From<i64> for StorageValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for StorageValue {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

// isize and usize are at most 64 bits wide
impl From<isize> for StorageValue {
    fn from(n: isize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<usize> for StorageValue {
    fn from(n: usize) -> Self {
        Self::UInt(n as u64)
    }
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
