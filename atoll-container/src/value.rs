use std::cmp::Ordering;
use std::fmt;

/// Element types supported by datasets and attributes.
///
/// Dataset elements are always fixed-width numerics; `Str` only occurs as an
/// attribute value or a link/attribute name operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DataType {
    Int32,
    Int64,
    UInt16,
    UInt64,
    Float32,
    Float64,
    Str,
}

impl DataType {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, DataType::Str)
    }

    /// Encoded element width in bytes. Strings have no fixed width.
    pub fn byte_width(&self) -> Option<u64> {
        match self {
            DataType::Int32 => Some(4),
            DataType::Int64 => Some(8),
            DataType::UInt16 => Some(2),
            DataType::UInt64 => Some(8),
            DataType::Float32 => Some(4),
            DataType::Float64 => Some(8),
            DataType::Str => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::UInt16 => "uint16",
            DataType::UInt64 => "uint64",
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
            DataType::Str => "string",
        };
        f.write_str(name)
    }
}

/// One typed scalar value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Datum {
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Str(String),
}

impl Datum {
    pub fn data_type(&self) -> DataType {
        match self {
            Datum::Int32(_) => DataType::Int32,
            Datum::Int64(_) => DataType::Int64,
            Datum::UInt16(_) => DataType::UInt16,
            Datum::UInt64(_) => DataType::UInt64,
            Datum::Float32(_) => DataType::Float32,
            Datum::Float64(_) => DataType::Float64,
            Datum::Str(_) => DataType::Str,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.data_type().is_numeric()
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Datum::Int32(v) => Some(*v as i128),
            Datum::Int64(v) => Some(*v as i128),
            Datum::UInt16(v) => Some(*v as i128),
            Datum::UInt64(v) => Some(*v as i128),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Int32(v) => Some(*v as f64),
            Datum::Int64(v) => Some(*v as f64),
            Datum::UInt16(v) => Some(*v as f64),
            Datum::UInt64(v) => Some(*v as f64),
            Datum::Float32(v) => Some(*v as f64),
            Datum::Float64(v) => Some(*v),
            Datum::Str(_) => None,
        }
    }

    /// Total-order comparison between two datums of compatible types.
    ///
    /// Integers compare exactly regardless of width or signedness; any float
    /// operand promotes both sides to `f64`. Strings compare byte-wise.
    /// A string/numeric pairing has no ordering and yields `None`.
    pub fn compare(&self, other: &Datum) -> Option<Ordering> {
        match (self, other) {
            (Datum::Str(a), Datum::Str(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            _ => {
                if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
                    return Some(a.cmp(&b));
                }
                let a = self.as_f64()?;
                let b = other.as_f64()?;
                a.partial_cmp(&b)
            }
        }
    }

    /// Little-endian encoding of a numeric datum, no padding.
    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Datum::Int32(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::Int64(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::UInt16(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::UInt64(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::Float32(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::Float64(v) => out.extend_from_slice(&v.to_le_bytes()),
            Datum::Str(v) => out.extend_from_slice(v.as_bytes()),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Int32(v) => write!(f, "{}", v),
            Datum::Int64(v) => write!(f, "{}", v),
            Datum::UInt16(v) => write!(f, "{}", v),
            Datum::UInt64(v) => write!(f, "{}", v),
            Datum::Float32(v) => write!(f, "{}", v),
            Datum::Float64(v) => write!(f, "{}", v),
            Datum::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Datum::Int32(v)
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Int64(v)
    }
}

impl From<u16> for Datum {
    fn from(v: u16) -> Self {
        Datum::UInt16(v)
    }
}

impl From<u64> for Datum {
    fn from(v: u64) -> Self {
        Datum::UInt64(v)
    }
}

impl From<f32> for Datum {
    fn from(v: f32) -> Self {
        Datum::Float32(v)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Float64(v)
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::Str(v.to_string())
    }
}

impl From<String> for Datum {
    fn from(v: String) -> Self {
        Datum::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_comparison_is_exact_across_widths() {
        let a = Datum::Int64(i64::MAX);
        let b = Datum::UInt64(i64::MAX as u64 + 1);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
    }

    #[test]
    fn mixed_int_float_comparison_promotes_to_f64() {
        assert_eq!(
            Datum::Int32(23).compare(&Datum::Float64(23.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Datum::Float64(21.7).compare(&Datum::Int32(22)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn string_numeric_pairs_have_no_ordering() {
        assert_eq!(Datum::Str("5".into()).compare(&Datum::Int32(5)), None);
    }

    #[test]
    fn strings_compare_byte_wise() {
        assert_eq!(
            Datum::Str("abc".into()).compare(&Datum::Str("abd".into())),
            Some(Ordering::Less)
        );
    }
}
