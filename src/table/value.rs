//! Cell values of a record table

use std::fmt;

/// Raw cell tokens read as missing, matching the usual dataframe NA set.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell of a record table
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// Floating point value (never NaN; NaN reads as `Missing`)
    Float(f64),
    /// Free-form or categorical text
    Str(String),
    /// Absent value
    Missing,
}

impl Value {
    /// Parse a raw CSV cell: NA token, then integer, then float, then text.
    pub fn parse(raw: &str) -> Self {
        if NA_TOKENS.contains(&raw) {
            return Self::Missing;
        }
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_nan() => Self::Missing,
            Ok(f) => Self::Float(f),
            Err(_) => Self::Str(raw.to_string()),
        }
    }

    /// Build a float cell, mapping NaN to `Missing`.
    pub fn float(f: f64) -> Self {
        if f.is_nan() {
            Self::Missing
        } else {
            Self::Float(f)
        }
    }

    /// Numeric view of the cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Missing => f.write_str("NaN"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}
