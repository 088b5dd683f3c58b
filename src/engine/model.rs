use std::fmt;

use serde::{Deserialize, Serialize};

/// A possibly-absent numeric input to a two-operand arithmetic call.
///
/// The engine reports absent and non-finite operands through the same
/// validation error, so the absent case is modelled explicitly rather than
/// left to the caller: `None` renders as the literal text `missing` in error
/// messages, while present values render through `f64`'s display (`inf`,
/// `-inf`, and `NaN` for the non-finite ones).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operand(Option<f64>);

impl Operand {
    /// The absent operand.
    pub const MISSING: Operand = Operand(None);

    /// Returns the inner value when it is present and finite.
    pub fn finite(self) -> Option<f64> {
        self.0.filter(|value| value.is_finite())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand(Some(value))
    }
}

impl From<Option<f64>> for Operand {
    fn from(value: Option<f64>) -> Self {
        Operand(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("missing"),
        }
    }
}

/// Value accepted by the result persistence operation.
///
/// The write path only needs a stable textual form, so the accepted inputs
/// form a closed set instead of an open dynamic type. Structured values are
/// carried as JSON and render in `serde_json`'s compact notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ResultValue {
    /// Numeric result.
    Number(f64),
    /// Plain text result.
    Text(String),
    /// Structured result rendered as compact JSON.
    Json(serde_json::Value),
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Number(value)
    }
}

impl From<i64> for ResultValue {
    fn from(value: i64) -> Self {
        ResultValue::Number(value as f64)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Text(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        ResultValue::Text(value)
    }
}

impl From<serde_json::Value> for ResultValue {
    fn from(value: serde_json::Value) -> Self {
        ResultValue::Json(value)
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(value) => write!(f, "{value}"),
            ResultValue::Text(value) => f.write_str(value),
            ResultValue::Json(value) => write!(f, "{value}"),
        }
    }
}
