//! Coercion from raw socket values to an input's declared type tag.
//!
//! The rules reproduce the host's casting behaviour: the empty string is the
//! "absent" sentinel and is substituted with the declared default before any
//! conversion, boolean tags accept the literal `"True"`/`"1"`/`"False"`/`"0"`
//! spellings before falling back to generic truthiness, and numeric tags
//! fail hard on unparseable input instead of guessing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// The declared coercion target of an input socket.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Text,
    Object,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoercionError {
    #[error("cannot parse {raw:?} as an integer")]
    ParseInt { raw: String },

    #[error("cannot parse {raw:?} as a float")]
    ParseFloat { raw: String },

    #[error("missing value for required {tag:?} input")]
    Missing { tag: TypeTag },
}

/// Coerce `raw` to `tag`, substituting `default` when `raw` is absent.
///
/// Absent means `Null` or the empty-string sentinel. A `Null` that survives
/// substitution becomes `false` under a bool tag, an error under numeric
/// tags, and passes through under text/object tags. Pure function.
pub fn coerce(raw: &Value, tag: TypeTag, default: Option<&Value>) -> Result<Value, CoercionError> {
    let value = if raw.is_absent() {
        default.unwrap_or(&Value::Null)
    } else {
        raw
    };

    if value.is_null() {
        return match tag {
            TypeTag::Bool => Ok(Value::Bool(false)),
            TypeTag::Int | TypeTag::Float => Err(CoercionError::Missing { tag }),
            TypeTag::Text | TypeTag::Object => Ok(Value::Null),
        };
    }

    match tag {
        TypeTag::Bool => Ok(Value::Bool(to_bool(value))),
        TypeTag::Int => to_int(value).map(Value::Int),
        TypeTag::Float => to_float(value).map(Value::Float),
        TypeTag::Text | TypeTag::Object => Ok(value.clone()),
    }
}

/// Boolean conversion: literal spellings first, generic truthiness after.
fn to_bool(value: &Value) -> bool {
    if let Value::Text(s) = value {
        match s.as_str() {
            "True" | "1" => return true,
            "False" | "0" => return false,
            _ => {}
        }
    }
    value.is_truthy()
}

fn to_int(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Int(i) => Ok(*i),
        // Truncation toward zero, matching the host's int() on floats.
        Value::Float(f) => Ok(f.trunc() as i64),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Text(s) => s.trim().parse::<i64>().map_err(|_| CoercionError::ParseInt {
            raw: s.clone(),
        }),
        other => Err(CoercionError::ParseInt {
            raw: format!("{other:?}"),
        }),
    }
}

fn to_float(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Int(i) => Ok(*i as f64),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CoercionError::ParseFloat { raw: s.clone() }),
        other => Err(CoercionError::ParseFloat {
            raw: format!("{other:?}"),
        }),
    }
}
