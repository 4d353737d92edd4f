//! Value: the dynamically typed payload carried by node sockets.
//! Values stay weakly typed until an input's declared tag coerces them.

use serde::{Deserialize, Serialize};

/// Lightweight kind enum for convenience. Useful for pattern-matching and
/// quick dispatch without destructuring the full payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Float,
    Int,
    Bool,
    Text,
    Object,
    List,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    /// Absent value; what the host hands over for an unconnected socket.
    Null,

    /// Scalar float (the `double` socket tag)
    Float(f64),

    /// Scalar integer
    Int(i64),

    /// Boolean
    Bool(bool),

    /// Text / string; also the raw form of string-typed host properties
    Text(String),

    /// Opaque host object (geometry handle, data collection, ...). The
    /// engine passes these through without inspecting the interior.
    Object(serde_json::Value),

    /// A whole branch handed to a list-access input as one argument.
    List(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Object(_) => ValueKind::Object,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Convenience constructors
    pub fn f(v: f64) -> Self {
        Value::Float(v)
    }

    pub fn i(v: i64) -> Self {
        Value::Int(v)
    }

    pub fn text(v: impl Into<String>) -> Self {
        Value::Text(v.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Absent in the host's sense: `Null`, or the empty-string sentinel the
    /// host uses for untouched string-typed properties.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Generic truthiness, mirroring the host's conversion rules: numeric
    /// zero, empty text and empty lists are false; opaque objects are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Float(f) => *f != 0.0,
            Value::Int(i) => *i != 0,
            Value::Bool(b) => *b,
            Value::Text(s) => !s.is_empty(),
            Value::Object(_) => true,
            Value::List(items) => !items.is_empty(),
        }
    }
}
