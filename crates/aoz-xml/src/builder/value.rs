use std::fmt::{self, Display};

use serde_json::Value;
use tracing::debug;

use crate::XmlError;

/// A scalar that can be rendered as an attribute value or as element text.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Default for XmlValue {
    fn default() -> Self {
        Self::Str(String::new())
    }
}

impl Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for XmlValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for XmlValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for XmlValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for XmlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for XmlValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

impl From<u32> for XmlValue {
    fn from(u: u32) -> Self {
        Self::Int(u.into())
    }
}

impl From<i64> for XmlValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f32> for XmlValue {
    fn from(x: f32) -> Self {
        Self::Float(x.into())
    }
}

impl From<f64> for XmlValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl TryFrom<&Value> for XmlValue {
    type Error = XmlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .ok_or(XmlError::NotAScalar { found: "number" }),
            other => Err(XmlError::NotAScalar {
                found: json_kind(other),
            }),
        }
    }
}

impl TryFrom<Value> for XmlValue {
    type Error = XmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// String-only input: element and attribute names, comment text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmlText(String);

impl XmlText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for XmlText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for XmlText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for XmlText {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl TryFrom<&Value> for XmlText {
    type Error = XmlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            other => Err(XmlError::NotAString {
                found: json_kind(other),
            }),
        }
    }
}

impl TryFrom<Value> for XmlText {
    type Error = XmlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self(s)),
            other => Err(XmlError::NotAString {
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Runs the conversion at a mutation boundary, logging and swallowing the
/// error so callers only see "accepted or not".
pub(crate) fn accept<T, U>(input: T, field: &'static str) -> Option<U>
where
    T: TryInto<U>,
    T::Error: Display,
{
    match input.try_into() {
        Ok(accepted) => Some(accepted),
        Err(error) => {
            debug!(field, %error, "rejected input");
            None
        }
    }
}
