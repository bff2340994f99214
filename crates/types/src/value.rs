//! Values passed to and returned from extension object methods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An argument or result of an extension method call.
///
/// Node-sets cross the boundary as the string values of their nodes, so an
/// extension object never holds a reference into the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ScriptValue {
    String(String),
    Number(f64),
    Boolean(bool),
    NodeSet(Vec<String>),
}

impl ScriptValue {
    /// Coerces the value to a boolean as per XPath 1.0 rules.
    pub fn to_bool(&self) -> bool {
        match self {
            ScriptValue::NodeSet(nodes) => !nodes.is_empty(),
            ScriptValue::String(s) => !s.is_empty(),
            ScriptValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ScriptValue::Boolean(b) => *b,
        }
    }

    /// Coerces the value to a number as per XPath 1.0 rules.
    pub fn to_number(&self) -> f64 {
        match self {
            ScriptValue::Number(n) => *n,
            ScriptValue::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            ScriptValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ScriptValue::NodeSet(nodes) => nodes
                .first()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for ScriptValue {
    /// Coerces the value to a string as per XPath 1.0 rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::NodeSet(nodes) => {
                write!(f, "{}", nodes.first().map(String::as_str).unwrap_or_default())
            }
            ScriptValue::String(s) => write!(f, "{}", s),
            ScriptValue::Number(n) => write!(f, "{}", n),
            ScriptValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::String(s)
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::String(s.to_string())
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Boolean(b)
    }
}
