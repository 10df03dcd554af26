//! The dynamic value model that checks operate on.
//!
//! Checks inspect arbitrary runtime values. Rather than generic code per
//! concrete type, every value entering the toolkit is first converted into
//! the closed [`Value`] enum, and all classification branches on [`Kind`].
//! Conversions from native Rust and JSON types live at the bottom of this
//! module; they are the only place concrete types appear.

use std::borrow::Cow;
use std::fmt;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::failure::Failure;

/// A runtime value under test.
///
/// # Examples
///
/// ```rust
/// use verdict::Value;
/// let n = Value::from(3.14);
/// assert_eq!(n.type_name(), "float");
/// let nil = Value::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    /// The untyped nil. `()` converts to it.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(OrdMap<String, Value>),
    /// A nilable reference. `None` is the typed nil.
    Ref(Option<Box<Value>>),
    /// An error-capability value, held as its message.
    Error(String),
}

/// The closed set of kind tags a value classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Bytes,
    List,
    Map,
    Ref,
    Error,
}

impl Value {
    /// Classifies this value into exactly one [`Kind`].
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Bytes(_) => Kind::Bytes,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Ref(_) => Kind::Ref,
            Value::Error(_) => Kind::Error,
        }
    }

    /// Returns the type name used as the header line in failure rendering.
    ///
    /// References compose with their pointee (`&map`); a nil reference no
    /// longer knows its pointee type and renders `&_`.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Value::Nil => "nil".into(),
            Value::Bool(_) => "bool".into(),
            Value::Int(_) => "int".into(),
            Value::Uint(_) => "uint".into(),
            Value::Float(_) => "float".into(),
            Value::Str(_) => "string".into(),
            Value::Bytes(_) => "bytes".into(),
            Value::List(_) => "list".into(),
            Value::Map(_) => "map".into(),
            Value::Ref(Some(inner)) => format!("&{}", inner.type_name()).into(),
            Value::Ref(None) => "&_".into(),
            Value::Error(_) => "error".into(),
        }
    }

    /// Returns true for the untyped nil and for a nil reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::Value;
    /// assert!(Value::Nil.is_nil());
    /// assert!(Value::from(None::<i64>).is_nil());
    /// assert!(!Value::reference(0).is_nil());
    /// ```
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil | Value::Ref(None))
    }

    /// Converts any numeric kind to a common `f64`.
    ///
    /// Integers beyond the 53-bit mantissa lose precision; one family of
    /// comparison checks working uniformly across numeric kinds is worth
    /// that trade-off.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Uint(u) => Some(*u as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Builds a list value from anything convertible.
    pub fn list<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map value. Entries render in key order regardless of
    /// insertion order.
    pub fn map<I, K, V>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a value in a non-nil reference.
    pub fn reference(v: impl Into<Value>) -> Value {
        Value::Ref(Some(Box::new(v.into())))
    }

    /// Captures any displayable error as an error-capability value.
    pub fn error(e: impl fmt::Display) -> Value {
        Value::Error(e.to_string())
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }

    fn fmt_map(f: &mut fmt::Formatter<'_>, map: &OrdMap<String, Value>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (k, v) in map.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Str(s) => write!(f, "{}", s),
            Value::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::List(items) => Value::fmt_list(f, items),
            Value::Map(map) => Value::fmt_map(f, map),
            Value::Ref(Some(inner)) => write!(f, "{}", inner),
            Value::Ref(None) => write!(f, "nil"),
            Value::Error(msg) => write!(f, "{}", msg),
        }
    }
}

// ============================================================================
// CONVERSIONS: native Rust and JSON values into the model
// ============================================================================

impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Value {
                Value::Int(i as i64)
            }
        }
    )*};
}

macro_rules! from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(u: $t) -> Value {
                Value::Uint(u as u64)
            }
        }
    )*};
}

from_int!(i8, i16, i32, i64, isize);
from_uint!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Value {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Value {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Value {
        Value::Bytes(b)
    }
}

/// `Option` is the nilable reference: `None` converts to the typed nil.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        Value::Ref(opt.map(|v| Box::new(v.into())))
    }
}

impl From<Failure> for Value {
    fn from(f: Failure) -> Value {
        Value::Error(f.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// A raw JSON message is byte-sequence-like: its content is kept verbatim.
impl From<&serde_json::value::RawValue> for Value {
    fn from(raw: &serde_json::value::RawValue) -> Value {
        Value::Bytes(raw.get().as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_every_kind() {
        let cases = vec![
            (Value::Nil, Kind::Nil),
            (Value::from(true), Kind::Bool),
            (Value::from(-3i16), Kind::Int),
            (Value::from(3u8), Kind::Uint),
            (Value::from(0.5), Kind::Float),
            (Value::from("s"), Kind::Str),
            (Value::from(vec![0u8, 1]), Kind::Bytes),
            (Value::list([1, 2]), Kind::List),
            (Value::map([("a", 1)]), Kind::Map),
            (Value::from(None::<i64>), Kind::Ref),
            (Value::error("boom"), Kind::Error),
        ];
        for (value, kind) in cases {
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn numeric_kinds_share_a_float_representation() {
        assert_eq!(Value::from(42i16).as_f64(), Some(42.0));
        assert_eq!(Value::from(42u64).as_f64(), Some(42.0));
        assert_eq!(Value::from(42.0).as_f64(), Some(42.0));
        assert_eq!(Value::from("42").as_f64(), None);
    }

    #[test]
    fn deep_equality_is_kind_strict() {
        assert_ne!(Value::from(1i64), Value::from(1u64));
        assert_ne!(Value::from(1i64), Value::from(1.0));
        let inner = Value::map([("A", "a")]);
        assert_ne!(Value::reference(inner.clone()), inner);
    }

    #[test]
    fn map_rendering_is_ordered_by_key() {
        let forward = Value::map([("b", 2), ("a", 1)]);
        assert_eq!(forward.to_string(), "{a: 1, b: 2}");
    }

    #[test]
    fn whole_floats_render_integer_style() {
        assert_eq!(Value::from(42.0).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn option_converts_to_nilable_reference() {
        assert_eq!(Value::from(Some(1i32)), Value::reference(1i32));
        assert_eq!(Value::from(None::<i32>), Value::Ref(None));
        assert_eq!(Value::from(None::<i32>).type_name(), "&_");
        assert_eq!(Value::reference("x").type_name(), "&string");
    }
}
