//! Scalar value types.
//!
//! A [`Value`] holds exactly one JSON leaf literal. The active variant is
//! the value's kind; there is no separate tag to keep in sync. `Empty` is
//! the default, unset state and is distinct from `Null` (which is a real
//! JSON literal).

use crate::error::{Error, ErrorKind};

/// Marker for the JSON `null` literal, usable wherever a scalar-convertible
/// type is accepted: `node.set(Null)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

/// The kind of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Default/unset.
    Empty,
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
}

/// A scalar JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Default/unset; serializes to nothing.
    #[default]
    Empty,

    /// The `null` literal.
    Null,

    /// Boolean: `true` or `false`.
    Bool(bool),

    /// Integer: no decimal point in the source token.
    Integer(i64),

    /// Float: source token carried a decimal point.
    Double(f64),

    /// String contents, escape sequences preserved verbatim.
    String(String),
}

impl Value {
    /// The kind of the active variant.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Empty => ValueType::Empty,
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
        }
    }

    /// Human-readable kind name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// True for both integers and doubles.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Double(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Borrow the string contents, or `WrongType`.
    pub fn try_as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Owned copy of the string contents, or `WrongType`.
    pub fn try_as_string(&self) -> Result<String, Error> {
        self.try_as_str().map(str::to_owned)
    }

    pub fn try_as_integer(&self) -> Result<i64, Error> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(other.mismatch("integer")),
        }
    }

    pub fn try_as_double(&self) -> Result<f64, Error> {
        match self {
            Value::Double(d) => Ok(*d),
            other => Err(other.mismatch("double")),
        }
    }

    /// Integer or double, widened to `f64`. `WrongType` for anything else.
    pub fn try_as_number(&self) -> Result<f64, Error> {
        match self {
            Value::Integer(i) => Ok(*i as f64),
            Value::Double(d) => Ok(*d),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn try_as_boolean(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn try_as_null(&self) -> Result<Null, Error> {
        match self {
            Value::Null => Ok(Null),
            other => Err(other.mismatch("null")),
        }
    }

    /// Like [`try_as_str`](Self::try_as_str) but panics on kind mismatch.
    ///
    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not a string.
    pub fn as_str(&self) -> &str {
        self.try_as_str().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not a string.
    pub fn as_string(&self) -> String {
        self.try_as_string().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not an integer.
    pub fn as_integer(&self) -> i64 {
        self.try_as_integer().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not a double.
    pub fn as_double(&self) -> f64 {
        self.try_as_double().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not numeric.
    pub fn as_number(&self) -> f64 {
        self.try_as_number().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not a boolean.
    pub fn as_boolean(&self) -> bool {
        self.try_as_boolean().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the value is not `null`.
    pub fn as_null(&self) -> Null {
        self.try_as_null().unwrap_or_else(|e| panic!("{e}"))
    }

    /// The literal text form of this value.
    ///
    /// Integers print with no decimal point. Doubles trim trailing zeros
    /// but keep at least one fractional digit: `1.5`, `5.0`, never `1.` and
    /// never a bare `5`. Strings come back verbatim, unquoted.
    pub fn stringify(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Null => "null".to_owned(),
            Value::Bool(b) => (if *b { "true" } else { "false" }).to_owned(),
            Value::Integer(i) => i.to_string(),
            Value::Double(d) => {
                if d.fract() == 0.0 && d.is_finite() {
                    format!("{d:.1}")
                } else {
                    format!("{d}")
                }
            }
            Value::String(s) => s.clone(),
        }
    }

    /// Replace this value in place by parsing a raw token into `kind`.
    ///
    /// Fails with `WrongType` if `kind` is `Empty` or the token does not
    /// parse as the requested kind.
    pub fn set_parsed(&mut self, raw: &str, kind: ValueType) -> Result<(), Error> {
        let parsed = match kind {
            ValueType::Empty => {
                return Err(Error::new(
                    ErrorKind::WrongType,
                    "cannot parse a token into the empty kind",
                ))
            }
            ValueType::Null => {
                if raw == "null" {
                    Value::Null
                } else {
                    return Err(Error::new(
                        ErrorKind::WrongType,
                        format!("'{raw}' is not the null literal"),
                    ));
                }
            }
            ValueType::Boolean => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => {
                    return Err(Error::new(
                        ErrorKind::WrongType,
                        format!("'{raw}' is not a boolean literal"),
                    ))
                }
            },
            ValueType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| Error::new(ErrorKind::WrongType, format!("'{raw}' is not an integer")))?,
            ValueType::Double => raw
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| Error::new(ErrorKind::WrongType, format!("'{raw}' is not a double")))?,
            ValueType::String => Value::String(raw.to_owned()),
        };

        *self = parsed;
        Ok(())
    }

    fn mismatch(&self, wanted: &str) -> Error {
        Error::new(
            ErrorKind::WrongType,
            format!("wanted {wanted} but value holds {}", self.type_name()),
        )
    }
}

/// Decimal token shape: one optional leading `-`, digits, at most one `.`.
///
/// This is the classifier the parser uses to split numeric tokens from
/// garbage; actual range checking happens at i64/f64 parse time.
pub(crate) fn is_decimal_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    digits.chars().all(|c| {
        if c.is_ascii_digit() {
            true
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            true
        } else {
            false
        }
    })
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(d as f64)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(i: $ty) -> Self {
                Value::Integer(i as i64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);
