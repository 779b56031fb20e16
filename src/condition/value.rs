//! Bound parameter values and the tagged comparand a condition starts with.

use std::fmt;

/// A single value bound positionally alongside the emitted SQL text.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// Represents SQL `NULL`.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl ScalarValue {
    /// Returns true when the literal is the `Null` variant.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::Boolean(value) => write!(f, "{value}"),
            ScalarValue::Int64(value) => write!(f, "{value}"),
            ScalarValue::UInt64(value) => write!(f, "{value}"),
            ScalarValue::Float64(value) => write!(f, "{value}"),
            ScalarValue::Utf8(value) => f.write_str(value),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int64(i64::from(value))
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<u64> for ScalarValue {
    fn from(value: u64) -> Self {
        ScalarValue::UInt64(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float64(value)
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Utf8(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Utf8(value.to_owned())
    }
}

impl<T> From<Option<T>> for ScalarValue
where
    T: Into<ScalarValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}

/// Comparand handed to a condition before any mutator has run.
///
/// The variants mirror the routing done by the equality dispatcher: nulls and
/// booleans compare with `IS`, sequences expand into membership lists, and
/// everything else binds as a single parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// Boolean comparand.
    Boolean(bool),
    /// Any other single value.
    Scalar(ScalarValue),
    /// Ordered list of values.
    Sequence(Vec<ScalarValue>),
}

impl Value {
    /// Builds a sequence comparand from any iterator of scalar-convertible items.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ScalarValue>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Lifts a null or boolean carried inside `Scalar` to its own variant.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Value::Scalar(scalar) if scalar.is_null() => Value::Null,
            Value::Scalar(ScalarValue::Boolean(value)) => Value::Boolean(value),
            other => other,
        }
    }

    /// Flattens the comparand into the values it binds. Non-sequence
    /// comparands yield a single element.
    pub fn into_elements(self) -> Vec<ScalarValue> {
        match self {
            Value::Sequence(items) => items,
            Value::Null => vec![ScalarValue::Null],
            Value::Boolean(value) => vec![ScalarValue::Boolean(value)],
            Value::Scalar(value) => vec![value],
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Null => Value::Null,
            ScalarValue::Boolean(value) => Value::Boolean(value),
            other => Value::Scalar(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<ScalarValue>,
{
    fn from(value: Option<T>) -> Self {
        Value::from(ScalarValue::from(value))
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<ScalarValue>,
{
    fn from(items: Vec<T>) -> Self {
        Value::sequence(items)
    }
}

/// The `value` slot of a condition: either the pending comparand or the SQL
/// text a mutator emitted in its place.
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionValue {
    /// Comparand not yet rewritten by a mutator.
    Comparand(Value),
    /// SQL text ready for interpolation.
    Sql(String),
}

impl ConditionValue {
    /// Returns the text to interpolate after the operator, if any.
    ///
    /// Pending nulls and booleans render as their SQL keywords since the
    /// nullity predicate leaves them in place.
    #[must_use]
    pub fn sql_text(&self) -> Option<String> {
        match self {
            ConditionValue::Sql(text) => Some(text.clone()),
            ConditionValue::Comparand(Value::Null) => Some("NULL".to_owned()),
            ConditionValue::Comparand(Value::Boolean(true)) => Some("TRUE".to_owned()),
            ConditionValue::Comparand(Value::Boolean(false)) => Some("FALSE".to_owned()),
            ConditionValue::Comparand(_) => None,
        }
    }

    /// Returns the pending comparand, if the value has not been rewritten.
    #[must_use]
    pub fn comparand(&self) -> Option<&Value> {
        match self {
            ConditionValue::Comparand(value) => Some(value),
            ConditionValue::Sql(_) => None,
        }
    }
}

impl From<Value> for ConditionValue {
    fn from(value: Value) -> Self {
        ConditionValue::Comparand(value)
    }
}
