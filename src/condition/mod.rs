//! Condition records and the mutators that turn them into SQL fragments.

pub mod array_literal;
mod context;
mod mutator;
mod operator;
mod value;

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

pub use context::{ClauseContext, Placeholder};
pub use operator::{Operator, ParseOperatorError};
pub use value::{ConditionValue, ScalarValue, Value};

/// Reference identifying the column a condition compares.
///
/// The name is interpolated verbatim, so callers pass it already quoted when
/// quoting is required.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Column text as it appears in SQL.
    pub name: Arc<str>,
}

impl ColumnRef {
    /// Creates a new column reference from a name.
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self { name: name.into() }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Operator descriptor carried by a condition. Mutators rewrite the operator
/// in place when the predicate shape changes (`=` to `IN`, `<>` to `IS NOT`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// Operator emitted between column and value.
    pub operator: Operator,
}

impl Operation {
    /// Creates a descriptor for `operator`.
    #[must_use]
    pub const fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl From<Operator> for Operation {
    fn from(operator: Operator) -> Self {
        Self::new(operator)
    }
}

/// One column comparison on its way to becoming a predicate fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    /// Column under comparison.
    pub column: ColumnRef,
    /// Operator descriptor.
    pub operation: Operation,
    /// Pending comparand, or the SQL text emitted by a mutator.
    pub value: ConditionValue,
}

impl Condition {
    /// Creates a condition with an unmutated comparand.
    #[must_use]
    pub fn new<C, V>(column: C, operator: Operator, value: V) -> Self
    where
        C: Into<ColumnRef>,
        V: Into<Value>,
    {
        Self {
            column: column.into(),
            operation: Operation::new(operator),
            value: ConditionValue::Comparand(value.into()),
        }
    }

    /// Current operator.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operation.operator
    }

    /// Applies the mutator named by `mutator`.
    #[must_use]
    pub fn mutate(self, mutator: Mutator, ctx: &mut ClauseContext) -> Self {
        match mutator {
            Mutator::Equality => self.equality(ctx),
            Mutator::Between => self.between(ctx),
            Mutator::In => self.in_list(ctx),
            Mutator::Is => self.is(),
            Mutator::ArrayLiteral => self.array_literal(ctx),
        }
    }

    /// Renders `column operator value` once the value has SQL text.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        let value = self.value.sql_text()?;
        Some(format!("{} {} {}", self.column, self.operator(), value))
    }
}

/// Errors raised while parsing mutator names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMutatorError {
    /// The name does not match any mutator.
    #[error("unknown mutator `{name}`")]
    Unknown {
        /// Name as supplied.
        name: String,
    },
}

/// Names the transformation applied to a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutator {
    /// Generic equality dispatch over null, boolean, sequence and scalar.
    Equality,
    /// Two-placeholder range.
    Between,
    /// Parenthesised membership list.
    In,
    /// `IS` / `IS NOT` rewrite.
    Is,
    /// Whole list bound as one array-literal parameter.
    ArrayLiteral,
}

impl Mutator {
    /// Returns the mutator's name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mutator::Equality => "equality",
            Mutator::Between => "between",
            Mutator::In => "in",
            Mutator::Is => "is",
            Mutator::ArrayLiteral => "array_literal",
        }
    }
}

impl fmt::Display for Mutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mutator {
    type Err = ParseMutatorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "equality" => Ok(Mutator::Equality),
            "between" => Ok(Mutator::Between),
            "in" => Ok(Mutator::In),
            "is" => Ok(Mutator::Is),
            "array_literal" => Ok(Mutator::ArrayLiteral),
            _ => Err(ParseMutatorError::Unknown {
                name: name.to_owned(),
            }),
        }
    }
}
