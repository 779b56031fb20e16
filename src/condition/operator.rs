//! The fixed operator set a condition can emit.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors raised while parsing operator text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOperatorError {
    /// The text does not name one of the supported operators.
    #[error("unsupported operator `{operator}`")]
    Unsupported {
        /// Operator text as supplied.
        operator: String,
    },
}

/// SQL operator emitted between the column and the value of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equals (`=`).
    Equal,
    /// Not equals (`<>`).
    NotEqual,
    /// Less than (`<`).
    LessThan,
    /// Less than or equal to (`<=`).
    LessThanOrEqual,
    /// Greater than (`>`).
    GreaterThan,
    /// Greater than or equal to (`>=`).
    GreaterThanOrEqual,
    /// Identity test (`IS`).
    Is,
    /// Negated identity test (`IS NOT`).
    IsNot,
    /// Membership (`IN`).
    In,
    /// Negated membership (`NOT IN`).
    NotIn,
    /// Range (`BETWEEN`).
    Between,
    /// Negated range (`NOT BETWEEN`).
    NotBetween,
}

impl Operator {
    /// Returns a textual representation of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
        }
    }

    /// Returns the logical negation of this operator.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            Operator::Equal => Operator::NotEqual,
            Operator::NotEqual => Operator::Equal,
            Operator::LessThan => Operator::GreaterThanOrEqual,
            Operator::LessThanOrEqual => Operator::GreaterThan,
            Operator::GreaterThan => Operator::LessThanOrEqual,
            Operator::GreaterThanOrEqual => Operator::LessThan,
            Operator::Is => Operator::IsNot,
            Operator::IsNot => Operator::Is,
            Operator::In => Operator::NotIn,
            Operator::NotIn => Operator::In,
            Operator::Between => Operator::NotBetween,
            Operator::NotBetween => Operator::Between,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let normalized = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        let operator = match normalized.as_str() {
            "=" => Operator::Equal,
            "<>" | "!=" => Operator::NotEqual,
            "<" => Operator::LessThan,
            "<=" => Operator::LessThanOrEqual,
            ">" => Operator::GreaterThan,
            ">=" => Operator::GreaterThanOrEqual,
            "IS" => Operator::Is,
            "IS NOT" => Operator::IsNot,
            "IN" => Operator::In,
            "NOT IN" => Operator::NotIn,
            "BETWEEN" => Operator::Between,
            "NOT BETWEEN" => Operator::NotBetween,
            _ => {
                return Err(ParseOperatorError::Unsupported {
                    operator: text.to_owned(),
                });
            }
        };
        Ok(operator)
    }
}
