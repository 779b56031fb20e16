#![deny(missing_docs)]
//! Positional SQL predicate fragments.
//!
//! A [`Condition`] pairs a column, an operator and a comparand. Mutators
//! rewrite it into SQL text made of `$n` placeholders, appending the values to
//! bind to a [`ClauseContext`] shared by every condition of one WHERE clause.
//! Nothing here executes SQL or validates comparand shapes; the assembly
//! layer picks the mutator and owns the clause.

mod condition;
mod logging;

pub use condition::{
    array_literal, ClauseContext, ColumnRef, Condition, ConditionValue, Mutator, Operation,
    Operator, ParseMutatorError, ParseOperatorError, Placeholder, ScalarValue, Value,
};
