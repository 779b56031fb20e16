//! Rewrites of a condition's operator and value into positional SQL.
//!
//! Every mutator consumes the condition and returns it, appending any bound
//! values to the [`ClauseContext`]. The list and range shapes consume their
//! placeholders and advance the offset. The scalar branch of
//! [`Condition::equality`] and [`Condition::array_literal`] emit the placeholder
//! at the current offset but leave the offset where it was, so a caller that
//! keeps appending to the same clause must call [`ClauseContext::advance`].

use std::mem;

use super::{
    array_literal, ClauseContext, Condition, ConditionValue, Mutator, Operator, ScalarValue, Value,
};
use crate::logging::sqlfrag_log;

impl Condition {
    /// Emits `$k AND $k+1` for a `[lo, hi]` pair.
    ///
    /// Every element of the comparand is bound, but exactly two placeholders
    /// are emitted and consumed whatever its length. Arity is the caller's
    /// concern.
    #[must_use]
    pub fn between(mut self, ctx: &mut ClauseContext) -> Self {
        let elements = self.take_comparand().into_elements();
        let appended = elements.len();
        for element in elements {
            ctx.push_param(element);
        }
        let low = ctx.next_placeholder();
        let high = ctx.next_placeholder();
        self.value = ConditionValue::Sql(format!("{low} AND {high}"));
        self.trace(Mutator::Between, appended, ctx);
        self
    }

    /// Expands the comparand into a parenthesised placeholder list.
    ///
    /// `=` becomes `IN`; any other operator becomes `NOT IN`. An empty list
    /// yields `()`.
    #[must_use]
    pub fn in_list(mut self, ctx: &mut ClauseContext) -> Self {
        self.operation.operator = if self.operation.operator == Operator::Equal {
            Operator::In
        } else {
            Operator::NotIn
        };

        let elements = self.take_comparand().into_elements();
        let appended = elements.len();
        let mut placeholders = Vec::with_capacity(appended);
        for element in elements {
            ctx.push_param(element);
            placeholders.push(ctx.next_placeholder().to_string());
        }
        self.value = ConditionValue::Sql(format!("({})", placeholders.join(",")));
        self.trace(Mutator::In, appended, ctx);
        self
    }

    /// Rewrites the operator to `IS` (from `=` or `IS`) or `IS NOT`.
    ///
    /// The value is left in place: a pending null or boolean renders as its
    /// keyword through [`ConditionValue::sql_text`].
    #[must_use]
    pub fn is(mut self) -> Self {
        self.operation.operator = match self.operation.operator {
            Operator::Equal | Operator::Is => Operator::Is,
            _ => Operator::IsNot,
        };
        sqlfrag_log!(
            log::Level::Trace,
            "condition_mutated",
            "mutator={} column={} operator={} appended=0",
            Mutator::Is,
            self.column,
            self.operation.operator,
        );
        self
    }

    /// Routes a generic comparison by comparand kind.
    ///
    /// Nulls and booleans go to [`Condition::is`], sequences to
    /// [`Condition::in_list`]. Any other value is bound at the current offset
    /// without advancing it. A null or boolean wrapped in `Value::Scalar`
    /// routes like the bare variant.
    #[must_use]
    pub fn equality(mut self, ctx: &mut ClauseContext) -> Self {
        let scalar = match self.take_comparand().normalized() {
            comparand @ (Value::Null | Value::Boolean(_)) => {
                self.value = ConditionValue::Comparand(comparand);
                return self.is();
            }
            comparand @ Value::Sequence(_) => {
                self.value = ConditionValue::Comparand(comparand);
                return self.in_list(ctx);
            }
            Value::Scalar(scalar) => scalar,
        };

        ctx.push_param(scalar);
        self.value = ConditionValue::Sql(ctx.current_placeholder().to_string());
        self.trace(Mutator::Equality, 1, ctx);
        self
    }

    /// Binds the comparand as a single parameter, encoding sequences as an
    /// array literal. The placeholder sits at the current offset, which is not
    /// advanced.
    #[must_use]
    pub fn array_literal(mut self, ctx: &mut ClauseContext) -> Self {
        let param = match self.take_comparand() {
            Value::Sequence(items) => ScalarValue::Utf8(array_literal::encode(&items)),
            Value::Null => ScalarValue::Null,
            Value::Boolean(value) => ScalarValue::Boolean(value),
            Value::Scalar(value) => value,
        };
        ctx.push_param(param);
        self.value = ConditionValue::Sql(ctx.current_placeholder().to_string());
        self.trace(Mutator::ArrayLiteral, 1, ctx);
        self
    }

    // A value that already holds SQL text is rebound as a string.
    fn take_comparand(&mut self) -> Value {
        match mem::replace(&mut self.value, ConditionValue::Sql(String::new())) {
            ConditionValue::Comparand(value) => value,
            ConditionValue::Sql(text) => Value::Scalar(ScalarValue::Utf8(text)),
        }
    }

    fn trace(&self, mutator: Mutator, appended: usize, ctx: &ClauseContext) {
        sqlfrag_log!(
            log::Level::Trace,
            "condition_mutated",
            "mutator={} column={} operator={} appended={} offset={}",
            mutator,
            self.column,
            self.operation.operator,
            appended,
            ctx.offset(),
        );
    }
}
