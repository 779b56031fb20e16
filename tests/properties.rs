//! Property-based tests for the condition mutators using proptest.

use proptest::prelude::*;
use sqlfrag::{ClauseContext, Condition, ConditionValue, Operator, ScalarValue, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Values that bind as a single parameter: neither null nor boolean.
fn bindable_scalar() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        any::<i64>().prop_map(ScalarValue::Int64),
        any::<u64>().prop_map(ScalarValue::UInt64),
        (-1.0e9f64..1.0e9f64).prop_map(ScalarValue::Float64),
        "[a-z ,{}\"\\\\]{0,8}".prop_map(ScalarValue::Utf8),
    ]
}

fn any_element() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        Just(ScalarValue::Null),
        any::<bool>().prop_map(ScalarValue::Boolean),
        bindable_scalar(),
    ]
}

fn elements(max: usize) -> impl Strategy<Value = Vec<ScalarValue>> {
    prop::collection::vec(any_element(), 0..max)
}

fn offset() -> impl Strategy<Value = usize> {
    1usize..10_000
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
        Operator::Is,
        Operator::IsNot,
        Operator::In,
        Operator::NotIn,
        Operator::Between,
    ])
}

// ============================================================================
// Helpers
// ============================================================================

fn sql(condition: &Condition) -> String {
    match &condition.value {
        ConditionValue::Sql(text) => text.clone(),
        other => panic!("expected emitted sql, got {other:?}"),
    }
}

fn placeholder_list(start: usize, count: usize) -> String {
    let items: Vec<String> = (start..start + count).map(|idx| format!("${idx}")).collect();
    format!("({})", items.join(","))
}

fn context_with_prefix(start: usize, prefix: &[ScalarValue]) -> ClauseContext {
    let mut ctx = ClauseContext::with_offset(start);
    for value in prefix {
        ctx.push_param(value.clone());
    }
    ctx
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A bindable scalar sits at the pre-call offset, which stays put.
    #[test]
    fn equality_binds_any_scalar_at_current_offset(
        value in bindable_scalar(),
        start in offset(),
        op in prop::sample::select(vec![Operator::Equal, Operator::NotEqual, Operator::LessThan]),
        prefix in elements(4),
    ) {
        let mut ctx = context_with_prefix(start, &prefix);
        let condition = Condition::new("c", op, Value::Scalar(value.clone())).equality(&mut ctx);

        prop_assert_eq!(sql(&condition), format!("${start}"));
        prop_assert_eq!(condition.operator(), op);
        prop_assert_eq!(ctx.offset(), start);
        prop_assert_eq!(&ctx.params()[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&ctx.params()[prefix.len()..], &[value][..]);
    }

    /// Any list of length N binds N values in order behind N fresh placeholders.
    #[test]
    fn in_list_expands_every_element(
        items in elements(24),
        start in offset(),
        op in operator(),
        prefix in elements(4),
    ) {
        let mut ctx = context_with_prefix(start, &prefix);
        let count = items.len();
        let condition = Condition::new("c", op, Value::Sequence(items.clone())).in_list(&mut ctx);

        let expected = if op == Operator::Equal { Operator::In } else { Operator::NotIn };
        prop_assert_eq!(condition.operator(), expected);
        prop_assert_eq!(sql(&condition), placeholder_list(start, count));
        prop_assert_eq!(ctx.offset(), start + count);
        prop_assert_eq!(&ctx.params()[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&ctx.params()[prefix.len()..], &items[..]);
    }

    /// Sequences reach the membership list through the dispatcher too.
    #[test]
    fn equality_delegates_sequences(
        items in elements(12),
        start in offset(),
        negate in any::<bool>(),
    ) {
        let op = if negate { Operator::NotEqual } else { Operator::Equal };
        let mut ctx = ClauseContext::with_offset(start);
        let condition = Condition::new("c", op, Value::Sequence(items.clone())).equality(&mut ctx);

        let expected = if negate { Operator::NotIn } else { Operator::In };
        prop_assert_eq!(condition.operator(), expected);
        prop_assert_eq!(sql(&condition), placeholder_list(start, items.len()));
        prop_assert_eq!(ctx.params(), &items[..]);
    }

    /// Nulls and booleans, bare or wrapped, never bind and never move the offset.
    #[test]
    fn equality_sends_null_and_boolean_to_is(
        flag in prop::option::of(any::<bool>()),
        wrapped in any::<bool>(),
        start in offset(),
        op in operator(),
    ) {
        let scalar = ScalarValue::from(flag);
        let value = if wrapped { Value::Scalar(scalar) } else { Value::from(scalar) };
        let mut ctx = ClauseContext::with_offset(start);
        let condition = Condition::new("c", op, value).equality(&mut ctx);

        let expected = if matches!(op, Operator::Equal | Operator::Is) {
            Operator::Is
        } else {
            Operator::IsNot
        };
        let keyword = match flag {
            None => "NULL",
            Some(true) => "TRUE",
            Some(false) => "FALSE",
        };
        prop_assert_eq!(condition.operator(), expected);
        prop_assert_eq!(condition.value.sql_text(), Some(keyword.to_owned()));
        prop_assert!(ctx.params().is_empty());
        prop_assert_eq!(ctx.offset(), start);
    }

    /// A `[lo, hi]` pair binds both ends behind two consecutive placeholders.
    #[test]
    fn between_consumes_exactly_two_slots(
        low in any_element(),
        high in any_element(),
        start in offset(),
        prefix in elements(4),
    ) {
        let mut ctx = context_with_prefix(start, &prefix);
        let pair = Value::Sequence(vec![low.clone(), high.clone()]);
        let condition = Condition::new("c", Operator::Between, pair).between(&mut ctx);

        prop_assert_eq!(sql(&condition), format!("${} AND ${}", start, start + 1));
        prop_assert_eq!(condition.operator(), Operator::Between);
        prop_assert_eq!(ctx.offset(), start + 2);
        prop_assert_eq!(&ctx.params()[prefix.len()..], &[low, high][..]);
    }

    /// Placeholders emitted equal params appended for the advancing mutators,
    /// and the offset moves by that count.
    #[test]
    fn placeholders_match_params_appended(
        items in elements(16),
        low in bindable_scalar(),
        high in bindable_scalar(),
        start in offset(),
    ) {
        let mut ctx = ClauseContext::with_offset(start);
        let listed = Condition::new("a", Operator::Equal, Value::Sequence(items.clone()))
            .in_list(&mut ctx);
        prop_assert_eq!(sql(&listed).matches('$').count(), items.len());
        prop_assert_eq!(ctx.params().len(), items.len());
        prop_assert_eq!(ctx.offset() - start, items.len());

        let before = ctx.params().len();
        let mid = ctx.offset();
        let ranged = Condition::new("b", Operator::Between, Value::Sequence(vec![low, high]))
            .between(&mut ctx);
        prop_assert_eq!(sql(&ranged).matches('$').count(), 2);
        prop_assert_eq!(ctx.params().len() - before, 2);
        prop_assert_eq!(ctx.offset() - mid, 2);
    }

    /// The single-placeholder paths emit one placeholder and bind one value,
    /// leaving the offset for the caller to advance.
    #[test]
    fn single_placeholder_paths_bind_one_value(
        value in bindable_scalar(),
        items in elements(16),
        start in offset(),
    ) {
        let mut ctx = ClauseContext::with_offset(start);

        let scalar = Condition::new("a", Operator::Equal, Value::Scalar(value)).equality(&mut ctx);
        prop_assert_eq!(sql(&scalar).matches('$').count(), 1);
        prop_assert_eq!(ctx.params().len(), 1);
        prop_assert_eq!(ctx.offset(), start);

        let literal = Condition::new("b", Operator::Equal, Value::Sequence(items))
            .array_literal(&mut ctx);
        prop_assert_eq!(sql(&literal), format!("${start}"));
        prop_assert_eq!(ctx.params().len(), 2);
        prop_assert_eq!(ctx.offset(), start);
    }

    /// Encoded literals are brace-delimited and never leave a quote unescaped.
    #[test]
    fn array_literal_quotes_balance(items in elements(12)) {
        let mut ctx = ClauseContext::new();
        let _ = Condition::new("c", Operator::Equal, Value::Sequence(items)).array_literal(&mut ctx);

        let literal = match ctx.params() {
            [ScalarValue::Utf8(text)] => text.clone(),
            other => panic!("expected one encoded param, got {other:?}"),
        };
        prop_assert!(literal.starts_with('{'), "literal should start with an opening brace");
        prop_assert!(literal.ends_with('}'), "literal should end with a closing brace");

        let mut escaped = false;
        let mut unescaped_quotes = 0usize;
        for c in literal.chars() {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => unescaped_quotes += 1,
                _ => escaped = false,
            }
        }
        prop_assert_eq!(unescaped_quotes % 2, 0);
    }
}

#[test]
fn empty_list_from_later_offset_keeps_numbering() {
    let mut ctx = ClauseContext::with_offset(6);
    let condition =
        Condition::new("id", Operator::NotEqual, Value::Sequence(Vec::new())).in_list(&mut ctx);

    assert_eq!(condition.render().as_deref(), Some("id NOT IN ()"));
    assert!(ctx.params().is_empty());
    assert_eq!(ctx.offset(), 6);
}

#[test]
fn not_equal_list_binds_params_behind_not_in() {
    let mut ctx = ClauseContext::with_offset(3);
    let condition = Condition::new("status", Operator::NotEqual, vec!["a", "b"]).in_list(&mut ctx);

    assert_eq!(condition.render().as_deref(), Some("status NOT IN ($3,$4)"));
    assert_eq!(ctx.params(), &[ScalarValue::from("a"), ScalarValue::from("b")]);
    assert_eq!(ctx.offset(), 5);
}
