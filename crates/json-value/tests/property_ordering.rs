//! Property tests: equality is an equivalence, `less` is a strict weak
//! ordering consistent with it, and aliases are invisible to both.

use std::collections::BTreeMap;

use docval::{equals, less, less_or_equal, Comparator, CompareOptions, NumberPolicy, Object, Value};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::Int),
        (0u64..3).prop_map(Value::Uint),
        prop_oneof![
            Just(f64::NAN),
            Just(-0.0),
            Just(0.5),
            (-3i32..3).prop_map(f64::from),
        ]
        .prop_map(Value::Double),
        "[ab]{0,2}".prop_map(Value::String),
        prop::collection::vec(0u8..3, 0..3).prop_map(|bytes| Value::bytes(bytes)),
        Just(Value::EmptyObject),
    ]
}

// Small domains so that equal and prefix-related pairs show up often.
fn value() -> impl Strategy<Value = Value<'static>> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

fn strict() -> Comparator {
    Comparator::new(CompareOptions::default().with_number_policy(NumberPolicy::Strict))
}

proptest! {
    #[test]
    fn reflexive_and_irreflexive(a in value()) {
        prop_assert!(equals(&a, &a));
        prop_assert!(!less(&a, &a));
        prop_assert!(equals(&a, &a.clone()));
    }

    #[test]
    fn symmetric_and_asymmetric(a in value(), b in value()) {
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
        prop_assert!(!(less(&a, &b) && less(&b, &a)));
    }

    #[test]
    fn incomparability_matches_equality(a in value(), b in value()) {
        let incomparable = !less(&a, &b) && !less(&b, &a);
        prop_assert_eq!(equals(&a, &b), incomparable);

        let strict = strict();
        let incomparable = !strict.less(&a, &b) && !strict.less(&b, &a);
        prop_assert_eq!(strict.equals(&a, &b), incomparable);
    }

    #[test]
    fn transitive(a in value(), b in value(), c in value()) {
        if less(&a, &b) && less(&b, &c) {
            prop_assert!(less(&a, &c));
        }
        if equals(&a, &b) && equals(&b, &c) {
            prop_assert!(equals(&a, &c));
        }
    }

    #[test]
    fn sort_yields_non_decreasing_sequence(mut values in prop::collection::vec(value(), 0..8)) {
        values.sort();
        for pair in values.windows(2) {
            prop_assert!(less_or_equal(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn alias_is_transparent(a in value(), b in value()) {
        let alias_a = Value::alias(&a);
        let alias_b = Value::alias(&b);
        prop_assert_eq!(equals(&alias_a, &b), equals(&a, &b));
        prop_assert_eq!(equals(&a, &alias_b), equals(&a, &b));
        prop_assert_eq!(less(&alias_a, &b), less(&a, &b));
        prop_assert_eq!(less(&b, &alias_a), less(&b, &a));
        prop_assert_eq!(less(&alias_a, &alias_b), less(&a, &b));
        prop_assert!(equals(&alias_a, &a));
    }

    #[test]
    fn member_order_is_irrelevant(members in prop::collection::btree_map("[a-f]", value(), 0..5)) {
        let members: BTreeMap<String, Value<'static>> = members;
        let forward: Object = members.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        let backward: Object = members.iter().rev().map(|(k, v)| (k.as_str(), v.clone())).collect();
        let (forward, backward) = (Value::Object(forward), Value::Object(backward));
        prop_assert!(equals(&forward, &backward));
        prop_assert!(!less(&forward, &backward));
        prop_assert!(!less(&backward, &forward));
    }
}
