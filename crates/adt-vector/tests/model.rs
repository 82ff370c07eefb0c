//! Model-based property tests for `DynamicVector`.
//!
//! Every generated operation sequence is applied to both the vector and a
//! `Vec`-backed reference model; results and contents must agree after
//! each step, and capacity must obey the resize policy.

use adt_test_utils::strategies::arb_vector_ops;
use adt_test_utils::{VecModel, VectorOp};
use adt_vector::{ArrayError, DynamicVector, VectorConfig};
use proptest::prelude::*;

/// Apply `op` to both sides, returning `(vector_result, model_result)`.
#[allow(clippy::type_complexity)]
fn apply(
    v: &mut DynamicVector<i32>,
    m: &mut VecModel<i32>,
    op: &VectorOp,
) -> (Result<Option<i32>, ArrayError>, Result<Option<i32>, ArrayError>) {
    match *op {
        VectorOp::Push(x) => {
            v.push(x);
            m.push(x);
            (Ok(None), Ok(None))
        }
        VectorOp::Insert(i, x) => (v.insert(i, x).map(|_| None), m.insert(i, x).map(|_| None)),
        VectorOp::Remove(i) => (v.remove(i).map(Some), m.remove(i).map(Some)),
        VectorOp::Pop => (v.pop().map(Some), m.pop().map(Some)),
        VectorOp::Set(i, x) => (v.set(i, x).map(Some), m.set(i, x).map(Some)),
    }
}

proptest! {
    #[test]
    fn matches_vec_model(ops in arb_vector_ops(200)) {
        let mut v = DynamicVector::new();
        let mut m = VecModel::new();
        for op in &ops {
            let (got, want) = apply(&mut v, &mut m, op);
            prop_assert_eq!(got, want, "op {:?}", op);
            prop_assert_eq!(v.len(), m.len());
            prop_assert!(v.iter().eq(m.items().iter()));
            prop_assert!(v.capacity() >= v.len());
            prop_assert!(v.capacity() >= 1);
        }
    }

    #[test]
    fn appends_are_readable_in_order(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut v = DynamicVector::new();
        for (k, &x) in values.iter().enumerate() {
            v.push(x);
            prop_assert_eq!(v.len(), k + 1);
        }
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v.get(i), Ok(x));
        }
    }

    #[test]
    fn insert_then_remove_restores(
        values in prop::collection::vec(any::<i32>(), 0..64),
        pick in any::<prop::sample::Index>(),
        x in any::<i32>(),
    ) {
        let mut v: DynamicVector<i32> = values.iter().copied().collect();
        let i = pick.index(values.len() + 1);
        v.insert(i, x).unwrap();
        prop_assert_eq!(v.remove(i), Ok(x));
        prop_assert!(v.iter().eq(values.iter()));
    }

    #[test]
    fn shrink_halves_prior_capacity(
        values in prop::collection::vec(any::<i32>(), 1..128),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut v: DynamicVector<i32> = values.into_iter().collect();
        let config = VectorConfig::default();
        let prior = v.capacity();
        let i = pick.index(v.len());
        v.remove(i).unwrap();
        let len = v.len();
        if (len as f64) < prior as f64 * 0.55 {
            prop_assert_eq!(v.capacity(), (prior / 2).max(1).max(len));
            prop_assert_eq!(v.capacity(), config.shrunk_capacity(prior, len));
        } else {
            prop_assert_eq!(v.capacity(), prior);
        }
    }
}

#[test]
fn push_insert_remove_walkthrough() {
    let mut v = DynamicVector::with_capacity(2).unwrap();
    assert_eq!(v.to_string(), "Vector([])");

    for c in ['a', 'b', 'c'] {
        v.push(c);
    }
    assert_eq!(v.to_string(), "Vector([a, b, c])");
    assert_eq!(v.capacity(), 4);

    v.insert(1, 'x').unwrap();
    assert_eq!(v.to_string(), "Vector([a, x, b, c])");
    assert_eq!(v.capacity(), 8);

    assert_eq!(v.remove(2), Ok('b'));
    assert_eq!(v.to_string(), "Vector([a, x, c])");
    assert_eq!(v.capacity(), 4);

    assert_eq!(v.pop(), Ok('c'));
    assert_eq!(v.to_string(), "Vector([a, x])");
    assert_eq!(v.capacity(), 2);

    v.push('d');
    assert_eq!(v.to_string(), "Vector([a, x, d])");
    assert_eq!(v.capacity(), 4);
}

#[test]
fn custom_policy_grows_by_factor() {
    let config = VectorConfig {
        initial_capacity: 1,
        growth_factor: 4,
        ..VectorConfig::default()
    };
    let mut v = DynamicVector::with_config(config).unwrap();
    v.push(0u8);
    v.push(1);
    assert_eq!(v.capacity(), 4);
    v.extend(2..5);
    assert_eq!(v.capacity(), 16);
}
