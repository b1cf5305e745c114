//! Integration tests for the hypothesis, cost and gradient step.

use logreg_toolkit::error::LogisticError;
use logreg_toolkit::models::logistic::{cost, gradient_step, hypothesis, predict_labels};
use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One feature plus bias, symmetric around zero, label = feature > 0.
fn separable() -> (Array2<f64>, Array1<f64>) {
    let x = array![
        [1.0, -2.0],
        [1.0, -1.5],
        [1.0, -1.0],
        [1.0, 1.0],
        [1.0, 1.5],
        [1.0, 2.0],
    ];
    let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    (x, y)
}

// ---------------------------------------------------------------------------
// Hypothesis
// ---------------------------------------------------------------------------

#[test]
fn hypothesis_zero_weights_is_one_half() {
    let x = array![[1.0, 5.0, -3.0], [1.0, 0.2, 7.5], [1.0, -9.0, 0.0]];
    let w = Array1::<f64>::zeros(3);
    let h = hypothesis(&w, &x).unwrap();
    assert_eq!(h.len(), 3);
    for v in h.iter() {
        assert_eq!(*v, 0.5);
    }
}

#[test]
fn hypothesis_strictly_inside_unit_interval() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let x = Array2::from_shape_fn((12, 4), |_| rng.gen_range(-2.0..2.0));
        let w = Array1::from_shape_fn(4, |_| rng.gen_range(-1.0..1.0));
        let h = hypothesis(&w, &x).unwrap();
        for &p in h.iter() {
            assert!(p > 0.0 && p < 1.0, "hypothesis value {} outside (0, 1)", p);
        }
    }
}

#[test]
fn hypothesis_rejects_wrong_weight_length() {
    let x = Array2::<f64>::ones((3, 2));
    let w = Array1::<f64>::zeros(5);
    assert_eq!(
        hypothesis(&w, &x),
        Err(LogisticError::ShapeMismatch {
            context: "weights vs feature columns",
            expected: 2,
            got: 5,
        })
    );
}

// ---------------------------------------------------------------------------
// Cost
// ---------------------------------------------------------------------------

#[test]
fn cost_is_non_negative_for_typical_inputs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let x = Array2::from_shape_fn((10, 3), |_| rng.gen_range(-2.0..2.0));
        let w = Array1::from_shape_fn(3, |_| rng.gen_range(-1.0..1.0));
        let y = Array1::from_shape_fn(10, |_| if rng.gen_bool(0.5) { 1.0 } else { 0.0 });
        let c = cost(&w, &x, &y, 0.1, 0.01).unwrap();
        assert!(c >= 0.0, "cost should be non-negative, got {}", c);
    }
}

#[test]
fn cost_epsilon_keeps_saturated_predictions_finite() {
    // h saturates to exactly 1.0 and 0.0 in f64; without eps this is ln(0)
    let x = array![[1.0, 100.0], [1.0, -100.0]];
    let w = array![0.0, 1.0];
    let y = array![0.0, 1.0];
    let c = cost(&w, &x, &y, 0.1, 0.01).unwrap();
    assert!(c.is_finite());
    assert!((c - -(0.01f64).ln()).abs() < 1e-9, "cost = {}", c);
}

// ---------------------------------------------------------------------------
// Gradient step
// ---------------------------------------------------------------------------

#[test]
fn repeated_gradient_steps_do_not_increase_cost() {
    let (x, y) = separable();
    let mut w = Array1::<f64>::zeros(2);
    let mut previous = cost(&w, &x, &y, 0.1, 0.01).unwrap();
    let initial = previous;

    for step in 0..300 {
        w = gradient_step(&w, &x, &y, 0.1, 0.1).unwrap();
        let current = cost(&w, &x, &y, 0.1, 0.01).unwrap();
        assert!(
            current <= previous + 1e-12,
            "cost increased at step {}: {} -> {}",
            step,
            previous,
            current
        );
        previous = current;
    }

    assert!(previous < initial * 0.5, "cost barely moved: {} -> {}", initial, previous);
    assert_eq!(predict_labels(&w, &x, 0.5).unwrap(), array![0u8, 0, 0, 1, 1, 1]);
}

#[test]
fn gradient_step_with_zero_learning_rate_is_identity() {
    let (x, y) = separable();
    let w = array![0.4, -0.3];
    let next = gradient_step(&w, &x, &y, 0.1, 0.0).unwrap();
    assert_eq!(next, w);
}

#[test]
fn gradient_step_is_unaffected_by_reg_param() {
    let (x, y) = separable();
    let w = array![0.7, -0.4];
    let plain = gradient_step(&w, &x, &y, 0.0, 0.1).unwrap();
    let heavy = gradient_step(&w, &x, &y, 1000.0, 0.1).unwrap();
    assert_eq!(plain, heavy);
    assert_ne!(plain, w, "step should move the weights");
}

#[test]
fn gradient_step_rejects_label_length_mismatch() {
    let (x, _) = separable();
    let w = Array1::<f64>::zeros(2);
    let y = array![1.0, 0.0];
    match gradient_step(&w, &x, &y, 0.1, 0.01) {
        Err(LogisticError::ShapeMismatch { expected, got, .. }) => {
            assert_eq!(expected, 6);
            assert_eq!(got, 2);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}
