use crate::value::Value;

/// Checks that the forward values of `actual` are within `tolerance` of `expected`.
/// Panics with the offending index otherwise.
pub fn check_values_near(actual: &[Value<'_>], expected: &[f64], tolerance: f64) {
    let values: Vec<f64> = actual.iter().map(|v| v.value()).collect();
    check_slice_near("value", &values, expected, tolerance);
}

/// Same as [`check_values_near`] for the accumulated gradients.
pub fn check_grads_near(actual: &[Value<'_>], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = actual.iter().map(|v| v.grad()).collect();
    check_slice_near("grad", &grads, expected, tolerance);
}

fn check_slice_near(what: &str, actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}
