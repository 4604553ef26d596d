//! Arithmetic mean.
//!
//! The sum runs over the slice's own iterator, so the bound is always the
//! number of stored elements.

/// Mean of `values`, or `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().sum();
    total / values.len() as f64
}
