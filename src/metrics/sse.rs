use ndarray::{ArrayBase, Data, Dimension};

use crate::error::MetricError;
use crate::metrics::difference::difference;

/// Residual sum of squared errors: sum((label - predicted)²)
///
/// Unaveraged, so an empty pair sums to `0.0`.
pub fn sse<S, T, D>(predicted: &ArrayBase<S, D>, label: &ArrayBase<T, D>) -> Result<f64, MetricError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let diff = difference(label, predicted)?;
    Ok(diff.mapv(|x| x.powi(2)).sum())
}
