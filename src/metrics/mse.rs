use ndarray::{ArrayBase, Data, Dimension};

use crate::error::MetricError;
use crate::metrics::difference::difference;

/// Mean squared error: mean((label - predicted)²)
///
/// Returns `NaN` for empty inputs.
pub fn mse<S, T, D>(predicted: &ArrayBase<S, D>, label: &ArrayBase<T, D>) -> Result<f64, MetricError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let diff = difference(label, predicted)?;
    Ok(diff.mapv(|x| x.powi(2)).mean().unwrap_or(f64::NAN))
}
