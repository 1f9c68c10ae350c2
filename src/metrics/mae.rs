use ndarray::{ArrayBase, Data, Dimension};

use crate::error::MetricError;
use crate::metrics::difference::difference;

/// Mean absolute error: mean(|label - predicted|)
///
/// Returns `NaN` for empty inputs.
pub fn mae<S, T, D>(predicted: &ArrayBase<S, D>, label: &ArrayBase<T, D>) -> Result<f64, MetricError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let diff = difference(label, predicted)?;
    Ok(diff.mapv(f64::abs).mean().unwrap_or(f64::NAN))
}
