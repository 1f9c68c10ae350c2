use ndarray::{ArrayBase, Data, Dimension};

use crate::error::MetricError;
use crate::metrics::mse::mse;

/// Root mean squared error: sqrt(mse(predicted, label))
pub fn rmse<S, T, D>(predicted: &ArrayBase<S, D>, label: &ArrayBase<T, D>) -> Result<f64, MetricError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    Ok(mse(predicted, label)?.sqrt())
}
