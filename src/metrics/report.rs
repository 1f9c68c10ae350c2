use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::MetricError;
use crate::metrics::difference::difference;
use crate::metrics::metric_type::MetricType;

/// All four regression metrics for one predicted/label pair.
///
/// Built from a single shape check and a single difference pass, so it is
/// cheaper than calling `mae`, `sse`, `mse` and `rmse` one after another.
/// Values match the free functions, including the empty-input convention
/// (`NaN` for the averaged metrics, `0.0` for `sse`).
///
/// Non-finite metrics serialize as `null` and read back as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Mean absolute error.
    #[serde(with = "nan_as_null")]
    pub mae: f64,
    /// Residual sum of squared errors.
    #[serde(with = "nan_as_null")]
    pub sse: f64,
    /// Mean squared error.
    #[serde(with = "nan_as_null")]
    pub mse: f64,
    /// Root mean squared error.
    #[serde(with = "nan_as_null")]
    pub rmse: f64,
    /// Number of elements compared.
    pub count: usize,
}

impl MetricReport {
    pub fn compute<S, T, D>(
        predicted: &ArrayBase<S, D>,
        label: &ArrayBase<T, D>,
    ) -> Result<MetricReport, MetricError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = f64>,
        D: Dimension,
    {
        let diff = difference(label, predicted)?;

        let mae = diff.mapv(f64::abs).mean().unwrap_or(f64::NAN);
        let squared = diff.mapv(|x| x.powi(2));
        let sse = squared.sum();
        let mse = squared.mean().unwrap_or(f64::NAN);

        let report = MetricReport {
            mae,
            sse,
            mse,
            rmse: mse.sqrt(),
            count: diff.len(),
        };
        log::debug!(
            "metrics over {} elements: mae={} sse={} mse={} rmse={}",
            report.count,
            report.mae,
            report.sse,
            report.mse,
            report.rmse
        );
        Ok(report)
    }

    pub fn get(&self, metric: MetricType) -> f64 {
        match metric {
            MetricType::Mae => self.mae,
            MetricType::Sse => self.sse,
            MetricType::Mse => self.mse,
            MetricType::Rmse => self.rmse,
        }
    }

    /// Compact JSON, e.g. `{"mae":2.0,"sse":14.0,...,"count":3}`.
    ///
    /// Non-finite values (an empty pair's `NaN`) are written as `null`,
    /// which `Deserialize` turns back into `NaN`.
    pub fn to_json(&self) -> Result<String, MetricError> {
        Ok(serde_json::to_string(self)?)
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
