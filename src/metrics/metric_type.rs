use std::fmt;
use std::str::FromStr;

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::MetricError;
use crate::metrics::{mae, mse, rmse, sse};

/// Selects which regression metric to compute.
///
/// - `Mae`  — mean absolute error
/// - `Sse`  — residual sum of squared errors (not averaged)
/// - `Mse`  — mean squared error
/// - `Rmse` — root mean squared error; same units as the labels
///
/// Serialized names are `"mae"`, `"sse"`, `"mse"` and `"rmse"`, so a
/// `MetricType` can sit directly inside a JSON job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Mae,
    Sse,
    Mse,
    Rmse,
}

impl MetricType {
    pub const ALL: [MetricType; 4] = [
        MetricType::Mae,
        MetricType::Sse,
        MetricType::Mse,
        MetricType::Rmse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MetricType::Mae => "mae",
            MetricType::Sse => "sse",
            MetricType::Mse => "mse",
            MetricType::Rmse => "rmse",
        }
    }

    /// Computes this metric for one predicted/label pair.
    pub fn evaluate<S, T, D>(
        self,
        predicted: &ArrayBase<S, D>,
        label: &ArrayBase<T, D>,
    ) -> Result<f64, MetricError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = f64>,
        D: Dimension,
    {
        match self {
            MetricType::Mae => mae(predicted, label),
            MetricType::Sse => sse(predicted, label),
            MetricType::Mse => mse(predicted, label),
            MetricType::Rmse => rmse(predicted, label),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricType {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MetricType::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MetricError::UnknownMetric(s.to_string()))
    }
}
