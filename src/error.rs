use std::fmt;

/// Errors returned by the metric functions and their helpers.
#[derive(Debug)]
pub enum MetricError {
    /// `predicted` and `label` cannot be aligned elementwise.
    ShapeMismatch {
        predicted: Vec<usize>,
        label: Vec<usize>,
    },
    /// A metric name that does not match any `MetricType`.
    UnknownMetric(String),
    /// A `MetricReport` could not be encoded as JSON.
    Serialization(serde_json::Error),
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::ShapeMismatch { predicted, label } => write!(
                f,
                "predicted shape {:?} does not match label shape {:?}",
                predicted, label
            ),
            MetricError::UnknownMetric(name) => write!(f, "unknown metric '{}'", name),
            MetricError::Serialization(e) => write!(f, "failed to serialize metric report: {}", e),
        }
    }
}

impl std::error::Error for MetricError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetricError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MetricError {
    fn from(e: serde_json::Error) -> Self {
        MetricError::Serialization(e)
    }
}
