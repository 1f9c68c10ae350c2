//! Regression error metrics (MAE, SSE, MSE, RMSE) over `ndarray` arrays.
//!
//! Every metric takes `(predicted, label)` of identical shape and returns a
//! single `f64`, or `MetricError::ShapeMismatch` when the shapes differ.

pub mod error;
pub mod metrics;

// Convenience re-exports
pub use error::MetricError;
pub use metrics::{mae, mse, rmse, sse};
pub use metrics::metric_type::MetricType;
pub use metrics::report::MetricReport;
