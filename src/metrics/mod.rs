mod difference;
pub mod mae;
pub mod sse;
pub mod mse;
pub mod rmse;
pub mod metric_type;
pub mod report;

pub use mae::mae;
pub use sse::sse;
pub use mse::mse;
pub use rmse::rmse;
pub use metric_type::MetricType;
pub use report::MetricReport;
