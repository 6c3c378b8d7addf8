use log::{error, info};

use crate::error::SubmitError;

pub mod cloudwatch;

pub const NAMESPACE: &str = "process";
/// Name and value of the single dimension every datum carries.
pub const DIMENSION: &str = "count";

/// One count data point. Unit and dimension are fixed, so only the
/// varying parts are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDatum {
    pub metric_name: String,
    pub value: f64,
    pub namespace: String,
}

impl MetricDatum {
    /// A count for `process_name` under the "process" namespace.
    pub fn count(process_name: &str, value: f64) -> Self {
        MetricDatum {
            metric_name: process_name.to_string(),
            value,
            namespace: NAMESPACE.to_string(),
        }
    }
}

/// Destination for metric data points.
pub trait MetricSink {
    fn put(&self, datum: &MetricDatum) -> Result<(), SubmitError>;
}

/// Builds and pushes the presence metric. Failures are logged, never returned.
pub struct Reporter<F> {
    dry_run: bool,
    connect: F,
}

impl<S, F> Reporter<F>
where
    S: MetricSink,
    F: Fn() -> Result<S, SubmitError>,
{
    /// `connect` is called once per pushed metric to build a fresh sink.
    pub fn new(dry_run: bool, connect: F) -> Self {
        Reporter { dry_run, connect }
    }

    pub fn report(&self, process_name: &str, count: f64) {
        let datum = MetricDatum::count(process_name, count);

        if self.dry_run {
            info!("will put count={count} processname={process_name}");
            return;
        }

        info!("putting metrics...");
        if let Err(e) = (self.connect)().and_then(|sink| sink.put(&datum)) {
            error!("{e}");
        }
        info!("done");
    }
}
