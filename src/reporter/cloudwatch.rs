use aws_sdk_cloudwatch::config::Region;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::{self, StandardUnit};
use aws_sdk_cloudwatch::Client;
use log::debug;
use tokio::runtime::{Builder, Runtime};

use crate::error::SubmitError;
use crate::reporter::{MetricDatum, MetricSink, DIMENSION};

pub const DEFAULT_REGION: &str = "us-east-1";

/// CloudWatch `PutMetricData` client.
/// The SDK is async, so each sink owns a current-thread runtime that lives
/// exactly as long as the client.
pub struct CloudWatchSink {
    runtime: Runtime,
    client: Client,
}

impl CloudWatchSink {
    /// Load credentials from the default AWS provider chain and build a client.
    pub fn connect(region: &str) -> Result<Self, SubmitError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SubmitError::Runtime)?;

        let config = runtime.block_on(
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );
        debug!("cloudwatch client configured for region {region}");

        Ok(CloudWatchSink {
            runtime,
            client: Client::new(&config),
        })
    }
}

impl MetricSink for CloudWatchSink {
    fn put(&self, datum: &MetricDatum) -> Result<(), SubmitError> {
        let request = self
            .client
            .put_metric_data()
            .namespace(&datum.namespace)
            .metric_data(to_sdk_datum(datum));

        self.runtime
            .block_on(request.send())
            .map_err(|e| SubmitError::Api(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}

fn to_sdk_datum(datum: &MetricDatum) -> types::MetricDatum {
    let dimension = types::Dimension::builder()
        .name(DIMENSION)
        .value(DIMENSION)
        .build();

    types::MetricDatum::builder()
        .metric_name(&datum.metric_name)
        .dimensions(dimension)
        .unit(StandardUnit::Count)
        .value(datum.value)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_datum_matches_request_shape() {
        let sdk = to_sdk_datum(&MetricDatum::count("haproxy", 1.0));

        assert_eq!(sdk.metric_name(), Some("haproxy"));
        assert_eq!(sdk.value(), Some(1.0));
        assert_eq!(sdk.unit(), Some(&StandardUnit::Count));

        let dims = sdk.dimensions();
        assert_eq!(dims.len(), 1);
        assert_eq!(dims[0].name(), Some("count"));
        assert_eq!(dims[0].value(), Some("count"));
    }
}
