//! Metrics for the output validator.

use std::sync::Arc;

/// The [OutputMetrics] trait defines the sink the [OutputValidator](crate::OutputValidator)
/// reports fetch latency to.
pub trait OutputMetrics: Send + Sync {
    /// Records the time, in seconds, taken to fetch an output root from the trusted node.
    fn record_output_fetch_time(&self, fetch_time: f64);
}

impl<T: OutputMetrics + ?Sized> OutputMetrics for Arc<T> {
    fn record_output_fetch_time(&self, fetch_time: f64) {
        (**self).record_output_fetch_time(fetch_time)
    }
}

/// The [Metrics] sink records to the global `metrics` recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the histogram that tracks trusted output root fetch latency.
    pub const OUTPUT_FETCH_TIME: &'static str = "op_dispute_mon_output_fetch_time_seconds";

    /// Describes the metrics recorded by the validator to the installed recorder.
    pub fn describe() {
        ::metrics::describe_histogram!(
            Self::OUTPUT_FETCH_TIME,
            ::metrics::Unit::Seconds,
            "Time taken to fetch an output root from the trusted rollup node"
        );
    }
}

impl OutputMetrics for Metrics {
    fn record_output_fetch_time(&self, fetch_time: f64) {
        ::metrics::histogram!(Self::OUTPUT_FETCH_TIME).record(fetch_time);
    }
}

/// The [NoopMetrics] sink discards every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl OutputMetrics for NoopMetrics {
    fn record_output_fetch_time(&self, _: f64) {}
}
