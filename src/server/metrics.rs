//! Prometheus gauges exposed by the probe endpoint

use std::time::Duration;

use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};

use crate::version::types::ProbeOutcome;

/// Content type of the Prometheus text exposition format
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Gauges describing the most recent probe.
///
/// Shared across requests; each probe overwrites `up_to_date` and
/// `probe_duration_seconds`, while `probe_error_count` accumulates over the
/// lifetime of the process.
#[derive(Clone)]
pub struct ProbeMetrics {
    up_to_date: Gauge,
    probe_duration: Gauge,
    probe_errors: Gauge,
}

impl ProbeMetrics {
    pub fn new() -> prometheus::Result<Self> {
        Ok(Self {
            up_to_date: Gauge::with_opts(Opts::new(
                "up_to_date",
                "will be 0 if there is a new version available",
            ))?,
            probe_duration: Gauge::with_opts(Opts::new(
                "probe_duration_seconds",
                "Returns how long the probe took to complete in seconds",
            ))?,
            probe_errors: Gauge::with_opts(Opts::new(
                "probe_error_count",
                "Returns the count of probe errors",
            ))?,
        })
    }

    pub fn record_outcome(&self, outcome: &ProbeOutcome) {
        self.up_to_date.set(outcome.gauge_value());
    }

    pub fn record_error(&self) {
        self.probe_errors.inc();
    }

    pub fn observe_duration(&self, elapsed: Duration) {
        self.probe_duration.set(elapsed.as_secs_f64());
    }

    pub fn error_count(&self) -> f64 {
        self.probe_errors.get()
    }

    /// Render the probe gauges in Prometheus text format.
    ///
    /// A fresh registry is built per call so the output holds only these
    /// three series, independent of the process-wide default registry.
    pub fn render(&self) -> prometheus::Result<String> {
        let registry = Registry::new();
        registry.register(Box::new(self.up_to_date.clone()))?;
        registry.register(Box::new(self.probe_duration.clone()))?;
        registry.register(Box::new(self.probe_errors.clone()))?;

        encode(&registry.gather())
    }
}

/// Render the process-wide default registry
pub fn render_default_registry() -> prometheus::Result<String> {
    encode(&prometheus::gather())
}

fn encode(families: &[prometheus::proto::MetricFamily]) -> prometheus::Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    encoder.encode(families, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
