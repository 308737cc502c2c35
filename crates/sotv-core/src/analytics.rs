//! Fire-and-forget analytics side channel.
//!
//! Events are `(name, params)` pairs. Sinks never fail the caller.

/// Destination for analytics events.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &str, params: &[(&str, &str)]);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: &str, _params: &[(&str, &str)]) {}
}

/// Records events to the log under the `sotv::analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &str, params: &[(&str, &str)]) {
        tracing::info!(target: "sotv::analytics", event, params = ?params, "analytics event");
    }
}

/// Sink selected by the `analytics` config flag.
pub fn sink_for(enabled: bool) -> std::sync::Arc<dyn AnalyticsSink> {
    if enabled {
        std::sync::Arc::new(TracingAnalytics)
    } else {
        std::sync::Arc::new(NoopAnalytics)
    }
}
