//! Statement metrics and tracing spans.
//!
//! With the `metrics` feature, every dispatched statement is counted and
//! timed through the global OpenTelemetry meter; installing an exporter is
//! up to the application. With the `tracing` feature, every statement runs
//! inside a `dbc.statement` span.

#[cfg(feature = "metrics")]
use once_cell::sync::Lazy;
#[cfg(feature = "metrics")]
use opentelemetry::{
    global,
    metrics::{Counter, Histogram},
    KeyValue,
};

#[cfg(feature = "metrics")]
pub static METRICS: Lazy<DbcMetrics> = Lazy::new(DbcMetrics::init);

#[cfg(feature = "metrics")]
pub struct DbcMetrics {
    pub statements_total: Counter<u64>,
    pub statement_errors_total: Counter<u64>,
    pub statement_duration: Histogram<f64>,
}

#[cfg(feature = "metrics")]
impl DbcMetrics {
    pub fn init() -> Self {
        let meter = global::meter("dbc");

        let statements_total = meter
            .u64_counter("dbc_statements_total")
            .with_description("Total statements dispatched")
            .build();

        let statement_errors_total = meter
            .u64_counter("dbc_statement_errors_total")
            .with_description("Statements that returned an error")
            .build();

        let statement_duration = meter
            .f64_histogram("dbc_statement_duration_seconds")
            .with_description("Duration of statements")
            .build();

        Self {
            statements_total,
            statement_errors_total,
            statement_duration,
        }
    }

    pub fn record_statement(&self, kind: &'static str, elapsed: std::time::Duration) {
        let attrs = [KeyValue::new("kind", kind)];
        self.statements_total.add(1, &attrs);
        self.statement_duration.record(elapsed.as_secs_f64(), &attrs);
    }

    pub fn record_statement_error(&self, kind: &'static str) {
        self.statement_errors_total
            .add(1, &[KeyValue::new("kind", kind)]);
    }
}

#[cfg(feature = "tracing")]
pub mod tracing_helpers {
    use tracing::Span;

    /// Span wrapping one dispatched statement
    pub fn statement_span(kind: &'static str, table: &'static str) -> Span {
        tracing::info_span!("dbc.statement", kind = kind, table = table)
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "metrics")]
    #[test]
    fn test_recording_without_exporter() {
        // The global meter is a no-op until an exporter is installed.
        super::METRICS.record_statement("select", std::time::Duration::from_millis(3));
        super::METRICS.record_statement_error("delete");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_statement_span_enters() {
        let span = super::tracing_helpers::statement_span("insert", "table_test03");
        let _guard = span.enter();
    }
}
