//! Named-number telemetry publishing

use tracing::info;

/// Write-only sink for named diagnostic numbers.
///
/// Publishing is fire-and-forget and must never fail or block the tick.
/// Names are stable strings such as `"FR Swrv Pos0"`.
pub trait TelemetrySink {
    /// Publish `value` under `name`, replacing any previous value.
    fn put_number(&mut self, name: &str, value: f64);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for &mut T {
    fn put_number(&mut self, name: &str, value: f64) {
        (**self).put_number(name, value);
    }
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for Box<T> {
    fn put_number(&mut self, name: &str, value: f64) {
        (**self).put_number(name, value);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    #[inline]
    fn put_number(&mut self, _name: &str, _value: f64) {}
}

/// Emits each number as a structured `tracing` event.
///
/// Events use the `swerve::telemetry` target so a dashboard bridge or log
/// filter can pick them out, e.g. `RUST_LOG=swerve::telemetry=info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn put_number(&mut self, name: &str, value: f64) {
        info!(target: "swerve::telemetry", name, value, "telemetry");
    }
}
