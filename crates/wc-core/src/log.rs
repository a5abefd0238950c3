//! The logging seam: one formatted-info-line capability, injected so the
//! renderer never depends on a concrete backend.

/// Minimal logging collaborator.
pub trait Logger: Send + Sync {
    fn info(&self, line: &str);
}

/// Forwards to the `tracing` backend the rest of the stack runs on.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, line: &str) {
        tracing::info!(target: "wc_core", "{line}");
    }
}

/// Discards everything. Useful for callers that only want the summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _line: &str) {}
}
