//! wc-core: the blocking-classification engine for web-connectivity
//! measurements.
//!
//! A measurement run produces an [`EvidenceRecord`] (DNS consistency, TCP
//! connect counters, the trusted control result, the HTTP request chain and
//! the probe-vs-control content comparison). [`determine`] walks that record
//! through an ordered rule chain and yields a [`Summary`], which renders to
//! the legacy `accessible`/`blocking` wire pair.
//!
//! Everything in this crate is pure and synchronous: no I/O, no retries, no
//! shared state. The surrounding probe pipeline owns the network.

pub mod analysis;
pub mod engine;
pub mod evidence;
pub mod log;
pub mod summary;

pub use engine::determine;
pub use evidence::{
    ContentComparison, ControlHttpRequest, ControlOutcome, EvidenceRecord, HttpRequestOutcome,
    HttpSnapshot, TcpEvidence,
};
pub use log::{Logger, NullLogger, TracingLogger};
pub use summary::{Blocking, Summary};
