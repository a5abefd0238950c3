//! Pure probe-vs-control comparison functions.
//!
//! These populate the optional comparison fields of the evidence record
//! before the engine runs. They consume already-collected observations and
//! never touch the network; "not computable" is an answer, not an error.

pub mod dns;
pub mod http;

pub use dns::{dns_consistency, DnsObservation};
pub use http::compare_content;
