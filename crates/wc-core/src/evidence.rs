//! The evidence record handed to the determination engine.
//!
//! Any measurement stage may have died before later stages ran, so every
//! field except the TCP counters is independently optional. The engine
//! checks presence before every use; absent never means `false`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wc_types::{DnsConsistency, FailureCode, Scheme};

/// One attempted HTTP request. Redirect chains produce one entry per hop,
/// ordered from the first request issued to the last.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestOutcome {
    pub url: String,
    pub scheme: Scheme,
    pub failure: Option<FailureCode>,
}

impl HttpRequestOutcome {
    /// Build an outcome for `url`, deriving the scheme from the URL itself.
    pub fn new(url: impl Into<String>, failure: Option<FailureCode>) -> Self {
        let url = url.into();
        let scheme = Scheme::of_url(&url);
        Self {
            url,
            scheme,
            failure,
        }
    }
}

/// Response fields compared between probe and control.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HttpSnapshot {
    pub status_code: Option<u16>,
    pub body_length: Option<u64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub title: Option<String>,
}

/// The control's own HTTP fetch of the target.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ControlHttpRequest {
    pub failure: Option<FailureCode>,
    #[serde(flatten)]
    pub response: HttpSnapshot,
}

/// The trusted reference measurement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ControlOutcome {
    pub http_request: ControlHttpRequest,
}

/// TCP connect counters across all endpoints tried for the target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TcpEvidence {
    #[serde(rename = "tcp_connect_attempts")]
    pub attempts: u64,
    #[serde(rename = "tcp_connect_successes")]
    pub successes: u64,
}

/// Probe-vs-control content comparison. Each flag is absent when the
/// comparison was not computable for this run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentComparison {
    pub status_code_match: Option<bool>,
    pub body_length_match: Option<bool>,
    pub headers_match: Option<bool>,
    pub title_match: Option<bool>,
}

/// Everything a finished measurement run knows, frozen into one snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Failure of the dedicated DNS experiment, if it ran and failed.
    pub dns_experiment_failure: Option<FailureCode>,
    pub dns_consistency: Option<DnsConsistency>,
    /// Set when the control service itself was unreachable or errored.
    pub control_failure: Option<FailureCode>,
    #[serde(default)]
    pub control: ControlOutcome,
    #[serde(flatten)]
    pub tcp: TcpEvidence,
    #[serde(default)]
    pub requests: Vec<HttpRequestOutcome>,
    #[serde(flatten)]
    pub comparison: ContentComparison,
}
