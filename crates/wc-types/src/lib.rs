//! wc-types: cross-crate stable contracts (failure codes, shared verdict enums).
//!
//! # Strategic Purpose
//! Every identifier here is part of a wire surface consumed outside this
//! workspace. Variants and their string forms are append-only; renaming one
//! is a breaking change for data consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod failure;

pub use failure::FailureCode;

/// Parse error for the closed wire enums in this crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized {what} value: {value:?}")]
pub struct UnrecognizedValue {
    pub what: &'static str,
    pub value: String,
}

/// Whether the probe's DNS answers agree with the control's.
///
/// Computed by comparing the two answer sets; the determination engine only
/// ever reads it, it never recomputes it. Absence (`Option::None` at use
/// sites) means the comparison was not possible.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsConsistency {
    Consistent,
    Inconsistent,
}

impl DnsConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Inconsistent => "inconsistent",
        }
    }
}

impl fmt::Display for DnsConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsConsistency {
    type Err = UnrecognizedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consistent" => Ok(Self::Consistent),
            "inconsistent" => Ok(Self::Inconsistent),
            other => Err(UnrecognizedValue {
                what: "dns consistency",
                value: other.to_string(),
            }),
        }
    }
}

/// Cause label attached to an inaccessible verdict.
///
/// The string forms mix `_` and `-` separators; that is the historical wire
/// format and must not be normalized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BlockingReason {
    #[serde(rename = "dns")]
    Dns,
    #[serde(rename = "tcp_ip")]
    TcpIp,
    #[serde(rename = "http-failure")]
    HttpFailure,
    #[serde(rename = "http-diff")]
    HttpDiff,
}

impl BlockingReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "dns",
            Self::TcpIp => "tcp_ip",
            Self::HttpFailure => "http-failure",
            Self::HttpDiff => "http-diff",
        }
    }
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockingReason {
    type Err = UnrecognizedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dns" => Ok(Self::Dns),
            "tcp_ip" => Ok(Self::TcpIp),
            "http-failure" => Ok(Self::HttpFailure),
            "http-diff" => Ok(Self::HttpDiff),
            other => Err(UnrecognizedValue {
                what: "blocking reason",
                value: other.to_string(),
            }),
        }
    }
}

/// URL scheme of an attempted HTTP request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Scheme implied by a request URL. Anything that is not `https://`
    /// counts as plain HTTP, mirroring how the measurement pipeline keys
    /// off the URL prefix.
    pub fn of_url(url: &str) -> Self {
        if url.starts_with("https://") {
            Self::Https
        } else {
            Self::Http
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_serialization() {
        let j = serde_json::to_string(&DnsConsistency::Consistent).unwrap();
        assert_eq!(j, r#""consistent""#);
        let back: DnsConsistency = serde_json::from_str(&j).unwrap();
        assert_eq!(back, DnsConsistency::Consistent);
    }

    #[test]
    fn blocking_reason_wire_strings() {
        assert_eq!(BlockingReason::TcpIp.as_str(), "tcp_ip");
        assert_eq!(BlockingReason::HttpFailure.as_str(), "http-failure");
        assert_eq!(
            serde_json::to_string(&BlockingReason::HttpDiff).unwrap(),
            r#""http-diff""#
        );
    }

    #[test]
    fn blocking_reason_parse_round_trip() {
        for reason in [
            BlockingReason::Dns,
            BlockingReason::TcpIp,
            BlockingReason::HttpFailure,
            BlockingReason::HttpDiff,
        ] {
            assert_eq!(reason.as_str().parse::<BlockingReason>().unwrap(), reason);
        }
        let err = "tcp-ip".parse::<BlockingReason>().unwrap_err();
        assert_eq!(err.value, "tcp-ip");
    }

    #[test]
    fn scheme_of_url() {
        assert_eq!(Scheme::of_url("https://example.com/"), Scheme::Https);
        assert_eq!(Scheme::of_url("http://example.com/"), Scheme::Http);
        assert_eq!(Scheme::of_url("example.com"), Scheme::Http);
    }
}
