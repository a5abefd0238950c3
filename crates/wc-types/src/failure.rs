//! Stable failure identifiers for classified transport-layer errors, plus
//! the classifiers that map raw `io`/`tls` errors onto them.
//!
//! Classification is total: anything we cannot name lands in the
//! [`FailureCode::Other`] bucket instead of being dropped or panicking.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A classified low-level network failure.
///
/// The string forms are a frozen contract with data consumers; see the
/// pipeline that stamps them onto measurements before classification.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FailureCode {
    ConnectionRefused,
    ConnectionReset,
    DnsNxdomain,
    Eof,
    GenericTimeout,
    SslInvalidHostname,
    SslInvalidCertificate,
    SslUnknownAuthority,
    /// Unclassified failure, carrying the raw error string.
    Other(String),
}

impl FailureCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConnectionRefused => "connection_refused",
            Self::ConnectionReset => "connection_reset",
            Self::DnsNxdomain => "dns_nxdomain_error",
            Self::Eof => "eof_error",
            Self::GenericTimeout => "generic_timeout_error",
            Self::SslInvalidHostname => "ssl_invalid_hostname",
            Self::SslInvalidCertificate => "ssl_invalid_certificate",
            Self::SslUnknownAuthority => "ssl_unknown_authority",
            Self::Other(raw) => raw,
        }
    }

    /// True when the code is one of the named identifiers above, false for
    /// the open bucket.
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FailureCode {
    fn from(s: &str) -> Self {
        match s {
            "connection_refused" => Self::ConnectionRefused,
            "connection_reset" => Self::ConnectionReset,
            "dns_nxdomain_error" => Self::DnsNxdomain,
            "eof_error" => Self::Eof,
            "generic_timeout_error" => Self::GenericTimeout,
            "ssl_invalid_hostname" => Self::SslInvalidHostname,
            "ssl_invalid_certificate" => Self::SslInvalidCertificate,
            "ssl_unknown_authority" => Self::SslUnknownAuthority,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FailureCode {
    fn from(s: String) -> Self {
        match FailureCode::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            named => named,
        }
    }
}

impl Serialize for FailureCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FailureCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FailureCode::from(raw))
    }
}

/// Map an `io::Error` onto the taxonomy.
pub fn classify_io(e: &std::io::Error) -> FailureCode {
    use std::io::ErrorKind::{ConnectionRefused, ConnectionReset, TimedOut, UnexpectedEof};
    match e.kind() {
        ConnectionRefused => FailureCode::ConnectionRefused,
        ConnectionReset => FailureCode::ConnectionReset,
        TimedOut => FailureCode::GenericTimeout,
        UnexpectedEof => FailureCode::Eof,
        _ => FailureCode::Other(e.to_string()),
    }
}

/// Map a rustls handshake error onto the taxonomy.
#[cfg(feature = "tls-rustls")]
pub fn classify_tls(err: &rustls::Error) -> FailureCode {
    use rustls::CertificateError;
    match err {
        rustls::Error::InvalidCertificate(cert_err) => match cert_err {
            CertificateError::NotValidForName => FailureCode::SslInvalidHostname,
            CertificateError::UnknownIssuer => FailureCode::SslUnknownAuthority,
            _ => FailureCode::SslInvalidCertificate,
        },
        other => FailureCode::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip_named() {
        for code in [
            FailureCode::ConnectionRefused,
            FailureCode::ConnectionReset,
            FailureCode::DnsNxdomain,
            FailureCode::Eof,
            FailureCode::GenericTimeout,
            FailureCode::SslInvalidHostname,
            FailureCode::SslInvalidCertificate,
            FailureCode::SslUnknownAuthority,
        ] {
            assert_eq!(FailureCode::from(code.as_str()), code);
            assert!(code.is_classified());
        }
    }

    #[test]
    fn unknown_string_lands_in_bucket() {
        let code = FailureCode::from("some_exotic_error");
        assert_eq!(code, FailureCode::Other("some_exotic_error".to_string()));
        assert!(!code.is_classified());
        assert_eq!(code.as_str(), "some_exotic_error");
    }

    #[test]
    fn io_refused_reset_timeout() {
        let r = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        assert_eq!(classify_io(&r), FailureCode::ConnectionRefused);
        let c = std::io::Error::from(std::io::ErrorKind::ConnectionReset);
        assert_eq!(classify_io(&c), FailureCode::ConnectionReset);
        let t = std::io::Error::from(std::io::ErrorKind::TimedOut);
        assert_eq!(classify_io(&t), FailureCode::GenericTimeout);
        let other = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(!classify_io(&other).is_classified());
    }

    #[test]
    fn serde_uses_bare_strings() {
        let j = serde_json::to_string(&FailureCode::DnsNxdomain).unwrap();
        assert_eq!(j, r#""dns_nxdomain_error""#);
        let back: FailureCode = serde_json::from_str(r#""eof_error""#).unwrap();
        assert_eq!(back, FailureCode::Eof);
        let bucket: FailureCode = serde_json::from_str(r#""weird""#).unwrap();
        assert_eq!(bucket, FailureCode::Other("weird".to_string()));
    }
}
