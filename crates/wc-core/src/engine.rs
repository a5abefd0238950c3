//! The blocking-determination rule chain.
//!
//! Rules run in a fixed order; the first whose guard matches wins and the
//! rest are never consulted. Guards check presence before reading any
//! optional, so a half-empty record falls through cleanly instead of
//! erroring. The order itself is load-bearing: it encodes which layer of
//! interference we trust ourselves to name given partial evidence.

use crate::evidence::EvidenceRecord;
use crate::summary::Summary;
use wc_types::{BlockingReason, DnsConsistency, FailureCode, Scheme};

/// Classify a finished measurement run.
///
/// Total over all well-formed records: a fully-empty record yields the
/// undetermined summary (both fields absent), never an error. Repeated
/// calls on the same record produce identical summaries.
pub fn determine(evidence: &EvidenceRecord) -> Summary {
    // A successful direct HTTPS fetch already survived certificate
    // validation, so either a CA in our pool is compromised, or there is
    // transparent proxying, or we talked to the legit server. We assume
    // the latter. This also covers runs redirected into HTTPS.
    if let Some(first) = evidence.requests.first() {
        if first.scheme == Scheme::Https && first.failure.is_none() {
            return Summary::accessible();
        }
    }
    // Without the control there is no trustworthy reference to compare
    // against, so no verdict can be rendered.
    if evidence.control_failure.is_some() {
        return Summary::undetermined();
    }
    // NXDOMAIN on our side with a consistent control means the domain
    // genuinely does not resolve anymore. Not censorship.
    if evidence.dns_experiment_failure == Some(FailureCode::DnsNxdomain)
        && evidence.dns_consistency == Some(DnsConsistency::Consistent)
    {
        return Summary::undetermined();
    }
    // Every connect attempt failed. If we also know whether the resolver
    // told us the truth, we can pin the layer.
    if evidence.tcp.attempts > 0 && evidence.tcp.successes == 0 {
        if let Some(consistency) = evidence.dns_consistency {
            return match consistency {
                DnsConsistency::Consistent => Summary::blocked(BlockingReason::TcpIp),
                DnsConsistency::Inconsistent => Summary::blocked(BlockingReason::Dns),
            };
        }
    }
    // The control failed its own HTTP fetch; nothing safe to compare.
    if evidence.control.http_request.failure.is_some() {
        return Summary::undetermined();
    }
    let Some(first) = evidence.requests.first() else {
        return Summary::undetermined();
    };
    if let Some(failure) = &first.failure {
        let mut reason = match failure {
            // Possibly a subsequent connection to some other endpoint
            // was blocked.
            FailureCode::ConnectionRefused => Some(BlockingReason::TcpIp),
            // Could be during TLS or later; we cannot tell which, so it
            // stays an HTTP failure.
            FailureCode::ConnectionReset => Some(BlockingReason::HttpFailure),
            // Possibly a subsequent resolution of some other name was
            // blocked.
            FailureCode::DnsNxdomain => Some(BlockingReason::Dns),
            FailureCode::Eof => Some(BlockingReason::HttpFailure),
            // Connect or TLS handshake, unknown which; the common ground
            // is packets being discarded at the TCP/IP layer.
            FailureCode::GenericTimeout => Some(BlockingReason::TcpIp),
            FailureCode::SslInvalidHostname
            | FailureCode::SslInvalidCertificate
            | FailureCode::SslUnknownAuthority => Some(BlockingReason::HttpFailure),
            // Unclassified: be conservative and say nothing.
            FailureCode::Other(_) => None,
        };
        // A single-hop failure with a lying resolver is pinned on the DNS
        // rather than on the layer where the failure surfaced. Longer
        // chains are deliberately left alone.
        if reason.is_some()
            && evidence.requests.len() == 1
            && evidence.dns_consistency == Some(DnsConsistency::Inconsistent)
        {
            reason = Some(BlockingReason::Dns);
        }
        return match reason {
            Some(reason) => Summary::blocked(reason),
            None => Summary::undetermined(),
        };
    }
    // Both our fetch and the control's succeeded; decide whether we got
    // the expected page. Status code must agree plus at least one of the
    // weaker signals.
    if evidence.comparison.status_code_match == Some(true) {
        if evidence.comparison.body_length_match == Some(true) {
            return Summary::accessible();
        }
        if evidence.comparison.headers_match == Some(true) {
            return Summary::accessible();
        }
        if evidence.comparison.title_match == Some(true) {
            return Summary::accessible();
        }
    }
    // Not the expected page. An untrustworthy resolver takes the blame
    // first.
    if evidence.dns_consistency == Some(DnsConsistency::Inconsistent) {
        return Summary::blocked(BlockingReason::Dns);
    }
    // The only remaining conclusion: the page we got differs from the
    // page the control got.
    Summary::blocked(BlockingReason::HttpDiff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::HttpRequestOutcome;

    #[test]
    fn empty_record_is_undetermined() {
        let summary = determine(&EvidenceRecord::default());
        assert_eq!(summary, Summary::undetermined());
    }

    #[test]
    fn https_shortcut_beats_control_failure() {
        let evidence = EvidenceRecord {
            control_failure: Some(FailureCode::GenericTimeout),
            requests: vec![HttpRequestOutcome::new("https://example.com/", None)],
            ..Default::default()
        };
        assert_eq!(determine(&evidence), Summary::accessible());
    }

    #[test]
    fn tcp_failure_without_consistency_falls_through() {
        let evidence = EvidenceRecord {
            tcp: crate::evidence::TcpEvidence {
                attempts: 3,
                successes: 0,
            },
            ..Default::default()
        };
        // No DNS verdict and no requests either: undetermined via the
        // no-requests rule, not via the TCP rule.
        assert_eq!(determine(&evidence), Summary::undetermined());
    }
}
