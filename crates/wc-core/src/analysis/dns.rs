//! DNS consistency: does the probe's resolver tell the same story as the
//! control's?

use std::collections::HashSet;
use std::net::IpAddr;
use wc_types::{DnsConsistency, FailureCode};

/// What one side's DNS lookup produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DnsObservation {
    pub failure: Option<FailureCode>,
    pub addrs: Vec<IpAddr>,
}

impl DnsObservation {
    pub fn resolved(addrs: Vec<IpAddr>) -> Self {
        Self {
            failure: None,
            addrs,
        }
    }

    pub fn failed(failure: FailureCode) -> Self {
        Self {
            failure: Some(failure),
            addrs: Vec::new(),
        }
    }
}

/// Compare the probe's lookup against the control's.
///
/// Consistent when both sides agree the name does not exist, or when the
/// answer sets share at least one address. Inconsistent when both sides
/// resolved but to disjoint sets. Anything else (one side errored, one
/// side empty-handed without an error) is not decidable from the data we
/// carry, so the verdict stays absent.
pub fn dns_consistency(
    probe: &DnsObservation,
    control: &DnsObservation,
) -> Option<DnsConsistency> {
    if probe.failure == Some(FailureCode::DnsNxdomain)
        && control.failure == Some(FailureCode::DnsNxdomain)
    {
        return Some(DnsConsistency::Consistent);
    }
    if probe.failure.is_some() || control.failure.is_some() {
        return None;
    }
    if probe.addrs.is_empty() || control.addrs.is_empty() {
        return None;
    }
    let control_set: HashSet<&IpAddr> = control.addrs.iter().collect();
    if probe.addrs.iter().any(|addr| control_set.contains(addr)) {
        Some(DnsConsistency::Consistent)
    } else {
        Some(DnsConsistency::Inconsistent)
    }
}
