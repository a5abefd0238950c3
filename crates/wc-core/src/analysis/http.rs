//! HTTP content comparison: did the probe fetch the same page the control
//! fetched?

use crate::evidence::{ContentComparison, HttpSnapshot};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Body length ratio (shorter/longer) above which two bodies count as the
/// same size.
const BODY_PROPORTION_THRESHOLD: f64 = 0.7;

/// Title words shorter than this are too generic to be a signal.
const TITLE_WORD_MIN_LEN: usize = 5;

/// Header names that vary between any two fetches of the same page and
/// therefore carry no signal.
static COMMON_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accept-ranges",
        "age",
        "cache-control",
        "connection",
        "content-encoding",
        "content-length",
        "content-type",
        "date",
        "etag",
        "expires",
        "last-modified",
        "location",
        "pragma",
        "server",
        "set-cookie",
        "strict-transport-security",
        "transfer-encoding",
        "vary",
        "via",
        "x-cache",
        "x-frame-options",
        "x-powered-by",
    ]
    .into_iter()
    .collect()
});

/// Compute all four content-comparison flags at once.
pub fn compare_content(probe: &HttpSnapshot, control: &HttpSnapshot) -> ContentComparison {
    ContentComparison {
        status_code_match: status_code_match(probe.status_code, control.status_code),
        body_length_match: body_length_match(probe.body_length, control.body_length),
        headers_match: headers_match(probe, control),
        title_match: title_match(probe.title.as_deref(), control.title.as_deref()),
    }
}

/// Status codes compare directly, except that a 5xx from the control on a
/// mismatch proves nothing: the control may simply have been served an
/// error page the probe was not.
pub fn status_code_match(probe: Option<u16>, control: Option<u16>) -> Option<bool> {
    let (probe, control) = (probe?, control?);
    if probe == control {
        return Some(true);
    }
    if control / 100 == 5 {
        return None;
    }
    Some(false)
}

/// Two bodies count as matching when the shorter is at least 70% of the
/// longer.
pub fn body_length_match(probe: Option<u64>, control: Option<u64>) -> Option<bool> {
    let (probe, control) = (probe?, control?);
    if probe == 0 || control == 0 {
        return None;
    }
    let ratio = probe.min(control) as f64 / probe.max(control) as f64;
    Some(ratio > BODY_PROPORTION_THRESHOLD)
}

/// Compare the sets of header names, ignoring the commonly-varying ones.
/// Matching means neither side carries a distinctive header the other
/// lacks.
pub fn headers_match(probe: &HttpSnapshot, control: &HttpSnapshot) -> Option<bool> {
    if probe.headers.is_empty() || control.headers.is_empty() {
        return None;
    }
    let distinctive = |snapshot: &HttpSnapshot| -> HashSet<String> {
        snapshot
            .headers
            .keys()
            .map(|name| name.to_ascii_lowercase())
            .filter(|name| !COMMON_HEADERS.contains(name.as_str()))
            .collect()
    };
    Some(distinctive(probe) == distinctive(control))
}

/// Every sufficiently long word of the control's title must appear in the
/// probe's title, case-insensitively. Short words are skipped; they match
/// by accident too often.
pub fn title_match(probe: Option<&str>, control: Option<&str>) -> Option<bool> {
    let (probe, control) = (probe?, control?);
    if probe.is_empty() || control.is_empty() {
        return None;
    }
    let probe_words: HashSet<String> = probe
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    let matched = control
        .split_whitespace()
        .filter(|word| word.chars().count() >= TITLE_WORD_MIN_LEN)
        .all(|word| probe_words.contains(&word.to_lowercase()));
    Some(matched)
}
