//! The serialized summary is a frozen contract: exactly the keys
//! `accessible` and `blocking`, with the legacy tri-state in the latter.

use serde_json::json;
use wc_core::Summary;
use wc_types::BlockingReason;

#[test]
fn undetermined_serializes_null_null() {
    let value = serde_json::to_value(Summary::undetermined()).unwrap();
    assert_eq!(value, json!({"accessible": null, "blocking": null}));
}

#[test]
fn accessible_serializes_blocking_false() {
    // Legacy quirk: a clean run renders blocking as false, not null, so
    // consumers can tell "ran and found nothing" from "failed to run".
    let value = serde_json::to_value(Summary::accessible()).unwrap();
    assert_eq!(value, json!({"accessible": true, "blocking": false}));
}

#[test]
fn blocked_serializes_reason_string() {
    for (reason, wire) in [
        (BlockingReason::Dns, "dns"),
        (BlockingReason::TcpIp, "tcp_ip"),
        (BlockingReason::HttpFailure, "http-failure"),
        (BlockingReason::HttpDiff, "http-diff"),
    ] {
        let value = serde_json::to_value(Summary::blocked(reason)).unwrap();
        assert_eq!(value, json!({"accessible": false, "blocking": wire}));
    }
}

#[test]
fn blocking_reason_never_hits_the_wire() {
    let value = serde_json::to_value(Summary::blocked(BlockingReason::HttpDiff)).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["accessible", "blocking"]);
}
