use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::rng::{derive_substream_seed, RngHandle};
use rand::RngCore;

#[test]
fn error_display_carries_code_and_context() {
    let error = HygError::Graph(
        ErrorInfo::new("unknown-vertex", "vertex does not exist")
            .with_context("vertex", "7")
            .with_hint("add the vertex first"),
    );
    let rendered = error.to_string();
    assert!(rendered.contains("unknown-vertex"));
    assert!(rendered.contains("vertex=7"));
    assert!(rendered.contains("add the vertex first"));
    assert_eq!(error.code(), "unknown-vertex");
}

#[test]
fn error_payload_round_trips_through_json() {
    let error = HygError::Path(
        ErrorInfo::new("negative-cycle", "graph contains a negative-weight cycle")
            .with_context("start", "3"),
    );
    let encoded = serde_json::to_string(&error).unwrap();
    let decoded: HygError = serde_json::from_str(&encoded).unwrap();
    assert_eq!(error, decoded);
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut first = RngHandle::from_seed(99);
    let mut second = RngHandle::from_seed(99);
    for _ in 0..16 {
        assert_eq!(first.next_u64(), second.next_u64());
    }
}

#[test]
fn substreams_are_stable_and_independent() {
    assert_eq!(
        derive_substream_seed(42, 0),
        derive_substream_seed(42, 0)
    );
    assert_ne!(
        derive_substream_seed(42, 0),
        derive_substream_seed(42, 1)
    );
    let mut stream_a = RngHandle::for_substream(42, 0);
    let mut stream_b = RngHandle::for_substream(42, 1);
    assert_ne!(stream_a.next_u64(), stream_b.next_u64());
}
