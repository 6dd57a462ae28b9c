//! Integration tests for pagination_runtime.
//!
//! Every sequence is built by the kernel; the runtime only wraps it.

use std::fs;
use std::path::PathBuf;

use pagination_sequence::builder::build;
use pagination_sequence::domain::PaginationArgs;
use pagination_sequence::fixtures::{parse_cases, GoldenCase};
use pagination_sequence::hashing::sequence_hash;

use pagination_runtime::drift::{compare_sequences, verify_determinism};
use pagination_runtime::proto_bridge::{
    decode_sequence, encode_sequence, proto_to_args, proto_to_sequence, sequence_to_proto,
};
use pagination_runtime::replay;
use proptest::prelude::*;

/// Golden fingerprint of page 12 of 25 with default display parameters.
const GOLDEN_HASH: &str = "8182a64f8f49d79afafbb568a150e0c3b26b57bc484945294164178644b9666d";

/// Load golden tables from the kernel's test fixtures.
fn load_golden_cases() -> Vec<GoldenCase> {
    let golden_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("pagination_sequence")
        .join("tests")
        .join("golden")
        .join("sequences.json");
    let json_str = fs::read_to_string(&golden_path).expect("Failed to read golden sequences.json");
    parse_cases(&json_str).expect("Failed to parse golden sequences.json")
}

// ─────────────────────────────────────────────────────────────
// Test 1: rebuild_matches_golden_hash
// ─────────────────────────────────────────────────────────────

#[test]
fn rebuild_matches_golden_hash() {
    let (items, hash) = replay::rebuild(&PaginationArgs::new(12, 25)).unwrap();
    assert_eq!(hash, GOLDEN_HASH, "Runtime rebuild hash does not match golden hash");
    assert_eq!(items.len(), 11);
}

// ─────────────────────────────────────────────────────────────
// Test 2: wire_round_trip_preserves_golden_tables
// ─────────────────────────────────────────────────────────────

#[test]
fn wire_round_trip_preserves_golden_tables() {
    for case in load_golden_cases() {
        for page in 1..=case.pages {
            let args = case.args(page);
            let items = build(&args).unwrap();

            let bytes = encode_sequence(&sequence_to_proto(&args, &items));
            let decoded = decode_sequence(&bytes).expect("decode");

            assert_eq!(proto_to_args(decoded.args.as_ref().unwrap()), args);
            assert_eq!(decoded.fingerprint, sequence_hash(&items));
            let back = proto_to_sequence(&decoded)
                .unwrap_or_else(|e| panic!("{} page={}: {}", case.name, page, e));
            assert_eq!(back, items, "{} page={}", case.name, page);
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Test 3: determinism_over_golden_tables
// ─────────────────────────────────────────────────────────────

#[test]
fn determinism_over_golden_tables() {
    for case in load_golden_cases() {
        for page in 1..=case.pages {
            let args = case.args(page);
            let hash = verify_determinism(&args).expect("deterministic");
            assert_eq!(hash, replay::rebuild_hash(&args).unwrap());
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Test 4: drift_across_a_full_walk
// ─────────────────────────────────────────────────────────────

#[test]
fn drift_across_a_full_walk() {
    // Walking 1..=25 one page at a time: the window shifts by at most one
    // page per step in the middle band, and never exceeds two ellipses.
    let mut previous = build(&PaginationArgs::new(1, 25)).unwrap();
    for page in 2..=25 {
        let next = build(&PaginationArgs::new(page, 25)).unwrap();
        let report = compare_sequences(&previous, &next);
        assert!(report.ellipsis_count_b <= 2);
        assert!(report.retained_pages.contains(&1));
        assert!(report.retained_pages.contains(&25));
        if (8..=19).contains(&page) {
            assert_eq!(report.added_pages, vec![page + 2]);
            assert_eq!(report.removed_pages, vec![page - 3]);
        }
        previous = next;
    }
}

// ─────────────────────────────────────────────────────────────
// Test 5: drift_report_serializes_in_field_order
// ─────────────────────────────────────────────────────────────

#[test]
fn drift_report_serializes_in_field_order() {
    let a = build(&PaginationArgs::new(12, 25)).unwrap();
    let b = build(&PaginationArgs::new(13, 25)).unwrap();
    let json = serde_json::to_string(&compare_sequences(&a, &b)).unwrap();
    assert!(json.starts_with(r#"{"item_count_a":11,"item_count_b":11,"#));
    assert!(json.contains(r#""added_pages":[15],"removed_pages":[10]"#));
    assert!(json.ends_with(r#""identical":false}"#));
}

// ─────────────────────────────────────────────────────────────
// Test 6: wire form survives arbitrary valid requests
// ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wire_form_is_lossless(pages in 1i64..500, edges in 0i64..5, neighbors in 0i64..5, seed in 0i64..500) {
        let page = 1 + seed % pages;
        let args = PaginationArgs::new(page, pages).with_edges(edges).with_neighbors(neighbors);
        let items = build(&args).unwrap();
        let decoded = decode_sequence(&encode_sequence(&sequence_to_proto(&args, &items))).unwrap();
        prop_assert_eq!(proto_to_sequence(&decoded).unwrap(), items);
    }
}
