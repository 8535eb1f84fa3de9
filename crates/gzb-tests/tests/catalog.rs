//! Catalog contract tests: population, lookup, and verification.
//!
//! The expansion-correctness tests (blob × rounds passes → nominal
//! bytes) live in `expansion.rs`; this file covers the table itself.

use gzb_catalog::{Catalog, CatalogError, SizeLabel};

#[test]
fn every_enumerated_label_resolves() {
    let catalog = Catalog::global();
    for label in SizeLabel::ALL {
        let entry = catalog
            .lookup_str(label.as_str())
            .unwrap_or_else(|e| panic!("tier {label} failed lookup: {e}"));
        assert!(!entry.is_empty());
        assert!(entry.rounds() >= 1 && entry.rounds() <= 4);
    }
}

#[test]
fn unknown_label_fails_without_fallback() {
    let catalog = Catalog::global();
    let err = catalog.lookup_str("not-a-real-size").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownSizeLabel { ref label } if label == "not-a-real-size"
    ));
}

#[test]
fn reference_round_table_is_preserved() {
    // The tier → rounds mapping from the reference catalog. A change
    // here silently changes what every client on the wire is told.
    let expected = [
        ("1k", 1),
        ("10k", 1),
        ("100k", 2),
        ("1M", 2),
        ("10M", 2),
        ("100M", 3),
        ("1G", 3),
        ("10G", 4),
    ];
    let catalog = Catalog::global();
    for (label, rounds) in expected {
        assert_eq!(
            catalog.lookup_str(label).unwrap().rounds(),
            rounds,
            "tier {label}"
        );
    }
}

#[test]
fn structural_verification_accepts_the_embedded_catalog() {
    Catalog::global()
        .verify()
        .expect("the embedded resources must verify on every build");
}

#[test]
fn global_returns_the_same_instance() {
    let a = Catalog::global() as *const Catalog;
    let b = Catalog::global() as *const Catalog;
    assert_eq!(a, b);
}

#[test]
fn entries_are_shared_not_copied() {
    let catalog = Catalog::global();
    let first = catalog.lookup(SizeLabel::G10).data().clone();
    let second = catalog.lookup(SizeLabel::G10).data().clone();
    assert_eq!(first.as_ptr(), second.as_ptr());
}

// Deep verification inflates ~11 GiB of plaintext across the tiers.
// Run with `cargo test -- --ignored` when touching the resources.
#[test]
#[ignore = "expands every tier fully, including 10 GiB for the 10G tier"]
fn deep_verification_accepts_the_embedded_catalog() {
    Catalog::global()
        .verify_deep()
        .expect("every tier must expand to exactly its nominal filler");
}
