//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Determinism of the whole pipeline
//! - Pass/fail following the presence of unwaived violations
//! - Waiver idempotence and the value count
//! - Auxiliary items never feeding the value

use crate::engine::{run_boolean_check, run_value_check};
use crate::model::{AuxiliaryItem, Bucket, EvidenceBuckets, EvidenceItem};
use crate::policy::{CheckOptions, CheckRequest};
use crate::test_support::descriptions;
use crate::waiver::{WaiverLedger, WaiverSet, resolve};
use checkgate_types::{Category, Origin, Severity, VerdictValue, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Short artifact-like names, sometimes multi-word, sometimes empty.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => prop::string::string_regex("[A-Za-z]{1,6}( [A-Za-z]{1,6}){0,2}")
            .expect("valid regex"),
        1 => Just(String::new()),
    ]
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 0..6)
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Fail),
    ]
}

fn arb_waivers() -> impl Strategy<Value = WaiverSet> {
    prop::collection::vec((arb_name(), "[a-z]{0,8}"), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Auxiliary picks: either a fresh name or an index into names already in play.
fn arb_aux() -> impl Strategy<Value = Vec<(Option<prop::sample::Index>, String)>> {
    prop::collection::vec((prop::option::of(any::<prop::sample::Index>()), arb_name()), 0..6)
}

/// Reuse evidence and waiver names so auxiliary items collide with them.
fn to_aux(
    picks: &[(Option<prop::sample::Index>, String)],
    pool: &[String],
) -> Vec<AuxiliaryItem> {
    picks
        .iter()
        .map(|(index, fresh)| match index {
            Some(index) if !pool.is_empty() => AuxiliaryItem::new(index.get(pool).clone()),
            _ => AuxiliaryItem::new(fresh.clone()),
        })
        .collect()
}

fn to_buckets(found: &[String], missing: &[String], extra: &[String]) -> EvidenceBuckets {
    let mut out = EvidenceBuckets::default();
    for (names, bucket) in [
        (found, Bucket::Found),
        (missing, Bucket::Missing),
        (extra, Bucket::Extra),
    ] {
        for name in names {
            out.push(EvidenceItem::new(name.clone(), bucket));
        }
    }
    out
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        waivers in arb_waivers(),
        waiver_enabled in any::<bool>(),
        extra_severity in arb_severity(),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let options = CheckOptions { waiver_enabled, extra_severity, ..CheckOptions::default() };
        let desc = descriptions();
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &options,
            descriptions: &desc,
            item_description: "items",
        };

        let a = run_value_check(&request).expect("valid options");
        let b = run_value_check(&request).expect("valid options");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn pass_iff_no_violation(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        waivers in arb_waivers(),
        waiver_enabled in any::<bool>(),
        extra_severity in arb_severity(),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let options = CheckOptions { waiver_enabled, extra_severity, ..CheckOptions::default() };
        let desc = descriptions();
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &options,
            descriptions: &desc,
            item_description: "items",
        };

        let verdict = run_boolean_check(&request).expect("valid options");
        let has_violation = verdict.details.iter().any(|r| r.category == Category::Violation);
        prop_assert_eq!(verdict.is_pass, !has_violation);
        prop_assert_eq!(
            verdict.value == VerdictValue::Present,
            verdict.is_pass
        );
    }

    #[test]
    fn consuming_the_same_name_twice_changes_nothing(
        name in arb_name(),
        waivers in arb_waivers(),
    ) {
        let mut ledger = WaiverLedger::new(&waivers);
        let first = ledger.consume(&name).map(|m| m.index);
        let used_after_first = ledger.used_count();
        let second = ledger.consume(&name).map(|m| m.index);

        prop_assert_eq!(first, second);
        prop_assert_eq!(used_after_first, ledger.used_count());
        prop_assert_eq!(first, resolve(&name, &waivers).map(|m| m.index));
    }

    #[test]
    fn value_counts_found_and_waived_requirements_only(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        waivers in arb_waivers(),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let options = CheckOptions { waiver_enabled: true, ..CheckOptions::default() };
        let desc = descriptions();
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &options,
            descriptions: &desc,
            item_description: "items",
        };

        let verdict = run_value_check(&request).expect("valid options");
        let waived_missing = verdict
            .details
            .iter()
            .filter(|r| r.category == Category::WaivedViolation && r.origin == Origin::Missing)
            .count();
        let expected = u32::try_from(found.len() + waived_missing).expect("small");
        prop_assert_eq!(verdict.value, VerdictValue::Count(expected));
    }

    #[test]
    fn auxiliary_items_never_change_the_value(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        waivers in arb_waivers(),
        picks in arb_aux(),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let pool: Vec<String> = found
            .iter()
            .chain(&missing)
            .cloned()
            .chain(waivers.iter().map(|w| w.key.clone()))
            .collect();
        let auxiliary_items = to_aux(&picks, &pool);
        let desc = descriptions();

        let bare = CheckOptions { waiver_enabled: true, ..CheckOptions::default() };
        let with_aux = CheckOptions {
            auxiliary_items: auxiliary_items.clone(),
            ..bare.clone()
        };
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &with_aux,
            descriptions: &desc,
            item_description: "items",
        };

        let baseline = run_value_check(&CheckRequest { options: &bare, ..request })
            .expect("valid options");
        let verdict = run_value_check(&request).expect("valid options");

        let waived_missing = verdict
            .details
            .iter()
            .filter(|r| r.category == Category::WaivedViolation && r.origin == Origin::Missing)
            .count();
        let expected = u32::try_from(found.len() + waived_missing).expect("small");
        prop_assert_eq!(&verdict.value, &VerdictValue::Count(expected));
        prop_assert_eq!(&verdict.value, &baseline.value);
        prop_assert_eq!(
            verdict.records(Category::AuxiliaryInfo).count(),
            auxiliary_items.len()
        );
        prop_assert!(
            verdict
                .records(Category::AuxiliaryInfo)
                .all(|r| r.origin == Origin::Auxiliary)
        );
    }

    #[test]
    fn forced_pass_leaves_no_violation(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        extra_severity in arb_severity(),
        notes in prop::collection::vec("[a-z ]{1,12}", 0..3),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let options = CheckOptions {
            forced_pass: true,
            extra_severity,
            advisory_notes: notes.clone(),
            ..CheckOptions::default()
        };
        let waivers = WaiverSet::new();
        let desc = descriptions();
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &options,
            descriptions: &desc,
            item_description: "items",
        };

        let verdict = run_value_check(&request).expect("valid options");
        prop_assert!(verdict.is_pass);
        prop_assert!(verdict.details.iter().all(|r| r.severity == Severity::Info));

        let advisory: Vec<_> = verdict.records(Category::Advisory).collect();
        prop_assert_eq!(advisory.len(), missing.len() + extra.len() + notes.len());
        for (record, note) in advisory.iter().zip(notes.iter()) {
            prop_assert_eq!(&record.name, note);
            prop_assert!(record.reason.ends_with(ids::MARKER_ADVISORY_NOTE));
        }
        for record in advisory.iter().skip(notes.len()) {
            prop_assert!(record.reason.ends_with(ids::MARKER_FORCED_PASS));
        }
    }

    #[test]
    fn details_are_ordered_by_rank(
        found in arb_names(),
        missing in arb_names(),
        extra in arb_names(),
        waivers in arb_waivers(),
    ) {
        let evidence = to_buckets(&found, &missing, &extra);
        let options = CheckOptions { waiver_enabled: true, ..CheckOptions::default() };
        let desc = descriptions();
        let request = CheckRequest {
            evidence: &evidence,
            waivers: &waivers,
            options: &options,
            descriptions: &desc,
            item_description: "items",
        };

        let verdict = run_value_check(&request).expect("valid options");
        let ranks: Vec<u8> = verdict.details.iter().map(|r| r.category.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }
}
