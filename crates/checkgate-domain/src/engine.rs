use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::error::EngineError;
use crate::policy::{CheckRequest, Mode};
use checkgate_types::CheckVerdict;
use tracing::debug;

/// Evaluate a check that has no enumerated requirement list.
pub fn run_boolean_check(request: &CheckRequest<'_>) -> Result<CheckVerdict, EngineError> {
    evaluate(request, Mode::Boolean)
}

/// Evaluate a check whose found/missing buckets answer an enumerated requirement list.
pub fn run_value_check(request: &CheckRequest<'_>) -> Result<CheckVerdict, EngineError> {
    evaluate(request, Mode::Value)
}

fn evaluate(request: &CheckRequest<'_>, mode: Mode) -> Result<CheckVerdict, EngineError> {
    let records = classify(
        request.evidence,
        request.waivers,
        request.options,
        request.descriptions,
    )?;
    let verdict = aggregate(&records, mode, request.descriptions, request.item_description);

    debug!(
        mode = mode.as_str(),
        records = verdict.details.len(),
        pass = verdict.is_pass,
        value = %verdict.value,
        "check evaluated"
    );

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EvidenceBuckets;
    use crate::policy::CheckOptions;
    use crate::test_support::{buckets, descriptions};
    use crate::waiver::WaiverSet;
    use checkgate_types::{Category, Severity, VerdictValue, ids};

    fn request<'a>(
        evidence: &'a EvidenceBuckets,
        waivers: &'a WaiverSet,
        options: &'a CheckOptions,
        descriptions: &'a crate::policy::Descriptions,
    ) -> CheckRequest<'a> {
        CheckRequest {
            evidence,
            waivers,
            options,
            descriptions,
            item_description: "Netlist/SPEF files",
        }
    }

    #[test]
    fn boolean_check_without_waivers_fails_on_missing_item() {
        let evidence = buckets(&["Netlist File"], &["SPEF File"], &[]);
        let (waivers, options, desc) = (WaiverSet::new(), CheckOptions::default(), descriptions());

        let verdict = run_boolean_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");

        assert!(!verdict.is_pass);
        assert_eq!(verdict.value, VerdictValue::NotApplicable);
        assert_eq!(verdict.count(Severity::Info), 1);
        assert_eq!(verdict.count(Severity::Fail), 1);
        assert_eq!(verdict.item_description, "Netlist/SPEF files");
    }

    #[test]
    fn value_check_with_partial_evidence_fails() {
        let evidence = buckets(&["Netlist File"], &["SPEF File"], &[]);
        let (waivers, options, desc) = (WaiverSet::new(), CheckOptions::default(), descriptions());

        let verdict = run_value_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");

        assert!(!verdict.is_pass);
        assert_eq!(verdict.value, VerdictValue::Count(1));
        assert_eq!(verdict.records(Category::Violation).count(), 1);
    }

    #[test]
    fn waived_requirement_passes_and_counts() {
        let evidence = buckets(&["Netlist File"], &["SPEF File"], &[]);
        let waivers: WaiverSet = [("SPEF", "approved")].into_iter().collect();
        let options = CheckOptions {
            waiver_enabled: true,
            ..CheckOptions::default()
        };
        let desc = descriptions();

        let verdict = run_value_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");

        assert!(verdict.is_pass);
        assert_eq!(verdict.value, VerdictValue::Count(2));
        let waived: Vec<_> = verdict.records(Category::WaivedViolation).collect();
        assert_eq!(waived.len(), 1);
        assert_eq!(waived[0].severity, Severity::Info);
        assert!(waived[0].reason.contains("approved"));
        assert!(waived[0].reason.ends_with(ids::MARKER_WAIVER));
    }

    #[test]
    fn unused_waiver_is_reported_once_as_warning() {
        let evidence = buckets(&["Netlist File", "SPEF File"], &[], &[]);
        let waivers: WaiverSet = [("Legacy Block", "old exception")].into_iter().collect();
        let options = CheckOptions {
            waiver_enabled: true,
            ..CheckOptions::default()
        };
        let desc = descriptions();

        let verdict = run_value_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");

        let unused: Vec<_> = verdict.records(Category::UnusedWaiver).collect();
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].severity, Severity::Warn);
        assert!(unused[0].reason.contains("old exception"));
        assert!(verdict.is_pass);
        assert_eq!(verdict.details.last().map(|r| r.category), Some(Category::UnusedWaiver));
    }

    #[test]
    fn forced_pass_check_passes_with_advisory_trail() {
        let evidence = buckets(&[], &["SPEF File"], &["Stale Netlist"]);
        let options = CheckOptions {
            forced_pass: true,
            advisory_notes: vec!["Signoff owner accepted".to_string()],
            ..CheckOptions::default()
        };
        let (waivers, desc) = (WaiverSet::new(), descriptions());

        let verdict = run_value_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");

        assert!(verdict.is_pass);
        assert_eq!(verdict.value, VerdictValue::Count(0));
        assert_eq!(verdict.count(Severity::Info), 3);
        let advisory = verdict
            .severity_groups
            .values()
            .find(|g| g.description == "Advisory")
            .expect("advisory group");
        assert_eq!(
            advisory.items,
            vec!["Signoff owner accepted", "SPEF File", "Stale Netlist"]
        );
    }

    #[test]
    fn conflicting_modes_surface_as_error() {
        let evidence = EvidenceBuckets::default();
        let options = CheckOptions {
            waiver_enabled: true,
            forced_pass: true,
            ..CheckOptions::default()
        };
        let (waivers, desc) = (WaiverSet::new(), descriptions());

        let err = run_boolean_check(&request(&evidence, &waivers, &options, &desc))
            .expect_err("must fail");
        assert_eq!(err, EngineError::ConflictingWaiverModes);
    }

    #[test]
    fn empty_boolean_check_is_present() {
        let evidence = EvidenceBuckets::default();
        let (waivers, options, desc) = (WaiverSet::new(), CheckOptions::default(), descriptions());

        let verdict = run_boolean_check(&request(&evidence, &waivers, &options, &desc))
            .expect("evaluate");
        assert!(verdict.is_pass);
        assert_eq!(verdict.value, VerdictValue::Present);
        assert!(verdict.details.is_empty());
        assert!(verdict.severity_groups.is_empty());
    }
}
