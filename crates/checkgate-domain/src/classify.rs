//! Outcome classification: evidence buckets in, normalized outcome records out.
//!
//! Steps always run in the same order so the output is reproducible:
//! found, auxiliary, missing, extra, unused waivers, then the forced-pass rewrite.

use crate::error::EngineError;
use crate::model::{EvidenceBuckets, EvidenceItem};
use crate::policy::{CheckOptions, Descriptions};
use crate::waiver::{WaiverLedger, WaiverMatch, WaiverSet};
use checkgate_types::{Category, LogPath, Metadata, Origin, OutcomeRecord, Severity, ids};
use tracing::debug;

/// Reject option combinations that make no sense before doing any work.
pub fn validate(options: &CheckOptions) -> Result<(), EngineError> {
    if options.waiver_enabled && options.forced_pass {
        return Err(EngineError::ConflictingWaiverModes);
    }
    if !options.advisory_notes.is_empty() && !options.forced_pass {
        return Err(EngineError::NotesWithoutForcedPass);
    }
    Ok(())
}

pub fn classify(
    evidence: &EvidenceBuckets,
    waivers: &WaiverSet,
    options: &CheckOptions,
    descriptions: &Descriptions,
) -> Result<Vec<OutcomeRecord>, EngineError> {
    validate(options)?;

    let builder = RecordBuilder { options };
    let mut ledger = WaiverLedger::new(waivers);
    let mut records = Vec::with_capacity(
        evidence.len() + options.auxiliary_items.len() + waivers.len() + options.advisory_notes.len(),
    );

    for item in &evidence.found {
        records.push(builder.item(
            item,
            Severity::Info,
            Category::Satisfied,
            Origin::Found,
            descriptions.satisfied_reason.render(&item.metadata),
        ));
    }

    for aux in &options.auxiliary_items {
        records.push(builder.build(
            &aux.name,
            &aux.metadata,
            Severity::Info,
            Category::AuxiliaryInfo,
            Origin::Auxiliary,
            descriptions.auxiliary_reason.render(&aux.metadata),
        ));
    }

    for item in &evidence.missing {
        let waiver = consume(&mut ledger, options, item);
        let record = match waiver {
            Some(m) => builder.item(
                item,
                Severity::Info,
                Category::WaivedViolation,
                Origin::Missing,
                waived_reason(descriptions, item, m),
            ),
            None => {
                // A parser-supplied reason ("Skipped", "Not generated") beats the generic text.
                let reason = item
                    .metadata
                    .text("reason")
                    .map(str::to_string)
                    .unwrap_or_else(|| descriptions.violation_reason.render(&item.metadata));
                builder.item(item, Severity::Fail, Category::Violation, Origin::Missing, reason)
            }
        };
        records.push(record);
    }

    for item in &evidence.extra {
        let waiver = consume(&mut ledger, options, item);
        let record = match waiver {
            Some(m) => builder.item(
                item,
                Severity::Info,
                Category::WaivedViolation,
                Origin::Extra,
                waived_reason(descriptions, item, m),
            ),
            None => builder.item(
                item,
                options.extra_severity,
                Category::Violation,
                Origin::Extra,
                descriptions.extra_reason.render(&item.metadata),
            ),
        };
        records.push(record);
    }

    if options.waiver_enabled {
        for entry in ledger.unused() {
            debug!(waiver = %entry.key, "waiver matched no item");
            let base = descriptions.unused_waiver_reason.render(&Metadata::default());
            records.push(OutcomeRecord {
                name: entry.key.clone(),
                severity: Severity::Warn,
                category: Category::UnusedWaiver,
                origin: Origin::Waiver,
                line_number: None,
                file_path: None,
                reason: join_reason(&base, &entry.reason),
            });
        }
    }

    if options.forced_pass {
        records = force_pass(records, &options.advisory_notes);
    }

    Ok(records)
}

fn consume<'a>(
    ledger: &mut WaiverLedger<'a>,
    options: &CheckOptions,
    item: &EvidenceItem,
) -> Option<WaiverMatch<'a>> {
    if !options.waiver_enabled {
        return None;
    }
    ledger.consume(&item.name)
}

fn waived_reason(descriptions: &Descriptions, item: &EvidenceItem, m: WaiverMatch<'_>) -> String {
    let base = descriptions.waived_base_reason.render(&item.metadata);
    format!("{}{}", join_reason(&base, &m.entry.reason), ids::MARKER_WAIVER)
}

fn join_reason(base: &str, detail: &str) -> String {
    match (base.is_empty(), detail.trim().is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => detail.to_string(),
        (false, false) => format!("{base}: {detail}"),
    }
}

/// Rewrite violations as advisory info and put configured notes ahead of them.
///
/// Notes lead the advisory slot, after satisfied, auxiliary and waived records.
fn force_pass(records: Vec<OutcomeRecord>, notes: &[String]) -> Vec<OutcomeRecord> {
    let (violations, mut out): (Vec<_>, Vec<_>) =
        records.into_iter().partition(OutcomeRecord::is_violation);

    debug!(
        downgraded = violations.len(),
        notes = notes.len(),
        "forced pass: downgrading violations"
    );

    out.extend(notes.iter().map(|note| OutcomeRecord {
        name: note.clone(),
        severity: Severity::Info,
        category: Category::Advisory,
        origin: Origin::Note,
        line_number: None,
        file_path: None,
        reason: format!("{}{}", note, ids::MARKER_ADVISORY_NOTE),
    }));

    out.extend(violations.into_iter().map(|mut record| {
        record.severity = Severity::Info;
        record.category = Category::Advisory;
        record.reason.push_str(ids::MARKER_FORCED_PASS);
        record
    }));

    out
}

struct RecordBuilder<'a> {
    options: &'a CheckOptions,
}

impl RecordBuilder<'_> {
    fn item(
        &self,
        item: &EvidenceItem,
        severity: Severity,
        category: Category,
        origin: Origin,
        reason: String,
    ) -> OutcomeRecord {
        self.build(&item.name, &item.metadata, severity, category, origin, reason)
    }

    fn build(
        &self,
        raw_name: &str,
        metadata: &Metadata,
        severity: Severity,
        category: Category,
        origin: Origin,
        reason: String,
    ) -> OutcomeRecord {
        // The decision is already made on the raw name; only now apply display formatting.
        let name = match &self.options.display_name {
            Some(formatter) => formatter.format(raw_name, metadata),
            None => raw_name.to_string(),
        };
        OutcomeRecord {
            name,
            severity,
            category,
            origin,
            line_number: metadata.line_number(),
            file_path: metadata.file_path().map(LogPath::new),
            reason,
        }
    }
}
