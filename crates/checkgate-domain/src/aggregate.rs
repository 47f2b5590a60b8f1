use crate::policy::{Descriptions, Mode};
use checkgate_types::{
    Category, CheckVerdict, OutcomeRecord, Severity, SeverityGroup, VerdictValue,
};
use std::collections::BTreeMap;

/// Fold classified records into the final verdict.
pub fn aggregate(
    records: &[OutcomeRecord],
    mode: Mode,
    descriptions: &Descriptions,
    item_description: &str,
) -> CheckVerdict {
    let mut details = records.to_vec();
    // `sort_by_key` is stable: classifier order survives within a rank.
    details.sort_by_key(|r| r.category.rank());

    let is_pass = !details.iter().any(OutcomeRecord::is_violation);

    let value = if mode.has_enumerated_requirements() {
        VerdictValue::Count(requirement_count(&details))
    } else if is_pass {
        VerdictValue::Present
    } else {
        VerdictValue::NotApplicable
    };

    let severity_groups = severity_groups(&details, descriptions);

    CheckVerdict {
        value,
        is_pass,
        details,
        severity_groups,
        item_description: item_description.to_string(),
    }
}

fn requirement_count(details: &[OutcomeRecord]) -> u32 {
    let n = details
        .iter()
        .filter(|r| {
            matches!(r.category, Category::Satisfied | Category::WaivedViolation)
                && r.origin.is_requirement()
        })
        .count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn severity_groups(
    details: &[OutcomeRecord],
    descriptions: &Descriptions,
) -> BTreeMap<String, SeverityGroup> {
    let mut codes: Vec<(Severity, &str, String)> = Vec::new();
    let mut next = [0u32; 3];
    let mut groups = BTreeMap::new();

    for record in details {
        let description = descriptions.for_category(record.category);
        let existing = codes
            .iter()
            .find(|(sev, desc, _)| *sev == record.severity && *desc == description)
            .map(|(_, _, code)| code.clone());

        let code = match existing {
            Some(code) => code,
            None => {
                let slot = &mut next[severity_slot(record.severity)];
                *slot += 1;
                let code = format!("{}{:02}", record.severity.group_prefix(), slot);
                codes.push((record.severity, description, code.clone()));
                groups.insert(
                    code.clone(),
                    SeverityGroup {
                        severity: record.severity,
                        description: description.to_string(),
                        items: Vec::new(),
                    },
                );
                code
            }
        };

        if let Some(group) = groups.get_mut(&code) {
            group.items.push(record.name.clone());
        }
    }

    groups
}

fn severity_slot(severity: Severity) -> usize {
    match severity {
        Severity::Info => 0,
        Severity::Warn => 1,
        Severity::Fail => 2,
    }
}
