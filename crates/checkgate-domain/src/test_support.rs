use crate::model::{Bucket, EvidenceBuckets, EvidenceItem};
use crate::policy::{Descriptions, Reason};

pub fn descriptions() -> Descriptions {
    Descriptions {
        satisfied_desc: "Items found".to_string(),
        violation_desc: "Violations".to_string(),
        waived_desc: "Waived items".to_string(),
        unused_waiver_desc: "Unused waivers".to_string(),
        auxiliary_desc: "Auxiliary info".to_string(),
        advisory_desc: "Advisory".to_string(),
        satisfied_reason: Reason::text("Item found"),
        violation_reason: Reason::text("Item not found"),
        extra_reason: Reason::text("Unexpected item"),
        waived_base_reason: Reason::text("Waived"),
        unused_waiver_reason: Reason::text("Waiver not used"),
        auxiliary_reason: Reason::text("Auxiliary"),
    }
}

pub fn item(name: &str, bucket: Bucket) -> EvidenceItem {
    EvidenceItem::new(name, bucket)
}

pub fn buckets(found: &[&str], missing: &[&str], extra: &[&str]) -> EvidenceBuckets {
    let mut out = EvidenceBuckets::default();
    for (names, bucket) in [
        (found, Bucket::Found),
        (missing, Bucket::Missing),
        (extra, Bucket::Extra),
    ] {
        for name in names {
            out.push(item(name, bucket));
        }
    }
    out
}
