use checkgate_types::{EvidenceCheck, EvidenceEntry, Metadata};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Found,
    Missing,
    Extra,
}

/// One immutable piece of evidence.
#[derive(Clone, Debug, PartialEq)]
pub struct EvidenceItem {
    /// Stable identity of the checked thing (library, file, status token).
    pub name: String,
    pub bucket: Bucket,
    pub metadata: Metadata,
}

impl EvidenceItem {
    pub fn new(name: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            name: name.into(),
            bucket,
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Informational item shown in the trail, never counted toward a value.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxiliaryItem {
    pub name: String,
    pub metadata: Metadata,
}

impl AuxiliaryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// The three-way partition of raw findings for one check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvidenceBuckets {
    pub found: Vec<EvidenceItem>,
    pub missing: Vec<EvidenceItem>,
    pub extra: Vec<EvidenceItem>,
}

impl EvidenceBuckets {
    /// Route an item into the bucket it names.
    pub fn push(&mut self, item: EvidenceItem) {
        match item.bucket {
            Bucket::Found => self.found.push(item),
            Bucket::Missing => self.missing.push(item),
            Bucket::Extra => self.extra.push(item),
        }
    }

    pub fn len(&self) -> usize {
        self.found.len() + self.missing.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split a parsed evidence document entry into buckets and auxiliary items.
    pub fn from_check(check: &EvidenceCheck) -> (EvidenceBuckets, Vec<AuxiliaryItem>) {
        let mut buckets = EvidenceBuckets::default();
        for (entries, bucket) in [
            (&check.found, Bucket::Found),
            (&check.missing, Bucket::Missing),
            (&check.extra, Bucket::Extra),
        ] {
            for entry in entries {
                buckets.push(item_from_entry(entry, bucket));
            }
        }

        let auxiliary = check
            .auxiliary
            .iter()
            .map(|e| AuxiliaryItem::new(e.name.clone()).with_metadata(e.metadata.clone()))
            .collect();

        (buckets, auxiliary)
    }
}

fn item_from_entry(entry: &EvidenceEntry, bucket: Bucket) -> EvidenceItem {
    EvidenceItem::new(entry.name.clone(), bucket).with_metadata(entry.metadata.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkgate_types::EvidenceCheck;
    use serde_json::json;

    #[test]
    fn push_routes_by_bucket() {
        let mut buckets = EvidenceBuckets::default();
        buckets.push(EvidenceItem::new("a", Bucket::Missing));
        buckets.push(EvidenceItem::new("b", Bucket::Extra));
        buckets.push(EvidenceItem::new("c", Bucket::Found));

        assert_eq!(buckets.found[0].name, "c");
        assert_eq!(buckets.missing[0].name, "a");
        assert_eq!(buckets.extra[0].name, "b");
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn from_check_keeps_order_and_metadata() {
        let check: EvidenceCheck = serde_json::from_value(json!({
            "id": "IMP-1",
            "found": [{ "name": "Netlist File", "line_number": 3 }, { "name": "Def File" }],
            "missing": [{ "name": "SPEF File", "reason": "Skipped" }],
            "auxiliary": [{ "name": "Tool: Quantus" }]
        }))
        .expect("parse check");

        let (buckets, aux) = EvidenceBuckets::from_check(&check);
        assert_eq!(buckets.found.len(), 2);
        assert_eq!(buckets.found[0].name, "Netlist File");
        assert_eq!(buckets.found[0].metadata.line_number(), Some(3));
        assert_eq!(buckets.missing[0].bucket, Bucket::Missing);
        assert_eq!(buckets.missing[0].metadata.text("reason"), Some("Skipped"));
        assert!(buckets.extra.is_empty());
        assert_eq!(aux.len(), 1);
        assert_eq!(aux[0].name, "Tool: Quantus");
    }
}
