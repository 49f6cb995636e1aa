use serde::{Deserialize, Serialize};

use crate::{assignment::AssignmentRecord, errors::ReportError, variant::Variant};

/// Assignments of a program split into per-variant lists, the way the
/// program editor works with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPlan {
    variants: [Vec<AssignmentRecord>; Variant::COUNT],
}

impl ProgramPlan {
    pub fn from_records(
        records: impl IntoIterator<Item = AssignmentRecord>,
    ) -> Result<ProgramPlan, ReportError> {
        let mut plan = ProgramPlan::default();
        for record in records {
            let variant = record.variant()?;
            plan.variants[variant.slot()].push(record);
        }
        Ok(plan)
    }

    pub fn variant(&self, variant: Variant) -> &[AssignmentRecord] {
        &self.variants[variant.slot()]
    }

    pub fn push(&mut self, variant: Variant, mut record: AssignmentRecord) {
        record.variant_index = variant.index() as i64;
        self.variants[variant.slot()].push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.variants.iter().all(Vec::is_empty)
    }

    /// Flattens the plan in variant order. Every record is stamped with the
    /// variant it was stored under.
    pub fn into_records(self) -> Vec<AssignmentRecord> {
        Variant::all()
            .zip(self.variants)
            .flat_map(|(variant, records)| {
                records.into_iter().map(move |mut record| {
                    record.variant_index = variant.index() as i64;
                    record
                })
            })
            .collect()
    }
}
