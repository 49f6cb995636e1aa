pub mod aggregation;
pub mod header;
pub mod measurements;
pub mod pivot;
pub mod template;

use header::ReportHeader;
use log::debug;
use model::{
    assignment::AssignmentRecord, errors::ReportError, person::Person, program::Program,
};
use pivot::ReportRow;
use serde::Serialize;

/// Everything the renderer needs to print one program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramReport {
    pub header: ReportHeader,
    pub variant_count: u8,
    pub template: String,
    pub rows: Vec<ReportRow>,
}

impl ProgramReport {
    pub fn build(
        coach_name: &str,
        program: &Program,
        person: &Person,
        records: &[AssignmentRecord],
    ) -> Result<ProgramReport, ReportError> {
        let groups = aggregation::aggregate(records)?;
        let header = ReportHeader::new(coach_name, program, person)?;
        let variant_count = template::variant_count(&groups);
        let rows = pivot::pivot(&groups);
        debug!(
            "Program {} report: {} rows, {} variants",
            program.id,
            rows.len(),
            variant_count
        );
        Ok(ProgramReport {
            header,
            variant_count,
            template: template::template_name(variant_count),
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
