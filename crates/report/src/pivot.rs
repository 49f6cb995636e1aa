use log::debug;
use model::{assignment::AssignmentRecord, errors::ReportError, variant::Variant};
use serde::{ser::SerializeMap as _, Serialize, Serializer};

use crate::aggregation::{aggregate, GroupedCell, Groups};

/// One printed line of the report: the i-th group of every variant side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    cells: [Option<GroupedCell>; Variant::COUNT],
}

impl ReportRow {
    pub fn cell(&self, variant: Variant) -> Option<&GroupedCell> {
        self.cells[variant.slot()].as_ref()
    }

    pub fn cells(&self) -> &[Option<GroupedCell>; Variant::COUNT] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Serialized as one flat record per row with `variant{n}Id`, `variant{n}Text`,
/// `variant{n}RepeatSet` and `variant{n}Note` for every variant column.
impl Serialize for ReportRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Variant::COUNT * 4))?;
        for (variant, cell) in Variant::all().zip(&self.cells) {
            let n = variant.index();
            map.serialize_entry(
                &format!("variant{}Id", n),
                &cell.as_ref().map(|cell| cell.sequence_id),
            )?;
            map.serialize_entry(
                &format!("variant{}Text", n),
                cell.as_ref().map_or("", |cell| cell.exercise_text.as_str()),
            )?;
            map.serialize_entry(
                &format!("variant{}RepeatSet", n),
                cell.as_ref().map_or("", |cell| cell.repeat_set_text.as_str()),
            )?;
            map.serialize_entry(
                &format!("variant{}Note", n),
                cell.as_ref()
                    .and_then(|cell| cell.note_text.as_deref())
                    .unwrap_or(""),
            )?;
        }
        map.end()
    }
}

/// Interleaves the per-variant groups into rows. Variants with fewer groups
/// leave their column empty in the trailing rows.
pub fn pivot(groups: &Groups) -> Vec<ReportRow> {
    let height = groups.values().map(Vec::len).max().unwrap_or(0);
    let rows = (0..height)
        .map(|i| {
            let mut row = ReportRow::default();
            for (variant, cells) in groups {
                row.cells[variant.slot()] = cells.get(i).cloned();
            }
            row
        })
        .collect::<Vec<_>>();
    debug!("Pivoted {} variants into {} rows", groups.len(), rows.len());
    rows
}

pub fn build_rows(records: &[AssignmentRecord]) -> Result<Vec<ReportRow>, ReportError> {
    let groups = aggregate(records)?;
    Ok(pivot(&groups))
}
