use std::collections::BTreeMap;

use log::{debug, warn};
use model::{assignment::AssignmentRecord, errors::ReportError, variant::Variant};
use serde::Serialize;

/// Groups of every variant present in the input, each ordered by sequence id.
pub type Groups = BTreeMap<Variant, Vec<GroupedCell>>;

/// All records of one `(variant, sequence_id)` merged into a single report cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCell {
    pub sequence_id: i64,
    pub exercise_text: String,
    pub repeat_set_text: String,
    pub note_text: Option<String>,
}

impl GroupedCell {
    fn open(record: &AssignmentRecord) -> GroupedCell {
        let mut cell = GroupedCell {
            sequence_id: record.sequence_id,
            exercise_text: format!("{} - {}", record.sequence_id, record.exercise_display_name),
            repeat_set_text: format!("{}. {}", record.set_count, record.repeat_text()),
            note_text: None,
        };
        cell.add_note(record.note.as_deref());
        cell
    }

    fn extend(&mut self, record: &AssignmentRecord) {
        self.exercise_text.push_str(" + ");
        self.exercise_text.push_str(&record.exercise_display_name);
        self.repeat_set_text.push_str(", ");
        self.repeat_set_text.push_str(&record.repeat_text());
        self.add_note(record.note.as_deref());
    }

    fn add_note(&mut self, note: Option<&str>) {
        let Some(note) = note.map(str::trim).filter(|note| !note.is_empty()) else {
            return;
        };
        match &mut self.note_text {
            Some(text) => {
                text.push_str(" + ");
                text.push_str(note);
            }
            None => self.note_text = Some(note.to_owned()),
        }
    }
}

/// Groups records by variant and sequence id. Records of one group are merged
/// in input order. Fails without a partial result if any record has an
/// invalid variant index.
pub fn aggregate(records: &[AssignmentRecord]) -> Result<Groups, ReportError> {
    let variants = records
        .iter()
        .map(AssignmentRecord::variant)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            warn!("Rejecting assignments: {}", err);
            err
        })?;

    let mut by_variant: BTreeMap<Variant, BTreeMap<i64, GroupedCell>> = BTreeMap::new();
    for (record, variant) in records.iter().zip(variants) {
        by_variant
            .entry(variant)
            .or_default()
            .entry(record.sequence_id)
            .and_modify(|cell| cell.extend(record))
            .or_insert_with(|| GroupedCell::open(record));
    }

    let groups = by_variant
        .into_iter()
        .map(|(variant, cells)| (variant, cells.into_values().collect::<Vec<_>>()))
        .collect::<Groups>();
    debug!(
        "Aggregated {} assignments into {} groups over {} variants",
        records.len(),
        groups.values().map(Vec::len).sum::<usize>(),
        groups.len()
    );
    Ok(groups)
}
