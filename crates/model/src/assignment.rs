use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{errors::ReportError, variant::Variant};

/// How the repeat count of an exercise is measured. Stored as a one letter code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, EnumIter,
)]
pub enum RepeatUnit {
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    Seconds,
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Minutes,
    #[serde(rename = "T")]
    #[strum(serialize = "T")]
    Count,
}

impl RepeatUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            RepeatUnit::Seconds => "\"",
            RepeatUnit::Minutes => "'",
            RepeatUnit::Count => "",
        }
    }
}

/// One exercise assigned to a program variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Shared by all exercises performed as one combo inside a variant.
    pub sequence_id: i64,
    pub variant_index: i64,
    pub exercise_display_name: String,
    pub set_count: u32,
    pub repeat_count: u32,
    pub repeat_unit: RepeatUnit,
    #[serde(default)]
    pub note: Option<String>,
}

impl AssignmentRecord {
    pub fn new(
        sequence_id: i64,
        variant_index: i64,
        exercise_display_name: impl Into<String>,
        set_count: u32,
        repeat_count: u32,
        repeat_unit: RepeatUnit,
    ) -> AssignmentRecord {
        AssignmentRecord {
            sequence_id,
            variant_index,
            exercise_display_name: exercise_display_name.into(),
            set_count,
            repeat_count,
            repeat_unit,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> AssignmentRecord {
        self.note = Some(note.into());
        self
    }

    pub fn variant(&self) -> Result<Variant, ReportError> {
        Variant::new(self.variant_index)
    }

    /// Repeat count followed by the unit symbol, e.g. `30"`.
    pub fn repeat_text(&self) -> String {
        format!("{}{}", self.repeat_count, self.repeat_unit.symbol())
    }
}
