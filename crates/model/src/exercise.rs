use serde::{Deserialize, Serialize};

/// Catalog entry of an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub latin_name: Option<String>,
    #[serde(default)]
    pub involved_muscle: Option<String>,
}

impl Exercise {
    /// Label printed in program reports.
    pub fn report_label(&self) -> String {
        format!("({})  {}", self.code, self.name)
    }
}
