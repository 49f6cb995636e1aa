use calendar::{epoch, gregorian_from_text, jalali_text, CalendarError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Program {
    pub id: i64,
    pub person_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "epoch")]
    pub date: NaiveDate,
    #[serde(default)]
    pub measurements: BodyMeasurements,
}

impl Program {
    /// Sets the program date from jalali text. Blank text stores the epoch date.
    pub fn set_date_from_text(&mut self, text: &str) -> Result<(), CalendarError> {
        self.date = gregorian_from_text(text)?;
        Ok(())
    }

    pub fn jalali_date(&self) -> Result<String, CalendarError> {
        jalali_text(self.date)
    }
}

impl Default for Program {
    fn default() -> Self {
        Program {
            id: 0,
            person_id: 0,
            name: String::new(),
            description: None,
            date: epoch(),
            measurements: BodyMeasurements::default(),
        }
    }
}

/// Body measurements taken when the program was written.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BodyMeasurements {
    pub age: u32,
    pub height: u32,
    pub weight: f64,
    pub chest: u32,
    pub waist: u32,
    pub abdomen: u32,
    pub arm: u32,
    pub forearm: u32,
    pub thigh: u32,
    pub shin: u32,
    pub butt: u32,
    pub fat_percentage: f64,
    pub fat_weight: f64,
    pub muscle_weight: f64,
    pub score: f64,
}
