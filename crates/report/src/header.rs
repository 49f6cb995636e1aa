use calendar::jalali_text;
use model::{
    errors::ReportError,
    person::Person,
    program::{BodyMeasurements, Program},
};
use serde::{ser::SerializeMap as _, Serialize, Serializer};

use crate::measurements::measurement_values;

const MEASUREMENT_PARAMETERS: [&str; 15] = [
    "age",
    "tall",
    "weight",
    "chest",
    "waist",
    "abdomen",
    "arm",
    "forearm",
    "thigh",
    "shin",
    "butt",
    "fatPercentage",
    "fatWeight",
    "muscleWeight",
    "score",
];

/// Report parameters printed above the exercise rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportHeader {
    pub coach_name: String,
    pub program_date: String,
    pub person_name: String,
    pub measurements: BodyMeasurements,
}

impl ReportHeader {
    pub fn new(
        coach_name: &str,
        program: &Program,
        person: &Person,
    ) -> Result<ReportHeader, ReportError> {
        Ok(ReportHeader {
            coach_name: coach_name.to_owned(),
            program_date: jalali_text(program.date)?,
            person_name: person.full_name(),
            measurements: program.measurements.clone(),
        })
    }

    /// Parameters under the names the report templates use.
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut parameters = vec![
            ("coachName", self.coach_name.clone()),
            ("programDate", self.program_date.clone()),
            ("personName", self.person_name.clone()),
        ];
        parameters.extend(
            MEASUREMENT_PARAMETERS
                .into_iter()
                .zip(measurement_values(&self.measurements)),
        );
        parameters
    }
}

impl Serialize for ReportHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let parameters = self.parameters();
        let mut map = serializer.serialize_map(Some(parameters.len()))?;
        for (name, value) in &parameters {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
