use calendar::jalali_text;
use log::debug;
use model::{errors::ReportError, program::BodyMeasurements, program::Program};
use serde::Serialize;

const MEASUREMENT_LABELS: [&str; 15] = [
    "سن",
    "قد",
    "وزن",
    "سینه",
    "کمر",
    "شکم",
    "بازو",
    "ساعد",
    "ران",
    "ساق",
    "باسن",
    "درصد چربی",
    "وزن چربی",
    "وزن عضله",
    "امتیاز",
];
const DATE_LABEL: &str = "تاریخ";

/// Decimal text with at least one fractional digit: `78.0`, `61.5`.
fn decimal_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Measurement values in sheet order.
pub(crate) fn measurement_values(m: &BodyMeasurements) -> [String; 15] {
    [
        m.age.to_string(),
        m.height.to_string(),
        decimal_text(m.weight),
        m.chest.to_string(),
        m.waist.to_string(),
        m.abdomen.to_string(),
        m.arm.to_string(),
        m.forearm.to_string(),
        m.thigh.to_string(),
        m.shin.to_string(),
        m.butt.to_string(),
        decimal_text(m.fat_percentage),
        decimal_text(m.fat_weight),
        decimal_text(m.muscle_weight),
        decimal_text(m.score),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Body measurement history of a person, one column per program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeasurementSheet {
    rows: Vec<MeasurementRow>,
}

impl MeasurementSheet {
    pub fn new(programs: &[Program]) -> Result<MeasurementSheet, ReportError> {
        if programs.is_empty() {
            return Ok(MeasurementSheet::default());
        }

        let mut rows = MEASUREMENT_LABELS
            .into_iter()
            .map(|label| MeasurementRow {
                label,
                values: Vec::with_capacity(programs.len()),
            })
            .collect::<Vec<_>>();
        let mut dates = Vec::with_capacity(programs.len());

        for program in programs {
            let values = measurement_values(&program.measurements);
            for (row, value) in rows.iter_mut().zip(values) {
                row.values.push(value);
            }
            dates.push(jalali_text(program.date)?);
        }
        rows.push(MeasurementRow {
            label: DATE_LABEL,
            values: dates,
        });

        debug!("Measurement sheet with {} programs", programs.len());
        Ok(MeasurementSheet { rows })
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn program(date: (i32, u32, u32), age: u32, weight: f64) -> Program {
        Program {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            measurements: BodyMeasurements {
                age,
                weight,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty() {
        let sheet = MeasurementSheet::new(&[]).unwrap();
        assert!(sheet.is_empty());
        assert!(sheet.rows().is_empty());
    }

    #[test]
    fn test_sheet() {
        let sheet = MeasurementSheet::new(&[
            program((2018, 8, 16), 30, 80.5),
            program((2019, 3, 21), 31, 78.0),
        ])
        .unwrap();

        let rows = sheet.rows();
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|row| row.values.len() == 2));

        assert_eq!(rows[0].label, "سن");
        assert_eq!(rows[0].values, vec!["30", "31"]);
        assert_eq!(rows[2].label, "وزن");
        assert_eq!(rows[2].values, vec!["80.5", "78.0"]);
        assert_eq!(rows[11].values, vec!["0.0", "0.0"]);
        assert_eq!(rows[3].values, vec!["0", "0"]);
        assert_eq!(rows[15].label, "تاریخ");
        assert_eq!(rows[15].values, vec!["1397/5/25", "1398/1/1"]);
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(decimal_text(78.0), "78.0");
        assert_eq!(decimal_text(0.0), "0.0");
        assert_eq!(decimal_text(61.5), "61.5");
        assert_eq!(decimal_text(12.25), "12.25");
    }

    #[test]
    fn test_out_of_range_date() {
        let result = MeasurementSheet::new(&[program((3800, 1, 1), 30, 80.0)]);
        assert!(result.is_err());
    }
}
