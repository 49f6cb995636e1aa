use chrono::NaiveDate;
use model::{
    assignment::{AssignmentRecord, RepeatUnit},
    errors::{ErrorKind, ReportError},
    person::Person,
    program::Program,
    variant::Variant,
};
use report::{pivot::build_rows, ProgramReport};
use serde_json::json;

fn person() -> Person {
    Person {
        id: 7,
        first_name: "Reza".to_owned(),
        last_name: "Karimi".to_owned(),
        mobile_number: "09120000000".to_owned(),
    }
}

fn program() -> Program {
    Program {
        id: 12,
        person_id: 7,
        name: "Hypertrophy".to_owned(),
        date: NaiveDate::from_ymd_opt(2018, 8, 16).unwrap(),
        ..Default::default()
    }
}

fn scenario() -> Vec<AssignmentRecord> {
    vec![
        AssignmentRecord::new(10, 1, "Squat", 3, 12, RepeatUnit::Count),
        AssignmentRecord::new(10, 1, "Lunge", 3, 12, RepeatUnit::Count),
        AssignmentRecord::new(5, 2, "Row", 4, 10, RepeatUnit::Count),
    ]
}

#[test]
fn test_scenario_rows() {
    let rows = build_rows(&scenario()).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    let day_a = row.cell(Variant::new(1).unwrap()).unwrap();
    assert_eq!(day_a.exercise_text, "10 - Squat + Lunge");
    assert!(day_a.repeat_set_text.starts_with("3. 12"));
    assert_eq!(day_a.repeat_set_text, "3. 12, 12");

    let day_b = row.cell(Variant::new(2).unwrap()).unwrap();
    assert_eq!(day_b.exercise_text, "5 - Row");
    assert_eq!(day_b.repeat_set_text, "4. 10");

    for index in 3..=6 {
        assert!(row.cell(Variant::new(index).unwrap()).is_none());
    }
}

#[test]
fn test_invalid_variant() {
    let mut records = scenario();
    records.push(AssignmentRecord::new(1, 7, "Curl", 3, 10, RepeatUnit::Count));

    let err = build_rows(&records).unwrap_err();
    assert_eq!(err, ReportError::InvalidVariant(7));
    assert_eq!(err.kind(), ErrorKind::InvalidVariant);

    let err = ProgramReport::build("Coach", &program(), &person(), &records).unwrap_err();
    assert_eq!(err, ReportError::InvalidVariant(7));
}

#[test]
fn test_program_report() {
    let report = ProgramReport::build("Coach", &program(), &person(), &scenario()).unwrap();
    assert!(!report.is_empty());
    assert_eq!(report.variant_count, 2);
    assert_eq!(report.template, "PersonProgramExercises2Session");
    assert_eq!(report.header.program_date, "1397/5/25");
    assert_eq!(report.header.person_name, "Reza Karimi");

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["header"]["coachName"], json!("Coach"));
    assert_eq!(value["rows"][0]["variant1Text"], json!("10 - Squat + Lunge"));
    assert_eq!(value["rows"][0]["variant2RepeatSet"], json!("4. 10"));
    assert_eq!(value["rows"][0]["variant3Id"], json!(null));
}

#[test]
fn test_empty_program_report() {
    let report = ProgramReport::build("Coach", &program(), &person(), &[]).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.variant_count, 1);
    assert_eq!(report.template, "PersonProgramExercises1Session");
}

#[test]
fn test_epoch_program_date() {
    let mut program = program();
    program.set_date_from_text("").unwrap();
    let report = ProgramReport::build("Coach", &program, &person(), &scenario()).unwrap();
    assert_eq!(report.header.program_date, "1348/10/11");
}
