use fitcheck_measurements::error::MeasurementError;
use fitcheck_measurements::{BodyMeasurementSnapshot, MeasurementField};
use serde_json::json;

#[test]
fn record_numbers_and_numeric_strings_are_read() {
    let record = json!({
        "weight": 70.5,
        "shoulderLeft": "30.5",
        "shoulderRight": " 31 ",
        "notes": "  หลังฝึก 8 สัปดาห์ ",
        "rowId": 4,
        "studentId": "6512345"
    });
    let snapshot = BodyMeasurementSnapshot::from_record(&record).unwrap();
    assert_eq!(snapshot.get(MeasurementField::Weight), Some(70.5));
    assert_eq!(snapshot.get(MeasurementField::ShoulderLeft), Some(30.5));
    assert_eq!(snapshot.get(MeasurementField::ShoulderRight), Some(31.0));
    assert_eq!(snapshot.notes.as_deref(), Some("หลังฝึก 8 สัปดาห์"));
    assert_eq!(snapshot.values.len(), 3);
}

#[test]
fn blank_and_garbage_cells_are_absent() {
    let record = json!({
        "weight": "",
        "height": null,
        "pulse": "n/a",
        "neck": "NaN",
        "chest": true,
        "notes": ""
    });
    let snapshot = BodyMeasurementSnapshot::from_record(&record).unwrap();
    assert!(snapshot.values.is_empty());
    assert_eq!(snapshot.notes, None);
}

#[test]
fn non_object_record_is_rejected() {
    let err = BodyMeasurementSnapshot::from_record(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, MeasurementError::NotAnObject));

    let err = BodyMeasurementSnapshot::from_record_str("{not json").unwrap_err();
    assert!(matches!(err, MeasurementError::Serialization(_)));
}

#[test]
fn setting_non_finite_clears_the_field() {
    let mut snapshot = BodyMeasurementSnapshot::new().with(MeasurementField::Waist, 80.0);
    snapshot.set(MeasurementField::Waist, Some(f64::NAN));
    assert_eq!(snapshot.get(MeasurementField::Waist), None);
}

#[test]
fn snapshot_serializes_with_camel_case_keys() {
    let snapshot = BodyMeasurementSnapshot::new().with(MeasurementField::ThighLeft, 52.0);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json, json!({ "values": { "thighLeft": 52.0 }, "notes": null }));
}
