use fitcheck_core::metrics::bmi;
use fitcheck_core::models::request::EvaluationRequest;
use fitcheck_core::models::subject::{Gender, Role};
use fitcheck_core::models::test_type::TestType;
use fitcheck_standards::{
    BandTable, Evaluation, NO_ATHLETE_STANDARD, StandardBand, Standards, evaluate,
};

fn athlete_bmi(value: f64) -> Evaluation {
    evaluate(TestType::Bmi, Gender::Male, 20, Some(value), Role::Athlete)
}

#[test]
fn athlete_bmi_bands() {
    assert_eq!(athlete_bmi(21.0), Evaluation::Matched("ดีเยี่ยม".to_string()));
    assert_eq!(athlete_bmi(24.0), Evaluation::Matched("ดี".to_string()));
    assert_eq!(athlete_bmi(19.0), Evaluation::Matched("ควรปรับปรุง".to_string()));
    assert_eq!(athlete_bmi(50.0), Evaluation::NoMatch);
}

#[test]
fn bounds_are_inclusive() {
    assert_eq!(athlete_bmi(20.0), Evaluation::Matched("ดีเยี่ยม".to_string()));
    assert_eq!(athlete_bmi(23.0), Evaluation::Matched("ดีเยี่ยม".to_string()));
}

#[test]
fn missing_or_non_finite_value_is_not_evaluated() {
    for value in [None, Some(f64::NAN), Some(f64::INFINITY), Some(f64::NEG_INFINITY)] {
        assert_eq!(
            evaluate(TestType::Bmi, Gender::Male, 20, value, Role::Athlete),
            Evaluation::NoMatch
        );
        // Even where no athlete standard exists.
        assert_eq!(
            evaluate(TestType::StepUp, Gender::Male, 20, value, Role::Athlete),
            Evaluation::NoMatch
        );
    }
}

#[test]
fn athlete_tests_without_any_bands_report_no_standard() {
    for test_type in [TestType::ChairStand, TestType::StepUp] {
        for gender in [Gender::Male, Gender::Female] {
            for (age, value) in [(18, 10.0), (70, 0.0), (3, 999.0)] {
                let evaluation = evaluate(test_type, gender, age, Some(value), Role::Athlete);
                assert_eq!(evaluation, Evaluation::NoStandardDefined);
                assert_eq!(evaluation.label(), Some(NO_ATHLETE_STANDARD));
            }
        }
    }
}

#[test]
fn athlete_outside_age_bracket_is_no_match_not_sentinel() {
    assert_eq!(
        evaluate(TestType::Bmi, Gender::Male, 40, Some(21.0), Role::Athlete),
        Evaluation::NoMatch
    );
}

#[test]
fn non_athletes_use_general_table() {
    for role in [Role::Student, Role::Instructor] {
        assert_eq!(
            evaluate(TestType::Bmi, Gender::Female, 20, Some(21.0), role),
            Evaluation::Matched("สมส่วน".to_string())
        );
        // General tables never produce the athlete sentinel.
        assert_eq!(
            evaluate(TestType::StepUp, Gender::Male, 20, Some(100.0), role),
            Evaluation::NoMatch
        );
    }
}

#[test]
fn general_graded_tables_follow_age_brackets() {
    let grip = |age, value| evaluate(TestType::HandGrip, Gender::Male, age, Some(value), Role::Student);
    assert_eq!(grip(22, 50.0), Evaluation::Matched("ดีมาก".to_string()));
    assert_eq!(grip(22, 49.0), Evaluation::Matched("ดี".to_string()));
    assert_eq!(grip(57, 43.0), Evaluation::Matched("ดีมาก".to_string()));
    assert_eq!(grip(22, 20.0), Evaluation::Matched("ต่ำมาก".to_string()));

    let chair = |value| evaluate(TestType::ChairStand, Gender::Female, 67, Some(value), Role::Student);
    assert_eq!(chair(12.0), Evaluation::Matched("ปานกลาง".to_string()));
    assert_eq!(chair(9.0), Evaluation::Matched("ต่ำมาก".to_string()));
}

#[test]
fn values_between_cut_points_are_graded() {
    let reach = |value| evaluate(TestType::SitAndReach, Gender::Male, 20, Some(value), Role::Student);
    assert_eq!(reach(4.5), Evaluation::Matched("ปานกลาง".to_string()));
    // A cut-point belongs to the lower grade.
    assert_eq!(reach(4.0), Evaluation::Matched("ต่ำ".to_string()));

    let grip = |age, value| evaluate(TestType::HandGrip, Gender::Male, age, Some(value), Role::Student);
    assert_eq!(grip(22, 49.05), Evaluation::Matched("ดีมาก".to_string()));
    assert_eq!(grip(22, 48.95), Evaluation::Matched("ดี".to_string()));
}

#[test]
fn computed_bmi_always_lands_in_a_band() {
    let general = bmi(66.3, 170.0).unwrap();
    assert_eq!(general, 22.94);
    assert_eq!(
        evaluate(TestType::Bmi, Gender::Male, 20, Some(general), Role::Student),
        Evaluation::Matched("สมส่วน".to_string())
    );
    assert_eq!(
        evaluate(TestType::Bmi, Gender::Male, 20, Some(18.45), Role::Student),
        Evaluation::Matched("ผอม".to_string())
    );
    assert_eq!(
        evaluate(TestType::Bmi, Gender::Male, 20, Some(23.0), Role::Student),
        Evaluation::Matched("ท้วม".to_string())
    );

    let athlete = bmi(57.65, 170.0).unwrap();
    assert_eq!(athlete, 19.95);
    assert_eq!(athlete_bmi(athlete), Evaluation::Matched("ควรปรับปรุง".to_string()));
    assert_eq!(athlete_bmi(23.05), Evaluation::Matched("ดี".to_string()));

    // Every hundredth across the general range is graded.
    for hundredths in 1000..4000 {
        let value = f64::from(hundredths) / 100.0;
        assert!(matches!(
            evaluate(TestType::Bmi, Gender::Female, 30, Some(value), Role::Student),
            Evaluation::Matched(_)
        ));
    }
}

#[test]
fn first_declared_band_wins_on_overlap() {
    let general = BandTable::new(vec![
        StandardBand::range(TestType::Bmi, Gender::Male, (15, 25), "first", 10.0, 20.0),
        StandardBand::range(TestType::Bmi, Gender::Male, (15, 25), "second", 15.0, 25.0),
    ]);
    let standards = Standards::new(general, BandTable::default());
    let request = EvaluationRequest {
        test_type: TestType::Bmi,
        gender: Gender::Male,
        age: 20,
        value: Some(17.0),
        role: Role::Student,
    };
    assert_eq!(standards.evaluate(&request), Evaluation::Matched("first".to_string()));

    let later = EvaluationRequest { value: Some(22.0), ..request };
    assert_eq!(standards.evaluate(&later), Evaluation::Matched("second".to_string()));
}

#[test]
fn athlete_bands_for_other_gender_only_is_no_match() {
    let athlete = BandTable::new(vec![StandardBand::at_least(
        TestType::HandGrip,
        Gender::Male,
        (15, 25),
        "ดีเยี่ยม",
        50.0,
    )]);
    let standards = Standards::new(BandTable::default(), athlete);
    let request = EvaluationRequest {
        test_type: TestType::HandGrip,
        gender: Gender::Female,
        age: 20,
        value: Some(60.0),
        role: Role::Athlete,
    };
    assert_eq!(standards.evaluate(&request), Evaluation::NoMatch);
}

#[test]
fn evaluation_is_repeatable() {
    let request = EvaluationRequest {
        test_type: TestType::SitAndReach,
        gender: Gender::Female,
        age: 18,
        value: Some(15.0),
        role: Role::Athlete,
    };
    let standards = Standards::builtin();
    let first = standards.evaluate(&request);
    assert_eq!(first, standards.evaluate(&request));
    assert_eq!(first, Evaluation::Matched("ปานกลาง".to_string()));
}

#[test]
fn batch_preserves_order() {
    let base = EvaluationRequest {
        test_type: TestType::Bmi,
        gender: Gender::Male,
        age: 20,
        value: Some(21.0),
        role: Role::Athlete,
    };
    let requests = [
        base,
        EvaluationRequest { value: None, ..base },
        EvaluationRequest { test_type: TestType::StepUp, ..base },
    ];
    let results = Standards::builtin().evaluate_batch(&requests);
    assert_eq!(
        results,
        vec![
            Evaluation::Matched("ดีเยี่ยม".to_string()),
            Evaluation::NoMatch,
            Evaluation::NoStandardDefined,
        ]
    );
}

#[test]
fn evaluation_serializes_with_kind_tag() {
    let json = serde_json::to_value(Evaluation::Matched("ดี".to_string())).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "matched", "category": "ดี" }));
    let json = serde_json::to_value(Evaluation::NoStandardDefined).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "no_standard_defined" }));
}
