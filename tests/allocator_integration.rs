use fairscale::api::{AllocationStatus, PlanRequest, StudyDays, SubjectRequest};
use fairscale::config::WeightProfile;
use fairscale::models::parse_plan_request_json_str;
use fairscale::services::{allocate_study_days, build_study_plan};

fn create_subject(
    name: &str,
    preparation: f64,
    syllabus_size: f64,
    difficulty: f64,
    exam_weight: f64,
    desired_days: f64,
) -> SubjectRequest {
    SubjectRequest::new(
        name,
        preparation,
        syllabus_size,
        difficulty,
        exam_weight,
        StudyDays::new(desired_days),
    )
}

fn uniform_subject(name: &str, desired_days: f64) -> SubjectRequest {
    create_subject(name, 50.0, 50.0, 50.0, 50.0, desired_days)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_single_subject_plan_reports_leftover_budget() {
    let request = PlanRequest::new(
        "one_subject",
        StudyDays::new(30.0),
        vec![uniform_subject("Biology", 10.0)],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    assert_close(plan.subjects[0].allocated_days.value(), 10.0);
    assert_close(plan.summary.total_allocated.value(), 10.0);
    assert_close(plan.summary.unallocated.value(), 20.0);
    assert_eq!(plan.summary.fully_met_count, 1);
    assert_eq!(plan.summary.reduced_count, 0);
}

#[test]
fn test_equal_subjects_share_budget_and_report_reduction() {
    let request = PlanRequest::new(
        "equal_pair",
        StudyDays::new(30.0),
        vec![uniform_subject("A", 20.0), uniform_subject("B", 20.0)],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    assert_close(plan.subjects[0].allocated_days.value(), 15.0);
    assert_close(plan.subjects[1].allocated_days.value(), 15.0);
    assert_eq!(plan.summary.reduced_count, 2);
    assert_eq!(plan.summary.outcomes[0].status, AllocationStatus::Reduced);
    assert_close(plan.summary.outcomes[0].shortfall.value(), 5.0);
    assert_close(plan.summary.unallocated.value(), 0.0);
}

#[test]
fn test_unequal_weights_favor_heavier_subject() {
    let request = PlanRequest::new(
        "unequal_pair",
        StudyDays::new(20.0),
        vec![
            create_subject("Heavy", 20.0, 80.0, 50.0, 60.0, 15.0),
            create_subject("Light", 80.0, 20.0, 50.0, 40.0, 15.0),
        ],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    let heavy = plan.subjects[0].allocated_days.value();
    let light = plan.subjects[1].allocated_days.value();
    assert!(heavy > 10.0);
    assert!(heavy > light);
    assert_close(heavy + light, 20.0);
}

#[test]
fn test_all_zero_desired_days_yield_empty_plan_without_panic() {
    let request = PlanRequest::new(
        "degenerate",
        StudyDays::new(30.0),
        vec![uniform_subject("A", 0.0), uniform_subject("B", 0.0)],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    for subject in &plan.subjects {
        assert_eq!(subject.allocated_days.value(), 0.0);
    }
    assert_close(plan.summary.unallocated.value(), 30.0);
    // Asking for nothing and receiving it still counts as fully met.
    assert_eq!(plan.summary.fully_met_count, 2);
}

#[test]
fn test_json_request_to_plan_pipeline() {
    let request_json = r#"{
        "name": "spring_exams",
        "total_days": 21,
        "subjects": [
            {
                "name": "Calculus",
                "preparation": 25,
                "syllabus_size": 85,
                "difficulty": 80,
                "exam_weight": 95,
                "desired_days": 14
            },
            {
                "name": "Statistics",
                "preparation": 55,
                "syllabus_size": 60,
                "difficulty": 45,
                "exam_weight": 70,
                "desired_days": 10
            },
            {
                "name": "Economics",
                "preparation": 70,
                "syllabus_size": 45,
                "difficulty": 35,
                "exam_weight": 55,
                "desired_days": 7
            }
        ]
    }"#;

    let request = parse_plan_request_json_str(request_json).unwrap();
    let checksum = request.checksum.clone();
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    assert_eq!(plan.name, "spring_exams");
    assert_eq!(plan.checksum, checksum);
    assert_eq!(plan.subjects.len(), 3);

    // Demand (31) exceeds the budget (21), so the whole budget is used.
    assert_close(plan.summary.total_allocated.value(), 21.0);
    assert_close(plan.summary.total_requested.value(), 31.0);

    for subject in &plan.subjects {
        assert!(subject.allocated_days.value() >= 0.0);
        assert!(subject.allocated_days.value() <= subject.desired_days.value() + 1e-9);
    }
}

#[test]
fn test_budget_exceeding_demand_meets_everyone() {
    let subjects = vec![
        create_subject("A", 30.0, 70.0, 40.0, 80.0, 5.0),
        create_subject("B", 60.0, 50.0, 70.0, 60.0, 8.0),
        create_subject("C", 50.0, 30.0, 20.0, 40.0, 7.0),
    ];
    let result =
        allocate_study_days(&subjects, StudyDays::new(30.0), &WeightProfile::default()).unwrap();

    for allocation in &result {
        assert_close(
            allocation.allocated_days.value(),
            allocation.desired_days.value(),
        );
    }
}

#[test]
fn test_custom_profile_shifts_allocation() {
    // Subject A has the bigger syllabus, subject B the bigger exam weight.
    let subjects = vec![
        create_subject("A", 50.0, 90.0, 50.0, 30.0, 10.0),
        create_subject("B", 50.0, 30.0, 50.0, 90.0, 10.0),
    ];

    let syllabus_heavy = WeightProfile {
        preparation_gap: 0.0,
        syllabus_size: 1.0,
        exam_weight: 0.0,
        ease: 0.0,
    };
    let exam_heavy = WeightProfile {
        preparation_gap: 0.0,
        syllabus_size: 0.0,
        exam_weight: 1.0,
        ease: 0.0,
    };

    let by_syllabus =
        allocate_study_days(&subjects, StudyDays::new(10.0), &syllabus_heavy).unwrap();
    let by_exam = allocate_study_days(&subjects, StudyDays::new(10.0), &exam_heavy).unwrap();

    assert!(by_syllabus[0].allocated_days.value() > by_syllabus[1].allocated_days.value());
    assert!(by_exam[1].allocated_days.value() > by_exam[0].allocated_days.value());
}

#[test]
fn test_plan_serializes_with_plain_numbers_and_statuses() {
    let request = PlanRequest::new(
        "serde_check",
        StudyDays::new(12.0),
        vec![uniform_subject("Math", 8.0), uniform_subject("Art", 8.0)],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();

    // Day quantities serialize as bare numbers, not wrapper objects.
    assert_eq!(json["total_days"], serde_json::json!(12.0));
    assert!(json["subjects"][0]["allocated_days"].is_number());
    assert_eq!(json["summary"]["outcomes"][0]["status"], "reduced");
    assert_eq!(json["name"], "serde_check");
}

#[test]
fn test_plan_round_trips_through_json() {
    let request = PlanRequest::new(
        "round_trip",
        StudyDays::new(9.0),
        vec![uniform_subject("Physics", 6.0)],
    );
    let plan = build_study_plan(request, &WeightProfile::default()).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let back: fairscale::api::StudyPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, plan.name);
    assert_eq!(back.checksum, plan.checksum);
    assert_eq!(back.subjects, plan.subjects);
    assert_eq!(back.summary, plan.summary);
}

#[test]
fn test_library_surface_rejects_bad_budget() {
    let request = PlanRequest::new(
        "bad_budget",
        StudyDays::new(-1.0),
        vec![uniform_subject("Math", 5.0)],
    );
    let result = build_study_plan(request, &WeightProfile::default());
    assert!(result.is_err());
}
