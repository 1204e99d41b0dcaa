use concurso_advisor::scoring::domain::{
    AnswerSet, AnswerSheet, AppointmentProbability, BoardDifficulty, BoardFamiliarity,
    Competitiveness, ContentMastery, Distance, EmploymentStatus, EmploymentType,
    FinancialPriority, Interest, OverloadTolerance, PreparationLevel, PriorExperience, StudyTime,
    WeeklyWorkload, WorkplaceStructure,
};
use concurso_advisor::scoring::session::{AssessmentSession, SessionError, SessionState};
use concurso_advisor::scoring::views::{Alert, Classification};
use concurso_advisor::scoring::{compute, preparation_time_points};

/// Spec scenario: a poorly paid 40h posting with a hostile board and an
/// unprepared candidate.
fn discouraging_answers() -> AnswerSet {
    AnswerSet {
        gross_salary: 3000.0,
        fixed_benefits: 0.0,
        weekly_workload: WeeklyWorkload::FortyHours,
        employment_type: EmploymentType::Statutory,
        openings: 1,
        waiting_list: false,
        board_difficulty: BoardDifficulty::VeryHard,
        appointment_probability: AppointmentProbability::Low,
        workplace_structure: WorkplaceStructure::Poor,
        competitiveness: Competitiveness::High,
        preparation_level: PreparationLevel::Beginner,
        study_time: StudyTime::Low,
        prior_experience: PriorExperience::None,
        distance: Distance::OtherState,
        interest: Interest::Low,
        board_familiarity: BoardFamiliarity::None,
        content_mastery: ContentMastery::Low,
        employment_status: EmploymentStatus::Employed,
        financial_priority: FinancialPriority::Low,
        overload_tolerance: OverloadTolerance::Low,
    }
}

/// Spec scenario: a well paid 20h statutory posting fully aligned with the
/// candidate.
fn encouraging_answers() -> AnswerSet {
    AnswerSet {
        gross_salary: 8000.0,
        fixed_benefits: 1000.0,
        weekly_workload: WeeklyWorkload::TwentyHours,
        employment_type: EmploymentType::Statutory,
        openings: 15,
        waiting_list: true,
        board_difficulty: BoardDifficulty::VeryEasy,
        appointment_probability: AppointmentProbability::High,
        workplace_structure: WorkplaceStructure::Good,
        competitiveness: Competitiveness::Low,
        preparation_level: PreparationLevel::Advanced,
        study_time: StudyTime::High,
        prior_experience: PriorExperience::Extensive,
        distance: Distance::SameCity,
        interest: Interest::High,
        board_familiarity: BoardFamiliarity::Much,
        content_mastery: ContentMastery::High,
        employment_status: EmploymentStatus::Unemployed,
        financial_priority: FinancialPriority::High,
        overload_tolerance: OverloadTolerance::High,
    }
}

/// An answer set whose blocks sum to exactly 39 (16 + 20 + 3).
fn boundary_answers() -> AnswerSet {
    AnswerSet {
        distance: Distance::NearbyRegion,
        interest: Interest::Medium,
        board_familiarity: BoardFamiliarity::Little,
        overload_tolerance: OverloadTolerance::High,
        ..discouraging_answers()
    }
}

#[test]
fn discouraging_posting_lands_in_the_low_band_with_alerts() {
    let assessment = compute(&discouraging_answers());

    // 3000 over a 40h week is 75 per hour: base 4 minus the heavy-workload
    // penalty leaves the pay component at zero.
    assert_eq!(assessment.block_a, 16);
    assert_eq!(assessment.block_b, 13);
    assert_eq!(assessment.block_c, -3);
    assert_eq!(assessment.index, 26);
    assert_eq!(assessment.classification, Classification::LowAdvantage);

    let fired: Vec<_> = assessment.alerts.iter().map(|view| view.alert).collect();
    assert!(fired.contains(&Alert::StructuralDifficulty));
    assert!(fired.contains(&Alert::ProfileMismatch));
}

#[test]
fn encouraging_posting_maxes_out_the_index() {
    let assessment = compute(&encouraging_answers());

    assert_eq!(assessment.block_a, 60);
    assert_eq!(assessment.block_b, 50);
    assert_eq!(assessment.block_c, 10);
    assert_eq!(assessment.index, 100, "raw total of 120 clamps to 100");
    assert_eq!(assessment.classification, Classification::HighAdvantage);
    assert!(assessment.alerts.is_empty());

    let strengths = &assessment.insights.strengths;
    assert!(strengths.iter().any(|item| item.contains("Tenure")));
    assert!(strengths.iter().any(|item| item.contains("appointment")));
    assert!(strengths.iter().any(|item| item.contains("command of the topics")));
    assert!(strengths.iter().any(|item| item.contains("affinity")));
    assert!(strengths.iter().any(|item| item.contains("Logistical comfort")));
}

#[test]
fn classification_boundaries_are_exact() {
    // 39: low.
    let at_39 = compute(&boundary_answers());
    assert_eq!(at_39.index, 39);
    assert_eq!(at_39.classification, Classification::LowAdvantage);

    // 40: one extra board-difficulty point tips into moderate.
    let at_40 = compute(&AnswerSet {
        board_difficulty: BoardDifficulty::Hard,
        ..boundary_answers()
    });
    assert_eq!(at_40.index, 40);
    assert_eq!(at_40.classification, Classification::ModerateAdvantage);

    // 69: a mid-range posting one point short of the high band.
    let mid = AnswerSet {
        gross_salary: 4800.0,
        openings: 5,
        board_difficulty: BoardDifficulty::Moderate,
        appointment_probability: AppointmentProbability::Medium,
        workplace_structure: WorkplaceStructure::Regular,
        competitiveness: Competitiveness::Medium,
        preparation_level: PreparationLevel::Intermediate,
        study_time: StudyTime::Medium,
        prior_experience: PriorExperience::Some,
        content_mastery: ContentMastery::Medium,
        overload_tolerance: OverloadTolerance::Medium,
        ..boundary_answers()
    };
    let at_69 = compute(&mid);
    assert_eq!(at_69.index, 69);
    assert_eq!(at_69.classification, Classification::ModerateAdvantage);

    // 70: high.
    let at_70 = compute(&AnswerSet {
        board_difficulty: BoardDifficulty::Easy,
        ..mid
    });
    assert_eq!(at_70.index, 70);
    assert_eq!(at_70.classification, Classification::HighAdvantage);
}

#[test]
fn composite_index_stays_within_bounds_for_extreme_inputs() {
    let floor = compute(&AnswerSet {
        employment_type: EmploymentType::TemporaryContract,
        ..discouraging_answers()
    });
    assert!(floor.index <= 100);

    let ceiling = compute(&AnswerSet {
        gross_salary: 1_000_000.0,
        ..encouraging_answers()
    });
    assert_eq!(ceiling.index, 100);
}

#[test]
fn personal_context_block_is_always_clamped() {
    let statuses = [EmploymentStatus::Employed, EmploymentStatus::Unemployed];
    let priorities = [
        FinancialPriority::Low,
        FinancialPriority::Medium,
        FinancialPriority::High,
    ];
    let tolerances = [
        OverloadTolerance::Low,
        OverloadTolerance::Medium,
        OverloadTolerance::High,
    ];

    for status in statuses {
        for priority in priorities {
            for tolerance in tolerances {
                let assessment = compute(&AnswerSet {
                    employment_status: status,
                    financial_priority: priority,
                    overload_tolerance: tolerance,
                    ..discouraging_answers()
                });
                assert!(
                    (-5..=10).contains(&assessment.block_c),
                    "block C escaped its clamp for {status:?}/{priority:?}/{tolerance:?}"
                );
            }
        }
    }
}

#[test]
fn computing_twice_yields_identical_assessments() {
    let answers = boundary_answers();
    assert_eq!(compute(&answers), compute(&answers));
}

#[test]
fn weaknesses_and_attention_are_never_empty() {
    for answers in [
        discouraging_answers(),
        encouraging_answers(),
        boundary_answers(),
    ] {
        let assessment = compute(&answers);
        assert!(!assessment.insights.weaknesses.is_empty());
        assert!(!assessment.insights.attention_points.is_empty());
    }
}

#[test]
fn preparation_component_never_decreases_with_more_time_or_preparation() {
    let preparations = PreparationLevel::ordered();
    let times = StudyTime::ordered();

    for (row, preparation) in preparations.iter().enumerate() {
        for (column, time) in times.iter().enumerate() {
            if row + 1 < preparations.len() {
                assert!(
                    preparation_time_points(preparations[row + 1], *time)
                        >= preparation_time_points(*preparation, *time)
                );
            }
            if column + 1 < times.len() {
                assert!(
                    preparation_time_points(*preparation, times[column + 1])
                        >= preparation_time_points(*preparation, *time)
                );
            }
        }
    }
}

#[test]
fn session_rejects_zero_weekly_hours_before_the_engine_runs() {
    let sheet = AnswerSheet {
        gross_salary: 3000.0,
        fixed_benefits: None,
        weekly_hours: 0,
        employment_type: EmploymentType::Statutory,
        openings: 1,
        waiting_list: false,
        board_difficulty: BoardDifficulty::VeryHard,
        appointment_probability: AppointmentProbability::Low,
        workplace_structure: WorkplaceStructure::Poor,
        competitiveness: Competitiveness::High,
        preparation_level: PreparationLevel::Beginner,
        study_time: StudyTime::Low,
        prior_experience: PriorExperience::None,
        distance: Distance::OtherState,
        interest: Interest::Low,
        board_familiarity: BoardFamiliarity::None,
        content_mastery: ContentMastery::Low,
        employment_status: EmploymentStatus::Employed,
        financial_priority: FinancialPriority::Low,
        overload_tolerance: OverloadTolerance::Low,
    };

    let mut session = AssessmentSession::new();
    session.begin().expect("idle session can begin");
    assert!(matches!(
        session.submit(sheet).unwrap_err(),
        SessionError::Answer(_)
    ));
    assert_eq!(session.state(), SessionState::CollectingInput);
    assert!(session.present().is_err(), "no result to display");
}
