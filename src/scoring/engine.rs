use super::domain::{AnswerSet, WeeklyWorkload};
use super::insights::generate_insights;
use super::tables;
use super::views::{Alert, Assessment, Classification, ScoreComponent, ScoreFactor};

/// Intermediate sub-scores shared between the composite calculation and the
/// insight predicates.
pub(crate) struct ScoreBreakdown {
    pub hourly_rate: f64,
    /// Hourly-remuneration sub-score after the heavy-workload penalty.
    pub hourly_points: i32,
    pub block_a: i32,
    pub block_b: i32,
    pub block_c: i32,
}

/// Scores one validated answer set. Pure and deterministic: no I/O, no shared
/// state, identical input yields an identical assessment.
pub fn compute(answers: &AnswerSet) -> Assessment {
    let mut components = Vec::with_capacity(16);

    // Block A: posting-objective factors.
    let hours = answers.weekly_workload.hours();
    let total_remuneration = answers.gross_salary + answers.fixed_benefits;
    let hourly_rate = total_remuneration / f64::from(hours);

    let mut hourly_points = if hourly_rate < 80.0 {
        4
    } else if hourly_rate < 120.0 {
        8
    } else if hourly_rate < 160.0 {
        12
    } else if hourly_rate < 220.0 {
        16
    } else {
        20
    };

    // Low pay combined with the heaviest workload costs extra. The block
    // total is deliberately left unclamped afterwards; only the composite
    // index is clamped at the end.
    if hourly_points <= 8 && answers.weekly_workload == WeeklyWorkload::FortyHours {
        hourly_points -= 4;
    }
    components.push(ScoreComponent {
        factor: ScoreFactor::HourlyRemuneration,
        points: hourly_points,
        notes: format!(
            "hourly-equivalent pay {:.2} over a {} week",
            hourly_rate,
            answers.weekly_workload.label()
        ),
    });

    let employment_points = tables::employment_type_points(answers.employment_type);
    components.push(ScoreComponent {
        factor: ScoreFactor::EmploymentType,
        points: employment_points,
        notes: format!("{} position", answers.employment_type.label()),
    });

    let openings_base = if answers.openings > 10 {
        8
    } else if answers.openings >= 3 {
        5
    } else {
        2
    };
    let waiting_list_bonus = if answers.waiting_list { 2 } else { 0 };
    let openings_points = (openings_base + waiting_list_bonus).min(10);
    components.push(ScoreComponent {
        factor: ScoreFactor::Openings,
        points: openings_points,
        notes: if answers.waiting_list {
            format!("{} opening(s) plus waiting-list registration", answers.openings)
        } else {
            format!("{} opening(s)", answers.openings)
        },
    });

    let board_points = tables::board_difficulty_points(answers.board_difficulty);
    components.push(ScoreComponent {
        factor: ScoreFactor::BoardDifficulty,
        points: board_points,
        notes: format!("{} examining board", answers.board_difficulty.label()),
    });

    let probability_points = tables::appointment_probability_points(answers.appointment_probability);
    components.push(ScoreComponent {
        factor: ScoreFactor::AppointmentProbability,
        points: probability_points,
        notes: format!(
            "{} appointment probability",
            answers.appointment_probability.label()
        ),
    });

    let structure_points = tables::workplace_structure_points(answers.workplace_structure);
    components.push(ScoreComponent {
        factor: ScoreFactor::WorkplaceStructure,
        points: structure_points,
        notes: format!("{} workplace structure", answers.workplace_structure.label()),
    });

    let competitiveness_points = tables::competitiveness_points(answers.competitiveness);
    components.push(ScoreComponent {
        factor: ScoreFactor::Competitiveness,
        points: competitiveness_points,
        notes: format!("{} competition", answers.competitiveness.label()),
    });

    let block_a = hourly_points
        + employment_points
        + openings_points
        + board_points
        + probability_points
        + structure_points
        + competitiveness_points;

    // Block B: candidate-profile factors.
    let preparation_points =
        tables::preparation_time_points(answers.preparation_level, answers.study_time);
    components.push(ScoreComponent {
        factor: ScoreFactor::PreparationAndTime,
        points: preparation_points,
        notes: format!(
            "{} preparation with {} study time",
            answers.preparation_level.label(),
            answers.study_time.label()
        ),
    });

    let experience_points = tables::prior_experience_points(answers.prior_experience);
    components.push(ScoreComponent {
        factor: ScoreFactor::PriorExperience,
        points: experience_points,
        notes: format!("{} prior experience", answers.prior_experience.label()),
    });

    let interest_points = tables::interest_points(answers.interest);
    components.push(ScoreComponent {
        factor: ScoreFactor::Interest,
        points: interest_points,
        notes: format!("{} interest in the role", answers.interest.label()),
    });

    let distance_points = tables::distance_points(answers.distance);
    components.push(ScoreComponent {
        factor: ScoreFactor::Distance,
        points: distance_points,
        notes: format!("workplace in {}", answers.distance.label().to_lowercase()),
    });

    let familiarity_points = tables::board_familiarity_points(answers.board_familiarity);
    components.push(ScoreComponent {
        factor: ScoreFactor::BoardFamiliarity,
        points: familiarity_points,
        notes: format!(
            "{} familiarity with the board",
            answers.board_familiarity.label()
        ),
    });

    let mastery_points = tables::content_mastery_points(answers.content_mastery);
    components.push(ScoreComponent {
        factor: ScoreFactor::ContentMastery,
        points: mastery_points,
        notes: format!("{} content mastery", answers.content_mastery.label()),
    });

    let block_b = preparation_points
        + experience_points
        + interest_points
        + distance_points
        + familiarity_points
        + mastery_points;

    // Block C: personal-context adjustment, hard-clamped to [-5, 10].
    let status_points = tables::employment_status_points(answers.employment_status);
    components.push(ScoreComponent {
        factor: ScoreFactor::EmploymentStatus,
        points: status_points,
        notes: format!("currently {}", answers.employment_status.label().to_lowercase()),
    });

    let financial_points = tables::financial_priority_points(answers.financial_priority);
    components.push(ScoreComponent {
        factor: ScoreFactor::FinancialPriority,
        points: financial_points,
        notes: format!("{} financial priority", answers.financial_priority.label()),
    });

    let overload_deduction = tables::overload_penalty(answers.overload_tolerance);
    components.push(ScoreComponent {
        factor: ScoreFactor::OverloadTolerance,
        points: -overload_deduction,
        notes: format!("{} overload tolerance", answers.overload_tolerance.label()),
    });

    let block_c = (status_points + financial_points - overload_deduction).clamp(-5, 10);

    // Sub-scores are integers, so the rounding step of the composite formula
    // reduces to the final clamp.
    let index = (block_a + block_b + block_c).clamp(0, 100) as u8;
    let classification = Classification::from_index(index);

    let mut alerts = Vec::new();
    if block_a < 32 {
        alerts.push(Alert::StructuralDifficulty.to_view());
    }
    if block_b < 25 {
        alerts.push(Alert::ProfileMismatch.to_view());
    }
    if block_c < 0 {
        alerts.push(Alert::Sustainability.to_view());
    }

    let breakdown = ScoreBreakdown {
        hourly_rate,
        hourly_points,
        block_a,
        block_b,
        block_c,
    };
    let insights = generate_insights(answers, &breakdown, index);

    Assessment {
        hourly_rate,
        block_a,
        block_b,
        block_c,
        index,
        classification,
        classification_label: classification.label(),
        alerts,
        insights,
        components,
    }
}
