use super::domain::{
    AnswerSet, AppointmentProbability, BoardDifficulty, BoardFamiliarity, Competitiveness,
    ContentMastery, Distance, EmploymentType, FinancialPriority, Interest, OverloadTolerance,
    PreparationLevel, PriorExperience, StudyTime, WeeklyWorkload, WorkplaceStructure,
};
use super::engine::ScoreBreakdown;
use super::views::AdvantageInsights;

const NO_WEAKNESS_FALLBACK: &str = "No immediate critical impediments were identified.";
const NO_ATTENTION_FALLBACK: &str =
    "Track the agency's appointment history to calibrate expectations.";

const NARRATIVE_HIGH: &str = "Highly favorable outlook. The posting is fertile ground and your \
     profile is aligned. This is the moment to commit your best resources.";
const NARRATIVE_MODERATE: &str = "Moderate advantage. The posting is viable but calls for managed \
     expectations and focus on the attention points.";
const NARRATIVE_LOW: &str = "Low advantage. Consider whether the emotional and financial \
     investment would pay off better in a posting closer to your profile.";

/// Runs every observation predicate in its fixed order and picks the
/// strategic narrative for the index band. Weaknesses and attention points
/// fall back to a fixed sentence when nothing fires; strengths may stay
/// empty.
pub(crate) fn generate_insights(
    answers: &AnswerSet,
    breakdown: &ScoreBreakdown,
    index: u8,
) -> AdvantageInsights {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut attention_points = Vec::new();

    if breakdown.hourly_points >= 16 {
        strengths.push("Competitive pay for each hour worked.".to_string());
    }
    if answers.employment_type == EmploymentType::Statutory {
        strengths.push("Tenure guarantees and a dedicated career track.".to_string());
    }
    if answers.appointment_probability == AppointmentProbability::High {
        strengths.push("Strong likelihood of a quick appointment.".to_string());
    }
    if answers.content_mastery == ContentMastery::High {
        strengths.push("Excellent command of the topics on the syllabus.".to_string());
    }
    if answers.interest == Interest::High {
        strengths.push("Strong affinity with the role's field of work.".to_string());
    }
    if answers.distance == Distance::SameCity {
        strengths.push("Logistical comfort and no relocation or commute costs.".to_string());
    }

    if breakdown.hourly_points <= 4 {
        weaknesses.push("Financial return disproportionate to the demands of the role.".to_string());
    }
    if answers.employment_type == EmploymentType::TemporaryContract {
        weaknesses.push("Precarious contract with no guarantee of continuity.".to_string());
    }
    if answers.workplace_structure == WorkplaceStructure::Poor {
        weaknesses.push("Risk of degraded working conditions on the job.".to_string());
    }
    if answers.competitiveness == Competitiveness::High {
        weaknesses.push("Estimated competition is very high (mass-entry exam).".to_string());
    }
    if answers.distance == Distance::OtherState
        && answers.financial_priority == FinancialPriority::High
    {
        weaknesses
            .push("Relocation costs are incompatible with urgent financial needs.".to_string());
    }
    if answers.weekly_workload == WeeklyWorkload::FortyHours
        && answers.overload_tolerance == OverloadTolerance::Low
    {
        weaknesses.push("A 40h week carries a high risk of emotional exhaustion.".to_string());
    }
    if answers.interest == Interest::Low {
        weaknesses.push("Low interest in the field can quickly erode motivation.".to_string());
    }
    if answers.preparation_level == PreparationLevel::Beginner
        && answers.board_difficulty == BoardDifficulty::VeryHard
    {
        weaknesses
            .push("Wide gap between preparation level and the board's demands.".to_string());
    }
    if answers.gross_salary < 3500.0 && answers.weekly_workload == WeeklyWorkload::FortyHours {
        weaknesses.push("Base pay below the usual floor for a 40h position.".to_string());
    }

    if answers.waiting_list && answers.openings <= 1 {
        attention_points.push(
            "Posting leans on the waiting list: appointment may take a long time.".to_string(),
        );
    }
    if answers.board_difficulty == BoardDifficulty::VeryHard {
        attention_points
            .push("Examining board with a history of rigorous, technical questions.".to_string());
    }
    if answers.distance == Distance::NearbyRegion {
        attention_points
            .push("Daily commute will need planning (transport and cost).".to_string());
    }
    if answers.study_time == StudyTime::Low {
        attention_points
            .push("Limited study time demands extreme focus on high-priority topics.".to_string());
    }
    if answers.prior_experience == PriorExperience::None {
        attention_points.push(
            "No hands-on experience in the field may hurt the credentials stage.".to_string(),
        );
    }
    if answers.board_familiarity == BoardFamiliarity::None {
        attention_points
            .push("Unfamiliar examining board: work through its past exams.".to_string());
    }
    if answers.weekly_workload == WeeklyWorkload::ThirtyHours && breakdown.hourly_points < 12 {
        attention_points
            .push("A 30h week is positive, but the pro-rated pay is a warning sign.".to_string());
    }
    if answers.appointment_probability == AppointmentProbability::Low {
        attention_points.push(
            "Agency with a history of appointing only the exact number of openings.".to_string(),
        );
    }
    if answers.competitiveness == Competitiveness::Medium && answers.openings < 3 {
        attention_points
            .push("Few openings under moderate competition push the cutoff score up.".to_string());
    }

    if weaknesses.is_empty() {
        weaknesses.push(NO_WEAKNESS_FALLBACK.to_string());
    }
    if attention_points.is_empty() {
        attention_points.push(NO_ATTENTION_FALLBACK.to_string());
    }

    let narrative = if index >= 70 {
        NARRATIVE_HIGH
    } else if index >= 40 {
        NARRATIVE_MODERATE
    } else {
        NARRATIVE_LOW
    };

    AdvantageInsights {
        strengths,
        weaknesses,
        attention_points,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::{
        AnswerSet, AppointmentProbability, BoardDifficulty, BoardFamiliarity, Competitiveness,
        ContentMastery, Distance, EmploymentStatus, EmploymentType, FinancialPriority, Interest,
        OverloadTolerance, PreparationLevel, PriorExperience, StudyTime, WeeklyWorkload,
        WorkplaceStructure,
    };
    use super::super::engine::compute;
    use super::*;

    fn favorable_answers() -> AnswerSet {
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

    #[test]
    fn favorable_answers_collect_all_six_strengths() {
        let assessment = compute(&favorable_answers());
        assert_eq!(assessment.insights.strengths.len(), 6);
        assert!(assessment.insights.strengths[0].contains("Competitive pay"));
        assert!(assessment.insights.strengths[1].contains("Tenure"));
    }

    #[test]
    fn fallback_sentences_keep_weaknesses_and_attention_non_empty() {
        let assessment = compute(&favorable_answers());
        assert_eq!(
            assessment.insights.weaknesses,
            vec![NO_WEAKNESS_FALLBACK.to_string()]
        );
        assert_eq!(
            assessment.insights.attention_points,
            vec![NO_ATTENTION_FALLBACK.to_string()]
        );
    }

    #[test]
    fn strengths_have_no_fallback() {
        let mut answers = favorable_answers();
        answers.gross_salary = 2000.0;
        answers.fixed_benefits = 0.0;
        answers.weekly_workload = WeeklyWorkload::FortyHours;
        answers.employment_type = EmploymentType::PrivateContract;
        answers.appointment_probability = AppointmentProbability::Medium;
        answers.content_mastery = ContentMastery::Medium;
        answers.interest = Interest::Medium;
        answers.distance = Distance::NearbyRegion;

        let assessment = compute(&answers);
        assert!(assessment.insights.strengths.is_empty());
    }

    #[test]
    fn waiting_list_with_scarce_openings_raises_attention() {
        let mut answers = favorable_answers();
        answers.openings = 1;
        let assessment = compute(&answers);
        assert!(assessment
            .insights
            .attention_points
            .iter()
            .any(|point| point.contains("waiting list")));
    }

    #[test]
    fn thirty_hour_week_with_modest_pay_raises_attention() {
        let mut answers = favorable_answers();
        answers.weekly_workload = WeeklyWorkload::ThirtyHours;
        answers.gross_salary = 3000.0;
        answers.fixed_benefits = 0.0;
        let assessment = compute(&answers);
        assert!(assessment
            .insights
            .attention_points
            .iter()
            .any(|point| point.contains("30h week")));
    }

    #[test]
    fn narrative_tracks_the_index_band() {
        let favorable = compute(&favorable_answers());
        assert_eq!(favorable.insights.narrative, NARRATIVE_HIGH);

        let mut low = favorable_answers();
        low.gross_salary = 1000.0;
        low.fixed_benefits = 0.0;
        low.weekly_workload = WeeklyWorkload::FortyHours;
        low.employment_type = EmploymentType::TemporaryContract;
        low.openings = 1;
        low.waiting_list = false;
        low.board_difficulty = BoardDifficulty::VeryHard;
        low.appointment_probability = AppointmentProbability::Low;
        low.workplace_structure = WorkplaceStructure::Poor;
        low.competitiveness = Competitiveness::High;
        low.preparation_level = PreparationLevel::Beginner;
        low.study_time = StudyTime::Low;
        low.prior_experience = PriorExperience::None;
        low.distance = Distance::OtherState;
        low.interest = Interest::Low;
        low.board_familiarity = BoardFamiliarity::None;
        low.content_mastery = ContentMastery::Low;
        low.employment_status = EmploymentStatus::Employed;
        low.financial_priority = FinancialPriority::Low;
        low.overload_tolerance = OverloadTolerance::Low;
        let assessment = compute(&low);
        assert_eq!(assessment.insights.narrative, NARRATIVE_LOW);
    }
}
