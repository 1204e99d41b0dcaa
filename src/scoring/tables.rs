//! Fixed scoring weights. These are domain tuning values reproduced exactly;
//! they are not derived from anything and must not be adjusted in isolation.

use super::domain::{
    AppointmentProbability, BoardDifficulty, BoardFamiliarity, Competitiveness, ContentMastery,
    Distance, EmploymentStatus, EmploymentType, FinancialPriority, Interest, OverloadTolerance,
    PreparationLevel, PriorExperience, StudyTime, WorkplaceStructure,
};

pub const fn employment_type_points(value: EmploymentType) -> i32 {
    match value {
        EmploymentType::Statutory => 10,
        EmploymentType::PrivateContract => 6,
        EmploymentType::TemporaryContract => 3,
    }
}

pub const fn board_difficulty_points(value: BoardDifficulty) -> i32 {
    match value {
        BoardDifficulty::VeryEasy => 5,
        BoardDifficulty::Easy => 4,
        BoardDifficulty::Moderate => 3,
        BoardDifficulty::Hard => 2,
        BoardDifficulty::VeryHard => 1,
    }
}

pub const fn appointment_probability_points(value: AppointmentProbability) -> i32 {
    match value {
        AppointmentProbability::High => 5,
        AppointmentProbability::Medium => 3,
        AppointmentProbability::Low => 1,
    }
}

pub const fn workplace_structure_points(value: WorkplaceStructure) -> i32 {
    match value {
        WorkplaceStructure::Good => 5,
        WorkplaceStructure::Regular => 3,
        WorkplaceStructure::Poor => 1,
    }
}

/// Lower competition scores higher.
pub const fn competitiveness_points(value: Competitiveness) -> i32 {
    match value {
        Competitiveness::Low => 5,
        Competitiveness::Medium => 3,
        Competitiveness::High => 1,
    }
}

/// Joint preparation-by-available-time rubric. Non-decreasing along both
/// axes: more preparation or more study time never lowers the score.
pub const fn preparation_time_points(preparation: PreparationLevel, time: StudyTime) -> i32 {
    match (preparation, time) {
        (PreparationLevel::Advanced, StudyTime::High) => 15,
        (PreparationLevel::Advanced, StudyTime::Medium) => 12,
        (PreparationLevel::Advanced, StudyTime::Low) => 4,
        (PreparationLevel::Intermediate, StudyTime::High) => 12,
        (PreparationLevel::Intermediate, StudyTime::Medium) => 9,
        (PreparationLevel::Intermediate, StudyTime::Low) => 4,
        (PreparationLevel::Beginner, StudyTime::High) => 8,
        (PreparationLevel::Beginner, StudyTime::Medium) => 6,
        (PreparationLevel::Beginner, StudyTime::Low) => 4,
    }
}

pub const fn prior_experience_points(value: PriorExperience) -> i32 {
    match value {
        PriorExperience::Extensive => 10,
        PriorExperience::Some => 6,
        PriorExperience::None => 3,
    }
}

pub const fn interest_points(value: Interest) -> i32 {
    match value {
        Interest::High => 10,
        Interest::Medium => 6,
        Interest::Low => 3,
    }
}

pub const fn distance_points(value: Distance) -> i32 {
    match value {
        Distance::SameCity => 5,
        Distance::NearbyRegion => 3,
        Distance::OtherState => 1,
    }
}

pub const fn board_familiarity_points(value: BoardFamiliarity) -> i32 {
    match value {
        BoardFamiliarity::Much => 5,
        BoardFamiliarity::Little => 3,
        BoardFamiliarity::None => 1,
    }
}

pub const fn content_mastery_points(value: ContentMastery) -> i32 {
    match value {
        ContentMastery::High => 5,
        ContentMastery::Medium => 3,
        ContentMastery::Low => 1,
    }
}

pub const fn employment_status_points(value: EmploymentStatus) -> i32 {
    match value {
        EmploymentStatus::Unemployed => 5,
        EmploymentStatus::Employed => 2,
    }
}

pub const fn financial_priority_points(value: FinancialPriority) -> i32 {
    match value {
        FinancialPriority::High => 5,
        FinancialPriority::Medium => 3,
        FinancialPriority::Low => 1,
    }
}

/// Subtracted from Block C: the less overload the candidate tolerates, the
/// larger the deduction.
pub const fn overload_penalty(value: OverloadTolerance) -> i32 {
    match value {
        OverloadTolerance::High => 0,
        OverloadTolerance::Medium => 3,
        OverloadTolerance::Low => 6,
    }
}
