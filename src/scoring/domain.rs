use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly workload tiers accepted by postings. The raw hour count only ever
/// enters through [`WeeklyWorkload::from_hours`], so a zero or fractional
/// workload can never reach the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyWorkload {
    TwentyHours,
    ThirtyHours,
    FortyHours,
}

impl WeeklyWorkload {
    pub const fn ordered() -> [Self; 3] {
        [Self::TwentyHours, Self::ThirtyHours, Self::FortyHours]
    }

    pub const fn hours(self) -> u32 {
        match self {
            Self::TwentyHours => 20,
            Self::ThirtyHours => 30,
            Self::FortyHours => 40,
        }
    }

    pub fn from_hours(hours: u32) -> Result<Self, AnswerError> {
        match hours {
            20 => Ok(Self::TwentyHours),
            30 => Ok(Self::ThirtyHours),
            40 => Ok(Self::FortyHours),
            other => Err(AnswerError::UnsupportedWorkload(other)),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TwentyHours => "20h",
            Self::ThirtyHours => "30h",
            Self::FortyHours => "40h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Statutory,
    PrivateContract,
    TemporaryContract,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Statutory => "Statutory",
            Self::PrivateContract => "Private contract",
            Self::TemporaryContract => "Temporary contract",
        }
    }
}

/// Difficulty tiers of the examining board, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardDifficulty {
    VeryEasy,
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl BoardDifficulty {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::VeryEasy,
            Self::Easy,
            Self::Moderate,
            Self::Hard,
            Self::VeryHard,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::VeryHard => "Very hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentProbability {
    Low,
    Medium,
    High,
}

impl AppointmentProbability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkplaceStructure {
    Good,
    Regular,
    Poor,
}

impl WorkplaceStructure {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Regular => "Regular",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Competitiveness {
    Low,
    Medium,
    High,
}

impl Competitiveness {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl PreparationLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyTime {
    Low,
    Medium,
    High,
}

impl StudyTime {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorExperience {
    None,
    Some,
    Extensive,
}

impl PriorExperience {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Some => "Some",
            Self::Extensive => "Extensive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    SameCity,
    NearbyRegion,
    OtherState,
}

impl Distance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameCity => "Same city",
            Self::NearbyRegion => "Nearby region",
            Self::OtherState => "Other state",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Low,
    Medium,
    High,
}

impl Interest {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardFamiliarity {
    None,
    Little,
    Much,
}

impl BoardFamiliarity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Little => "Little",
            Self::Much => "Much",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMastery {
    Low,
    Medium,
    High,
}

impl ContentMastery {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed",
            Self::Unemployed => "Unemployed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialPriority {
    Low,
    Medium,
    High,
}

impl FinancialPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadTolerance {
    Low,
    Medium,
    High,
}

impl OverloadTolerance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Raw questionnaire submission, exactly as collected by a form or decoded
/// from a request body. Categorical answers are already closed enumerations
/// (an unknown label fails deserialization outright); the numeric answers are
/// checked by [`AnswerSheet::validate`] before anything is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub gross_salary: f64,
    #[serde(default)]
    pub fixed_benefits: Option<f64>,
    pub weekly_hours: u32,
    pub employment_type: EmploymentType,
    pub openings: u32,
    #[serde(default)]
    pub waiting_list: bool,
    pub board_difficulty: BoardDifficulty,
    pub appointment_probability: AppointmentProbability,
    pub workplace_structure: WorkplaceStructure,
    pub competitiveness: Competitiveness,
    pub preparation_level: PreparationLevel,
    pub study_time: StudyTime,
    pub prior_experience: PriorExperience,
    pub distance: Distance,
    pub interest: Interest,
    pub board_familiarity: BoardFamiliarity,
    pub content_mastery: ContentMastery,
    pub employment_status: EmploymentStatus,
    pub financial_priority: FinancialPriority,
    pub overload_tolerance: OverloadTolerance,
}

impl AnswerSheet {
    /// Checks every boundary precondition and produces the validated answer
    /// set the engine consumes. Missing benefits default to zero.
    pub fn validate(self) -> Result<AnswerSet, AnswerError> {
        if !self.gross_salary.is_finite() {
            return Err(AnswerError::NonFiniteSalary);
        }
        if self.gross_salary < 0.0 {
            return Err(AnswerError::NegativeSalary(self.gross_salary));
        }

        let fixed_benefits = self.fixed_benefits.unwrap_or(0.0);
        if !fixed_benefits.is_finite() {
            return Err(AnswerError::NonFiniteBenefits);
        }
        if fixed_benefits < 0.0 {
            return Err(AnswerError::NegativeBenefits(fixed_benefits));
        }

        let weekly_workload = WeeklyWorkload::from_hours(self.weekly_hours)?;

        Ok(AnswerSet {
            gross_salary: self.gross_salary,
            fixed_benefits,
            weekly_workload,
            employment_type: self.employment_type,
            openings: self.openings,
            waiting_list: self.waiting_list,
            board_difficulty: self.board_difficulty,
            appointment_probability: self.appointment_probability,
            workplace_structure: self.workplace_structure,
            competitiveness: self.competitiveness,
            preparation_level: self.preparation_level,
            study_time: self.study_time,
            prior_experience: self.prior_experience,
            distance: self.distance,
            interest: self.interest,
            board_familiarity: self.board_familiarity,
            content_mastery: self.content_mastery,
            employment_status: self.employment_status,
            financial_priority: self.financial_priority,
            overload_tolerance: self.overload_tolerance,
        })
    }
}

/// Validated questionnaire responses. Constructed only through
/// [`AnswerSheet::validate`], consumed once per calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSet {
    pub gross_salary: f64,
    pub fixed_benefits: f64,
    pub weekly_workload: WeeklyWorkload,
    pub employment_type: EmploymentType,
    pub openings: u32,
    pub waiting_list: bool,
    pub board_difficulty: BoardDifficulty,
    pub appointment_probability: AppointmentProbability,
    pub workplace_structure: WorkplaceStructure,
    pub competitiveness: Competitiveness,
    pub preparation_level: PreparationLevel,
    pub study_time: StudyTime,
    pub prior_experience: PriorExperience,
    pub distance: Distance,
    pub interest: Interest,
    pub board_familiarity: BoardFamiliarity,
    pub content_mastery: ContentMastery,
    pub employment_status: EmploymentStatus,
    pub financial_priority: FinancialPriority,
    pub overload_tolerance: OverloadTolerance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerError {
    NonFiniteSalary,
    NegativeSalary(f64),
    NonFiniteBenefits,
    NegativeBenefits(f64),
    UnsupportedWorkload(u32),
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::NonFiniteSalary => write!(f, "gross salary must be a finite number"),
            AnswerError::NegativeSalary(value) => {
                write!(f, "gross salary must not be negative (got {value})")
            }
            AnswerError::NonFiniteBenefits => write!(f, "fixed benefits must be a finite number"),
            AnswerError::NegativeBenefits(value) => {
                write!(f, "fixed benefits must not be negative (got {value})")
            }
            AnswerError::UnsupportedWorkload(hours) => {
                write!(f, "weekly workload must be 20, 30 or 40 hours (got {hours})")
            }
        }
    }
}

impl std::error::Error for AnswerError {}
