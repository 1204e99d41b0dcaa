use serde::Serialize;

/// Advantage band derived solely from the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    LowAdvantage,
    ModerateAdvantage,
    HighAdvantage,
}

impl Classification {
    /// Index bands are inclusive: 0–39 low, 40–69 moderate, 70–100 high.
    pub const fn from_index(index: u8) -> Self {
        if index <= 39 {
            Self::LowAdvantage
        } else if index >= 70 {
            Self::HighAdvantage
        } else {
            Self::ModerateAdvantage
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LowAdvantage => "Low advantage",
            Self::ModerateAdvantage => "Moderate advantage",
            Self::HighAdvantage => "High advantage",
        }
    }
}

/// Structural warnings raised from the block sub-totals. Evaluated in a
/// fixed order; any subset may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    StructuralDifficulty,
    ProfileMismatch,
    Sustainability,
}

impl Alert {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StructuralDifficulty => "Structural alert",
            Self::ProfileMismatch => "Profile alert",
            Self::Sustainability => "Sustainability alert",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            Self::StructuralDifficulty => {
                "The posting's objective variables point to a high structural challenge."
            }
            Self::ProfileMismatch => {
                "Low alignment between the posting and your current stage of preparation."
            }
            Self::Sustainability => "Risk of burnout or personal imbalance.",
        }
    }

    pub fn to_view(self) -> AlertView {
        AlertView {
            alert: self,
            label: self.label(),
            detail: self.detail(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    pub alert: Alert,
    pub label: &'static str,
    pub detail: &'static str,
}

/// Which question (or question pair) a score component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    HourlyRemuneration,
    EmploymentType,
    Openings,
    BoardDifficulty,
    AppointmentProbability,
    WorkplaceStructure,
    Competitiveness,
    PreparationAndTime,
    PriorExperience,
    Interest,
    Distance,
    BoardFamiliarity,
    ContentMastery,
    EmploymentStatus,
    FinancialPriority,
    OverloadTolerance,
}

/// Discrete contribution to the composite index, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
    pub notes: String,
}

/// Categorized free-text observations derived from the answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvantageInsights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub attention_points: Vec<String>,
    pub narrative: &'static str,
}

/// Immutable outcome of one scoring run. Built once per calculation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Hourly-equivalent remuneration the posting pays.
    pub hourly_rate: f64,
    /// Posting-objective block, intentionally unclamped.
    pub block_a: i32,
    /// Candidate-profile block.
    pub block_b: i32,
    /// Personal-context adjustment, clamped to [-5, 10].
    pub block_c: i32,
    /// Composite advantage index in [0, 100].
    pub index: u8,
    pub classification: Classification,
    pub classification_label: &'static str,
    pub alerts: Vec<AlertView>,
    pub insights: AdvantageInsights,
    pub components: Vec<ScoreComponent>,
}
