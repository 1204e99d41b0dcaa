//! Batch import of posting scenarios from CSV, so several postings can be
//! scored and ranked side by side.

use crate::scoring::domain::{
    AnswerSet, AnswerSheet, AppointmentProbability, BoardDifficulty, BoardFamiliarity,
    Competitiveness, ContentMastery, Distance, EmploymentStatus, EmploymentType, FinancialPriority,
    Interest, OverloadTolerance, PreparationLevel, PriorExperience, StudyTime, WorkplaceStructure,
};
use crate::scoring::views::Assessment;
use crate::scoring::{self, domain::AnswerError};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ScenarioImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Answer { row: usize, source: AnswerError },
}

impl std::fmt::Display for ScenarioImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioImportError::Io(err) => write!(f, "failed to read scenario file: {}", err),
            ScenarioImportError::Csv(err) => write!(f, "invalid scenario CSV data: {}", err),
            ScenarioImportError::Answer { row, source } => {
                write!(f, "scenario row {} holds invalid answers: {}", row, source)
            }
        }
    }
}

impl std::error::Error for ScenarioImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioImportError::Io(err) => Some(err),
            ScenarioImportError::Csv(err) => Some(err),
            ScenarioImportError::Answer { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ScenarioImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScenarioImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One CSV row: a scenario label plus the raw questionnaire answers.
/// Categorical columns use the same snake_case labels as the JSON API.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    scenario: String,
    gross_salary: f64,
    #[serde(default)]
    fixed_benefits: Option<f64>,
    weekly_hours: u32,
    employment_type: EmploymentType,
    openings: u32,
    waiting_list: bool,
    board_difficulty: BoardDifficulty,
    appointment_probability: AppointmentProbability,
    workplace_structure: WorkplaceStructure,
    competitiveness: Competitiveness,
    preparation_level: PreparationLevel,
    study_time: StudyTime,
    prior_experience: PriorExperience,
    distance: Distance,
    interest: Interest,
    board_familiarity: BoardFamiliarity,
    content_mastery: ContentMastery,
    employment_status: EmploymentStatus,
    financial_priority: FinancialPriority,
    overload_tolerance: OverloadTolerance,
}

impl ScenarioRow {
    fn into_parts(self) -> (String, AnswerSheet) {
        let sheet = AnswerSheet {
            gross_salary: self.gross_salary,
            fixed_benefits: self.fixed_benefits,
            weekly_hours: self.weekly_hours,
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
        };
        (self.scenario, sheet)
    }
}

/// A validated scenario ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledScenario {
    pub label: String,
    pub answers: AnswerSet,
}

/// A scored scenario; produced by [`rank_scenarios`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScenario {
    pub label: String,
    pub assessment: Assessment,
}

pub struct ScenarioImporter;

impl ScenarioImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledScenario>, ScenarioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LabeledScenario>, ScenarioImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scenarios = Vec::new();
        for (row_index, record) in csv_reader.deserialize::<ScenarioRow>().enumerate() {
            let (label, sheet) = record?.into_parts();
            let answers = sheet
                .validate()
                .map_err(|source| ScenarioImportError::Answer {
                    // 1-based and past the header line, matching what a
                    // spreadsheet shows.
                    row: row_index + 2,
                    source,
                })?;
            scenarios.push(LabeledScenario { label, answers });
        }

        Ok(scenarios)
    }
}

/// Scores every scenario and sorts the results by descending index; ties keep
/// the file order.
pub fn rank_scenarios(scenarios: Vec<LabeledScenario>) -> Vec<RankedScenario> {
    let mut ranked: Vec<RankedScenario> = scenarios
        .into_iter()
        .map(|scenario| RankedScenario {
            assessment: scoring::compute(&scenario.answers),
            label: scenario.label,
        })
        .collect();

    ranked.sort_by(|left, right| right.assessment.index.cmp(&left.assessment.index));
    ranked
}
