use serde::{Deserialize, Serialize};

use super::catalog::DIMENSION_WEIGHTS;
use super::valuation::ValuationBracket;

/// Idea as supplied by the caller, typically hydrated from a persisted idea record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_profile: Option<CreatorProfile>,
}

impl IdeaInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_creator(mut self, profile: CreatorProfile) -> Self {
        self.creator_profile = Some(profile);
        self
    }

    /// Caller-side check for blank required fields. The engine itself accepts anything.
    pub fn validate(&self) -> Result<(), IdeaValidationError> {
        if self.title.trim().is_empty() {
            return Err(IdeaValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(IdeaValidationError::MissingDescription);
        }
        Ok(())
    }

    pub(crate) fn skills(&self) -> &[String] {
        self.creator_profile
            .as_ref()
            .map(|profile| profile.skills.as_slice())
            .unwrap_or_default()
    }
}

/// Subset of the creator's profile the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Rejection raised by [`IdeaInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdeaValidationError {
    #[error("idea title must not be blank")]
    MissingTitle,
    #[error("idea description must not be blank")]
    MissingDescription,
}

/// The six scored dimensions, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ProblemClarity,
    SolutionViability,
    MarketPotential,
    ExecutionReadiness,
    InnovationFactor,
    Scalability,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::ProblemClarity,
        Dimension::SolutionViability,
        Dimension::MarketPotential,
        Dimension::ExecutionReadiness,
        Dimension::InnovationFactor,
        Dimension::Scalability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::ProblemClarity => "problem clarity",
            Dimension::SolutionViability => "solution viability",
            Dimension::MarketPotential => "market potential",
            Dimension::ExecutionReadiness => "execution readiness",
            Dimension::InnovationFactor => "innovation factor",
            Dimension::Scalability => "scalability",
        }
    }

    /// Contribution to the overall score, in thousandths.
    pub fn weight_per_mille(self) -> u32 {
        DIMENSION_WEIGHTS[self as usize]
    }
}

/// Per-dimension scores, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub problem_clarity: u8,
    pub solution_viability: u8,
    pub market_potential: u8,
    pub execution_readiness: u8,
    pub innovation_factor: u8,
    pub scalability: u8,
}

impl ScoreBreakdown {
    /// Breakdown with every dimension at the same score.
    pub fn uniform(score: u8) -> Self {
        Self {
            problem_clarity: score,
            solution_viability: score,
            market_potential: score,
            execution_readiness: score,
            innovation_factor: score,
            scalability: score,
        }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::ProblemClarity => self.problem_clarity,
            Dimension::SolutionViability => self.solution_viability,
            Dimension::MarketPotential => self.market_potential,
            Dimension::ExecutionReadiness => self.execution_readiness,
            Dimension::InnovationFactor => self.innovation_factor,
            Dimension::Scalability => self.scalability,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, score: u8) {
        let slot = match dimension {
            Dimension::ProblemClarity => &mut self.problem_clarity,
            Dimension::SolutionViability => &mut self.solution_viability,
            Dimension::MarketPotential => &mut self.market_potential,
            Dimension::ExecutionReadiness => &mut self.execution_readiness,
            Dimension::InnovationFactor => &mut self.innovation_factor,
            Dimension::Scalability => &mut self.scalability,
        };
        *slot = score;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL
            .iter()
            .map(move |dimension| (*dimension, self.get(*dimension)))
    }
}

/// Valuation range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

/// Evaluation output handed back to the caller, who owns any persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub overall_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub valuation: Valuation,
    pub suggestions: Vec<String>,
    pub risk_factors: Vec<String>,
}

impl EvaluationResult {
    pub fn bracket(&self) -> ValuationBracket {
        ValuationBracket::for_score(self.overall_score)
    }

    pub fn summary(&self) -> String {
        let weakest = self
            .score_breakdown
            .iter()
            .min_by_key(|(_, score)| *score)
            .map(|(dimension, score)| format!("{} ({score})", dimension.label()));

        let mut line = format!(
            "scored {}/100 ({} bracket), valued at {} [{} - {}]",
            self.overall_score,
            self.bracket().label(),
            self.valuation.mid,
            self.valuation.low,
            self.valuation.high
        );
        if let Some(weakest) = weakest {
            line.push_str(&format!(", weakest dimension: {weakest}"));
        }
        line
    }
}

/// Discrete contribution to a dimension score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub signal: &'static str,
    pub points: i32,
    pub notes: String,
}

/// Score for one dimension with the raw total before clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub raw: i32,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

/// [`EvaluationResult`] plus the per-dimension audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationTrace {
    pub result: EvaluationResult,
    pub dimensions: Vec<DimensionScore>,
}
