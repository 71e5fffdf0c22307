//! Keyword-heuristic idea evaluation.
//!
//! [`evaluate`] is a pure function: the same [`IdeaInput`] always yields the same
//! [`EvaluationResult`], nothing is cached, and no clock or randomness is consulted. It is
//! safe to call from any number of threads at once.

mod advisories;
pub mod catalog;
pub mod domain;
mod rules;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use domain::{
    CreatorProfile, Dimension, DimensionScore, EvaluationResult, EvaluationTrace, IdeaInput,
    IdeaValidationError, ScoreBreakdown, ScoreComponent, Valuation,
};
pub use valuation::{category_multiplier, valuate, ValuationBracket};

use rayon::prelude::*;
use rules::IdeaText;
use tracing::{debug, info};

/// Scores an idea, values it, and lists suggestions and risks.
pub fn evaluate(idea: &IdeaInput) -> EvaluationResult {
    explain(idea).result
}

/// Same as [`evaluate`], keeping the per-dimension contributions that produced the scores.
pub fn explain(idea: &IdeaInput) -> EvaluationTrace {
    let text = IdeaText::new(idea);
    let dimensions = rules::score_dimensions(&text);

    let mut breakdown = ScoreBreakdown::default();
    for dimension in &dimensions {
        breakdown.set(dimension.dimension, dimension.score);
    }

    let overall_score = overall_score(&breakdown);
    let valuation = valuate(overall_score, &idea.category);
    let suggestions = advisories::suggestions(&breakdown);
    let risk_factors = advisories::risk_factors(&breakdown, &text);

    debug!(
        overall_score,
        bracket = ValuationBracket::for_score(overall_score).label(),
        valuation_mid = valuation.mid,
        risks = risk_factors.len(),
        "idea evaluated"
    );

    EvaluationTrace {
        result: EvaluationResult {
            overall_score,
            score_breakdown: breakdown,
            valuation,
            suggestions,
            risk_factors,
        },
        dimensions,
    }
}

/// Evaluates ideas in parallel; results keep the input order.
pub fn evaluate_batch(ideas: &[IdeaInput]) -> Vec<EvaluationResult> {
    let results: Vec<EvaluationResult> = ideas.par_iter().map(evaluate).collect();
    info!(evaluated = results.len(), "idea batch evaluated");
    results
}

/// Weighted combination of the six dimensions, rounded half up.
///
/// Weights are integer per-mille values, so the weighted sum is exact and a sum landing on
/// `X.5` always rounds to `X + 1`.
pub fn overall_score(breakdown: &ScoreBreakdown) -> u8 {
    let weighted: u32 = breakdown
        .iter()
        .map(|(dimension, score)| dimension.weight_per_mille() * u32::from(score))
        .sum();
    ((weighted + 500) / 1000) as u8
}
