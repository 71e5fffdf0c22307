use super::catalog::{
    AFFIRMATION_THRESHOLD, DIMENSION_SUGGESTIONS, FALLBACK_SUGGESTION, INNOVATION_AFFIRMATION,
    MARKET_AFFIRMATION, MARKET_VALIDATION_RISK, NO_SKILLS_RISK, RISK_THRESHOLD,
    SUGGESTION_THRESHOLD, TEAM_CAPABILITY_RISK, TECHNICAL_FEASIBILITY_RISK,
    THIN_DESCRIPTION_CHARS, THIN_DESCRIPTION_RISK,
};
use super::domain::ScoreBreakdown;
use super::rules::IdeaText;

/// Deficiency suggestions in dimension order, then affirmations. Never empty.
pub(crate) fn suggestions(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut suggestions: Vec<String> = breakdown
        .iter()
        .filter(|(_, score)| *score < SUGGESTION_THRESHOLD)
        .map(|(dimension, _)| DIMENSION_SUGGESTIONS[dimension as usize].to_string())
        .collect();

    if breakdown.market_potential >= AFFIRMATION_THRESHOLD {
        suggestions.push(MARKET_AFFIRMATION.to_string());
    }
    if breakdown.innovation_factor >= AFFIRMATION_THRESHOLD {
        suggestions.push(INNOVATION_AFFIRMATION.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(FALLBACK_SUGGESTION.to_string());
    }

    suggestions
}

pub(crate) fn risk_factors(breakdown: &ScoreBreakdown, text: &IdeaText<'_>) -> Vec<String> {
    let mut risks = Vec::new();

    if breakdown.execution_readiness < RISK_THRESHOLD {
        risks.push(TEAM_CAPABILITY_RISK.to_string());
    }
    if breakdown.solution_viability < RISK_THRESHOLD {
        risks.push(TECHNICAL_FEASIBILITY_RISK.to_string());
    }
    if breakdown.market_potential < RISK_THRESHOLD {
        risks.push(MARKET_VALIDATION_RISK.to_string());
    }
    if text.raw_chars < THIN_DESCRIPTION_CHARS {
        risks.push(THIN_DESCRIPTION_RISK.to_string());
    }
    if text.idea.skills().is_empty() {
        risks.push(NO_SKILLS_RISK.to_string());
    }

    risks
}
