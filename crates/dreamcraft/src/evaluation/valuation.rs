use serde::{Deserialize, Serialize};

use super::catalog::{
    CATEGORY_MULTIPLIERS, HIGH_VALUATION_TENTHS, LOW_VALUATION_TENTHS, VALUATION_BRACKETS,
};
use super::domain::Valuation;

/// Overall-score band that selects the base valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationBracket {
    Exceptional,
    Strong,
    Promising,
    Early,
    Concept,
}

impl ValuationBracket {
    const DESCENDING: [ValuationBracket; 5] = [
        ValuationBracket::Exceptional,
        ValuationBracket::Strong,
        ValuationBracket::Promising,
        ValuationBracket::Early,
        ValuationBracket::Concept,
    ];

    pub fn for_score(score: u8) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|bracket| score >= bracket.floor())
            .unwrap_or(ValuationBracket::Concept)
    }

    /// Lowest overall score inside the bracket.
    pub fn floor(self) -> u8 {
        VALUATION_BRACKETS[self as usize].0
    }

    pub fn base(self) -> u64 {
        VALUATION_BRACKETS[self as usize].1
    }

    pub fn label(self) -> &'static str {
        match self {
            ValuationBracket::Exceptional => "exceptional",
            ValuationBracket::Strong => "strong",
            ValuationBracket::Promising => "promising",
            ValuationBracket::Early => "early",
            ValuationBracket::Concept => "concept",
        }
    }
}

/// First multiplier key contained in the lowercased category, with its factor in percent.
///
/// Keys are tried in declaration order and matched as substrings, so a category such as
/// "Retail" picks up the `ai` factor.
pub fn category_multiplier(category: &str) -> Option<(&'static str, u32)> {
    let category = category.to_lowercase();
    CATEGORY_MULTIPLIERS
        .iter()
        .find(|(key, _)| category.contains(*key))
        .copied()
}

/// Valuation range for an overall score in the given category.
pub fn valuate(overall_score: u8, category: &str) -> Valuation {
    let base = ValuationBracket::for_score(overall_score).base();
    let percent = category_multiplier(category)
        .map(|(_, percent)| u64::from(percent))
        .unwrap_or(100);

    let mid = base * percent / 100;

    Valuation {
        low: round_tenths(mid * LOW_VALUATION_TENTHS),
        mid,
        high: round_tenths(mid * HIGH_VALUATION_TENTHS),
    }
}

// Half-up division by ten.
fn round_tenths(tenths: u64) -> u64 {
    (tenths + 5) / 10
}
