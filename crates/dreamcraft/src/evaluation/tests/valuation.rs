use crate::evaluation::domain::Valuation;
use crate::evaluation::{category_multiplier, valuate, ValuationBracket};

#[test]
fn mid_bracket_without_category_uses_plain_base() {
    assert_eq!(
        valuate(50, ""),
        Valuation {
            low: 180_000,
            mid: 300_000,
            high: 450_000,
        }
    );
}

#[test]
fn category_multiplier_scales_the_whole_range() {
    assert_eq!(
        valuate(85, "Fintech"),
        Valuation {
            low: 2_730_000,
            mid: 4_550_000,
            high: 6_825_000,
        }
    );
    assert_eq!(
        valuate(84, "SaaS"),
        Valuation {
            low: 1_440_000,
            mid: 2_400_000,
            high: 3_600_000,
        }
    );
    assert_eq!(
        valuate(39, "Marketplace"),
        Valuation {
            low: 34_500,
            mid: 57_500,
            high: 86_250,
        }
    );
}

#[test]
fn bracket_edges_are_inclusive_at_the_floor() {
    let cases = [
        (100, ValuationBracket::Exceptional),
        (85, ValuationBracket::Exceptional),
        (84, ValuationBracket::Strong),
        (70, ValuationBracket::Strong),
        (69, ValuationBracket::Promising),
        (55, ValuationBracket::Promising),
        (54, ValuationBracket::Early),
        (40, ValuationBracket::Early),
        (39, ValuationBracket::Concept),
        (0, ValuationBracket::Concept),
    ];

    for (score, expected) in cases {
        assert_eq!(ValuationBracket::for_score(score), expected, "score {score}");
    }
    assert_eq!(valuate(85, "").mid, 3_500_000);
    assert_eq!(valuate(70, "").mid, 2_000_000);
    assert_eq!(valuate(55, "").mid, 1_000_000);
    assert_eq!(valuate(40, "").mid, 300_000);
    assert_eq!(valuate(39, "").mid, 50_000);
}

#[test]
fn higher_scores_never_lower_the_base() {
    for score in 0..100u8 {
        assert!(valuate(score + 1, "").mid >= valuate(score, "").mid);
    }
}

#[test]
fn first_declared_multiplier_wins() {
    assert_eq!(category_multiplier("FinTech"), Some(("fintech", 130)));
    assert_eq!(category_multiplier("AI SaaS"), Some(("saas", 120)));
    assert_eq!(category_multiplier("HealthTech AI"), Some(("healthtech", 130)));
    assert_eq!(category_multiplier("Consumer"), None);
    assert_eq!(category_multiplier(""), None);
}

#[test]
fn multiplier_keys_match_as_substrings() {
    assert_eq!(category_multiplier("Retail"), Some(("ai", 125)));
    assert_eq!(valuate(50, "Retail").mid, 375_000);
}
