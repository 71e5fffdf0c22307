use super::catalog::{
    FlagRule, KeywordRule, ACTION_SIGNALS, AUDIENCE_SIGNALS, BASE_SCORE, BILLION_SCALE,
    COMPARISON_PHRASES, CREATOR_NAME_BONUS, DIFFERENTIATION_SIGNALS, EXECUTION_SIGNALS,
    GROWTH_SIGNALS, HIGH_MARKET_CATEGORIES, INCREMENTAL_SIGNALS, LOCAL_SERVICE_PENALTY,
    LOCAL_SERVICE_TERMS, MARKET_SIGNALS, MAX_SCORE, MILLION_SCALE, MIN_SCORE, NETWORK_SIGNALS,
    NICHE_SIGNALS, OVERREACH_PHRASES, PARTNERSHIP_SIGNALS, PLATFORM_SIGNALS, PROBLEM_SIGNALS,
    RECURRING_REVENUE_SIGNALS, SCALABILITY_SIGNALS, SKILLS_DEPTH_BONUS, SKILLS_DEPTH_MIN,
    SKILLS_PRESENT_BONUS, SOLUTION_SIGNALS, TECHNICAL_SIGNALS, TECHNOLOGY_SIGNALS,
    THIN_MARKET_TEXT_CHARS, VAGUE_LANGUAGE, WORD_COUNT_BONUSES,
};
use super::domain::{Dimension, DimensionScore, IdeaInput, ScoreComponent};

/// Lowercased working buffer shared by every dimension, built once per evaluation.
pub(crate) struct IdeaText<'a> {
    pub idea: &'a IdeaInput,
    pub text: String,
    pub category: String,
    /// Length of `title + " " + description` in chars, before lowercasing.
    pub raw_chars: usize,
    pub word_count: usize,
}

impl<'a> IdeaText<'a> {
    pub fn new(idea: &'a IdeaInput) -> Self {
        let raw = format!("{} {}", idea.title, idea.description);
        let raw_chars = raw.chars().count();
        let text = raw.to_lowercase();
        let word_count = text.split_whitespace().count();

        Self {
            idea,
            text,
            category: idea.category.to_lowercase(),
            raw_chars,
            word_count,
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    fn description_is_blank(&self) -> bool {
        self.idea.description.trim().is_empty()
    }
}

/// Distinct keywords present in `haystack`, in table order.
pub(crate) fn matched_keywords(haystack: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| haystack.contains(keyword))
        .collect()
}

/// `matches * weight`, limited to the rule's cap. Penalties are floored at a negative cap.
pub(crate) fn capped_points(matches: usize, rule: &KeywordRule) -> i32 {
    let total = matches as i32 * rule.weight;
    if rule.weight >= 0 {
        total.min(rule.cap)
    } else {
        total.max(rule.cap)
    }
}

struct Tally {
    dimension: Dimension,
    raw: i32,
    components: Vec<ScoreComponent>,
}

impl Tally {
    fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            raw: BASE_SCORE,
            components: Vec::new(),
        }
    }

    fn add(&mut self, signal: &'static str, points: i32, notes: String) {
        self.raw += points;
        self.components.push(ScoreComponent {
            signal,
            points,
            notes,
        });
    }

    fn keywords(&mut self, haystack: &str, rule: &KeywordRule) {
        let matched = matched_keywords(haystack, rule.keywords);
        if matched.is_empty() {
            return;
        }
        let points = capped_points(matched.len(), rule);
        self.add(rule.signal, points, format!("matched {}", matched.join(", ")));
    }

    fn flag(&mut self, haystack: &str, rule: &FlagRule) -> bool {
        let Some(keyword) = rule
            .keywords
            .iter()
            .find(|keyword| haystack.contains(*keyword))
        else {
            return false;
        };
        self.add(rule.signal, rule.points, format!("mentions '{keyword}'"));
        true
    }

    // Clamping happens once, after every adjustment.
    fn finish(self) -> DimensionScore {
        DimensionScore {
            dimension: self.dimension,
            raw: self.raw,
            score: self.raw.clamp(MIN_SCORE, MAX_SCORE) as u8,
            components: self.components,
        }
    }
}

/// Scores all six dimensions in [`Dimension::ALL`] order.
pub(crate) fn score_dimensions(text: &IdeaText<'_>) -> Vec<DimensionScore> {
    vec![
        problem_clarity(text),
        solution_viability(text),
        market_potential(text),
        execution_readiness(text),
        innovation_factor(text),
        scalability(text),
    ]
}

fn problem_clarity(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::ProblemClarity);

    for (threshold, bonus) in WORD_COUNT_BONUSES {
        if text.word_count > threshold {
            tally.add(
                "word_count",
                bonus,
                format!("{} words exceeds {threshold}", text.word_count),
            );
        }
    }

    tally.keywords(&text.text, &PROBLEM_SIGNALS);
    tally.keywords(&text.text, &AUDIENCE_SIGNALS);
    tally.keywords(&text.text, &VAGUE_LANGUAGE);

    tally.finish()
}

fn solution_viability(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::SolutionViability);

    tally.keywords(&text.text, &SOLUTION_SIGNALS);
    tally.keywords(&text.text, &TECHNICAL_SIGNALS);
    tally.keywords(&text.text, &ACTION_SIGNALS);
    tally.flag(&text.text, &OVERREACH_PHRASES);

    tally.finish()
}

fn market_potential(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::MarketPotential);

    tally.keywords(&text.text, &MARKET_SIGNALS);
    if !tally.flag(&text.text, &BILLION_SCALE) {
        tally.flag(&text.text, &MILLION_SCALE);
    }
    tally.flag(&text.text, &GROWTH_SIGNALS);
    tally.flag(&text.category, &HIGH_MARKET_CATEGORIES);

    // A title-only idea stays at base; only a written but short pitch counts as thin.
    if !tally.flag(&text.text, &NICHE_SIGNALS)
        && !text.description_is_blank()
        && text.raw_chars < THIN_MARKET_TEXT_CHARS
    {
        tally.add(
            NICHE_SIGNALS.signal,
            NICHE_SIGNALS.points,
            format!(
                "{} chars is under {THIN_MARKET_TEXT_CHARS}",
                text.raw_chars
            ),
        );
    }

    tally.finish()
}

fn execution_readiness(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::ExecutionReadiness);

    let first_name = text
        .idea
        .creator_profile
        .as_ref()
        .and_then(|profile| profile.first_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if let Some(name) = first_name {
        tally.add(
            "creator_identified",
            CREATOR_NAME_BONUS,
            format!("creator {name} identified"),
        );
    }

    let skills = text.idea.skills();
    if !skills.is_empty() {
        tally.add(
            "skills_listed",
            SKILLS_PRESENT_BONUS,
            format!("{} skill(s) listed", skills.len()),
        );
    }
    if skills.len() >= SKILLS_DEPTH_MIN {
        tally.add(
            "skills_depth",
            SKILLS_DEPTH_BONUS,
            format!("at least {SKILLS_DEPTH_MIN} skills"),
        );
    }

    tally.keywords(&text.text, &EXECUTION_SIGNALS);
    tally.flag(&text.text, &PARTNERSHIP_SIGNALS);

    tally.finish()
}

fn innovation_factor(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::InnovationFactor);

    tally.keywords(&text.text, &DIFFERENTIATION_SIGNALS);
    tally.flag(&text.text, &COMPARISON_PHRASES);
    tally.keywords(&text.text, &TECHNOLOGY_SIGNALS);
    tally.flag(&text.text, &INCREMENTAL_SIGNALS);

    tally.finish()
}

fn scalability(text: &IdeaText<'_>) -> DimensionScore {
    let mut tally = Tally::new(Dimension::Scalability);

    tally.keywords(&text.text, &SCALABILITY_SIGNALS);
    tally.flag(&text.text, &PLATFORM_SIGNALS);
    tally.flag(&text.text, &RECURRING_REVENUE_SIGNALS);
    tally.flag(&text.text, &NETWORK_SIGNALS);

    if LOCAL_SERVICE_TERMS.iter().all(|term| text.contains(term)) {
        tally.add(
            "local_service",
            LOCAL_SERVICE_PENALTY,
            "local service business".to_string(),
        );
    }

    tally.finish()
}
