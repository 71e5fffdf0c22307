//! Keyword tables, weights and advisory copy used by the scoring rules.
//!
//! Every keyword is lowercase and matched as a plain substring of the lowercased
//! `title + " " + description` buffer. Multi-word phrases only match verbatim.

/// Capped per-match adjustment: `min(distinct matches * weight, cap)`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub signal: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: i32,
    pub cap: i32,
}

/// Flat adjustment applied once when any keyword is present.
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    pub signal: &'static str,
    pub keywords: &'static [&'static str],
    pub points: i32,
}

pub const BASE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Overall-score weights in dimension order, per mille.
pub const DIMENSION_WEIGHTS: [u32; 6] = [150, 200, 250, 150, 150, 100];

// problem clarity

/// (word count strictly above, bonus); thresholds stack.
pub const WORD_COUNT_BONUSES: [(usize, i32); 3] = [(50, 10), (100, 10), (200, 5)];

pub const PROBLEM_SIGNALS: KeywordRule = KeywordRule {
    signal: "problem_keywords",
    keywords: &[
        "problem",
        "pain point",
        "struggle",
        "challenge",
        "frustrat",
        "difficult",
        "inefficien",
        "expensive",
        "waste",
        "lack of",
    ],
    weight: 5,
    cap: 15,
};

pub const AUDIENCE_SIGNALS: KeywordRule = KeywordRule {
    signal: "audience_keywords",
    keywords: &[
        "users",
        "customers",
        "people",
        "businesses",
        "students",
        "families",
        "professionals",
        "teams",
        "consumers",
        "patients",
    ],
    weight: 5,
    cap: 10,
};

pub const VAGUE_LANGUAGE: KeywordRule = KeywordRule {
    signal: "vague_language",
    keywords: &[
        "something",
        "somehow",
        "maybe",
        "kind of",
        "sort of",
        "stuff",
        "things",
        "whatever",
    ],
    weight: -5,
    cap: -15,
};

// solution viability

pub const SOLUTION_SIGNALS: KeywordRule = KeywordRule {
    signal: "solution_keywords",
    keywords: &[
        "solution",
        "platform",
        "app",
        "tool",
        "system",
        "service",
        "software",
        "product",
        "mvp",
        "prototype",
    ],
    weight: 5,
    cap: 20,
};

pub const TECHNICAL_SIGNALS: KeywordRule = KeywordRule {
    signal: "technical_keywords",
    keywords: &[
        "api",
        "algorithm",
        "machine learning",
        "database",
        "cloud",
        "mobile",
        "integration",
        "automation",
        "blockchain",
        "analytics",
    ],
    weight: 5,
    cap: 15,
};

pub const ACTION_SIGNALS: KeywordRule = KeywordRule {
    signal: "action_keywords",
    keywords: &[
        "build",
        "develop",
        "create",
        "launch",
        "automate",
        "connect",
        "enable",
        "streamline",
        "provide",
    ],
    weight: 5,
    cap: 15,
};

pub const OVERREACH_PHRASES: FlagRule = FlagRule {
    signal: "overreach",
    keywords: &["solve all", "solve world", "billion people"],
    points: -10,
};

// market potential

pub const MARKET_SIGNALS: KeywordRule = KeywordRule {
    signal: "market_keywords",
    keywords: &[
        "market",
        "customers",
        "revenue",
        "demand",
        "industry",
        "competitors",
        "target audience",
        "addressable",
        "segment",
    ],
    weight: 5,
    cap: 20,
};

pub const BILLION_SCALE: FlagRule = FlagRule {
    signal: "market_size",
    keywords: &["billion", "$"],
    points: 15,
};

/// Only consulted when [`BILLION_SCALE`] did not fire.
pub const MILLION_SCALE: FlagRule = FlagRule {
    signal: "market_size",
    keywords: &["million"],
    points: 10,
};

pub const GROWTH_SIGNALS: FlagRule = FlagRule {
    signal: "growth_keywords",
    keywords: &["growth", "growing", "expand", "trend", "emerging"],
    points: 10,
};

/// Matched against the lowercased category, not the text buffer. Substring matching means
/// "Retail" qualifies through "ai".
pub const HIGH_MARKET_CATEGORIES: FlagRule = FlagRule {
    signal: "high_market_category",
    keywords: &["fintech", "healthtech", "ai", "saas", "edtech", "climate"],
    points: 10,
};

pub const NICHE_SIGNALS: FlagRule = FlagRule {
    signal: "niche_or_thin",
    keywords: &["niche"],
    points: -5,
};

/// Raw text shorter than this (in chars) counts as thin for the market penalty.
pub const THIN_MARKET_TEXT_CHARS: usize = 50;

// execution readiness

pub const CREATOR_NAME_BONUS: i32 = 10;
pub const SKILLS_PRESENT_BONUS: i32 = 15;
pub const SKILLS_DEPTH_BONUS: i32 = 10;
pub const SKILLS_DEPTH_MIN: usize = 3;

pub const EXECUTION_SIGNALS: KeywordRule = KeywordRule {
    signal: "execution_keywords",
    keywords: &[
        "mvp",
        "prototype",
        "roadmap",
        "milestone",
        "team",
        "experience",
        "beta",
        "pilot",
        "launched",
    ],
    weight: 5,
    cap: 15,
};

pub const PARTNERSHIP_SIGNALS: FlagRule = FlagRule {
    signal: "partnership_keywords",
    keywords: &["partner", "collaborat", "advisor", "mentor"],
    points: 5,
};

// innovation factor

pub const DIFFERENTIATION_SIGNALS: KeywordRule = KeywordRule {
    signal: "differentiation_keywords",
    keywords: &[
        "unique",
        "first",
        "novel",
        "innovative",
        "patent",
        "proprietary",
        "disrupt",
        "breakthrough",
    ],
    weight: 5,
    cap: 20,
};

pub const COMPARISON_PHRASES: FlagRule = FlagRule {
    signal: "competitive_comparison",
    keywords: &[
        "better than",
        "unlike",
        "compared to",
        "instead of",
        "faster than",
        "cheaper than",
    ],
    points: 10,
};

pub const TECHNOLOGY_SIGNALS: KeywordRule = KeywordRule {
    signal: "technology_keywords",
    keywords: &[
        "artificial intelligence",
        "machine learning",
        "blockchain",
        "computer vision",
        "iot",
        "quantum",
        "robotics",
        "ai-powered",
    ],
    weight: 5,
    cap: 10,
};

pub const INCREMENTAL_SIGNALS: FlagRule = FlagRule {
    signal: "incremental_improvement",
    keywords: &["improve", "better", "enhance", "optimize", "upgrade"],
    points: 5,
};

// scalability

pub const SCALABILITY_SIGNALS: KeywordRule = KeywordRule {
    signal: "scalability_keywords",
    keywords: &[
        "scale",
        "global",
        "worldwide",
        "automated",
        "nationwide",
        "international",
        "millions of users",
    ],
    weight: 5,
    cap: 20,
};

pub const PLATFORM_SIGNALS: FlagRule = FlagRule {
    signal: "platform_keywords",
    keywords: &["platform", "infrastructure", "api", "marketplace", "cloud"],
    points: 10,
};

pub const RECURRING_REVENUE_SIGNALS: FlagRule = FlagRule {
    signal: "recurring_revenue",
    keywords: &["subscription", "recurring", "saas", "monthly", "licensing"],
    points: 10,
};

pub const NETWORK_SIGNALS: FlagRule = FlagRule {
    signal: "network_keywords",
    keywords: &[
        "network effect",
        "community",
        "viral",
        "referral",
        "user-generated",
    ],
    points: 10,
};

/// Both terms must be present for the local-service penalty.
pub const LOCAL_SERVICE_TERMS: [&str; 2] = ["service", "local"];
pub const LOCAL_SERVICE_PENALTY: i32 = -10;

// valuation

/// (minimum overall score, base valuation), highest bracket first.
pub const VALUATION_BRACKETS: [(u8, u64); 5] = [
    (85, 3_500_000),
    (70, 2_000_000),
    (55, 1_000_000),
    (40, 300_000),
    (0, 50_000),
];

/// Category multipliers in percent. First substring match in this order wins.
pub const CATEGORY_MULTIPLIERS: [(&str, u32); 6] = [
    ("fintech", 130),
    ("healthtech", 130),
    ("saas", 120),
    ("marketplace", 115),
    ("ai", 125),
    ("deeptech", 115),
];

pub const LOW_VALUATION_TENTHS: u64 = 6;
pub const HIGH_VALUATION_TENTHS: u64 = 15;

// advisories

/// Dimensions scoring below this receive their improvement suggestion.
pub const SUGGESTION_THRESHOLD: u8 = 60;
/// Market and innovation scores at or above this receive an affirmation.
pub const AFFIRMATION_THRESHOLD: u8 = 75;
/// Execution, solution and market scores below this raise a risk factor.
pub const RISK_THRESHOLD: u8 = 50;
/// Raw text shorter than this (in chars) is flagged as too thin to judge.
pub const THIN_DESCRIPTION_CHARS: usize = 100;

/// Improvement suggestions in dimension order.
pub const DIMENSION_SUGGESTIONS: [&str; 6] = [
    "Clarify the problem: describe who experiences it, how often, and what it costs them today.",
    "Explain how the solution works: name the core features, the technology involved, and how you will build it.",
    "Strengthen the market case: size the addressable market and show evidence of demand.",
    "Show execution readiness: list the skills on your team, your roadmap, and the first milestone you can ship.",
    "Sharpen differentiation: explain what makes this approach new compared to existing alternatives.",
    "Describe how the idea scales: recurring revenue, platform effects, or reach beyond a single location.",
];

pub const MARKET_AFFIRMATION: &str =
    "Strong market opportunity: lead with the market size and demand evidence when pitching collaborators.";
pub const INNOVATION_AFFIRMATION: &str =
    "Clear differentiation: protect what makes this unique and make it the centre of the pitch.";
pub const FALLBACK_SUGGESTION: &str =
    "Validate your key assumptions with potential users before committing further resources.";

pub const TEAM_CAPABILITY_RISK: &str =
    "Execution risk: the team's capability to deliver is not yet demonstrated.";
pub const TECHNICAL_FEASIBILITY_RISK: &str =
    "Technical feasibility risk: the solution approach is not yet clearly defined.";
pub const MARKET_VALIDATION_RISK: &str =
    "Market validation risk: demand for the idea has not been established.";
pub const THIN_DESCRIPTION_RISK: &str =
    "Description too thin: there is not enough detail to evaluate the idea reliably.";
pub const NO_SKILLS_RISK: &str =
    "No skills profile: the creator has not listed any skills relevant to building the idea.";
