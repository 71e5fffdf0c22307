use crate::evaluation::domain::{
    CreatorProfile, Dimension, DimensionScore, EvaluationTrace, IdeaInput,
};

pub(super) fn bare_idea() -> IdeaInput {
    IdeaInput::new("X", "")
}

pub(super) fn seasoned_creator() -> CreatorProfile {
    CreatorProfile {
        first_name: Some("Ada".to_string()),
        last_name: Some("Okafor".to_string()),
        skills: vec![
            "rust".to_string(),
            "product design".to_string(),
            "sales".to_string(),
            "finance".to_string(),
        ],
    }
}

pub(super) fn fintech_pitch() -> IdeaInput {
    let paragraph = "Our fintech platform tackles a costly problem: the pain point of expensive \
        cross border payments for small businesses and their customers. The market demand is a \
        billion dollar revenue opportunity with strong growth. We build a unique proprietary mvp \
        using machine learning and blockchain over a cloud api with analytics, launch a pilot, \
        automate settlement, and scale global through a subscription community, unlike legacy \
        banks, with a roadmap and a bank partner to optimize the tool and novel first software.";
    let description = vec![paragraph; 4].join(" ");

    IdeaInput::new("Borderless payouts", description)
        .with_category("Fintech")
        .with_creator(seasoned_creator())
}

pub(super) fn dimension(trace: &EvaluationTrace, dimension: Dimension) -> &DimensionScore {
    trace
        .dimensions
        .iter()
        .find(|score| score.dimension == dimension)
        .expect("every dimension is scored")
}

pub(super) fn words(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}
