use chrono::{DateTime, Utc};
use dreamcraft::config::OutputFormat;
use dreamcraft::error::AppError;
use dreamcraft::evaluation::{evaluate, evaluate_batch, explain, EvaluationResult, IdeaInput};
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) evaluated: usize,
    pub(crate) results: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry {
    pub(crate) title: String,
    pub(crate) result: EvaluationResult,
}

fn parse_idea(payload: &str) -> Result<IdeaInput, AppError> {
    let idea: IdeaInput = serde_json::from_str(payload)?;
    idea.validate()?;
    Ok(idea)
}

fn write_json<T, W>(value: &T, format: OutputFormat, out: &mut W) -> Result<(), AppError>
where
    T: Serialize,
    W: Write,
{
    match format {
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, value)?,
        OutputFormat::Compact => serde_json::to_writer(&mut *out, value)?,
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn run_evaluate<W: Write>(
    payload: &str,
    with_trace: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let idea = parse_idea(payload)?;

    if with_trace {
        write_json(&explain(&idea), format, out)
    } else {
        write_json(&evaluate(&idea), format, out)
    }
}

pub(crate) fn run_batch<W: Write>(
    payload: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let report = build_batch_report(payload, Utc::now())?;
    info!(evaluated = report.evaluated, "batch report generated");
    write_json(&report, format, out)
}

pub(crate) fn build_batch_report(
    payload: &str,
    generated_at: DateTime<Utc>,
) -> Result<BatchReport, AppError> {
    let ideas: Vec<IdeaInput> = serde_json::from_str(payload)?;
    for (index, idea) in ideas.iter().enumerate() {
        idea.validate()
            .map_err(|source| AppError::BatchEntry { index, source })?;
    }

    let results = evaluate_batch(&ideas)
        .into_iter()
        .zip(&ideas)
        .map(|(result, idea)| BatchEntry {
            title: idea.title.clone(),
            result,
        })
        .collect::<Vec<_>>();

    Ok(BatchReport {
        generated_at,
        evaluated: results.len(),
        results,
    })
}

pub(crate) fn run_summary<W: Write>(payload: &str, out: &mut W) -> Result<(), AppError> {
    let idea = parse_idea(payload)?;
    let result = evaluate(&idea);

    writeln!(out, "{}: {}", idea.title, result.summary())?;
    for (dimension, score) in result.score_breakdown.iter() {
        writeln!(out, "  {:<20} {score:>3}", dimension.label())?;
    }
    writeln!(out, "Suggestions:")?;
    for suggestion in &result.suggestions {
        writeln!(out, "  - {suggestion}")?;
    }
    if !result.risk_factors.is_empty() {
        writeln!(out, "Risk factors:")?;
        for risk in &result.risk_factors {
            writeln!(out, "  - {risk}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dreamcraft::evaluation::IdeaValidationError;
    use serde_json::Value;

    const IDEA: &str = r#"{
        "title": "Neighbourhood tool library",
        "description": "A local service lending tools to families who cannot afford to buy them.",
        "category": "Community"
    }"#;

    fn render(payload: &str, with_trace: bool) -> Result<Value, AppError> {
        let mut out = Vec::new();
        run_evaluate(payload, with_trace, OutputFormat::Compact, &mut out)?;
        Ok(serde_json::from_slice(&out).expect("output is json"))
    }

    #[test]
    fn evaluate_prints_camel_case_result() {
        let body = render(IDEA, false).expect("evaluation succeeds");

        assert!(body["overallScore"].is_u64());
        assert_eq!(body["scoreBreakdown"]["scalability"], 40);
        assert!(body["riskFactors"].is_array());
    }

    #[test]
    fn explain_includes_dimension_trail() {
        let body = render(IDEA, true).expect("evaluation succeeds");

        let dimensions = body["dimensions"].as_array().expect("dimensions listed");
        assert_eq!(dimensions.len(), 6);
        assert_eq!(dimensions[5]["dimension"], "scalability");
        assert!(body["result"]["valuation"]["mid"].is_u64());
    }

    #[test]
    fn malformed_payload_is_an_input_error() {
        assert!(matches!(render("{ not json", false), Err(AppError::Input(_))));
    }

    #[test]
    fn blank_description_is_rejected_before_evaluation() {
        let payload = r#"{ "title": "Empty", "description": "   " }"#;

        match render(payload, false) {
            Err(AppError::Validation(IdeaValidationError::MissingDescription)) => {}
            other => panic!("expected missing description, got {other:?}"),
        }
    }

    #[test]
    fn batch_report_keeps_input_order() {
        let payload = r#"[
            { "title": "First", "description": "service local" },
            { "title": "Second", "description": "a monthly subscription community platform" }
        ]"#;
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();

        let report = build_batch_report(payload, generated_at).expect("batch evaluates");

        assert_eq!(report.evaluated, 2);
        assert_eq!(report.generated_at, generated_at);
        assert_eq!(report.results[0].title, "First");
        assert_eq!(report.results[0].result.score_breakdown.scalability, 40);
        assert_eq!(report.results[1].result.score_breakdown.scalability, 80);
    }

    #[test]
    fn batch_reports_the_first_invalid_entry() {
        let payload = r#"[
            { "title": "Fine", "description": "words" },
            { "title": "", "description": "words" },
            { "title": "Also bad", "description": "" }
        ]"#;

        match build_batch_report(payload, Utc::now()) {
            Err(AppError::BatchEntry { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, IdeaValidationError::MissingTitle);
            }
            other => panic!("expected batch entry error, got {other:?}"),
        }
    }

    #[test]
    fn summary_lists_scores_and_advice() {
        let mut out = Vec::new();

        run_summary(IDEA, &mut out).expect("summary renders");

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.starts_with("Neighbourhood tool library: scored"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("  scalability           40"));
        assert!(text.contains("Risk factors:"));
    }
}
