use crate::report::{run_batch, run_evaluate, run_summary};
use clap::{Args, Parser, Subcommand};
use dreamcraft::config::AppConfig;
use dreamcraft::error::AppError;
use dreamcraft::telemetry;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "DreamCraft Idea Evaluator",
    about = "Score and value marketplace ideas from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single idea and print the result as JSON
    Evaluate(EvaluateArgs),
    /// Evaluate a JSON array of ideas and print a batch report
    Batch(InputArgs),
    /// Print a plain-text summary with suggestions and risk factors
    Summary(InputArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct InputArgs {
    /// Read the idea payload from a file instead of stdin
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

impl InputArgs {
    pub(crate) fn read_payload(&self) -> Result<String, AppError> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut payload = String::new();
                io::stdin().read_to_string(&mut payload)?;
                Ok(payload)
            }
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    pub(crate) source: InputArgs,
    /// Include the per-dimension scoring trail
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "idea evaluator ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Evaluate(args) => {
            let payload = args.source.read_payload()?;
            run_evaluate(&payload, args.explain, config.output.format, &mut out)
        }
        Command::Batch(args) => {
            let payload = args.read_payload()?;
            run_batch(&payload, config.output.format, &mut out)
        }
        Command::Summary(args) => {
            let payload = args.read_payload()?;
            run_summary(&payload, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_evaluate_with_explain() {
        let cli = Cli::try_parse_from([
            "dreamcraft",
            "evaluate",
            "--input",
            "idea.json",
            "--explain",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Evaluate(args) => {
                assert!(args.explain);
                assert_eq!(args.source.input, Some(PathBuf::from("idea.json")));
            }
            other => panic!("expected evaluate, got {other:?}"),
        }
    }

    #[test]
    fn reads_payload_from_file() {
        let path = std::env::temp_dir().join("dreamcraft-cli-payload.json");
        std::fs::write(&path, "{\"title\":\"T\",\"description\":\"D\"}").expect("fixture written");
        let args = InputArgs {
            input: Some(path.clone()),
        };

        let payload = args.read_payload().expect("payload read");

        assert!(payload.contains("\"title\""));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let args = InputArgs {
            input: Some(PathBuf::from("/definitely/not/here/idea.json")),
        };

        assert!(matches!(args.read_payload(), Err(AppError::Io(_))));
    }
}
