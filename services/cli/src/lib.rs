mod cli;
mod report;

use dreamcraft::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
