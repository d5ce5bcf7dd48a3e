mod cli;
mod commands;
mod infra;
mod render;

use campus_curation::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
