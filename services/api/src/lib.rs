mod cli;
mod demo;
mod infra;
mod routes;
mod server;
mod tools;

use estate_flow::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
