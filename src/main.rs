#[macro_use]
extern crate log;

mod cli;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run().await
}
