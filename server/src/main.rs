use clap::Parser;
use server::{logging::init_logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging();

    server::serve(config).await?;
    Ok(())
}
