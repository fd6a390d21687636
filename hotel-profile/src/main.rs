use anyhow::Result;
use clap::Parser;

use hotel_profile::cli::{self, Cli};
use hotel_profile::config::{self, Config};
use hotel_profile::repository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load()?.with_database_url(cli.database_url);
    config::ensure_database_dir(&config.database_url)?;

    let pool = repository::connect(&config.database_url).await?;
    let result = cli::run(cli.command, &pool, &config).await;
    pool.close().await;

    result
}
