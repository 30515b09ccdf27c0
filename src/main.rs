mod assets;
mod checksum;
mod cli;
mod config;
mod github;
mod http;
mod logger;
mod publish;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::Config;
use github::GithubClient;
use publish::Publisher;
use std::process;

const COMMAND_LINE_NAME: &str = "github-release";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}: {:#}", COMMAND_LINE_NAME, err);
        eprintln!("See '{} --help'", COMMAND_LINE_NAME);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    logger::init(args.log_level)?;

    let config = Config::load(args)
        .await
        .context("Invalid configuration")?;
    let request = config.request;

    log::info!(
        "Publishing {} ({} asset(s)) to {}",
        request.name,
        request.assets.len(),
        request.repository
    );

    let client = GithubClient::new(config.token, &config.api_url)?;
    let publication = Publisher::new(&client).publish(&request).await?;

    println!(
        "{} release {}: {}",
        publication.action, publication.release.tag, publication.release.html_url
    );
    for upload in &publication.uploads {
        println!("  {}  sha256:{}  {}", upload.name, upload.checksum, upload.url);
    }

    Ok(())
}
