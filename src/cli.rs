use clap::{builder::BoolishValueParser, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Every option falls back to its environment variable, then to the config file.
#[derive(Parser, Debug)]
#[command(
    name = "github-release",
    version,
    about = "Create or update a GitHub release and upload its assets",
    long_about = "Create or update a GitHub release and upload its assets.

Usage:
  github-release v1.0.0 dist/*.tar.gz --github-repository owner/name
  github-release nightly pkg/app.zip --commit main --prerelease --update"
)]
pub struct Args {
    /// Release name, also used as the tag name unless --tag is set
    #[arg(index = 1, value_name = "NAME")]
    pub name: String,

    /// Files to attach, as paths or glob patterns; missing paths are skipped
    #[arg(index = 2, value_name = "ASSETS")]
    pub assets: Vec<String>,

    #[arg(long, env = "GITHUB_RELEASE_ACCESS_TOKEN", hide_env_values = true)]
    pub github_access_token: Option<String>,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_RELEASE_REPOSITORY")]
    pub github_repository: Option<String>,

    #[arg(long, env = "GITHUB_RELEASE_TAG")]
    pub tag: Option<String>,

    /// Commit-ish the tag points at [default: the default branch]
    #[arg(long, env = "GITHUB_RELEASE_COMMIT")]
    pub commit: Option<String>,

    /// [default: main]
    #[arg(long, env = "GITHUB_RELEASE_DEFAULT_BRANCH")]
    pub default_branch: Option<String>,

    /// [default: false]
    #[arg(
        long,
        env = "GITHUB_RELEASE_PRERELEASE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub prerelease: Option<bool>,

    /// [default: false]
    #[arg(
        long,
        env = "GITHUB_RELEASE_DRAFT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub draft: Option<bool>,

    /// Replace the release (tag, metadata and assets) if it already exists
    /// [default: false]
    #[arg(
        long,
        env = "GITHUB_RELEASE_UPDATE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub update: Option<bool>,

    /// Release notes
    #[arg(long, env = "GITHUB_RELEASE_BODY")]
    pub body: Option<String>,

    /// [default: https://api.github.com]
    #[arg(long, env = "GITHUB_RELEASE_API_URL")]
    pub github_api_url: Option<String>,

    /// YAML config file [default: github-release.yaml, if present]
    #[arg(long, env = "GITHUB_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GITHUB_RELEASE_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}
