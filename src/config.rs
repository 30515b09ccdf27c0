use crate::{
    assets,
    cli::Args,
    github::{
        repository::{InvalidRepository, Repository},
        tag::Tag,
        DEFAULT_API_URL,
    },
    publish::ReleaseRequest,
};
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const MAIN_BRANCH_NAME: &str = "main";

const DEFAULT_CONFIG_FILE_NAME: &str = "github-release.yaml";

/// Optional YAML file, consulted for anything neither a flag nor the
/// environment provided. The access token is never read from it.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub commit: Option<String>,
    pub default_branch: Option<String>,
    pub prerelease: Option<bool>,
    pub draft: Option<bool>,
    pub update: Option<bool>,
    pub body: Option<String>,
    pub api_url: Option<String>,
}

impl FileConfig {
    /// Loads `path`, or `github-release.yaml` when no path is given. Only an
    /// explicitly given file has to exist.
    pub async fn load(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE_NAME), false),
        };

        let config_string = match tokio::fs::read_to_string(&path).await {
            Ok(config_string) => config_string,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
                return Ok(FileConfig::default())
            }
            Err(cause) => return Err(ConfigError::ReadFile { path, cause }),
        };

        log::debug!("loading config file {}", path.display());

        serde_yaml::from_str::<FileConfig>(&config_string)
            .map_err(|cause| ConfigError::ParseFile { path, cause })
    }
}

pub struct Config {
    pub token: String,
    pub api_url: String,
    pub request: ReleaseRequest,
}

impl Config {
    pub async fn load(args: Args) -> Result<Config, ConfigError> {
        let file = FileConfig::load(args.config.as_deref()).await?;

        Config::resolve(args, file)
    }

    /// Merges command line (flags and environment) over the config file and
    /// validates the result. No remote call is made here.
    pub fn resolve(args: Args, file: FileConfig) -> Result<Config, ConfigError> {
        let token = value(args.github_access_token, None)
            .ok_or(ConfigError::Missing("github-access-token"))?;

        let repository: Repository = value(args.github_repository, file.repository)
            .ok_or(ConfigError::Missing("github-repository"))?
            .parse()?;

        let name = args.name.trim().to_owned();
        if name.is_empty() {
            return Err(ConfigError::Missing("release name"));
        }

        let tag = value(args.tag, file.tag).unwrap_or_else(|| name.to_owned());

        let default_branch = value(args.default_branch, file.default_branch)
            .unwrap_or_else(|| MAIN_BRANCH_NAME.to_owned());
        let commitish = value(args.commit, file.commit).unwrap_or(default_branch);

        let api_url = value(args.github_api_url, file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        let assets = assets::collect(&args.assets)?;

        Ok(Config {
            token,
            api_url,
            request: ReleaseRequest {
                repository,
                name,
                tag: Tag::new(tag),
                commitish,
                prerelease: flag(args.prerelease, file.prerelease),
                draft: flag(args.draft, file.draft),
                update: flag(args.update, file.update),
                body: value(args.body, file.body),
                assets,
            },
        })
    }
}

/// First non-empty value, command line over file.
fn value(arg: Option<String>, file: Option<String>) -> Option<String> {
    arg.into_iter()
        .chain(file)
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}

/// Command line over file, unset meaning false.
fn flag(arg: Option<bool>, file: Option<bool>) -> bool {
    arg.or(file).unwrap_or(false)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error(transparent)]
    InvalidRepository(#[from] InvalidRepository),
    #[error("cannot read config file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("cannot parse config file {}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        cause: serde_yaml::Error,
    },
    #[error("invalid asset pattern {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        cause: glob::PatternError,
    },
    #[error("assets {} and {} would both be uploaded as {name}", first.display(), second.display())]
    DuplicateAsset {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}
