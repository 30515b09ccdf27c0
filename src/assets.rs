use crate::{config::ConfigError, github::asset::Asset};
use std::path::{Path, PathBuf};

/// Expands asset arguments into existing files, keeping the order in which they
/// were given. An argument naming an existing file is taken as is; anything else
/// is treated as a glob pattern. Paths that match nothing are skipped.
pub fn collect(args: &[String]) -> Result<Vec<Asset>, ConfigError> {
    let mut assets: Vec<Asset> = Vec::new();

    for arg in args {
        for path in expand(arg)? {
            if assets.iter().any(|asset| asset.path == path) {
                continue;
            }

            let Some(asset) = Asset::from_path(&path) else {
                log::debug!("skipping {}: no usable file name", path.display());
                continue;
            };

            if let Some(existing) = assets.iter().find(|a| a.name == asset.name) {
                return Err(ConfigError::DuplicateAsset {
                    name: asset.name,
                    first: existing.path.to_owned(),
                    second: path,
                });
            }

            assets.push(asset);
        }
    }

    Ok(assets)
}

fn expand(arg: &str) -> Result<Vec<PathBuf>, ConfigError> {
    if Path::new(arg).is_file() {
        return Ok(vec![PathBuf::from(arg)]);
    }

    let paths = glob::glob(arg).map_err(|cause| ConfigError::InvalidPattern {
        pattern: arg.to_owned(),
        cause,
    })?;

    let files: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                log::debug!("skipping unreadable path: {}", err);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        log::debug!("no asset found for {}", arg);
    }

    Ok(files)
}
