use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs::File;

/// A local file to attach to a release, named remotely by its base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub path: PathBuf,
}

impl Asset {
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_str()?;

        Some(Asset::new(name, path))
    }
}

/// An opened asset, ready to be streamed. The file handle lives only as long as
/// the upload that consumes it.
#[derive(Debug)]
pub struct AssetUpload {
    pub name: String,
    pub size: u64,
    pub file: File,
}

impl AssetUpload {
    pub async fn open(asset: &Asset) -> io::Result<AssetUpload> {
        let file = File::open(&asset.path).await?;
        let size = file.metadata().await?.len();

        Ok(AssetUpload {
            name: asset.name.to_owned(),
            size,
            file,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub name: String,
    pub url: String,
    pub checksum: String,
}

impl UploadedAsset {
    pub fn new(name: String, url: String, checksum: String) -> Self {
        Self {
            name,
            url,
            checksum,
        }
    }
}
