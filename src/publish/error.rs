use crate::http;
use std::{
    fmt::{self, Display},
    io,
    path::PathBuf,
};
use thiserror::Error;

/// The remote step a publication was in when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    LookupRelease,
    ResolveCommit,
    LookupTag,
    DeleteTag,
    CreateTag,
    CreateRelease,
    EditRelease,
    DeleteAsset(String),
    UploadAsset(String),
}

impl Stage {
    pub fn error(self, cause: http::Error) -> PublishError {
        PublishError::Remote { stage: self, cause }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::LookupRelease => f.write_str("looking up the release"),
            Stage::ResolveCommit => f.write_str("resolving the target commit"),
            Stage::LookupTag => f.write_str("looking up the tag"),
            Stage::DeleteTag => f.write_str("deleting the tag"),
            Stage::CreateTag => f.write_str("creating the tag"),
            Stage::CreateRelease => f.write_str("creating the release"),
            Stage::EditRelease => f.write_str("editing the release"),
            Stage::DeleteAsset(name) => write!(f, "deleting asset {}", name),
            Stage::UploadAsset(name) => write!(f, "uploading asset {}", name),
        }
    }
}

/// Failures are never retried or rolled back: whatever the last successful
/// step left on the remote stays there.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("a release for tag {tag} already exists ({url}), use --update to replace it")]
    Conflict { tag: String, url: String },
    #[error("{stage} failed")]
    Remote {
        stage: Stage,
        #[source]
        cause: http::Error,
    },
    #[error("cannot read asset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
}

impl PublishError {
    pub fn stage(&self) -> Option<&Stage> {
        match self {
            PublishError::Remote { stage, .. } => Some(stage),
            _ => None,
        }
    }
}
