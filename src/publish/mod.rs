mod error;
mod resolver;
mod synchronizer;
mod tag_reconciler;

#[cfg(test)]
mod fake;

pub use error::{PublishError, Stage};

use crate::github::{
    asset::{Asset, UploadedAsset},
    release::Release,
    repository::Repository,
    tag::Tag,
    ReleaseApi,
};
use std::fmt::{self, Display};

/// What to publish. Built once from configuration and never modified.
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    pub repository: Repository,
    pub name: String,
    pub tag: Tag,
    pub commitish: String,
    pub prerelease: bool,
    pub draft: bool,
    pub update: bool,
    pub body: Option<String>,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Created => f.write_str("created"),
            Action::Updated => f.write_str("updated"),
        }
    }
}

#[derive(Debug)]
pub struct Publication {
    pub action: Action,
    /// The release as published, its assets being exactly the uploaded files.
    pub release: Release,
    pub uploads: Vec<UploadedAsset>,
}

pub struct Publisher<'a, A: ReleaseApi> {
    api: &'a A,
}

impl<'a, A: ReleaseApi> Publisher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Publisher { api }
    }

    /// Runs the whole publication: resolve the release for the tag, point the
    /// tag at the requested commit, then create or update the release and its
    /// assets. Each step runs only once the previous one has succeeded.
    pub async fn publish(&self, request: &ReleaseRequest) -> Result<Publication, PublishError> {
        let existing = resolver::resolve(self.api, &request.repository, &request.tag).await?;

        synchronizer::check_update_allowed(request, existing.as_ref())?;

        tag_reconciler::reconcile(
            self.api,
            &request.repository,
            &request.tag,
            &request.commitish,
            existing.is_some(),
        )
        .await?;

        synchronizer::synchronize(self.api, request, existing).await
    }
}
