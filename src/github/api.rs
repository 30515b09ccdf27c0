use super::{
    asset::AssetUpload,
    release::{Release, ReleaseAsset},
    repository::Repository,
    request::UpsertReleaseRequest,
    tag::{Tag, TagRef},
};
use crate::http::Error;

/// Remote operations the publication workflow depends on.
///
/// Lookups return `Ok(None)` only when the remote answered with a definitive
/// not-found. Every other failure is an `Err`.
#[allow(async_fn_in_trait)]
pub trait ReleaseApi {
    /// Published releases only: GitHub hides drafts from this lookup.
    async fn get_release_by_tag(
        &self,
        repo: &Repository,
        tag: &Tag,
    ) -> Result<Option<Release>, Error>;

    /// Every release of the repository, drafts included.
    async fn list_releases(&self, repo: &Repository) -> Result<Vec<Release>, Error>;

    /// Resolves a branch, tag or (short) SHA to a full commit SHA.
    async fn resolve_commit(&self, repo: &Repository, commitish: &str) -> Result<String, Error>;

    async fn get_tag_ref(&self, repo: &Repository, tag: &Tag) -> Result<Option<TagRef>, Error>;

    async fn delete_tag_ref(&self, repo: &Repository, tag: &Tag) -> Result<(), Error>;

    async fn create_tag_ref(&self, repo: &Repository, tag: &Tag, sha: &str)
        -> Result<TagRef, Error>;

    async fn create_release(
        &self,
        repo: &Repository,
        release: &UpsertReleaseRequest,
    ) -> Result<Release, Error>;

    async fn edit_release(
        &self,
        repo: &Repository,
        release_id: u64,
        release: &UpsertReleaseRequest,
    ) -> Result<Release, Error>;

    async fn delete_release_asset(
        &self,
        repo: &Repository,
        asset: &ReleaseAsset,
    ) -> Result<(), Error>;

    async fn upload_release_asset(
        &self,
        release: &Release,
        upload: AssetUpload,
    ) -> Result<ReleaseAsset, Error>;
}
