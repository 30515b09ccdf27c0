use super::{PublishError, Stage};
use crate::github::{release::Release, repository::Repository, tag::Tag, ReleaseApi};

/// Finds the release currently attached to `tag`. Drafts are not visible to the
/// by-tag lookup, so a not-found falls back to scanning the release list. Only a
/// definitive not-found yields `None`; any other lookup failure aborts the run.
pub async fn resolve<A: ReleaseApi>(
    api: &A,
    repo: &Repository,
    tag: &Tag,
) -> Result<Option<Release>, PublishError> {
    log::info!("looking up release for tag {} in {}", tag, repo);

    let release = match api
        .get_release_by_tag(repo, tag)
        .await
        .map_err(|cause| Stage::LookupRelease.error(cause))?
    {
        Some(release) => Some(release),
        None => find_draft(api, repo, tag).await?,
    };

    match &release {
        Some(release) => log::info!(
            "found release {} (id {}) with {} asset(s)",
            release.name,
            release.id,
            release.assets.len()
        ),
        None => log::info!("no release for tag {}", tag),
    }

    Ok(release)
}

async fn find_draft<A: ReleaseApi>(
    api: &A,
    repo: &Repository,
    tag: &Tag,
) -> Result<Option<Release>, PublishError> {
    log::debug!("no published release for {}, looking for a draft", tag);

    let releases = api
        .list_releases(repo)
        .await
        .map_err(|cause| Stage::LookupRelease.error(cause))?;

    Ok(releases.into_iter().find(|release| release.tag == *tag))
}
