use super::{PublishError, Stage};
use crate::github::{repository::Repository, tag::Tag, ReleaseApi};

/// Points `refs/tags/<tag>` at `commitish` and returns the resolved SHA.
///
/// When a release already owns the tag, the existing ref is deleted and then
/// recreated. The two calls are not atomic: if the create fails the tag is
/// left absent. Without a prior release only the create is issued.
pub async fn reconcile<A: ReleaseApi>(
    api: &A,
    repo: &Repository,
    tag: &Tag,
    commitish: &str,
    release_exists: bool,
) -> Result<String, PublishError> {
    let sha = api
        .resolve_commit(repo, commitish)
        .await
        .map_err(|cause| Stage::ResolveCommit.error(cause))?;

    log::debug!("{} resolves to {}", commitish, sha);

    if release_exists {
        let existing = api
            .get_tag_ref(repo, tag)
            .await
            .map_err(|cause| Stage::LookupTag.error(cause))?;

        match existing {
            Some(existing) => {
                log::warn!(
                    "deleting {} (at {}) to recreate it at {}",
                    existing.name,
                    existing.sha,
                    sha
                );
                api.delete_tag_ref(repo, tag)
                    .await
                    .map_err(|cause| Stage::DeleteTag.error(cause))?;
            }
            None => log::info!("{} does not exist, nothing to delete", tag.ref_name()),
        }
    }

    log::info!("creating {} at {}", tag.ref_name(), sha);
    api.create_tag_ref(repo, tag, &sha)
        .await
        .map_err(|cause| Stage::CreateTag.error(cause))?;

    Ok(sha)
}
