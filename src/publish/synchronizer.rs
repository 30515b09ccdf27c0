use super::{Action, Publication, PublishError, ReleaseRequest, Stage};
use crate::{
    checksum::Checksum,
    github::{
        asset::{Asset, AssetUpload, UploadedAsset},
        builder::ReleaseBuilder,
        release::{Release, ReleaseAsset},
        repository::Repository,
        ReleaseApi,
    },
};
use std::io;

/// Refuses to touch a release that already exists unless updates were asked for.
pub fn check_update_allowed(
    request: &ReleaseRequest,
    existing: Option<&Release>,
) -> Result<(), PublishError> {
    match existing {
        Some(release) if !request.update => Err(PublishError::Conflict {
            tag: request.tag.name().to_owned(),
            url: release.html_url.to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Creates or edits the release, clears the assets of a pre-existing release,
/// then uploads the requested files one at a time in order. The first failure
/// stops the run; nothing done before it is undone.
pub async fn synchronize<A: ReleaseApi>(
    api: &A,
    request: &ReleaseRequest,
    existing: Option<Release>,
) -> Result<Publication, PublishError> {
    check_update_allowed(request, existing.as_ref())?;

    let repo = &request.repository;
    let body = ReleaseBuilder::new(&request.tag)
        .name(&request.name)
        .target_commitish(&request.commitish)
        .prerelease(request.prerelease)
        .draft(request.draft)
        .body(request.body.as_deref())
        .build();

    let (action, mut release) = match existing {
        None => {
            log::info!("creating release {}", request.name);
            let release = api
                .create_release(repo, &body)
                .await
                .map_err(|cause| Stage::CreateRelease.error(cause))?;

            (Action::Created, release)
        }
        Some(existing) => {
            log::info!("updating release {} (id {})", request.name, existing.id);
            let release = api
                .edit_release(repo, existing.id, &body)
                .await
                .map_err(|cause| Stage::EditRelease.error(cause))?;

            delete_assets(api, repo, &existing.assets).await?;

            (Action::Updated, release)
        }
    };

    let (assets, uploads) = upload_assets(api, &release, &request.assets).await?;
    release.assets = assets;

    Ok(Publication {
        action,
        release,
        uploads,
    })
}

async fn delete_assets<A: ReleaseApi>(
    api: &A,
    repo: &Repository,
    assets: &[ReleaseAsset],
) -> Result<(), PublishError> {
    for asset in assets {
        log::info!("deleting asset {} (id {})", asset.name, asset.id);
        api.delete_release_asset(repo, asset)
            .await
            .map_err(|cause| Stage::DeleteAsset(asset.name.to_owned()).error(cause))?;
    }

    Ok(())
}

async fn upload_assets<A: ReleaseApi>(
    api: &A,
    release: &Release,
    assets: &[Asset],
) -> Result<(Vec<ReleaseAsset>, Vec<UploadedAsset>), PublishError> {
    let mut uploaded = Vec::with_capacity(assets.len());
    let mut uploads = Vec::with_capacity(assets.len());

    for asset in assets {
        let io_error = |cause: io::Error| PublishError::Io {
            path: asset.path.to_owned(),
            cause,
        };

        let checksum = Checksum::from_path(&asset.path).map_err(io_error)?;
        let upload = AssetUpload::open(asset).await.map_err(io_error)?;

        log::info!("uploading {} ({} bytes)", asset.name, upload.size);
        let remote = api
            .upload_release_asset(release, upload)
            .await
            .map_err(|cause| Stage::UploadAsset(asset.name.to_owned()).error(cause))?;

        uploads.push(UploadedAsset::new(
            remote.name.to_owned(),
            remote.url.to_owned(),
            checksum.value().to_owned(),
        ));
        uploaded.push(remote);
    }

    Ok((uploaded, uploads))
}
