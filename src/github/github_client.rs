use super::{
    api::ReleaseApi,
    asset::AssetUpload,
    release::{Release, ReleaseAsset},
    repository::Repository,
    request::{TagRefRequest, UpsertReleaseRequest},
    response::{AssetResponse, RefResponse, ReleaseResponse},
    tag::{Tag, TagRef},
};
use crate::http::{
    self, Error, Headers, ResponseHandler, JSON_MEDIA_TYPE, SHA_MEDIA_TYPE,
};
use reqwest::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    Body, Method, RequestBuilder,
};
use tokio_util::io::ReaderStream;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const RELEASES_PER_PAGE: usize = 100;

/// Authenticated client for the GitHub REST API. Cheap to clone; all clones
/// share the same connection pool.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: Url,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl AsRef<str>) -> Result<Self, Error> {
        let api_url = api_url.as_ref();
        let invalid = |cause: url::ParseError| Error::InvalidUrl {
            url: api_url.to_owned(),
            cause,
        };

        let parsed = Url::parse(api_url).map_err(invalid)?;
        if parsed.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        Ok(GithubClient {
            http: reqwest::Client::new(),
            api_url: parsed,
            token: token.into(),
        })
    }

    /// `<api>/repos/<owner>/<name>/<segments>`. Every segment is percent-encoded
    /// on its own, so names carrying `#`, `%` or `?` stay inside their segment.
    fn repo_url<'s>(
        &self,
        repo: &Repository,
        segments: impl IntoIterator<Item = &'s str>,
    ) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", repo.owner(), repo.name()])
                .extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url, accept: &str) -> RequestBuilder {
        log::debug!("{} {}", method, url);

        self.http
            .request(method, url)
            .default_headers(&self.token, accept)
    }
}

/// Path segments of a tag or branch name; `/` separates segments, as in the ref.
fn name_segments(name: &str) -> impl Iterator<Item = &str> {
    name.split('/')
}

impl ReleaseApi for GithubClient {
    async fn get_release_by_tag(
        &self,
        repo: &Repository,
        tag: &Tag,
    ) -> Result<Option<Release>, Error> {
        let url = self.repo_url(
            repo,
            ["releases", "tags"].into_iter().chain(name_segments(tag.name())),
        );

        match self
            .request(Method::GET, url, JSON_MEDIA_TYPE)
            .send()
            .await
            .handle()
            .await
        {
            Ok(response) => Ok(Some(http::parse::<ReleaseResponse>(&response)?.into())),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn list_releases(&self, repo: &Repository) -> Result<Vec<Release>, Error> {
        let mut releases = Vec::new();
        let per_page = RELEASES_PER_PAGE.to_string();

        for page in 1.. {
            let url = self.repo_url(repo, ["releases"]);
            let page = page.to_string();
            let response = self
                .request(Method::GET, url, JSON_MEDIA_TYPE)
                .query(&[("per_page", per_page.as_str()), ("page", page.as_str())])
                .send()
                .await
                .handle()
                .await?;

            let batch = http::parse::<Vec<ReleaseResponse>>(&response)?;
            let last = batch.len() < RELEASES_PER_PAGE;
            releases.extend(batch.into_iter().map(Release::from));

            if last {
                break;
            }
        }

        Ok(releases)
    }

    async fn resolve_commit(&self, repo: &Repository, commitish: &str) -> Result<String, Error> {
        let url = self.repo_url(
            repo,
            ["commits"].into_iter().chain(name_segments(commitish)),
        );

        let sha = self
            .request(Method::GET, url, SHA_MEDIA_TYPE)
            .send()
            .await
            .handle()
            .await?;

        Ok(sha.trim().to_owned())
    }

    async fn get_tag_ref(&self, repo: &Repository, tag: &Tag) -> Result<Option<TagRef>, Error> {
        let url = self.repo_url(
            repo,
            ["git", "ref", "tags"].into_iter().chain(name_segments(tag.name())),
        );

        match self
            .request(Method::GET, url, JSON_MEDIA_TYPE)
            .send()
            .await
            .handle()
            .await
        {
            Ok(response) => {
                let response = http::parse::<RefResponse>(&response)?;
                Ok(Some(TagRef::new(response.r#ref, response.object.sha)))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn delete_tag_ref(&self, repo: &Repository, tag: &Tag) -> Result<(), Error> {
        let url = self.repo_url(
            repo,
            ["git", "refs", "tags"].into_iter().chain(name_segments(tag.name())),
        );

        self.request(Method::DELETE, url, JSON_MEDIA_TYPE)
            .send()
            .await
            .handle()
            .await?;

        Ok(())
    }

    async fn create_tag_ref(
        &self,
        repo: &Repository,
        tag: &Tag,
        sha: &str,
    ) -> Result<TagRef, Error> {
        let url = self.repo_url(repo, ["git", "refs"]);

        let response = self
            .request(Method::POST, url, JSON_MEDIA_TYPE)
            .json(&TagRefRequest::new(tag, sha))
            .send()
            .await
            .handle()
            .await?;

        let response = http::parse::<RefResponse>(&response)?;

        Ok(TagRef::new(response.r#ref, response.object.sha))
    }

    async fn create_release(
        &self,
        repo: &Repository,
        release: &UpsertReleaseRequest,
    ) -> Result<Release, Error> {
        let url = self.repo_url(repo, ["releases"]);

        let response = self
            .request(Method::POST, url, JSON_MEDIA_TYPE)
            .json(release)
            .send()
            .await
            .handle()
            .await?;

        Ok(http::parse::<ReleaseResponse>(&response)?.into())
    }

    async fn edit_release(
        &self,
        repo: &Repository,
        release_id: u64,
        release: &UpsertReleaseRequest,
    ) -> Result<Release, Error> {
        let id = release_id.to_string();
        let url = self.repo_url(repo, ["releases", id.as_str()]);

        let response = self
            .request(Method::PATCH, url, JSON_MEDIA_TYPE)
            .json(release)
            .send()
            .await
            .handle()
            .await?;

        Ok(http::parse::<ReleaseResponse>(&response)?.into())
    }

    async fn delete_release_asset(
        &self,
        repo: &Repository,
        asset: &ReleaseAsset,
    ) -> Result<(), Error> {
        let id = asset.id.to_string();
        let url = self.repo_url(repo, ["releases", "assets", id.as_str()]);

        self.request(Method::DELETE, url, JSON_MEDIA_TYPE)
            .send()
            .await
            .handle()
            .await?;

        Ok(())
    }

    async fn upload_release_asset(
        &self,
        release: &Release,
        upload: AssetUpload,
    ) -> Result<ReleaseAsset, Error> {
        let AssetUpload { name, size, file } = upload;
        let url = Url::parse(release.upload_endpoint()).map_err(|cause| Error::InvalidUrl {
            url: release.upload_endpoint().to_owned(),
            cause,
        })?;

        let response = self
            .request(Method::POST, url, JSON_MEDIA_TYPE)
            .query(&[("name", name.as_str())])
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(CONTENT_LENGTH, size)
            .body(Body::wrap_stream(ReaderStream::new(file)))
            .send()
            .await
            .handle()
            .await?;

        Ok(http::parse::<AssetResponse>(&response)?.into())
    }
}
