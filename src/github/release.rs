use super::{
    response::{AssetResponse, ReleaseResponse},
    tag::Tag,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: u64,
    pub tag: Tag,
    pub name: String,
    pub target_commitish: String,
    pub prerelease: bool,
    pub draft: bool,
    pub html_url: String,
    pub upload_url: String,
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Upload endpoint with the `{?name,label}` URI template stripped.
    pub fn upload_endpoint(&self) -> &str {
        match self.upload_url.split_once('{') {
            Some((endpoint, _)) => endpoint,
            None => &self.upload_url,
        }
    }

    pub fn asset_names(&self) -> Vec<&str> {
        self.assets.iter().map(|asset| asset.name.as_str()).collect()
    }
}

impl From<ReleaseResponse> for Release {
    fn from(response: ReleaseResponse) -> Self {
        Release {
            id: response.id,
            name: response.name.unwrap_or_else(|| response.tag_name.to_owned()),
            tag: Tag::new(response.tag_name),
            target_commitish: response.target_commitish,
            prerelease: response.prerelease,
            draft: response.draft,
            html_url: response.html_url,
            upload_url: response.upload_url,
            assets: response.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub id: u64,
    pub name: String,
    pub url: String,
}

impl ReleaseAsset {
    pub fn new(id: u64, name: impl Into<String>, url: impl Into<String>) -> Self {
        ReleaseAsset {
            id,
            name: name.into(),
            url: url.into(),
        }
    }
}

impl From<AssetResponse> for ReleaseAsset {
    fn from(response: AssetResponse) -> Self {
        ReleaseAsset::new(response.id, response.name, response.browser_download_url)
    }
}
