use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub target_commitish: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
    pub html_url: String,
    pub upload_url: String,
    #[serde(default)]
    pub assets: Vec<AssetResponse>,
}

#[derive(Debug, Deserialize)]
pub struct AssetResponse {
    pub id: u64,
    pub name: String,
    pub browser_download_url: String,
}
