use crate::{
    github::{
        asset::AssetUpload,
        release::{Release, ReleaseAsset},
        repository::Repository,
        request::UpsertReleaseRequest,
        tag::{Tag, TagRef},
        ReleaseApi,
    },
    http::Error,
};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetReleaseByTag(String),
    ListReleases,
    ResolveCommit(String),
    GetTagRef(String),
    DeleteTagRef(String),
    CreateTagRef(String, String),
    CreateRelease(String),
    EditRelease(u64),
    DeleteReleaseAsset(String),
    UploadReleaseAsset(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::GetReleaseByTag(_)
                | Call::ListReleases
                | Call::ResolveCommit(_)
                | Call::GetTagRef(_)
        )
    }
}

/// In-memory GitHub that records every call in order.
pub struct FakeGithub {
    releases: RefCell<Vec<Release>>,
    refs: RefCell<BTreeMap<String, String>>,
    commits: BTreeMap<String, String>,
    failures: Vec<(Call, u16)>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u64>,
}

impl FakeGithub {
    pub fn new() -> Self {
        FakeGithub {
            releases: RefCell::new(Vec::new()),
            refs: RefCell::new(BTreeMap::new()),
            commits: BTreeMap::new(),
            failures: Vec::new(),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Seeds a release for `tag` carrying `assets`, its tag pointing at `old-sha`.
    pub fn with_release(self, tag: &str, assets: &[&str]) -> Self {
        let id = self.id();
        let assets = assets
            .iter()
            .map(|name| ReleaseAsset::new(self.id(), *name, download_url(tag, name)))
            .collect();

        self.releases.borrow_mut().push(Release {
            id,
            tag: Tag::new(tag),
            name: tag.to_owned(),
            target_commitish: "old-sha".to_owned(),
            prerelease: false,
            draft: false,
            html_url: html_url(tag),
            upload_url: upload_url(id),
            assets,
        });

        self.with_tag_ref(tag, "old-sha")
    }

    /// Seeds a draft release, which the by-tag lookup does not return.
    pub fn with_draft_release(self, tag: &str, assets: &[&str]) -> Self {
        let github = self.with_release(tag, assets);
        if let Some(release) = github
            .releases
            .borrow_mut()
            .iter_mut()
            .find(|release| release.tag.name() == tag)
        {
            release.draft = true;
        }
        github
    }

    pub fn with_tag_ref(self, tag: &str, sha: &str) -> Self {
        self.refs
            .borrow_mut()
            .insert(Tag::new(tag).ref_name(), sha.to_owned());
        self
    }

    pub fn without_tag_ref(self, tag: &str) -> Self {
        self.refs.borrow_mut().remove(&Tag::new(tag).ref_name());
        self
    }

    pub fn with_commit(mut self, commitish: &str, sha: &str) -> Self {
        self.commits.insert(commitish.to_owned(), sha.to_owned());
        self
    }

    pub fn failing_on(mut self, call: Call, status: u16) -> Self {
        self.failures.push((call, status));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn release(&self, tag: &str) -> Option<Release> {
        self.releases
            .borrow()
            .iter()
            .find(|release| release.tag.name() == tag)
            .cloned()
    }

    pub fn release_count(&self) -> usize {
        self.releases.borrow().len()
    }

    pub fn tag_target(&self, tag: &str) -> Option<String> {
        self.refs.borrow().get(&Tag::new(tag).ref_name()).cloned()
    }

    pub fn ref_count(&self) -> usize {
        self.refs.borrow().len()
    }

    fn id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn record(&self, call: Call) -> Result<(), Error> {
        let failure = self
            .failures
            .iter()
            .find(|(failing, _)| *failing == call)
            .map(|(_, status)| *status);

        self.calls.borrow_mut().push(call);

        match failure {
            Some(status) => Err(Error::GenericResponseError {
                status,
                message: "injected failure".to_owned(),
            }),
            None => Ok(()),
        }
    }

    fn apply(&self, release: &mut Release, body: &UpsertReleaseRequest) {
        release.tag = Tag::new(&body.tag_name);
        release.name = body.name.to_owned();
        release.target_commitish = body.target_commitish.to_owned();
        release.prerelease = body.prerelease;
        release.draft = body.draft;
        release.html_url = html_url(&body.tag_name);
    }
}

fn html_url(tag: &str) -> String {
    format!("https://github.com/owner/repo/releases/tag/{}", tag)
}

fn upload_url(id: u64) -> String {
    format!(
        "https://uploads.github.com/repos/owner/repo/releases/{}/assets{{?name,label}}",
        id
    )
}

fn download_url(tag: &str, name: &str) -> String {
    format!("https://github.com/owner/repo/releases/download/{}/{}", tag, name)
}

fn not_found(what: &str) -> Error {
    Error::NotFound {
        url: what.to_owned(),
    }
}

impl ReleaseApi for FakeGithub {
    async fn get_release_by_tag(
        &self,
        _repo: &Repository,
        tag: &Tag,
    ) -> Result<Option<Release>, Error> {
        self.record(Call::GetReleaseByTag(tag.name().to_owned()))?;

        Ok(self.release(tag.name()).filter(|release| !release.draft))
    }

    async fn list_releases(&self, _repo: &Repository) -> Result<Vec<Release>, Error> {
        self.record(Call::ListReleases)?;

        Ok(self.releases.borrow().clone())
    }

    async fn resolve_commit(&self, _repo: &Repository, commitish: &str) -> Result<String, Error> {
        self.record(Call::ResolveCommit(commitish.to_owned()))?;

        Ok(self
            .commits
            .get(commitish)
            .cloned()
            .unwrap_or_else(|| commitish.to_owned()))
    }

    async fn get_tag_ref(&self, _repo: &Repository, tag: &Tag) -> Result<Option<TagRef>, Error> {
        self.record(Call::GetTagRef(tag.name().to_owned()))?;

        Ok(self
            .tag_target(tag.name())
            .map(|sha| TagRef::new(tag.ref_name(), sha)))
    }

    async fn delete_tag_ref(&self, _repo: &Repository, tag: &Tag) -> Result<(), Error> {
        self.record(Call::DeleteTagRef(tag.name().to_owned()))?;

        match self.refs.borrow_mut().remove(&tag.ref_name()) {
            Some(_) => Ok(()),
            None => Err(Error::GenericResponseError {
                status: 422,
                message: "Reference does not exist".to_owned(),
            }),
        }
    }

    async fn create_tag_ref(
        &self,
        _repo: &Repository,
        tag: &Tag,
        sha: &str,
    ) -> Result<TagRef, Error> {
        self.record(Call::CreateTagRef(tag.name().to_owned(), sha.to_owned()))?;

        let mut refs = self.refs.borrow_mut();
        if refs.contains_key(&tag.ref_name()) {
            return Err(Error::GenericResponseError {
                status: 422,
                message: "Reference already exists".to_owned(),
            });
        }
        refs.insert(tag.ref_name(), sha.to_owned());

        Ok(TagRef::new(tag.ref_name(), sha))
    }

    async fn create_release(
        &self,
        _repo: &Repository,
        body: &UpsertReleaseRequest,
    ) -> Result<Release, Error> {
        self.record(Call::CreateRelease(body.tag_name.to_owned()))?;

        let id = self.id();
        let mut release = Release {
            id,
            tag: Tag::new(&body.tag_name),
            name: String::new(),
            target_commitish: String::new(),
            prerelease: false,
            draft: false,
            html_url: String::new(),
            upload_url: upload_url(id),
            assets: Vec::new(),
        };
        self.apply(&mut release, body);
        self.releases.borrow_mut().push(release.clone());

        Ok(release)
    }

    async fn edit_release(
        &self,
        _repo: &Repository,
        release_id: u64,
        body: &UpsertReleaseRequest,
    ) -> Result<Release, Error> {
        self.record(Call::EditRelease(release_id))?;

        let mut releases = self.releases.borrow_mut();
        let release = releases
            .iter_mut()
            .find(|release| release.id == release_id)
            .ok_or_else(|| not_found("release"))?;
        self.apply(release, body);

        Ok(release.clone())
    }

    async fn delete_release_asset(
        &self,
        _repo: &Repository,
        asset: &ReleaseAsset,
    ) -> Result<(), Error> {
        self.record(Call::DeleteReleaseAsset(asset.name.to_owned()))?;

        for release in self.releases.borrow_mut().iter_mut() {
            if let Some(index) = release.assets.iter().position(|a| a.id == asset.id) {
                release.assets.remove(index);
                return Ok(());
            }
        }

        Err(not_found("asset"))
    }

    async fn upload_release_asset(
        &self,
        release: &Release,
        upload: AssetUpload,
    ) -> Result<ReleaseAsset, Error> {
        self.record(Call::UploadReleaseAsset(upload.name.to_owned()))?;

        let id = self.id();
        let mut releases = self.releases.borrow_mut();
        let stored = releases
            .iter_mut()
            .find(|stored| stored.id == release.id)
            .ok_or_else(|| not_found("release"))?;

        if stored.assets.iter().any(|asset| asset.name == upload.name) {
            return Err(Error::GenericResponseError {
                status: 422,
                message: "already_exists".to_owned(),
            });
        }

        let asset = ReleaseAsset::new(
            id,
            &upload.name,
            download_url(stored.tag.name(), &upload.name),
        );
        stored.assets.push(asset.clone());

        Ok(asset)
    }
}
