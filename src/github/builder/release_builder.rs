use crate::github::{request::UpsertReleaseRequest, tag::Tag};

pub struct ReleaseBuilder {
    release_tag: Tag,
    release_name: String,
    target_commitish: String,
    draft: bool,
    prerelease: bool,
    body: Option<String>,
}

impl ReleaseBuilder {
    pub fn new(release_tag: &Tag) -> Self {
        ReleaseBuilder {
            release_tag: release_tag.to_owned(),
            release_name: String::new(),
            target_commitish: String::new(),
            draft: false,
            prerelease: false,
            body: None,
        }
    }

    pub fn name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = release_name.into();
        self
    }

    pub fn target_commitish(mut self, target_commitish: impl Into<String>) -> Self {
        self.target_commitish = target_commitish.into();
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn prerelease(mut self, pre_release: bool) -> Self {
        self.prerelease = pre_release;
        self
    }

    pub fn body(mut self, body: Option<&str>) -> Self {
        self.body = body.map(str::to_owned);
        self
    }

    pub fn build(self) -> UpsertReleaseRequest {
        let name = if self.release_name.is_empty() {
            self.release_tag.name().to_owned()
        } else {
            self.release_name
        };

        UpsertReleaseRequest {
            tag_name: self.release_tag.name().to_owned(),
            target_commitish: self.target_commitish,
            name,
            body: self.body,
            draft: self.draft,
            prerelease: self.prerelease,
        }
    }
}
