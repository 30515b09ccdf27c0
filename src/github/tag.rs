use std::fmt::{self, Display};

const TAG_REF_PREFIX: &str = "refs/tags/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified ref, e.g. `refs/tags/v1.0.0`
    pub fn ref_name(&self) -> String {
        format!("{}{}", TAG_REF_PREFIX, self.name)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A tag reference as seen on the remote: the ref name and the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub sha: String,
}

impl TagRef {
    pub fn new(name: impl Into<String>, sha: impl Into<String>) -> Self {
        TagRef {
            name: name.into(),
            sha: sha.into(),
        }
    }
}
