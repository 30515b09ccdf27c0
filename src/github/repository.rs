use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error;

/// Repository coordinate, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Error)]
#[error("github-repository '{0}' is in the wrong format, expected owner/name")]
pub struct InvalidRepository(pub String);

impl FromStr for Repository {
    type Err = InvalidRepository;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(Repository::new(*owner, *name))
            }
            _ => Err(InvalidRepository(value.to_owned())),
        }
    }
}
