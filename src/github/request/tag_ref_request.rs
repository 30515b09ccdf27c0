use crate::github::tag::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TagRefRequest {
    pub r#ref: String,
    pub sha: String,
}

impl TagRefRequest {
    pub fn new(tag: &Tag, sha: impl Into<String>) -> Self {
        Self {
            r#ref: tag.ref_name(),
            sha: sha.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_the_fully_qualified_ref() {
        let request = TagRefRequest::new(&Tag::new("v1.0"), "abc123");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "ref": "refs/tags/v1.0", "sha": "abc123" })
        );
    }
}
