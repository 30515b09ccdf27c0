mod tag_ref_request;
mod upsert_release_request;

pub use tag_ref_request::TagRefRequest;
pub use upsert_release_request::UpsertReleaseRequest;
