mod ref_response;
mod release_response;

pub use ref_response::RefResponse;
pub use release_response::{AssetResponse, ReleaseResponse};
