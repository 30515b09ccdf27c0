pub mod api;
pub mod asset;
pub mod builder;
pub mod github_client;
pub mod release;
pub mod repository;
pub mod request;
pub mod response;
pub mod tag;

pub use api::ReleaseApi;
pub use github_client::{GithubClient, DEFAULT_API_URL};
