use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

pub const API_VERSION: &str = "2022-11-28";
pub const USER_AGENT_NAME: &str = "github-release";
pub const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
pub const SHA_MEDIA_TYPE: &str = "application/vnd.github.VERSION.sha";

pub trait Headers {
    fn default_headers(self, token: &str, accept: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str, accept: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

#[allow(async_fn_in_trait)]
pub trait ResponseHandler {
    /// Reads the response body, turning any non-2xx status into an [`Error`].
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();
        let url = response.url().to_string();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { url });
        }

        if !status.is_success() {
            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message: error_message(text),
            });
        }

        Ok(text)
    }
}

pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str(text).map_err(|cause| Error::ParseResponseError { cause })
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

fn error_message(text: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(body) => body.message,
        Err(_) => text,
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{url} was not found")]
    NotFound { url: String },
    #[error("{status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("{url} is not a valid url")]
    InvalidUrl {
        url: String,
        #[source]
        cause: url::ParseError,
    },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
