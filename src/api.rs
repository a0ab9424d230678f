use crate::config::ClientConfig;
use crate::models::review::{LikeResponse, ReviewsResponse};
use crate::models::validation::FieldKind;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },

    #[error("response body could not be read: {0}")]
    Body(String),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP port used by every component. Futures are `!Send`: they run on the
/// browser event loop.
pub trait ReviewApi {
    fn fetch_reviews<'a>(
        &'a self,
        hotel_id: &'a str,
        action: &'a str,
    ) -> LocalBoxFuture<'a, Result<ReviewsResponse, ApiError>>;

    fn like_review<'a>(
        &'a self,
        review_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<LikeResponse, ApiError>>;

    /// Raw validation text for `value`. Never called with an empty value.
    fn validate_field<'a>(
        &'a self,
        kind: FieldKind,
        value: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, ApiError>>;
}

/// `ReviewApi` backed by the browser's fetch through gloo-net.
#[derive(Clone, Debug, Default)]
pub struct HttpReviewApi {
    config: ClientConfig,
}

impl HttpReviewApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

async fn read_text(url: &str, response: Result<Response, gloo_net::Error>) -> Result<String, ApiError> {
    let response = response.map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    response
        .text()
        .await
        .map_err(|err| ApiError::Body(err.to_string()))
}

// Bodies are read as text first so a non-JSON page surfaces as `Decode`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

impl ReviewApi for HttpReviewApi {
    fn fetch_reviews<'a>(
        &'a self,
        hotel_id: &'a str,
        action: &'a str,
    ) -> LocalBoxFuture<'a, Result<ReviewsResponse, ApiError>> {
        async move {
            let url = self.config.endpoint_url(
                &self.config.reviews_path,
                &[("hotelId", hotel_id), ("action", action)],
            );
            log!("[API] GET {}", url);
            let body = read_text(&url, Request::get(&url).send().await).await?;
            decode(&body)
        }
        .boxed_local()
    }

    fn like_review<'a>(
        &'a self,
        review_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<LikeResponse, ApiError>> {
        async move {
            let url = self
                .config
                .endpoint_url(&self.config.like_path, &[("reviewId", review_id)]);
            log!("[API] POST {}", url);
            let body = read_text(&url, Request::post(&url).send().await).await?;
            decode(&body)
        }
        .boxed_local()
    }

    fn validate_field<'a>(
        &'a self,
        kind: FieldKind,
        value: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, ApiError>> {
        async move {
            let path = match kind {
                FieldKind::Username => &self.config.validate_username_path,
                FieldKind::Password => &self.config.validate_password_path,
            };
            // The value itself is not logged: it may be a password.
            let url = self.config.endpoint_url(path, &[(kind.query_param(), value)]);
            log!("[API] GET {}", path);
            read_text(&url, Request::get(&url).send().await).await
        }
        .boxed_local()
    }
}
