//! Request extractors whose rejections use the API error envelope.
//!
//! axum's stock `Json`, `Query` and `Path` reject with plain-text bodies and
//! assorted statuses (400, 415, 422). These wrappers turn every rejection into
//! a 400 `BAD_REQUEST` `{ "error", "code" }` body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Requires `Content-Type: application/json`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// JSON body that may be left out entirely.
///
/// An empty (or all-whitespace) body yields `T::default()`, so the handler's
/// own validation decides what a missing field means. A non-empty body must
/// parse as JSON; the content type is not checked.
#[derive(Debug)]
pub struct OptionalJson<T>(pub T);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(OptionalJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
    }
}

/// Query string parameters.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameters, e.g. the numeric id in `/posts/{id}`.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Target {
        post_id: Option<i64>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/api/v1/like");
        if let Some(value) = content_type {
            builder = builder.header("content-type", value);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn empty_body_becomes_default() {
        for body in ["", "  \n"] {
            let OptionalJson(target) =
                OptionalJson::<Target>::from_request(request(None, body), &())
                    .await
                    .unwrap();
            assert_eq!(target, Target::default());
        }
    }

    #[tokio::test]
    async fn optional_body_is_parsed_without_content_type() {
        let OptionalJson(target) =
            OptionalJson::<Target>::from_request(request(None, r#"{"post_id":5}"#), &())
                .await
                .unwrap();
        assert_eq!(target.post_id, Some(5));
    }

    #[tokio::test]
    async fn mistyped_field_is_bad_request() {
        let err = OptionalJson::<Target>::from_request(request(None, r#"{"post_id":"5"}"#), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg.starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn json_without_content_type_is_bad_request() {
        let err = ApiJson::<Target>::from_request(request(None, r#"{"post_id":5}"#), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::BadRequest(_));
    }

    #[tokio::test]
    async fn json_with_content_type_is_parsed() {
        let ApiJson(target) = ApiJson::<Target>::from_request(
            request(Some("application/json"), r#"{"post_id":9}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(target.post_id, Some(9));
    }
}
