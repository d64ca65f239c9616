use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use reportcard_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>();
    // field_errors() is a HashMap; keep the output stable
    messages.sort();
    messages.join(", ")
}

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Every rejection, malformed body or failed rule alike, is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return AppError::bad_request(anyhow!("Invalid field type in request"));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Path extractor whose rejections use the JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| AppError::bad_request(anyhow!(rejection.body_text())))?;
        Ok(Path(value))
    }
}

/// Query-string extractor whose rejections use the JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| AppError::bad_request(anyhow!(rejection.body_text())))?;
        Ok(Query(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use reportcard_core::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct NamePayload {
        #[validate(length(min = 2))]
        name: String,
    }

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(body) =
            ValidatedJson::<NamePayload>::from_request(request(r#"{"name":"ok"}"#), &())
            .await
            .unwrap();
        assert_eq!(body.name, "ok");
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        let err = ValidatedJson::<NamePayload>::from_request(request(r#"{"name":"x"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.error.to_string(), "name is invalid");
    }

    #[tokio::test]
    async fn test_missing_field_is_named() {
        let err = ValidatedJson::<NamePayload>::from_request(request("{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.error.to_string(), "name is required");
    }

    #[derive(Debug, Deserialize)]
    struct YearQuery {
        year: i32,
    }

    #[tokio::test]
    async fn test_bad_query_is_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/students?year=soon")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let err = Query::<YearQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let (mut parts, _) = Request::builder()
            .uri("/students?year=2024")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let Query(query) = Query::<YearQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(query.year, 2024);
    }
}
