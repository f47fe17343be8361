use serde::de::DeserializeOwned;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let res = match reqwest::get(url).await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::UpstreamUnavailable.value());
        }
    };

    if !res.status().is_success() {
        tracing::error!("GET {} returned {}", url, res.status());
        return Err(DefaultApiError::UpstreamUnavailable.value());
    }

    match res.json::<T>().await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn test_get_json_fails_once_on_error_status() {
        let (url, hits) = test_server::serve("500 Internal Server Error", "").await;

        let err = get_json::<Vec<u8>>(&url).await.unwrap_err();

        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let (url, hits) = test_server::serve("200 OK", "[1,2,3]").await;

        let values = get_json::<Vec<u8>>(&url).await.unwrap();

        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_json_rejects_malformed_body() {
        let (url, hits) = test_server::serve("200 OK", "{not json").await;

        assert!(get_json::<Vec<u8>>(&url).await.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
