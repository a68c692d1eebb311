//! Thin JSON helpers over `gloo_net` that map failures to [`ApiError`]

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::ApiError;

async fn read_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("HTTP {} from {}: {}", status, response.url(), err.user_message());
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = read_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::from_transport(&e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Local(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::from_transport(&e.to_string()))?;
    decode(response).await
}
