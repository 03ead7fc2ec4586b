use crate::api::models::{LoginRequest, LoginResponse};
use crate::error::{HoteldeskError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Send credentials to the authentication endpoint. Non-2xx responses become
/// [`HoteldeskError::ApiError`] carrying the response body; no retries.
pub async fn login_request(endpoint: &str, body: &LoginRequest) -> Result<LoginResponse> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let response = client.post(endpoint).json(body).send().await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(HoteldeskError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<LoginResponse>().await?)
}
