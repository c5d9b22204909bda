//! HTTP client for the activity service
//!
//! Every repository goes through this client so status handling, error body
//! parsing and call logging live in one place. Requests are sent once: there
//! is no retry loop here, a failed call is reported to the caller as is.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

use super::config::ClientConfig;
use crate::shared::errors::{status_to_app_error, AppError, AppResult};
use crate::shared::utils::LogContext;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON document
    pub async fn get<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.client.get(self.url(path));
        let response = self.send(Method::GET, path, request).await?;
        Self::parse_response(response).await
    }

    /// GET a JSON document with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;
        Self::parse_response(response).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, request).await?;
        Self::parse_response(response).await
    }

    /// DELETE a resource; the response body is an acknowledgement only
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let request = self.client.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> AppResult<Response> {
        LogContext::api_call(method.as_str(), path, "", None);
        let started = Instant::now();

        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("{} {} failed before a response: {}", method, path, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            method.as_str(),
            path,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if status.is_success() {
            return Ok(response);
        }

        // The body is only read to pull out the server's explanation
        let body = response.text().await.unwrap_or_default();
        let error = status_to_app_error(status, &body);
        tracing::debug!("{} {} rejected: {}", method, path, error);
        Err(error)
    }

    async fn parse_response<T>(response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!("Failed to read response: {}", e))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse response: {}. Response: {}",
                e,
                truncate(&response_text, 200)
            ))
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::default().with_base_url("http://localhost:8000/api/");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/activities/3"), "http://localhost:8000/api/activities/3");
        assert_eq!(client.url("categories"), "http://localhost:8000/api/categories");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("도예공예수영", 2), "도예...");
    }
}
