//! HTTP client wrapper for the Cirrus services
//!
//! One [`ServiceClient`] is constructed per invocation for the matched
//! service. It attaches the resolved authenticator, appends the pinned API
//! version where the service requires one, and maps every non-success
//! response into a uniform transport error carrying the service's own
//! message. Operation methods live in the per-service modules.

mod assistant;
mod nlc;
mod nlu;
mod stt;
mod tts;
mod vr;

use std::time::Duration;
use std::time::Instant;

use reqwest::Method;
use serde_json::Value;

use crate::auth::Authenticator;
use crate::error::{CliError, CliResult};
use crate::logging::global_logger;

/// Query parameters accumulated for a single request
pub type Query = Vec<(String, String)>;

/// Client for making authenticated requests against one service endpoint
pub struct ServiceClient {
    http: reqwest::Client,
    endpoint: String,
    authenticator: Authenticator,
    version: Option<String>,
}

impl ServiceClient {
    /// Create a new client for a service endpoint
    pub fn new(
        endpoint: String,
        authenticator: Authenticator,
        version: Option<String>,
    ) -> CliResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CliError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            authenticator,
            version,
        })
    }

    fn request(&self, method: Method, path: &str, query: &Query) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.endpoint.trim_end_matches('/'), path);
        if let Some(logger) = global_logger() {
            logger.debug_request(method.as_str(), &url);
        }
        let mut request = self.http.request(method, &url);
        if let Some(version) = &self.version {
            request = request.query(&[("version", version.as_str())]);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        self.authenticator.apply(request)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> CliResult<reqwest::Response> {
        let started = Instant::now();
        let response = request.send().await?;
        if let Some(logger) = global_logger() {
            logger.debug_response(
                response.status().as_u16(),
                started.elapsed().as_millis() as u64,
            );
        }
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::transport_error(response).await)
        }
    }

    /// Extract the service's diagnostic from a non-success response.
    ///
    /// Services put their message under `error` or `message`; anything else
    /// is surfaced verbatim.
    async fn transport_error(response: reqwest::Response) -> CliError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                let field = v.get("error").or_else(|| v.get("message"))?;
                field.as_str().map(String::from)
            })
            .unwrap_or(body);
        CliError::Transport { status, message }
    }

    /// GET returning a structured value
    pub async fn get_json(&self, path: &str, query: Query) -> CliResult<Value> {
        let response = self.send(self.request(Method::GET, path, &query)).await?;
        response.json().await.map_err(Into::into)
    }

    /// POST with a JSON body, returning a structured value
    pub async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        query: Query,
        body: &T,
    ) -> CliResult<Value> {
        let response = self
            .send(self.request(Method::POST, path, &query).json(body))
            .await?;
        response.json().await.map_err(Into::into)
    }

    /// POST a raw byte body with an explicit content type
    pub async fn post_body(
        &self,
        path: &str,
        query: Query,
        content_type: &str,
        data: Vec<u8>,
    ) -> CliResult<Value> {
        let response = self
            .send(
                self.request(Method::POST, path, &query)
                    .header(reqwest::header::CONTENT_TYPE, content_type)
                    .body(data),
            )
            .await?;
        response.json().await.map_err(Into::into)
    }

    /// POST a raw byte body where the service acknowledges without a payload
    pub async fn post_body_ack(
        &self,
        path: &str,
        query: Query,
        content_type: &str,
        data: Vec<u8>,
    ) -> CliResult<()> {
        self.send(
            self.request(Method::POST, path, &query)
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(data),
        )
        .await?;
        Ok(())
    }

    /// POST a multipart form, returning a structured value
    pub async fn post_multipart(
        &self,
        path: &str,
        query: Query,
        form: reqwest::multipart::Form,
    ) -> CliResult<Value> {
        let response = self
            .send(self.request(Method::POST, path, &query).multipart(form))
            .await?;
        response.json().await.map_err(Into::into)
    }

    /// POST where the service acknowledges without a payload
    pub async fn post_ack(&self, path: &str, query: Query) -> CliResult<()> {
        self.send(self.request(Method::POST, path, &query)).await?;
        Ok(())
    }

    /// POST with a JSON body, returning the raw response bytes
    pub async fn post_json_bytes<T: serde::Serialize>(
        &self,
        path: &str,
        query: Query,
        accept: Option<&str>,
        body: &T,
    ) -> CliResult<Vec<u8>> {
        let mut request = self.request(Method::POST, path, &query).json(body);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept.to_string());
        }
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// GET returning the raw response bytes
    pub async fn get_bytes(&self, path: &str, query: Query) -> CliResult<Vec<u8>> {
        let response = self.send(self.request(Method::GET, path, &query)).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// DELETE where the service acknowledges without a payload
    pub async fn delete(&self, path: &str, query: Query) -> CliResult<()> {
        self.send(self.request(Method::DELETE, path, &query)).await?;
        Ok(())
    }

    /// DELETE returning the service's structured response
    pub async fn delete_json(&self, path: &str, query: Query) -> CliResult<Value> {
        let response = self.send(self.request(Method::DELETE, path, &query)).await?;
        response.json().await.map_err(Into::into)
    }
}

/// Turn an upload opened by the binder into a multipart form part
pub(crate) fn upload_part(upload: crate::binder::FileUpload) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(upload.data).file_name(upload.file_name)
}

/// Append a query pair when the option was set
pub fn push_opt(query: &mut Query, name: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        query.push((name.to_string(), value.to_string()));
    }
}

/// Append a comma-joined list when the option was set
pub fn push_list(query: &mut Query, name: &str, value: Option<&[String]>) {
    if let Some(items) = value {
        query.push((name.to_string(), items.join(",")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_opt_set_and_unset() {
        let mut query = Query::new();
        push_opt(&mut query, "page_limit", Some(5));
        push_opt(&mut query, "cursor", None::<String>);
        assert_eq!(query, vec![("page_limit".to_string(), "5".to_string())]);
    }

    #[test]
    fn test_push_opt_explicit_false_is_kept() {
        let mut query = Query::new();
        push_opt(&mut query, "include_audit", Some(false));
        assert_eq!(query, vec![("include_audit".to_string(), "false".to_string())]);
    }

    #[test]
    fn test_push_list_joins_with_commas() {
        let mut query = Query::new();
        let owners = vec!["me".to_string(), "platform".to_string()];
        push_list(&mut query, "owners", Some(&owners));
        assert_eq!(query, vec![("owners".to_string(), "me,platform".to_string())]);
    }

    #[test]
    fn test_client_construction() {
        let client = ServiceClient::new(
            "https://example.test/api".to_string(),
            Authenticator::NoAuth,
            Some("2020-01-01".to_string()),
        );
        assert!(client.is_ok());
    }
}
