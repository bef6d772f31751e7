//! Session-aware HTTP client.
//!
//! Every backend call goes through [`ApiClient::request`], which attaches the
//! shared base URL, cookies and timeout, and turns an expired session into
//! [`ApiError::AuthenticationRequired`] after wiping local state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{
    HttpRequest, HttpResponse, Method, MultipartForm, RequestBody, RequestOptions, Transport,
};
use crate::config::ClientConfig;
use crate::env::Environment;
use crate::error::{ApiError, ApiResult};

/// `message` the backend puts in a 401 body when the session has expired.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Error bodies longer than this are cut when used as a message.
const MAX_ERROR_BODY: usize = 200;

pub struct ApiClient<T, E> {
    config: ClientConfig,
    transport: T,
    env: E,
}

impl<T: Transport, E: Environment> ApiClient<T, E> {
    pub fn new(config: ClientConfig, transport: T, env: E) -> Self {
        Self {
            config,
            transport,
            env,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Send a request and return the successful response.
    ///
    /// Non-2xx answers become errors. A 401 carrying
    /// [`AUTH_REQUIRED_MESSAGE`] also clears local and session storage and
    /// reloads the page before returning.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> ApiResult<HttpResponse> {
        let RequestOptions {
            mut headers,
            content_type,
            timeout,
        } = options;
        if let Some(content_type) = content_type {
            headers.push(("Content-Type".to_string(), content_type));
        }

        let request = HttpRequest {
            method,
            url: self.config.url(endpoint),
            headers,
            body,
            timeout: timeout.unwrap_or(self.config.timeout),
            with_credentials: true,
        };

        let result = match self.transport.send(request).await {
            Ok(response) => self.intercept(response),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            if !e.is_authentication_required() {
                log::error!("API call failed ({} {}): {}", method, endpoint, e);
            }
        }
        result
    }

    /// [`request`](Self::request) and decode the JSON body.
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> ApiResult<R> {
        let response = self.request(method, endpoint, body, options).await?;
        decode(&response.body)
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<R> {
        self.call(Method::Get, endpoint, RequestBody::Empty, RequestOptions::default())
            .await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<R> {
        let body = to_json(body)?;
        self.call(Method::Post, endpoint, body, options).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<R> {
        self.call(Method::Delete, endpoint, RequestBody::Empty, RequestOptions::default())
            .await
    }

    /// POST a multipart form. The browser picks the boundary, so no
    /// content type is set here.
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: MultipartForm,
    ) -> ApiResult<R> {
        self.call(
            Method::Post,
            endpoint,
            RequestBody::Multipart(form),
            RequestOptions::default(),
        )
        .await
    }

    fn intercept(&self, response: HttpResponse) -> ApiResult<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }

        if is_authentication_required(&response) {
            log::warn!("Authentication required - session expired");
            self.env.clear_local_storage();
            self.env.clear_session_storage();
            self.env.reload();
            return Err(ApiError::AuthenticationRequired);
        }

        Err(ApiError::Status {
            status: response.status,
            message: error_message(&response),
        })
    }
}

/// True for a 401 whose JSON body carries [`AUTH_REQUIRED_MESSAGE`].
pub fn is_authentication_required(response: &HttpResponse) -> bool {
    response.status == 401
        && response
            .json_body()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
            .is_some_and(|message| message == AUTH_REQUIRED_MESSAGE)
}

/// Best human-readable message for a failed response.
fn error_message(response: &HttpResponse) -> String {
    if let Some(body) = response.json_body() {
        for key in ["error", "message"] {
            if let Some(text) = body.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    let body = response.body.trim();
    if body.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        body.chars().take(MAX_ERROR_BODY).collect()
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> ApiResult<RequestBody> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Empty bodies decode as JSON `null`.
fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    let body = body.trim();
    let parsed = if body.is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body)
    };
    parsed.map_err(|e| ApiError::Decode(e.to_string()))
}
