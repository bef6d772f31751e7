//! `fetch` transport for the API client (gloo-net).

use futures::future::{self, Either};
use gloo_net::http::{Method as FetchMethod, Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Uint8Array};
use portfolio_core::api::{FormPart, MultipartForm};
use portfolio_core::{ApiError, HttpRequest, HttpResponse, Method, RequestBody, Transport};
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

/// Sends requests with the browser's `fetch`, cookies included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let timeout = request.timeout;
        let request = build_request(request)?;

        let send = request.send();
        let deadline = TimeoutFuture::new(timeout.as_millis().min(u32::MAX as u128) as u32);
        futures::pin_mut!(send, deadline);

        let response = match future::select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Timeout(timeout)),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}

fn build_request(request: HttpRequest) -> Result<Request, ApiError> {
    let is_multipart = matches!(request.body, RequestBody::Multipart(_));

    let mut builder = RequestBuilder::new(&request.url).method(fetch_method(request.method));
    if request.with_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    for (name, value) in &request.headers {
        // The browser writes the multipart boundary itself.
        if is_multipart && name.eq_ignore_ascii_case("Content-Type") {
            continue;
        }
        builder = builder.header(name, value);
    }

    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(&value),
        RequestBody::Multipart(form) => builder.body(form_data(&form)?),
    };
    built.map_err(|e| ApiError::Encode(e.to_string()))
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Delete => FetchMethod::DELETE,
    }
}

/// Turn a multipart body into a `FormData`, one blob per file part.
fn form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;

    for part in form.parts() {
        let appended = match part {
            FormPart::Text { name, value } => data.append_with_str(name, value),
            FormPart::File { name, file } => {
                let bytes = Uint8Array::from(file.bytes.as_slice());
                let chunks = Array::of1(&bytes);
                let options = BlobPropertyBag::new();
                options.set_type(file.content_type.as_deref().unwrap_or("text/csv"));
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
                data.append_with_blob_and_filename(name, &blob, &file.name)
            }
        };
        appended.map_err(|e| ApiError::Encode(format!("Failed to append {}: {:?}", part.name(), e)))?;
    }

    Ok(data)
}
