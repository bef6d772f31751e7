//! Backend API client.
//!
//! - [`transport`] - request/response types and the [`Transport`] trait
//! - [`client`] - [`ApiClient`], shared base URL, credentials, timeout and
//!   the expired-session interceptor
//! - [`endpoints`] - typed calls for each backend route

pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::{is_authentication_required, ApiClient, AUTH_REQUIRED_MESSAGE};
pub use transport::{
    FormPart, HttpRequest, HttpResponse, Method, MultipartForm, RequestBody, RequestOptions,
    Transport,
};
