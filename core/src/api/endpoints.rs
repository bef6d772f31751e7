//! Typed wrappers for the backend REST surface.
//!
//! | Method | Path                  | Wrapper                                 |
//! |--------|-----------------------|-----------------------------------------|
//! | GET    | `/auth/user`          | [`ApiClient::current_user`]             |
//! | GET    | `/auth/authorize`     | [`ApiClient::login_url`] (link target)  |
//! | GET    | `/auth/logout`        | [`ApiClient::logout`]                   |
//! | GET    | `/auth/debug-session` | [`ApiClient::debug_session`]            |
//! | GET    | `/spreadsheets/`      | [`ApiClient::list_spreadsheets`]        |
//! | POST   | `/spreadsheets/`      | [`ApiClient::create_spreadsheet`]       |
//! | DELETE | `/spreadsheets/{id}`  | [`ApiClient::delete_spreadsheet`]       |
//! | POST   | `/data/sync`          | [`ApiClient::sync_spreadsheets`]        |
//! | POST   | `/data/add`           | [`ApiClient::add_data`]                 |

use serde_json::Value;

use super::client::ApiClient;
use super::transport::{RequestOptions, Transport};
use crate::env::Environment;
use crate::error::ApiResult;
use crate::models::{NewSpreadsheet, Spreadsheet, SpreadsheetId, SyncRequest, UploadBatch, User};

pub const AUTH_USER: &str = "/auth/user";
pub const AUTH_AUTHORIZE: &str = "/auth/authorize";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_DEBUG_SESSION: &str = "/auth/debug-session";
pub const SPREADSHEETS: &str = "/spreadsheets/";
pub const DATA_SYNC: &str = "/data/sync";
pub const DATA_ADD: &str = "/data/add";

impl<T: Transport, E: Environment> ApiClient<T, E> {
    pub async fn current_user(&self) -> ApiResult<User> {
        self.get(AUTH_USER).await
    }

    /// Where the login button sends the browser.
    pub fn login_url(&self) -> String {
        self.config().url(AUTH_AUTHORIZE)
    }

    pub async fn logout(&self) -> ApiResult<Value> {
        self.get(AUTH_LOGOUT).await
    }

    pub async fn debug_session(&self) -> ApiResult<Value> {
        self.get(AUTH_DEBUG_SESSION).await
    }

    pub async fn list_spreadsheets(&self) -> ApiResult<Vec<Spreadsheet>> {
        self.get(SPREADSHEETS).await
    }

    pub async fn create_spreadsheet(&self, spreadsheet: &NewSpreadsheet) -> ApiResult<Value> {
        self.post(SPREADSHEETS, spreadsheet, RequestOptions::default())
            .await
    }

    pub async fn delete_spreadsheet(&self, id: &SpreadsheetId) -> ApiResult<Value> {
        self.delete(&format!("{}{}", SPREADSHEETS, id)).await
    }

    pub async fn sync_spreadsheets(&self, spreadsheets: &[Spreadsheet]) -> ApiResult<Value> {
        self.post(
            DATA_SYNC,
            &SyncRequest { spreadsheets },
            RequestOptions::default().content_type("application/json"),
        )
        .await
    }

    pub async fn add_data(&self, batch: UploadBatch) -> ApiResult<Value> {
        self.post_multipart(DATA_ADD, batch.into_form()).await
    }
}
