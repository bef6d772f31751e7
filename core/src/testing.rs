//! In-memory transport and environment for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::Value;

use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::env::Environment;
use crate::error::ApiError;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

/// A side effect requested through [`Environment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ClearLocalStorage,
    ClearSessionStorage,
    ClearCookies,
    Reload,
    Open(String),
    Confirm(String),
}

/// Records effects; `confirm` answers with a configurable value.
pub struct RecordingEnvironment {
    effects: RefCell<Vec<Effect>>,
    confirm_answer: Cell<bool>,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self {
            effects: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn count(&self, effect: &Effect) -> usize {
        self.effects.borrow().iter().filter(|e| *e == effect).count()
    }

    fn record(&self, effect: Effect) {
        self.effects.borrow_mut().push(effect);
    }
}

impl Environment for RecordingEnvironment {
    fn clear_local_storage(&self) {
        self.record(Effect::ClearLocalStorage);
    }

    fn clear_session_storage(&self) {
        self.record(Effect::ClearSessionStorage);
    }

    fn clear_cookies(&self) {
        self.record(Effect::ClearCookies);
    }

    fn reload(&self) {
        self.record(Effect::Reload);
    }

    fn open_in_new_tab(&self, url: &str) {
        self.record(Effect::Open(url.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.record(Effect::Confirm(message.to_string()));
        self.confirm_answer.get()
    }
}
