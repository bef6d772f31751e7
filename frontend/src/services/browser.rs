//! Browser side effects behind [`Environment`].

use portfolio_core::env::{expired_cookie_assignments, Environment};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Storage};

/// The real `window`: Web Storage, cookies, location and dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn clear_local_storage(&self) {
        clear_storage("localStorage", gloo_utils::window().local_storage());
    }

    fn clear_session_storage(&self) {
        clear_storage("sessionStorage", gloo_utils::window().session_storage());
    }

    fn clear_cookies(&self) {
        let Ok(document) = gloo_utils::document().dyn_into::<HtmlDocument>() else {
            log::warn!("Document is not an HTML document, cookies left as is");
            return;
        };
        let cookies = document.cookie().unwrap_or_default();
        for assignment in expired_cookie_assignments(&cookies) {
            if let Err(e) = document.set_cookie(&assignment) {
                log::warn!("Failed to expire cookie: {:?}", e);
            }
        }
    }

    fn reload(&self) {
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }

    fn open_in_new_tab(&self, url: &str) {
        if let Err(e) = gloo_utils::window().open_with_url_and_target(url, "_blank") {
            log::error!("Failed to open {}: {:?}", url, e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or(false)
    }
}

fn clear_storage(label: &str, storage: Result<Option<Storage>, JsValue>) {
    match storage {
        Ok(Some(storage)) => {
            if let Err(e) = storage.clear() {
                log::warn!("Failed to clear {}: {:?}", label, e);
            }
        }
        Ok(None) => log::debug!("{} unavailable", label),
        Err(e) => log::warn!("Cannot access {}: {:?}", label, e),
    }
}
