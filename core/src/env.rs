//! Browser-global side effects behind a trait.
//!
//! Storage, cookies, navigation and blocking dialogs are process-wide in the
//! browser. Workflows reach them only through [`Environment`] so they can be
//! swapped out in tests.

/// Side effects the client may trigger outside its own state.
pub trait Environment {
    /// Drop everything in `localStorage`.
    fn clear_local_storage(&self);

    /// Drop everything in `sessionStorage`.
    fn clear_session_storage(&self);

    /// Expire every cookie visible to the page.
    fn clear_cookies(&self);

    /// Full page reload.
    fn reload(&self);

    /// Open `url` in a new tab or window.
    fn open_in_new_tab(&self, url: &str);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
}

/// `document.cookie` assignments that expire every cookie in `cookie_header`.
///
/// `cookie_header` is the raw `document.cookie` string (`a=1; b=2`).
pub fn expired_cookie_assignments(cookie_header: &str) -> Vec<String> {
    cookie_header
        .split(';')
        .map(str::trim_start)
        .filter_map(|pair| {
            let name = pair.split('=').next().unwrap_or_default().trim_end();
            if name.is_empty() {
                None
            } else {
                Some(format!(
                    "{}=;expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/",
                    name
                ))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_cookie_assignments() {
        let assignments = expired_cookie_assignments("session=abc; theme=dark;  csrf=x=y");
        assert_eq!(
            assignments,
            vec![
                "session=;expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/",
                "theme=;expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/",
                "csrf=;expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/",
            ]
        );
    }

    #[test]
    fn test_no_cookies() {
        assert!(expired_cookie_assignments("").is_empty());
        assert!(expired_cookie_assignments(" ; ").is_empty());
    }
}
