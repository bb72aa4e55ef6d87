//! Window-level helpers: location, history, timers, and timestamps.
//!
//! These call straight into `web_sys` and only run in the browser. The
//! async sleep is the one piece that needs the `csr` feature, since the
//! timer future comes from `gloo-timers`.

#![allow(clippy::unused_async)]

/// `location.origin`, or empty when there is no window.
#[must_use]
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// `location.pathname`, or `/` when there is no window.
#[must_use]
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_owned())
}

/// `history.back()`, used by the error page's Go Back button.
pub fn go_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Open a URL in the current window. Used for `mailto:` share links.
pub fn open_url(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url(url);
    }
}

/// Current time as an ISO-8601 string, matching the stored record format.
#[must_use]
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Sleep for `ms` milliseconds. Resolves immediately off-browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
