//! Clipboard access with a legacy fallback.
//!
//! The async clipboard API needs a secure context; when it is missing or
//! the write is rejected, a hidden textarea plus `execCommand("copy")`
//! covers older embeds. Returns whether the text actually landed on the
//! clipboard so the caller can still show the link on failure.

#![allow(clippy::unused_async)]

/// Copy `text` to the clipboard. Returns true on success.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
            return true;
        }
        log::warn!("async clipboard write failed, trying execCommand fallback");
        copy_via_textarea(text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

#[cfg(feature = "csr")]
fn copy_via_textarea(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(element) = document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };
    textarea.set_value(text);
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document.exec_command("copy").unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
