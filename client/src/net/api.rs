//! Book search and anonymous sign-in.

#![allow(clippy::unused_async)]

use giftbook::error::GiftError;
use giftbook::model::BookRef;

/// Search the external volumes API and map the response to displayable
/// book references.
///
/// # Errors
///
/// Returns [`GiftError::Network`] when the request fails, the server answers
/// with a non-success status, or the body does not parse.
pub async fn search_volumes(query: &str, max_results: u32) -> Result<Vec<BookRef>, GiftError> {
    #[cfg(feature = "csr")]
    {
        let url = giftbook::search::search_url(query, max_results);
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| GiftError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(GiftError::Network(format!(
                "search returned status {}",
                response.status()
            )));
        }
        let list: giftbook::search::VolumeList = response
            .json()
            .await
            .map_err(|e| GiftError::Network(e.to_string()))?;
        Ok(giftbook::search::books_from_response(list))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (query, max_results);
        Err(GiftError::Network("search unavailable off-browser".to_owned()))
    }
}

/// Create an anonymous session and return its user id.
///
/// # Errors
///
/// Returns [`GiftError::Auth`] on any failure; the caller degrades to
/// local-only mode.
pub async fn anonymous_session() -> Result<String, GiftError> {
    #[cfg(feature = "csr")]
    {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct SessionResponse {
            #[serde(rename = "userId")]
            user_id: String,
        }

        let response = gloo_net::http::Request::post("/api/auth/anonymous")
            .send()
            .await
            .map_err(|e| GiftError::Auth(e.to_string()))?;
        if !response.ok() {
            return Err(GiftError::Auth(format!(
                "sign-in returned status {}",
                response.status()
            )));
        }
        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| GiftError::Auth(e.to_string()))?;
        Ok(session.user_id)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GiftError::Auth("sign-in unavailable off-browser".to_owned()))
    }
}
