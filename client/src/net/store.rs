//! Remote customization store.
//!
//! A share POSTs the record and gets back an opaque id; the view-only page
//! GETs the record by id. Error mapping is deliberate: auth rejections and
//! missing documents get their own variants so the share flow can fall back
//! to local storage and the view page can show "not found" rather than a
//! generic network error.

#![allow(clippy::unused_async)]

use giftbook::error::GiftError;
use giftbook::model::CustomizationRecord;

/// Collection path on the backend.
pub const COLLECTION_PATH: &str = "/api/customizations";

/// Persist a record remotely and return its server-assigned id.
///
/// # Errors
///
/// Returns [`GiftError::Auth`] for 401/403 responses and [`GiftError::Save`]
/// for anything else; both send the caller to the local fallback.
pub async fn create_customization(record: &CustomizationRecord) -> Result<String, GiftError> {
    #[cfg(feature = "csr")]
    {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct CreatedResponse {
            id: String,
        }

        let response = gloo_net::http::Request::post(COLLECTION_PATH)
            .json(record)
            .map_err(|e| GiftError::Save(e.to_string()))?
            .send()
            .await
            .map_err(|e| GiftError::Save(e.to_string()))?;
        match response.status() {
            401 | 403 => {
                return Err(GiftError::Auth(format!(
                    "store rejected the session with status {}",
                    response.status()
                )));
            }
            status if !response.ok() => {
                return Err(GiftError::Save(format!("store returned status {status}")));
            }
            _ => {}
        }
        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| GiftError::Save(e.to_string()))?;
        Ok(created.id)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = record;
        Err(GiftError::Save("remote store unavailable off-browser".to_owned()))
    }
}

/// Fetch a shared record by id.
///
/// # Errors
///
/// Returns [`GiftError::NotFound`] for 404s and unparseable bodies, and
/// [`GiftError::Network`] for transport failures or other statuses.
pub async fn fetch_customization(id: &str) -> Result<CustomizationRecord, GiftError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{COLLECTION_PATH}/{id}");
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| GiftError::Network(e.to_string()))?;
        if response.status() == 404 {
            return Err(GiftError::NotFound(id.to_owned()));
        }
        if !response.ok() {
            return Err(GiftError::Network(format!(
                "store returned status {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|_| GiftError::NotFound(id.to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GiftError::NotFound(id.to_owned()))
    }
}
