//! Book-search wire types and result mapping.
//!
//! Data flows into this module as JSON from the external volumes API and out
//! as [`BookRef`] values for the selection grid. Mapping picks the highest
//! available cover resolution and substitutes display defaults for missing
//! titles and authors, exactly as the result cards expect.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde::Deserialize;

use crate::consts::GRID_PLACEHOLDER_COVER;
use crate::model::BookRef;

/// Endpoint for the external book-search collaborator.
pub const VOLUMES_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Top-level search response. `items` is absent entirely for zero results.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// One search result.
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// Display metadata for a volume. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

/// Cover images by resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinks {
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

impl ImageLinks {
    /// Highest-resolution cover available, in the fixed preference order
    /// extra-large > large > medium > thumbnail.
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        self.extra_large
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
            .or(self.thumbnail.as_deref())
    }
}

impl Volume {
    /// Map a wire volume to a displayable book reference.
    #[must_use]
    pub fn into_book(self) -> BookRef {
        let info = self.volume_info;
        let cover_url = info
            .image_links
            .as_ref()
            .and_then(ImageLinks::best)
            .unwrap_or(GRID_PLACEHOLDER_COVER)
            .to_owned();
        BookRef {
            id: self.id,
            title: info.title.unwrap_or_else(|| "No Title".to_owned()),
            author: info
                .authors
                .map_or_else(|| "Unknown Author".to_owned(), |authors| authors.join(", ")),
            cover_url,
        }
    }
}

/// Map a full search response to book references, preserving result order.
#[must_use]
pub fn books_from_response(response: VolumeList) -> Vec<BookRef> {
    response.items.into_iter().map(Volume::into_book).collect()
}

/// Build the request URL for a query.
#[must_use]
pub fn search_url(query: &str, max_results: u32) -> String {
    format!(
        "{VOLUMES_ENDPOINT}?q={}&maxResults={max_results}",
        encode_component(query)
    )
}

/// Percent-encode a URL component: RFC 3986 unreserved characters pass
/// through, everything else is escaped byte-wise. Also used for `mailto:`
/// share links.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(hex_digit(byte >> 4));
                out.push(hex_digit(byte & 0x0f));
            }
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map_or('0', |c| c.to_ascii_uppercase())
}
