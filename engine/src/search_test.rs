use super::*;

fn links(
    extra_large: Option<&str>,
    large: Option<&str>,
    medium: Option<&str>,
    thumbnail: Option<&str>,
) -> ImageLinks {
    ImageLinks {
        extra_large: extra_large.map(str::to_owned),
        large: large.map(str::to_owned),
        medium: medium.map(str::to_owned),
        thumbnail: thumbnail.map(str::to_owned),
    }
}

// =============================================================
// Cover resolution preference
// =============================================================

#[test]
fn best_prefers_extra_large() {
    let l = links(Some("xl"), Some("l"), Some("m"), Some("t"));
    assert_eq!(l.best(), Some("xl"));
}

#[test]
fn best_falls_back_down_the_resolution_ladder() {
    assert_eq!(links(None, Some("l"), Some("m"), Some("t")).best(), Some("l"));
    assert_eq!(links(None, None, Some("m"), Some("t")).best(), Some("m"));
    assert_eq!(links(None, None, None, Some("t")).best(), Some("t"));
    assert_eq!(links(None, None, None, None).best(), None);
}

#[test]
fn volume_without_images_uses_placeholder() {
    let volume = Volume {
        id: "v1".to_owned(),
        volume_info: VolumeInfo { title: Some("X".to_owned()), ..VolumeInfo::default() },
    };
    let book = volume.into_book();
    assert_eq!(book.cover_url, crate::consts::GRID_PLACEHOLDER_COVER);
}

// =============================================================
// Display defaults
// =============================================================

#[test]
fn missing_title_and_authors_get_defaults() {
    let volume = Volume { id: "v1".to_owned(), volume_info: VolumeInfo::default() };
    let book = volume.into_book();
    assert_eq!(book.title, "No Title");
    assert_eq!(book.author, "Unknown Author");
}

#[test]
fn authors_join_with_comma() {
    let volume = Volume {
        id: "v1".to_owned(),
        volume_info: VolumeInfo {
            authors: Some(vec!["A. One".to_owned(), "B. Two".to_owned()]),
            ..VolumeInfo::default()
        },
    };
    assert_eq!(volume.into_book().author, "A. One, B. Two");
}

// =============================================================
// Response mapping
// =============================================================

#[test]
fn zero_result_response_without_items_field_parses_empty() {
    let response: VolumeList = serde_json::from_str("{\"kind\":\"books#volumes\"}").unwrap();
    assert!(books_from_response(response).is_empty());
}

#[test]
fn response_maps_in_order_with_wire_field_names() {
    let json = r#"{
        "items": [
            {
                "id": "a",
                "volumeInfo": {
                    "title": "First",
                    "authors": ["One"],
                    "imageLinks": { "thumbnail": "t1", "extraLarge": "xl1" }
                }
            },
            {
                "id": "b",
                "volumeInfo": { "title": "Second" }
            }
        ]
    }"#;
    let response: VolumeList = serde_json::from_str(json).unwrap();
    let books = books_from_response(response);
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, "a");
    assert_eq!(books[0].cover_url, "xl1");
    assert_eq!(books[1].title, "Second");
    assert_eq!(books[1].author, "Unknown Author");
}

// =============================================================
// URL building
// =============================================================

#[test]
fn search_url_for_plain_query() {
    assert_eq!(
        search_url("dune", 20),
        "https://www.googleapis.com/books/v1/volumes?q=dune&maxResults=20"
    );
}

#[test]
fn search_url_encodes_spaces_and_punctuation() {
    let url = search_url("bestsellers fiction", 12);
    assert_eq!(
        url,
        "https://www.googleapis.com/books/v1/volumes?q=bestsellers%20fiction&maxResults=12"
    );
}

#[test]
fn search_url_encodes_non_ascii_bytewise() {
    let url = search_url("héros & co", 5);
    assert!(url.contains("h%C3%A9ros%20%26%20co"));
}

#[test]
fn search_url_passes_unreserved_characters() {
    let url = search_url("a-b_c.d~e", 1);
    assert!(url.contains("q=a-b_c.d~e&"));
}

#[test]
fn encode_component_escapes_url_delimiters() {
    assert_eq!(
        encode_component("https://example.test/?view=abc&local=true"),
        "https%3A%2F%2Fexample.test%2F%3Fview%3Dabc%26local%3Dtrue"
    );
}
