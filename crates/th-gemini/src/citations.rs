//! Citation extraction from grounding metadata.
//!
//! The service reports which web sources it consulted as an ordered list of
//! grounding chunks. This module normalizes them into `Citation` values:
//! one per chunk that carries a URI, in source order, without deduplication.

use serde::Deserialize;

use th_core::entities::Citation;

/// One grounding chunk from the reply metadata.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

/// Web source attached to a grounding chunk. Both fields are optional in
/// the wire format.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Normalize grounding chunks into citations.
///
/// A chunk without a URI is dropped (a title alone is not citable); a chunk
/// with a URI but no title gets `fallback_title`. Order is preserved and
/// duplicate URLs are kept. Absent or empty metadata yields an empty list,
/// which is not an error.
#[must_use]
pub fn extract(chunks: &[GroundingChunk], fallback_title: &str) -> Vec<Citation> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.web.as_ref()?;
            let url = web.uri.as_deref().filter(|u| !u.is_empty())?;
            let title = web
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(fallback_title);
            Some(Citation {
                title: title.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(uri: Option<&str>, title: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            web: Some(WebSource {
                uri: uri.map(String::from),
                title: title.map(String::from),
            }),
        }
    }

    #[test]
    fn empty_metadata_yields_empty_list() {
        assert_eq!(extract(&[], "Source"), Vec::new());
    }

    #[test]
    fn chunk_without_web_source_is_dropped() {
        let chunks = [GroundingChunk::default()];
        assert_eq!(extract(&chunks, "Source"), Vec::new());
    }

    #[test]
    fn chunk_with_title_but_no_uri_is_dropped() {
        let chunks = [chunk(None, Some("BBB report"))];
        assert_eq!(extract(&chunks, "Source"), Vec::new());
    }

    #[test]
    fn chunk_without_title_gets_fallback() {
        let chunks = [chunk(Some("https://example.com/report"), None)];
        let citations = extract(&chunks, "External Source");
        assert_eq!(
            citations,
            vec![Citation {
                title: "External Source".into(),
                url: "https://example.com/report".into(),
            }]
        );
    }

    #[test]
    fn empty_title_gets_fallback() {
        let chunks = [chunk(Some("https://example.com"), Some(""))];
        let citations = extract(&chunks, "Verification Link");
        assert_eq!(citations[0].title, "Verification Link");
    }

    #[test]
    fn order_is_preserved_and_duplicates_kept() {
        let chunks = [
            chunk(Some("https://a.example"), Some("A")),
            chunk(Some("https://b.example"), Some("B")),
            chunk(Some("https://a.example"), Some("A again")),
        ];
        let citations = extract(&chunks, "Source");
        assert_eq!(citations.len(), 3);
        assert_eq!(citations[0].url, "https://a.example");
        assert_eq!(citations[1].url, "https://b.example");
        assert_eq!(citations[2].url, "https://a.example");
    }
}
