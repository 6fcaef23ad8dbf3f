//! List-response decoding and query-string building
//!
//! Older list endpoints return a bare JSON array while the v1 endpoints wrap
//! results in a `{results, next_cursor}` envelope. [`decode_page`] accepts
//! either so the resource code never has to care which one it got.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Cursor for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    results: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Decode a list response, trying the cursor envelope first and falling back
/// to a bare array treated as a single complete page.
pub fn decode_page<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Page<T>> {
    let value: Value = serde_json::from_slice(bytes)?;
    if value.is_array() {
        return Ok(Page {
            results: serde_json::from_value(value)?,
            next_cursor: None,
        });
    }

    let envelope: Envelope<T> = serde_json::from_value(value)?;
    Ok(Page {
        results: envelope.results,
        next_cursor: envelope.next_cursor.filter(|c| !c.is_empty()),
    })
}

/// Builds `path?key=value&...`, skipping empty values and percent-encoding
/// the rest.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    path: String,
    params: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.params.push((key, v.to_string()));
        }
        self
    }

    /// Render the endpoint, optionally continuing from `cursor`.
    pub fn render(&self, cursor: Option<&str>) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        if let Some(c) = cursor {
            pairs.push(format!("cursor={}", urlencoding::encode(c)));
        }

        if pairs.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bare_array_is_final_page() {
        let page: Page<u32> = decode_page(b"[1, 2, 3]").unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_decode_envelope_with_cursor() {
        let page: Page<u32> = decode_page(br#"{"results":[7],"next_cursor":"abc"}"#).unwrap();
        assert_eq!(page.results, vec![7]);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_or_null_cursor_ends_pagination() {
        let page: Page<u32> = decode_page(br#"{"results":[],"next_cursor":""}"#).unwrap();
        assert_eq!(page.next_cursor, None);
        let page: Page<u32> = decode_page(br#"{"results":[1],"next_cursor":null}"#).unwrap();
        assert_eq!(page.next_cursor, None);
        let page: Page<u32> = decode_page(br#"{"results":[1]}"#).unwrap();
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        assert!(decode_page::<u32>(b"not json").is_err());
        assert!(decode_page::<u32>(br#"{"items":[1]}"#).is_err());
        assert!(decode_page::<u32>(br#"["one"]"#).is_err());
        assert!(decode_page::<u32>(br#"{"results":[1,"two"],"next_cursor":""}"#).is_err());
    }

    #[test]
    fn test_endpoint_skips_empty_params_and_encodes() {
        let endpoint = Endpoint::new("/tasks")
            .param("project_id", Some("123"))
            .param("filter", Some("today | overdue"))
            .param("section_id", Some(""))
            .param("label", None);
        assert_eq!(
            endpoint.render(None),
            "/tasks?project_id=123&filter=today%20%7C%20overdue"
        );
        assert_eq!(
            endpoint.render(Some("c/2")),
            "/tasks?project_id=123&filter=today%20%7C%20overdue&cursor=c%2F2"
        );
    }

    #[test]
    fn test_endpoint_cursor_on_bare_path() {
        let endpoint = Endpoint::new("/labels");
        assert_eq!(endpoint.render(None), "/labels");
        assert_eq!(endpoint.render(Some("next")), "/labels?cursor=next");
    }
}
