//! The uniform wire shape every Helix list endpoint answers with.
//!
//! Responses look like `{"data": [...], "pagination": {"cursor": "..."}}`
//! regardless of the entity type inside `data`, so a single generic decoder
//! serves every resource. `pagination` is absent on non-paginated endpoints
//! and `cursor` is absent on the last page; both decode to an empty cursor.

use reqwest::Response;
use serde::Deserialize;

use crate::result::Result;

/// A decoded `{data, pagination}` response, generic over the entity type.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    /// Decoded entities. May be empty on a legitimate empty page.
    pub(crate) data: Vec<T>,

    #[serde(default)]
    pagination: Pagination,
}

/// The pagination object of the envelope.
#[derive(Debug, Default, Deserialize)]
struct Pagination {
    #[serde(default)]
    cursor: Option<String>,
}

impl<T> Envelope<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Parses an envelope from raw body bytes.
    ///
    /// A missing `data` field or a type mismatch is a decode error; an empty
    /// `data` array is a valid empty page.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Into::into)
    }

    /// Reads a response body to completion and parses it as an envelope.
    ///
    /// The body is consumed on every path, so the pooled connection is
    /// released whether or not the parse succeeds.
    pub(crate) async fn read(response: Response) -> Result<Self> {
        let bytes = response.bytes().await?;
        Self::from_bytes(&bytes)
    }

    /// Returns the pagination cursor, or an empty string when the server
    /// sent none.
    pub(crate) fn cursor(&self) -> String {
        self.pagination.cursor.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Envelope;
    use crate::models::follow::Followed;

    #[test]
    fn empty_data_is_a_valid_page() {
        let envelope: Envelope<Followed> =
            Envelope::from_bytes(br#"{"data":[],"pagination":{}}"#).unwrap();
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.cursor(), "");
    }

    #[test]
    fn missing_data_field_is_a_decode_error() {
        let result: crate::Result<Envelope<Followed>> =
            Envelope::from_bytes(br#"{"pagination":{"cursor":"abc"}}"#);
        assert!(result.unwrap_err().is_decode());
    }

    #[test]
    fn absent_pagination_yields_an_empty_cursor() {
        let envelope: Envelope<Followed> = Envelope::from_bytes(br#"{"data":[]}"#).unwrap();
        assert_eq!(envelope.cursor(), "");
    }

    #[test]
    fn followed_record_decodes_with_cursor() {
        let body = br#"{
            "data": [{
                "broadcaster_id": "55",
                "broadcaster_login": "foo",
                "broadcaster_name": "Foo",
                "followed_at": "2023-01-01T00:00:00Z"
            }],
            "pagination": {"cursor": "abc123"}
        }"#;
        let envelope: Envelope<Followed> = Envelope::from_bytes(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].broadcaster_id(), "55");
        assert_eq!(envelope.data[0].followed_at().to_rfc3339(), "2023-01-01T00:00:00+00:00");
        assert_eq!(envelope.cursor(), "abc123");
    }
}
