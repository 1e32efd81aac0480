//! Game search and resolution
//!
//! Turns a free-text query or an explicit catalog ID into game records.
//! The autocomplete endpoint's relevance order is trusted verbatim;
//! callers that need exactly one game take the first element.

use crate::api::client::Client;
use crate::api::types::{ApiResponse, GameRecord};
use crate::error::{Error, Result};

/// Search the catalog with free-text terms.
///
/// Terms are joined with single spaces and percent-encoded exactly once.
/// A `success: false` envelope means zero results, not an error. The
/// `data` payload may be a single object or an array; both normalize to
/// an in-order `Vec`.
pub fn resolve_by_query(client: &Client, terms: &[String]) -> Result<Vec<GameRecord>> {
    resolve_by_query_raw(client, terms).map(|(records, _)| records)
}

/// Like [`resolve_by_query`] but also hands back the raw envelope, for
/// the `search` verb's result.json side file.
pub fn resolve_by_query_raw(
    client: &Client,
    terms: &[String],
) -> Result<(Vec<GameRecord>, serde_json::Value)> {
    if terms.is_empty() {
        return Err(Error::Usage(
            "Please specify a search query or id".to_string(),
        ));
    }

    let query = terms.join(" ");
    let path = format!("search/autocomplete/{}", urlencoding::encode(&query));
    log::debug!("Auto search: {}", path);

    let raw = client.get_json(&path, &[])?;
    normalize_response(raw)
}

/// Look a game up by its catalog ID.
///
/// An unknown ID surfaces as the HTTP client's 404 error.
pub fn resolve_by_id(client: &Client, game_id: u64) -> Result<GameRecord> {
    let path = format!("games/id/{}", game_id);
    log::debug!("Retrieve by ID: {}", path);

    let raw = client.get_json(&path, &[])?;
    let (records, _) = normalize_response(raw)?;
    records.into_iter().next().ok_or_else(|| Error::Remote {
        status: 404,
        message: format!("No game with id {game_id}"),
    })
}

/// Normalize an API envelope into a list of game records.
fn normalize_response(raw: serde_json::Value) -> Result<(Vec<GameRecord>, serde_json::Value)> {
    let envelope: ApiResponse = serde_json::from_value(raw.clone())?;

    if !envelope.success {
        log::debug!("API reported success=false, treating as zero results");
        return Ok((Vec::new(), raw));
    }

    let records = if envelope.data.is_array() {
        serde_json::from_value(envelope.data)?
    } else {
        vec![serde_json::from_value(envelope.data)?]
    };

    Ok((records, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    /// Client pointing at a port nothing listens on; any request through
    /// it would fail loudly, proving validation happens first.
    fn unreachable_client() -> Client {
        Client::new(Config::new("test-key", "http://127.0.0.1:1")).unwrap()
    }

    #[test]
    fn test_empty_query_is_usage_error_without_network() {
        let client = unreachable_client();
        let err = resolve_by_query(&client, &[]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_success_false_normalizes_to_empty() {
        let (records, _) = normalize_response(json!({"success": false})).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_single_object_normalizes_to_one_element() {
        let raw = json!({
            "success": true,
            "data": {"id": 2254, "name": "The Witcher 3", "verified": true}
        });
        let (records, _) = normalize_response(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2254);
    }

    #[test]
    fn test_array_preserves_server_order() {
        let raw = json!({
            "success": true,
            "data": [
                {"id": 1, "name": "Doom Eternal"},
                {"id": 2, "name": "Doom"}
            ]
        });
        let (records, _) = normalize_response(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Doom Eternal");
        assert_eq!(records[1].name, "Doom");
    }

    #[test]
    fn test_query_encodes_spaces_once() {
        let terms = ["Half Life 2".to_string(), "Episode One".to_string()];
        let query = terms.join(" ");
        let encoded = urlencoding::encode(&query);
        assert_eq!(encoded, "Half%20Life%202%20Episode%20One");
        // No double encoding of the percent signs
        assert!(!encoded.contains("%25"));
    }
}
