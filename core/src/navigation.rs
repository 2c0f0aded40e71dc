//! Carrying a physician record from the list page to the update page.
//!
//! The edit action navigates to `{update_page}?medico={json}` with the JSON
//! URL-encoded; the update page decodes the same parameter on load.

use serde::Deserialize;
use thiserror::Error;

use crate::types::Medico;

/// Query parameter holding the JSON record.
pub const RECORD_PARAM: &str = "medico";

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("URL has no query string")]
    MissingQuery,

    #[error("query has no `medico` parameter")]
    MissingRecord,

    #[error("query string is malformed: {0}")]
    MalformedQuery(String),

    #[error("record is not valid JSON: {0}")]
    MalformedRecord(String),

    #[error("record could not be encoded: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct EditQuery {
    medico: Option<String>,
}

/// URL of the update page pre-filled with `medico`.
pub fn edit_href(update_page: &str, medico: &Medico) -> Result<String, NavigationError> {
    let json = serde_json::to_string(medico).map_err(|e| NavigationError::Encode(e.to_string()))?;
    let query = serde_urlencoded::to_string([(RECORD_PARAM, json)])
        .map_err(|e| NavigationError::Encode(e.to_string()))?;
    Ok(format!("{update_page}?{query}"))
}

/// Decode the record carried by an edit URL. Accepts absolute URLs and
/// relative hrefs; any fragment is ignored.
pub fn parse_edit_href(url: &str) -> Result<Medico, NavigationError> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let (_, query) = without_fragment
        .split_once('?')
        .ok_or(NavigationError::MissingQuery)?;
    let params: EditQuery =
        serde_urlencoded::from_str(query).map_err(|e| NavigationError::MalformedQuery(e.to_string()))?;
    let json = params.medico.ok_or(NavigationError::MissingRecord)?;
    serde_json::from_str(&json).map_err(|e| NavigationError::MalformedRecord(e.to_string()))
}
