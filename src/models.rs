use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create body as received. Fields stay untyped JSON values so that a bad
/// type surfaces as a field error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub genre: Value,
    #[serde(default)]
    pub release_year: Value,
    #[serde(default)]
    pub is_watched: Value,
}

/// A create body that passed every field check.
#[derive(Clone, Debug)]
pub struct NewFilm {
    pub title: String,
    pub genre: String,
    pub release_year: String,
    pub is_watched: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilmsQuery {
    pub genre: Option<String>,
    pub title: Option<String>,
    pub is_watched: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
