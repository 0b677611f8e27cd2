use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
    error::FieldError,
    models::{CreateFilmRequest, NewFilm},
};

pub const INVALID_EMAIL: &str = "invalid email";
pub const INVALID_DATA: &str = "invalid data";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

/// Checks every field and collects one error per failing field, so a body
/// with several problems reports all of them in one response.
pub fn validate_new_film(body: &CreateFilmRequest) -> Result<NewFilm, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = non_empty_string(&body.title);
    if title.is_none() {
        errors.push(FieldError { field: "title", message: INVALID_DATA });
    }

    let genre = non_empty_string(&body.genre);
    if genre.is_none() {
        errors.push(FieldError { field: "genre", message: INVALID_DATA });
    }

    let release_year = non_empty_string(&body.release_year);
    if release_year.is_none() {
        errors.push(FieldError { field: "releaseYear", message: INVALID_DATA });
    }

    let is_watched = boolean_like(&body.is_watched);
    if is_watched.is_none() {
        errors.push(FieldError { field: "isWatched", message: INVALID_DATA });
    }

    match (title, genre, release_year, is_watched) {
        (Some(title), Some(genre), Some(release_year), Some(is_watched)) => {
            Ok(NewFilm { title, genre, release_year, is_watched })
        }
        _ => Err(errors),
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Loose boolean coercion: JSON booleans, the strings "true"/"false"/"1"/"0",
/// and the numbers 1/0 all count.
fn boolean_like(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(value: serde_json::Value) -> CreateFilmRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user+tag@mail.example.com"));
        assert!(is_valid_email("  user@example.com  "));
        assert!(is_valid_email("User@Example.COM"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn test_boolean_like_values() {
        assert_eq!(boolean_like(&json!(true)), Some(true));
        assert_eq!(boolean_like(&json!(false)), Some(false));
        assert_eq!(boolean_like(&json!("true")), Some(true));
        assert_eq!(boolean_like(&json!("false")), Some(false));
        assert_eq!(boolean_like(&json!("1")), Some(true));
        assert_eq!(boolean_like(&json!("0")), Some(false));
        assert_eq!(boolean_like(&json!(1)), Some(true));
        assert_eq!(boolean_like(&json!(0)), Some(false));

        assert_eq!(boolean_like(&json!("yes")), None);
        assert_eq!(boolean_like(&json!(2)), None);
        assert_eq!(boolean_like(&json!(null)), None);
        assert_eq!(boolean_like(&json!({})), None);
    }

    #[test]
    fn test_validate_new_film_ok() {
        let film = validate_new_film(&body(json!({
            "title": "Dune",
            "genre": "Sci-Fi",
            "releaseYear": "2021",
            "isWatched": "true",
        })))
        .unwrap();

        assert_eq!(film.title, "Dune");
        assert_eq!(film.genre, "Sci-Fi");
        assert_eq!(film.release_year, "2021");
        assert!(film.is_watched);
    }

    #[test]
    fn test_validate_new_film_collects_all_field_errors() {
        let errors = validate_new_film(&body(json!({
            "title": "",
            "isWatched": "maybe",
        })))
        .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "genre", "releaseYear", "isWatched"]);
        assert!(errors.iter().all(|e| e.message == INVALID_DATA));
    }

    #[test]
    fn test_validate_new_film_rejects_non_string_fields() {
        let errors = validate_new_film(&body(json!({
            "title": 1984,
            "genre": "Sci-Fi",
            "releaseYear": "1984",
            "isWatched": false,
        })))
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }
}
