//! Response classification.
//!
//! The only place that turns status codes and body shapes into [`ApiOutcome`] tags.

use palette_core::outcome::{Ack, ApiOutcome};
use palette_core::palette::CreatedPalette;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The `error` field of a JSON body, if any.
pub fn extract_error(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// 2xx bodies must decode as `T`; anything else is a rejection carrying the body's `error`.
pub fn classify_json<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ApiOutcome<T> {
    if !status.is_success() {
        return ApiOutcome::rejected(status.as_u16(), extract_error(body));
    }
    match serde_json::from_slice::<T>(body) {
        Ok(value) => ApiOutcome::Success(value),
        Err(e) => ApiOutcome::transport(format!("invalid response body: {}", e)),
    }
}

/// Status alone decides; the body is only read for an error message.
pub fn classify_ack(status: StatusCode, body: &[u8]) -> ApiOutcome<Ack> {
    if status.is_success() {
        ApiOutcome::Success(Ack)
    } else {
        ApiOutcome::rejected(status.as_u16(), extract_error(body))
    }
}

/// Create is judged by the body: an `id` means the palette exists, whatever the status.
///
/// - `id` present → `Success(Some(id))`
/// - 2xx without `id` → `Success(None)`
/// - 2xx with an unreadable body → `Transport`
/// - non-2xx without `id` → `Rejected` with the body's `error`
pub fn classify_created(status: StatusCode, body: &[u8]) -> ApiOutcome<CreatedPalette> {
    let parsed = serde_json::from_slice::<Value>(body);
    let id = parsed
        .as_ref()
        .ok()
        .and_then(|v| v.get("id"))
        .and_then(Value::as_i64);

    if let Some(id) = id {
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), id, "Create answered non-2xx with an id; treating as created");
        }
        return ApiOutcome::Success(CreatedPalette { id: Some(id) });
    }

    match (status.is_success(), parsed) {
        (true, Ok(_)) => ApiOutcome::Success(CreatedPalette { id: None }),
        (true, Err(e)) => ApiOutcome::transport(format!("invalid response body: {}", e)),
        (false, _) => ApiOutcome::rejected(status.as_u16(), extract_error(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::auth::AuthenticatedUser;
    use palette_core::palette::Palette;

    #[test]
    fn test_created_with_201() {
        let outcome = classify_created(StatusCode::CREATED, br#"{"id":2}"#);
        assert_eq!(outcome, ApiOutcome::Success(CreatedPalette { id: Some(2) }));
    }

    #[test]
    fn test_created_despite_error_status() {
        let outcome = classify_created(StatusCode::BAD_REQUEST, br#"{"id":7,"error":"dup"}"#);
        assert_eq!(outcome, ApiOutcome::Success(CreatedPalette { id: Some(7) }));
    }

    #[test]
    fn test_create_rejected() {
        let outcome = classify_created(StatusCode::BAD_REQUEST, br#"{"error":"Name required"}"#);
        assert_eq!(
            outcome,
            ApiOutcome::Rejected {
                status: 400,
                error: Some("Name required".to_string())
            }
        );

        let empty = classify_created(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(empty, ApiOutcome::Rejected { status: 500, error: None });
    }

    #[test]
    fn test_create_ok_without_id() {
        let outcome = classify_created(StatusCode::OK, br#"{"status":"ok"}"#);
        assert_eq!(outcome, ApiOutcome::Success(CreatedPalette { id: None }));

        let garbled = classify_created(StatusCode::OK, b"<html>");
        assert!(matches!(garbled, ApiOutcome::Transport { .. }));
    }

    #[test]
    fn test_classify_json_list() {
        let outcome: ApiOutcome<Vec<Palette>> =
            classify_json(StatusCode::OK, br#"[{"id":1,"name":"Sunset","colors":[]}]"#);
        assert_eq!(outcome.success().unwrap()[0].name, "Sunset");

        let unauthorized: ApiOutcome<Vec<Palette>> =
            classify_json(StatusCode::UNAUTHORIZED, br#"{"error":"Not logged in"}"#);
        assert_eq!(
            unauthorized.error_message_or("x"),
            "Not logged in".to_string()
        );
    }

    #[test]
    fn test_classify_json_list_with_null_fields_and_float_channels() {
        let body = br##"[{"id":1,"name":"Sunset","colors":[
            {"id":1,"name":null,"hex":null,"rgb":null},
            {"id":2,"name":"Coral","hex":"#FF7F50","rgb":{"r":255.0,"g":127.0,"b":80.0}}]}]"##;
        let outcome: ApiOutcome<Vec<Palette>> = classify_json(StatusCode::OK, body);
        let list = outcome.success().unwrap();
        assert_eq!(list[0].colors[0].rgb_label(), "rgb(?, ?, ?)");
        assert_eq!(list[0].colors[1].rgb_label(), "rgb(255, 127, 80)");
    }

    #[test]
    fn test_classify_json_login_shape() {
        let outcome: ApiOutcome<AuthenticatedUser> =
            classify_json(StatusCode::OK, br#"{"username":"alice","message":"hi"}"#);
        assert_eq!(outcome.success().unwrap().username, "alice");

        let wrong_shape: ApiOutcome<AuthenticatedUser> = classify_json(StatusCode::OK, b"{}");
        assert!(matches!(wrong_shape, ApiOutcome::Transport { .. }));
    }

    #[test]
    fn test_classify_ack() {
        assert!(classify_ack(StatusCode::NO_CONTENT, b"").is_success());
        assert_eq!(
            classify_ack(StatusCode::NOT_FOUND, br#"{"error":"Palette not found"}"#),
            ApiOutcome::Rejected {
                status: 404,
                error: Some("Palette not found".to_string())
            }
        );
    }
}
