use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the remote store facade. `Conflict` and `SchemaShape`
/// are the two classes the board reacts to specially: a conflict keeps the
/// user's draft open with a double-booking message, a schema-shape error
/// triggers the unjoined fallback query inside the facade and never reaches
/// the user as a failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("This staff member already has a booking in this time slot")]
    Conflict,
    #[error("joined query not supported by the remote schema: {0}")]
    SchemaShape(String),
    #[error("remote store error ({status}): {message}")]
    Remote { status: u16, message: String },
    #[error("store is not configured: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Http(String),
}

impl StoreError {
    pub fn is_schema_shape(&self) -> bool {
        matches!(self, StoreError::SchemaShape(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict)
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http(err.to_string())
    }
}

/// Retry policy for relation-embedding selects: only a schema-shape
/// rejection of the first attempt warrants the unjoined retry. Successes,
/// conflicts and other remote failures propagate unchanged.
pub fn retry_unjoined<T>(first: &Result<T, StoreError>) -> bool {
    matches!(first, Err(err) if err.is_schema_shape())
}

/// Structured error body returned by the store's REST layer.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ErrorBody {
    fn message_text(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .unwrap_or_else(|| "unknown store error".to_string())
    }
}

/// Classify a failed store response. Exclusion-constraint hits (code 23P01,
/// or any message mentioning overlapping intervals) become `Conflict`;
/// missing-relationship shapes (HTTP 400, PGRST* codes, or the "could not
/// find ... relationship" wording) become `SchemaShape`; everything else is
/// passed through as `Remote`.
pub fn classify(status: u16, body: &ErrorBody) -> StoreError {
    let message = body.message_text();
    let lower = message.to_lowercase();
    let code = body.code.as_deref().unwrap_or("");

    if code == "23P01" || lower.contains("overlapping") {
        return StoreError::Conflict;
    }

    if status == 400
        || code.starts_with("PGRST")
        || lower.contains("relationship")
        || lower.contains("could not find")
    {
        return StoreError::SchemaShape(message);
    }

    StoreError::Remote { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str, code: &str) -> ErrorBody {
        ErrorBody {
            message: Some(message.to_string()),
            code: if code.is_empty() {
                None
            } else {
                Some(code.to_string())
            },
            details: None,
            hint: None,
        }
    }

    #[test]
    fn exclusion_constraint_maps_to_conflict() {
        let err = classify(
            409,
            &body(
                "conflicting key value violates exclusion constraint \"bookings_no_overlapping\"",
                "23P01",
            ),
        );
        assert!(err.is_conflict());
        // message wording is the user-facing double-booking text
        assert!(err.to_string().contains("already has a booking"));
    }

    #[test]
    fn overlapping_message_without_code_still_maps_to_conflict() {
        let err = classify(409, &body("overlapping booking exists", ""));
        assert!(err.is_conflict());
    }

    #[test]
    fn missing_relationship_maps_to_schema_shape() {
        let err = classify(
            400,
            &body(
                "Could not find a relationship between 'bookings' and 'customers'",
                "PGRST200",
            ),
        );
        assert!(err.is_schema_shape());
    }

    #[test]
    fn any_400_is_treated_as_schema_shape() {
        assert!(classify(400, &body("bad select parameter", "")).is_schema_shape());
    }

    #[test]
    fn pgrst_code_without_400_is_schema_shape() {
        assert!(classify(404, &body("missing embed", "PGRST100")).is_schema_shape());
    }

    #[test]
    fn other_failures_pass_through_as_remote() {
        let err = classify(403, &body("permission denied for table bookings", "42501"));
        match err {
            StoreError::Remote { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("permission denied"));
            }
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[test]
    fn only_schema_shape_triggers_the_unjoined_retry() {
        let schema: Result<Vec<u8>, StoreError> =
            Err(StoreError::SchemaShape("missing relationship".to_string()));
        assert!(retry_unjoined(&schema));

        // a conflict must reach the caller, not be papered over by a retry
        let conflict: Result<Vec<u8>, StoreError> = Err(StoreError::Conflict);
        assert!(!retry_unjoined(&conflict));

        let remote: Result<Vec<u8>, StoreError> = Err(StoreError::Remote {
            status: 500,
            message: "internal".to_string(),
        });
        assert!(!retry_unjoined(&remote));

        let ok: Result<Vec<u8>, StoreError> = Ok(vec![1]);
        assert!(!retry_unjoined(&ok));
    }

    #[test]
    fn empty_body_falls_back_to_placeholder_message() {
        let err = classify(500, &ErrorBody::default());
        assert_eq!(
            err.to_string(),
            "remote store error (500): unknown store error"
        );
    }
}
