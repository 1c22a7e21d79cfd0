use serde::Serialize;
use thiserror::Error;

/// Third-party relay that forwards submissions to an inbox. Any 2xx response
/// counts as delivered.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/williamwritescode";

/// How long a terminal status stays on screen before reverting to `Idle`.
pub const STATUS_RESET_MS: f64 = 5_000.0;

/// The four free-text fields posted as the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Lifecycle of one submission attempt. Always exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Terminal statuses auto-revert to `Idle` after `STATUS_RESET_MS`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }

    /// Whether a settled submission should wipe the form fields. Only a
    /// delivered message clears them; a failed one keeps what was typed.
    pub fn clears_fields(self) -> bool {
        self == SubmitStatus::Success
    }

    /// The status once the on-screen reset delay elapses. Only a settled
    /// submission reverts to `Idle`; an in-flight one keeps its status.
    pub fn after_reset(self) -> SubmitStatus {
        if self.is_terminal() {
            SubmitStatus::Idle
        } else {
            self
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("relay returned status {0}")]
    Status(u16),
}

/// Map the outcome of the relay request to the next status.
pub fn status_after(result: &Result<(), ContactError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Success,
        Err(_) => SubmitStatus::Error,
    }
}

/// Fire-and-forget POST of the form to the relay endpoint. No retry; the
/// caller maps the result with `status_after` and moves on.
#[cfg(feature = "hydrate")]
pub async fn send(form: &ContactForm) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let response = Request::post(RELAY_ENDPOINT)
        .header("Accept", "application/json")
        .json(form)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_serializes_the_four_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice site".into(),
        };
        let json = serde_json::to_value(&form).expect("form should serialize");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["message"], "Nice site");
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn ok_maps_to_success_and_errors_map_to_error() {
        assert_eq!(status_after(&Ok(())), SubmitStatus::Success);
        assert_eq!(
            status_after(&Err(ContactError::Network("offline".into()))),
            SubmitStatus::Error
        );
        assert_eq!(
            status_after(&Err(ContactError::Status(500))),
            SubmitStatus::Error
        );
    }

    #[test]
    fn only_success_and_error_are_terminal() {
        assert!(!SubmitStatus::Idle.is_terminal());
        assert!(!SubmitStatus::Submitting.is_terminal());
        assert!(SubmitStatus::Success.is_terminal());
        assert!(SubmitStatus::Error.is_terminal());
    }

    #[test]
    fn delivery_clears_fields_and_failure_preserves_them() {
        assert!(status_after(&Ok(())).clears_fields());
        assert!(!status_after(&Err(ContactError::Status(500))).clears_fields());
        assert!(!status_after(&Err(ContactError::Network("offline".into()))).clears_fields());
        assert!(!SubmitStatus::Idle.clears_fields());
        assert!(!SubmitStatus::Submitting.clears_fields());
    }

    #[test]
    fn reset_reverts_settled_statuses_only() {
        assert_eq!(SubmitStatus::Success.after_reset(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Error.after_reset(), SubmitStatus::Idle);
        // a stale reset firing mid-request must not re-enable the form
        assert_eq!(
            SubmitStatus::Submitting.after_reset(),
            SubmitStatus::Submitting
        );
        assert_eq!(SubmitStatus::Idle.after_reset(), SubmitStatus::Idle);
    }

    #[test]
    fn error_messages_name_the_failure() {
        let net = ContactError::Network("fetch aborted".into());
        assert!(net.to_string().contains("fetch aborted"));
        let status = ContactError::Status(422);
        assert!(status.to_string().contains("422"));
    }
}
