use std::sync::LazyLock;

use gloo_timers::future::TimeoutFuture;
use regex::Regex;
use serde::{Deserialize, Serialize};

// structs and types

pub const MIN_MESSAGE_CHARS: usize = 10;

// minimal shape check, not full address validation: some non-whitespace,
// non-@ text, an @, more of the same, a dot, more of the same
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// per-field validation results; None means the field passed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

// check every rule independently so the form can flag all fields at once
pub fn validate(message: &ContactMessage) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if message.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if message.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !EMAIL_SHAPE.is_match(&message.email) {
        errors.email = Some("Please enter a valid email");
    }

    if message.subject.trim().is_empty() {
        errors.subject = Some("Subject is required");
    }

    let body = message.message.trim();
    if body.is_empty() {
        errors.message = Some("Message is required");
    } else if body.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some("Message must be at least 10 characters");
    }

    errors
}

// submission lifecycle; a tagged state instead of parallel flags, so the
// submitting and submitted conditions can never overlap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl Submission {
    pub fn is_submitting(self) -> bool {
        self == Submission::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == Submission::Submitted
    }
}

// messages

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageReq {
    pub message: ContactMessage,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageResp {}

// round-trip time of a plausible mail relay, in milliseconds
pub const SEND_MESSAGE_DELAY_MS: u32 = 2_000;

// stand-in transport: waits as long as a real relay call would, then reports
// success.  a delivery backend replaces the timer with a post to its endpoint
// and surfaces transport failures through the Err arm.
pub async fn send_message(_req: &SendMessageReq) -> anyhow::Result<SendMessageResp> {
    TimeoutFuture::new(SEND_MESSAGE_DELAY_MS).await;

    Ok(SendMessageResp {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: body.to_owned(),
        }
    }

    #[test]
    fn empty_form_fails_every_field() {
        let errors = validate(&message("", "", "", ""));

        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.subject, Some("Subject is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&message("  ", "\t", " ", "   "));

        assert!(!errors.is_empty());
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn short_message_is_the_only_error() {
        let errors = validate(&message("A", "a@b.co", "S", "short"));

        assert_eq!(errors.name, None);
        assert_eq!(errors.email, None);
        assert_eq!(errors.subject, None);
        assert_eq!(errors.message, Some("Message must be at least 10 characters"));
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate(&message("A", "not-an-email", "S", "1234567890"));

        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some("Please enter a valid email"));
        assert_eq!(errors.subject, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn email_shape_requires_at_and_dot() {
        for bad in ["a@b", "a b@c.de", "a@b@c.de", "@b.co", "a@.co"] {
            let errors = validate(&message("A", bad, "S", "1234567890"));
            assert_eq!(errors.email, Some("Please enter a valid email"), "{bad}");
        }

        for good in ["a@b.co", "first.last@example.org", "x@y.z"] {
            let errors = validate(&message("A", good, "S", "1234567890"));
            assert_eq!(errors.email, None, "{good}");
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&message(
            "Shyam",
            "shyamsanjeys@gmail.com",
            "Project inquiry",
            "I would like to discuss a project.",
        ));

        assert!(errors.is_empty());
    }

    #[test]
    fn submission_states_are_mutually_exclusive() {
        assert_eq!(Submission::default(), Submission::Idle);

        for state in [Submission::Idle, Submission::Submitting, Submission::Submitted] {
            assert!(!(state.is_submitting() && state.is_submitted()));
        }
    }

    #[test]
    fn message_length_counts_trimmed_chars() {
        // nine characters plus padding still fails, ten passes
        let errors = validate(&message("A", "a@b.co", "S", "  123456789  "));
        assert_eq!(errors.message, Some("Message must be at least 10 characters"));

        let errors = validate(&message("A", "a@b.co", "S", "  1234567890  "));
        assert_eq!(errors.message, None);
    }
}
