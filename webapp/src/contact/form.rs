use dioxus::prelude::*;

use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use api::contact::{
    ContactErrors, ContactMessage, SendMessageReq, Submission, send_message, validate,
};

// how long the confirmation panel stays up before the form resets
const RESET_DELAY_MS: u32 = 3_000;

#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactMessage::default);
    let mut errors = use_signal(ContactErrors::default);
    let mut submission = use_signal(Submission::default);

    // transport failures land here; field errors never do
    let mut submit_notice: Signal<Option<String>> = use_signal(|| None);

    // idle -> submitting -> submitted -> (after the reset delay) idle again,
    // or idle with field errors when validation fails.  the handler task is
    // scoped to this component, so unmounting drops the whole sequence.
    let submit = move |_event: FormEvent| async move {
        let message = form();

        let found = validate(&message);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        errors.set(ContactErrors::default());
        submit_notice.set(None);
        submission.set(Submission::Submitting);

        match send_message(&SendMessageReq { message }).await {
            Ok(_) => {
                submission.set(Submission::Submitted);

                TimeoutFuture::new(RESET_DELAY_MS).await;
                form.set(ContactMessage::default());
                submission.set(Submission::Idle);
            }
            Err(err) => {
                warn!("message submission failed: {err}");
                submission.set(Submission::Idle);
                submit_notice.set(Some(format!(
                    "Failed to send message: {err}. Please try again or email me directly."
                )));
            }
        }
    };

    rsx! {
        div { class: "card glass",
            h2 { class: "card-title", "Send a Message" }

            if submission().is_submitted() {
                div { class: "form-success",
                    div { class: "form-success-mark", "\u{2713}" }
                    h3 { "Message Sent Successfully!" }
                    p { class: "timeline-detail",
                        "Thank you for reaching out. I'll get back to you within 24 hours."
                    }
                }
            } else {
                form { class: "contact-form", onsubmit: submit,
                    if let Some(notice) = submit_notice() {
                        p { class: "form-notice", "{notice}" }
                    }

                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "name", "Name *" }
                            input {
                                id: "name",
                                class: if errors().name.is_some() { "form-input form-input-invalid" } else { "form-input" },
                                placeholder: "Your full name",
                                value: "{form().name}",
                                oninput: move |event| {
                                    form.with_mut(|f| f.name = event.value());
                                    errors.with_mut(|e| e.name = None);
                                },
                            }
                            if let Some(error) = errors().name {
                                p { class: "form-error", "{error}" }
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "email", "Email *" }
                            input {
                                id: "email",
                                r#type: "email",
                                class: if errors().email.is_some() { "form-input form-input-invalid" } else { "form-input" },
                                placeholder: "your.email@example.com",
                                value: "{form().email}",
                                oninput: move |event| {
                                    form.with_mut(|f| f.email = event.value());
                                    errors.with_mut(|e| e.email = None);
                                },
                            }
                            if let Some(error) = errors().email {
                                p { class: "form-error", "{error}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "subject", "Subject *" }
                        input {
                            id: "subject",
                            class: if errors().subject.is_some() { "form-input form-input-invalid" } else { "form-input" },
                            placeholder: "What would you like to discuss?",
                            value: "{form().subject}",
                            oninput: move |event| {
                                form.with_mut(|f| f.subject = event.value());
                                errors.with_mut(|e| e.subject = None);
                            },
                        }
                        if let Some(error) = errors().subject {
                            p { class: "form-error", "{error}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "message", "Message *" }
                        textarea {
                            id: "message",
                            class: if errors().message.is_some() { "form-input form-input-invalid" } else { "form-input" },
                            placeholder: "Tell me about your project or inquiry...",
                            value: "{form().message}",
                            oninput: move |event| {
                                form.with_mut(|f| f.message = event.value());
                                errors.with_mut(|e| e.message = None);
                            },
                        }
                        if let Some(error) = errors().message {
                            p { class: "form-error", "{error}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submission().is_submitting(),
                        if submission().is_submitting() {
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
