use dioxus::prelude::*;

use crate::nav::PageId;

mod form;
use form::ContactForm;

#[derive(Clone, PartialEq, Props)]
pub struct ContactSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "contact",
            div { class: "section-header",
                h1 { class: "section-heading gradient-text", "Let's Connect" }
                p { class: "section-subtitle",
                    "Have a project in mind or want to discuss opportunities? I'd love to hear \
                     from you. Let's create something amazing together."
                }
            }

            div { class: "contact-grid",
                ContactForm {}

                div { class: "contact-aside",
                    div { class: "card glass",
                        h2 { class: "card-title", "Get in Touch" }
                        div { class: "info-row",
                            div {
                                p { class: "info-label", "Email" }
                                a { href: "mailto:shyamsanjeys@gmail.com", "shyamsanjeys@gmail.com" }
                            }
                        }
                        div { class: "info-row",
                            div {
                                p { class: "info-label", "Phone" }
                                a { href: "tel:+919384463433", "+91 9384463433" }
                            }
                        }
                        div { class: "info-row",
                            div {
                                p { class: "info-label", "Location" }
                                p { "Chennai, Tamil Nadu, India" }
                            }
                        }
                    }

                    div { class: "card glass",
                        h2 { class: "card-title", "Connect With Me" }
                        div { class: "contact-socials",
                            a {
                                class: "social-link",
                                href: "https://github.com/ShyamSanjeyS",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                            a {
                                class: "social-link",
                                href: "https://linkedin.com/in/shyam-sanjey-s",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "LinkedIn"
                            }
                        }
                    }

                    div { class: "card glass",
                        div { class: "quick-actions",
                            button {
                                class: "btn btn-outline btn-block",
                                onclick: move |_| on_navigate.call(PageId::Resume),
                                "View My Resume"
                            }
                            button {
                                class: "btn btn-outline btn-block",
                                onclick: move |_| on_navigate.call(PageId::Projects),
                                "Browse My Projects"
                            }
                        }
                    }
                }
            }
        }
    }
}
