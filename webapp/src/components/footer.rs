use dioxus::prelude::*;

use crate::nav::PageId;

const QUICK_LINKS: [PageId; 5] = [
    PageId::About,
    PageId::Projects,
    PageId::Skills,
    PageId::Contact,
    PageId::Resume,
];

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let on_navigate = props.on_navigate;

    let scroll_to_top = move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    rsx! {
        footer { class: "app-footer",
            div { class: "footer-grid",
                div {
                    h3 { class: "footer-heading gradient-text", "Shyam Sanjey S" }
                    p { class: "footer-blurb",
                        "Full Stack Developer passionate about creating innovative web solutions."
                    }
                }

                div {
                    h3 { class: "footer-heading", "Quick Links" }
                    div { class: "footer-links",
                        for page in QUICK_LINKS {
                            button {
                                key: "{page.id()}",
                                class: "footer-link",
                                onclick: move |_| on_navigate.call(page),
                                "{page.label()}"
                            }
                        }
                    }
                }

                div {
                    h3 { class: "footer-heading", "Connect" }
                    div { class: "footer-socials",
                        a {
                            class: "social-link",
                            href: "https://github.com/ShyamSanjeyS",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "GitHub",
                            "GitHub"
                        }
                        a {
                            class: "social-link",
                            href: "https://linkedin.com/in/shyam-sanjey-s",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "LinkedIn",
                            "LinkedIn"
                        }
                        a {
                            class: "social-link",
                            href: "mailto:shyamsanjeys@gmail.com",
                            aria_label: "Email",
                            "Email"
                        }
                    }
                    button { class: "btn btn-ghost", onclick: scroll_to_top, "\u{2191} Back to top" }
                }
            }

            div { class: "footer-bottom",
                p { "Made with \u{2764} by Shyam Sanjey S" }
            }
        }
    }
}
