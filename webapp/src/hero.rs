use dioxus::prelude::*;

use crate::nav::PageId;

#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "full-height hero",
            // decorative only, no interaction
            div { class: "hero-backdrop",
                for n in 1..=5 {
                    span { key: "{n}", class: "shape shape-{n}" }
                }
            }

            div { class: "hero-grid",
                div {
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "gradient-text", "Shyam Sanjey S" }
                    }
                    p { class: "hero-role", "> Full Stack Developer & Problem Solver" }
                    p { class: "hero-tagline",
                        "Passionate about creating innovative digital experiences with modern \
                         technologies. I specialize in building scalable applications and solving \
                         complex problems through clean, efficient code."
                    }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| on_navigate.call(PageId::Contact),
                            "Let's Connect"
                        }
                        button {
                            class: "btn btn-outline btn-lg",
                            onclick: move |_| on_navigate.call(PageId::Projects),
                            "View Projects"
                        }
                        button {
                            class: "btn btn-ghost btn-lg",
                            onclick: move |_| on_navigate.call(PageId::Resume),
                            "Download CV"
                        }
                    }

                    div { class: "hero-socials",
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
                            href: "https://linkedin.com/in/shyamsanjeys",
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
                }
            }

            div { class: "scroll-cue", "\u{25BE}" }
        }
    }
}
