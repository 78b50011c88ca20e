use dioxus::prelude::*;

use crate::nav::PageId;

const TECHNOLOGIES: [&str; 12] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Git",
    "Next.js",
];

// (icon, title, detail)
const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("\u{1F4BB}", "Full Stack Development", "3+ years experience"),
    ("\u{1F9E9}", "Problem Solving", "500+ problems solved"),
    ("\u{1F465}", "Team Leadership", "Led multiple projects"),
    ("\u{1F31F}", "Open Source", "Active contributor"),
];

#[derive(Clone, PartialEq, Props)]
pub struct AboutSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn AboutSection(props: AboutSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "about",
            div { class: "section-header",
                h1 { class: "section-heading gradient-text", "About Me" }
                p { class: "section-subtitle",
                    "Passionate developer with expertise in full-stack development, \
                     problem-solving, and creating innovative digital solutions."
                }
            }

            div { class: "about-grid",
                div {
                    div { class: "card glass",
                        div { class: "info-row", "\u{1F4CD} Chennai, Tamil Nadu, India" }
                        div { class: "info-row", "\u{1F4C5} Available for new opportunities" }
                        div { class: "info-row", "\u{1F393} Computer Science Engineering Student" }

                        button {
                            class: "btn btn-primary btn-block",
                            style: "margin-top: var(--space-6);",
                            onclick: move |_| on_navigate.call(PageId::Resume),
                            "Download Resume"
                        }
                    }

                    div { style: "margin-top: var(--space-8);",
                        h3 { class: "card-title", "Technologies I Work With" }
                        div { class: "tech-badges",
                            for tech in TECHNOLOGIES {
                                span { key: "{tech}", class: "badge", "{tech}" }
                            }
                        }
                    }
                }

                div { class: "achievement-list",
                    for (icon, title, detail) in ACHIEVEMENTS {
                        div { key: "{title}", class: "card glass achievement-card",
                            span { class: "achievement-icon", "{icon}" }
                            div {
                                h4 { "{title}" }
                                p { class: "timeline-detail", "{detail}" }
                            }
                        }
                    }
                }
            }

            div { class: "section-cta",
                h3 { class: "card-title", "Ready to work together?" }
                div { class: "hero-actions", style: "justify-content: center;",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| on_navigate.call(PageId::Contact),
                        "Get In Touch"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| on_navigate.call(PageId::Projects),
                        "View My Work"
                    }
                }
            }
        }
    }
}
