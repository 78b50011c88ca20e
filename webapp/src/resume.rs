use dioxus::prelude::*;

use crate::nav::PageId;

const RESUME_URL: &str =
    "https://drive.google.com/file/d/10PJLBDx9AsF1Fa6hsPQHvTo88V7UwETI/view?usp=sharing";

// (title, company, period, location, detail)
const EXPERIENCES: [(&str, &str, &str, &str, &str); 2] = [
    (
        "Full Stack Developer",
        "Personal Projects",
        "2023 - Present",
        "Chennai, India",
        "Developed multiple web applications using React, Node.js, and modern technologies. \
         Focused on creating responsive, user-friendly interfaces and robust backend systems.",
    ),
    (
        "Frontend Developer",
        "Freelance",
        "2022 - 2023",
        "Remote",
        "Created responsive web applications and landing pages for various clients. \
         Specialized in React.js and modern CSS frameworks.",
    ),
];

// (degree, institution, period, detail)
const EDUCATION: [(&str, &str, &str, &str); 1] = [(
    "Bachelor of Engineering, Computer Science",
    "University, Chennai, India",
    "2020 - 2024",
    "Relevant coursework in Data Structures, Algorithms, Database Systems",
)];

// (title, detail)
const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Open Source Contributor",
        "Active contributor to various open-source projects on GitHub",
    ),
    (
        "Problem Solver",
        "Solved 200+ coding problems across various platforms",
    ),
    (
        "Full Stack Projects",
        "Built 15+ complete web applications from scratch",
    ),
];

const SKILL_GROUPS: [(&str, &[&str]); 4] = [
    (
        "Frontend",
        &["React.js", "JavaScript", "TypeScript", "HTML5", "CSS3", "Tailwind CSS"],
    ),
    ("Backend", &["Node.js", "Express.js", "Python", "Java"]),
    ("Database", &["MongoDB", "MySQL", "PostgreSQL"]),
    ("Tools", &["Git", "Docker", "AWS", "VS Code"]),
];

#[derive(Clone, PartialEq, Props)]
pub struct ResumeSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn ResumeSection(props: ResumeSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "resume",
            div { class: "section-header",
                h1 { class: "section-heading gradient-text", "My Resume" }
                p { class: "section-subtitle",
                    "A comprehensive overview of my professional journey, skills, and \
                     achievements in software development and technology."
                }
            }

            div { class: "resume-actions",
                a {
                    class: "btn btn-primary btn-lg",
                    href: RESUME_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Full Resume"
                }
                a {
                    class: "btn btn-outline btn-lg",
                    href: RESUME_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Download PDF"
                }
            }

            div { class: "resume-grid",
                div { class: "resume-column",
                    div { class: "card glass",
                        h2 { class: "card-title", "Experience" }
                        for (title, company, period, location, detail) in EXPERIENCES {
                            div { key: "{title}", class: "timeline-entry",
                                h4 { "{title}" }
                                p { class: "timeline-meta", "{company} \u{2022} {period} \u{2022} {location}" }
                                p { class: "timeline-detail", "{detail}" }
                            }
                        }
                    }

                    div { class: "card glass",
                        h2 { class: "card-title", "Education" }
                        for (degree, institution, period, detail) in EDUCATION {
                            div { key: "{degree}", class: "timeline-entry",
                                h4 { "{degree}" }
                                p { class: "timeline-meta", "{institution} \u{2022} {period}" }
                                p { class: "timeline-detail", "{detail}" }
                            }
                        }
                    }
                }

                div { class: "resume-column",
                    div { class: "card glass",
                        h2 { class: "card-title", "Highlights" }
                        for (title, detail) in HIGHLIGHTS {
                            div { key: "{title}", class: "timeline-entry",
                                h4 { "{title}" }
                                p { class: "timeline-detail", "{detail}" }
                            }
                        }
                    }

                    div { class: "card glass",
                        h2 { class: "card-title", "Skills" }
                        for (group, entries) in SKILL_GROUPS {
                            div { key: "{group}", class: "skill-group",
                                div { class: "skill-group-name", "{group}" }
                                div { class: "tech-badges",
                                    for entry in entries {
                                        span { key: "{entry}", class: "badge", "{entry}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "section-cta",
                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| on_navigate.call(PageId::Contact),
                    "Let's Talk"
                }
            }
        }
    }
}
