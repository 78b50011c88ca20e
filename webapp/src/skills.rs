use dioxus::prelude::*;

use crate::nav::PageId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Mobile,
}

impl SkillCategory {
    const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Mobile,
    ];

    fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
            SkillCategory::Mobile => "Mobile",
        }
    }
}

// (name, proficiency 0-100, category, swatch color)
const SKILLS: [(&str, u8, SkillCategory, &str); 17] = [
    ("React.js", 90, SkillCategory::Frontend, "#61dafb"),
    ("JavaScript", 92, SkillCategory::Frontend, "#f7df1e"),
    ("TypeScript", 85, SkillCategory::Frontend, "#3178c6"),
    ("HTML/CSS", 95, SkillCategory::Frontend, "#e34c26"),
    ("Tailwind CSS", 90, SkillCategory::Frontend, "#06b6d4"),
    ("Next.js", 80, SkillCategory::Frontend, "#000000"),
    ("Node.js", 85, SkillCategory::Backend, "#339933"),
    ("Python", 88, SkillCategory::Backend, "#3776ab"),
    ("Java", 82, SkillCategory::Backend, "#ed8b00"),
    ("Express.js", 80, SkillCategory::Backend, "#000000"),
    ("MongoDB", 85, SkillCategory::Database, "#47a248"),
    ("MySQL", 80, SkillCategory::Database, "#4479a1"),
    ("PostgreSQL", 75, SkillCategory::Database, "#336791"),
    ("Git/GitHub", 90, SkillCategory::Tools, "#f05032"),
    ("Docker", 70, SkillCategory::Tools, "#2496ed"),
    ("AWS", 65, SkillCategory::Tools, "#ff9900"),
    ("Mobile Dev", 75, SkillCategory::Mobile, "#a4c639"),
];

fn category_count(category: SkillCategory) -> usize {
    SKILLS.iter().filter(|skill| skill.2 == category).count()
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillsSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn SkillsSection(props: SkillsSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    // None shows every category
    let mut active: Signal<Option<SkillCategory>> = use_signal(|| None);

    let shown = SKILLS
        .iter()
        .copied()
        .filter(|skill| active().is_none_or(|category| skill.2 == category));

    rsx! {
        section { class: "skills",
            div { class: "section-header",
                h1 { class: "section-heading gradient-text", "My Skills" }
                p { class: "section-subtitle",
                    "A comprehensive overview of my technical expertise and proficiency levels \
                     across various technologies and tools."
                }
            }

            div { class: "skill-filters",
                button {
                    class: if active().is_none() { "btn btn-primary" } else { "btn btn-outline" },
                    onclick: move |_| active.set(None),
                    "All Skills ({SKILLS.len()})"
                }
                for category in SkillCategory::ALL {
                    button {
                        key: "{category.label()}",
                        class: if active() == Some(category) { "btn btn-primary" } else { "btn btn-outline" },
                        onclick: move |_| active.set(Some(category)),
                        "{category.label()} ({category_count(category)})"
                    }
                }
            }

            div { class: "skills-grid",
                for (name, level, category, color) in shown {
                    div { key: "{name}", class: "card glass",
                        div { class: "skill-card-top",
                            div {
                                div { class: "skill-name", "{name}" }
                                div { class: "skill-category", "{category.label()}" }
                            }
                            span { class: "skill-level", "{level}%" }
                        }
                        div { class: "skill-bar",
                            div {
                                class: "skill-bar-fill",
                                style: "width: {level}%; background-color: {color};",
                            }
                        }
                    }
                }
            }

            div { class: "section-cta",
                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| on_navigate.call(PageId::Projects),
                    "See These Skills in Action"
                }
            }
        }
    }
}
