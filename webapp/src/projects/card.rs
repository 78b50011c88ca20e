use dioxus::prelude::*;

use api::repo::Repository;

use crate::common::updated_label;

const TOPIC_LIMIT: usize = 3;

#[derive(Clone, PartialEq, Props)]
pub struct RepoCardProps {
    repo: Repository,
}

#[component]
pub fn RepoCard(props: RepoCardProps) -> Element {
    let repo = props.repo;

    let title = display_name(&repo.name);
    let updated = updated_label(&repo.updated_at);
    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| String::from("No description available"));
    let homepage = repo.homepage.clone();
    let swatch = repo.language.as_deref().map(language_color).unwrap_or_default();
    let extra_topics = repo.topics.len().saturating_sub(TOPIC_LIMIT);

    rsx! {
        div { class: "card glass project-card",
            div { class: "project-card-header",
                h3 { class: "project-title", "{title}" }
                div { class: "project-links",
                    a {
                        class: "icon-link",
                        href: "{repo.html_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Source on GitHub",
                        "\u{2442}"
                    }
                    if let Some(homepage) = homepage {
                        a {
                            class: "icon-link",
                            href: "{homepage}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Live site",
                            "\u{2197}"
                        }
                    }
                }
            }

            p { class: "project-description", "{description}" }

            div { class: "project-stats",
                span { "\u{2605} {repo.stargazers_count}" }
                span { "\u{2442} {repo.forks_count}" }
                span { "Updated {updated}" }
            }

            if let Some(language) = repo.language.clone() {
                div { class: "project-language",
                    span {
                        class: "language-dot",
                        style: "background-color: {swatch};",
                    }
                    span { "{language}" }
                }
            }

            if !repo.topics.is_empty() {
                div { class: "project-topics",
                    for topic in repo.topics.iter().take(TOPIC_LIMIT) {
                        span { key: "{topic}", class: "badge", "{topic}" }
                    }
                    if extra_topics > 0 {
                        span { class: "badge badge-outline", "+{extra_topics}" }
                    }
                }
            }
        }
    }
}

// "my-fork-app" -> "My Fork App"
fn display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f7df1e",
        "TypeScript" => "#3178c6",
        "Python" => "#3776ab",
        "Java" => "#ed8b00",
        "C++" => "#00599c",
        "HTML" => "#e34c26",
        "CSS" => "#1572b6",
        "React" => "#61dafb",
        "Vue" => "#4fc08d",
        "Angular" => "#dd0031",
        _ => "#6b7280",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_hyphenated_repos() {
        assert_eq!(display_name("my-fork-app"), "My Fork App");
        assert_eq!(display_name("portfolio"), "Portfolio");
    }

    #[test]
    fn unknown_languages_fall_back_to_neutral() {
        assert_eq!(language_color("COBOL"), "#6b7280");
        assert_eq!(language_color("TypeScript"), "#3178c6");
    }
}
