use anyhow;

use dioxus::prelude::*;
use tracing::warn;

use api::repo::{Repository, featured_repositories, list_repositories};

use crate::nav::PageId;

mod card;
use card::RepoCard;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectsSectionProps {
    on_navigate: EventHandler<PageId>,
}

#[component]
pub fn ProjectsSection(props: ProjectsSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    // one request per visit; the resource (and any in-flight request) is
    // dropped when the section unmounts, so a late response cannot land
    let repos: Resource<anyhow::Result<Vec<Repository>>> = use_resource(|| async {
        match list_repositories().await {
            Ok(list) => Ok(featured_repositories(list)),
            Err(err) => {
                warn!("repository listing failed: {err}");
                Err(err)
            }
        }
    });

    rsx! {
        section { class: "projects",
            match &*repos.read() {
                Some(Ok(repos)) => rsx! {
                    div { class: "section-header",
                        h1 { class: "section-heading gradient-text", "My Projects" }
                        p { class: "section-subtitle",
                            "A showcase of my development work, featuring web applications, \
                             algorithms, and open-source contributions built with modern technologies."
                        }
                    }

                    div { class: "projects-grid",
                        for repo in repos.iter() {
                            RepoCard { key: "{repo.id}", repo: repo.clone() }
                        }
                    }

                    div { class: "section-cta",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| on_navigate.call(PageId::Contact),
                            "Let's Work Together"
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "full-height error-state",
                        h2 { "Unable to load projects" }
                        p { class: "error-detail", "{err}" }
                    }
                },
                None => rsx! {
                    div { class: "full-height",
                        div { class: "spinner" }
                    }
                },
            }
        }
    }
}
