use dioxus::prelude::*;

use crate::common::theme::{Theme, toggle_theme, use_theme};
use crate::nav::{Navigator, PageId};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    page: PageId,
    navigator: Navigator,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let mut navigator = props.navigator;
    let page = props.page;

    rsx! {
        button {
            class: if navigator.current() == page { "nav-link active" } else { "nav-link" },
            onclick: move |_| navigator.navigate(page),
            "{page.label()}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let theme = use_theme();

    let glyph = match *theme.read() {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    };

    rsx! {
        button {
            class: "btn btn-ghost",
            aria_label: "Toggle theme",
            onclick: move |_| toggle_theme(theme),
            "{glyph}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    navigator: Navigator,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut navigator = props.navigator;

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                button { class: "logo", onclick: move |_| navigator.navigate(PageId::Hero),
                    span { class: "logo-mark", "SS" }
                    span { class: "logo-name gradient-text", "Shyam Sanjey S" }
                }

                nav { class: "nav-links",
                    for page in PageId::ALL {
                        NavBarButton { key: "{page.id()}", page, navigator: props.navigator }
                    }
                }

                ThemeToggle {}
            }
        }
    }
}
