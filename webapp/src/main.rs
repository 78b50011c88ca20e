#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::footer::Footer;
use components::navigation::NavBar;

mod nav;
use nav::{ActivePage, use_navigator};

mod about;
mod contact;
mod hero;
mod projects;
mod resume;
mod skills;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let theme = common::theme::use_theme_provider();

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        div { class: "app-root", "data-theme": "{theme.read().css_value()}", Portfolio {} }
    }
}

#[component]
fn Portfolio() -> Element {
    let mut navigator = use_navigator();

    rsx! {
        NavBar { navigator }
        main { class: "page-content", ActivePage { navigator } }
        Footer { on_navigate: move |target| navigator.navigate(target) }
    }
}
