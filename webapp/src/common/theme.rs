use dioxus::prelude::*;

use serde::{Deserialize, Serialize};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn css_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// owns the preference for the whole tree; components below read the context
// instead of touching ambient state
pub fn use_theme_provider() -> Signal<Theme> {
    use_context_provider(|| Signal::new(get_local_storage(THEME_KEY).unwrap_or_default()))
}

pub fn use_theme() -> Signal<Theme> {
    use_context()
}

// the one mutation entry point: flips the preference and persists it
pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = theme().toggled();

    theme.set(next);
    set_local_storage(THEME_KEY, next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn dark_is_the_default() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
