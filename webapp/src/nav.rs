use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use crate::{
    about::AboutSection, contact::ContactSection, hero::HeroSection, projects::ProjectsSection,
    resume::ResumeSection, skills::SkillsSection,
};

// the closed set of pages; navigation cannot land anywhere else
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageId {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Articles,
    Profiles,
    Resume,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 8] = [
        PageId::Hero,
        PageId::About,
        PageId::Projects,
        PageId::Skills,
        PageId::Articles,
        PageId::Profiles,
        PageId::Resume,
        PageId::Contact,
    ];

    // unknown identifiers collapse to the landing page rather than erroring
    pub fn parse(id: &str) -> PageId {
        match id {
            "hero" => PageId::Hero,
            "about" => PageId::About,
            "projects" => PageId::Projects,
            "skills" => PageId::Skills,
            "articles" => PageId::Articles,
            "profiles" => PageId::Profiles,
            "resume" => PageId::Resume,
            "contact" => PageId::Contact,
            _ => PageId::Hero,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            PageId::Hero => "hero",
            PageId::About => "about",
            PageId::Projects => "projects",
            PageId::Skills => "skills",
            PageId::Articles => "articles",
            PageId::Profiles => "profiles",
            PageId::Resume => "resume",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Hero => "Home",
            PageId::About => "About",
            PageId::Projects => "Projects",
            PageId::Skills => "Skills",
            PageId::Articles => "Articles",
            PageId::Profiles => "Profiles",
            PageId::Resume => "Resume",
            PageId::Contact => "Contact",
        }
    }
}

// both legs of the page handoff, in milliseconds
const EXIT_MS: u32 = 800;
const ENTER_MS: u32 = 800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    #[default]
    Settled,
    Exiting,
}

// the page controller: one current page, at most one in-flight handoff
//
// the timer handle lives in a signal so that replacing it (a retarget) or
// dropping the owning scope cancels the pending callback
#[derive(Clone, Copy, PartialEq)]
pub struct Navigator {
    current: Signal<PageId>,
    pending: Signal<Option<PageId>>,
    phase: Signal<TransitionPhase>,
    timer: Signal<Option<Timeout>>,
}

pub fn use_navigator() -> Navigator {
    let current = use_signal(PageId::default);
    let pending = use_signal(|| None);
    let phase = use_signal(|| TransitionPhase::Entering);
    let timer = use_signal(|| None);

    let mut navigator = Navigator {
        current,
        pending,
        phase,
        timer,
    };

    // settle the first-mount enter animation
    use_effect(move || {
        navigator.settle_after(ENTER_MS);
    });

    navigator
}

impl Navigator {
    pub fn current(&self) -> PageId {
        (self.current)()
    }

    pub fn phase(&self) -> TransitionPhase {
        (self.phase)()
    }

    // direct jump with a timed exit/enter handoff; no history is kept
    //
    // calling this again while a handoff is in flight abandons the pending
    // transition in favor of the new target (last write wins, no queue)
    pub fn navigate(&mut self, target: PageId) {
        if target == self.current() && self.phase() == TransitionPhase::Settled {
            return;
        }

        let mut current = self.current;
        let mut pending = self.pending;
        let mut phase = self.phase;
        let mut timer = self.timer;

        pending.set(Some(target));
        phase.set(TransitionPhase::Exiting);

        // replacing the handle drops the previous timer, which cancels it
        timer.set(Some(Timeout::new(EXIT_MS, move || {
            if let Some(next) = pending.take() {
                current.set(next);
            }
            phase.set(TransitionPhase::Entering);

            timer.set(Some(Timeout::new(ENTER_MS, move || {
                phase.set(TransitionPhase::Settled);
            })));
        })));
    }

    fn settle_after(&mut self, delay_ms: u32) {
        let mut phase = self.phase;

        self.timer.set(Some(Timeout::new(delay_ms, move || {
            phase.set(TransitionPhase::Settled);
        })));
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ActivePageProps {
    navigator: Navigator,
}

// renders the section matching the current page inside the transition shell;
// exactly one section is mounted at any time
#[component]
pub fn ActivePage(props: ActivePageProps) -> Element {
    let mut navigator = props.navigator;
    let page = navigator.current();

    let shell_class = match navigator.phase() {
        TransitionPhase::Entering => "page-shell page-enter",
        TransitionPhase::Settled => "page-shell",
        TransitionPhase::Exiting => "page-shell page-exit",
    };

    rsx! {
        div { class: shell_class,
            match page {
                PageId::Hero => rsx! {
                    HeroSection { on_navigate: move |target| navigator.navigate(target) }
                },
                PageId::About => rsx! {
                    AboutSection { on_navigate: move |target| navigator.navigate(target) }
                },
                PageId::Projects => rsx! {
                    ProjectsSection { on_navigate: move |target| navigator.navigate(target) }
                },
                PageId::Skills => rsx! {
                    SkillsSection { on_navigate: move |target| navigator.navigate(target) }
                },
                PageId::Articles => rsx! {
                    ComingSoon { title: "Articles" }
                },
                PageId::Profiles => rsx! {
                    ComingSoon { title: "Coding Profiles" }
                },
                PageId::Resume => rsx! {
                    ResumeSection { on_navigate: move |target| navigator.navigate(target) }
                },
                PageId::Contact => rsx! {
                    ContactSection { on_navigate: move |target| navigator.navigate(target) }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ComingSoonProps {
    title: &'static str,
}

#[component]
fn ComingSoon(props: ComingSoonProps) -> Element {
    rsx! {
        div { class: "full-height coming-soon",
            h1 { class: "gradient-text", "{props.title} - Coming Soon" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_collapse_to_the_landing_page() {
        assert_eq!(PageId::parse("blog"), PageId::Hero);
        assert_eq!(PageId::parse(""), PageId::Hero);
        assert_eq!(PageId::parse("HERO"), PageId::Hero);
    }

    #[test]
    fn known_ids_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::parse(page.id()), page);
        }
    }

    #[test]
    fn default_is_the_landing_page() {
        assert_eq!(PageId::default(), PageId::Hero);
    }
}
