mod about;
mod animated;
mod contact;
mod header;
mod hero;
mod projects;
mod skills;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::PROFILE, menu::MenuState, seo::person_json_ld};
use about::About;
use contact::{Contact, Footer};
use header::{Header, MobileMenu, ScrollProgressBar};
use hero::Hero;
use projects::Projects;
use skills::SkillTree;
use timeline::Timeline;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Portfolio />
    }
}

/// The whole single page. Owns the menu state shared by the header and the overlay.
#[component]
pub fn Portfolio() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <div class="font-sans bg-gradient-to-br from-white to-gray-100 min-h-screen">
            <ScrollProgressBar />
            <MobileMenu menu />
            <Header menu />
            <main>
                <Hero />
                <SkillTree />
                <About />
                <Timeline />
                <Projects />
                <Contact />
            </main>
            <Footer />
            <script type="application/ld+json" inner_html=person_json_ld()></script>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{Anchor, LANGUAGES, NAV_LINKS, PROJECTS, SKILLS, TIMELINE};
    use leptos::tachys::view::RenderHtml;

    fn render_page() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <Portfolio /> }.to_html())
    }

    fn render_hero_with_menu(state: MenuState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let menu = RwSignal::new(state);
            view! {
                <MobileMenu menu />
                <Hero />
            }
            .to_html()
        })
    }

    /// Occurrences of an inline `width: {percent}%` style, with or without a trailing `;`.
    fn count_width_styles(html: &str, percent: &str) -> usize {
        let prefix = format!("style=\"width: {percent}%");
        html.match_indices(&prefix)
            .filter(|(i, _)| matches!(html[i + prefix.len()..].chars().next(), Some(';' | '"')))
            .count()
    }

    /// The full class attribute around the byte offset `at`.
    fn class_attr_at(html: &str, at: usize) -> &str {
        let start = html[..at]
            .rfind("class=\"")
            .expect("offset should be inside a class attribute")
            + "class=\"".len();
        let end = at + html[at..].find('"').expect("class attribute should be closed");
        &html[start..end]
    }

    fn escaped(s: &str) -> String {
        s.replace('&', "&amp;")
    }

    /// The part of the page from the element with `start` id up to the one with `end` id.
    fn slice<'a>(html: &'a str, start: &str, end: Option<&str>) -> &'a str {
        let from = html
            .find(&format!("id=\"{start}\""))
            .expect("start anchor should be rendered");
        let to = end
            .map(|end| {
                html.find(&format!("id=\"{end}\""))
                    .expect("end anchor should be rendered")
            })
            .unwrap_or(html.len());
        &html[from..to]
    }

    fn assert_in_order(html: &str, titles: &[String]) {
        let mut last = 0;
        for title in titles {
            let pos = html[last..]
                .find(title.as_str())
                .unwrap_or_else(|| panic!("{title} missing or out of order"));
            last += pos + title.len();
        }
    }

    #[test]
    fn test_every_nav_target_exists_once() {
        let html = render_page();
        for link in NAV_LINKS.iter() {
            let id = format!("id=\"{}\"", link.target.id());
            assert_eq!(
                html.matches(&id).count(),
                1,
                "anchor {} for {}",
                link.target.id(),
                link.label
            );
        }
        assert_eq!(html.matches("id=\"timeline\"").count(), 1);
    }

    #[test]
    fn test_cards_match_static_arrays() {
        let html = render_page();
        assert_eq!(html.matches("skill-leaf").count(), SKILLS.len());
        assert_eq!(html.matches("language-card").count(), LANGUAGES.len());
        assert_eq!(html.matches("timeline-entry").count(), TIMELINE.len());
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
    }

    #[test]
    fn test_cards_keep_authored_order() {
        let html = render_page();
        let skills = slice(&html, Anchor::Skills.id(), Some(Anchor::Languages.id()));
        assert_in_order(
            skills,
            &SKILLS.iter().map(|s| escaped(s.title)).collect::<Vec<_>>(),
        );
        let languages = slice(&html, Anchor::Languages.id(), Some(Anchor::About.id()));
        assert_in_order(
            languages,
            &LANGUAGES.iter().map(|l| escaped(l.name)).collect::<Vec<_>>(),
        );
        let timeline = slice(&html, "timeline", Some(Anchor::Projects.id()));
        assert_in_order(
            timeline,
            &TIMELINE.iter().map(|t| escaped(t.title)).collect::<Vec<_>>(),
        );
        let projects = slice(&html, Anchor::Projects.id(), Some(Anchor::Contact.id()));
        assert_in_order(
            projects,
            &PROJECTS.iter().map(|p| escaped(p.title)).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_language_bar_widths() {
        let html = render_page();
        let languages = slice(&html, Anchor::Languages.id(), Some(Anchor::About.id()));
        let percents = ["100", "90", "40", "30"];
        for p in percents {
            assert_eq!(count_width_styles(languages, p), 1, "bar at {p}%");
        }
        let positions = percents
            .iter()
            .map(|p| {
                languages
                    .find(&format!("style=\"width: {p}%"))
                    .expect("bar should be rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_timeline_styling_by_kind_and_side() {
        let html = render_page();
        let timeline = slice(&html, "timeline", Some(Anchor::Projects.id()));
        assert_eq!(timeline.matches("border-indigo-400").count(), 3);
        assert_eq!(timeline.matches("border-green-400").count(), 3);
        assert_eq!(timeline.matches("ml-0 mr-auto text-right").count(), 3);
        assert_eq!(timeline.matches("ml-auto mr-0 text-left").count(), 3);
    }

    #[test]
    fn test_card_hover_is_separate_from_reveal() {
        let html = render_page();
        let cards = slice(&html, Anchor::Skills.id(), Some(Anchor::Projects.id()));
        let hovers = cards
            .match_indices("hover:scale-105")
            .map(|(i, _)| class_attr_at(cards, i))
            .collect::<Vec<_>>();
        assert_eq!(hovers.len(), SKILLS.len() + TIMELINE.len());
        for class in hovers {
            assert!(class.contains("transition-transform"), "{class}");
            assert!(!class.contains("opacity-"), "{class}");
        }
    }

    #[test]
    fn test_cv_download_link() {
        let html = render_page();
        assert_eq!(html.matches("href=\"/cv.pdf\"").count(), 1);
        assert!(html.contains("download"));
    }

    #[test]
    fn test_cv_link_ignores_menu_state() {
        let closed = MenuState::default();
        for state in [closed, closed.toggle(), closed.toggle().toggle()] {
            let html = render_hero_with_menu(state);
            let hidden = format!("aria-hidden=\"{}\"", !state.is_open());
            assert!(html.contains(&hidden), "menu open: {}", state.is_open());
            assert!(html.contains(state.overlay_class()));
            let link = format!("href=\"{}\"", PROFILE.cv_path);
            assert_eq!(html.matches(&link).count(), 1);
        }
        assert_eq!(PROFILE.cv_path, "/cv.pdf");
    }

    #[test]
    fn test_progress_bar_and_menu_start_idle() {
        let html = render_page();
        assert_eq!(count_width_styles(&html, "0"), 1);
        assert!(html.contains("-translate-x-full"));
        assert!(html.contains("application/ld+json"));
    }
}
