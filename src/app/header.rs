use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};

use crate::{
    content::{NAV_LINKS, PROFILE},
    menu::MenuState,
    scroll::{bar_style, progress_percent},
};

fn toggle_menu(menu: RwSignal<MenuState>) {
    menu.update(|m| *m = m.toggle());
    log::debug!("menu open: {}", menu.get_untracked().is_open());
}

/// Thin bar at the very top whose width follows the vertical scroll position.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (percent, set_percent) = signal(0.0_f64);

    // removed again when the component unmounts
    _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        set_percent.set(progress_percent(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        ));
    });

    view! {
        <div class="fixed top-0 left-0 w-full h-1 z-[99]">
            <div
                class="h-full bg-purple-600 transition-all duration-200"
                style=move || bar_style(percent.get())
            ></div>
        </div>
    }
}

#[component]
pub fn Header(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <header class="fixed top-0 w-full z-50 bg-white/30 backdrop-blur-md shadow-md">
            <div class="max-w-7xl mx-auto px-6 py-3 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-purple-700">{PROFILE.name}</h1>
                <nav class="hidden md:flex space-x-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.target.href()
                                    class="relative px-4 py-2 font-medium text-gray-800 group"
                                >
                                    <span class="relative z-10">{link.label}</span>
                                    <span class="absolute inset-0 bg-purple-600 rounded-lg scale-x-0 group-hover:scale-x-100 transition-transform origin-left duration-300 z-0"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="md:hidden text-3xl text-purple-700 px-2"
                    aria-label=move || menu.get().button_label()
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| toggle_menu(menu)
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}

/// Full-screen navigation overlay. Any link click toggles it shut; Escape closes it.
#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.get_untracked().is_open() {
            menu.update(|m| *m = m.close());
        }
    });

    view! {
        <div
            class=move || {
                format!(
                    "fixed inset-0 bg-white z-40 flex flex-col items-center justify-center text-xl space-y-6 transition-transform duration-300 {}",
                    menu.get().overlay_class(),
                )
            }
            aria-hidden=move || (!menu.get().is_open()).to_string()
        >
            {NAV_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a href=link.target.href() on:click=move |_| toggle_menu(menu)>
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
