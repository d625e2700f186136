use leptos::prelude::*;

use crate::content::{copyright_year, Anchor, PROFILE};

pub const BUTTON_CLASS: &str = "bg-gradient-to-r from-purple-500 to-indigo-600 text-white px-6 py-2 rounded-full shadow-md hover:scale-105 hover:shadow-lg transition duration-300";

#[component]
fn Button(
    #[prop(optional)] class: &'static str,
    #[prop(default = "button")] kind: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button type=kind class=format!("{BUTTON_CLASS} {class}")>
            {children()}
        </button>
    }
}

/// Contact form. Nothing is sent anywhere; submitting only keeps the page in place.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id=Anchor::Contact.id()
            class="py-20 px-8 bg-gradient-to-br from-gray-50 to-white scroll-mt-16"
        >
            <h2 class="text-4xl font-bold mb-10 text-center">"Me Contacter"</h2>
            <form
                class="grid grid-cols-1 md:grid-cols-2 gap-4 max-w-3xl mx-auto"
                on:submit=move |ev| ev.prevent_default()
            >
                <input class="p-3 border rounded-lg" placeholder="Prénom" />
                <input class="p-3 border rounded-lg" placeholder="Nom" />
                <input type="email" class="p-3 border rounded-lg md:col-span-2" placeholder="Email" />
                <textarea
                    class="p-3 border rounded-lg md:col-span-2"
                    rows="5"
                    placeholder="Votre message"
                ></textarea>
                <Button class="md:col-span-2" kind="submit">
                    "Envoyer"
                </Button>
            </form>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="p-6 text-center bg-white border-t">
            <p class="text-sm text-gray-500">
                {format!("© {} {}. Tous droits réservés.", copyright_year(), PROFILE.name)}
            </p>
        </footer>
    }
}
