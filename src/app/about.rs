use leptos::prelude::*;

use super::animated::Animated;
use crate::{
    content::{Anchor, PROFILE},
    motion::{Enter, Reveal},
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="py-20 px-8 bg-gray-50 scroll-mt-16">
            <Animated
                motion=Reveal::new(Enter::Fade, 1000)
                class="flex flex-col md:flex-row items-center"
            >
                <img
                    src=PROFILE.about_image
                    alt=PROFILE.name
                    class="rounded-xl w-72 h-72 object-cover mb-8 md:mb-0 md:mr-12 shadow-lg"
                />
                <div>
                    <h2 class="text-3xl font-bold mb-4">"À propos de moi"</h2>
                    <p class="text-gray-700 leading-relaxed">{PROFILE.about}</p>
                </div>
            </Animated>
        </section>
    }
}
