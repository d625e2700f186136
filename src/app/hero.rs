use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::{animated::Animated, contact::BUTTON_CLASS};
use crate::{
    content::{Anchor, PROFILE},
    motion::{Enter, Reveal},
    typing::{TypingConfig, Typewriter},
};

const TICK_MS: u32 = 10;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=Anchor::Home.id()
            class="relative overflow-hidden px-8 pt-32 pb-16 md:pt-40 md:pb-32 bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 text-white min-h-screen"
        >
            <div class="absolute w-72 h-72 bg-purple-400 opacity-30 rounded-full mix-blend-multiply blur-2xl animate-pulse top-20 left-20 z-0"></div>
            <div class="absolute w-96 h-96 bg-pink-500 opacity-30 rounded-full mix-blend-multiply blur-2xl animate-ping bottom-0 right-20 z-0"></div>
            <Animated
                motion=Reveal::new(Enter::FromAbove, 700)
                on_mount=true
                class="relative flex flex-col md:flex-row items-center justify-between"
            >
                <div class="max-w-2xl z-10 text-left md:pl-24">
                    <h1 class="text-5xl font-extrabold mb-6 leading-tight">
                        "Hey, je suis " {PROFILE.first_name} <br />
                        <span class="text-3xl">
                            <TypedText strings=PROFILE.typed />
                        </span>
                    </h1>
                    <p class="mb-6 text-lg">{PROFILE.tagline}</p>
                    <div class="mt-8 bg-white/20 backdrop-blur-md p-6 rounded-2xl shadow-xl flex flex-col md:flex-row items-center gap-4 w-fit text-white">
                        <div class="text-lg md:text-xl font-semibold">{PROFILE.availability}</div>
                        <a
                            href=PROFILE.cv_path
                            download="cv.pdf"
                            class=format!("{BUTTON_CLASS} ml-0 w-full md:w-auto text-center")
                        >
                            "📄 Télécharger le CV"
                        </a>
                    </div>
                </div>
                <img
                    src=PROFILE.face_image
                    alt=PROFILE.name
                    class="rounded-full w-80 h-80 object-cover mt-10 md:mt-0 shadow-lg border-4 border-white z-10 hover:scale-105 transition-transform duration-300"
                />
            </Animated>
        </section>
    }
}

/// Cycles through `strings`, typing and erasing them, followed by a blinking cursor.
#[component]
fn TypedText(strings: &'static [&'static str]) -> impl IntoView {
    let writer = StoredValue::new(Arc::new(Mutex::new(Typewriter::new(
        strings,
        TypingConfig::default(),
    ))));
    let (text, set_text) = signal(String::new());

    // no-op on the server; cleared on unmount in the browser
    _ = use_interval_fn(
        move || {
            let next = writer.with_value(|w| {
                let mut w = w.lock().expect("should be able to lock typewriter");
                w.advance(TICK_MS).then(|| w.text())
            });
            if let Some(next) = next {
                set_text.set(next);
            }
        },
        TICK_MS as u64,
    );

    view! {
        <span>{move || text.get()}</span>
        <span class="animate-pulse font-light">"|"</span>
    }
}
