use leptos::prelude::*;

use super::animated::Animated;
use crate::{
    content::{timeline_anchor, TimelineEntry, TIMELINE, TIMELINE_SECTION_ID},
    motion::{Reveal, HOVER_LIFT},
};

/// Professional and education entries on one alternating timeline.
///
/// The first entry of each kind carries the `experience`/`education` anchor.
#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section
            id=TIMELINE_SECTION_ID
            class="py-24 bg-gradient-to-br from-gray-50 to-white relative overflow-hidden"
        >
            <h2 class="text-4xl font-bold text-center mb-20">"🗂️ Parcours"</h2>
            <div class="relative max-w-4xl mx-auto">
                <div class="absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-purple-500 rounded-full"></div>
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(idx, entry)| {
                        let anchor = timeline_anchor(&TIMELINE, idx);
                        view! { <TimelineCard entry=*entry idx anchor /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(entry: TimelineEntry, idx: usize, anchor: Option<&'static str>) -> impl IntoView {
    let class = format!(
        "timeline-entry w-[calc(50%-2rem)] mb-12 scroll-mt-24 {}",
        entry.side.card_class(),
    );
    // hover runs on the inner card so it keeps its own timing
    let card = format!("relative p-6 rounded-2xl shadow-xl {HOVER_LIFT} {}", entry.kind.card_class());
    view! {
        <Animated motion=Reveal::staggered(entry.side.into(), idx) class=class id=anchor>
            <div class=card>
                <h3 class="text-xl font-bold text-purple-700">{entry.title}</h3>
                <p class="text-sm text-gray-500">{entry.place} " — " {entry.date}</p>
                <ul class="text-sm mt-2 text-gray-700 space-y-1 list-disc list-inside">
                    {entry.items.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                </ul>
                <span class=format!(
                    "absolute top-1/2 transform -translate-y-1/2 w-5 h-5 rounded-full {} {}",
                    entry.kind.dot_class(),
                    entry.side.dot_class(),
                )></span>
            </div>
        </Animated>
    }
}
