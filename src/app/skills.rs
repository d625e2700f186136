use leptos::prelude::*;

use super::animated::Animated;
use crate::{
    content::{Anchor, Language, SkillLeaf, LANGUAGES, SKILLS},
    motion::{Reveal, HOVER_LIFT},
};

#[component]
pub fn SkillTree() -> impl IntoView {
    view! {
        <section
            id=Anchor::Skills.id()
            class="py-24 bg-gradient-to-br from-white to-blue-50 relative overflow-hidden scroll-mt-16"
        >
            <h2 class="text-4xl font-bold text-center mb-20">"🌿 Arbre des Compétences"</h2>
            <div class="relative max-w-4xl mx-auto">
                <div class="absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-purple-500 rounded-full"></div>
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(idx, leaf)| view! { <SkillCard leaf=*leaf idx /> })
                    .collect_view()}
            </div>
            <Languages />
        </section>
    }
}

#[component]
fn SkillCard(leaf: SkillLeaf, idx: usize) -> impl IntoView {
    let class = format!("skill-leaf w-[calc(50%-2rem)] mb-12 {}", leaf.side.card_class());
    // hover runs on the inner card so it keeps its own timing
    let card = format!("relative p-6 rounded-2xl shadow-xl bg-white {HOVER_LIFT}");
    view! {
        <Animated motion=Reveal::staggered(leaf.side.into(), idx) class=class>
            <div class=card>
                <h3 class="text-xl font-bold text-purple-700">{leaf.title}</h3>
                <p class="text-gray-600">{leaf.description}</p>
                <span class=format!(
                    "absolute top-1/2 transform -translate-y-1/2 w-5 h-5 bg-purple-600 rounded-full {}",
                    leaf.side.dot_class(),
                )></span>
            </div>
        </Animated>
    }
}

#[component]
fn Languages() -> impl IntoView {
    view! {
        <div id=Anchor::Languages.id() class="mt-16 max-w-4xl mx-auto px-4 scroll-mt-24">
            <h3 class="text-3xl font-bold mb-6 text-center">"🌍 Langues"</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {LANGUAGES.iter().map(|lang| view! { <LanguageCard lang=*lang /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LanguageCard(lang: Language) -> impl IntoView {
    view! {
        <div class="language-card bg-white rounded-xl shadow-sm p-4 text-center border">
            <div class="text-2xl">{lang.flag}</div>
            <div class="font-semibold text-purple-700 mt-1">{lang.name}</div>
            <div class="text-xs text-gray-500">{lang.level}</div>
            <div class="w-full bg-gray-200 h-1.5 rounded-full mt-2">
                <div class="h-full bg-purple-500 rounded-full" style=lang.bar_style()></div>
            </div>
        </div>
    }
}
