use leptos::prelude::*;

use crate::content::{Anchor, Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Anchor::Projects.id() class="py-28 px-6 bg-white scroll-mt-16">
            <h2 class="text-5xl font-extrabold text-center mb-16 text-purple-800">
                "Projets Personnels"
            </h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-10 max-w-6xl mx-auto">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card flex flex-col justify-between bg-white border border-gray-200 rounded-2xl shadow-md p-6 hover:shadow-xl hover:scale-[1.03] transition-all duration-300">
            <div>
                <h3 class="text-xl font-semibold text-purple-700 mb-2">{project.title}</h3>
                <p class="text-sm text-gray-600 mb-4">{project.description}</p>
            </div>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="bg-purple-100 text-purple-700 text-xs font-medium px-3 py-1 rounded-full">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
