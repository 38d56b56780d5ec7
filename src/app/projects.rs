use leptos::{html, prelude::*};

use crate::{
    content::{Icon, Project, Section, PROFILE, PROJECTS},
    reveal::{Entrance, Stagger},
};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Revealed},
};

const TITLE: Entrance = Entrance::rise(30, 600);
const CARD: Entrance = Entrance::rise(50, 800).scaled(0.95);
const CTA: Entrance = Entrance::rise(30, 600).delayed(600);
const STAGGER: Stagger = Stagger::new(100, 200);

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);

    view! {
        <section id=Section::Projects.id() class="section-padding bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4">
                <div node_ref=container class="max-w-6xl mx-auto">
                    <Revealed visible entrance=STAGGER.apply(TITLE, 0)>
                        <h2 class="section-title">"Featured Projects"</h2>
                    </Revealed>
                    <ProjectGrid projects=PROJECTS visible />
                    <Revealed visible entrance=CTA class="mt-12 text-center">
                        <a
                            href=PROFILE.more_projects_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary inline-flex items-center transition-transform hover:scale-105 active:scale-95"
                        >
                            "View More Projects"
                            <Glyph icon=Icon::GitHub class="ml-2 text-xl" />
                        </a>
                    </Revealed>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectGrid(
    projects: &'static [Project],
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    // title takes the first stagger slot
                    view! {
                        <Revealed
                            visible
                            entrance=STAGGER.apply(CARD, i + 1)
                            class="card card-hover group transition-transform hover:-translate-y-1"
                        >
                            <ProjectCard project=*project />
                        </Revealed>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="relative overflow-hidden rounded-lg mb-4">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover transform group-hover:scale-110 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center space-x-4">
                    <a
                        href=project.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link text-white hover:text-primary transition-all hover:scale-110 active:scale-90"
                        aria-label=format!("{} source code", project.title)
                    >
                        <Glyph icon=Icon::GitHub class="text-2xl" />
                    </a>
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link text-white hover:text-primary transition-all hover:scale-110 active:scale-90"
                        aria-label=format!("{} live demo", project.title)
                    >
                        <Glyph icon=Icon::ExternalLink class="text-2xl" />
                    </a>
                </div>
            </div>
            <h3 class="project-title text-xl font-semibold mb-2">{project.title}</h3>
            <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
            {(!project.features.is_empty())
                .then(|| {
                    view! {
                        <ul class="project-features list-disc list-inside mb-4 text-sm text-gray-600 dark:text-gray-300">
                            {project
                                .features
                                .iter()
                                .map(|f| view! { <li>{*f}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                })}
            <div class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="tech-tag px-3 py-1 bg-gray-100 dark:bg-gray-800 rounded-full text-sm transition-all duration-200 hover:scale-105 hover:bg-primary hover:text-white">
                                {*tech}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
