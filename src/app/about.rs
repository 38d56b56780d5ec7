use leptos::{html, prelude::*};

use crate::{
    content::{Section, EDUCATION, EXPERIENCE, PROFILE},
    reveal::{Entrance, Stagger},
};

use super::{
    icons::DownloadIcon,
    reveal::{use_reveal, Revealed},
};

const ITEM: Entrance = Entrance::rise(30, 600);
const CARD: Entrance = Entrance::rise(40, 700).scaled(0.95);
const STAGGER: Stagger = Stagger::new(100, 200);

#[component]
pub fn AboutSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);

    view! {
        <section id=Section::About.id() class="section-padding bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4">
                <div node_ref=container class="max-w-4xl mx-auto">
                    <Revealed visible entrance=STAGGER.apply(ITEM, 0)>
                        <h2 class="section-title">"About Me"</h2>
                    </Revealed>
                    <Revealed visible entrance=STAGGER.apply(ITEM, 1) class="max-w-3xl mx-auto mb-12">
                        <p class="text-lg text-gray-600 dark:text-gray-300 text-justify">
                            {PROFILE.bio}
                        </p>
                    </Revealed>
                    <div class="grid md:grid-cols-2 gap-8">
                        <Revealed visible entrance=STAGGER.apply(CARD, 2) class="card">
                            <h3 class="text-xl font-semibold mb-4">"Education"</h3>
                            <div class="space-y-4">
                                {EDUCATION
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div>
                                                <h4 class="font-medium">{edu.degree}</h4>
                                                <p class="text-secondary">
                                                    {format!("{}, {}", edu.school, edu.period)}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Revealed>
                        <Revealed visible entrance=STAGGER.apply(CARD, 3) class="card">
                            <h3 class="text-xl font-semibold mb-4">"Experience"</h3>
                            <div class="space-y-4">
                                {EXPERIENCE
                                    .iter()
                                    .map(|job| {
                                        view! {
                                            <div>
                                                <h4 class="font-medium">{job.role}</h4>
                                                <p class="text-secondary">
                                                    {format!("{}, {}", job.company, job.period)}
                                                </p>
                                                <ul class="list-disc list-inside mt-2 text-gray-600 dark:text-gray-300">
                                                    {job
                                                        .highlights
                                                        .iter()
                                                        .map(|h| view! { <li>{*h}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Revealed>
                    </div>
                    <Revealed visible entrance=STAGGER.apply(ITEM, 4) class="mt-12 text-center">
                        <a
                            href=PROFILE.resume
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary inline-flex items-center"
                        >
                            "Download Resume"
                            <DownloadIcon />
                        </a>
                    </Revealed>
                </div>
            </div>
        </section>
    }
}
