use leptos::{html, prelude::*};

use crate::{
    content::{Section, Skill, ADDITIONAL_SKILLS, SKILLS},
    reveal::{Entrance, Stagger},
};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Revealed},
};

const ITEM: Entrance = Entrance::rise(20, 500);
const STAGGER: Stagger = Stagger::new(0, 100);

#[component]
pub fn SkillsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);

    view! {
        <section id=Section::Skills.id() class="section-padding">
            <div class="container mx-auto px-4">
                <div node_ref=container class="max-w-4xl mx-auto">
                    <h2 class="section-title">"Skills & Expertise"</h2>
                    <SkillGrid skills=SKILLS visible />
                    <Revealed
                        visible
                        entrance=STAGGER.apply(ITEM, SKILLS.len())
                        class="mt-12 text-center"
                    >
                        <div class="card">
                            <h3 class="text-xl font-semibold mb-4">"Additional Skills"</h3>
                            <div class="flex flex-wrap justify-center gap-4">
                                {ADDITIONAL_SKILLS
                                    .iter()
                                    .map(|name| {
                                        view! {
                                            <span class="skill-tag px-4 py-2 bg-gray-100 dark:bg-gray-800 rounded-full text-sm font-medium">
                                                {*name}
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </Revealed>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillGrid(skills: &'static [Skill], #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {skills
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    view! {
                        <Revealed visible entrance=STAGGER.apply(ITEM, i) class="card card-hover">
                            <SkillCard skill=*skill />
                        </Revealed>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let color = skill.color.unwrap_or("currentColor");
    view! {
        <div class="skill-card flex items-center mb-2">
            <Glyph icon=skill.icon class="text-3xl mr-3" color=skill.color />
            <h3 class="text-xl font-semibold">{skill.name}</h3>
        </div>
        {skill
            .level
            .map(|level| {
                view! {
                    <div
                        class="h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700"
                        role="meter"
                        aria-label=format!("{} proficiency", skill.name)
                        aria-valuenow=level.to_string()
                        aria-valuemin="0"
                        aria-valuemax="100"
                    >
                        <div
                            class="h-2 rounded-full"
                            style=format!("width: {level}%; background-color: {color}")
                        ></div>
                    </div>
                }
            })}
    }
}
