use leptos::prelude::*;

use crate::{
    content::{Section, HERO_LINKS, PROFILE},
    reveal::{Entrance, Stagger},
};

use super::{
    links::SocialLinks,
    reveal::{use_mount_reveal, Revealed},
};

const PHOTO: Entrance = Entrance::fade(500).scaled(0.8);
const TEXT: Entrance = Entrance::rise(20, 500);
const STAGGER: Stagger = Stagger::new(200, 200);

#[component]
pub fn HeroSection() -> impl IntoView {
    let shown = use_mount_reveal();

    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center justify-center pt-16">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <Revealed visible=shown entrance=PHOTO>
                        <img
                            src=PROFILE.photo
                            alt=PROFILE.name
                            class="rounded-full w-64 h-64 md:w-80 md:h-80 mx-auto object-cover shadow-lg"
                        />
                    </Revealed>
                    <div class="text-center md:text-left">
                        <Revealed visible=shown entrance=STAGGER.apply(TEXT, 0) class="mb-8">
                            <h1 class="text-4xl md:text-6xl font-bold mb-4">
                                "Hi, I'm " <span class="text-primary">{PROFILE.name}</span>
                            </h1>
                            <h2 class="text-2xl md:text-3xl text-secondary mb-6">
                                {PROFILE.title}
                            </h2>
                            <p class="text-lg md:text-xl max-w-2xl mx-auto md:mx-0 text-gray-600 dark:text-gray-300">
                                {PROFILE.pitch}
                            </p>
                        </Revealed>
                        <Revealed
                            visible=shown
                            entrance=STAGGER.apply(TEXT, 1)
                            class="flex flex-col sm:flex-row gap-4 mb-12 justify-center md:justify-start"
                        >
                            <a href=Section::Contact.anchor() class="btn btn-primary">
                                "Get in Touch"
                            </a>
                            <a href=Section::Projects.anchor() class="btn btn-secondary">
                                "View My Work"
                            </a>
                        </Revealed>
                        <Revealed
                            visible=shown
                            entrance=STAGGER.apply(TEXT, 2)
                            class="flex gap-6 justify-center md:justify-start"
                        >
                            <SocialLinks
                                links=HERO_LINKS
                                link_class="text-2xl text-secondary hover:text-primary transition-all hover:scale-125 active:scale-90"
                            />
                        </Revealed>
                    </div>
                </div>
            </div>
        </section>
    }
}
