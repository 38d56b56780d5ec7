use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{content::Section, display::DisplayModeContext, reveal::Entrance};

use super::{
    icons::{MoonIcon, SunIcon},
    links::SectionLinks,
    reveal::use_mount_reveal,
};

/// Scroll offset past which the bar gets a solid background.
const SCROLL_THRESHOLD: f64 = 50.0;
const SLIDE_IN: Entrance = Entrance::rise(-100, 300);

#[component]
pub fn NavigationBar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLL_THRESHOLD);
    let shown = use_mount_reveal();

    let nav_class = move || {
        if scrolled.get() {
            "transition-all duration-300 bg-white/80 dark:bg-dark/80 backdrop-blur-md shadow-lg"
        } else {
            "transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class="fixed w-full z-50" style=move || SLIDE_IN.style(shown.get())>
            <div class=nav_class>
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between h-16">
                        <a
                            href=Section::Home.anchor()
                            class="text-2xl font-bold text-primary transition-transform hover:scale-105"
                        >
                            "Portfolio"
                        </a>
                        <div class="hidden md:flex items-center space-x-8">
                            <SectionLinks link_class="text-dark dark:text-light hover:text-primary dark:hover:text-primary transition-all hover:scale-105" />
                            <ModeToggle />
                        </div>
                        <div class="md:hidden">
                            <ModeToggle />
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ModeToggle() -> impl IntoView {
    let display = expect_context::<DisplayModeContext>();
    let is_dark = move || display.get().is_dark();
    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class="p-2 rounded-lg bg-light dark:bg-dark hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
            on:click=move |_| display.toggle()
            aria-label=label
            title=label
        >
            {move || {
                if is_dark() {
                    view! { <SunIcon /> }.into_any()
                } else {
                    view! { <MoonIcon /> }.into_any()
                }
            }}
        </button>
    }
}
