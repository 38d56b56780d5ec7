use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{Icon, Section, FOOTER_LINKS, PROFILE};

use super::{
    icons::Glyph,
    links::{SectionLinks, SocialLinks},
};

fn copyright_notice(year: i32) -> String {
    format!("© {year} All rights reserved.")
}

/// The year is read from the clock where the footer renders. Hydration keeps
/// the server's text, so a client on the far side of New Year still sees the
/// server's year until the next full load.
#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-gray-50 dark:bg-gray-900 py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center">
                    <div class="flex space-x-6 mb-8">
                        <SocialLinks
                            links=FOOTER_LINKS
                            link_class="text-2xl text-gray-600 dark:text-gray-400 hover:text-primary dark:hover:text-primary transition-colors"
                        />
                    </div>
                    <div class="text-center text-gray-600 dark:text-gray-400">
                        <p class="flex items-center justify-center">
                            "Made with"
                            <Glyph icon=Icon::Heart class="mx-2 text-red-500 animate-pulse" />
                            "by"
                            <a href=Section::Home.anchor() class="ml-2 text-primary hover:underline">
                                {PROFILE.name}
                            </a>
                        </p>
                        <p class="mt-2">{copyright_notice(year)}</p>
                    </div>
                    <nav class="mt-8 flex flex-wrap justify-center gap-6 text-sm text-gray-600 dark:text-gray-400">
                        <SectionLinks link_class="hover:text-primary transition-colors" />
                    </nav>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn footer_shows_the_current_year_once() {
        let html = Owner::new_root(None).with(|| view! { <Footer /> }.to_html());
        let notice = copyright_notice(Utc::now().year());
        assert_eq!(html.matches(notice.as_str()).count(), 1);
        assert!(html.contains(&format!("href=\"{}\"", Section::Home.anchor())));
    }
}
