use leptos::prelude::*;

use crate::content::{Section, SocialLink};

use super::icons::Glyph;

/// A row of external profile links, one icon anchor per entry.
#[component]
pub fn SocialLinks(links: &'static [SocialLink], link_class: &'static str) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label=link.label
                >
                    <Glyph icon=link.icon />
                </a>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn SectionLinks(link_class: &'static str) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a href=section.anchor() class=link_class>
                    {section.label()}
                </a>
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{Icon, FOOTER_LINKS, HERO_LINKS};

    const FIXTURE: &[SocialLink] = &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/someone",
            icon: Icon::GitHub,
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://linkedin.com/in/someone",
            icon: Icon::LinkedIn,
        },
    ];

    fn render(links: &'static [SocialLink]) -> String {
        Owner::new_root(None).with(|| view! { <SocialLinks links link_class="social" /> }.to_html())
    }

    fn attribute_values<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
        let marker = format!("{name}=\"");
        html.split(marker.as_str())
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn renders_one_labelled_anchor_per_link_in_order() {
        let html = render(FIXTURE);
        assert_eq!(attribute_values(&html, "aria-label"), vec!["GitHub", "LinkedIn"]);
        assert_eq!(
            attribute_values(&html, "href"),
            vec!["https://github.com/someone", "https://linkedin.com/in/someone"]
        );
        assert!(html.contains("devicon-github-plain"));
    }

    #[test]
    fn renders_configured_profile_links() {
        for links in [HERO_LINKS, FOOTER_LINKS] {
            let html = render(links);
            let labels = links.iter().map(|l| l.label).collect::<Vec<_>>();
            let urls = links.iter().map(|l| l.url).collect::<Vec<_>>();
            assert_eq!(attribute_values(&html, "aria-label"), labels);
            assert_eq!(attribute_values(&html, "href"), urls);
        }
    }

    #[test]
    fn section_links_follow_page_order() {
        let html =
            Owner::new_root(None).with(|| view! { <SectionLinks link_class="nav" /> }.to_html());
        let anchors = Section::ALL.map(Section::anchor);
        assert_eq!(attribute_values(&html, "href"), anchors.to_vec());
        assert_eq!(html.matches("class=\"nav\"").count(), Section::ALL.len());
    }
}
