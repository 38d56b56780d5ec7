use leptos::{either::Either, ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::{
    contact::{ContactForm, Field, SimulatedTransport, SubmissionStatus, Transport},
    content::{ContactChannel, Section, CONTACT_CHANNELS},
    reveal::{Entrance, Stagger},
};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Revealed},
};

const TITLE: Entrance = Entrance::rise(30, 600);
const INFO: Entrance = Entrance::rise(40, 700).shifted(-20);
const CHANNEL: Entrance = Entrance::rise(20, 500);
const FORM: Entrance = Entrance::rise(40, 700).shifted(20).delayed(300);
const STAGGER: Stagger = Stagger::new(100, 200);

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-primary focus:border-transparent dark:bg-gray-800 dark:text-white";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";

#[component]
pub fn ContactSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);

    view! {
        <section id=Section::Contact.id() class="section-padding">
            <div class="container mx-auto px-4">
                <div node_ref=container class="max-w-6xl mx-auto">
                    <Revealed visible entrance=STAGGER.apply(TITLE, 0)>
                        <h2 class="section-title">"Get in Touch"</h2>
                    </Revealed>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                        <Revealed visible entrance=STAGGER.apply(INFO, 1) class="space-y-8">
                            <div>
                                <h3 class="text-2xl font-semibold mb-4">"Contact Information"</h3>
                                <p class="text-gray-600 dark:text-gray-300 mb-8">
                                    "Feel free to reach out to me for any questions or opportunities. I'm always open to discussing new projects and ideas."
                                </p>
                            </div>
                            <ChannelList channels=CONTACT_CHANNELS visible />
                        </Revealed>
                        <Revealed visible entrance=FORM class="card">
                            <ContactFormView />
                        </Revealed>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ChannelList(
    channels: &'static [ContactChannel],
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {channels
                .iter()
                .enumerate()
                .map(|(i, channel)| {
                    let entrance = STAGGER.apply(CHANNEL, i);
                    let style = move || entrance.style(visible.get());
                    let body = match channel.link {
                        Some(href) => {
                            Either::Left(
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="contact-channel flex items-start space-x-4 text-gray-600 dark:text-gray-300 hover:text-primary dark:hover:text-primary transition-all hover:translate-x-1"
                                    >
                                        <ChannelBody channel=*channel />
                                    </a>
                                },
                            )
                        }
                        None => {
                            Either::Right(
                                view! {
                                    <div class="contact-channel flex items-start space-x-4 transition-transform hover:translate-x-1">
                                        <ChannelBody channel=*channel />
                                    </div>
                                },
                            )
                        }
                    };
                    view! { <div style=style>{body}</div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ChannelBody(channel: ContactChannel) -> impl IntoView {
    view! {
        <div class="text-primary text-xl transition-transform hover:scale-110">
            <Glyph icon=channel.icon />
        </div>
        <div>
            <h4 class="font-medium">{channel.title}</h4>
            <p>{channel.text}</p>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let pending = move || form.with(ContactForm::is_pending);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        match started {
            Ok(message) => {
                log::debug!("sending contact message");
                spawn_local(async move {
                    let outcome = SimulatedTransport::default().deliver(&message).await;
                    form.update(|f| f.complete(outcome));
                });
            }
            Err(err) => log::warn!("contact form rejected: {err}"),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <TextField form field=Field::Name />
            <TextField form field=Field::Email kind="email" />
            <TextField form field=Field::Subject />
            <div>
                <label for=Field::Message.id() class=LABEL_CLASS>
                    {Field::Message.label()}
                </label>
                <textarea
                    id=Field::Message.id()
                    name=Field::Message.id()
                    required=true
                    rows=4
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                    on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=pending
                class=move || {
                    if pending() {
                        "btn btn-primary w-full opacity-75 cursor-not-allowed"
                    } else {
                        "btn btn-primary w-full transition-transform hover:scale-[1.02] active:scale-[0.98]"
                    }
                }
            >
                {move || if pending() { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                form.with(|f| {
                    let class = match f.status() {
                        SubmissionStatus::Error => "text-red-600 dark:text-red-400 text-center",
                        _ => "text-green-600 dark:text-green-400 text-center",
                    };
                    f.status_text().map(|text| view! { <p class=class role="status">{text}</p> })
                })
            }}
        </form>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.id() class=LABEL_CLASS>
                {field.label()}
            </label>
            <input
                type=kind
                id=field.id()
                name=field.id()
                required=true
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_channels() -> String {
        Owner::new_root(None).with(|| {
            view! { <ChannelList channels=CONTACT_CHANNELS visible=Signal::derive(|| false) /> }
                .to_html()
        })
    }

    #[test]
    fn renders_every_channel_in_order() {
        let html = render_channels();
        assert_eq!(html.matches("contact-channel").count(), CONTACT_CHANNELS.len());
        let positions = CONTACT_CHANNELS
            .iter()
            .map(|c| html.find(&format!(">{}<", c.title)).expect("channel rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_linked_channels_are_anchors() {
        let html = render_channels();
        let linked = CONTACT_CHANNELS.iter().filter(|c| c.link.is_some()).count();
        assert_eq!(html.matches("<a ").count(), linked);
        assert!(html.contains("href=\"mailto:"));
    }

    #[test]
    fn form_renders_required_fields() {
        let html = Owner::new_root(None).with(|| view! { <ContactFormView /> }.to_html());
        assert_eq!(html.matches(" required").count(), Field::ALL.len());
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("role=\"status\""));
    }
}
