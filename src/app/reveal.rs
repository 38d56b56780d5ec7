use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{Entrance, RevealLatch, RevealOptions, VisibilityObserver};

/// Browser `IntersectionObserver`, through leptos-use. The observer is
/// disconnected when the owning component is cleaned up.
pub struct IntersectionReveal;

pub struct RevealSubscription {
    stop: Arc<dyn Fn() + Send + Sync>,
}

impl RevealSubscription {
    pub fn stop(&self) {
        (self.stop)();
    }
}

impl VisibilityObserver<NodeRef<html::Div>> for IntersectionReveal {
    type Subscription = RevealSubscription;

    fn observe<F>(
        &self,
        target: NodeRef<html::Div>,
        options: RevealOptions,
        on_reveal: F,
    ) -> Self::Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let latch = Arc::new(Mutex::new(RevealLatch::new(options)));
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let Ok(mut latch) = latch.lock() else {
                    return;
                };
                for entry in entries {
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        on_reveal();
                    }
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![options.threshold]),
        );
        RevealSubscription {
            stop: Arc::new(stop),
        }
    }
}

/// Becomes `true` once `target` has scrolled into view.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let options = RevealOptions::default();
    let (revealed, set_revealed) = signal(false);
    let subscription = IntersectionReveal.observe(target, options, move || {
        log::debug!("section revealed");
        set_revealed.set(true);
    });
    Effect::new(move |_| {
        if revealed.get() && options.trigger_once {
            subscription.stop();
        }
    });
    revealed
}

/// Becomes `true` on the first frame after mount.
pub fn use_mount_reveal() -> ReadSignal<bool> {
    let (shown, set_shown) = signal(false);
    Effect::new(move |_| request_animation_frame(move || set_shown.set(true)));
    shown
}

/// Animates its children in. The entrance style sits on an outer wrapper so
/// it never replaces the transitions `class` brings along.
#[component]
pub fn Revealed(
    #[prop(into)] visible: Signal<bool>,
    entrance: Entrance,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div style=move || entrance.style(visible.get())>
            <div class=class>{children()}</div>
        </div>
    }
}
