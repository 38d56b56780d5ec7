//! Scroll-triggered entrance animations.
//!
//! A [`RevealLatch`] decides when an element counts as revealed, a
//! [`VisibilityObserver`] feeds it visibility changes from whatever renders
//! the page, and [`Entrance`] turns the revealed flag into inline styles.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must be inside the viewport.
    pub threshold: f64,
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealLatch {
    options: RevealOptions,
    visible: bool,
    fired: bool,
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: false,
            fired: false,
        }
    }

    /// Feed one visibility change. Returns `true` when the reveal callback
    /// should run.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.options.trigger_once && self.fired {
            return false;
        }
        let now_visible = is_intersecting && ratio >= self.options.threshold;
        let entered = now_visible && !self.visible;
        self.visible = now_visible;
        if entered {
            self.fired = true;
        }
        entered
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Whether the observer can be disconnected.
    pub fn is_done(&self) -> bool {
        self.options.trigger_once && self.fired
    }
}

/// Capability to watch a render target and report when it scrolls into view.
///
/// Implementations must run `on_reveal` at most once per reveal decided by a
/// [`RevealLatch`] built from `options`, and stop watching when the returned
/// subscription is stopped or the target is torn down.
pub trait VisibilityObserver<T> {
    type Subscription;

    fn observe<F>(&self, target: T, options: RevealOptions, on_reveal: F) -> Self::Subscription
    where
        F: Fn() + Send + Sync + 'static;
}

/// Start state and timing of one entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    pub const fn fade(duration_ms: u32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            scale: 1.0,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn rise(offset_y: i32, duration_ms: u32) -> Self {
        Self {
            offset_y,
            ..Self::fade(duration_ms)
        }
    }

    pub const fn shifted(self, offset_x: i32) -> Self {
        Self { offset_x, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn style(&self, visible: bool) -> String {
        let transition = format!(
            "transition:opacity {d}ms ease-out {w}ms,transform {d}ms ease-out {w}ms",
            d = self.duration_ms,
            w = self.delay_ms
        );
        if visible {
            format!("opacity:1;transform:none;{transition}")
        } else {
            format!(
                "opacity:0;transform:translate({}px,{}px) scale({});{transition}",
                self.offset_x, self.offset_y, self.scale
            )
        }
    }
}

/// Delays children of a revealed container one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub initial_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(initial_ms: u32, step_ms: u32) -> Self {
        Self {
            initial_ms,
            step_ms,
        }
    }

    pub fn delay(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial_ms.saturating_add(self.step_ms.saturating_mul(index))
    }

    pub fn apply(&self, entrance: Entrance, index: usize) -> Entrance {
        entrance.delayed(entrance.delay_ms.saturating_add(self.delay(index)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    type Watch = (RevealLatch, Box<dyn Fn() + Send + Sync>);

    /// Observer driven by hand, standing in for a browser viewport.
    #[derive(Default)]
    struct ManualObserver {
        watched: Mutex<Vec<(&'static str, Watch)>>,
    }

    impl ManualObserver {
        fn scroll(&self, target: &str, is_intersecting: bool, ratio: f64) {
            let mut watched = self.watched.lock().expect("observer lock");
            for (name, (latch, on_reveal)) in watched.iter_mut() {
                if *name == target && latch.observe(is_intersecting, ratio) {
                    on_reveal();
                }
            }
            watched.retain(|(_, (latch, _))| !latch.is_done());
        }

        fn watching(&self) -> usize {
            self.watched.lock().expect("observer lock").len()
        }
    }

    impl VisibilityObserver<&'static str> for ManualObserver {
        type Subscription = ();

        fn observe<F>(
            &self,
            target: &'static str,
            options: RevealOptions,
            on_reveal: F,
        ) -> Self::Subscription
        where
            F: Fn() + Send + Sync + 'static,
        {
            self.watched
                .lock()
                .expect("observer lock")
                .push((target, (RevealLatch::new(options), Box::new(on_reveal))));
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn fires_once_when_threshold_crossed() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        assert!(!latch.observe(true, 0.05));
        assert!(latch.observe(true, 0.1));
        assert!(latch.has_fired());
        assert!(!latch.observe(true, 0.9));
    }

    #[test]
    fn trigger_once_ignores_reentry() {
        let observer = ManualObserver::default();
        let (count, on_reveal) = counter();
        observer.observe("about", RevealOptions::default(), on_reveal);

        for _ in 0..5 {
            observer.scroll("about", true, 0.5);
            observer.scroll("about", false, 0.0);
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(observer.watching(), 0);
    }

    #[test]
    fn repeating_latch_fires_on_each_entry() {
        let options = RevealOptions {
            trigger_once: false,
            ..RevealOptions::default()
        };
        let observer = ManualObserver::default();
        let (count, on_reveal) = counter();
        observer.observe("skills", options, on_reveal);

        observer.scroll("skills", true, 0.3);
        observer.scroll("skills", true, 0.6);
        observer.scroll("skills", false, 0.0);
        observer.scroll("skills", true, 0.2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(observer.watching(), 1);
    }

    #[test]
    fn sections_reveal_independently() {
        let observer = ManualObserver::default();
        let (about, on_about) = counter();
        let (projects, on_projects) = counter();
        observer.observe("about", RevealOptions::default(), on_about);
        observer.observe("projects", RevealOptions::default(), on_projects);

        observer.scroll("projects", true, 1.0);
        assert_eq!(about.load(Ordering::SeqCst), 0);
        assert_eq!(projects.load(Ordering::SeqCst), 1);
        assert_eq!(observer.watching(), 1);
    }

    #[test]
    fn intersecting_below_threshold_is_not_visible() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        assert!(!latch.observe(true, 0.0));
        assert!(!latch.observe(false, 0.5));
        assert!(!latch.has_fired());
    }

    #[test]
    fn entrance_style_hides_until_visible() {
        let card = Entrance::rise(40, 700).scaled(0.95).delayed(100);
        let hidden = card.style(false);
        assert!(hidden.starts_with("opacity:0;transform:translate(0px,40px) scale(0.95);"));
        assert!(hidden.ends_with("transform 700ms ease-out 100ms"));

        let shown = card.style(true);
        assert!(shown.starts_with("opacity:1;transform:none;"));
        assert!(shown.contains("opacity 700ms ease-out 100ms"));
    }

    #[test]
    fn stagger_offsets_children_in_order() {
        let stagger = Stagger::new(100, 200);
        let delays = (0..3).map(|i| stagger.delay(i)).collect::<Vec<_>>();
        assert_eq!(delays, vec![100, 300, 500]);

        let item = Entrance::fade(500).delayed(50);
        assert_eq!(stagger.apply(item, 2).delay_ms, 550);
    }
}
