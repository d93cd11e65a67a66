use crate::capability::CapabilityState;
use crate::error::EnvError;
use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

pub const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

#[derive(Clone, Debug, Default)]
pub struct SubscriptionLedger {
    live: Rc<Cell<usize>>,
}

impl PartialEq for SubscriptionLedger {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.live, &other.live)
    }
}

impl SubscriptionLedger {
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

pub struct Subscription {
    ledger: SubscriptionLedger,
    _handle: Box<dyn Any>,
}

impl Subscription {
    pub fn new(handle: impl Any, ledger: &SubscriptionLedger) -> Self {
        ledger.live.set(ledger.live.get() + 1);
        Self {
            ledger: ledger.clone(),
            _handle: Box::new(handle),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get().saturating_sub(1));
    }
}

pub trait EventSource {
    type Event;

    fn listen(
        &self,
        event: &'static str,
        callback: Box<dyn FnMut(&Self::Event)>,
    ) -> Subscription;
}

pub fn watch_viewport<S: EventSource>(source: &S, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
    VIEWPORT_EVENTS
        .iter()
        .map(|&event| {
            let on_change = on_change.clone();
            source.listen(event, Box::new(move |_: &S::Event| on_change()))
        })
        .collect()
}

pub trait StyleTarget {
    fn property(&self, name: &str) -> Option<String>;
    fn set_property(&self, name: &str, value: &str) -> Result<(), EnvError>;
    fn remove_property(&self, name: &str) -> Result<(), EnvError>;
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<(), EnvError>;
    fn remove_class(&self, class: &str) -> Result<(), EnvError>;
}

enum Undo {
    Property { name: String, previous: Option<String> },
    Class(String),
}

/// Style mutations applied through this handle are reverted, newest first,
/// when it drops. Nested handles on the same target must drop in reverse
/// creation order, which component unmounting guarantees.
pub struct PresentationFlags<T: StyleTarget> {
    target: T,
    undo: Vec<Undo>,
}

impl<T: StyleTarget> PresentationFlags<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            undo: Vec::new(),
        }
    }

    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        let previous = self.target.property(name);
        self.target.set_property(name, value)?;
        self.undo.push(Undo::Property {
            name: name.to_string(),
            previous,
        });
        Ok(())
    }

    /// Adds a class. If the class was already present the handle leaves it
    /// in place on release.
    pub fn add_class(&mut self, class: &str) -> Result<(), EnvError> {
        if self.target.has_class(class) {
            return Ok(());
        }

        self.target.add_class(class)?;
        self.undo.push(Undo::Class(class.to_string()));
        Ok(())
    }

    #[cfg(test)]
    fn applied(&self) -> usize {
        self.undo.len()
    }
}

impl<T: StyleTarget> Drop for PresentationFlags<T> {
    fn drop(&mut self) {
        while let Some(undo) = self.undo.pop() {
            let _ = match undo {
                Undo::Property {
                    name,
                    previous: Some(previous),
                } => self.target.set_property(&name, &previous),
                Undo::Property {
                    name,
                    previous: None,
                } => self.target.remove_property(&name),
                Undo::Class(class) => self.target.remove_class(&class),
            };
        }
    }
}

pub fn layout_properties(state: &CapabilityState) -> Vec<(&'static str, String)> {
    let mut properties = vec![
        ("--vh", format!("{}px", f64::from(state.screen_height) * 0.01)),
        ("--vw", format!("{}px", f64::from(state.screen_width) * 0.01)),
    ];

    if state.is_mobile() {
        for (name, side) in [
            ("--mobile-safe-top", "top"),
            ("--mobile-safe-bottom", "bottom"),
            ("--mobile-safe-left", "left"),
            ("--mobile-safe-right", "right"),
        ] {
            properties.push((name, format!("env(safe-area-inset-{side}, 0px)")));
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityInputs, MotionPolicy};
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    type Listener = (&'static str, Rc<Cell<bool>>, Rc<RefCell<Box<dyn FnMut(&())>>>);

    struct Registered(Rc<Cell<bool>>);

    impl Drop for Registered {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    #[derive(Default)]
    struct FakeWindow {
        ledger: SubscriptionLedger,
        listeners: RefCell<Vec<Listener>>,
    }

    impl FakeWindow {
        fn fire(&self, event: &str) -> usize {
            let listeners: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .filter(|(kind, alive, _)| *kind == event && alive.get())
                .map(|(_, _, callback)| callback.clone())
                .collect();

            for callback in &listeners {
                let mut callback = callback.borrow_mut();
                (*callback)(&());
            }
            listeners.len()
        }
    }

    impl EventSource for FakeWindow {
        type Event = ();

        fn listen(&self, event: &'static str, callback: Box<dyn FnMut(&())>) -> Subscription {
            let alive = Rc::new(Cell::new(true));
            self.listeners
                .borrow_mut()
                .push((event, alive.clone(), Rc::new(RefCell::new(callback))));
            Subscription::new(Registered(alive), &self.ledger)
        }
    }

    #[derive(Clone, Default)]
    struct FakeBody {
        properties: Rc<RefCell<BTreeMap<String, String>>>,
        classes: Rc<RefCell<BTreeSet<String>>>,
    }

    impl StyleTarget for FakeBody {
        fn property(&self, name: &str) -> Option<String> {
            self.properties
                .borrow()
                .get(name)
                .filter(|value| !value.is_empty())
                .cloned()
        }

        fn set_property(&self, name: &str, value: &str) -> Result<(), EnvError> {
            self.properties
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn remove_property(&self, name: &str) -> Result<(), EnvError> {
            self.properties.borrow_mut().remove(name);
            Ok(())
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn add_class(&self, class: &str) -> Result<(), EnvError> {
            self.classes.borrow_mut().insert(class.to_string());
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<(), EnvError> {
            self.classes.borrow_mut().remove(class);
            Ok(())
        }
    }

    #[test]
    fn viewport_watch_fires_on_both_events() {
        let window = FakeWindow::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _subscriptions = watch_viewport(&window, Rc::new(move || counter.set(counter.get() + 1)));

        assert_eq!(window.ledger.live(), 2);
        window.fire("resize");
        window.fire("orientationchange");
        window.fire("scroll");
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn teardown_leaves_no_subscriptions() {
        let window = FakeWindow::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let subscriptions = watch_viewport(&window, Rc::new(move || counter.set(counter.get() + 1)));

        drop(subscriptions);

        assert_eq!(window.ledger.live(), 0);
        assert_eq!(window.fire("resize"), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn flags_revert_to_prior_values() {
        let body = FakeBody::default();
        body.set_property("overflow", "auto").expect("fake accepts");

        {
            let mut flags = PresentationFlags::new(body.clone());
            flags.set_property("overflow", "hidden").expect("fake accepts");
            flags
                .set_property("overscroll-behavior", "none")
                .expect("fake accepts");
            flags.add_class("reduced-motion").expect("fake accepts");

            assert_eq!(flags.applied(), 3);
            assert_eq!(body.property("overflow").as_deref(), Some("hidden"));
            assert!(body.has_class("reduced-motion"));
        }

        assert_eq!(body.property("overflow").as_deref(), Some("auto"));
        assert_eq!(body.property("overscroll-behavior"), None);
        assert!(!body.has_class("reduced-motion"));
    }

    #[test]
    fn nested_flags_unwind_in_order() {
        let body = FakeBody::default();
        let mut outer = PresentationFlags::new(body.clone());
        outer.set_property("overflow", "hidden").expect("fake accepts");
        outer.add_class("reduced-motion").expect("fake accepts");

        let mut inner = PresentationFlags::new(body.clone());
        inner.set_property("overflow", "clip").expect("fake accepts");
        inner.add_class("reduced-motion").expect("fake accepts");
        assert_eq!(inner.applied(), 1);

        drop(inner);
        assert_eq!(body.property("overflow").as_deref(), Some("hidden"));
        assert!(body.has_class("reduced-motion"));

        drop(outer);
        assert_eq!(body.property("overflow"), None);
        assert!(!body.has_class("reduced-motion"));
    }

    fn state(width: u32, height: u32) -> CapabilityState {
        CapabilityState::classify(
            CapabilityInputs {
                width,
                height,
                hardware_concurrency: None,
                prefers_reduced_motion: false,
            },
            MotionPolicy {
                low_end_cores: 2,
                mobile_low_end_reduces_motion: true,
            },
        )
    }

    #[test]
    fn desktop_layout_sets_viewport_units_only() {
        let properties = layout_properties(&state(1200, 800));
        assert_eq!(
            properties,
            vec![("--vh", "8px".to_string()), ("--vw", "12px".to_string())]
        );
    }

    #[test]
    fn mobile_layout_adds_safe_area_insets() {
        let properties = layout_properties(&state(400, 800));
        assert_eq!(properties.len(), 6);
        assert!(properties.contains(&(
            "--mobile-safe-top",
            "env(safe-area-inset-top, 0px)".to_string()
        )));
    }
}
