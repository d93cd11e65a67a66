use crate::capability::CapabilityInputs;
use crate::error::EnvError;
use crate::nav::SectionId;
use crate::pointer::PointerPosition;
use crate::reveal::{observation_thresholds, visible_fraction};
use crate::scope::{EventSource, StyleTarget, Subscription, SubscriptionLedger};
use gloo_events::EventListener;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, TouchEvent, Window,
};

pub fn window() -> Result<Window, EnvError> {
    web_sys::window().ok_or(EnvError::NoWindow)
}

pub fn document() -> Result<Document, EnvError> {
    window()?.document().ok_or(EnvError::NoDocument)
}

pub fn body() -> Result<HtmlElement, EnvError> {
    document()?.body().ok_or(EnvError::NoBody)
}

pub fn root_element() -> Result<HtmlElement, EnvError> {
    document()?
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(EnvError::NoDocument)
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn viewport_size() -> (f64, f64) {
    let fallback = CapabilityInputs::fallback();
    let Ok(win) = window() else {
        return (f64::from(fallback.width), f64::from(fallback.height));
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(fallback.width));
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(fallback.height));

    (width, height)
}

fn prefers_reduced_motion(win: &Window) -> bool {
    win.match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn capability_inputs() -> CapabilityInputs {
    let Ok(win) = window() else {
        return CapabilityInputs::fallback();
    };

    let (width, height) = viewport_size();
    let cores = win.navigator().hardware_concurrency();

    CapabilityInputs {
        width: width.max(0.0).round() as u32,
        height: height.max(0.0).round() as u32,
        hardware_concurrency: (cores >= 1.0).then(|| cores as u32),
        prefers_reduced_motion: prefers_reduced_motion(&win),
    }
}

pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn section_offsets() -> Vec<(SectionId, Option<f64>)> {
    let document = document().ok();

    SectionId::ALL
        .iter()
        .map(|id| {
            let top = document
                .as_ref()
                .and_then(|doc| doc.get_element_by_id(id.as_str()))
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .map(|element| f64::from(element.offset_top()));
            (*id, top)
        })
        .collect()
}

pub fn scroll_to_section(id: SectionId) -> Result<(), EnvError> {
    let element = document()?
        .get_element_by_id(id.as_str())
        .ok_or(EnvError::NotMounted)?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn event_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

pub fn pointer_position(event: &Event) -> Option<PointerPosition> {
    let (client_x, client_y) = if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        (touch.client_x(), touch.client_y())
    } else {
        let mouse_event = event.dyn_ref::<MouseEvent>()?;
        (mouse_event.client_x(), mouse_event.client_y())
    };

    let (width, height) = viewport_size();
    Some(PointerPosition::from_client(
        f64::from(client_x),
        f64::from(client_y),
        width,
        height,
    ))
}

pub fn seeded_rng() -> fastrand::Rng {
    let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
    fastrand::Rng::with_seed(noise ^ js_sys::Date::now() as u64)
}

pub struct DomEvents {
    target: EventTarget,
    ledger: SubscriptionLedger,
}

impl DomEvents {
    pub fn window(ledger: &SubscriptionLedger) -> Result<Self, EnvError> {
        Ok(Self {
            target: window()?.into(),
            ledger: ledger.clone(),
        })
    }

    pub fn document(ledger: &SubscriptionLedger) -> Result<Self, EnvError> {
        Ok(Self {
            target: document()?.into(),
            ledger: ledger.clone(),
        })
    }
}

impl EventSource for DomEvents {
    type Event = Event;

    fn listen(&self, event: &'static str, mut callback: Box<dyn FnMut(&Event)>) -> Subscription {
        let listener = EventListener::new(&self.target, event, move |event| callback(event));
        Subscription::new(listener, &self.ledger)
    }
}

#[derive(Clone)]
pub struct ElementStyle(pub HtmlElement);

impl StyleTarget for ElementStyle {
    fn property(&self, name: &str) -> Option<String> {
        self.0
            .style()
            .get_property_value(name)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), EnvError> {
        self.0
            .style()
            .set_property(name, value)
            .map_err(|error| EnvError::Style(js_detail(error)))
    }

    fn remove_property(&self, name: &str) -> Result<(), EnvError> {
        self.0
            .style()
            .remove_property(name)
            .map(|_| ())
            .map_err(|error| EnvError::Style(js_detail(error)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), EnvError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|error| EnvError::Style(js_detail(error)))
    }

    fn remove_class(&self, class: &str) -> Result<(), EnvError> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|error| EnvError::Style(js_detail(error)))
    }
}

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: IntersectionCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_visibility(
    element: &Element,
    threshold: f64,
    mut on_sample: impl FnMut(f64) + 'static,
) -> Result<RevealObserver, EnvError> {
    let callback: IntersectionCallback =
        Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let viewport_height = entry
                    .root_bounds()
                    .map(|bounds| bounds.height())
                    .unwrap_or(0.0);
                on_sample(visible_fraction(
                    entry.intersection_ratio(),
                    entry.intersection_rect().height(),
                    viewport_height,
                ));
            }
        });

    let thresholds: Array = observation_thresholds(threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|error| EnvError::ObserverUnavailable(js_detail(error)))?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}
