use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use crate::anchor::{self, AnchorJump};
use crate::controller::Motion;
use crate::events::{Click, EventSource, Handler, InputField, Intersection, KeyDown, Watched};
use crate::faq;
use crate::keyboard::KeyPress;
use crate::lead_form::FormState;
use crate::ripple::ClickPoint;
use crate::sticky_cta::Landmark;
use crate::web::elements::PageElements;

type Shared<T> = Rc<RefCell<Handler<T>>>;

fn share<T>(handler: Handler<T>) -> Shared<T> {
    Rc::new(RefCell::new(handler))
}

// Handlers for these never call preventDefault.
const PASSIVE_EVENTS: &[&str] = &["scroll"];

fn is_passive(kind: &str) -> bool {
    PASSIVE_EVENTS.contains(&kind)
}

/// Registers a listener for the lifetime of the page.
fn listen(target: &EventTarget, kind: &str, callback: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    let options = AddEventListenerOptions::new();
    options.set_passive(is_passive(kind));
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("Could not listen for {}: {:?}", kind, err);
    }
    closure.forget();
}

pub struct DomEvents {
    elements: PageElements,
    motion: Motion,
    reveal_threshold: f64,
    sticky_hero_threshold: f64,
    sticky_final_threshold: f64,
}

impl DomEvents {
    pub fn new(
        elements: PageElements,
        motion: Motion,
        reveal_threshold: f64,
        sticky_hero_threshold: f64,
        sticky_final_threshold: f64,
    ) -> Self {
        Self {
            elements,
            motion,
            reveal_threshold,
            sticky_hero_threshold,
            sticky_final_threshold,
        }
    }

    fn observe(
        &self,
        targets: Vec<(Element, Watched)>,
        threshold: f64,
        once: bool,
        handler: Shared<Intersection>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(watched) = watched_for(&target) else {
                        continue;
                    };
                    let intersecting = entry.is_intersecting();
                    (&mut *handler.borrow_mut())(Intersection { watched, intersecting });
                    if once && intersecting {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for (element, watched) in targets {
                    let _ = element.set_attribute(WATCH_ATTR, &encode_watched(watched));
                    observer.observe(&element);
                }
            }
            Err(err) => warn!("IntersectionObserver unavailable: {:?}", err),
        }
        callback.forget();
    }
}

const WATCH_ATTR: &str = "data-landing-watch";

fn encode_watched(watched: Watched) -> String {
    match watched {
        Watched::Section(index) => format!("section:{}", index),
        Watched::Landmark(Landmark::Hero) => "hero".to_string(),
        Watched::Landmark(Landmark::FinalCta) => "final-cta".to_string(),
    }
}

fn watched_for(target: &Element) -> Option<Watched> {
    decode_watched(&target.get_attribute(WATCH_ATTR)?)
}

fn decode_watched(value: &str) -> Option<Watched> {
    match value {
        "hero" => Some(Watched::Landmark(Landmark::Hero)),
        "final-cta" => Some(Watched::Landmark(Landmark::FinalCta)),
        other => other
            .strip_prefix("section:")
            .and_then(|index| index.parse().ok())
            .map(Watched::Section),
    }
}

impl EventSource for DomEvents {
    fn on_scroll(&mut self, handler: Handler<f64>) {
        let handler = share(handler);
        let window = self.elements.window.clone();
        listen(&self.elements.window, "scroll", move |_: Event| {
            let y = window.scroll_y().unwrap_or(0.0);
            (&mut *handler.borrow_mut())(y);
        });
    }

    fn on_click(&mut self, handler: Handler<Click>) {
        let handler = share(handler);

        for anchor_el in &self.elements.anchors {
            let handler = handler.clone();
            let link = anchor_el.clone();
            let elements = self.elements.clone();
            listen(anchor_el, "click", move |event: Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let target_top = anchor::target_selector(&href)
                    .and_then(|selector| elements.document.query_selector(selector).ok().flatten())
                    .map(|target| target.get_bounding_client_rect().top());
                let jump = AnchorJump {
                    target_top,
                    page_y_offset: elements.window.page_y_offset().unwrap_or(0.0),
                    nav_height: elements.nav.as_ref().map_or(0.0, |nav| nav.offset_height() as f64),
                };
                (&mut *handler.borrow_mut())(Click::Anchor(jump));
            });
        }

        if self.motion == Motion::Reduced {
            return;
        }
        for (index, button) in self.elements.primary_buttons.iter().enumerate() {
            let handler = handler.clone();
            let this = button.clone();
            listen(button, "click", move |event: Event| {
                let event: MouseEvent = event.unchecked_into();
                let rect = this.get_bounding_client_rect();
                let point = ClickPoint {
                    client_x: event.client_x() as f64,
                    client_y: event.client_y() as f64,
                    rect_left: rect.left(),
                    rect_top: rect.top(),
                };
                (&mut *handler.borrow_mut())(Click::Primary { button: index, point });
            });
        }
    }

    fn on_input(&mut self, handler: Handler<InputField>) {
        let Some(phone) = self.elements.phone.clone() else {
            return;
        };
        let handler = share(handler);
        let input = phone.clone();
        listen(&phone, "input", move |_: Event| {
            (&mut *handler.borrow_mut())(InputField::Phone(input.value()));
        });
    }

    fn on_intersect(&mut self, handler: Handler<Intersection>) {
        let handler = share(handler);

        if self.motion == Motion::Full {
            let sections = self
                .elements
                .sections
                .iter()
                .enumerate()
                .map(|(index, section)| (section.clone(), Watched::Section(index)))
                .collect();
            self.observe(sections, self.reveal_threshold, true, handler.clone());
        }

        if self.elements.sticky_cta.is_none() {
            return;
        }
        if let Some(hero) = &self.elements.hero {
            self.observe(
                vec![(hero.clone(), Watched::Landmark(Landmark::Hero))],
                self.sticky_hero_threshold,
                false,
                handler.clone(),
            );
        }
        if let Some(final_cta) = &self.elements.final_cta {
            self.observe(
                vec![(final_cta.clone(), Watched::Landmark(Landmark::FinalCta))],
                self.sticky_final_threshold,
                false,
                handler,
            );
        }
    }

    fn on_keydown(&mut self, handler: Handler<KeyDown>) {
        let handler = share(handler);

        for (index, item) in self.elements.faq_items.iter().enumerate() {
            let Some(summary) = item.query_selector("summary").ok().flatten() else {
                continue;
            };
            let handler = handler.clone();
            listen(&summary, "keydown", move |event: Event| {
                let event: KeyboardEvent = event.unchecked_into();
                let key = event.key();
                if faq::is_toggle_key(&key) {
                    event.prevent_default();
                }
                (&mut *handler.borrow_mut())(KeyDown::FaqSummary { item: index, key });
            });
        }

        let document = self.elements.document.clone();
        listen(&self.elements.document, "keydown", move |event: Event| {
            let event: KeyboardEvent = event.unchecked_into();
            let body_focused = match (document.active_element(), document.body()) {
                (Some(active), Some(body)) => {
                    let body: &Element = body.as_ref();
                    active == *body
                }
                _ => false,
            };
            let press = KeyPress {
                key: event.key(),
                shift: event.shift_key(),
                body_focused,
            };
            (&mut *handler.borrow_mut())(KeyDown::Document(press));
        });
    }

    fn on_submit(&mut self, handler: Handler<FormState>) {
        let Some(form) = self.elements.form.clone() else {
            return;
        };
        let handler = share(handler);
        let full_name = self.elements.full_name.clone();
        let phone = self.elements.phone.clone();
        listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let state = FormState::new(
                full_name.as_ref().map(|input| input.value()).unwrap_or_default(),
                phone.as_ref().map(|input| input.value()).unwrap_or_default(),
            );
            (&mut *handler.borrow_mut())(state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("scroll", true)]
    #[case("click", false)]
    #[case("submit", false)]
    #[case("keydown", false)]
    fn only_scroll_listens_passively(#[case] kind: &str, #[case] passive: bool) {
        assert_eq!(is_passive(kind), passive);
    }

    #[test]
    fn watched_targets_round_trip_through_the_attribute_value() {
        for watched in [
            Watched::Section(0),
            Watched::Section(12),
            Watched::Landmark(Landmark::Hero),
            Watched::Landmark(Landmark::FinalCta),
        ] {
            assert_eq!(decode_watched(&encode_watched(watched)), Some(watched));
        }
        assert_eq!(decode_watched("section:x"), None);
        assert_eq!(decode_watched(""), None);
    }
}
