use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDetailsElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, Window,
};

/// Handles to every element the interactions touch, looked up once at boot.
/// Anything missing simply switches its feature off.
#[derive(Clone)]
pub struct PageElements {
    pub window: Window,
    pub document: Document,
    pub nav: Option<HtmlElement>,
    pub sections: Vec<Element>,
    pub hero: Option<Element>,
    pub final_cta: Option<Element>,
    pub sticky_cta: Option<HtmlElement>,
    pub form: Option<HtmlFormElement>,
    pub full_name: Option<HtmlInputElement>,
    pub phone: Option<HtmlInputElement>,
    pub submit_button: Option<HtmlButtonElement>,
    pub faq_items: Vec<HtmlDetailsElement>,
    pub primary_buttons: Vec<HtmlElement>,
    pub anchors: Vec<HtmlElement>,
}

impl PageElements {
    pub fn query(window: &Window, document: &Document) -> Self {
        let hero = query::<Element>(document, ".hero");
        // The sticky bar is driven by the hero; without one it is left alone.
        let sticky_cta = hero
            .as_ref()
            .and_then(|_| query::<HtmlElement>(document, ".mobile-sticky-cta"));
        let form = document
            .get_element_by_id("audit-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let submit_button = form.as_ref().and_then(|form| {
            form.query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        });

        let elements = Self {
            window: window.clone(),
            document: document.clone(),
            nav: query(document, ".sticky-nav"),
            sections: query_all(document, "section:not(.hero)"),
            hero,
            final_cta: query(document, ".final-cta"),
            sticky_cta,
            form,
            full_name: by_id(document, "full-name"),
            phone: by_id(document, "phone"),
            submit_button,
            faq_items: query_all(document, ".faq-item"),
            primary_buttons: query_all(document, ".btn-primary"),
            anchors: query_all(document, "a[href^=\"#\"]"),
        };
        elements.log_missing();
        elements
    }

    fn log_missing(&self) {
        if self.nav.is_none() {
            debug!("No .sticky-nav on page, scroll styling disabled");
        }
        if self.form.is_none() {
            debug!("No #audit-form on page, lead capture disabled");
        }
        if self.sticky_cta.is_none() {
            debug!("No .mobile-sticky-cta (or .hero) on page, sticky CTA disabled");
        }
    }
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}
