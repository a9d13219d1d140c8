use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::AppHandle;

use crate::anchor::ScrollMotion;
use crate::components::toast_view::{ToastMsg, ToastProps, ToastView};
use crate::error::LandingError;
use crate::lead_form::SubmitButtonState;
use crate::page::Page;
use crate::reveal::{RevealPlan, STAGGERED_GRIDS};
use crate::ripple::Ripple;
use crate::toast::{Toast, ToastId};
use crate::web::elements::{query_all, PageElements};

struct MountedToast {
    id: ToastId,
    host: Element,
    app: AppHandle<ToastView>,
}

pub struct WebPage {
    elements: PageElements,
    toast_fade_ms: u32,
    toast: Option<MountedToast>,
}

impl WebPage {
    pub fn new(elements: PageElements, toast_fade_ms: u32) -> Self {
        if let Some(cta) = &elements.sticky_cta {
            let _ = cta
                .style()
                .set_property("transition", "transform 200ms cubic-bezier(0.2, 0.8, 0.2, 1)");
        }
        Self {
            elements,
            toast_fade_ms,
            toast: None,
        }
    }

    fn try_mount_toast(&self, toast: &Toast) -> Result<(Element, AppHandle<ToastView>), LandingError> {
        let body = self.elements.document.body().ok_or(LandingError::NoDocument)?;
        let host = self.elements.document.create_element("div")?;
        body.append_child(&host)?;

        let props = ToastProps {
            message: toast.message.clone(),
            kind: toast.kind,
            fade_ms: self.toast_fade_ms,
        };
        let app = yew::Renderer::<ToastView>::with_root_and_props(host.clone(), props).render();
        Ok((host, app))
    }
}

fn animate_ripple(span: &Element, ripple: &Ripple) -> Result<(), LandingError> {
    let keyframes = serde_wasm_bindgen::to_value(&ripple.keyframes()).map_err(JsValue::from)?;
    let timing = serde_wasm_bindgen::to_value(&ripple.timing()).map_err(JsValue::from)?;

    // Element.animate is only exposed by web-sys behind its unstable cfg.
    let animate: js_sys::Function = js_sys::Reflect::get(span, &JsValue::from_str("animate"))?.dyn_into()?;
    let animation = animate.call2(span, &keyframes, &timing)?;

    let finished = span.clone();
    let on_finish = Closure::once_into_js(move || finished.remove());
    js_sys::Reflect::set(&animation, &JsValue::from_str("onfinish"), &on_finish)?;
    Ok(())
}

impl Page for WebPage {
    fn set_nav_scrolled(&mut self, scrolled: bool) {
        if let Some(nav) = &self.elements.nav {
            let _ = nav.class_list().toggle_with_force("scrolled", scrolled);
        }
    }

    fn prepare_reveal(&mut self, plan: &RevealPlan) {
        for section in &self.elements.sections {
            let _ = section.class_list().add_1("reveal");
        }

        for grid in query_all::<Element>(&self.elements.document, STAGGERED_GRIDS) {
            let cards = grid.children();
            for index in 0..cards.length() {
                if let Some(card) = cards.item(index).and_then(|c| c.dyn_into::<HtmlElement>().ok()) {
                    let delay = format!("{}ms", plan.delay_for(index as usize));
                    let _ = card.style().set_property("transition-delay", &delay);
                }
            }
        }
    }

    fn reveal_section(&mut self, index: usize) {
        if let Some(section) = self.elements.sections.get(index) {
            let _ = section.class_list().add_1("visible");
        }
    }

    fn scroll_window_to(&mut self, top: f64, motion: ScrollMotion) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match motion {
            ScrollMotion::Smooth => ScrollBehavior::Smooth,
            ScrollMotion::Instant => ScrollBehavior::Auto,
        });
        self.elements.window.scroll_to_with_scroll_to_options(&options);
    }

    fn submit_label(&self) -> String {
        self.elements
            .submit_button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn render_submit_button(&mut self, state: &SubmitButtonState) {
        let Some(button) = &self.elements.submit_button else {
            return;
        };
        button.set_disabled(state.disabled);
        button.set_text_content(Some(state.label.as_str()));
        let style = button.style();
        let _ = match &state.highlight_color {
            Some(color) => style.set_property("background", color),
            None => style.remove_property("background").map(|_| ()),
        };
    }

    fn clear_form(&mut self) {
        if let Some(form) = &self.elements.form {
            form.reset();
        }
    }

    fn mount_toast(&mut self, id: ToastId, toast: &Toast) {
        match self.try_mount_toast(toast) {
            Ok((host, app)) => self.toast = Some(MountedToast { id, host, app }),
            Err(err) => debug!("Could not mount toast: {}", err),
        }
    }

    fn fade_out_toast(&mut self, id: ToastId) {
        if let Some(mounted) = self.toast.as_ref().filter(|t| t.id == id) {
            mounted.app.send_message(ToastMsg::FadeOut);
        }
    }

    fn remove_toast(&mut self, id: ToastId) {
        if self.toast.as_ref().map(|t| t.id) != Some(id) {
            return;
        }
        if let Some(MountedToast { host, app, .. }) = self.toast.take() {
            app.destroy();
            host.remove();
        }
    }

    fn set_sticky_cta_hidden(&mut self, hidden: bool) {
        if let Some(cta) = &self.elements.sticky_cta {
            let transform = if hidden { "translateY(100%)" } else { "translateY(0)" };
            let _ = cta.style().set_property("transform", transform);
        }
    }

    fn toggle_faq(&mut self, index: usize) {
        if let Some(item) = self.elements.faq_items.get(index) {
            item.set_open(!item.open());
        }
    }

    fn set_phone_value(&mut self, value: &str) {
        if let Some(phone) = &self.elements.phone {
            phone.set_value(value);
        }
    }

    fn spawn_ripple(&mut self, button: usize, ripple: &Ripple) {
        let Some(button) = self.elements.primary_buttons.get(button) else {
            return;
        };
        let Ok(span) = self.elements.document.create_element("span") else {
            return;
        };

        span.set_class_name("btn-ripple");
        let _ = span.set_attribute(
            "style",
            &format!(
                "position: absolute; left: {}px; top: {}px; width: 0; height: 0; border-radius: 50%; \
                 background: rgba(255, 255, 255, 0.3); transform: translate(-50%, -50%); pointer-events: none;",
                ripple.x, ripple.y
            ),
        );

        let button_style = button.style();
        let _ = button_style.set_property("position", "relative");
        let _ = button_style.set_property("overflow", "hidden");
        if button.append_child(&span).is_err() {
            return;
        }

        if let Err(err) = animate_ripple(&span, ripple) {
            debug!("Ripple animation failed: {}", err);
            span.remove();
        }
    }

    fn focus_hero(&mut self) {
        let target = self.elements.hero.as_ref().and_then(|hero| {
            hero.query_selector("a, button, input, [tabindex=\"0\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        });
        if let Some(target) = target {
            let _ = target.focus();
        }
    }
}
