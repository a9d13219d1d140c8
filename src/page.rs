use crate::anchor::ScrollMotion;
use crate::lead_form::SubmitButtonState;
use crate::reveal::RevealPlan;
use crate::ripple::Ripple;
use crate::toast::{Toast, ToastId};

/// Everything the controller does to the document. The browser
/// implementation lives in `web::WebPage`; tests use `RecordingPage`.
pub trait Page {
    fn set_nav_scrolled(&mut self, scrolled: bool);

    fn prepare_reveal(&mut self, plan: &RevealPlan);
    fn reveal_section(&mut self, index: usize);

    fn scroll_window_to(&mut self, top: f64, motion: ScrollMotion);

    fn submit_label(&self) -> String;
    fn render_submit_button(&mut self, state: &SubmitButtonState);
    fn clear_form(&mut self);

    fn mount_toast(&mut self, id: ToastId, toast: &Toast);
    fn fade_out_toast(&mut self, id: ToastId);
    fn remove_toast(&mut self, id: ToastId);

    fn set_sticky_cta_hidden(&mut self, hidden: bool);
    fn toggle_faq(&mut self, index: usize);
    fn set_phone_value(&mut self, value: &str);
    fn spawn_ripple(&mut self, button: usize, ripple: &Ripple);
    fn focus_hero(&mut self);
}

#[cfg(test)]
pub mod testing {
    use std::collections::BTreeSet;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct MountedToast {
        pub id: ToastId,
        pub toast: Toast,
        pub fading: bool,
    }

    /// In-memory document. Toasts are kept in a list so tests can
    /// check that no more than one is ever mounted.
    #[derive(Debug)]
    pub struct RecordingPage {
        pub nav_scrolled: Option<bool>,
        pub nav_writes: usize,
        pub reveal_plan: Option<RevealPlan>,
        pub revealed: Vec<usize>,
        pub scrolls: Vec<(f64, ScrollMotion)>,
        pub button: SubmitButtonState,
        pub button_writes: usize,
        pub full_name: String,
        pub phone: String,
        pub toasts: Vec<MountedToast>,
        pub sticky_hidden: Option<bool>,
        pub open_faqs: BTreeSet<usize>,
        pub ripples: Vec<(usize, Ripple)>,
        pub hero_focused: usize,
    }

    impl Default for RecordingPage {
        fn default() -> Self {
            Self {
                nav_scrolled: None,
                nav_writes: 0,
                reveal_plan: None,
                revealed: Vec::new(),
                scrolls: Vec::new(),
                button: SubmitButtonState::idle("Book My Free Audit"),
                button_writes: 0,
                full_name: String::new(),
                phone: String::new(),
                toasts: Vec::new(),
                sticky_hidden: None,
                open_faqs: BTreeSet::new(),
                ripples: Vec::new(),
                hero_focused: 0,
            }
        }
    }

    impl RecordingPage {
        pub fn toast_messages(&self) -> Vec<&str> {
            self.toasts.iter().map(|t| t.toast.message.as_str()).collect()
        }
    }

    impl Page for RecordingPage {
        fn set_nav_scrolled(&mut self, scrolled: bool) {
            self.nav_scrolled = Some(scrolled);
            self.nav_writes += 1;
        }

        fn prepare_reveal(&mut self, plan: &RevealPlan) {
            self.reveal_plan = Some(plan.clone());
        }

        fn reveal_section(&mut self, index: usize) {
            self.revealed.push(index);
        }

        fn scroll_window_to(&mut self, top: f64, motion: ScrollMotion) {
            self.scrolls.push((top, motion));
        }

        fn submit_label(&self) -> String {
            self.button.label.clone()
        }

        fn render_submit_button(&mut self, state: &SubmitButtonState) {
            self.button = state.clone();
            self.button_writes += 1;
        }

        fn clear_form(&mut self) {
            self.full_name.clear();
            self.phone.clear();
        }

        fn mount_toast(&mut self, id: ToastId, toast: &Toast) {
            self.toasts.push(MountedToast {
                id,
                toast: toast.clone(),
                fading: false,
            });
        }

        fn fade_out_toast(&mut self, id: ToastId) {
            if let Some(mounted) = self.toasts.iter_mut().find(|t| t.id == id) {
                mounted.fading = true;
            }
        }

        fn remove_toast(&mut self, id: ToastId) {
            self.toasts.retain(|t| t.id != id);
        }

        fn set_sticky_cta_hidden(&mut self, hidden: bool) {
            self.sticky_hidden = Some(hidden);
        }

        fn toggle_faq(&mut self, index: usize) {
            if !self.open_faqs.remove(&index) {
                self.open_faqs.insert(index);
            }
        }

        fn set_phone_value(&mut self, value: &str) {
            self.phone = value.to_string();
        }

        fn spawn_ripple(&mut self, button: usize, ripple: &Ripple) {
            self.ripples.push((button, ripple.clone()));
        }

        fn focus_hero(&mut self) {
            self.hero_focused += 1;
        }
    }
}
