use log::{debug, info};

use crate::anchor::{AnchorScroll, ScrollMotion};
use crate::config::Config;
use crate::events::{PageEvent, Watched};
use crate::faq;
use crate::keyboard;
use crate::lead_form::{LeadForm, SUCCESS_MESSAGE};
use crate::nav::NavBar;
use crate::page::Page;
use crate::phone_mask::format_phone;
use crate::reveal::{Reveal, RevealPlan};
use crate::ripple::Ripple;
use crate::scheduler::{Scheduler, Timer};
use crate::sticky_cta::StickyCta;
use crate::toast::{Toast, ToastKind, ToastSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

/// Owns every piece of interaction state for one page session.
pub struct LandingController {
    motion: Motion,
    nav: NavBar,
    reveal: Reveal,
    reveal_plan: RevealPlan,
    anchors: AnchorScroll,
    lead_form: LeadForm,
    toasts: ToastSlot,
    sticky_cta: StickyCta,
    ripple_size_px: f64,
    ripple_duration_ms: u32,
}

impl LandingController {
    pub fn new(config: &Config, motion: Motion) -> Self {
        let scroll_motion = match motion {
            Motion::Full => ScrollMotion::Smooth,
            Motion::Reduced => ScrollMotion::Instant,
        };

        Self {
            motion,
            nav: NavBar::new(config.nav_scrolled_threshold_px),
            reveal: Reveal::default(),
            reveal_plan: RevealPlan {
                threshold: config.reveal_threshold,
                stagger_ms: config.reveal_stagger_ms,
            },
            anchors: AnchorScroll::new(config.anchor_offset_px, scroll_motion),
            lead_form: LeadForm::new(
                config.submit_latency_ms,
                config.confirmation_hold_ms,
                config.success_color.clone(),
            ),
            toasts: ToastSlot::new(config.toast_display_ms, config.toast_fade_ms),
            sticky_cta: StickyCta::default(),
            ripple_size_px: config.ripple_size_px,
            ripple_duration_ms: config.ripple_duration_ms,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn reveal_plan(&self) -> &RevealPlan {
        &self.reveal_plan
    }

    pub fn init<P: Page>(&mut self, page: &mut P, scroll_y: f64) {
        if self.motion == Motion::Full {
            page.prepare_reveal(&self.reveal_plan);
        }
        self.sticky_cta.init(page);
        self.nav.on_scroll(scroll_y, page);
        info!("Rapid Reply landing page initialized");
    }

    pub fn show_toast<P: Page, S: Scheduler>(
        &mut self,
        message: &str,
        kind: ToastKind,
        page: &mut P,
        scheduler: &mut S,
    ) {
        self.toasts.show(Toast::new(message, kind), page, scheduler);
    }

    pub fn handle<P: Page, S: Scheduler>(&mut self, event: PageEvent, page: &mut P, scheduler: &mut S) {
        match event {
            PageEvent::Scroll { y } => self.nav.on_scroll(y, page),
            PageEvent::Intersect(entry) => match entry.watched {
                Watched::Section(index) => {
                    if self.motion == Motion::Full {
                        self.reveal.on_intersect(index, entry.intersecting, page);
                    }
                }
                Watched::Landmark(landmark) => {
                    self.sticky_cta.on_intersect(landmark, entry.intersecting, page)
                }
            },
            PageEvent::AnchorClick(jump) => self.anchors.on_click(&jump, page),
            PageEvent::PrimaryClick { button, point } => {
                if self.motion == Motion::Full {
                    let ripple = Ripple::at(&point, self.ripple_size_px, self.ripple_duration_ms);
                    page.spawn_ripple(button, &ripple);
                }
            }
            PageEvent::PhoneInput(raw) => page.set_phone_value(&format_phone(&raw)),
            PageEvent::FaqKey { item, key } => {
                if faq::is_toggle_key(&key) {
                    page.toggle_faq(item);
                }
            }
            PageEvent::DocumentKey(press) => {
                if keyboard::skips_to_hero(&press) {
                    page.focus_hero();
                }
            }
            PageEvent::Submit(form) => {
                if let Err(err) = self.lead_form.submit(&form, page, scheduler) {
                    debug!("Audit form rejected: {:?}", err);
                    self.show_toast(&err.to_string(), ToastKind::Error, page, scheduler);
                }
            }
            PageEvent::Timer(timer) => self.on_timer(timer, page, scheduler),
        }
    }

    fn on_timer<P: Page, S: Scheduler>(&mut self, timer: Timer, page: &mut P, scheduler: &mut S) {
        debug!("Timer fired: {:?}", timer);
        match timer {
            Timer::SubmitConfirmed { cycle } => {
                if self.lead_form.on_confirmed(cycle, page, scheduler) {
                    self.show_toast(SUCCESS_MESSAGE, ToastKind::Success, page, scheduler);
                }
            }
            Timer::SubmitReset { cycle } => self.lead_form.on_reset(cycle, page),
            Timer::ToastFadeOut(id) => self.toasts.fade_out(id, page, scheduler),
            Timer::ToastRemove(id) => self.toasts.remove(id, page),
        }
    }
}
