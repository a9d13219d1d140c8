use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Document, Window};

use crate::config::Config;
use crate::controller::{LandingController, Motion};
use crate::error::LandingError;
use crate::events::{self, PageEvent};
use crate::scheduler::{Scheduler, Timer};
use crate::web::dom_events::DomEvents;
use crate::web::dom_page::WebPage;
use crate::web::elements::PageElements;

const CONFIG_ATTR: &str = "data-landing-config";

struct Runtime {
    controller: LandingController,
    page: WebPage,
}

/// Schedules timers on the browser event loop. A timer that outlives the
/// runtime is dropped.
struct TimeoutScheduler {
    runtime: Weak<RefCell<Runtime>>,
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let runtime = self.runtime.clone();
        Timeout::new(delay_ms, move || {
            if let Some(runtime) = runtime.upgrade() {
                dispatch(&runtime, PageEvent::Timer(timer));
            }
        })
        .forget();
    }
}

fn dispatch(runtime: &Rc<RefCell<Runtime>>, event: PageEvent) {
    let mut scheduler = TimeoutScheduler {
        runtime: Rc::downgrade(runtime),
    };
    let Ok(mut guard) = runtime.try_borrow_mut() else {
        warn!("Dropped {:?}: controller busy", event);
        return;
    };
    let Runtime { controller, page } = &mut *guard;
    controller.handle(event, page, &mut scheduler);
}

fn read_config(document: &Document) -> Config {
    let Some(raw) = document.body().and_then(|body| body.get_attribute(CONFIG_ATTR)) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => {
            debug!("Using landing config overrides: {:?}", config);
            config
        }
        Err(err) => {
            warn!("Ignoring {}: {}", CONFIG_ATTR, err);
            Config::default()
        }
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Wires the controller into the live document. Called once per page load.
pub fn boot() -> Result<(), LandingError> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let document = window.document().ok_or(LandingError::NoDocument)?;

    let config = read_config(&document);
    let motion = if prefers_reduced_motion(&window) {
        Motion::Reduced
    } else {
        Motion::Full
    };
    let elements = PageElements::query(&window, &document);

    let mut controller = LandingController::new(&config, motion);
    let mut page = WebPage::new(elements.clone(), config.toast_fade_ms);
    controller.init(&mut page, window.scroll_y()?);

    let mut source = DomEvents::new(
        elements,
        controller.motion(),
        controller.reveal_plan().threshold,
        config.sticky_hero_threshold,
        config.sticky_final_threshold,
    );

    let runtime = Rc::new(RefCell::new(Runtime { controller, page }));
    events::wire(&mut source, Rc::new(move |event: PageEvent| dispatch(&runtime, event)));
    Ok(())
}
