use log::{error, info};

mod anchor;
mod config;
mod controller;
mod error;
mod events;
mod faq;
mod keyboard;
mod lead_form;
mod nav;
mod page;
mod phone_mask;
mod reveal;
mod ripple;
mod scheduler;
mod sticky_cta;
mod toast;

mod components {
    pub mod toast_view;
}

mod web {
    pub mod dom_events;
    pub mod dom_page;
    pub mod elements;
    pub mod runtime;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page interactions");
    if let Err(err) = web::runtime::boot() {
        error!("Landing page interactions failed to start: {}", err);
    }
}
