use std::rc::Rc;

use crate::anchor::AnchorJump;
use crate::keyboard::KeyPress;
use crate::lead_form::FormState;
use crate::ripple::ClickPoint;
use crate::scheduler::Timer;
use crate::sticky_cta::Landmark;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll { y: f64 },
    Intersect(Intersection),
    AnchorClick(AnchorJump),
    PrimaryClick { button: usize, point: ClickPoint },
    PhoneInput(String),
    FaqKey { item: usize, key: String },
    DocumentKey(KeyPress),
    Submit(FormState),
    Timer(Timer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watched {
    Section(usize),
    Landmark(Landmark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub watched: Watched,
    pub intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Click {
    Anchor(AnchorJump),
    Primary { button: usize, point: ClickPoint },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputField {
    Phone(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDown {
    Document(KeyPress),
    FaqSummary { item: usize, key: String },
}

pub type Handler<T> = Box<dyn FnMut(T)>;

/// Subscription side of the document. Implementations decide which
/// elements feed each stream; `wire` only turns them into `PageEvent`s.
pub trait EventSource {
    fn on_scroll(&mut self, handler: Handler<f64>);
    fn on_click(&mut self, handler: Handler<Click>);
    fn on_input(&mut self, handler: Handler<InputField>);
    fn on_intersect(&mut self, handler: Handler<Intersection>);
    fn on_keydown(&mut self, handler: Handler<KeyDown>);
    fn on_submit(&mut self, handler: Handler<FormState>);
}

pub fn wire<E: EventSource>(source: &mut E, dispatch: Rc<dyn Fn(PageEvent)>) {
    {
        let dispatch = dispatch.clone();
        source.on_scroll(Box::new(move |y: f64| dispatch(PageEvent::Scroll { y })));
    }
    {
        let dispatch = dispatch.clone();
        source.on_intersect(Box::new(move |entry: Intersection| dispatch(PageEvent::Intersect(entry))));
    }
    {
        let dispatch = dispatch.clone();
        source.on_click(Box::new(move |click: Click| {
            dispatch(match click {
                Click::Anchor(jump) => PageEvent::AnchorClick(jump),
                Click::Primary { button, point } => PageEvent::PrimaryClick { button, point },
            })
        }));
    }
    {
        let dispatch = dispatch.clone();
        source.on_input(Box::new(move |input: InputField| match input {
            InputField::Phone(value) => dispatch(PageEvent::PhoneInput(value)),
        }));
    }
    {
        let dispatch = dispatch.clone();
        source.on_keydown(Box::new(move |key: KeyDown| {
            dispatch(match key {
                KeyDown::Document(press) => PageEvent::DocumentKey(press),
                KeyDown::FaqSummary { item, key } => PageEvent::FaqKey { item, key },
            })
        }));
    }
    source.on_submit(Box::new(move |form: FormState| dispatch(PageEvent::Submit(form))));
}
