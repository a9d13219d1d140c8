use std::collections::HashSet;

use crate::page::Page;

/// Card containers whose children reveal one after another.
pub const STAGGERED_GRIDS: &str =
    ".problem-grid, .benefits-grid, .testimonials-grid, .industry-grid, .comparison-grid";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealPlan {
    pub threshold: f64,
    pub stagger_ms: u32,
}

impl RevealPlan {
    pub fn delay_for(&self, card_index: usize) -> u32 {
        (card_index as u32).saturating_mul(self.stagger_ms)
    }
}

/// One-shot reveal of page sections as they scroll into view.
#[derive(Debug, Default)]
pub struct Reveal {
    revealed: HashSet<usize>,
}

impl Reveal {
    pub fn on_intersect<P: Page>(&mut self, section: usize, intersecting: bool, page: &mut P) {
        if intersecting && self.revealed.insert(section) {
            page.reveal_section(section);
        }
    }
}
