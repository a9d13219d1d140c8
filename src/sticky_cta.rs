use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Hero,
    FinalCta,
}

/// Mobile call-to-action bar. Hidden while the hero is on screen and
/// once the final CTA section comes into view.
#[derive(Debug)]
pub struct StickyCta {
    hidden: bool,
}

impl Default for StickyCta {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl StickyCta {
    pub fn init<P: Page>(&mut self, page: &mut P) {
        self.hidden = true;
        page.set_sticky_cta_hidden(true);
    }

    pub fn on_intersect<P: Page>(&mut self, landmark: Landmark, intersecting: bool, page: &mut P) {
        let hidden = match landmark {
            Landmark::Hero => intersecting,
            Landmark::FinalCta if intersecting => true,
            Landmark::FinalCta => return,
        };
        if self.hidden != hidden {
            self.hidden = hidden;
            page.set_sticky_cta_hidden(hidden);
        }
    }
}
