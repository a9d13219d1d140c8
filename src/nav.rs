use crate::page::Page;

/// Adds the `scrolled` style to the sticky nav once the page has moved
/// past a small threshold.
#[derive(Debug)]
pub struct NavBar {
    threshold: f64,
    last_scroll_y: f64,
    scrolled: Option<bool>,
}

impl NavBar {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_scroll_y: 0.0,
            scrolled: None,
        }
    }

    pub fn on_scroll<P: Page>(&mut self, scroll_y: f64, page: &mut P) {
        if self.scrolled.is_some() && scroll_y == self.last_scroll_y {
            return;
        }

        let scrolled = scroll_y > self.threshold;
        if self.scrolled != Some(scrolled) {
            page.set_nav_scrolled(scrolled);
            self.scrolled = Some(scrolled);
        }
        self.last_scroll_y = scroll_y;
    }
}
