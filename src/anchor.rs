use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

/// Geometry of an in-page link click, measured at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorJump {
    /// `getBoundingClientRect().top` of the target, if the href resolved.
    pub target_top: Option<f64>,
    pub page_y_offset: f64,
    pub nav_height: f64,
}

/// Only `#id`-style hrefs are looked up; a bare `#` goes nowhere.
pub fn target_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

pub fn scroll_target(jump: &AnchorJump, offset: f64) -> Option<f64> {
    jump.target_top
        .map(|top| top + jump.page_y_offset - jump.nav_height - offset)
}

#[derive(Debug)]
pub struct AnchorScroll {
    offset: f64,
    motion: ScrollMotion,
}

impl AnchorScroll {
    pub fn new(offset: f64, motion: ScrollMotion) -> Self {
        Self { offset, motion }
    }

    pub fn on_click<P: Page>(&self, jump: &AnchorJump, page: &mut P) {
        if let Some(top) = scroll_target(jump, self.offset) {
            page.scroll_window_to(top, self.motion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::RecordingPage;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#pricing", Some("#pricing"))]
    #[case("#", None)]
    #[case("/faq#pricing", None)]
    fn selector_from_href(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(target_selector(href), expected);
    }

    #[test]
    fn lands_below_the_nav() {
        let jump = AnchorJump {
            target_top: Some(400.0),
            page_y_offset: 1200.0,
            nav_height: 64.0,
        };
        assert_eq!(scroll_target(&jump, 20.0), Some(1516.0));
    }

    #[test]
    fn missing_target_does_not_scroll() {
        let anchors = AnchorScroll::new(20.0, ScrollMotion::Smooth);
        let mut page = RecordingPage::default();
        anchors.on_click(
            &AnchorJump { target_top: None, page_y_offset: 10.0, nav_height: 64.0 },
            &mut page,
        );
        assert!(page.scrolls.is_empty());
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        let anchors = AnchorScroll::new(20.0, ScrollMotion::Instant);
        let mut page = RecordingPage::default();
        anchors.on_click(
            &AnchorJump { target_top: Some(100.0), page_y_offset: 0.0, nav_height: 0.0 },
            &mut page,
        );
        assert_eq!(page.scrolls, vec![(80.0, ScrollMotion::Instant)]);
    }
}
